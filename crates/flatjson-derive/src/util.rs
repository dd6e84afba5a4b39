use syn::{Generics, Type, WhereClause, WherePredicate, parse_quote};

// Copy the record's where clause and require `Flatten` on each given field
// type. Returns the clause untouched when there is nothing to add.
pub fn flatten_where_clause<'a>(
    generics: &Generics,
    field_types: impl IntoIterator<Item = &'a Type>,
) -> Option<WhereClause> {
    let mut clause = generics.where_clause.clone();

    let predicates: Vec<WherePredicate> = field_types
        .into_iter()
        .map(|ty| parse_quote!(#ty: ::flatjson::traits::Flatten))
        .collect();
    if predicates.is_empty() {
        return clause;
    }

    clause
        .get_or_insert_with(|| parse_quote!(where))
        .predicates
        .extend(predicates);

    clause
}
