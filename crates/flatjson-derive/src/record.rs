use crate::util::flatten_where_clause;
use darling::{FromDeriveInput, FromField, ast::Data, util::Ignored};
use proc_macro2::TokenStream;
use quote::quote;
use syn::{DeriveInput, Generics, Ident, Type, Visibility};

const SKIP_NAME: &str = "-";

///
/// RecordInput
///

#[derive(FromDeriveInput)]
#[darling(supports(struct_named, struct_unit))]
struct RecordInput {
    ident: Ident,
    generics: Generics,
    data: Data<Ignored, RecordField>,
}

///
/// RecordField
///

#[derive(FromField)]
#[darling(attributes(flat))]
struct RecordField {
    ident: Option<Ident>,
    ty: Type,
    vis: Visibility,

    #[darling(default)]
    rename: Option<String>,

    #[darling(default)]
    skip: bool,

    #[darling(default)]
    omit_empty: bool,

    #[darling(default)]
    embed: bool,
}

impl RecordField {
    fn validate(&self) -> darling::Result<()> {
        let mut errors = darling::Error::accumulator();

        if let Some(rename) = &self.rename {
            if rename.is_empty() {
                errors.push(
                    darling::Error::custom("`rename` must not be empty").with_span(&self.ty),
                );
            }

            if self.skip {
                errors.push(
                    darling::Error::custom("`skip` already suppresses the field; drop `rename`")
                        .with_span(&self.ty),
                );
            }

            if self.embed && rename != SKIP_NAME {
                errors.push(
                    darling::Error::custom("an embedded field has no key of its own; drop `rename`")
                        .with_span(&self.ty),
                );
            }
        }

        errors.finish()
    }

    fn is_exported(&self) -> bool {
        !matches!(self.vis, Visibility::Inherited)
    }

    fn is_skipped(&self) -> bool {
        self.skip || self.rename.as_deref() == Some(SKIP_NAME)
    }

    // only visible fields get accessors and trait bounds
    fn is_visible(&self) -> bool {
        self.is_exported() && !self.is_skipped()
    }

    fn descriptor(&self) -> TokenStream {
        let name = self.ident.as_ref().expect("named field").to_string();
        let mut expr = quote!(::flatjson::model::field::FieldDescriptor::new(#name));

        if self.skip {
            expr = quote!(#expr.skip());
        } else if let Some(rename) = &self.rename {
            expr = quote!(#expr.rename(#rename));
        }
        if self.embed {
            expr = quote!(#expr.embedded());
        }
        if self.omit_empty {
            expr = quote!(#expr.omit_empty());
        }
        if !self.is_exported() {
            expr = quote!(#expr.private());
        }

        expr
    }
}

// derive_record
pub fn derive_record(input: TokenStream) -> TokenStream {
    let input: DeriveInput = match syn::parse2(input) {
        Ok(input) => input,
        Err(err) => return err.to_compile_error(),
    };

    let record = match RecordInput::from_derive_input(&input) {
        Ok(record) => record,
        Err(err) => return err.write_errors(),
    };

    let fields = match record.data {
        Data::Struct(fields) => fields.fields,
        Data::Enum(_) => unreachable!("darling rejects enums"),
    };

    let mut errors = darling::Error::accumulator();
    for field in &fields {
        if let Err(err) = field.validate() {
            errors.push(err);
        }
    }
    if let Err(err) = errors.finish() {
        return err.write_errors();
    }

    let ident = &record.ident;
    let generics = &record.generics;
    let (impl_generics, ty_generics, _) = generics.split_for_impl();

    // concrete field types need no bound; only generic records get one
    let where_clause = if generics.type_params().next().is_some() {
        flatten_where_clause(
            generics,
            fields.iter().filter(|f| f.is_visible()).map(|f| &f.ty),
        )
    } else {
        generics.where_clause.clone()
    };

    let descriptors = fields.iter().map(RecordField::descriptor);

    let accessor_arms = fields
        .iter()
        .enumerate()
        .filter(|(_, f)| f.is_visible())
        .map(|(index, f)| {
            let field_ident = f.ident.as_ref().expect("named field");

            quote! {
                #index => Some(&self.#field_ident as &dyn ::flatjson::traits::Flatten),
            }
        });

    quote! {
        impl #impl_generics ::flatjson::traits::Record for #ident #ty_generics #where_clause {
            fn fields(&self) -> &'static [::flatjson::model::field::FieldDescriptor] {
                const FIELDS: &[::flatjson::model::field::FieldDescriptor] = &[
                    #(#descriptors),*
                ];

                FIELDS
            }

            #[allow(clippy::match_single_binding)]
            fn field(&self, index: usize) -> Option<&dyn ::flatjson::traits::Flatten> {
                match index {
                    #(#accessor_arms)*
                    _ => None,
                }
            }
        }

        impl #impl_generics ::flatjson::traits::Flatten for #ident #ty_generics #where_clause {
            fn node(&self) -> ::flatjson::traits::Node<'_> {
                ::flatjson::traits::Node::Record(self)
            }
        }
    }
}
