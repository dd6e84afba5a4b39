use flatjson::{
    FlatMap, FlattenError, Value, flatten,
    prelude::{Dynamic, Record},
};
use proptest::prelude::*;

#[derive(Clone, Debug, Default, Record)]
pub struct Child {
    #[flat(rename = "CC")]
    pub c: i64,
    #[flat(rename = "CD")]
    pub d: String,
}

impl Child {
    fn new(c: i64, d: &str) -> Self {
        Self {
            c,
            d: d.to_string(),
        }
    }
}

// Encode with serde_json and decode back, the way a downstream consumer
// would see the map.
fn round_trip(flat: &FlatMap) -> FlatMap {
    let encoded = serde_json::to_string(flat).expect("encode");
    serde_json::from_str(&encoded).expect("decode")
}

fn assert_flattens_to<T: flatjson::traits::Flatten>(value: &T, expected: &[(&str, Value)]) {
    let flat = flatten(value).expect("flatten");
    let got = round_trip(&flat);

    let expected: FlatMap = expected
        .iter()
        .map(|(key, value)| (*key, value.clone()))
        .collect();

    assert_eq!(got, expected, "got {got:#?}");
    assert!(got.values().all(|v| !matches!(v, Value::Int(_) | Value::Uint(_))));
}

#[test]
fn basic_flatten() {
    #[derive(Record)]
    pub struct Basic {
        #[flat(rename = "A")]
        pub a: i64,
        #[flat(rename = "B")]
        pub b: String,
    }

    let value = Basic {
        a: 10,
        b: "str".to_string(),
    };

    assert_flattens_to(
        &value,
        &[
            ("A", Value::Float(10.0)),
            ("B", Value::Text("str".to_string())),
        ],
    );
}

#[test]
fn embedded_flatten() {
    #[derive(Default, Record)]
    pub struct Embedding {
        #[flat(embed)]
        pub child: Child,
        #[flat(rename = "Other")]
        pub other: Child,
        #[flat(rename = "A")]
        pub a: i64,
    }

    assert_flattens_to(
        &Embedding::default(),
        &[
            ("A", Value::Float(0.0)),
            ("CC", Value::Float(0.0)),
            ("CD", Value::Text(String::new())),
            ("Other.CC", Value::Float(0.0)),
            ("Other.CD", Value::Text(String::new())),
        ],
    );
}

#[test]
fn indirection() {
    #[derive(Record)]
    pub struct Indirection {
        #[flat(embed)]
        pub child: Option<Box<Child>>,
        #[flat(rename = "O1")]
        pub other1: Dynamic,
        #[flat(rename = "O2")]
        pub other2: Option<Box<Option<Box<Child>>>>,
        #[flat(omit_empty)]
        pub other3: Option<Box<Child>>,
    }

    let value = Indirection {
        child: Some(Box::new(Child::new(1, "2"))),
        other1: Dynamic::new(Box::new(Child::new(3, "4"))),
        other2: Some(Box::new(Some(Box::new(Child::new(5, "6"))))),
        other3: None,
    };

    assert_flattens_to(
        &value,
        &[
            ("CC", Value::Float(1.0)),
            ("CD", Value::Text("2".to_string())),
            ("O1.CC", Value::Float(3.0)),
            ("O1.CD", Value::Text("4".to_string())),
            ("O2.CC", Value::Float(5.0)),
            ("O2.CD", Value::Text("6".to_string())),
        ],
    );
}

#[test]
fn suppressed_record_contributes_nothing() {
    #[derive(Default, Record)]
    pub struct Holder {
        #[flat(skip)]
        pub secret: Child,
        #[flat(embed, rename = "-")]
        pub hidden: Child,
        pub visible: bool,
    }

    let flat = flatten(&Holder::default()).expect("flatten");

    assert_eq!(flat.keys().collect::<Vec<_>>(), vec!["visible"]);
}

#[test]
fn non_record_root_is_an_error() {
    let err = flatten("plain text").expect_err("text root");

    assert!(matches!(err, FlattenError::InvalidRoot { .. }));
    assert_eq!(
        err.to_string(),
        "root is not a flattenable record: found text"
    );
}

#[test]
fn concurrent_calls_share_one_input() {
    #[derive(Default, Record)]
    pub struct Shared {
        #[flat(embed)]
        pub child: Child,
        pub any: Dynamic,
    }

    let shared = Shared {
        child: Child::new(9, "z"),
        any: Dynamic::new(42u32),
    };
    let expected = flatten(&shared).expect("flatten");
    let shared = &shared;

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(move || flatten(shared)))
            .collect();

        for handle in handles {
            let flat = handle.join().expect("thread").expect("flatten");
            assert_eq!(flat, expected);
        }
    });
}

proptest! {
    #[test]
    fn indirection_transparency(c in any::<i64>(), d in "[a-z]{0,6}") {
        let child = Child { c, d };

        let direct = flatten(&child).expect("flatten");
        let one = flatten(&Some(child.clone())).expect("flatten");
        let two = flatten(&Some(Box::new(Some(child.clone())))).expect("flatten");

        prop_assert_eq!(&direct, &one);
        prop_assert_eq!(&direct, &two);
    }
}
