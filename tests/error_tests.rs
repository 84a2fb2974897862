use serde::{Deserialize, Serialize};
use serde_application::{from_str, from_str_with_options, to_string, ApplicationOptions, Error, ScalarKind};

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct OneBool {
    #[serde(rename = "Bool")]
    flag: bool,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Numbers {
    #[serde(rename = "Byte")]
    byte: u8,
    #[serde(rename = "Int")]
    int: i32,
    #[serde(rename = "Double")]
    double: f64,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Empty {}

#[test]
fn empty_input_is_rejected() {
    assert!(matches!(from_str::<OneBool>(""), Err(Error::EmptyInput)));
    assert!(matches!(from_str::<OneBool>("   "), Err(Error::EmptyInput)));
    assert!(matches!(
        from_str::<OneBool>(" \n \r\n "),
        Err(Error::EmptyInput)
    ));
}

#[test]
fn line_without_separator_is_malformed() {
    let err = from_str::<OneBool>("no separator here").unwrap_err();
    assert!(matches!(err, Error::MalformedLine { line: 1 }));
}

#[test]
fn blank_line_is_malformed() {
    // No blank-line tolerance: an empty line has no ':' either.
    let err = from_str::<Numbers>("Byte: 1\n\nInt: 2").unwrap_err();
    assert!(matches!(err, Error::MalformedLine { line: 2 }));
}

#[test]
fn first_offending_line_wins() {
    let err = from_str::<Numbers>("Byte: 1\nbogus\nalso bogus").unwrap_err();
    assert!(matches!(err, Error::MalformedLine { line: 2 }));
}

#[test]
fn errors_surface_in_document_order() {
    // Line 1's bad value is reported before line 2's unknown key is reached.
    let err = from_str::<Numbers>("Byte: lots\nUnknown: 2").unwrap_err();
    assert!(matches!(
        err,
        Error::CoercionFailure {
            kind: ScalarKind::U8,
            ..
        }
    ));
}

#[test]
fn unknown_key_is_missing_field() {
    let err = from_str::<OneBool>("Flag: true").unwrap_err();
    assert!(matches!(err, Error::MissingField { name } if name == "Flag"));
}

#[test]
fn case_mismatch_is_missing_field_by_default() {
    let err = from_str::<OneBool>("bOoL:true").unwrap_err();
    assert!(matches!(err, Error::MissingField { name } if name == "bOoL"));
}

#[test]
fn key_with_whitespace_does_not_resolve() {
    let options = ApplicationOptions::new().with_case_insensitive_fields(true);
    let err = from_str_with_options::<OneBool>("Bool : true", options).unwrap_err();
    assert!(matches!(err, Error::MissingField { name } if name == "Bool "));
}

#[test]
fn overflow_is_a_coercion_failure() {
    let err = from_str::<Numbers>("Byte: 256\nInt: 1\nDouble: 0.5").unwrap_err();
    assert!(matches!(
        err,
        Error::CoercionFailure {
            kind: ScalarKind::U8,
            ref value,
        } if value == "256"
    ));
}

#[test]
fn malformed_number_is_a_coercion_failure() {
    let err = from_str::<Numbers>("Byte: 1\nInt: ten\nDouble: 0.5").unwrap_err();
    assert!(matches!(
        err,
        Error::CoercionFailure {
            kind: ScalarKind::I32,
            ..
        }
    ));

    let err = from_str::<Numbers>("Byte: 1\nInt: 2\nDouble: 0.5.5").unwrap_err();
    assert!(matches!(
        err,
        Error::CoercionFailure {
            kind: ScalarKind::Double,
            ..
        }
    ));
}

#[test]
fn bad_boolean_literal_is_a_coercion_failure() {
    let err = from_str::<OneBool>("Bool: yes").unwrap_err();
    assert!(matches!(
        err,
        Error::CoercionFailure {
            kind: ScalarKind::Bool,
            ..
        }
    ));
}

#[test]
fn multi_character_value_fails_char_field() {
    #[derive(Deserialize, Debug)]
    struct OneChar {
        #[serde(rename = "Char")]
        ch: char,
    }

    let err = from_str::<OneChar>("Char: !!").unwrap_err();
    assert!(matches!(
        err,
        Error::CoercionFailure {
            kind: ScalarKind::Char,
            ref value,
        } if value == "!!"
    ));
}

#[test]
fn missing_non_optional_field_is_an_error() {
    let err = from_str::<Numbers>("Byte: 1\nInt: 2").unwrap_err();
    assert!(matches!(err, Error::Message(_)));
}

#[test]
fn fieldless_record_cannot_encode() {
    let err = to_string(&Empty {}).unwrap_err();
    assert!(matches!(err, Error::NoFields { record } if record == "Empty"));
}

#[test]
fn sequence_field_is_unsupported_both_ways() {
    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct WithList {
        #[serde(rename = "Tags")]
        tags: Vec<String>,
    }

    let encode_err = to_string(&WithList { tags: vec![] }).unwrap_err();
    assert!(matches!(encode_err, Error::UnsupportedKind { ref kind } if kind == "sequence"));

    let decode_err = from_str::<WithList>("Tags: a").unwrap_err();
    assert!(matches!(decode_err, Error::UnsupportedKind { ref kind } if kind == "sequence"));
}

#[test]
fn nested_record_field_is_unsupported_both_ways() {
    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Inner {
        x: i32,
    }

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Outer {
        #[serde(rename = "Inner")]
        inner: Inner,
    }

    let encode_err = to_string(&Outer { inner: Inner { x: 1 } }).unwrap_err();
    assert!(matches!(encode_err, Error::UnsupportedKind { ref kind } if kind == "nested record"));

    let decode_err = from_str::<Outer>("Inner: x").unwrap_err();
    assert!(matches!(decode_err, Error::UnsupportedKind { ref kind } if kind == "nested record"));
}

#[test]
fn f32_field_is_unsupported_both_ways() {
    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Narrow {
        #[serde(rename = "Ratio")]
        ratio: f32,
    }

    let encode_err = to_string(&Narrow { ratio: 0.5 }).unwrap_err();
    assert!(matches!(encode_err, Error::UnsupportedKind { ref kind } if kind == "f32"));

    let decode_err = from_str::<Narrow>("Ratio: 0.5").unwrap_err();
    assert!(matches!(decode_err, Error::UnsupportedKind { ref kind } if kind == "f32"));
}

#[test]
fn non_record_roots_are_unsupported() {
    let encode_err = to_string(&vec![1, 2, 3]).unwrap_err();
    assert!(matches!(encode_err, Error::UnsupportedKind { .. }));

    let decode_err = from_str::<Vec<i32>>("1").unwrap_err();
    assert!(matches!(decode_err, Error::UnsupportedKind { .. }));
}

#[test]
fn bad_decimal_value_is_an_error() {
    use rust_decimal::Decimal;

    #[derive(Deserialize)]
    struct Money {
        #[serde(rename = "Total")]
        total: Decimal,
    }

    assert!(from_str::<Money>("Total: lots").is_err());

    let ok: Money = from_str("Total: 1.5").unwrap();
    assert_eq!(ok.total, Decimal::new(15, 1));
}

#[test]
fn errors_abort_without_partial_results() {
    // The second line is bad, so the whole decode fails even though the
    // first pair was valid.
    let result = from_str::<Numbers>("Byte: 1\nInt: oops\nDouble: 0.5");
    assert!(result.is_err());
}
