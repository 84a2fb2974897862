//! Exact-output conformance tests for the encoder.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_application::to_string;

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Limits {
    #[serde(rename = "Smallest")]
    smallest: i64,
    #[serde(rename = "Largest")]
    largest: u64,
}

#[test]
fn booleans_render_capitalized() {
    #[derive(Serialize)]
    struct Flags {
        #[serde(rename = "On")]
        on: bool,
        #[serde(rename = "Off")]
        off: bool,
    }

    let text = to_string(&Flags { on: true, off: false }).unwrap();
    assert_eq!(text, "On: True\r\nOff: False\r\n");
}

#[test]
fn lines_are_crlf_terminated_with_no_trailing_blank() {
    let text = to_string(&Limits {
        smallest: i64::MIN,
        largest: u64::MAX,
    })
    .unwrap();
    assert_eq!(
        text,
        "Smallest: -9223372036854775808\r\nLargest: 18446744073709551615\r\n"
    );
    assert!(!text.ends_with("\r\n\r\n"));
}

#[test]
fn floats_render_shortest_non_exponential() {
    #[derive(Serialize)]
    struct Ratios {
        #[serde(rename = "Half")]
        half: f64,
        #[serde(rename = "Fifty")]
        fifty: f64,
        #[serde(rename = "Whole")]
        whole: f64,
    }

    let text = to_string(&Ratios {
        half: 0.5,
        fifty: 0.55,
        whole: 3.0,
    })
    .unwrap();
    assert_eq!(text, "Half: 0.5\r\nFifty: 0.55\r\nWhole: 3\r\n");
}

#[test]
fn decimals_render_with_stored_scale() {
    #[derive(Serialize)]
    struct Prices {
        #[serde(rename = "Unit")]
        unit: Decimal,
        #[serde(rename = "Exact")]
        exact: Decimal,
    }

    // Decimal keeps its scale, so one-at-scale-2 renders with its zeros.
    let text = to_string(&Prices {
        unit: Decimal::ONE,
        exact: Decimal::new(100, 2),
    })
    .unwrap();
    assert_eq!(text, "Unit: 1\r\nExact: 1.00\r\n");
}

#[test]
fn strings_render_verbatim() {
    #[derive(Serialize)]
    struct Notes {
        #[serde(rename = "Motto")]
        motto: String,
    }

    let text = to_string(&Notes {
        motto: "per aspera: ad astra".to_string(),
    })
    .unwrap();
    assert_eq!(text, "Motto: per aspera: ad astra\r\n");
}

#[test]
fn declaration_order_is_preserved() {
    #[derive(Serialize)]
    struct Ordered {
        #[serde(rename = "Zulu")]
        zulu: i32,
        #[serde(rename = "Alpha")]
        alpha: i32,
        #[serde(rename = "Mike")]
        mike: i32,
    }

    let text = to_string(&Ordered {
        zulu: 1,
        alpha: 2,
        mike: 3,
    })
    .unwrap();
    assert_eq!(text, "Zulu: 1\r\nAlpha: 2\r\nMike: 3\r\n");
}

#[test]
fn chars_render_unquoted() {
    #[derive(Serialize)]
    struct Markers {
        #[serde(rename = "Bang")]
        bang: char,
        #[serde(rename = "Accent")]
        accent: char,
    }

    let text = to_string(&Markers {
        bang: '!',
        accent: 'é',
    })
    .unwrap();
    assert_eq!(text, "Bang: !\r\nAccent: é\r\n");
}
