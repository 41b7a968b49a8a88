use crate::types::boolean_scalar;
use crate::types::float_scalar;
use crate::types::id_scalar;
use crate::types::int_scalar;
use crate::types::string_scalar;
use crate::types::ScalarType;
use crate::types::GRAPHQL_MAX_INT;
use crate::types::GRAPHQL_MIN_INT;
use crate::Value;
use graphql_engine_parser::parse_const_value;
use proptest::prelude::*;
use serde_json::json;

fn message(result: Result<Value, graphql_engine_parser::GraphQLError>) -> String {
    result.unwrap_err().message().to_string()
}

// =============================================================================
// Int
// =============================================================================

#[test]
fn int_serializes_integral_values() {
    let int = int_scalar();
    assert_eq!(int.serialize(&json!(1)).unwrap(), json!(1));
    assert_eq!(int.serialize(&json!(1.0)).unwrap(), json!(1));
    assert_eq!(int.serialize(&json!("-12")).unwrap(), json!(-12));
    assert_eq!(int.serialize(&json!(true)).unwrap(), json!(1));
    assert_eq!(
        message(int.serialize(&json!(1.5))),
        "Int cannot represent non-integer value: 1.5",
    );
    assert_eq!(
        message(int.serialize(&json!(2_147_483_648_i64))),
        "Int cannot represent non 32-bit signed integer value: 2147483648",
    );
    assert_eq!(
        message(int.serialize(&json!(""))),
        "Int cannot represent non-integer value: \"\"",
    );
}

#[test]
fn int_inputs_are_strict() {
    let int = int_scalar();
    assert_eq!(int.parse_value(&json!(7)).unwrap(), json!(7));
    assert_eq!(
        message(int.parse_value(&json!("7"))),
        "Int cannot represent non-integer value: \"7\"",
    );
    assert_eq!(
        message(int.parse_value(&json!(true))),
        "Int cannot represent non-integer value: true",
    );
    let literal = parse_const_value("2147483648").unwrap();
    assert_eq!(
        message(int.parse_literal(&literal, None)),
        "Int cannot represent non 32-bit signed integer value: 2147483648",
    );
    let literal = parse_const_value("1.0").unwrap();
    assert_eq!(
        message(int.parse_literal(&literal, None)),
        "Int cannot represent non-integer value: 1.0",
    );
}

// =============================================================================
// Float, String, Boolean and ID
// =============================================================================

#[test]
fn float_coercion() {
    let float = float_scalar();
    assert_eq!(float.serialize(&json!("1.5")).unwrap(), json!(1.5));
    assert_eq!(float.parse_value(&json!(3)).unwrap(), json!(3.0));
    assert_eq!(float.serialize(&json!(1)).unwrap(), json!(1.0));
    assert_eq!(float.serialize(&json!(true)).unwrap(), json!(1.0));
    assert_eq!(float.serialize(&json!(1)).unwrap().to_string(), "1.0");
    assert_eq!(
        float.parse_literal(&parse_const_value("3").unwrap(), None).unwrap(),
        json!(3.0),
    );
    assert_eq!(
        message(float.parse_value(&json!("1.5"))),
        "Float cannot represent non numeric value: \"1.5\"",
    );
}

#[test]
fn string_coercion() {
    let string = string_scalar();
    assert_eq!(string.serialize(&json!(true)).unwrap(), json!("true"));
    assert_eq!(string.serialize(&json!(-1.5)).unwrap(), json!("-1.5"));
    assert_eq!(
        message(string.serialize(&json!([1]))),
        "String cannot represent value: [1]",
    );
    assert_eq!(
        message(string.parse_value(&json!(1))),
        "String cannot represent a non string value: 1",
    );
}

#[test]
fn boolean_coercion() {
    let boolean = boolean_scalar();
    assert_eq!(boolean.serialize(&json!(0)).unwrap(), json!(false));
    assert_eq!(boolean.serialize(&json!(2)).unwrap(), json!(true));
    assert_eq!(
        message(boolean.parse_value(&json!(1))),
        "Boolean cannot represent a non boolean value: 1",
    );
}

#[test]
fn id_accepts_strings_and_integers() {
    let id = id_scalar();
    assert_eq!(id.serialize(&json!(123)).unwrap(), json!("123"));
    assert_eq!(id.parse_value(&json!("abc")).unwrap(), json!("abc"));
    assert_eq!(
        id.parse_literal(&parse_const_value("42").unwrap(), None).unwrap(),
        json!("42"),
    );
    assert_eq!(message(id.parse_value(&json!(true))), "ID cannot represent value: true");
    assert_eq!(
        message(id.parse_literal(&parse_const_value("1.5").unwrap(), None)),
        "ID cannot represent a non-string and non-integer value: 1.5",
    );
}

#[test]
fn custom_scalars_pass_values_through() {
    let json_scalar = ScalarType::new("JSON");
    let literal = parse_const_value("{a: [1, \"b\", null]}").unwrap();
    assert_eq!(
        json_scalar.parse_literal(&literal, None).unwrap(),
        json!({"a": [1, "b", null]}),
    );
    assert_eq!(json_scalar.serialize(&json!({"x": 1})).unwrap(), json!({"x": 1}));
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn int_accepts_exactly_the_32_bit_range(num in any::<i64>()) {
        let in_range = (GRAPHQL_MIN_INT..=GRAPHQL_MAX_INT).contains(&num);
        let parsed = int_scalar().parse_value(&json!(num));
        prop_assert_eq!(parsed.is_ok(), in_range);
        if in_range {
            prop_assert_eq!(parsed.unwrap(), json!(num));
        }
    }

    #[test]
    fn int_literals_agree_with_int_values(num in any::<i64>()) {
        let literal = parse_const_value(num.to_string()).unwrap();
        let from_literal = int_scalar().parse_literal(&literal, None).ok();
        let from_value = int_scalar().parse_value(&json!(num)).ok();
        prop_assert_eq!(from_literal, from_value);
    }

    #[test]
    fn finite_floats_round_trip(num in -1.0e12_f64..1.0e12) {
        let float = float_scalar();
        prop_assert_eq!(float.parse_value(&json!(num)).unwrap(), json!(num));
        prop_assert_eq!(float.serialize(&json!(num)).unwrap(), json!(num));
    }
}
