use crate::types::EnumType;
use crate::types::EnumValue;
use graphql_engine_parser::parse_const_value;
use serde_json::json;

fn color() -> EnumType {
    EnumType::new("Color")
        .value(EnumValue::new("RED").internal_value(json!(0)))
        .value(EnumValue::new("GREEN").internal_value(json!(1)))
        .value(EnumValue::new("BLUE").deprecated("Use GREEN"))
}

#[test]
fn serializes_internal_values_to_names() {
    let color = color();
    assert_eq!(color.serialize(&json!(1)).unwrap(), json!("GREEN"));
    assert_eq!(color.serialize(&json!("BLUE")).unwrap(), json!("BLUE"));
    assert_eq!(
        color.serialize(&json!(7)).unwrap_err().message(),
        "Enum 'Color' cannot represent value: 7",
    );
}

#[test]
fn parses_names_to_internal_values() {
    let color = color();
    assert_eq!(color.parse_value(&json!("RED")).unwrap(), json!(0));
    assert_eq!(
        color
            .parse_literal(&parse_const_value("GREEN").unwrap())
            .unwrap(),
        json!(1),
    );
    assert!(color.get_value("BLUE").is_some_and(EnumValue::is_deprecated));
}

#[test]
fn unknown_names_get_suggestions() {
    let color = color();
    assert_eq!(
        color.parse_value(&json!("red")).unwrap_err().message(),
        "Value 'red' does not exist in 'Color' enum. Did you mean the enum value 'RED'?",
    );
    assert_eq!(
        color
            .parse_literal(&parse_const_value("GREENN").unwrap())
            .unwrap_err()
            .message(),
        "Value 'GREENN' does not exist in 'Color' enum. Did you mean the enum value 'GREEN'?",
    );
}

#[test]
fn non_enum_inputs_are_rejected() {
    let color = color();
    assert_eq!(
        color.parse_value(&json!(0)).unwrap_err().message(),
        "Enum 'Color' cannot represent non-string value: 0.",
    );
    assert_eq!(
        color
            .parse_literal(&parse_const_value("\"BLUE\"").unwrap())
            .unwrap_err()
            .message(),
        "Enum 'Color' cannot represent non-enum value: \"BLUE\". Did you mean the enum value 'BLUE'?",
    );
}
