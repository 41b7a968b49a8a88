use crate::schema::Schema;
use crate::types::TypeRef;
use crate::utilities::build_schema;
use crate::utilities::coerce_input_value;
use crate::utilities::coerce_input_value_with;
use crate::Value;
use serde_json::json;

fn schema() -> Schema {
    build_schema(
        "input Point { x: Int! y: Int = 0 }
         enum Color { RED GREEN }
         input Brush { color: Color! points: [Point!] }
         type Query { draw(brush: Brush): Boolean }",
    )
    .unwrap()
}

fn failures(value: Value, ty: TypeRef) -> Vec<(String, String)> {
    let mut seen = vec![];
    coerce_input_value_with(&value, &ty, &schema(), &mut |failure| {
        seen.push((failure.path_suffix(), failure.error.message().to_string()));
    });
    seen
}

#[test]
fn input_objects_take_field_defaults() {
    assert_eq!(
        coerce_input_value(&json!({"x": 1}), &TypeRef::named("Point"), &schema()).unwrap(),
        json!({"x": 1, "y": 0}),
    );
}

#[test]
fn lone_values_become_lists_of_one() {
    let ints = TypeRef::named("Int").list();
    assert_eq!(coerce_input_value(&json!(7), &ints, &schema()).unwrap(), json!([7]));
    assert_eq!(coerce_input_value(&json!([1, 2]), &ints, &schema()).unwrap(), json!([1, 2]));
    assert_eq!(coerce_input_value(&Value::Null, &ints, &schema()).unwrap(), Value::Null);
}

#[test]
fn first_failure_is_reported_with_its_path() {
    let error = coerce_input_value(
        &json!({"color": "RED", "points": [{"x": 1}, {"x": "a"}]}),
        &TypeRef::named("Brush"),
        &schema(),
    )
    .unwrap_err();
    assert_eq!(
        error.message(),
        "Invalid value \"a\" at 'value.points[1].x': Int cannot represent non-integer value: \"a\"",
    );
}

#[test]
fn null_for_non_null_type() {
    let error =
        coerce_input_value(&Value::Null, &TypeRef::named("Int").non_null(), &schema()).unwrap_err();
    assert_eq!(
        error.message(),
        "Invalid value null: Expected non-nullable type 'Int!' not to be null.",
    );
}

#[test]
fn every_failure_is_collected() {
    assert_eq!(
        failures(json!({"y": "b", "colour": 1}), TypeRef::named("Point")),
        vec![
            (
                String::new(),
                "Field 'x' of required type 'Int!' was not provided.".to_string(),
            ),
            (
                ".y".to_string(),
                "Int cannot represent non-integer value: \"b\"".to_string(),
            ),
            (
                String::new(),
                "Field 'colour' is not defined by type 'Point'.".to_string(),
            ),
        ],
    );
}

#[test]
fn enum_values_are_checked() {
    assert_eq!(
        failures(json!({"color": "GREENN"}), TypeRef::named("Brush")),
        vec![(
            ".color".to_string(),
            "Value 'GREENN' does not exist in 'Color' enum. Did you mean the enum value 'GREEN'?"
                .to_string(),
        )],
    );
    assert_eq!(
        coerce_input_value(&json!({"color": "GREEN"}), &TypeRef::named("Brush"), &schema())
            .unwrap(),
        json!({"color": "GREEN"}),
    );
}

#[test]
fn input_objects_must_be_objects() {
    assert_eq!(
        failures(json!("point"), TypeRef::named("Point")),
        vec![(String::new(), "Expected type 'Point' to be an object.".to_string())],
    );
}
