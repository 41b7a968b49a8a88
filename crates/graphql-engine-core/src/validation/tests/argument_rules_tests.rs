use super::expect_valid;
use super::messages_for;
use crate::validation::rules;

#[test]
fn known_argument_names() {
    expect_valid(
        rules::known_argument_names,
        "{ dog { doesKnowCommand(dogCommand: SIT) name @include(if: true) } }",
    );
    assert_eq!(
        messages_for(
            rules::known_argument_names,
            "{ dog { doesKnowCommand(command: SIT) name @include(iff: true) } }",
        ),
        vec![
            "Unknown argument 'command' on field 'Dog.doesKnowCommand'. Did you mean 'dogCommand'?",
            "Unknown argument 'iff' on directive '@include'. Did you mean 'if'?",
        ],
    );
}

#[test]
fn unknown_arguments_on_unknown_fields_are_ignored() {
    expect_valid(rules::known_argument_names, "{ dog { unknownField(arg: 1) } }");
}

#[test]
fn unique_argument_names() {
    expect_valid(
        rules::unique_argument_names,
        "{ dog { isAtLocation(x: 1, y: 2) name @include(if: true) } }",
    );
    assert_eq!(
        messages_for(
            rules::unique_argument_names,
            "{ dog { isAtLocation(x: 1, x: 2) name @skip(if: true, if: false) } }",
        ),
        vec![
            "There can be only one argument named 'x'.",
            "There can be only one argument named 'if'.",
        ],
    );
}

#[test]
fn provided_required_arguments() {
    expect_valid(
        rules::provided_required_arguments,
        "{ complicatedArgs { multipleReqs(req1: 1, req2: 2) multipleOpts } dog { name } }",
    );
    assert_eq!(
        messages_for(
            rules::provided_required_arguments,
            "{ complicatedArgs { multipleReqs(req1: 1) } dog @include { name } }",
        ),
        vec![
            "Field 'multipleReqs' argument 'req2' of type 'Int!' is required, but it was not provided.",
            "Directive '@include' argument 'if' of type 'Boolean!' is required, but it was not \
            provided.",
        ],
    );
}

#[test]
fn values_of_correct_type_for_scalars() {
    expect_valid(
        rules::values_of_correct_type,
        r#"{ complicatedArgs {
            intArgField(intArg: 2)
            floatArgField(floatArg: 1)
            idArgField(idArg: 1)
            stringListArgField(stringListArg: "one")
        } }"#,
    );
    assert_eq!(
        messages_for(
            rules::values_of_correct_type,
            r#"{ complicatedArgs {
                intArgField(intArg: "3")
                stringArgField(stringArg: 1)
                nonNullIntArgField(nonNullIntArg: null)
            } }"#,
        ),
        vec![
            "Int cannot represent non-integer value: \"3\"",
            "String cannot represent a non string value: 1",
            "Expected value of type 'Int!', found null.",
        ],
    );
}

#[test]
fn values_of_correct_type_for_enums() {
    assert_eq!(
        messages_for(
            rules::values_of_correct_type,
            r#"{ complicatedArgs { a: enumArgField(enumArg: "BROWN") b: enumArgField(enumArg: brown) } }"#,
        ),
        vec![
            "Enum 'FurColor' cannot represent non-enum value: \"BROWN\". Did you mean the enum \
            value 'BROWN'?",
            "Value 'brown' does not exist in 'FurColor' enum. Did you mean the enum value 'BROWN'?",
        ],
    );
}

#[test]
fn values_of_correct_type_for_input_objects() {
    expect_valid(
        rules::values_of_correct_type,
        "{ complicatedArgs { complexArgField(complexArg: {requiredField: true}) } }",
    );
    assert_eq!(
        messages_for(
            rules::values_of_correct_type,
            "{ complicatedArgs {
                a: complexArgField(complexArg: {intField: 4})
                b: complexArgField(complexArg: {requiredField: true, x: 1})
            } }",
        ),
        vec![
            "Field 'ComplexInput.requiredField' of required type 'Boolean!' was not provided.",
            "Field 'x' is not defined by type 'ComplexInput'.",
        ],
    );
}

#[test]
fn unique_input_field_names() {
    expect_valid(
        rules::unique_input_field_names,
        "{ complicatedArgs { complexArgField(complexArg: {requiredField: true, intField: 1}) } }",
    );
    assert_eq!(
        messages_for(
            rules::unique_input_field_names,
            "{ complicatedArgs {
                complexArgField(complexArg: {requiredField: true, requiredField: false})
            } }",
        ),
        vec!["There can be only one input field named 'requiredField'."],
    );
}
