use super::expect_valid;
use super::messages_for;
use crate::validation::rules;

#[test]
fn unique_variable_names() {
    expect_valid(
        rules::unique_variable_names,
        "query A($x: Int, $y: String) { dog { name } } query B($x: Int) { dog { name } }",
    );
    assert_eq!(
        messages_for(
            rules::unique_variable_names,
            "query A($x: Int, $x: String, $y: Int, $y: Int, $y: Int) { dog { name } }",
        ),
        vec![
            "There can be only one variable named '$x'.",
            "There can be only one variable named '$y'.",
        ],
    );
}

#[test]
fn no_undefined_variables() {
    expect_valid(
        rules::no_undefined_variables,
        "query Foo($a: String) { human(id: $a) { ...H } }
         fragment H on Human { name(surname: true) }",
    );
    assert_eq!(
        messages_for(
            rules::no_undefined_variables,
            "query Foo($a: ID) { human(id: $a) { ...H } }
             fragment H on Human { name(surname: $b) }",
        ),
        vec!["Variable '$b' is not defined by operation 'Foo'."],
    );
    assert_eq!(
        messages_for(rules::no_undefined_variables, "{ human(id: $id) { name } }"),
        vec!["Variable '$id' is not defined."],
    );
}

#[test]
fn no_unused_variables() {
    expect_valid(
        rules::no_unused_variables,
        "query Foo($a: Boolean) { dog { ...D } } fragment D on Dog { name(surname: $a) }",
    );
    assert_eq!(
        messages_for(
            rules::no_unused_variables,
            "query Foo($a: Boolean, $b: Boolean) { dog { name(surname: $a) } }",
        ),
        vec!["Variable '$b' is never used in operation 'Foo'."],
    );
    assert_eq!(
        messages_for(rules::no_unused_variables, "query ($c: Int) { dog { name } }"),
        vec!["Variable '$c' is never used."],
    );
}

#[test]
fn variables_in_allowed_position() {
    expect_valid(
        rules::variables_in_allowed_position,
        "query ($intArg: Int!, $stringListArg: [String!], $opt: Int = 1) {
            complicatedArgs {
                intArgField(intArg: $intArg)
                stringListArgField(stringListArg: $stringListArg)
                nonNullIntArgField(nonNullIntArg: $opt)
            }
         }",
    );
    assert_eq!(
        messages_for(
            rules::variables_in_allowed_position,
            "query ($intArg: Int, $stringVar: String) {
                complicatedArgs {
                    nonNullIntArgField(nonNullIntArg: $intArg)
                    stringListNonNullArgField(stringListNonNullArg: $stringVar)
                }
             }",
        ),
        vec![
            "Variable '$intArg' of type 'Int' used in position expecting type 'Int!'.",
            "Variable '$stringVar' of type 'String' used in position expecting type '[String!]'.",
        ],
    );
}

#[test]
fn nullable_variables_flow_into_defaulted_arguments() {
    expect_valid(
        rules::variables_in_allowed_position,
        "query ($flag: Boolean) {
            complicatedArgs {
                complexArgField(complexArg: {requiredField: true, nonNullField: $flag})
            }
         }",
    );
    assert_eq!(
        messages_for(
            rules::variables_in_allowed_position,
            "query ($x: Int = null) { complicatedArgs { nonNullIntArgField(nonNullIntArg: $x) } }",
        ),
        vec!["Variable '$x' of type 'Int' used in position expecting type 'Int!'."],
    );
}
