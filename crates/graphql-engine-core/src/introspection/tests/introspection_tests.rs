use crate::execute_sync;
use crate::execution::ExecutionArgs;
use crate::introspection::introspection_types;
use crate::introspection::INTROSPECTION_TYPE_NAMES;
use crate::utilities::build_schema;
use crate::Value;
use graphql_engine_parser::parse;
use serde_json::json;

const SDL: &str = r#"
"""The root"""
type Query {
  user(id: ID!, verbose: Boolean = false): User
  search(first: Int = 10): [Result!]!
  old: String @deprecated(reason: "Use user")
}

interface Node {
  id: ID!
}

type User implements Node {
  id: ID!
  role: Role
}

union Result = User

enum Role {
  ADMIN
  GUEST @deprecated
}

input Filter {
  role: Role = GUEST
}

scalar Url @specifiedBy(url: "https://example.com/url")

directive @cached(ttl: Int) repeatable on FIELD | QUERY
"#;

fn introspect(query: &str) -> Value {
    let schema = build_schema(SDL).unwrap();
    let document = parse(query).unwrap();
    let result = execute_sync(ExecutionArgs::new(&schema, &document)).unwrap();
    assert!(result.errors.is_empty(), "{:?}", result.errors);
    result.data.unwrap()
}

#[test]
fn eight_introspection_types_are_shared() {
    let names = introspection_types()
        .map(|ty| ty.name())
        .collect::<Vec<_>>();
    assert_eq!(names.len(), 8);
    for name in INTROSPECTION_TYPE_NAMES {
        assert!(names.contains(&name), "missing {name}");
    }
}

#[test]
fn schema_roots_and_description() {
    let data = introspect(
        "{ __schema { description queryType { name } mutationType { name } subscriptionType { name } } }",
    );
    assert_eq!(
        data,
        json!({
            "__schema": {
                "description": null,
                "queryType": {"name": "Query"},
                "mutationType": null,
                "subscriptionType": null,
            },
        }),
    );
}

#[test]
fn object_fields_and_wrapped_types() {
    let data = introspect(
        "{ __type(name: \"Query\") {
            kind name description
            fields { name args { name defaultValue } type { kind name ofType { kind name ofType { kind name ofType { name } } } } }
        } }",
    );
    assert_eq!(
        data,
        json!({
            "__type": {
                "kind": "OBJECT",
                "name": "Query",
                "description": "The root",
                "fields": [
                    {
                        "name": "user",
                        "args": [
                            {"name": "id", "defaultValue": null},
                            {"name": "verbose", "defaultValue": "false"},
                        ],
                        "type": {"kind": "OBJECT", "name": "User", "ofType": null},
                    },
                    {
                        "name": "search",
                        "args": [{"name": "first", "defaultValue": "10"}],
                        "type": {
                            "kind": "NON_NULL",
                            "name": null,
                            "ofType": {
                                "kind": "LIST",
                                "name": null,
                                "ofType": {"kind": "NON_NULL", "name": null, "ofType": {"name": "Result"}},
                            },
                        },
                    },
                ],
            },
        }),
    );
}

#[test]
fn deprecated_members_are_opt_in() {
    let data = introspect(
        "{
            query: __type(name: \"Query\") {
                fields(includeDeprecated: true) { name isDeprecated deprecationReason }
            }
            role: __type(name: \"Role\") {
                enumValues { name }
                all: enumValues(includeDeprecated: true) { name deprecationReason }
            }
        }",
    );
    assert_eq!(
        data["query"]["fields"][2],
        json!({"name": "old", "isDeprecated": true, "deprecationReason": "Use user"}),
    );
    assert_eq!(data["role"]["enumValues"], json!([{"name": "ADMIN"}]));
    assert_eq!(
        data["role"]["all"][1],
        json!({"name": "GUEST", "deprecationReason": "No longer supported"}),
    );
}

#[test]
fn abstract_types_list_their_members() {
    let data = introspect(
        "{
            node: __type(name: \"Node\") { kind possibleTypes { name } interfaces { name } }
            result: __type(name: \"Result\") { kind possibleTypes { name } fields { name } }
            user: __type(name: \"User\") { interfaces { name } possibleTypes { name } }
        }",
    );
    assert_eq!(
        data,
        json!({
            "node": {"kind": "INTERFACE", "possibleTypes": [{"name": "User"}], "interfaces": []},
            "result": {"kind": "UNION", "possibleTypes": [{"name": "User"}], "fields": null},
            "user": {"interfaces": [{"name": "Node"}], "possibleTypes": null},
        }),
    );
}

#[test]
fn input_objects_scalars_and_directives() {
    let data = introspect(
        "{
            filter: __type(name: \"Filter\") { kind inputFields { name defaultValue type { name } } }
            url: __type(name: \"Url\") { kind specifiedByURL }
            missing: __type(name: \"Missing\") { name }
            __schema { directives { name isRepeatable locations args { name type { name } } } }
        }",
    );
    assert_eq!(
        data["filter"],
        json!({
            "kind": "INPUT_OBJECT",
            "inputFields": [{"name": "role", "defaultValue": "GUEST", "type": {"name": "Role"}}],
        }),
    );
    assert_eq!(
        data["url"],
        json!({"kind": "SCALAR", "specifiedByURL": "https://example.com/url"}),
    );
    assert_eq!(data["missing"], Value::Null);

    let directives = data["__schema"]["directives"].as_array().unwrap();
    let cached = directives
        .iter()
        .find(|directive| directive["name"] == "cached")
        .unwrap();
    assert_eq!(
        cached,
        &json!({
            "name": "cached",
            "isRepeatable": true,
            "locations": ["FIELD", "QUERY"],
            "args": [{"name": "ttl", "type": {"name": "Int"}}],
        }),
    );
    for name in ["include", "skip", "deprecated", "specifiedBy"] {
        assert!(directives.iter().any(|directive| directive["name"] == name), "missing @{name}");
    }
}

#[test]
fn typename_is_available_everywhere() {
    let data = introspect("{ __typename __schema { __typename queryType { __typename } } }");
    assert_eq!(
        data,
        json!({
            "__typename": "Query",
            "__schema": {"__typename": "__Schema", "queryType": {"__typename": "__Type"}},
        }),
    );
}
