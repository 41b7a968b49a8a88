mod argument_rules_tests;
mod directive_rules_tests;
mod field_rules_tests;
mod operation_rules_tests;
mod sdl_rules_tests;
mod validate_tests;
mod variable_rules_tests;

use crate::schema::Schema;
use crate::utilities::build_schema;
use crate::validation::validate;
use crate::validation::RuleFactory;
use crate::validation::ValidationOptions;
use graphql_engine_parser::parse;
use std::sync::LazyLock;

pub(super) const TEST_SCHEMA_SDL: &str = r#"
interface Being {
  name(surname: Boolean): String
}

interface Pet {
  name(surname: Boolean): String
}

enum DogCommand {
  SIT
  HEEL
  DOWN
}

type Dog implements Being & Pet {
  name(surname: Boolean): String
  nickname: String
  barkVolume: Int
  barks: Boolean
  doesKnowCommand(dogCommand: DogCommand): Boolean
  isHouseTrained(atOtherHomes: Boolean = true): Boolean
  isAtLocation(x: Int, y: Int): Boolean
}

enum FurColor {
  BROWN
  BLACK
  TAN
}

type Cat implements Being & Pet {
  name(surname: Boolean): String
  nickname: String
  meows: Boolean
  meowsVolume: Int
  furColor: FurColor
}

union CatOrDog = Cat | Dog

type Human implements Being {
  name(surname: Boolean): String
  pets: [Pet]
  relatives: [Human]
}

input ComplexInput {
  requiredField: Boolean!
  nonNullField: Boolean! = false
  intField: Int
  stringField: String
  booleanField: Boolean
  stringListField: [String]
}

type ComplicatedArgs {
  intArgField(intArg: Int): String
  nonNullIntArgField(nonNullIntArg: Int!): String
  stringArgField(stringArg: String): String
  booleanArgField(booleanArg: Boolean): String
  enumArgField(enumArg: FurColor): String
  floatArgField(floatArg: Float): String
  idArgField(idArg: ID): String
  stringListArgField(stringListArg: [String]): String
  stringListNonNullArgField(stringListNonNullArg: [String!]): String
  complexArgField(complexArg: ComplexInput): String
  multipleReqs(req1: Int!, req2: Int!): String
  multipleOpts(opt1: Int = 0, opt2: Int = 0): String
}

type Query {
  human(id: ID): Human
  dog: Dog
  cat: Cat
  pet: Pet
  catOrDog: CatOrDog
  complicatedArgs: ComplicatedArgs
}

type Subscription {
  newDog: Dog
  newCat: Cat
}

directive @onField on FIELD
directive @onQuery on QUERY
directive @repeatableOnField repeatable on FIELD
"#;

static TEST_SCHEMA: LazyLock<Schema> =
    LazyLock::new(|| build_schema(TEST_SCHEMA_SDL).expect("test schema builds"));

pub(super) fn test_schema() -> &'static Schema {
    &TEST_SCHEMA
}

/// Validates `query` against the test schema with `rule` alone and returns
/// the error messages.
pub(super) fn messages_for(rule: RuleFactory, query: &str) -> Vec<String> {
    let document = parse(query).unwrap();
    let options = ValidationOptions {
        rules: Some(vec![rule]),
        ..ValidationOptions::default()
    };
    validate(test_schema(), &document, options)
        .iter()
        .map(|error| error.message().to_string())
        .collect()
}

pub(super) fn expect_valid(rule: RuleFactory, query: &str) {
    assert_eq!(messages_for(rule, query), Vec::<String>::new(), "{query}");
}
