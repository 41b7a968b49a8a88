mod client_schema_tests;
mod coerce_input_value_tests;
mod extend_schema_tests;
mod type_comparators_tests;

/// SDL in the printer's canonical form: every type is defined after the
/// types it references (other than `Query`, which comes last), so a schema
/// built from it prints back byte for byte.
pub(super) const CANONICAL_SDL: &str = r#"directive @cached(ttl: Int = 60) repeatable on FIELD | QUERY

"""Things that can be fetched"""
interface Node {
  id: ID!
}

enum Role {
  ADMIN
  GUEST @deprecated
  OWNER @deprecated(reason: "Use ADMIN")
}

type User implements Node {
  id: ID!
  name: String
  role: Role
}

union SearchResult = User

input UserFilter {
  role: Role = GUEST
  ids: [ID!]
}

scalar Url @specifiedBy(url: "https://example.com/url")

type Query {
  """Look up one user"""
  user(id: ID!): User
  search(filter: UserFilter, first: Int = 10): [SearchResult!]!
  home: Url
  legacy(full: Boolean = false): String @deprecated(reason: "Use user")
}"#;
