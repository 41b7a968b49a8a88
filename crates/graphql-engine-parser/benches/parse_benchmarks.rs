use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::Throughput;
use criterion::black_box;
use criterion::criterion_group;
use criterion::criterion_main;
use graphql_engine_parser::Lexer;
use graphql_engine_parser::Source;
use graphql_engine_parser::parse;
use graphql_engine_parser::print_ast;
use graphql_engine_parser::token::TokenKind;
use std::sync::Arc;

const SIMPLE_QUERY: &str = "{ hero { name friends { name } } }";

const COMPLEX_QUERY: &str = r#"
query HeroDetails($episode: Episode = JEDI, $withFriends: Boolean!) @cached(ttl: 60) {
  hero(episode: $episode) {
    ...CharacterFields
    ... on Droid { primaryFunction }
    ... on Human @include(if: $withFriends) {
      height(unit: METER)
      friendsConnection(first: 10, after: "Y3Vyc29y") {
        totalCount
        edges { cursor node { ...CharacterFields } }
      }
    }
  }
}

fragment CharacterFields on Character {
  id
  name
  appearsIn
}
"#;

/// A synthetic schema with `type_count` object types, each with a handful
/// of scalar, list and argument-taking fields.
fn synthetic_schema(type_count: usize) -> String {
    let mut sdl = String::from("schema { query: Type0 }\n\n");
    for idx in 0..type_count {
        let next = (idx + 1) % type_count;
        sdl.push_str(&format!(
            "\"\"\"\nType number {idx}.\n\"\"\"\n\
             type Type{idx} implements Node @key(fields: \"id\") {{\n  \
               id: ID!\n  \
               name: String\n  \
               \"Linked type\"\n  \
               next(first: Int = 10, after: String): [Type{next}!]!\n  \
               score(weights: [Float!] = [1.0, 2.5]): Float @deprecated(reason: \"old\")\n\
             }}\n\n",
        ));
    }
    sdl.push_str("interface Node { id: ID! }\n");
    sdl
}

// ─── Group 1: Schema Parsing ─────────────────────────────

fn schema_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("schema_parse");
    for type_count in [10, 100, 1000] {
        let sdl = synthetic_schema(type_count);
        group.throughput(Throughput::Bytes(sdl.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(type_count),
            &sdl,
            |b, sdl| b.iter(|| black_box(parse(sdl.as_str()))),
        );
    }
    group.finish();
}

// ─── Group 2: Executable Document Parsing ─────────────────

fn executable_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("executable_parse");

    group.bench_function("simple_query", |b| {
        b.iter(|| black_box(parse(SIMPLE_QUERY)))
    });

    group.bench_function("complex_query", |b| {
        b.iter(|| black_box(parse(COMPLEX_QUERY)))
    });

    group.finish();
}

// ─── Group 3: Lexer (Tokenization Only) ──────────────────

fn lexer(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer");
    let sdl = synthetic_schema(100);
    group.throughput(Throughput::Bytes(sdl.len() as u64));
    let source = Arc::new(Source::new(sdl));
    group.bench_function("synthetic_schema_100", |b| {
        b.iter(|| {
            let mut lexer = Lexer::new(source.clone());
            let mut count = 0usize;
            while let Ok(token) = lexer.advance() {
                if token.kind == TokenKind::Eof {
                    break;
                }
                count += 1;
            }
            black_box(count)
        })
    });
    group.finish();
}

// ─── Group 4: Printing ───────────────────────────────────

fn print(c: &mut Criterion) {
    let mut group = c.benchmark_group("print");
    let schema = parse(synthetic_schema(100)).expect("synthetic schema parses");
    let query = parse(COMPLEX_QUERY).expect("complex query parses");

    group.bench_function("synthetic_schema_100", |b| {
        b.iter(|| black_box(print_ast(&schema)))
    });
    group.bench_function("complex_query", |b| {
        b.iter(|| black_box(print_ast(&query)))
    });
    group.finish();
}

criterion_group!(
    benches,
    schema_parse,
    executable_parse,
    lexer,
    print,
);
criterion_main!(benches);
