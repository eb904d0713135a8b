use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::Throughput;
use criterion::black_box;
use criterion::criterion_group;
use criterion::criterion_main;
use graphql_engine_parser::GraphQLParser;
use graphql_engine_parser::parse_str;
use graphql_engine_parser::token_source::StrGraphQLTokenSource;

const SIMPLE_QUERY: &str = "{ hero { name friends { name } } }";

const COMPLEX_QUERY: &str = r#"
query HeroDetails($episode: Episode = JEDI, $withFriends: Boolean!) {
  hero(episode: $episode) {
    ...CharacterFields
    ... on Droid { primaryFunction }
    friendsConnection(first: 10, after: "cursor") @include(if: $withFriends) {
      totalCount
      edges { cursor node { ...CharacterFields } }
      pageInfo { hasNextPage endCursor }
    }
  }
}

fragment CharacterFields on Character {
  id
  name
  appearsIn
}
"#;

/// A schema with `types` object types of ten fields each.
fn synthetic_schema(types: usize) -> String {
    let mut out = String::from("schema { query: Type0 }\n");
    for i in 0..types {
        out.push_str(&format!("\"\"\"\nType number {i}.\n\"\"\"\ntype Type{i} implements Node {{\n"));
        for f in 0..10 {
            out.push_str(&format!(
                "  field{f}(arg: Int = {f}, other: [String!]): Type{} @deprecated(reason: \"x\")\n",
                (i + 1) % types,
            ));
        }
        out.push_str("}\n");
    }
    out
}

/// A query nested `depth` levels deep with three fields per level.
fn nested_query(depth: usize) -> String {
    let mut out = String::new();
    for _ in 0..depth {
        out.push_str("{ a b(x: 1) c ");
    }
    for _ in 0..depth {
        out.push('}');
    }
    out
}

fn schema_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("schema_parse");
    for types in [10, 100, 1000] {
        let schema = synthetic_schema(types);
        group.throughput(Throughput::Bytes(schema.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(types), &schema, |b, schema| {
            b.iter(|| black_box(GraphQLParser::new(schema).parse_document()))
        });
    }
    group.finish();
}

fn executable_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("executable_parse");
    group.bench_function("simple_query", |b| {
        b.iter(|| black_box(GraphQLParser::new(SIMPLE_QUERY).parse_document()))
    });
    group.bench_function("complex_query", |b| {
        b.iter(|| black_box(GraphQLParser::new(COMPLEX_QUERY).parse_document()))
    });
    let nested = nested_query(50);
    group.bench_function("nested_query", |b| {
        b.iter(|| black_box(GraphQLParser::new(&nested).parse_document()))
    });
    group.finish();
}

fn lexer_only(c: &mut Criterion) {
    let schema = synthetic_schema(100);
    let mut group = c.benchmark_group("lexer");
    group.throughput(Throughput::Bytes(schema.len() as u64));
    group.bench_function("synthetic_schema", |b| {
        b.iter(|| black_box(StrGraphQLTokenSource::new(&schema).count()))
    });
    group.finish();
}

fn print_document(c: &mut Criterion) {
    let Ok(document) = parse_str(&synthetic_schema(100)) else {
        return;
    };
    c.bench_function("print_schema", |b| b.iter(|| black_box(document.to_string())));
}

criterion_group!(benches, schema_parse, executable_parse, lexer_only, print_document);
criterion_main!(benches);
