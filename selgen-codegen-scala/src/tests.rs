//! End-to-end generation scenarios.

use graphql_parser::schema::{Document, parse_schema};
use indoc::indoc;
use pretty_assertions::assert_eq;

use crate::{ScalaClientConfig, ScalaClientError, write_client};

fn parse(source: &str) -> Document<'static, String> {
    parse_schema::<String>(source).unwrap().into_static()
}

fn generate(source: &str, config: &ScalaClientConfig) -> Vec<(String, String)> {
    write_client(&parse(source), config).unwrap()
}

fn generate_single(source: &str, config: &ScalaClientConfig) -> String {
    let files = generate(source, config);
    assert_eq!(files.len(), 1);
    assert_eq!(files[0].0, "Client");
    files[0].1.clone()
}

#[test]
fn test_simple_object() {
    assert_eq!(
        generate_single(
            indoc! {"
                type Character {
                  name: String!
                  nicknames: [String!]!
                }
            "},
            &ScalaClientConfig::default(),
        ),
        indoc! {r#"
            import graphql.client.FieldBuilder._
            import graphql.client._

            object Client {

              type Character

              object Character {

                def name: SelectionBuilder[Character, String] = Field("name", Scalar())

                def nicknames: SelectionBuilder[Character, List[String]] = Field("nicknames", ListOf(Scalar()))
              }
            }
        "#}
    );
}

#[test]
fn test_reserved_field_name() {
    let client = generate_single(
        "type Character { type: String! }",
        &ScalaClientConfig::default(),
    );
    assert!(client.contains(
        r#"def `type`: SelectionBuilder[Character, String] = Field("type", Scalar())"#
    ));
}

#[test]
fn test_schema_root_aliasing() {
    assert_eq!(
        generate_single(
            indoc! {"
                schema { query: Q }
                type Q { characters: [Character!]! }
                type Character { name: String! }
            "},
            &ScalaClientConfig::default(),
        ),
        indoc! {r#"
            import graphql.client.FieldBuilder._
            import graphql.client._

            object Client {

              type Character

              object Character {

                def name: SelectionBuilder[Character, String] = Field("name", Scalar())
              }

              type Q = RootQuery

              object Q {

                def characters[A](innerSelection: SelectionBuilder[Character, A]): SelectionBuilder[RootQuery, List[A]] = Field("characters", ListOf(Obj(innerSelection)))
              }
            }
        "#}
    );
}

#[test]
fn test_default_root_type_names() {
    let client = generate_single(
        indoc! {"
            type Query { ok: Boolean! }
            type Mutation { set(ok: Boolean!): Boolean! }
        "},
        &ScalaClientConfig::default(),
    );
    assert!(client.contains("type Query = RootQuery"));
    assert!(client.contains("type Mutation = RootMutation"));
    assert!(client.contains("def ok: SelectionBuilder[RootQuery, Boolean]"));
    assert!(client.contains("SelectionBuilder[RootMutation, Boolean]"));
}

#[test]
fn test_scalar_mapping_suppresses_declaration() {
    let config = ScalaClientConfig {
        scalar_mappings: [(
            "OffsetDateTime".to_owned(),
            "java.time.OffsetDateTime".to_owned(),
        )]
        .into_iter()
        .collect(),
        ..Default::default()
    };
    let client = generate_single(
        indoc! {"
            scalar OffsetDateTime
            type Event { startsAt: OffsetDateTime! }
        "},
        &config,
    );
    assert!(client.contains(
        r#"def startsAt: SelectionBuilder[Event, java.time.OffsetDateTime] = Field("startsAt", Scalar())"#
    ));
    assert!(!client.contains("type OffsetDateTime"));
}

#[test]
fn test_unmapped_scalar_falls_back_to_raw_name() {
    let client = generate_single(
        indoc! {"
            scalar Duration
            type Event { length: Duration! }
        "},
        &ScalaClientConfig::default(),
    );
    assert!(client.contains(
        r#"def length: SelectionBuilder[Event, Duration] = Field("length", Scalar())"#
    ));
    assert!(!client.contains("type Duration"));
}

#[test]
fn test_mapped_enum_is_redirected() {
    let config = ScalaClientConfig {
        scalar_mappings: [("Destination".to_owned(), "com.example.Destination".to_owned())]
            .into_iter()
            .collect(),
        ..Default::default()
    };
    let client = generate_single(
        indoc! {"
            enum Destination { EARTH MARS }
            type Trip { destination: Destination! }
        "},
        &config,
    );
    assert!(client.contains("SelectionBuilder[Trip, com.example.Destination]"));
    assert!(!client.contains("sealed trait Destination"));
}

#[test]
fn test_extensible_enum() {
    let config = ScalaClientConfig {
        extensible_enums: true,
        ..Default::default()
    };
    let client = generate_single("enum Origin { EARTH MARS BELT }", &config);
    assert!(client.contains("final case class __Unknown(value: String) extends Origin"));
    let unknown_branch = client
        .find("case __StringValue(other) => Right(Origin.__Unknown(other))")
        .unwrap();
    assert!(client.find(r#"case __StringValue("BELT")"#).unwrap() < unknown_branch);
    assert!(unknown_branch < client.find("case other => Left(DecodingError").unwrap());
}

#[test]
fn test_case_insensitive_duplicate_enum_values() {
    let client = generate_single("enum Episode { NEWHOPE EMPIRE JEDI jedi }", &ScalaClientConfig::default());
    assert!(client.contains(r#"case object JEDI extends Episode { val value: String = "JEDI" }"#));
    assert!(client.contains(r#"case object jedi_1 extends Episode { val value: String = "jedi" }"#));
}

#[test]
fn test_case_insensitive_top_level_collision() {
    let client = generate_single(
        indoc! {"
            type Jedi { name: String! }
            type JEDI { rank: String! }
            type Query { jedi: Jedi JEDI: JEDI }
        "},
        &ScalaClientConfig::default(),
    );
    // The first declaration keeps its casing; the second is suffixed at
    // the declaration and at every reference site.
    assert!(client.contains("type Jedi\n"));
    assert!(client.contains("type JEDI_1\n"));
    assert!(client.contains("object JEDI_1 {"));
    assert!(client.contains("SelectionBuilder[JEDI_1, A]"));
    // Wire strings keep the original names.
    assert!(client.contains(r#"Field("jedi", OptionOf(Obj(innerSelection)))"#));
    assert!(client.contains(r#"Field("JEDI", OptionOf(Obj(innerSelection)))"#));
}

#[test]
fn test_split_files() {
    let config = ScalaClientConfig {
        split_files: true,
        package_name: Some("test".to_owned()),
        ..Default::default()
    };
    let files = generate(
        indoc! {"
            schema { query: Q }
            type Q { characters: [Character!]! }
            type Character { name: String! }
        "},
        &config,
    );

    assert_eq!(
        files.iter().map(|(name, _)| name.as_str()).collect::<Vec<_>>(),
        ["package", "Character", "Q"]
    );
    assert_eq!(
        files[0].1,
        indoc! {"
            package object test {

              type Character

              type Q = RootQuery
            }
        "}
    );
    assert_eq!(
        files[1].1,
        indoc! {r#"
            package test

            import graphql.client.FieldBuilder._
            import graphql.client._

            object Character {

              def name: SelectionBuilder[Character, String] = Field("name", Scalar())
            }
        "#}
    );
    assert_eq!(
        files[2].1,
        indoc! {r#"
            package test

            import graphql.client.FieldBuilder._
            import graphql.client._

            object Q {

              def characters[A](innerSelection: SelectionBuilder[Character, A]): SelectionBuilder[RootQuery, List[A]] = Field("characters", ListOf(Obj(innerSelection)))
            }
        "#}
    );
}

#[test]
fn test_split_files_dotted_package() {
    let config = ScalaClientConfig {
        split_files: true,
        package_name: Some("com.example.api".to_owned()),
        ..Default::default()
    };
    let files = generate("type Character { name: String! }", &config);
    assert!(files[0].1.starts_with("package com.example\n\npackage object api {"));
    assert!(files[1].1.starts_with("package com.example.api\n"));
}

#[test]
fn test_split_files_without_package_name_errors() {
    let config = ScalaClientConfig {
        split_files: true,
        ..Default::default()
    };
    assert!(matches!(
        write_client(&parse("type Character { name: String! }"), &config),
        Err(ScalaClientError::MissingPackageName)
    ));
}

#[test]
fn test_union_contributes_no_split_file() {
    let config = ScalaClientConfig {
        split_files: true,
        package_name: Some("test".to_owned()),
        ..Default::default()
    };
    let files = generate(
        indoc! {"
            type Human { name: String! }
            type Droid { primaryFunction: String! }
            union SearchResult = Human | Droid
        "},
        &config,
    );
    assert_eq!(
        files.iter().map(|(name, _)| name.as_str()).collect::<Vec<_>>(),
        ["package", "Human", "Droid"]
    );
}

#[test]
fn test_enum_and_input_import_value_machinery() {
    let files = generate(
        indoc! {"
            enum Origin { EARTH MARS }
            input Filter { origin: Origin }
        "},
        &ScalaClientConfig {
            split_files: true,
            package_name: Some("test".to_owned()),
            ..Default::default()
        },
    );
    let origin = &files[1].1;
    assert!(origin.starts_with(indoc! {"
        package test

        import graphql.client._
        import graphql.client.ClientError.DecodingError
        import graphql.client.__Value._
    "}));
}

#[test]
fn test_additional_imports_after_library_imports() {
    let config = ScalaClientConfig {
        additional_imports: vec!["java.util.UUID".to_owned()],
        ..Default::default()
    };
    let client = generate_single("type Character { name: String! }", &config);
    assert!(client.starts_with(indoc! {"
        import graphql.client.FieldBuilder._
        import graphql.client._

        import java.util.UUID

        object Client {
    "}));
}

#[test]
fn test_package_name_in_single_file_mode() {
    let config = ScalaClientConfig {
        package_name: Some("com.example".to_owned()),
        ..Default::default()
    };
    let client = generate_single("type Character { name: String! }", &config);
    assert!(client.starts_with("package com.example\n\nimport graphql.client.FieldBuilder._\n"));
}

#[test]
fn test_interface_declaration_and_field_accessors() {
    let client = generate_single(
        indoc! {"
            interface Vehicle { id: ID! }
            type Speeder implements Vehicle { id: ID! speed: Int! }
            type Character { vehicle: Vehicle }
        "},
        &ScalaClientConfig::default(),
    );
    // The interface itself is an object type with its own accessors.
    assert!(client.contains("type Vehicle\n"));
    assert!(client.contains(r#"def id: SelectionBuilder[Vehicle, String] = Field("id", Scalar())"#));
    // Fields of interface type carry all three accessor shapes.
    assert!(client.contains("def vehicle[A](onSpeeder: SelectionBuilder[Speeder, A])"));
    assert!(client.contains("def vehicleOption[A](onSpeeder: Option[SelectionBuilder[Speeder, A]] = None)"));
    assert!(client.contains("def vehicleInterface[A](innerSelection: SelectionBuilder[Vehicle, A])"));
}

#[test]
fn test_empty_document() {
    assert_eq!(
        generate_single("", &ScalaClientConfig::default()),
        "object Client {\n}\n"
    );
}

#[test]
fn test_generation_is_deterministic() {
    let source = indoc! {"
        schema { query: Q }
        type Q { search(text: String!): [SearchResult!]! }
        type Human { name: String! }
        type Droid { primaryFunction: String! }
        union SearchResult = Human | Droid
        enum Origin { EARTH MARS }
        input Filter { origin: Origin tags: [String!] }
    "};
    let config = ScalaClientConfig::default();
    assert_eq!(generate(source, &config), generate(source, &config));
}

#[test]
fn test_output_is_stable_under_formatting() {
    // The emitters produce already-formatted text, so disabling the
    // formatter must not change the output.
    let source = indoc! {"
        type Query { characters(limit: Int): [Character!]! }
        type Character {
          \"Name of the character.\"
          name: String!
          friend: Character
        }
        enum Origin { EARTH MARS }
        input Filter { origin: Origin }
    "};
    let formatted = generate(source, &ScalaClientConfig::default());
    let raw = generate(
        source,
        &ScalaClientConfig {
            enable_fmt: false,
            ..Default::default()
        },
    );
    assert_eq!(formatted, raw);
}
