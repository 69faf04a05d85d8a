use graphql_parser::schema::{InputObjectType, Type};
use itertools::Itertools;

use crate::config::ScalaClientConfig;
use crate::field::scaladoc;
use crate::naming::{DeclNames, safe_name, safe_record_field};
use crate::scalars::resolve_type;
use crate::types::{TypeRef, inner_name, scala_type};

/// Emits the declaration for a GraphQL input object: a case class with
/// `None`/`Nil` defaults and a companion `ArgEncoder` building an
/// `__ObjectValue` whose entries preserve the source-declared field order.
pub fn emit_input(
    input: &InputObjectType<'_, String>,
    config: &ScalaClientConfig,
    names: &DeclNames<'_>,
) -> String {
    let name = safe_name(names.resolve(&input.name)).into_owned();

    let params = input
        .fields
        .iter()
        .map(|field| {
            let leaf = resolve_type(inner_name(&field.value_type), config, names);
            let scala = scala_type(&field.value_type, &leaf);
            let default = if scala.starts_with("Option[") {
                " = None"
            } else if scala.starts_with("List[") {
                " = Nil"
            } else {
                ""
            };
            format!("{}: {scala}{default}", safe_record_field(&field.name))
        })
        .join(", ");

    let entries = input
        .fields
        .iter()
        .map(|field| {
            let access = format!("value.{}", safe_record_field(&field.name));
            format!(
                "        \"{}\" -> {}",
                field.name,
                encode_expr(&access, &field.value_type, config, names)
            )
        })
        .join(",\n");

    let mut out = String::new();
    if let Some(doc) = scaladoc(input.description.as_deref()) {
        out.push_str(&doc);
        out.push('\n');
    }
    out.push_str(&format!("final case class {name}({params})\n"));
    out.push('\n');
    out.push_str(&format!("object {name} {{\n"));
    out.push('\n');
    out.push_str(&format!(
        "  implicit val encoder: ArgEncoder[{name}] = new ArgEncoder[{name}] {{\n"
    ));
    out.push_str(&format!(
        "    override def encode(value: {name}): __Value = __ObjectValue(\n"
    ));
    out.push_str("      List(\n");
    out.push_str(&entries);
    out.push('\n');
    out.push_str("      )\n");
    out.push_str("    )\n");
    out.push_str("  }\n");
    out.push('}');
    out
}

/// Builds the encode expression for one input-field position.
///
/// Required named positions defer to the implicit encoder, required lists
/// build an `__ListValue` element-wise, and optional positions fold the
/// `Option` into `__NullValue`.
fn encode_expr(
    expr: &str,
    ty: &TypeRef<'_>,
    config: &ScalaClientConfig,
    names: &DeclNames<'_>,
) -> String {
    match ty {
        Type::NonNullType(inner) => encode_required(expr, inner, config, names),
        _ => format!(
            "{expr}.fold(__NullValue: __Value)(value => {})",
            encode_required("value", ty, config, names)
        ),
    }
}

fn encode_required(
    expr: &str,
    ty: &TypeRef<'_>,
    config: &ScalaClientConfig,
    names: &DeclNames<'_>,
) -> String {
    match ty {
        Type::NamedType(name) => format!(
            "implicitly[ArgEncoder[{}]].encode({expr})",
            resolve_type(name, config, names)
        ),
        Type::ListType(inner) => format!(
            "__ListValue({expr}.map(value => {}))",
            encode_expr("value", inner, config, names)
        ),
        Type::NonNullType(inner) => encode_required(expr, inner, config, names),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use graphql_parser::schema::{Definition, Document, TypeDefinition, parse_schema};
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    use crate::types::RootRole;

    fn emit(source: &str) -> String {
        let doc: Document<'static, String> = parse_schema::<String>(source).unwrap().into_static();
        let input = doc
            .definitions
            .iter()
            .find_map(|def| match def {
                Definition::TypeDefinition(TypeDefinition::InputObject(input)) => Some(input),
                _ => None,
            })
            .expect("input definition");
        let names = DeclNames::new(RootRole::ALL.map(RootRole::sentinel), [input.name.as_str()]);
        emit_input(input, &ScalaClientConfig::default(), &names)
    }

    #[test]
    fn test_input_object() {
        assert_eq!(
            emit(
                indoc! {"
                    input CharacterInput {
                      name: String!
                      nicknames: [String!]!
                      origin: Origin
                    }
                "}
            ),
            indoc! {r#"
                final case class CharacterInput(name: String, nicknames: List[String] = Nil, origin: Option[Origin] = None)

                object CharacterInput {

                  implicit val encoder: ArgEncoder[CharacterInput] = new ArgEncoder[CharacterInput] {
                    override def encode(value: CharacterInput): __Value = __ObjectValue(
                      List(
                        "name" -> implicitly[ArgEncoder[String]].encode(value.name),
                        "nicknames" -> __ListValue(value.nicknames.map(value => implicitly[ArgEncoder[String]].encode(value))),
                        "origin" -> value.origin.fold(__NullValue: __Value)(value => implicitly[ArgEncoder[Origin]].encode(value))
                      )
                    )
                  }
                }"#}
        );
    }

    #[test]
    fn test_reserved_record_field_gets_marker_suffix() {
        let emitted = emit("input Timing { wait: Int! }");
        assert!(emitted.contains("final case class Timing(wait$: Int)"));
        assert!(emitted.contains(r#""wait" -> implicitly[ArgEncoder[Int]].encode(value.wait$)"#));
    }

    #[test]
    fn test_keyword_record_field_is_quoted() {
        let emitted = emit("input Selector { type: String! }");
        assert!(emitted.contains("final case class Selector(`type`: String)"));
        assert!(emitted.contains(r#""type" -> implicitly[ArgEncoder[String]].encode(value.`type`)"#));
    }

    #[test]
    fn test_list_of_optional_elements() {
        let emitted = emit("input Filter { tags: [String]! }");
        assert!(emitted.contains("tags: List[Option[String]] = Nil"));
        assert!(emitted.contains(
            r#""tags" -> __ListValue(value.tags.map(value => value.fold(__NullValue: __Value)(value => implicitly[ArgEncoder[String]].encode(value))))"#
        ));
    }

    #[test]
    fn test_optional_list() {
        let emitted = emit("input Filter { tags: [String!] }");
        assert!(emitted.contains("tags: Option[List[String]] = None"));
        assert!(emitted.contains(
            r#""tags" -> value.tags.fold(__NullValue: __Value)(value => __ListValue(value.map(value => implicitly[ArgEncoder[String]].encode(value))))"#
        ));
    }
}
