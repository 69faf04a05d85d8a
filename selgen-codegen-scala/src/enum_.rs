use graphql_parser::schema::EnumType;
use itertools::Itertools;
use selgen_core::codegen::UniqueNamesScope;

use crate::config::ScalaClientConfig;
use crate::field::{deprecation, scaladoc};
use crate::naming::{DeclNames, safe_name, safe_name_owned};

/// Emits the declaration for a GraphQL enum: a sealed trait, one nullary
/// variant per value carrying its wire string, the `ScalarDecoder` and
/// `ArgEncoder` instances, and the `values` vector in source order.
///
/// With extensible enums enabled, a data-bearing `__Unknown` variant
/// absorbs unrecognized wire strings; it participates in the decoder and
/// encoder but not in `values`.
pub fn emit_enum(en: &EnumType<'_, String>, config: &ScalaClientConfig, names: &DeclNames<'_>) -> String {
    let name = safe_name(names.resolve(&en.name)).into_owned();

    // Enum values share one case-insensitive scope: `JEDI` and `jedi` are
    // distinct wire strings but collide as Scala identifiers on
    // case-insensitive tooling.
    let mut scope = UniqueNamesScope::new();
    let variants: Vec<(String, &str)> = en
        .values
        .iter()
        .map(|value| {
            let ident = safe_name_owned(scope.uniquify(&value.name).into_owned());
            (ident, value.name.as_str())
        })
        .collect();

    let mut out = String::new();
    if let Some(doc) = scaladoc(en.description.as_deref()) {
        out.push_str(&doc);
        out.push('\n');
    }
    out.push_str(&format!(
        "sealed trait {name} extends scala.Product with scala.Serializable {{ def value: String }}\n"
    ));
    out.push('\n');
    out.push_str(&format!("object {name} {{\n"));
    out.push('\n');

    for (value, (ident, wire)) in en.values.iter().zip(&variants) {
        if let Some(doc) = scaladoc(value.description.as_deref()) {
            for line in doc.lines() {
                out.push_str(&format!("  {line}\n"));
            }
        }
        if let Some(marker) = deprecation(&value.directives) {
            out.push_str(&format!("  {marker}\n"));
        }
        out.push_str(&format!(
            "  case object {ident} extends {name} {{ val value: String = \"{wire}\" }}\n"
        ));
    }
    if config.extensible_enums {
        out.push_str(&format!(
            "  final case class __Unknown(value: String) extends {name}\n"
        ));
    }

    out.push('\n');
    out.push_str(&format!("  implicit val decoder: ScalarDecoder[{name}] = {{\n"));
    for (ident, wire) in &variants {
        out.push_str(&format!(
            "    case __StringValue(\"{wire}\") => Right({name}.{ident})\n"
        ));
    }
    if config.extensible_enums {
        out.push_str(&format!(
            "    case __StringValue(other) => Right({name}.__Unknown(other))\n"
        ));
    }
    out.push_str(&format!(
        "    case other => Left(DecodingError(s\"Can't build {name} from input $other\"))\n"
    ));
    out.push_str("  }\n");

    out.push('\n');
    out.push_str(&format!("  implicit val encoder: ArgEncoder[{name}] = {{\n"));
    for (ident, wire) in &variants {
        out.push_str(&format!(
            "    case {name}.{ident} => __EnumValue(\"{wire}\")\n"
        ));
    }
    if config.extensible_enums {
        out.push_str(&format!(
            "    case {name}.__Unknown(value) => __EnumValue(value)\n"
        ));
    }
    out.push_str("  }\n");

    out.push('\n');
    out.push_str(&format!(
        "  val values: Vector[{name}] = Vector({})\n",
        variants.iter().map(|(ident, _)| ident).join(", ")
    ));
    out.push('}');
    out
}
