use graphql_parser::schema::{Directive, Field, Value};
use itertools::Itertools;

use crate::config::ScalaClientConfig;
use crate::naming::{DeclNames, safe_name, safe_name_owned};
use crate::scalars::resolve_type;
use crate::types::{TypeIndex, TypeKind, builder_expr, gql_literal, inner_name, scala_type};

/// Emits the accessor(s) for one field of an object or interface type.
///
/// Scalar and enum fields produce a single selection accessor; object
/// fields a selection-parameterized one; union fields an exhaustive and an
/// optional per-variant accessor; interface fields additionally a
/// common-fields accessor. Accessors are separated by a blank line, each
/// carrying the field's docstring and deprecation marker.
pub fn emit_field(
    field: &Field<'_, String>,
    owner: &str,
    index: &TypeIndex<'_>,
    config: &ScalaClientConfig,
    names: &DeclNames<'_>,
) -> String {
    let wire = field.name.as_str();

    let mut annotations = Vec::new();
    if let Some(doc) = scaladoc(field.description.as_deref()) {
        annotations.push(doc);
    }
    if let Some(marker) = deprecation(&field.directives) {
        annotations.push(marker);
    }

    // Arguments become named parameters in declared order, each with a
    // matching implicit encoder and an `Argument` entry in the body.
    let params = field
        .arguments
        .iter()
        .map(|arg| {
            let leaf = resolve_type(inner_name(&arg.value_type), config, names);
            let scala = scala_type(&arg.value_type, &leaf);
            let default = if scala.starts_with("Option[") {
                " = None"
            } else if scala.starts_with("List[") {
                " = Nil"
            } else {
                ""
            };
            format!("{}: {scala}{default}", safe_name(&arg.name))
        })
        .join(", ");
    let encoders = field
        .arguments
        .iter()
        .enumerate()
        .map(|(i, arg)| {
            let leaf = resolve_type(inner_name(&arg.value_type), config, names);
            format!(
                "encoder{i}: ArgEncoder[{}]",
                scala_type(&arg.value_type, &leaf)
            )
        })
        .join(", ");
    let arguments = field
        .arguments
        .iter()
        .enumerate()
        .map(|(i, arg)| {
            format!(
                "Argument(\"{}\", {}, \"{}\")(encoder{i})",
                arg.name,
                safe_name(&arg.name),
                gql_literal(&arg.value_type)
            )
        })
        .join(", ");

    let args_group = (!field.arguments.is_empty()).then(|| format!("({params})"));
    let implicits_group = (!field.arguments.is_empty()).then(|| format!("(implicit {encoders})"));
    let arguments_clause = if field.arguments.is_empty() {
        String::new()
    } else {
        format!(", arguments = List({arguments})")
    };

    let accessor = |name: &str, type_param: bool, selection_group: Option<String>, out: &str, builder: &str| {
        let mut def = format!("def {name}");
        if type_param {
            def.push_str("[A]");
        }
        if let Some(group) = &args_group {
            def.push_str(group);
        }
        if let Some(group) = selection_group {
            def.push_str(&group);
        }
        if let Some(group) = &implicits_group {
            def.push_str(group);
        }
        format!(
            "{def}: SelectionBuilder[{owner}, {out}] = Field(\"{wire}\", {builder}{arguments_clause})"
        )
    };

    let ty = &field.field_type;
    let inner = inner_name(ty);
    let mut accessors = Vec::new();
    match index.kind(inner) {
        Some(TypeKind::Object) => {
            let inner_ref = resolve_type(inner, config, names);
            accessors.push(accessor(
                &safe_name(wire),
                true,
                Some(format!("(innerSelection: SelectionBuilder[{inner_ref}, A])")),
                &scala_type(ty, "A"),
                &builder_expr(ty, "Obj(innerSelection)"),
            ));
        }
        Some(TypeKind::Union) => {
            let members = index.union_members(inner);
            accessors.push(accessor(
                &safe_name(wire),
                true,
                Some(exhaustive_group(members, config, names)),
                &scala_type(ty, "A"),
                &builder_expr(ty, &exhaustive_choice(members, names)),
            ));
            accessors.push(accessor(
                &safe_name_owned(format!("{wire}Option")),
                true,
                Some(optional_group(members, config, names)),
                &scala_type(ty, "Option[A]"),
                &builder_expr(ty, &optional_choice(members, names)),
            ));
        }
        Some(TypeKind::Interface) => {
            let implementors = index.implementors(inner);
            if !implementors.is_empty() {
                accessors.push(accessor(
                    &safe_name(wire),
                    true,
                    Some(exhaustive_group(implementors, config, names)),
                    &scala_type(ty, "A"),
                    &builder_expr(ty, &exhaustive_choice(implementors, names)),
                ));
                accessors.push(accessor(
                    &safe_name_owned(format!("{wire}Option")),
                    true,
                    Some(optional_group(implementors, config, names)),
                    &scala_type(ty, "Option[A]"),
                    &builder_expr(ty, &optional_choice(implementors, names)),
                ));
            }
            let inner_ref = resolve_type(inner, config, names);
            accessors.push(accessor(
                &safe_name_owned(format!("{wire}Interface")),
                true,
                Some(format!("(innerSelection: SelectionBuilder[{inner_ref}, A])")),
                &scala_type(ty, "A"),
                &builder_expr(ty, "Obj(innerSelection)"),
            ));
        }
        // Scalars, enums, and undeclared names decode as scalar leaves.
        _ => {
            let leaf = resolve_type(inner, config, names);
            accessors.push(accessor(
                &safe_name(wire),
                false,
                None,
                &scala_type(ty, &leaf),
                &builder_expr(ty, "Scalar()"),
            ));
        }
    }

    accessors
        .into_iter()
        .map(|accessor| {
            annotations
                .iter()
                .cloned()
                .chain(std::iter::once(accessor))
                .join("\n")
        })
        .join("\n\n")
}

/// Parameter group for the exhaustive abstract-type accessor: one
/// required `on<Variant>` selection per variant.
fn exhaustive_group(members: &[&str], config: &ScalaClientConfig, names: &DeclNames<'_>) -> String {
    let params = members
        .iter()
        .map(|member| {
            format!(
                "{}: SelectionBuilder[{}, A]",
                on_name(member, names),
                resolve_type(member, config, names)
            )
        })
        .join(", ");
    format!("({params})")
}

/// Parameter group for the optional abstract-type accessor: every
/// `on<Variant>` selection defaults to `None`.
fn optional_group(members: &[&str], config: &ScalaClientConfig, names: &DeclNames<'_>) -> String {
    let params = members
        .iter()
        .map(|member| {
            format!(
                "{}: Option[SelectionBuilder[{}, A]] = None",
                on_name(member, names),
                resolve_type(member, config, names)
            )
        })
        .join(", ");
    format!("({params})")
}

fn exhaustive_choice(members: &[&str], names: &DeclNames<'_>) -> String {
    let pairs = members
        .iter()
        .map(|member| format!("\"{member}\" -> Obj({})", on_name(member, names)))
        .join(", ");
    format!("ChoiceOf(Map({pairs}))")
}

fn optional_choice(members: &[&str], names: &DeclNames<'_>) -> String {
    let pairs = members
        .iter()
        .map(|member| {
            format!(
                "\"{member}\" -> {}.fold[FieldBuilder[Option[A]]](NullField)(selection => OptionOf(Obj(selection)))",
                on_name(member, names)
            )
        })
        .join(", ");
    format!("ChoiceOf(Map({pairs}))")
}

fn on_name(member: &str, names: &DeclNames<'_>) -> String {
    safe_name_owned(format!("on{}", names.resolve(member)))
}

/// Renders a GraphQL description as a Scaladoc block, wrapped at 80
/// columns.
pub(crate) fn scaladoc(description: Option<&str>) -> Option<String> {
    let description = description?.trim();
    if description.is_empty() {
        return None;
    }
    let lines: Vec<String> = description
        .lines()
        .flat_map(|line| {
            let line = line.trim();
            if line.is_empty() {
                vec![String::new()]
            } else {
                textwrap::wrap(line, 80)
                    .into_iter()
                    .map(|wrapped| wrapped.into_owned())
                    .collect()
            }
        })
        .collect();

    let mut doc = format!("/** {}\n", lines[0]);
    for line in &lines[1..] {
        if line.is_empty() {
            doc.push_str("  *\n");
        } else {
            doc.push_str("  * ");
            doc.push_str(line);
            doc.push('\n');
        }
    }
    doc.push_str("  */");
    Some(doc)
}

/// Renders the deprecation marker for a `@deprecated` directive, carrying
/// the reason and an empty "since" string. Reasons containing a newline
/// are emitted in triple-quoted form; a reasonless or malformed directive
/// produces the empty-reason form.
pub(crate) fn deprecation(directives: &[Directive<'_, String>]) -> Option<String> {
    let directive = directives.iter().find(|d| d.name == "deprecated")?;
    let reason = directive
        .arguments
        .iter()
        .find_map(|(name, value)| match value {
            Value::String(reason) if name == "reason" => Some(reason.as_str()),
            _ => None,
        })
        .unwrap_or("");
    Some(if reason.contains('\n') {
        format!("@deprecated(\"\"\"{reason}\"\"\", \"\")")
    } else {
        format!("@deprecated(\"{}\", \"\")", escape_string(reason))
    })
}

pub(crate) fn escape_string(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
