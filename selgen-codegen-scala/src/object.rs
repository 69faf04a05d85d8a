use graphql_parser::schema::{Field, InterfaceType, ObjectType};
use itertools::Itertools;

use crate::config::ScalaClientConfig;
use crate::field::{emit_field, scaladoc};
use crate::naming::{DeclNames, safe_name};
use crate::types::TypeIndex;

/// The parts of an object or interface definition the emitter consumes.
/// Interfaces are emitted exactly like objects: a phantom plus a container
/// of field accessors over their own fields.
pub struct ObjectLike<'a> {
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub fields: &'a [Field<'static, String>],
}

impl<'a> From<&'a ObjectType<'_, String>> for ObjectLike<'a> {
    fn from(object: &'a ObjectType<'_, String>) -> Self {
        Self {
            name: &object.name,
            description: object.description.as_deref(),
            fields: &object.fields,
        }
    }
}

impl<'a> From<&'a InterfaceType<'_, String>> for ObjectLike<'a> {
    fn from(interface: &'a InterfaceType<'_, String>) -> Self {
        Self {
            name: &interface.name,
            description: interface.description.as_deref(),
            fields: &interface.fields,
        }
    }
}

/// The phantom declaration for an object-like type: an opaque `type N`,
/// or an alias to the matching root sentinel when `N` is a schema root.
pub fn emit_phantom(decl: &ObjectLike<'_>, index: &TypeIndex<'_>, names: &DeclNames<'_>) -> String {
    let name = safe_name(names.resolve(decl.name));
    match index.root_role(decl.name) {
        Some(role) => format!("type {name} = {}", role.sentinel()),
        None => format!("type {name}"),
    }
}

/// The container object holding one accessor per field. Accessors on a
/// schema root select against the root sentinel rather than the phantom.
pub fn emit_object(
    decl: &ObjectLike<'_>,
    index: &TypeIndex<'_>,
    config: &ScalaClientConfig,
    names: &DeclNames<'_>,
) -> String {
    let name = safe_name(names.resolve(decl.name)).into_owned();
    let owner = match index.root_role(decl.name) {
        Some(role) => role.sentinel().to_owned(),
        None => name.clone(),
    };

    let accessors = decl
        .fields
        .iter()
        .map(|field| crate::indent(&emit_field(field, &owner, index, config, names), 1))
        .join("\n\n");

    let mut out = String::new();
    if let Some(doc) = scaladoc(decl.description) {
        out.push_str(&doc);
        out.push('\n');
    }
    out.push_str(&format!("object {name} {{\n"));
    out.push('\n');
    out.push_str(&accessors);
    out.push('\n');
    out.push('}');
    out
}
