use crate::config::ScalaClientConfig;
use crate::naming::{DeclNames, safe_name};

/// Resolves a named GraphQL type to a Scala type expression.
///
/// User scalar mappings win, and apply to any named type (a mapped enum is
/// redirected to the external type and loses its generated declaration).
/// The built-in scalars map to their Scala counterparts. Anything else
/// resolves to its mangled declaration name; names that were never
/// declared pass through as-is and are left for the downstream compiler to
/// reject.
pub fn resolve_type(name: &str, config: &ScalaClientConfig, names: &DeclNames<'_>) -> String {
    if let Some(mapped) = config.scalar_mappings.get(name) {
        return mapped.clone();
    }
    match name {
        "Int" => "Int".to_owned(),
        "Float" => "Double".to_owned(),
        "String" => "String".to_owned(),
        "Boolean" => "Boolean".to_owned(),
        "ID" => "String".to_owned(),
        _ => safe_name(names.resolve(name)).into_owned(),
    }
}
