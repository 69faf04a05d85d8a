use itertools::Itertools;

mod config;
mod enum_;
mod field;
mod input;
mod naming;
mod object;
mod scalars;
mod schema;
mod types;

#[cfg(test)]
mod tests;

pub use config::*;
pub use naming::{DeclNames, safe_name, safe_name_owned, safe_record_field};
pub use scalars::resolve_type;
pub use schema::*;
pub use types::{RootRole, TypeIndex, TypeKind, builder_expr, gql_literal, inner_name, scala_type};

/// Indents every non-empty line by `level` two-space steps. Lines inside
/// a triple-quoted string literal are string content and stay untouched.
pub(crate) fn indent(text: &str, level: usize) -> String {
    let prefix = "  ".repeat(level);
    let mut in_triple_string = false;
    text.lines()
        .map(|line| {
            let indented = if line.is_empty() || in_triple_string {
                line.to_owned()
            } else {
                format!("{prefix}{line}")
            };
            if line.matches("\"\"\"").count() % 2 == 1 {
                in_triple_string = !in_triple_string;
            }
            indented
        })
        .join("\n")
}
