use graphql_parser::schema::{Definition, Document, TypeDefinition};
use indexmap::IndexSet;
use itertools::Itertools;
use selgen_core::fmt::{FmtOptions, format_source};

use crate::config::ScalaClientConfig;
use crate::enum_::emit_enum;
use crate::input::emit_input;
use crate::naming::DeclNames;
use crate::object::{ObjectLike, emit_object, emit_phantom};
use crate::types::{RootRole, TypeIndex, type_definition_name};

#[derive(Debug, thiserror::Error)]
pub enum ScalaClientError {
    #[error("split-files output requires a package name")]
    MissingPackageName,
    #[error(transparent)]
    Fmt(#[from] selgen_core::fmt::FmtError),
}

/// One emitted top-level declaration, plus what it needs from the client
/// library.
struct Decl {
    file_name: String,
    phantom: Option<String>,
    body: String,
    field_builders: bool,
    values: bool,
}

/// Generates the typed client for a parsed schema document.
///
/// Returns `(name, source)` pairs: a single `"Client"` entry by default,
/// or — with `split_files` — a `"package"` entry followed by one entry per
/// declaration. Errors when `split_files` is set without a package name,
/// or when the formatter rejects its input. No I/O and no shared state;
/// a given document and configuration always produce byte-identical
/// output.
pub fn write_client<'a>(
    doc: &'a Document<'a, String>,
    config: &ScalaClientConfig,
) -> Result<Vec<(String, String)>, ScalaClientError> {
    let index = TypeIndex::new(doc);

    // Non-root definitions keep their source order; the root operation
    // types are emitted after them, in query/mutation/subscription order.
    let mut ordered = Vec::new();
    let mut roots: [Option<&TypeDefinition<'_, String>>; 3] = [None, None, None];
    for definition in &doc.definitions {
        if let Definition::TypeDefinition(ty) = definition {
            match index.root_role(type_definition_name(ty)) {
                Some(role) => roots[role as usize] = Some(ty),
                None => ordered.push(ty),
            }
        }
    }
    ordered.extend(roots.into_iter().flatten());
    ordered.retain(|ty| emits_declaration(ty, config));

    let names = DeclNames::new(
        RootRole::ALL.map(RootRole::sentinel),
        ordered.iter().map(|ty| type_definition_name(ty)),
    );

    let decls = ordered
        .iter()
        .map(|ty| emit_declaration(ty, &index, config, &names))
        .collect_vec();

    let files = if config.split_files {
        split_files(&decls, config)?
    } else {
        vec![("Client".to_owned(), single_file(&decls, config))]
    };

    if !config.enable_fmt {
        return Ok(files);
    }
    files
        .into_iter()
        .map(|(name, text)| {
            let formatted = format_source(&text, &FmtOptions::default())?;
            Ok((name, formatted))
        })
        .collect()
}

/// Whether a definition produces a top-level declaration. Scalars never
/// do (mapped ones are substituted, unmapped ones are left to fail
/// downstream), unions only exist through their variants, and a mapped
/// enum is replaced by its mapping.
fn emits_declaration(ty: &TypeDefinition<'_, String>, config: &ScalaClientConfig) -> bool {
    match ty {
        TypeDefinition::Object(_) | TypeDefinition::Interface(_) | TypeDefinition::InputObject(_) => {
            true
        }
        TypeDefinition::Enum(en) => !config.scalar_mappings.contains_key(en.name.as_str()),
        TypeDefinition::Scalar(_) | TypeDefinition::Union(_) => false,
    }
}

fn emit_declaration<'a>(
    ty: &'a TypeDefinition<'_, String>,
    index: &TypeIndex<'_>,
    config: &ScalaClientConfig,
    names: &DeclNames<'_>,
) -> Decl {
    let file_name = names.resolve(type_definition_name(ty)).to_owned();
    match ty {
        TypeDefinition::Object(object) => {
            let decl = ObjectLike::from(object);
            Decl {
                file_name,
                phantom: Some(emit_phantom(&decl, index, names)),
                body: emit_object(&decl, index, config, names),
                field_builders: true,
                values: false,
            }
        }
        TypeDefinition::Interface(interface) => {
            let decl = ObjectLike::from(interface);
            Decl {
                file_name,
                phantom: Some(emit_phantom(&decl, index, names)),
                body: emit_object(&decl, index, config, names),
                field_builders: true,
                values: false,
            }
        }
        TypeDefinition::Enum(en) => Decl {
            file_name,
            phantom: None,
            body: emit_enum(en, config, names),
            field_builders: false,
            values: true,
        },
        TypeDefinition::InputObject(input) => Decl {
            file_name,
            phantom: None,
            body: emit_input(input, config, names),
            field_builders: false,
            values: true,
        },
        TypeDefinition::Scalar(_) | TypeDefinition::Union(_) => unreachable!("filtered out"),
    }
}

/// Renders the import block: the library's field-builder imports, its
/// value imports, then the user's additional imports after a blank line.
/// Everything is deduped while preserving insertion order.
fn imports(field_builders: bool, values: bool, config: &ScalaClientConfig) -> String {
    let mut lines = IndexSet::new();
    if field_builders {
        lines.insert("import graphql.client.FieldBuilder._".to_owned());
    }
    if field_builders || values {
        lines.insert("import graphql.client._".to_owned());
    }
    if values {
        lines.insert("import graphql.client.ClientError.DecodingError".to_owned());
        lines.insert("import graphql.client.__Value._".to_owned());
    }
    let library_count = lines.len();
    for import in &config.additional_imports {
        lines.insert(format!("import {import}"));
    }

    let mut out = lines.iter().take(library_count).join("\n");
    let additional = lines.iter().skip(library_count).join("\n");
    if !additional.is_empty() {
        if !out.is_empty() {
            out.push_str("\n\n");
        }
        out.push_str(&additional);
    }
    out
}

fn single_file(decls: &[Decl], config: &ScalaClientConfig) -> String {
    let body = decls
        .iter()
        .map(|decl| {
            let mut block = String::new();
            if let Some(phantom) = &decl.phantom {
                block.push_str(phantom);
                block.push_str("\n\n");
            }
            block.push_str(&decl.body);
            crate::indent(&block, 1)
        })
        .join("\n\n");

    let imports = imports(
        decls.iter().any(|decl| decl.field_builders),
        decls.iter().any(|decl| decl.values),
        config,
    );

    let mut text = String::new();
    if let Some(package) = &config.package_name {
        text.push_str(&format!("package {package}\n\n"));
    }
    if !imports.is_empty() {
        text.push_str(&imports);
        text.push_str("\n\n");
    }
    text.push_str("object Client {\n");
    if !body.is_empty() {
        text.push('\n');
        text.push_str(&body);
        text.push('\n');
    }
    text.push_str("}\n");
    text
}

fn split_files(
    decls: &[Decl],
    config: &ScalaClientConfig,
) -> Result<Vec<(String, String)>, ScalaClientError> {
    let package = config
        .package_name
        .as_deref()
        .ok_or(ScalaClientError::MissingPackageName)?;
    let (parent, leaf) = match package.rsplit_once('.') {
        Some((parent, leaf)) => (Some(parent), leaf),
        None => (None, package),
    };

    let mut files = Vec::with_capacity(decls.len() + 1);

    // The package object declares every phantom and root alias, so each
    // per-type file can reference owner types across the package.
    let phantoms = decls
        .iter()
        .filter_map(|decl| decl.phantom.as_deref())
        .join("\n\n");
    let mut text = String::new();
    if let Some(parent) = parent {
        text.push_str(&format!("package {parent}\n\n"));
    }
    text.push_str(&format!("package object {leaf} {{\n"));
    if !phantoms.is_empty() {
        text.push('\n');
        text.push_str(&crate::indent(&phantoms, 1));
        text.push('\n');
    }
    text.push_str("}\n");
    files.push(("package".to_owned(), text));

    for decl in decls {
        let imports = imports(decl.field_builders, decl.values, config);
        let mut text = format!("package {package}\n\n");
        if !imports.is_empty() {
            text.push_str(&imports);
            text.push_str("\n\n");
        }
        text.push_str(&decl.body);
        text.push('\n');
        files.push((decl.file_name.clone(), text));
    }

    Ok(files)
}
