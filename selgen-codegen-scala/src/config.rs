use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Configuration for Scala client generation.
///
/// All options default to the minimal invocation: no package, no scalar
/// mappings, a single `Client.scala` output, formatting enabled. The same
/// structure can be read from a TOML file with kebab-case keys.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct ScalaClientConfig {
    /// The Scala package for the generated code. Required when
    /// `split_files` is set; otherwise optional.
    pub package_name: Option<String>,

    /// The envelope type wrapped around root-operation results.
    /// Reserved; carried for the entry-point contract but consumed by no
    /// emission site.
    pub effect: String,

    /// Import paths emitted verbatim after the client-library imports.
    pub additional_imports: Vec<String>,

    /// Maps a GraphQL scalar or enum name to a Scala type expression.
    /// A mapped name loses its generated declaration; the mapping text is
    /// substituted at every reference site.
    pub scalar_mappings: IndexMap<String, String>,

    /// Emit one file per top-level declaration plus a package-object file,
    /// instead of a single `Client.scala`.
    pub split_files: bool,

    /// Run the generated sources through the formatter.
    pub enable_fmt: bool,

    /// Add a `__Unknown(value: String)` catch-all variant to every enum.
    pub extensible_enums: bool,

    /// Reserved flag for view-style generation.
    pub gen_view: bool,
}

impl Default for ScalaClientConfig {
    fn default() -> Self {
        Self {
            package_name: None,
            effect: "Effect".to_owned(),
            additional_imports: Vec::new(),
            scalar_mappings: IndexMap::new(),
            split_files: false,
            enable_fmt: true,
            extensible_enums: false,
            gen_view: false,
        }
    }
}
