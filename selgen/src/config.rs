use std::path::PathBuf;

use miette::{Context, IntoDiagnostic};
use selgen_codegen_scala::ScalaClientConfig;

#[derive(Debug, clap::Parser)]
#[command(version, about, long_about = None)]
pub struct MainArgs {
    #[command(subcommand)]
    pub command: CommandArgs,
}

#[derive(Debug, clap::Subcommand)]
pub enum CommandArgs {
    /// Generate a typed client from a GraphQL schema document.
    Codegen(CodegenCommandArgs),
}

#[derive(Debug, clap::Args)]
pub struct CodegenCommandArgs {
    /// The path to the GraphQL schema document.
    pub input: PathBuf,

    /// The output directory for the generated files.
    pub output: PathBuf,

    #[command(subcommand)]
    pub language: CodegenCommandLanguageArgs,
}

#[derive(Debug, clap::Subcommand)]
pub enum CodegenCommandLanguageArgs {
    /// Generate a Scala client.
    Scala(ScalaCodegenCommandArgs),
}

#[derive(Debug, Default, clap::Args)]
#[command(next_help_heading = "Generated client options")]
pub struct ScalaCodegenCommandArgs {
    /// Read generation options from a TOML file. Command-line flags
    /// override file values.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// The Scala package for the generated code. Required with
    /// `--split-files`.
    #[arg(long, value_name = "PACKAGE")]
    pub package: Option<String>,

    /// The envelope type around root-operation results.
    #[arg(long, value_name = "TYPE")]
    pub effect: Option<String>,

    /// An import path emitted after the client-library imports. May be
    /// repeated.
    #[arg(long = "import", value_name = "PATH")]
    pub imports: Vec<String>,

    /// Maps a GraphQL scalar or enum to a Scala type. May be repeated.
    #[arg(long = "scalar-mapping", value_name = "NAME=TYPE", value_parser = parse_mapping)]
    pub scalar_mappings: Vec<(String, String)>,

    /// Emit one file per declaration plus a package-object file.
    #[arg(long)]
    pub split_files: bool,

    /// Skip formatting the generated sources.
    #[arg(long)]
    pub no_fmt: bool,

    /// Add a `__Unknown` catch-all variant to every enum.
    #[arg(long)]
    pub extensible_enums: bool,
}

impl ScalaCodegenCommandArgs {
    /// Builds the generator configuration, layering command-line flags
    /// over the optional TOML config file.
    pub fn into_config(self) -> miette::Result<ScalaClientConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .into_diagnostic()
                    .with_context(|| format!("Failed to read `{}`", path.display()))?;
                toml::from_str(&text)
                    .into_diagnostic()
                    .with_context(|| format!("Failed to parse `{}`", path.display()))?
            }
            None => ScalaClientConfig::default(),
        };

        if let Some(package) = self.package {
            config.package_name = Some(package);
        }
        if let Some(effect) = self.effect {
            config.effect = effect;
        }
        config.additional_imports.extend(self.imports);
        for (name, scala_type) in self.scalar_mappings {
            config.scalar_mappings.insert(name, scala_type);
        }
        config.split_files |= self.split_files;
        config.extensible_enums |= self.extensible_enums;
        if self.no_fmt {
            config.enable_fmt = false;
        }
        Ok(config)
    }
}

fn parse_mapping(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(name, scala_type)| (name.trim().to_owned(), scala_type.trim().to_owned()))
        .filter(|(name, scala_type)| !name.is_empty() && !scala_type.is_empty())
        .ok_or_else(|| format!("expected `NAME=TYPE`, got `{raw}`"))
}
