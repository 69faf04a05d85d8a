use clap::Parser;
use miette::{Context, IntoDiagnostic, Result};
use selgen_codegen_scala::write_client;
use selgen_core::codegen::write_source;

mod config;

use config::{CodegenCommandLanguageArgs, CommandArgs, MainArgs};

fn main() -> Result<()> {
    let args = MainArgs::parse();
    match args.command {
        CommandArgs::Codegen(codegen) => {
            let source = std::fs::read_to_string(&codegen.input)
                .into_diagnostic()
                .with_context(|| format!("Failed to read `{}`", codegen.input.display()))?;

            let doc = graphql_parser::parse_schema::<String>(&source)
                .into_diagnostic()
                .context("Failed to parse GraphQL schema")?;

            let CodegenCommandLanguageArgs::Scala(scala) = codegen.language;
            let generator_config = scala.into_config()?;

            let files = write_client(&doc, &generator_config).into_diagnostic()?;

            println!(
                "Writing {} generated file(s) to `{}`...",
                files.len(),
                codegen.output.display()
            );
            for (name, text) in files {
                println!("Generating `{name}.scala`...");
                write_source(&codegen.output, &format!("{name}.scala"), &text)?;
            }
            println!("Generation complete");
        }
    }

    Ok(())
}
