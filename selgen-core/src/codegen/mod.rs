use std::path::Path;

use miette::{Context, IntoDiagnostic};

mod unique;

pub use unique::UniqueNamesScope;

/// Writes one generated source file under the output directory, creating
/// intermediate directories as needed.
///
/// `file_name` is the path relative to `output`, extension included; the
/// generator decides file naming, this seam only does the I/O.
pub fn write_source(output: &Path, file_name: &str, text: &str) -> miette::Result<()> {
    let path = output.join(file_name);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .into_diagnostic()
            .with_context(|| format!("Failed to create directory `{}`", parent.display()))?;
    }
    std::fs::write(&path, text)
        .into_diagnostic()
        .with_context(|| format!("Failed to write `{}`", path.display()))?;
    Ok(())
}
