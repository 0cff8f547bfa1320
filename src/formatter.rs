//! Canonical formatting of generated sources.

use crate::error::{Error, Result};
use log::debug;
use std::path::Path;

/// Trait for source formatters applied to rendered output before it is written.
pub trait SourceFormatter {
    /// Returns the canonical formatting of `source`.
    ///
    /// # Arguments
    /// * `source` - Complete rendered document
    /// * `output` - Destination path, reported in errors
    fn format(&self, source: &str, output: &Path) -> Result<String>;
}

/// Formats Rust sources by parsing them with `syn` and printing them with `prettyplease`.
///
/// Plain `//` comments do not survive the round trip; doc comments do.
pub struct RustFormatter;

impl SourceFormatter for RustFormatter {
    /// # Errors
    /// * `Error::FormatError` with the parser diagnostic if `source` is not valid Rust
    fn format(&self, source: &str, output: &Path) -> Result<String> {
        let file = syn::parse_file(source).map_err(|e| {
            let start = e.span().start();
            Error::FormatError {
                output: output.to_path_buf(),
                line: start.line,
                column: start.column + 1,
                message: e.to_string(),
            }
        })?;
        debug!("Formatted {} items for {}", file.items.len(), output.display());
        Ok(prettyplease::unparse(&file))
    }
}

/// Returns the formatter for `output`, chosen by its extension.
pub fn formatter_for(output: &Path) -> Option<Box<dyn SourceFormatter>> {
    match output.extension().and_then(|ext| ext.to_str()) {
        Some("rs") => Some(Box::new(RustFormatter)),
        _ => None,
    }
}
