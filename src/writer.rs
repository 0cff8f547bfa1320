//! Output file handling.
//! Destinations are created together with their parent directories and
//! truncated before anything is written to them.

use crate::error::{Error, Result};
use log::debug;
use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Creates every missing parent directory of `path`.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
        }
    }
    Ok(())
}

/// Opens `path` for writing, creating it and its parents if needed and
/// truncating any previous content.
pub fn create_output(path: &Path) -> Result<BufWriter<File>> {
    ensure_parent_dir(path)?;
    debug!("Opening output {}", path.display());
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)
        .map_err(|e| Error::io(path, e))?;
    Ok(BufWriter::new(file))
}

/// Writes `content` to `path`, replacing whatever was there.
pub fn write_output(path: &Path, content: &str) -> Result<()> {
    let mut out = create_output(path)?;
    out.write_all(content.as_bytes()).map_err(|e| Error::io(path, e))?;
    out.flush().map_err(|e| Error::io(path, e))
}

/// Streams rendered output into `path` through `render`.
///
/// The buffered writer is flushed before returning so that write errors are
/// not lost on drop.
pub fn stream_output<F>(path: &Path, render: F) -> Result<()>
where
    F: FnOnce(&mut dyn Write) -> Result<()>,
{
    let mut out = create_output(path)?;
    let sink: &mut dyn Write = &mut out;
    render(sink)?;
    out.flush().map_err(|e| Error::io(path, e))
}
