use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};

/// Read a markdown file as UTF-8 text.
pub fn read_markdown(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|source| Error::ReadInput {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Read {} bytes from {}", bytes.len(), path.display());

    String::from_utf8(bytes).map_err(|source| Error::Decode {
        path: path.to_path_buf(),
        source,
    })
}

/// Create or overwrite `path` with the document. Not atomic.
pub fn write_document(path: &Path, html: &str) -> Result<()> {
    fs::write(path, html).map_err(|source| Error::WriteOutput {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Wrote {} bytes to {}", html.len(), path.display());
    Ok(())
}
