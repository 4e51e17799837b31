//! Writing the generated document.

use std::fs;
use std::io;
use std::path::Path;

/// Writes `contents` to `path`, creating missing parent directories.
///
/// An existing directory is not an error, and an existing file is replaced.
pub fn write_document(path: &Path, contents: &str) -> io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, contents)?;
    tracing::info!(path = %path.display(), bytes = contents.len(), "wrote token document");
    Ok(())
}
