use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{FortuneError, Result};

/// Read a text file, replacing invalid UTF-8 rather than failing.
pub fn read_text(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(FortuneError::MissingInput(path.to_path_buf()));
    }
    let bytes = fs::read(path).map_err(|e| FortuneError::io(path, e))?;
    debug!(path = %path.display(), bytes = bytes.len(), "read input");
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Write a file, creating its parent directory first.
pub fn write_text(path: &Path, contents: &str) -> Result<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).map_err(|e| FortuneError::io(dir, e))?;
    }
    fs::write(path, contents).map_err(|e| FortuneError::io(path, e))
}
