use std::io::Write;

use tempfile::NamedTempFile;

use crate::core::errors::Result;

/// Persist `content` to a fresh temporary file ending in `.env`.
///
/// The file is deleted when the returned handle is dropped, on both
/// success and failure paths.
pub fn persist(content: &[u8]) -> Result<NamedTempFile> {
    let mut file = tempfile::Builder::new()
        .prefix("envconf-")
        .suffix(".env")
        .tempfile()?;
    file.write_all(content)?;
    file.flush()?;
    Ok(file)
}
