use std::fs;
use std::path::Path;

use crate::error::Result;

/// Read a plain-text file verbatim.
///
/// Fails on IO errors and on content that is not valid UTF-8.
pub fn extract_text(path: &Path) -> Result<String> {
    Ok(fs::read_to_string(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_an_error() {
        assert!(extract_text(Path::new("/nonexistent/file.txt")).is_err());
    }
}
