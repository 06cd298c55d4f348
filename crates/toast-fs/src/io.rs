//! Bounded reads of project files

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::{Error, Result};

/// Maximum size of a configuration file that will be read (10 MB)
pub const MAX_CONFIG_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Read a UTF-8 text file, refusing files above [`MAX_CONFIG_FILE_SIZE`].
pub fn read_text(path: &Path) -> Result<String> {
    let metadata = fs::metadata(path).map_err(|e| Error::io(path, e))?;
    if metadata.len() > MAX_CONFIG_FILE_SIZE {
        return Err(Error::TooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            limit: MAX_CONFIG_FILE_SIZE,
        });
    }
    fs::read_to_string(path).map_err(|e| Error::io(path, e))
}

/// Read and parse a JSON document.
pub fn read_json(path: &Path) -> Result<Value> {
    let content = read_text(path)?;
    serde_json::from_str(&content).map_err(|source| Error::JsonParse {
        path: path.to_path_buf(),
        source,
    })
}
