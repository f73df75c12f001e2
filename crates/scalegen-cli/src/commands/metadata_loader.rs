use std::fs;
use std::io::{self, Read};
use std::path::Path;

use scalegen_core::Metadata;

use super::CliError;

/// Read and parse metadata from a file, or stdin for `-`.
pub fn load_metadata(path: &Path) -> Result<Metadata, CliError> {
    let json = if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(|source| CliError::Read {
                path: path.to_path_buf(),
                source,
            })?;
        buf
    } else {
        fs::read_to_string(path).map_err(|source| CliError::Read {
            path: path.to_path_buf(),
            source,
        })?
    };
    Ok(Metadata::from_json(&json)?)
}
