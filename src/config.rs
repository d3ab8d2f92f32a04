//! Config file reading.
//!
//! The command surface accepts an optional ini-style config file. The file is
//! read and parsed into a flat key/value map; the conversion itself takes no
//! settings from it.

use crate::errors::{Nc2XmlError, Result};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Reads an ini-style config file into a `section.key` -> value map.
///
/// Lines starting with `#` or `;` are comments. Keys outside any `[section]`
/// header are stored under their bare name.
pub fn read_config_file(path: &Path) -> Result<HashMap<String, String>> {
    println!("Reading configuration file : {}", path.display());

    if !path.is_file() {
        return Err(Nc2XmlError::SourceNotFound {
            path: path.to_path_buf(),
        });
    }

    let contents = fs::read_to_string(path)?;
    let mut settings = HashMap::new();
    let mut section = String::new();

    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
            continue;
        }
        if let Some(header) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) {
            section = header.trim().to_string();
            continue;
        }
        if let Some((key, value)) = line.split_once('=') {
            let key = key.trim();
            let key = if section.is_empty() {
                key.to_string()
            } else {
                format!("{}.{}", section, key)
            };
            settings.insert(key, value.trim().to_string());
        }
    }

    Ok(settings)
}
