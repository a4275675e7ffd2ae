pub mod fields;
pub mod render;
pub mod submit;
pub mod validate;

use anyhow::{Context, Result};
use profile_form::FormValues;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Read a JSON value record from `path`, or from stdin when `path` is "-"
pub fn read_values(path: &Path) -> Result<FormValues> {
    let content = if path == Path::new("-") {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read values from stdin")?;
        buffer
    } else {
        fs::read_to_string(path)
            .with_context(|| format!("Failed to read values file: {:?}", path))?
    };

    FormValues::from_json(&content)
        .with_context(|| format!("Failed to parse values file: {:?}", path))
}
