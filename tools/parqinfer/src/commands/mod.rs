pub mod diff;
pub mod print;

use std::{fs, path::Path};

use anyhow::{Context, Result};
use type2parquet::{Schema, infer_schema, parse_definitions};

/// Parse a definition file and infer the schema for one type.
pub(crate) fn load_schema(path: &Path, type_name: &str, include_inherited: bool) -> Result<Schema> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let registry = parse_definitions(&text)?;
    let schema = infer_schema(&registry, type_name, include_inherited)
        .with_context(|| format!("failed to infer schema from {}", path.display()))?;
    Ok(schema)
}
