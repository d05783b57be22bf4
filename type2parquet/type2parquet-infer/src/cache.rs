//! Optional process-wide memoization of inferred schemas.

use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};

use type2parquet_schema::Schema;

use crate::{descriptor::TypeSource, error::InferError, infer::infer_schema};

/// Append-only cache of inferred schemas, keyed by type name and the
/// inheritance-inclusion flag.
///
/// Redundant concurrent builds of the same key are tolerated: inference
/// runs outside the lock, the tree stored first is authoritative and
/// later duplicates are discarded. Failed inferences are not cached.
#[derive(Debug, Default)]
pub struct SchemaCache {
    schemas: RwLock<HashMap<(String, bool), Arc<Schema>>>,
}

impl SchemaCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a previously inferred schema.
    pub fn get(&self, root: &str, include_inherited: bool) -> Option<Arc<Schema>> {
        self.schemas
            .read()
            .expect("schema cache poisoned")
            .get(&(root.to_string(), include_inherited))
            .cloned()
    }

    /// Return the cached schema for the key, inferring and storing it on
    /// a miss.
    pub fn get_or_infer(
        &self,
        source: &dyn TypeSource,
        root: &str,
        include_inherited: bool,
    ) -> Result<Arc<Schema>, InferError> {
        if let Some(schema) = self.get(root, include_inherited) {
            return Ok(schema);
        }
        let schema = Arc::new(infer_schema(source, root, include_inherited)?);
        let mut schemas = self.schemas.write().expect("schema cache poisoned");
        let stored = schemas
            .entry((root.to_string(), include_inherited))
            .or_insert(schema);
        Ok(Arc::clone(stored))
    }

    pub fn len(&self) -> usize {
        self.schemas.read().expect("schema cache poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.read().expect("schema cache poisoned").is_empty()
    }
}
