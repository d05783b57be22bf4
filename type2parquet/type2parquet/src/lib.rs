//! Parquet-style schema inference from declarative type definitions.
//!
//! ```rust
//! use type2parquet::{infer_schema, parse_definitions};
//!
//! let registry = parse_definitions(
//!     "\
//! type Point {
//!     x: f64;
//!     y: f64;
//! }
//! ",
//! )?;
//! let schema = infer_schema(&registry, "Point", true)?;
//! assert_eq!(schema.len(), 2);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use type2parquet_arrow as arrow;
pub use type2parquet_infer as infer;
pub use type2parquet_schema as schema;

pub use type2parquet_arrow::schema_to_arrow;
pub use type2parquet_infer::{InferError, SchemaCache, TypeRegistry, infer_schema};
pub use type2parquet_schema::Schema;

#[cfg(feature = "text")]
pub use type2parquet_text::{ParseError, parse_definitions};
