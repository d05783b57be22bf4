//! Parquet-style schema tree model for `type2parquet`.
//!
//! A [`Schema`] is an ordered sequence of [`Field`] nodes: scalar leaves
//! ([`DataField`]) with nullability and array flags, plus list, map and
//! struct fields nesting further schemas. Trees are built once by
//! inference and treated as read-only by consumers.

mod diff;
mod field;
mod format;

pub use field::{DataField, Field, ListField, MapField, ScalarKind, Schema, StructField};
pub use format::format_schema;
