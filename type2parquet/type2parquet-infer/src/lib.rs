//! Schema inference for `type2parquet`.
//!
//! This crate walks declarative type descriptors ([`TypeDef`]) and
//! produces [`Schema`](type2parquet_schema::Schema) trees: the
//! [`infer_schema`] walker enumerates members (optionally including the
//! base-type chain), resolves rename/ignore annotations through a
//! fixed-priority vocabulary chain, classifies each member's container
//! shape and recurses into structs, list elements and map children.
//!
//! Inference is synchronous and pure: it reads only the immutable
//! descriptor source and builds a fresh tree per call, so concurrent
//! invocations need no coordination. [`SchemaCache`] adds optional
//! process-wide memoization on top.

mod cache;
mod classify;
mod descriptor;
mod error;
mod infer;
mod resolve;

pub use cache::SchemaCache;
pub use classify::{Shape, classify};
pub use descriptor::{Annotation, MemberDef, TypeDef, TypeExpr, TypeRegistry, TypeSource};
pub use error::InferError;
pub use infer::{LIST_ELEMENT_NAME, MAP_KEY_NAME, MAP_VALUE_NAME, infer_schema};
pub use resolve::{MemberResolution, resolve_member};
