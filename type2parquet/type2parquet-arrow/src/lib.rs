//! Arrow integration layer for `type2parquet`.
//!
//! One responsibility: convert an inferred
//! [`Schema`](type2parquet_schema::Schema) tree into an Arrow
//! [`Schema`](arrow::datatypes::Schema) via [`schema_to_arrow`].
//! Conventions:
//! - temporal leaves become nanosecond `Timestamp` with `UTC`;
//! - an array-flagged leaf becomes `List<item>` with the nullability on
//!   the item;
//! - map fields become `Map<entries<Key, Value>>` with unsorted keys.

mod schema_convert;

pub use schema_convert::schema_to_arrow;

pub(crate) const TIMESTAMP_TZ: &str = "+00:00";
