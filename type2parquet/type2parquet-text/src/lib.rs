//! Textual type-definition language for `type2parquet`.
//!
//! Turns definition text into a
//! [`TypeRegistry`](type2parquet_infer::TypeRegistry) ready for schema
//! inference:
//!
//! ```text
//! type Person : Entity {
//!     @column("AltId")
//!     annotated_id: i32;
//!     score: f32?;
//!     tags: map<string, i32>;
//!     members: sequence<Member>;
//! }
//! ```
//!
//! See [`parse_definitions`] for the grammar details.

mod error;
mod parser;

pub use error::ParseError;
pub use parser::parse_definitions;
