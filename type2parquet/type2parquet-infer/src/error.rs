//! Error types for schema inference.

/// Error returned by [`infer_schema`](crate::infer_schema).
///
/// Inference is deterministic and pure with respect to its descriptor
/// input: every failure aborts the whole call without producing a
/// partial schema, and a retry would reproduce the same failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InferError {
    /// The root type or a referenced member type is absent from the source.
    #[error("unknown type `{name}` referenced by `{}`", .referenced_by.as_deref().unwrap_or("(root)"))]
    UnknownType {
        name: String,
        referenced_by: Option<String>,
    },

    /// A member's type matches no recognized leaf, sequence, mapping, or
    /// struct shape.
    #[error("unsupported type for member `{member}` of `{owner}`: {detail}")]
    UnsupportedType {
        owner: String,
        member: String,
        detail: String,
    },

    /// Recursive expansion would revisit a type already being expanded
    /// on the current call stack.
    #[error("cyclic type reference to `{type_name}` (expansion path: {path})")]
    CyclicType { type_name: String, path: String },

    /// Two sibling members resolve to the same output field name.
    #[error("duplicate field `{field}` while inferring `{type_name}`")]
    DuplicateField { type_name: String, field: String },
}
