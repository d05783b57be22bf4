//! Container-shape classification of member types.

use type2parquet_schema::ScalarKind;

use crate::descriptor::TypeExpr;

/// Shape of a member's type after optional-wrapper unwrapping, deciding
/// which field variant the walker produces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape<'a> {
    /// Scalar leaf: leaf field, array flag false.
    Scalar(ScalarKind),
    /// Sequence of scalar leaves: leaf field with the array flag set.
    /// `nullable` reflects an optional-wrapped element.
    ScalarSequence { kind: ScalarKind, nullable: bool },
    /// Sequence of complex elements: list field with an `"element"` child.
    ComplexSequence(&'a TypeExpr),
    /// Two-parameter mapping: map field with `"Key"`/`"Value"` children.
    Mapping {
        key: &'a TypeExpr,
        value: &'a TypeExpr,
    },
    /// Named composite: struct field with recursively inferred children.
    Struct(&'a str),
}

/// Classify a type expression into the shape of field it produces.
///
/// The caller is expected to have stripped at most one optional-value
/// wrapper; `None` means the expression is not classifiable (a further
/// nested optional), which the walker turns into an unsupported-type
/// error. Shapes are checked in a fixed priority (mapping, then
/// sequence, then composite, then scalar) so a source that models
/// several container conventions through one structure stays
/// unambiguous.
pub fn classify(ty: &TypeExpr) -> Option<Shape<'_>> {
    match ty {
        TypeExpr::Map { key, value } => Some(Shape::Mapping {
            key: key.as_ref(),
            value: value.as_ref(),
        }),
        TypeExpr::Sequence(elem) => {
            let (inner, nullable) = match elem.as_ref() {
                TypeExpr::Optional(inner) => (inner.as_ref(), true),
                other => (other, false),
            };
            Some(match inner {
                TypeExpr::Scalar(kind) => Shape::ScalarSequence {
                    kind: *kind,
                    nullable,
                },
                _ => Shape::ComplexSequence(elem.as_ref()),
            })
        }
        TypeExpr::Named(name) => Some(Shape::Struct(name.as_str())),
        TypeExpr::Scalar(kind) => Some(Shape::Scalar(*kind)),
        TypeExpr::Optional(_) => None,
    }
}
