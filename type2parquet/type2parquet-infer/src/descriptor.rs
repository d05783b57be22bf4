//! Declarative type descriptors: the member metadata source for inference.
//!
//! Rust has no runtime reflection, so composite types are described
//! explicitly: a [`TypeDef`] lists its ordered members with their static
//! [`TypeExpr`] and annotations, and a [`TypeRegistry`] holds the
//! definitions by name. [`TypeSource`] is the seam that lets inference
//! run against any other metadata backend (generated descriptors, a
//! parsed definition file, ...).

use std::collections::HashMap;

use type2parquet_schema::ScalarKind;

/// Static type descriptor of a member.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeExpr {
    Scalar(ScalarKind),
    /// The designated optional-value wrapper (`T?` in the text language).
    Optional(Box<TypeExpr>),
    /// Ordered homogeneous container. Fixed-length arrays are declared
    /// as sequences; the length is not part of the schema.
    Sequence(Box<TypeExpr>),
    /// Generic container keyed by two independent type parameters.
    Map {
        key: Box<TypeExpr>,
        value: Box<TypeExpr>,
    },
    /// Reference to a composite type registered in the source.
    Named(String),
}

/// Member-level metadata from one of the two annotation vocabularies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Annotation {
    /// Primary schema vocabulary: emit the member under this column name.
    Column(String),
    /// Primary schema vocabulary: the member contributes no field.
    ColumnIgnore,
    /// serde-compatible rename, honored when no `Column` rename is present.
    SerdeRename(String),
    /// serde-compatible skip marker.
    SerdeSkip,
}

/// A single member inside a type definition.
#[derive(Debug, Clone, PartialEq)]
pub struct MemberDef {
    pub name: String,
    pub ty: TypeExpr,
    pub annotations: Vec<Annotation>,
}

impl MemberDef {
    pub fn new(name: impl Into<String>, ty: TypeExpr) -> Self {
        Self {
            name: name.into(),
            ty,
            annotations: Vec::new(),
        }
    }

    pub fn with_annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }
}

/// A composite type definition with its ordered members.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeDef {
    pub name: String,
    /// Immediate base type. When inference includes inherited members,
    /// the whole base chain's members are appended after the declared
    /// ones, most-derived first.
    pub base: Option<String>,
    pub members: Vec<MemberDef>,
}

impl TypeDef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            base: None,
            members: Vec::new(),
        }
    }

    pub fn with_base(mut self, base: impl Into<String>) -> Self {
        self.base = Some(base.into());
        self
    }

    pub fn with_member(mut self, member: MemberDef) -> Self {
        self.members.push(member);
        self
    }
}

/// Pluggable member metadata source consulted by the walker.
pub trait TypeSource {
    /// Look up a type definition by name.
    fn type_def(&self, name: &str) -> Option<&TypeDef>;
}

/// In-memory registry of type definitions, keyed by type name.
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    types: HashMap<String, TypeDef>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a definition, replacing any previous one with the same name.
    pub fn register(&mut self, def: TypeDef) {
        self.types.insert(def.name.clone(), def);
    }

    pub fn get(&self, name: &str) -> Option<&TypeDef> {
        self.types.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl TypeSource for TypeRegistry {
    fn type_def(&self, name: &str) -> Option<&TypeDef> {
        self.get(name)
    }
}
