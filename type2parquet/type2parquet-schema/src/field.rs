use std::{
    fmt::{Display, Formatter, Result},
    ops::Deref,
};

/// Scalar leaf types a [`DataField`] can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarKind {
    Bool,
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
    F32,
    F64,
    String,
    Bytes,
    Timestamp,
}

impl ScalarKind {
    pub fn type_name(&self) -> &'static str {
        match self {
            ScalarKind::Bool => "bool",
            ScalarKind::I8 => "i8",
            ScalarKind::I16 => "i16",
            ScalarKind::I32 => "i32",
            ScalarKind::I64 => "i64",
            ScalarKind::U8 => "u8",
            ScalarKind::U16 => "u16",
            ScalarKind::U32 => "u32",
            ScalarKind::U64 => "u64",
            ScalarKind::F32 => "f32",
            ScalarKind::F64 => "f64",
            ScalarKind::String => "string",
            ScalarKind::Bytes => "bytes",
            ScalarKind::Timestamp => "timestamp",
        }
    }
}

/// Leaf field holding scalar values.
///
/// `nullable` marks an optional value, `array` marks zero-or-more values
/// of the underlying scalar type rather than exactly one. These flags
/// exist only on leaves; compound fields carry them per child.
#[derive(Debug, Clone, PartialEq)]
pub struct DataField {
    pub name: String,
    pub kind: ScalarKind,
    pub nullable: bool,
    pub array: bool,
}

impl DataField {
    pub fn new(name: impl Into<String>, kind: ScalarKind) -> Self {
        Self {
            name: name.into(),
            kind,
            nullable: false,
            array: false,
        }
    }

    pub fn nullable(name: impl Into<String>, kind: ScalarKind) -> Self {
        Self {
            nullable: true,
            ..Self::new(name, kind)
        }
    }

    pub fn array(name: impl Into<String>, kind: ScalarKind) -> Self {
        Self {
            array: true,
            ..Self::new(name, kind)
        }
    }
}

/// Repeated sequence of a single (possibly complex) element schema.
#[derive(Debug, Clone, PartialEq)]
pub struct ListField {
    pub name: String,
    pub element: Box<Field>,
}

impl ListField {
    pub fn new(name: impl Into<String>, element: Field) -> Self {
        Self {
            name: name.into(),
            element: Box::new(element),
        }
    }
}

/// Key→value association modelled as exactly two named children.
///
/// Inference always names the children `"Key"` and `"Value"`; the
/// constructor takes them as given.
#[derive(Debug, Clone, PartialEq)]
pub struct MapField {
    pub name: String,
    pub key: Box<Field>,
    pub value: Box<Field>,
}

impl MapField {
    pub fn new(name: impl Into<String>, key: Field, value: Field) -> Self {
        Self {
            name: name.into(),
            key: Box::new(key),
            value: Box::new(value),
        }
    }
}

/// Nested composite type represented by an ordered list of child fields.
#[derive(Debug, Clone, PartialEq)]
pub struct StructField {
    pub name: String,
    pub children: Vec<Field>,
}

impl StructField {
    pub fn new(name: impl Into<String>, children: Vec<Field>) -> Self {
        Self {
            name: name.into(),
            children,
        }
    }
}

/// A single node of the schema tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Field {
    Data(DataField),
    List(ListField),
    Map(MapField),
    Struct(StructField),
}

impl Field {
    pub fn name(&self) -> &str {
        match self {
            Field::Data(f) => &f.name,
            Field::List(f) => &f.name,
            Field::Map(f) => &f.name,
            Field::Struct(f) => &f.name,
        }
    }

    pub fn variant_name(&self) -> &'static str {
        match self {
            Field::Data(_) => "data",
            Field::List(_) => "list",
            Field::Map(_) => "map",
            Field::Struct(_) => "struct",
        }
    }
}

impl From<DataField> for Field {
    fn from(value: DataField) -> Self {
        Field::Data(value)
    }
}

impl From<ListField> for Field {
    fn from(value: ListField) -> Self {
        Field::List(value)
    }
}

impl From<MapField> for Field {
    fn from(value: MapField) -> Self {
        Field::Map(value)
    }
}

impl From<StructField> for Field {
    fn from(value: StructField) -> Self {
        Field::Struct(value)
    }
}

/// Ordered sequence of top-level fields describing one composite type.
///
/// Order is significant for equality and positional access. A schema is
/// immutable once built by inference.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Schema(pub Vec<Field>);

impl Schema {
    pub fn new(fields: Vec<Field>) -> Self {
        Self(fields)
    }

    pub fn as_slice(&self) -> &[Field] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Field> {
        self.0.iter()
    }
}

impl From<Vec<Field>> for Schema {
    fn from(value: Vec<Field>) -> Self {
        Self(value)
    }
}

impl From<Schema> for Vec<Field> {
    fn from(value: Schema) -> Self {
        value.0
    }
}

impl AsRef<[Field]> for Schema {
    fn as_ref(&self) -> &[Field] {
        self.as_slice()
    }
}

impl Deref for Schema {
    type Target = [Field];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl Display for Schema {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = super::format_schema(self)?;
        f.write_str(&text)
    }
}
