use std::sync::Arc;

use arrow::datatypes::{DataType, Field as ArrowField, Schema as ArrowSchema, TimeUnit};
use type2parquet_schema::{DataField, Field, ScalarKind, Schema};

/// Converts a `type2parquet` schema tree into an Arrow `Schema`.
pub fn schema_to_arrow(schema: &Schema) -> ArrowSchema {
    let arrow_fields: Vec<ArrowField> = schema.iter().map(field_to_arrow).collect();
    ArrowSchema::new(arrow_fields)
}

fn field_to_arrow(field: &Field) -> ArrowField {
    match field {
        Field::Data(f) => data_field_to_arrow(f),
        Field::List(f) => ArrowField::new(
            &f.name,
            DataType::List(Arc::new(field_to_arrow(&f.element))),
            false,
        ),
        Field::Map(f) => {
            let entries = DataType::Struct(
                vec![field_to_arrow(&f.key), field_to_arrow(&f.value)].into(),
            );
            let entry_field = ArrowField::new("entries", entries, false);
            ArrowField::new(&f.name, DataType::Map(Arc::new(entry_field), false), false)
        }
        Field::Struct(f) => {
            let children: Vec<ArrowField> = f.children.iter().map(field_to_arrow).collect();
            ArrowField::new(&f.name, DataType::Struct(children.into()), false)
        }
    }
}

fn data_field_to_arrow(f: &DataField) -> ArrowField {
    let scalar = scalar_to_datatype(f.kind);
    if f.array {
        // The nullability of an array leaf describes its elements.
        let item = ArrowField::new("item", scalar, f.nullable);
        ArrowField::new(&f.name, DataType::List(Arc::new(item)), false)
    } else {
        ArrowField::new(&f.name, scalar, f.nullable)
    }
}

fn scalar_to_datatype(kind: ScalarKind) -> DataType {
    match kind {
        ScalarKind::Bool => DataType::Boolean,
        ScalarKind::I8 => DataType::Int8,
        ScalarKind::I16 => DataType::Int16,
        ScalarKind::I32 => DataType::Int32,
        ScalarKind::I64 => DataType::Int64,
        ScalarKind::U8 => DataType::UInt8,
        ScalarKind::U16 => DataType::UInt16,
        ScalarKind::U32 => DataType::UInt32,
        ScalarKind::U64 => DataType::UInt64,
        ScalarKind::F32 => DataType::Float32,
        ScalarKind::F64 => DataType::Float64,
        ScalarKind::String => DataType::Utf8,
        ScalarKind::Bytes => DataType::Binary,
        ScalarKind::Timestamp => {
            DataType::Timestamp(TimeUnit::Nanosecond, Some(Arc::from(crate::TIMESTAMP_TZ)))
        }
    }
}
