use std::sync::Arc;

use arrow::datatypes::{DataType, Field as ArrowField, TimeUnit};
use type2parquet_arrow::schema_to_arrow;
use type2parquet_schema::{DataField, Field, ListField, MapField, ScalarKind, Schema, StructField};

#[test]
fn scalar_leaves_map_to_arrow_primitives() {
    let schema = Schema::from(vec![
        Field::from(DataField::new("flag", ScalarKind::Bool)),
        Field::from(DataField::new("count", ScalarKind::I64)),
        Field::from(DataField::new("ratio", ScalarKind::F64)),
        Field::from(DataField::new("label", ScalarKind::String)),
        Field::from(DataField::new("payload", ScalarKind::Bytes)),
    ]);

    let arrow_schema = schema_to_arrow(&schema);
    let expected = [
        DataType::Boolean,
        DataType::Int64,
        DataType::Float64,
        DataType::Utf8,
        DataType::Binary,
    ];
    assert_eq!(arrow_schema.fields().len(), expected.len());
    for (field, dt) in arrow_schema.fields().iter().zip(expected) {
        assert_eq!(field.data_type(), &dt);
        assert!(!field.is_nullable());
    }
}

#[test]
fn nullable_leaf_keeps_its_flag() {
    let schema = Schema::from(vec![Field::from(DataField::nullable(
        "score",
        ScalarKind::F32,
    ))]);
    let arrow_schema = schema_to_arrow(&schema);
    assert!(arrow_schema.field(0).is_nullable());
}

#[test]
fn timestamp_leaf_is_nanosecond_utc() {
    let schema = Schema::from(vec![Field::from(DataField::new(
        "created",
        ScalarKind::Timestamp,
    ))]);
    let arrow_schema = schema_to_arrow(&schema);
    assert_eq!(
        arrow_schema.field(0).data_type(),
        &DataType::Timestamp(TimeUnit::Nanosecond, Some(Arc::from("+00:00")))
    );
}

#[test]
fn array_leaf_becomes_a_list_of_items() {
    let schema = Schema::from(vec![Field::from(DataField::array(
        "values",
        ScalarKind::I32,
    ))]);
    let arrow_schema = schema_to_arrow(&schema);
    assert_eq!(
        arrow_schema.field(0).data_type(),
        &DataType::List(Arc::new(ArrowField::new("item", DataType::Int32, false)))
    );
}

#[test]
fn list_field_wraps_the_converted_element() {
    let schema = Schema::from(vec![Field::from(ListField::new(
        "members",
        Field::from(StructField::new(
            "element",
            vec![DataField::new("id", ScalarKind::I32).into()],
        )),
    ))]);

    let arrow_schema = schema_to_arrow(&schema);
    let element = ArrowField::new(
        "element",
        DataType::Struct(vec![ArrowField::new("id", DataType::Int32, false)].into()),
        false,
    );
    assert_eq!(
        arrow_schema.field(0).data_type(),
        &DataType::List(Arc::new(element))
    );
}

#[test]
fn map_field_builds_the_entries_struct() {
    let schema = Schema::from(vec![Field::from(MapField::new(
        "tags",
        DataField::new("Key", ScalarKind::String).into(),
        DataField::new("Value", ScalarKind::I32).into(),
    ))]);

    let arrow_schema = schema_to_arrow(&schema);
    let entries = DataType::Struct(
        vec![
            ArrowField::new("Key", DataType::Utf8, false),
            ArrowField::new("Value", DataType::Int32, false),
        ]
        .into(),
    );
    let entry_field = ArrowField::new("entries", entries, false);
    assert_eq!(
        arrow_schema.field(0).data_type(),
        &DataType::Map(Arc::new(entry_field), false)
    );
}

#[test]
fn struct_field_converts_children_in_order() {
    let schema = Schema::from(vec![Field::from(StructField::new(
        "name",
        vec![
            DataField::new("first", ScalarKind::String).into(),
            DataField::nullable("middle", ScalarKind::String).into(),
            DataField::new("last", ScalarKind::String).into(),
        ],
    ))]);

    let arrow_schema = schema_to_arrow(&schema);
    let DataType::Struct(children) = arrow_schema.field(0).data_type() else {
        panic!("expected a struct data type");
    };
    let names: Vec<&str> = children.iter().map(|f| f.name().as_str()).collect();
    assert_eq!(names, ["first", "middle", "last"]);
    assert!(children[1].is_nullable());
}
