use type2parquet_schema::{DataField, Field, ListField, MapField, ScalarKind, Schema, StructField};

#[test]
fn data_field_new_is_plain_scalar() {
    let field = DataField::new("count", ScalarKind::I64);
    assert_eq!(field.name, "count");
    assert_eq!(field.kind, ScalarKind::I64);
    assert!(!field.nullable);
    assert!(!field.array);
}

#[test]
fn data_field_nullable_and_array_set_one_flag_each() {
    let nullable = DataField::nullable("score", ScalarKind::F32);
    assert!(nullable.nullable);
    assert!(!nullable.array);

    let array = DataField::array("values", ScalarKind::I32);
    assert!(!array.nullable);
    assert!(array.array);
}

#[test]
fn field_name_reaches_through_every_variant() {
    let fields: Vec<Field> = vec![
        DataField::new("a", ScalarKind::Bool).into(),
        ListField::new("b", DataField::new("element", ScalarKind::I32).into()).into(),
        MapField::new(
            "c",
            DataField::new("Key", ScalarKind::String).into(),
            DataField::new("Value", ScalarKind::I32).into(),
        )
        .into(),
        StructField::new("d", vec![]).into(),
    ];
    let names: Vec<&str> = fields.iter().map(Field::name).collect();
    assert_eq!(names, ["a", "b", "c", "d"]);

    let variants: Vec<&str> = fields.iter().map(Field::variant_name).collect();
    assert_eq!(variants, ["data", "list", "map", "struct"]);
}

#[test]
fn schema_is_positional() {
    let schema = Schema::from(vec![
        Field::from(DataField::new("first", ScalarKind::I32)),
        Field::from(DataField::new("second", ScalarKind::String)),
    ]);
    assert_eq!(schema.len(), 2);
    assert_eq!(schema[0].name(), "first");
    assert_eq!(schema[1].name(), "second");
}

#[test]
fn schema_equality_is_order_sensitive() {
    let a = Schema::from(vec![
        Field::from(DataField::new("x", ScalarKind::I32)),
        Field::from(DataField::new("y", ScalarKind::I32)),
    ]);
    let b = Schema::from(vec![
        Field::from(DataField::new("y", ScalarKind::I32)),
        Field::from(DataField::new("x", ScalarKind::I32)),
    ]);
    assert_ne!(a, b);
}
