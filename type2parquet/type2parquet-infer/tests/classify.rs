use type2parquet_infer::{Shape, TypeExpr, classify};
use type2parquet_schema::ScalarKind;

fn boxed(ty: TypeExpr) -> Box<TypeExpr> {
    Box::new(ty)
}

#[test]
fn scalars_classify_as_scalar() {
    let shape = classify(&TypeExpr::Scalar(ScalarKind::Bool)).unwrap();
    assert_eq!(shape, Shape::Scalar(ScalarKind::Bool));
}

#[test]
fn scalar_sequences_split_from_complex_sequences() {
    let scalars = TypeExpr::Sequence(boxed(TypeExpr::Scalar(ScalarKind::I32)));
    assert_eq!(
        classify(&scalars).unwrap(),
        Shape::ScalarSequence {
            kind: ScalarKind::I32,
            nullable: false,
        }
    );

    let complex = TypeExpr::Sequence(boxed(TypeExpr::Named("Point".to_string())));
    assert!(matches!(
        classify(&complex).unwrap(),
        Shape::ComplexSequence(TypeExpr::Named(name)) if name == "Point"
    ));
}

#[test]
fn optional_sequence_element_marks_the_leaf_nullable() {
    let ty = TypeExpr::Sequence(boxed(TypeExpr::Optional(boxed(TypeExpr::Scalar(
        ScalarKind::F64,
    )))));
    assert_eq!(
        classify(&ty).unwrap(),
        Shape::ScalarSequence {
            kind: ScalarKind::F64,
            nullable: true,
        }
    );
}

#[test]
fn maps_classify_with_both_parameters() {
    let ty = TypeExpr::Map {
        key: boxed(TypeExpr::Scalar(ScalarKind::String)),
        value: boxed(TypeExpr::Named("Point".to_string())),
    };
    let Shape::Mapping { key, value } = classify(&ty).unwrap() else {
        panic!("expected a mapping shape");
    };
    assert_eq!(key, &TypeExpr::Scalar(ScalarKind::String));
    assert_eq!(value, &TypeExpr::Named("Point".to_string()));
}

#[test]
fn named_types_classify_as_struct() {
    assert_eq!(
        classify(&TypeExpr::Named("Point".to_string())).unwrap(),
        Shape::Struct("Point")
    );
}

#[test]
fn a_bare_optional_is_not_classifiable() {
    let ty = TypeExpr::Optional(boxed(TypeExpr::Scalar(ScalarKind::I32)));
    assert!(classify(&ty).is_none());
}
