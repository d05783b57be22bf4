use std::sync::Arc;

use type2parquet_infer::{MemberDef, SchemaCache, TypeDef, TypeExpr, TypeRegistry};
use type2parquet_schema::ScalarKind;

fn registry() -> TypeRegistry {
    let mut registry = TypeRegistry::new();
    registry.register(
        TypeDef::new("Base").with_member(MemberDef::new("Id", TypeExpr::Scalar(ScalarKind::I32))),
    );
    registry.register(
        TypeDef::new("Derived")
            .with_base("Base")
            .with_member(MemberDef::new("Own", TypeExpr::Scalar(ScalarKind::I64))),
    );
    registry
}

#[test]
fn repeated_lookups_share_one_tree() {
    let registry = registry();
    let cache = SchemaCache::new();

    let first = cache.get_or_infer(&registry, "Derived", true).unwrap();
    let second = cache.get_or_infer(&registry, "Derived", true).unwrap();
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(cache.len(), 1);
}

#[test]
fn inheritance_flag_is_part_of_the_key() {
    let registry = registry();
    let cache = SchemaCache::new();

    let with_inherited = cache.get_or_infer(&registry, "Derived", true).unwrap();
    let without = cache.get_or_infer(&registry, "Derived", false).unwrap();
    assert_eq!(with_inherited.len(), 2);
    assert_eq!(without.len(), 1);
    assert_eq!(cache.len(), 2);
}

#[test]
fn get_only_returns_previously_stored_trees() {
    let registry = registry();
    let cache = SchemaCache::new();

    assert!(cache.get("Derived", true).is_none());
    let inferred = cache.get_or_infer(&registry, "Derived", true).unwrap();
    let fetched = cache.get("Derived", true).unwrap();
    assert!(Arc::ptr_eq(&inferred, &fetched));
}

#[test]
fn failed_inference_is_not_cached() {
    let cache = SchemaCache::new();

    let empty = TypeRegistry::new();
    assert!(cache.get_or_infer(&empty, "Derived", true).is_err());
    assert!(cache.is_empty());

    let registry = registry();
    assert!(cache.get_or_infer(&registry, "Derived", true).is_ok());
    assert_eq!(cache.len(), 1);
}

#[test]
fn concurrent_lookups_agree_on_one_tree() {
    let registry = registry();
    let cache = SchemaCache::new();

    let schemas: Vec<_> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| scope.spawn(|| cache.get_or_infer(&registry, "Derived", true).unwrap()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    let first = cache.get("Derived", true).unwrap();
    for schema in schemas {
        assert_eq!(*schema, *first);
    }
    assert_eq!(cache.len(), 1);
}
