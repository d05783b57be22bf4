//! Structural comparison with first-divergence diagnostics.
//!
//! Equality itself is the derived `PartialEq`; [`Schema::diff`] exists
//! for the cases where "not equal" is not enough and the caller wants
//! to know where two trees start to disagree.

use crate::{DataField, Field, Schema};

impl Schema {
    /// Deep, order-sensitive comparison that reports the first point of
    /// divergence with its path from the root.
    ///
    /// Returns `None` when the schemas are structurally equal, i.e.
    /// exactly when `self == other`.
    pub fn diff(&self, other: &Schema) -> Option<String> {
        diff_children(self.as_slice(), other.as_slice(), "")
    }

    /// Labelled wrapper over [`Schema::diff`] for test diagnostics.
    pub fn not_equals_message(
        &self,
        other: &Schema,
        this_name: &str,
        other_name: &str,
    ) -> Option<String> {
        self.diff(other)
            .map(|d| format!("{this_name} differs from {other_name} at {d}"))
    }
}

fn diff_children(a: &[Field], b: &[Field], path: &str) -> Option<String> {
    if a.len() != b.len() {
        return Some(format!(
            "{}: field count differs ({} vs {})",
            node(path),
            a.len(),
            b.len()
        ));
    }
    a.iter().zip(b).find_map(|(fa, fb)| diff_field(fa, fb, path))
}

fn diff_field(a: &Field, b: &Field, parent: &str) -> Option<String> {
    let path = join(parent, a.name());
    if a.name() != b.name() {
        return Some(format!(
            "{}: name differs (`{}` vs `{}`)",
            node(parent),
            a.name(),
            b.name()
        ));
    }
    if a.variant_name() != b.variant_name() {
        return Some(format!(
            "{path}: field kind differs ({} vs {})",
            a.variant_name(),
            b.variant_name()
        ));
    }
    match (a, b) {
        (Field::Data(da), Field::Data(db)) => diff_data(da, db, &path),
        (Field::List(la), Field::List(lb)) => diff_field(&la.element, &lb.element, &path),
        (Field::Map(ma), Field::Map(mb)) => {
            diff_field(&ma.key, &mb.key, &path).or_else(|| diff_field(&ma.value, &mb.value, &path))
        }
        (Field::Struct(sa), Field::Struct(sb)) => diff_children(&sa.children, &sb.children, &path),
        // Variant mismatch is reported above.
        _ => unreachable!(),
    }
}

fn diff_data(a: &DataField, b: &DataField, path: &str) -> Option<String> {
    if a.kind != b.kind {
        return Some(format!(
            "{path}: scalar type differs ({} vs {})",
            a.kind.type_name(),
            b.kind.type_name()
        ));
    }
    if a.nullable != b.nullable {
        return Some(format!(
            "{path}: nullability differs ({} vs {})",
            a.nullable, b.nullable
        ));
    }
    if a.array != b.array {
        return Some(format!(
            "{path}: array flag differs ({} vs {})",
            a.array, b.array
        ));
    }
    None
}

fn join(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_string()
    } else {
        format!("{parent}/{name}")
    }
}

fn node(path: &str) -> &str {
    if path.is_empty() { "(root)" } else { path }
}
