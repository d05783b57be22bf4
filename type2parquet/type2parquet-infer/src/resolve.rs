//! Annotation resolution: effective output name and ignore status.

use crate::descriptor::{Annotation, MemberDef};

/// Effective name and ignore status of one member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberResolution {
    pub name: String,
    pub ignored: bool,
}

/// One annotation vocabulary in the fixed-priority provider chain.
struct Vocabulary {
    rename: fn(&Annotation) -> Option<&str>,
    ignore: fn(&Annotation) -> bool,
}

/// Consulted in order; the first vocabulary yielding a rename wins.
/// New vocabularies are appended here without touching the walker or
/// the classifier.
const VOCABULARIES: [Vocabulary; 2] = [
    // Primary schema vocabulary.
    Vocabulary {
        rename: |a| match a {
            Annotation::Column(name) => Some(name.as_str()),
            _ => None,
        },
        ignore: |a| matches!(a, Annotation::ColumnIgnore),
    },
    // serde-compatible serialization vocabulary.
    Vocabulary {
        rename: |a| match a {
            Annotation::SerdeRename(name) => Some(name.as_str()),
            _ => None,
        },
        ignore: |a| matches!(a, Annotation::SerdeSkip),
    },
];

/// Resolve one member against the vocabulary chain.
///
/// An ignore marker from either vocabulary suffices and wins over any
/// simultaneous rename. Resolution is a pure function of the member's
/// static metadata.
pub fn resolve_member(member: &MemberDef) -> MemberResolution {
    let ignored = VOCABULARIES
        .iter()
        .any(|v| member.annotations.iter().any(v.ignore));
    let name = VOCABULARIES
        .iter()
        .find_map(|v| member.annotations.iter().find_map(v.rename))
        .unwrap_or(&member.name)
        .to_string();
    MemberResolution { name, ignored }
}
