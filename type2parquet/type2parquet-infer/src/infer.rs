//! The type graph walker: recursive descriptor-to-schema inference.

use type2parquet_schema::{DataField, Field, ListField, MapField, Schema, StructField};

use crate::{
    classify::{Shape, classify},
    descriptor::{MemberDef, TypeDef, TypeExpr, TypeSource},
    error::InferError,
    resolve::resolve_member,
};

/// Fixed name of a map field's key child.
pub const MAP_KEY_NAME: &str = "Key";
/// Fixed name of a map field's value child.
pub const MAP_VALUE_NAME: &str = "Value";
/// Fixed name of the child carrying a complex list element's schema.
pub const LIST_ELEMENT_NAME: &str = "element";

/// Infer the schema tree for a registered type.
///
/// With `include_inherited`, each type contributes its own declared
/// members first (in declaration order), followed by the declared
/// members of every base type walking the chain upward, so most-derived
/// members precede less-derived ones. The same rule applies to every
/// recursively inferred struct. The call either produces a complete
/// tree or fails; no partial schema is ever returned.
pub fn infer_schema(
    source: &dyn TypeSource,
    root: &str,
    include_inherited: bool,
) -> Result<Schema, InferError> {
    let mut walker = Walker {
        source,
        include_inherited,
        expanding: Vec::new(),
    };
    let fields = walker.infer_type(root, None)?;
    Ok(Schema::from(fields))
}

struct Walker<'a> {
    source: &'a dyn TypeSource,
    include_inherited: bool,
    /// Names of the types currently being expanded, root first.
    expanding: Vec<String>,
}

impl Walker<'_> {
    fn infer_type(
        &mut self,
        name: &str,
        referenced_by: Option<(&str, &str)>,
    ) -> Result<Vec<Field>, InferError> {
        if self.expanding.iter().any(|n| n == name) {
            return Err(InferError::CyclicType {
                type_name: name.to_string(),
                path: format!("{} -> {name}", self.expanding.join(" -> ")),
            });
        }
        let def = self
            .source
            .type_def(name)
            .ok_or_else(|| InferError::UnknownType {
                name: name.to_string(),
                referenced_by: referenced_by.map(|(owner, member)| format!("{owner}.{member}")),
            })?;
        self.expanding.push(name.to_string());
        let fields = self.infer_members(def);
        self.expanding.pop();
        fields
    }

    /// Enumerate the type's members (and its base chain's, when
    /// inherited members are included) and build one field per
    /// non-ignored member.
    fn infer_members(&mut self, def: &TypeDef) -> Result<Vec<Field>, InferError> {
        let mut fields: Vec<Field> = Vec::new();
        let mut chain: Vec<String> = vec![def.name.clone()];
        let mut current = def;

        loop {
            for member in &current.members {
                let resolved = resolve_member(member);
                if resolved.ignored {
                    continue;
                }
                if fields.iter().any(|f| f.name() == resolved.name) {
                    return Err(InferError::DuplicateField {
                        type_name: def.name.clone(),
                        field: resolved.name,
                    });
                }
                fields.push(self.member_field(&current.name, member, resolved.name)?);
            }

            let base = match &current.base {
                Some(base) if self.include_inherited => base.as_str(),
                _ => break,
            };
            if chain.iter().any(|n| n == base) {
                return Err(InferError::CyclicType {
                    type_name: base.to_string(),
                    path: format!("{} -> {base}", chain.join(" -> ")),
                });
            }
            current = self
                .source
                .type_def(base)
                .ok_or_else(|| InferError::UnknownType {
                    name: base.to_string(),
                    referenced_by: Some(current.name.clone()),
                })?;
            chain.push(current.name.clone());
        }

        Ok(fields)
    }

    fn member_field(
        &mut self,
        owner: &str,
        member: &MemberDef,
        name: String,
    ) -> Result<Field, InferError> {
        self.field_for_type(owner, &member.name, name, &member.ty)
    }

    /// Build the field for one (possibly nested) type expression.
    fn field_for_type(
        &mut self,
        owner: &str,
        member: &str,
        name: String,
        ty: &TypeExpr,
    ) -> Result<Field, InferError> {
        // One optional-value wrapper is unwrapped before classification;
        // the flag lands on the leaf only when the unwrapped type is a
        // scalar.
        let (ty, optional) = match ty {
            TypeExpr::Optional(inner) => (inner.as_ref(), true),
            other => (other, false),
        };
        let Some(shape) = classify(ty) else {
            return Err(InferError::UnsupportedType {
                owner: owner.to_string(),
                member: member.to_string(),
                detail: "nested optional wrapper".to_string(),
            });
        };
        Ok(match shape {
            Shape::Scalar(kind) => Field::Data(DataField {
                name,
                kind,
                nullable: optional,
                array: false,
            }),
            Shape::ScalarSequence { kind, nullable } => Field::Data(DataField {
                name,
                kind,
                nullable,
                array: true,
            }),
            Shape::ComplexSequence(elem) => {
                let element =
                    self.field_for_type(owner, member, LIST_ELEMENT_NAME.to_string(), elem)?;
                Field::List(ListField {
                    name,
                    element: Box::new(element),
                })
            }
            Shape::Mapping { key, value } => {
                let key = self.field_for_type(owner, member, MAP_KEY_NAME.to_string(), key)?;
                let value =
                    self.field_for_type(owner, member, MAP_VALUE_NAME.to_string(), value)?;
                Field::Map(MapField {
                    name,
                    key: Box::new(key),
                    value: Box::new(value),
                })
            }
            Shape::Struct(type_name) => {
                let children = self.infer_type(type_name, Some((owner, member)))?;
                Field::Struct(StructField { name, children })
            }
        })
    }
}
