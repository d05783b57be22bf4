use std::fmt::{Error, Result, Write as _};

use crate::{Field, Schema};

/// Format a schema in a readable style:
/// leaf fields are rendered in one line, compound fields are pretty-printed.
/// Nested fields follow the same rule.
pub fn format_schema(schema: &Schema) -> std::result::Result<String, Error> {
    let mut out = String::new();

    for field in schema.iter() {
        format_field(field, 0, &mut out)?;
    }

    Ok(out)
}

fn format_field(field: &Field, indent: usize, out: &mut String) -> Result {
    let pad = " ".repeat(indent);
    match field {
        Field::Data(f) => writeln!(
            out,
            "{pad}{}: {{ type: {}, nullable: {}, array: {} }}",
            f.name,
            f.kind.type_name(),
            f.nullable,
            f.array
        ),
        Field::Struct(f) => {
            writeln!(out, "{pad}{}:", f.name)?;
            let inner = " ".repeat(indent + 4);
            writeln!(out, "{inner}type: struct")?;
            writeln!(out, "{inner}fields:")?;
            for child in &f.children {
                format_field(child, indent + 8, out)?;
            }
            Ok(())
        }
        Field::List(f) => {
            writeln!(out, "{pad}{}:", f.name)?;
            let inner = " ".repeat(indent + 4);
            writeln!(out, "{inner}type: list")?;
            format_field(&f.element, indent + 4, out)
        }
        Field::Map(f) => {
            writeln!(out, "{pad}{}:", f.name)?;
            let inner = " ".repeat(indent + 4);
            writeln!(out, "{inner}type: map")?;
            format_field(&f.key, indent + 4, out)?;
            format_field(&f.value, indent + 4, out)
        }
    }
}
