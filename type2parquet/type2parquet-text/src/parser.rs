//! Parser for the type-definition language, built on nom combinators.
//!
//! One declaration per line; `//` starts a comment. A definition opens
//! with `type Name {` (optionally `type Name : Base {`), lists members
//! as `name: type_expr;` and closes with `}`. Annotation lines
//! (`@column("...")`, `@ignore`, `@serde(rename = "...")`,
//! `@serde(skip)`) attach to the next member.
//!
//! Type expressions: scalar keywords (`bool`, `i8`..`i64`, `u8`..`u64`,
//! `f32`, `f64`, `string`, `bytes`, `timestamp`), `sequence<T>`,
//! `map<K, V>`, any other identifier as a reference to a registered
//! type, plus the postfix wrappers `[]` / `[N]` (sequence; a fixed
//! length is accepted but not recorded) and `?` (optional).

use nom::{
    branch::alt,
    bytes::complete::{tag, take_while, take_while1},
    character::complete::{alpha1, alphanumeric1, char, space0},
    combinator::{map, opt, recognize, value},
    multi::many0,
    sequence::{pair, preceded, terminated, tuple},
    IResult,
};
use type2parquet_infer::{Annotation, MemberDef, TypeDef, TypeExpr, TypeRegistry};
use type2parquet_schema::ScalarKind;

use crate::error::ParseError;

/// Parse a definition text into a [`TypeRegistry`].
pub fn parse_definitions(input: &str) -> Result<TypeRegistry, ParseError> {
    let mut registry = TypeRegistry::new();
    let mut current: Option<TypeDef> = None;
    let mut pending: Vec<Annotation> = Vec::new();

    for (idx, raw) in input.lines().enumerate() {
        let line_no = idx + 1;
        let line = strip_line_comment(raw).trim();
        if line.is_empty() {
            continue;
        }

        if let Some((name, base)) = parse_type_open(line) {
            if current.is_some() {
                return Err(format!("nested type declaration at line {line_no}: {line}").into());
            }
            if !pending.is_empty() {
                return Err(format!("dangling annotation before line {line_no}: {line}").into());
            }
            if registry.contains(name) {
                return Err(format!("duplicate type `{name}` at line {line_no}").into());
            }
            let mut def = TypeDef::new(name);
            if let Some(base) = base {
                def = def.with_base(base);
            }
            current = Some(def);
            continue;
        }

        if line == "}" {
            let Some(def) = current.take() else {
                return Err(format!("unmatched closing brace at line {line_no}").into());
            };
            if !pending.is_empty() {
                return Err(format!("dangling annotation at line {line_no}").into());
            }
            registry.register(def);
            continue;
        }

        let Some(def) = current.as_mut() else {
            return Err(format!("unexpected top-level statement at line {line_no}: {line}").into());
        };

        if line.starts_with('@') {
            let annotation = parse_annotation(line)
                .map_err(|e| ParseError(format!("parse error at line {line_no}: {e}")))?;
            pending.push(annotation);
            continue;
        }

        let mut member = parse_member(line)
            .map_err(|e| ParseError(format!("parse error at line {line_no}: {e}")))?;
        member.annotations.append(&mut pending);
        def.members.push(member);
    }

    if current.is_some() {
        return Err("unclosed type declaration".into());
    }
    Ok(registry)
}

/// Strip a trailing `//` comment, ignoring `//` inside quoted strings.
fn strip_line_comment(line: &str) -> &str {
    let mut in_str = false;
    let mut prev_slash = false;
    for (i, ch) in line.char_indices() {
        match ch {
            '"' => {
                in_str = !in_str;
                prev_slash = false;
            }
            '/' if !in_str => {
                if prev_slash {
                    return &line[..i - 1];
                }
                prev_slash = true;
            }
            _ => prev_slash = false,
        }
    }
    line
}

/// Parse a type declaration opener: `type Name {` or `type Name : Base {`
fn type_decl(input: &str) -> IResult<&str, (&str, Option<&str>)> {
    map(
        tuple((
            tag("type"),
            ws1,
            identifier,
            ws,
            opt(preceded(pair(char(':'), ws), identifier)),
            ws,
            char('{'),
        )),
        |(_, _, name, _, base, _, _)| (name, base),
    )(input)
}

fn parse_type_open(line: &str) -> Option<(&str, Option<&str>)> {
    match type_decl(line) {
        Ok((rest, result)) if rest.trim().is_empty() => Some(result),
        _ => None,
    }
}

fn parse_member(line: &str) -> Result<MemberDef, ParseError> {
    let body = line
        .strip_suffix(';')
        .ok_or_else(|| ParseError("member declaration must end with ';'".to_string()))?
        .trim();

    match member_decl(body) {
        Ok((rest, member)) if rest.trim().is_empty() => Ok(member),
        Ok((rest, _)) => Err(format!("unexpected trailing characters in member: {rest}").into()),
        Err(e) => Err(format!("failed to parse member declaration: {e}").into()),
    }
}

fn parse_annotation(line: &str) -> Result<Annotation, ParseError> {
    match annotation(line) {
        Ok((rest, annotation)) if rest.trim().is_empty() => Ok(annotation),
        Ok((rest, _)) => {
            Err(format!("unexpected trailing characters in annotation: {rest}").into())
        }
        Err(e) => Err(format!("failed to parse annotation '{line}': {e}").into()),
    }
}

/// Parse a member declaration (without semicolon): `name: type_expr`
fn member_decl(input: &str) -> IResult<&str, MemberDef> {
    map(
        tuple((identifier, ws, char(':'), ws, type_expr)),
        |(name, _, _, _, ty)| MemberDef::new(name, ty),
    )(input)
}

/// Parse an annotation body: `@column("Name")`, `@ignore`,
/// `@serde(rename = "Name")` or `@serde(skip)`.
fn annotation(input: &str) -> IResult<&str, Annotation> {
    preceded(
        char('@'),
        alt((
            map(
                tuple((tag("column"), ws, char('('), ws, quoted, ws, char(')'))),
                |(_, _, _, _, name, _, _)| Annotation::Column(name),
            ),
            value(
                Annotation::ColumnIgnore,
                terminated(tag("ignore"), keyword_boundary),
            ),
            map(
                tuple((
                    tag("serde"),
                    ws,
                    char('('),
                    ws,
                    tag("rename"),
                    ws,
                    char('='),
                    ws,
                    quoted,
                    ws,
                    char(')'),
                )),
                |(_, _, _, _, _, _, _, _, name, _, _)| Annotation::SerdeRename(name),
            ),
            value(
                Annotation::SerdeSkip,
                tuple((tag("serde"), ws, char('('), ws, tag("skip"), ws, char(')'))),
            ),
        )),
    )(input)
}

#[derive(Clone, Copy)]
enum Postfix {
    Sequence,
    Optional,
}

/// Parse any type expression with its postfix wrappers.
fn type_expr(input: &str) -> IResult<&str, TypeExpr> {
    let (mut rest, mut ty) = base_type(input)?;
    while let Ok((next, suffix)) = postfix(rest) {
        ty = match suffix {
            Postfix::Sequence => TypeExpr::Sequence(Box::new(ty)),
            Postfix::Optional => TypeExpr::Optional(Box::new(ty)),
        };
        rest = next;
    }
    Ok((rest, ty))
}

fn postfix(input: &str) -> IResult<&str, Postfix> {
    alt((
        value(
            Postfix::Sequence,
            tuple((ws, char('['), ws, opt(number), ws, char(']'))),
        ),
        value(Postfix::Optional, pair(ws, char('?'))),
    ))(input)
}

fn base_type(input: &str) -> IResult<&str, TypeExpr> {
    alt((
        map_type,
        sequence_type,
        map(scalar_type, TypeExpr::Scalar),
        map(identifier, |name| TypeExpr::Named(name.to_string())),
    ))(input)
}

/// Parse `sequence<T>`
fn sequence_type(input: &str) -> IResult<&str, TypeExpr> {
    map(
        tuple((tag("sequence"), ws, char('<'), ws, type_expr, ws, char('>'))),
        |(_, _, _, _, elem, _, _)| TypeExpr::Sequence(Box::new(elem)),
    )(input)
}

/// Parse `map<K, V>`
fn map_type(input: &str) -> IResult<&str, TypeExpr> {
    map(
        tuple((
            tag("map"),
            ws,
            char('<'),
            ws,
            type_expr,
            ws,
            char(','),
            ws,
            type_expr,
            ws,
            char('>'),
        )),
        |(_, _, _, _, key, _, _, _, val, _, _)| TypeExpr::Map {
            key: Box::new(key),
            value: Box::new(val),
        },
    )(input)
}

/// Parse scalar keywords (order matters: longer matches first).
fn scalar_type(input: &str) -> IResult<&str, ScalarKind> {
    terminated(
        alt((
            value(ScalarKind::Bool, tag("bool")),
            value(ScalarKind::I16, tag("i16")),
            value(ScalarKind::I32, tag("i32")),
            value(ScalarKind::I64, tag("i64")),
            value(ScalarKind::I8, tag("i8")),
            value(ScalarKind::U16, tag("u16")),
            value(ScalarKind::U32, tag("u32")),
            value(ScalarKind::U64, tag("u64")),
            value(ScalarKind::U8, tag("u8")),
            value(ScalarKind::F32, tag("f32")),
            value(ScalarKind::F64, tag("f64")),
            value(ScalarKind::String, tag("string")),
            value(ScalarKind::Bytes, tag("bytes")),
            value(ScalarKind::Timestamp, tag("timestamp")),
        )),
        keyword_boundary,
    )(input)
}

/// Parse an identifier (alphanumeric + underscore, must start with alpha or _)
fn identifier(input: &str) -> IResult<&str, &str> {
    recognize(pair(
        alt((alpha1, tag("_"))),
        many0(alt((alphanumeric1, tag("_")))),
    ))(input)
}

/// Parse a double-quoted string. Annotation names need no escapes.
fn quoted(input: &str) -> IResult<&str, String> {
    map(
        tuple((char('"'), take_while(|c: char| c != '"'), char('"'))),
        |(_, s, _): (char, &str, char)| s.to_string(),
    )(input)
}

/// Parse a number
fn number(input: &str) -> IResult<&str, usize> {
    map(take_while1(|c: char| c.is_ascii_digit()), |s: &str| {
        s.parse().unwrap_or(usize::MAX)
    })(input)
}

/// Parse zero-or-more spaces.
fn ws(input: &str) -> IResult<&str, ()> {
    value((), space0)(input)
}

/// Parse one-or-more whitespace characters.
fn ws1(input: &str) -> IResult<&str, ()> {
    value((), take_while1(|c: char| c.is_whitespace()))(input)
}

fn keyword_boundary(input: &str) -> IResult<&str, ()> {
    if input.chars().next().is_some_and(is_ident_continue) {
        return Err(nom::Err::Error(nom::error::Error::new(
            input,
            nom::error::ErrorKind::Verify,
        )));
    }
    Ok((input, ()))
}

fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
