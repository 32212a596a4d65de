//! Shape of a declared type, parsed once from its annotation text.
//!
//! Not a type system: only the shapes the synthesizer special-cases get their
//! own variant. Everything else is `Named`. Recognition order:
//!
//! 1. `T?` / `Optional<T>`
//! 2. `[K: V]` (top-level colon inside the brackets)
//! 3. `[T]`
//! 4. `Dictionary<K, V>`
//! 5. `Array<T>`
//! 6. `Set<T>`
//! 7. anything else → `Named`
use std::fmt;

/// Nesting deeper than this is left as `Named` text.
pub const MAX_PARSE_DEPTH: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeExpr {
    Named(String),
    Optional(Box<TypeExpr>),
    Array(Box<TypeExpr>),
    Set(Box<TypeExpr>),
    Dictionary(DictionaryShape),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DictionaryShape {
    Entry { key: Box<TypeExpr>, value: Box<TypeExpr> },
    /// Content did not split into exactly two parts. Keeps the source text.
    Unsplit(String),
}

impl TypeExpr {
    pub fn parse(text: &str) -> Self {
        parse_at(text, 0)
    }

    pub fn named(name: impl Into<String>) -> Self {
        TypeExpr::Named(name.into())
    }

    pub fn is_optional(&self) -> bool {
        matches!(self, TypeExpr::Optional(_))
    }
}

fn parse_at(text: &str, depth: usize) -> TypeExpr {
    let t = text.trim();
    if depth >= MAX_PARSE_DEPTH {
        return TypeExpr::Named(t.to_string());
    }
    let next = depth + 1;

    // 1) optionals
    if let Some(inner) = t.strip_suffix('?') {
        return TypeExpr::Optional(Box::new(parse_at(inner, next)));
    }
    if let Some(inner) = generic_args(t, "Optional") {
        return TypeExpr::Optional(Box::new(parse_at(inner, next)));
    }

    // 2) + 3) bracket sugar; colon-bearing form wins
    if let Some(inner) = enclosed(t, '[', ']') {
        let parts = split_top_level(inner, ':');
        if parts.len() > 1 {
            return dictionary(t, &parts, next);
        }
        return TypeExpr::Array(Box::new(parse_at(inner, next)));
    }

    // 4) + 5) + 6) generic spellings
    if let Some(inner) = generic_args(t, "Dictionary") {
        return dictionary(t, &split_top_level(inner, ','), next);
    }
    if let Some(inner) = generic_args(t, "Array") {
        return TypeExpr::Array(Box::new(parse_at(inner, next)));
    }
    if let Some(inner) = generic_args(t, "Set") {
        return TypeExpr::Set(Box::new(parse_at(inner, next)));
    }

    TypeExpr::Named(t.to_string())
}

fn dictionary(source: &str, parts: &[&str], depth: usize) -> TypeExpr {
    match parts {
        [k, v] if !k.trim().is_empty() && !v.trim().is_empty() => {
            TypeExpr::Dictionary(DictionaryShape::Entry {
                key: Box::new(parse_at(k, depth)),
                value: Box::new(parse_at(v, depth)),
            })
        }
        _ => TypeExpr::Dictionary(DictionaryShape::Unsplit(source.to_string())),
    }
}

// ————————————————————————————————————————————————————————————————————————————
// TEXT HELPERS
// ————————————————————————————————————————————————————————————————————————————

/// `Name<...>` → the text between the angle brackets, if the bracket opened
/// right after `name` is the one closing the string.
fn generic_args<'a>(t: &'a str, name: &str) -> Option<&'a str> {
    let rest = t.strip_prefix(name)?;
    enclosed(rest, '<', '>')
}

/// Content of `open ... close` when the first char opens a group that is only
/// closed by the last char.
fn enclosed(t: &str, open: char, close: char) -> Option<&str> {
    if !t.starts_with(open) || !t.ends_with(close) || t.len() < 2 {
        return None;
    }
    let mut depth = 0i32;
    let mut prev = '\0';
    for (i, c) in t.char_indices() {
        match c {
            '[' | '(' | '<' => depth += 1,
            '>' if prev == '-' => {}
            ']' | ')' | '>' => {
                depth -= 1;
                if depth == 0 {
                    return (i + c.len_utf8() == t.len()).then(|| &t[open.len_utf8()..i]);
                }
            }
            _ => {}
        }
        prev = c;
    }
    None
}

/// Split on `sep` where it is not nested inside `[]`, `()` or `<>`.
/// The `>` of an arrow (`->`) does not close anything.
pub fn split_top_level(s: &str, sep: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0i32;
    let mut start = 0;
    let mut prev = '\0';
    for (i, c) in s.char_indices() {
        match c {
            '[' | '(' | '<' => depth += 1,
            '>' if prev == '-' => {}
            ']' | ')' | '>' => depth -= 1,
            _ if c == sep && depth == 0 => {
                parts.push(&s[start..i]);
                start = i + c.len_utf8();
            }
            _ => {}
        }
        prev = c;
    }
    parts.push(&s[start..]);
    parts
}

impl fmt::Display for TypeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeExpr::Named(name) => f.write_str(name),
            TypeExpr::Optional(inner) => write!(f, "{inner}?"),
            TypeExpr::Array(elem) => write!(f, "[{elem}]"),
            TypeExpr::Set(elem) => write!(f, "Set<{elem}>"),
            TypeExpr::Dictionary(DictionaryShape::Entry { key, value }) => {
                write!(f, "[{key}: {value}]")
            }
            TypeExpr::Dictionary(DictionaryShape::Unsplit(src)) => f.write_str(src),
        }
    }
}
