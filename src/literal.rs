// Literal expression tree produced by the synthesizer.

use std::fmt::{self, Write};

use ordered_float::OrderedFloat;

pub const DEFAULT_ACCESSOR: &str = "sampleData";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SampleLiteral {
    String(String),
    Integer(i64),
    Float(OrderedFloat<f64>),
    Bool(bool),
    Nil,
    Array(Vec<SampleLiteral>),
    /// `Set([...])` over a sequence literal.
    Set(Vec<SampleLiteral>),
    /// Key/value pairs; empty renders as `[:]`.
    Dictionary(Vec<(SampleLiteral, SampleLiteral)>),
    /// `TypeName.<accessor>`: the named type supplies its own sample.
    Delegate { type_name: String },
}

impl SampleLiteral {
    pub fn string(s: impl Into<String>) -> Self {
        SampleLiteral::String(s.into())
    }

    pub fn float(f: f64) -> Self {
        SampleLiteral::Float(OrderedFloat(f))
    }

    pub fn delegate(type_name: impl Into<String>) -> Self {
        SampleLiteral::Delegate { type_name: type_name.into() }
    }

    pub fn render_with_accessor(&self, accessor: &str) -> String {
        let mut out = String::new();
        // writing into a String cannot fail
        let _ = self.write_to(&mut out, accessor);
        out
    }

    fn write_to<W: Write>(&self, out: &mut W, accessor: &str) -> fmt::Result {
        match self {
            SampleLiteral::String(s) => write_quoted(out, s),
            SampleLiteral::Integer(i) => write!(out, "{i}"),
            SampleLiteral::Float(f) => {
                let f = f.0;
                if f.is_finite() && f.fract() == 0.0 {
                    write!(out, "{f:.1}")
                } else {
                    write!(out, "{f}")
                }
            }
            SampleLiteral::Bool(b) => write!(out, "{b}"),
            SampleLiteral::Nil => out.write_str("nil"),
            SampleLiteral::Array(items) => write_sequence(out, items, accessor),
            SampleLiteral::Set(items) => {
                out.write_str("Set(")?;
                write_sequence(out, items, accessor)?;
                out.write_char(')')
            }
            SampleLiteral::Dictionary(entries) if entries.is_empty() => out.write_str("[:]"),
            SampleLiteral::Dictionary(entries) => {
                out.write_char('[')?;
                for (i, (k, v)) in entries.iter().enumerate() {
                    if i > 0 {
                        out.write_str(", ")?;
                    }
                    k.write_to(out, accessor)?;
                    out.write_str(": ")?;
                    v.write_to(out, accessor)?;
                }
                out.write_char(']')
            }
            SampleLiteral::Delegate { type_name } => write!(out, "{type_name}.{accessor}"),
        }
    }
}

fn write_sequence<W: Write>(out: &mut W, items: &[SampleLiteral], accessor: &str) -> fmt::Result {
    out.write_char('[')?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.write_str(", ")?;
        }
        item.write_to(out, accessor)?;
    }
    out.write_char(']')
}

fn write_quoted<W: Write>(out: &mut W, s: &str) -> fmt::Result {
    out.write_char('"')?;
    for c in s.chars() {
        match c {
            '"' => out.write_str("\\\"")?,
            '\\' => out.write_str("\\\\")?,
            '\n' => out.write_str("\\n")?,
            '\r' => out.write_str("\\r")?,
            '\t' => out.write_str("\\t")?,
            '\0' => out.write_str("\\0")?,
            c => out.write_char(c)?,
        }
    }
    out.write_char('"')
}

impl fmt::Display for SampleLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_to(f, DEFAULT_ACCESSOR)
    }
}
