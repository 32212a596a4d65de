//! Type-driven sample value synthesis.
//!
//! Dispatch over the parsed [`TypeExpr`], first matching rule wins:
//!
//! | shape              | literal                                         |
//! |--------------------|-------------------------------------------------|
//! | `String`           | override, else `"Sample <field>"`               |
//! | `T?`               | `nil`                                           |
//! | `Int` family       | override (exact `Int` only), else `123`         |
//! | `Double` family    | `123.45`                                        |
//! | `Bool`             | `true`                                          |
//! | `[K: V]`           | `[synth(K, "key"): synth(V, "value")]`, or `[:]`|
//! | `[T]`              | `[synth(T, field)]`                             |
//! | `Set<T>`           | `Set([synth(T, "set value")])`                  |
//! | anything else      | `Name.sampleData`                               |
//!
//! Pure: the same `(type, field, options)` always yields the same literal.
use tracing::debug;

use crate::literal::{DEFAULT_ACCESSOR, SampleLiteral};
use crate::overrides::{OverrideKind, Overrides};
use crate::type_expr::{DictionaryShape, TypeExpr};

pub const DEFAULT_MAX_DEPTH: usize = 16;

pub const SAMPLE_INT: i64 = 123;
pub const SAMPLE_FLOAT: f64 = 123.45;

const KEY_HINT: &str = "key";
const VALUE_HINT: &str = "value";
const SET_HINT: &str = "set value";

/// Knobs for one expansion run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthOptions {
    pub overrides: Overrides,
    /// Container nesting past this depth degrades to a delegate reference.
    pub max_depth: usize,
    /// Name of the static accessor every sampleable type exposes.
    pub accessor_name: String,
}

impl Default for SynthOptions {
    fn default() -> Self {
        Self {
            overrides: Overrides::none(),
            max_depth: DEFAULT_MAX_DEPTH,
            accessor_name: DEFAULT_ACCESSOR.to_string(),
        }
    }
}

impl SynthOptions {
    pub fn with_overrides(mut self, overrides: Overrides) -> Self {
        self.overrides = overrides;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Primitive {
    String,
    Int,
    SizedInt,
    Float,
    Bool,
}

impl Primitive {
    fn classify(name: &str) -> Option<Self> {
        match name {
            "String" => Some(Primitive::String),
            "Int" => Some(Primitive::Int),
            "Int8" | "Int16" | "Int32" | "Int64" | "UInt" | "UInt8" | "UInt16" | "UInt32"
            | "UInt64" => Some(Primitive::SizedInt),
            "Double" | "Float" | "Float16" | "Float32" | "Float64" | "Float80" | "CGFloat" => {
                Some(Primitive::Float)
            }
            "Bool" => Some(Primitive::Bool),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Synthesizer<'a> {
    overrides: &'a Overrides,
    max_depth: usize,
}

impl<'a> Synthesizer<'a> {
    pub fn new(options: &'a SynthOptions) -> Self {
        Self { overrides: &options.overrides, max_depth: options.max_depth }
    }

    pub fn synthesize(&self, type_text: &str, field_name: &str) -> SampleLiteral {
        self.synthesize_expr(&TypeExpr::parse(type_text), field_name)
    }

    pub fn synthesize_expr(&self, ty: &TypeExpr, field_name: &str) -> SampleLiteral {
        self.literal_for(ty, field_name, 0)
    }

    fn literal_for(&self, ty: &TypeExpr, hint: &str, depth: usize) -> SampleLiteral {
        let next = depth + 1;
        match ty {
            TypeExpr::Named(name) => self.named(name, hint),
            TypeExpr::Optional(_) => SampleLiteral::Nil,
            TypeExpr::Dictionary(DictionaryShape::Unsplit(_)) => SampleLiteral::Dictionary(Vec::new()),
            _ if depth >= self.max_depth => {
                debug!(ty = %ty, depth, "nesting cap reached; delegating");
                SampleLiteral::delegate(ty.to_string())
            }
            TypeExpr::Dictionary(DictionaryShape::Entry { key, value }) => {
                SampleLiteral::Dictionary(vec![(
                    self.literal_for(key, KEY_HINT, next),
                    self.literal_for(value, VALUE_HINT, next),
                )])
            }
            TypeExpr::Array(elem) => SampleLiteral::Array(vec![self.literal_for(elem, hint, next)]),
            TypeExpr::Set(elem) => SampleLiteral::Set(vec![self.literal_for(elem, SET_HINT, next)]),
        }
    }

    fn named(&self, name: &str, hint: &str) -> SampleLiteral {
        match Primitive::classify(name) {
            Some(Primitive::String) => self
                .overrides
                .literal(OverrideKind::String)
                .unwrap_or_else(|| SampleLiteral::String(format!("Sample {hint}"))),
            Some(Primitive::Int) => self
                .overrides
                .literal(OverrideKind::Int)
                .unwrap_or(SampleLiteral::Integer(SAMPLE_INT)),
            Some(Primitive::SizedInt) => SampleLiteral::Integer(SAMPLE_INT),
            Some(Primitive::Float) => SampleLiteral::float(SAMPLE_FLOAT),
            Some(Primitive::Bool) => SampleLiteral::Bool(true),
            None => SampleLiteral::delegate(name),
        }
    }
}

/// One-shot helper with default options.
pub fn synthesize(type_text: &str, field_name: &str, overrides: &Overrides) -> SampleLiteral {
    let options = SynthOptions::default().with_overrides(overrides.clone());
    Synthesizer::new(&options).synthesize(type_text, field_name)
}
