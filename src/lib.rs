//! Sample-instance synthesis for record declarations.
//!
//! Given the parsed description of a struct (field names and declared type
//! text), build a fully populated constructor call usable as preview or test
//! data: `Model(title: "Sample title", count: 123)`.
//!
//! Pipeline: [`extract::extract_fields`] → [`synth::Synthesizer`] per field →
//! [`expand::Expansion`] → (optionally) [`codegen::Codegen`].

pub mod codegen;
pub mod decl;
pub mod error;
pub mod expand;
pub mod extract;
pub mod literal;
pub mod overrides;
pub mod path_de;
pub mod synth;
pub mod type_expr;

pub use decl::{AggregateDecl, DeclKind, Member, Pattern, PatternBinding, VariableDecl};
pub use error::{ExpandError, LoadError};
pub use expand::{Expansion, SampleArgument, expand, expand_all, expand_with_overrides};
pub use extract::{FieldDescriptor, describe_members, extract_fields};
pub use literal::SampleLiteral;
pub use overrides::{OverrideKind, Overrides};
pub use synth::{SynthOptions, Synthesizer, synthesize};
pub use type_expr::TypeExpr;
