//! Minimal text emitter for the generated sample accessor.
//!
//! The real emission backend lives in the host toolchain; this one exists so
//! the CLI and the fixture runner can show what would be generated.
use std::fmt::Write;

use crate::expand::Expansion;

const INDENT: &str = "    ";

#[derive(Debug, Default)]
pub struct Codegen {
    out: String,
    in_extension: bool,
}

impl Codegen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap each accessor in `extension TypeName { ... }` so the output can be
    /// pasted outside the type body.
    pub fn in_extension(mut self, yes: bool) -> Self {
        self.in_extension = yes;
        self
    }

    pub fn emit(&mut self, expansion: &Expansion) -> &mut Self {
        if !self.out.is_empty() {
            self.out.push('\n');
        }
        let base = if self.in_extension {
            let _ = writeln!(self.out, "extension {} {{", expansion.type_name);
            INDENT
        } else {
            ""
        };
        let _ = writeln!(
            self.out,
            "{base}static var {}: {} {{",
            expansion.accessor_name, expansion.type_name
        );
        let _ = writeln!(self.out, "{base}{INDENT}{}", expansion.constructor_call());
        let _ = writeln!(self.out, "{base}}}");
        if self.in_extension {
            self.out.push_str("}\n");
        }
        self
    }

    pub fn into_string(self) -> String {
        self.out
    }
}
