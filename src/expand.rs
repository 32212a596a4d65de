//! The function-call boundary: one declaration in, one constructor-call
//! description (or one error) out.
use indexmap::IndexMap;
use rayon::prelude::*;
use tracing::{debug, info};

use crate::decl::{AggregateDecl, DeclKind};
use crate::error::ExpandError;
use crate::extract::extract_fields;
use crate::literal::SampleLiteral;
use crate::overrides::Overrides;
use crate::synth::{SynthOptions, Synthesizer};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleArgument {
    pub name: String,
    pub literal: SampleLiteral,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expansion {
    pub type_name: String,
    pub accessor_name: String,
    /// Declaration order.
    pub arguments: Vec<SampleArgument>,
}

impl Expansion {
    /// `(field name, literal text)` pairs for the emission backend.
    pub fn pairs(&self) -> Vec<(String, String)> {
        self.arguments
            .iter()
            .map(|arg| (arg.name.clone(), arg.literal.render_with_accessor(&self.accessor_name)))
            .collect()
    }

    /// `TypeName(a: x, b: y)`
    pub fn constructor_call(&self) -> String {
        let args = self
            .pairs()
            .into_iter()
            .map(|(name, text)| format!("{name}: {text}"))
            .collect::<Vec<_>>()
            .join(", ");
        format!("{}({args})", self.type_name)
    }
}

pub fn expand(decl: &AggregateDecl, options: &SynthOptions) -> Result<Expansion, ExpandError> {
    if decl.kind != DeclKind::Struct {
        return Err(ExpandError::NotAnAggregateType {
            kind: decl.kind,
            name: decl.name.clone(),
            span: decl.span,
        });
    }

    let synth = Synthesizer::new(options);
    let arguments = extract_fields(decl)
        .into_iter()
        .map(|field| {
            let literal = synth.synthesize(&field.declared_type, &field.name);
            debug!(aggregate = %decl.name, field = %field.name, ty = %field.declared_type, %literal);
            SampleArgument { name: field.name, literal }
        })
        .collect::<Vec<_>>();

    info!(aggregate = %decl.name, fields = arguments.len(), "expanded sample accessor");
    Ok(Expansion {
        type_name: decl.name.clone(),
        accessor_name: options.accessor_name.clone(),
        arguments,
    })
}

/// Expansion with the override table as raw macro arguments. The table is
/// validated before anything else is looked at.
pub fn expand_with_overrides(
    decl: &AggregateDecl,
    overrides: &IndexMap<String, String>,
) -> Result<Expansion, ExpandError> {
    let options = SynthOptions::default().with_overrides(Overrides::from_map(overrides)?);
    expand(decl, &options)
}

/// Aggregates share nothing, so they are expanded on the rayon pool.
/// Results keep input order; one failure does not affect its siblings.
pub fn expand_all(
    decls: &[AggregateDecl],
    options: &SynthOptions,
) -> Vec<Result<Expansion, ExpandError>> {
    decls.par_iter().map(|decl| expand(decl, options)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decl::{Member, PatternBinding, SourceSpan, VariableDecl};

    fn model() -> AggregateDecl {
        AggregateDecl::new(DeclKind::Struct, "Model")
    }

    #[test]
    fn string_and_int_fields() {
        let decl = model().with_field("stringProperty", "String").with_field("intProperty", "Int");
        let out = expand(&decl, &SynthOptions::default()).unwrap();
        assert_eq!(
            out.constructor_call(),
            "Model(stringProperty: \"Sample stringProperty\", intProperty: 123)"
        );
        assert_eq!(
            out.pairs(),
            vec![
                ("stringProperty".to_string(), "\"Sample stringProperty\"".to_string()),
                ("intProperty".to_string(), "123".to_string()),
            ]
        );
    }

    #[test]
    fn no_fields_means_no_arguments() {
        let decl = model().with_member(Member::Variable(VariableDecl {
            is_static: false,
            bindings: vec![PatternBinding::typed("stored", "String").with_initializer("\"stored\"")],
        }));
        let out = expand(&decl, &SynthOptions::default()).unwrap();
        assert!(out.arguments.is_empty());
        assert_eq!(out.constructor_call(), "Model()");
    }

    #[test]
    fn non_struct_is_rejected_without_output() {
        let mut decl = AggregateDecl::new(DeclKind::Class, "Service").with_field("name", "String");
        decl.span = Some(SourceSpan { line: 2, column: 5 });
        let err = expand(&decl, &SynthOptions::default()).unwrap_err();
        assert_eq!(
            err,
            ExpandError::NotAnAggregateType {
                kind: DeclKind::Class,
                name: "Service".into(),
                span: Some(SourceSpan { line: 2, column: 5 }),
            }
        );
    }

    #[test]
    fn raw_overrides_are_validated_at_the_boundary() {
        let decl = model().with_field("name", "String").with_field("count", "Int");
        let mut raw = IndexMap::new();
        raw.insert("String".to_string(), "custom".to_string());
        raw.insert("Int".to_string(), "42".to_string());
        let out = expand_with_overrides(&decl, &raw).unwrap();
        assert_eq!(out.constructor_call(), "Model(name: \"custom\", count: 42)");

        raw.insert("Date".to_string(), "now".to_string());
        assert_eq!(
            expand_with_overrides(&decl, &raw).unwrap_err(),
            ExpandError::UnsupportedOverride("Date".into())
        );
    }

    #[test]
    fn custom_accessor_name_reaches_delegates() {
        let decl = model().with_field("owner", "User");
        let options = SynthOptions { accessor_name: "preview".into(), ..SynthOptions::default() };
        let out = expand(&decl, &options).unwrap();
        assert_eq!(out.constructor_call(), "Model(owner: User.preview)");
    }

    #[test]
    fn siblings_are_independent() {
        let decls = vec![
            model().with_field("a", "Bool"),
            AggregateDecl::new(DeclKind::Enum, "Kind"),
            AggregateDecl::new(DeclKind::Struct, "Other").with_field("b", "Set<String>"),
        ];
        let results = expand_all(&decls, &SynthOptions::default());
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].as_ref().unwrap().constructor_call(), "Model(a: true)");
        assert!(matches!(results[1], Err(ExpandError::NotAnAggregateType { .. })));
        assert_eq!(
            results[2].as_ref().unwrap().constructor_call(),
            "Other(b: Set([\"Sample set value\"]))"
        );
    }
}
