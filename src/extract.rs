use serde::Serialize;
use tracing::{debug, warn};

use crate::decl::{AggregateDecl, Member, Pattern, PatternBinding};
use crate::type_expr::TypeExpr;

/// One stored field, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldDescriptor {
    pub name: String,
    pub declared_type: String,
    pub has_initializer: bool,
}

impl FieldDescriptor {
    pub fn type_expr(&self) -> TypeExpr {
        TypeExpr::parse(&self.declared_type)
    }
}

/// Every stored instance property with a simple name, initialized or not.
///
/// Skipped silently: declarations binding more than one name, tuple and
/// wildcard patterns, computed properties, `static` properties and
/// non-variable members. Skipped with a warning: a binding with neither a type
/// annotation nor an initializer, since nothing can be synthesized for it.
pub fn describe_members(decl: &AggregateDecl) -> Vec<FieldDescriptor> {
    decl.members
        .iter()
        .filter_map(|member| match member {
            Member::Variable(var) if !var.is_static => match var.bindings.as_slice() {
                [binding] => describe_binding(&decl.name, binding),
                _ => None,
            },
            _ => None,
        })
        .collect()
}

/// The fields that need a synthesized argument: `describe_members` minus the
/// ones the author already initialized.
pub fn extract_fields(decl: &AggregateDecl) -> Vec<FieldDescriptor> {
    describe_members(decl)
        .into_iter()
        .filter(|field| {
            if field.has_initializer {
                debug!(aggregate = %decl.name, field = %field.name, "keeping explicit initializer");
            }
            !field.has_initializer
        })
        .collect()
}

fn describe_binding(aggregate: &str, binding: &PatternBinding) -> Option<FieldDescriptor> {
    let Pattern::Identifier(name) = &binding.pattern else {
        return None;
    };
    if binding.is_computed() {
        return None;
    }
    let has_initializer = binding.initializer.is_some();
    let declared_type = match binding.type_annotation.as_deref().map(str::trim) {
        Some(ty) if !ty.is_empty() => ty.to_string(),
        _ if has_initializer => String::new(),
        _ => {
            warn!(aggregate, field = %name, "field has no type annotation and no initializer; skipped");
            return None;
        }
    };
    Some(FieldDescriptor { name: name.clone(), declared_type, has_initializer })
}
