//! Parsed structural description of one declaration, as handed over by the
//! front-end. Plain data, no parsing happens here.
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeclKind {
    Struct,
    Class,
    Enum,
    Actor,
    Protocol,
    Extension,
}

impl DeclKind {
    pub fn keyword(self) -> &'static str {
        match self {
            DeclKind::Struct => "struct",
            DeclKind::Class => "class",
            DeclKind::Enum => "enum",
            DeclKind::Actor => "actor",
            DeclKind::Protocol => "protocol",
            DeclKind::Extension => "extension",
        }
    }
}

impl std::fmt::Display for DeclKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Location of the declaration in the original source, for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceSpan {
    pub line: u32,
    pub column: u32,
}

impl std::fmt::Display for SourceSpan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateDecl {
    pub kind: DeclKind,
    pub name: String,
    #[serde(default)]
    pub members: Vec<Member>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub span: Option<SourceSpan>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Member {
    Variable(VariableDecl),
    Function { name: String },
    Initializer,
    NestedType { name: String },
}

/// `let`/`var` declaration. One declaration may bind several names
/// (`let a: Int, b: Int`).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct VariableDecl {
    #[serde(default)]
    pub is_static: bool,
    pub bindings: Vec<PatternBinding>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternBinding {
    pub pattern: Pattern,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_annotation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initializer: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub accessors: Vec<AccessorKind>,
}

impl PatternBinding {
    /// A getter or setter means there is no storage behind the name.
    /// Observers alone keep the property stored.
    pub fn is_computed(&self) -> bool {
        self.accessors
            .iter()
            .any(|a| matches!(a, AccessorKind::Get | AccessorKind::Set))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pattern {
    Identifier(String),
    Tuple(Vec<Pattern>),
    Wildcard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessorKind {
    Get,
    Set,
    WillSet,
    DidSet,
}

// ————————————————————————————————————————————————————————————————————————————
// BUILDERS
// ————————————————————————————————————————————————————————————————————————————

impl AggregateDecl {
    pub fn new(kind: DeclKind, name: impl Into<String>) -> Self {
        Self { kind, name: name.into(), members: Vec::new(), span: None }
    }

    pub fn with_member(mut self, member: Member) -> Self {
        self.members.push(member);
        self
    }

    /// Shorthand for `let <name>: <ty>`.
    pub fn with_field(self, name: &str, ty: &str) -> Self {
        self.with_member(Member::Variable(VariableDecl {
            is_static: false,
            bindings: vec![PatternBinding::typed(name, ty)],
        }))
    }
}

impl PatternBinding {
    pub fn typed(name: &str, ty: &str) -> Self {
        Self {
            pattern: Pattern::Identifier(name.to_string()),
            type_annotation: Some(ty.to_string()),
            initializer: None,
            accessors: Vec::new(),
        }
    }

    pub fn with_initializer(mut self, init: &str) -> Self {
        self.initializer = Some(init.to_string());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_front_end_json() {
        let src = r#"{
            "kind": "struct",
            "name": "Model",
            "span": { "line": 3, "column": 1 },
            "members": [
                { "variable": { "bindings": [
                    { "pattern": { "identifier": "title" }, "type_annotation": "String" }
                ] } },
                { "variable": { "is_static": true, "bindings": [
                    { "pattern": { "identifier": "shared" }, "initializer": "Model()" }
                ] } },
                { "function": { "name": "render" } },
                "initializer"
            ]
        }"#;
        let decl: AggregateDecl = serde_json::from_str(src).unwrap();
        assert_eq!(decl.kind, DeclKind::Struct);
        assert_eq!(decl.members.len(), 4);
        assert_eq!(decl.span, Some(SourceSpan { line: 3, column: 1 }));
        assert!(matches!(decl.members[3], Member::Initializer));
    }

    #[test]
    fn observers_do_not_make_a_property_computed() {
        let mut b = PatternBinding::typed("count", "Int");
        b.accessors = vec![AccessorKind::WillSet, AccessorKind::DidSet];
        assert!(!b.is_computed());
        b.accessors.push(AccessorKind::Get);
        assert!(b.is_computed());
    }
}
