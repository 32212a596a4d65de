use thiserror::Error;

use crate::decl::{DeclKind, SourceSpan};
use crate::overrides::OverrideKind;

/// Errors decided at the expansion boundary. Synthesis itself never fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExpandError {
    #[error("{}`{name}` is {} {kind}; sample data can only be generated for a struct", location(.span), article(.kind))]
    NotAnAggregateType {
        kind: DeclKind,
        name: String,
        span: Option<SourceSpan>,
    },
    #[error("unsupported override `{0}` (expected one of: String, Int)")]
    UnsupportedOverride(String),
    #[error("invalid {kind} override `{value}`")]
    InvalidOverride { kind: OverrideKind, value: String },
}

impl ExpandError {
    /// Stable identifier for the diagnostics channel.
    pub fn code(&self) -> &'static str {
        match self {
            ExpandError::NotAnAggregateType { .. } => "NotAnAggregateType",
            ExpandError::UnsupportedOverride(_) => "UnsupportedOverride",
            ExpandError::InvalidOverride { .. } => "InvalidOverride",
        }
    }
}

/// Failure to read a front-end declaration document.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("at JSON path {path} → {message}")]
    Json { path: String, message: String },
}

fn location(span: &Option<SourceSpan>) -> String {
    span.map(|s| format!("{s}: ")).unwrap_or_default()
}

fn article(kind: &DeclKind) -> &'static str {
    match kind {
        DeclKind::Enum | DeclKind::Actor | DeclKind::Extension => "an",
        _ => "a",
    }
}
