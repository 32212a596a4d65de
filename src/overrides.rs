//! Caller-supplied literals that replace the built-in primitive defaults.
use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;

use crate::error::ExpandError;
use crate::literal::SampleLiteral;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OverrideKind {
    String,
    Int,
}

impl OverrideKind {
    pub const ALL: [OverrideKind; 2] = [OverrideKind::String, OverrideKind::Int];

    pub fn type_name(self) -> &'static str {
        match self {
            OverrideKind::String => "String",
            OverrideKind::Int => "Int",
        }
    }
}

impl fmt::Display for OverrideKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

impl FromStr for OverrideKind {
    type Err = ExpandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OverrideKind::ALL
            .into_iter()
            .find(|k| k.type_name() == s.trim())
            .ok_or_else(|| ExpandError::UnsupportedOverride(s.to_string()))
    }
}

/// Validated override table. Read-only once built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    string: Option<String>,
    int: Option<i64>,
}

impl Overrides {
    pub fn none() -> Self {
        Self::default()
    }

    /// Validate raw `(type name, literal text)` pairs. Later pairs win.
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self, ExpandError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut out = Self::default();
        for (key, value) in pairs {
            let value = value.as_ref();
            match key.as_ref().parse::<OverrideKind>()? {
                OverrideKind::String => out.string = Some(value.to_string()),
                OverrideKind::Int => {
                    let parsed = value.trim().parse::<i64>().map_err(|_| {
                        ExpandError::InvalidOverride {
                            kind: OverrideKind::Int,
                            value: value.to_string(),
                        }
                    })?;
                    out.int = Some(parsed);
                }
            }
        }
        Ok(out)
    }

    pub fn from_map(map: &IndexMap<String, String>) -> Result<Self, ExpandError> {
        Self::from_pairs(map.iter())
    }

    pub fn with_string(mut self, value: impl Into<String>) -> Self {
        self.string = Some(value.into());
        self
    }

    pub fn with_int(mut self, value: i64) -> Self {
        self.int = Some(value);
        self
    }

    pub fn literal(&self, kind: OverrideKind) -> Option<SampleLiteral> {
        match kind {
            OverrideKind::String => self.string.clone().map(SampleLiteral::String),
            OverrideKind::Int => self.int.map(SampleLiteral::Integer),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.string.is_none() && self.int.is_none()
    }
}

/// `KEY=VALUE` as typed on the command line.
pub fn parse_override_arg(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(k, v)| (k.trim().to_string(), v.to_string()))
        .ok_or_else(|| format!("expected KEY=VALUE, got `{raw}`"))
}
