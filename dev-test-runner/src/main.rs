//! Replays `fixtures/*.json` through the expansion pipeline and diffs the
//! generated accessor against the expected source (whitespace-insensitive).
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use colored::Colorize;
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;

use model_sampleable::codegen::Codegen;
use model_sampleable::{AggregateDecl, expand_with_overrides};

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid regex"));

#[derive(Debug, Deserialize)]
struct Fixture {
    name: String,
    #[serde(default)]
    overrides: IndexMap<String, String>,
    declaration: AggregateDecl,
    expect: Expect,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
enum Expect {
    Source(String),
    Error(String),
}

fn normalize(src: &str) -> String {
    WHITESPACE.replace_all(src.trim(), " ").into_owned()
}

fn load_fixture(path: &Path) -> Result<Fixture> {
    let src = std::fs::read_to_string(path)?;
    let de = &mut serde_json::Deserializer::from_str(&src);
    serde_path_to_error::deserialize(de).map_err(|err| {
        let at = err.path().to_string();
        anyhow::anyhow!("at JSON path {at} → {}", err.into_inner())
    })
}

/// `Ok(None)` on pass, `Ok(Some(reason))` on mismatch.
fn check(fixture: &Fixture) -> Option<String> {
    let result = expand_with_overrides(&fixture.declaration, &fixture.overrides);
    match (&fixture.expect, result) {
        (Expect::Source(expected), Ok(expansion)) => {
            let mut cg = Codegen::new();
            cg.emit(&expansion);
            let actual = cg.into_string();
            (normalize(expected) != normalize(&actual))
                .then(|| format!("expected:\n{expected}\nactual:\n{actual}"))
        }
        (Expect::Source(_), Err(error)) => Some(format!("unexpected error: {error}")),
        (Expect::Error(code), Err(error)) => {
            (error.code() != code).then(|| format!("expected {code}, got {}", error.code()))
        }
        (Expect::Error(code), Ok(expansion)) => {
            Some(format!("expected {code}, got {}", expansion.constructor_call()))
        }
    }
}

fn fixture_paths(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut paths = std::fs::read_dir(dir)
        .with_context(|| format!("cannot read fixture dir {}", dir.display()))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.extension().is_some_and(|ext| ext == "json"))
        .collect::<Vec<_>>();
    paths.sort();
    Ok(paths)
}

fn run(dir: &Path) -> Result<usize> {
    let mut failed = 0;
    for path in fixture_paths(dir)? {
        let fixture = load_fixture(&path).with_context(|| format!("{}", path.display()))?;
        match check(&fixture) {
            None => eprintln!("{} {}", "✅ pass".green(), fixture.name),
            Some(reason) => {
                failed += 1;
                eprintln!("{} {} ({})\n{reason}", "❌ fail".red().bold(), fixture.name, path.display());
            }
        }
    }
    Ok(failed)
}

fn default_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures")
}

fn main() -> Result<()> {
    let dir = std::env::args().nth(1).map(PathBuf::from).unwrap_or_else(default_dir);
    let failed = run(&dir)?;
    if failed > 0 {
        bail!("{failed} fixture(s) failed");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_fixtures_pass() {
        assert_eq!(run(&default_dir()).unwrap(), 0);
    }

    #[test]
    fn normalization_collapses_layout() {
        assert_eq!(normalize("  a {\n    b\n}\n"), "a { b }");
    }
}
