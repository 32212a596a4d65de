//! Minimal CLI: declaration JSON → (accessor source | field list | single literal)
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use rayon::prelude::*;

use model_sampleable::codegen::Codegen;
use model_sampleable::literal::DEFAULT_ACCESSOR;
use model_sampleable::overrides::parse_override_arg;
use model_sampleable::path_de::load_decls;
use model_sampleable::synth::DEFAULT_MAX_DEPTH;
use model_sampleable::{AggregateDecl, Overrides, SynthOptions, Synthesizer, describe_members, expand_all};

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// synthesize sample instances for struct declarations described as JSON by a front-end
#[derive(Parser, Debug)]
#[command(name = "model-sampleable", version)]
pub struct CommandLineInterface {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// emit the static sample accessor for every input declaration
    Expand(ExpandOut),
    /// print the stored fields each declaration exposes, as JSON
    Fields(FieldsOut),
    /// synthesize the literal for a single type annotation
    Literal(LiteralOut),
}

#[derive(Args, Debug, Clone)]
struct InputSettings {
    /// One or more declaration documents. May be literal paths or quoted glob patterns
    #[arg(long, short, num_args = 1.., required = true)]
    input: Vec<String>,
}

#[derive(Args, Debug, Clone)]
struct SynthSettings {
    /// replace a primitive default, e.g. `--override String=custom --override Int=42`
    #[arg(long = "override", value_name = "KEY=VALUE", value_parser = parse_override_arg)]
    overrides: Vec<(String, String)>,

    /// container nesting past this depth falls back to a delegate reference
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// name of the static sample accessor
    #[arg(long, default_value = DEFAULT_ACCESSOR)]
    accessor_name: String,
}

#[derive(clap::Parser, Debug)]
struct ExpandOut {
    #[command(flatten)]
    input_settings: InputSettings,

    #[command(flatten)]
    synth_settings: SynthSettings,

    /// wrap each accessor in an `extension` block
    #[arg(long)]
    extension: bool,

    /// output file (stdout if omitted)
    #[arg(short, long)]
    out: Option<PathBuf>,
}

#[derive(clap::Parser, Debug)]
struct FieldsOut {
    #[command(flatten)]
    input_settings: InputSettings,

    /// include fields that already carry an initializer
    #[arg(long)]
    all: bool,

    /// output .json file (stdout if omitted)
    #[arg(short, long)]
    out: Option<PathBuf>,
}

#[derive(clap::Parser, Debug)]
struct LiteralOut {
    /// declared type text, e.g. `[String: Int]`
    type_text: String,

    /// field name used as the string hint
    #[arg(long, default_value = "value")]
    field: String,

    #[command(flatten)]
    synth_settings: SynthSettings,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl InputSettings {
    /// Documents are independent, so they are read on the rayon pool.
    fn load(&self) -> Result<Vec<AggregateDecl>> {
        let source_paths = resolve_file_path_patterns(&self.input)
            .map_err(|error| anyhow::anyhow!("failed to resolve input file paths: {error}"))?;
        let per_file = source_paths
            .par_iter()
            .map(|path| {
                load_decls(path).with_context(|| format!("failed to load {}", path.display()))
            })
            .collect::<Result<Vec<_>>>()?;
        let decls = per_file.into_iter().flatten().collect::<Vec<_>>();
        tracing::info!(files = source_paths.len(), declarations = decls.len(), "loaded inputs");
        Ok(decls)
    }
}

impl SynthSettings {
    fn options(&self) -> Result<SynthOptions> {
        let overrides = Overrides::from_pairs(self.overrides.iter().map(|(k, v)| (k, v)))?;
        Ok(SynthOptions {
            overrides,
            max_depth: self.max_depth,
            accessor_name: self.accessor_name.clone(),
        })
    }
}

impl CommandLineInterface {
    pub fn load() -> Self {
        Self::parse()
    }
    pub fn run(&self) -> Result<()> {
        match &self.cmd {
            Command::Expand(target) => {
                let options = target.synth_settings.options()?;
                let decls = target.input_settings.load()?;

                let mut cg = Codegen::new().in_extension(target.extension);
                let mut failures = 0usize;
                for result in expand_all(&decls, &options) {
                    match result {
                        Ok(expansion) => {
                            cg.emit(&expansion);
                        }
                        Err(error) => {
                            failures += 1;
                            eprintln!("{} {error}", "error:".red().bold());
                        }
                    }
                }
                write_output(target.out.as_ref(), &cg.into_string())?;
                if failures > 0 {
                    bail!("{failures} of {} declaration(s) could not be expanded", decls.len());
                }
                Ok(())
            }
            Command::Fields(target) => {
                let decls = target.input_settings.load()?;
                let report = decls
                    .iter()
                    .map(|decl| {
                        let fields = describe_members(decl)
                            .into_iter()
                            .filter(|f| target.all || !f.has_initializer)
                            .collect::<Vec<_>>();
                        serde_json::json!({
                            "aggregate": decl.name,
                            "kind": decl.kind,
                            "fields": fields,
                        })
                    })
                    .collect::<Vec<_>>();
                let src = serde_json::to_string_pretty(&report)?;
                write_output(target.out.as_ref(), &src)
            }
            Command::Literal(target) => {
                let options = target.synth_settings.options()?;
                let literal = Synthesizer::new(&options).synthesize(&target.type_text, &target.field);
                println!("{}", literal.render_with_accessor(&options.accessor_name));
                Ok(())
            }
        }
    }
}

// ————————————————————————————————————————————————————————————————————————————
// INTERNAL HELPERS
// ————————————————————————————————————————————————————————————————————————————

fn write_output(out: Option<&PathBuf>, src: &str) -> Result<()> {
    match out {
        Some(out) => {
            if let Some(parent) = out.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create {}", parent.display()))?;
            }
            std::fs::write(out, src).with_context(|| format!("failed to write {}", out.display()))
        }
        None => {
            print!("{src}");
            Ok(())
        }
    }
}

fn resolve_file_path_patterns<I>(patterns: I) -> Result<Vec<PathBuf>, Box<dyn std::error::Error>>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    fn has_glob_chars(s: &str) -> bool {
        s.bytes().any(|b| matches!(b, b'*' | b'?' | b'[' | b'{' ))
    }

    let mut out = Vec::<PathBuf>::new();

    for raw in patterns {
        let pattern = raw.as_ref();

        if has_glob_chars(pattern) {
            let mut matched_any = false;
            for entry in glob::glob(pattern)? {
                out.push(entry?);
                matched_any = true;
            }
            if !matched_any {
                return Err(format!("glob pattern matched no files: {pattern}").into());
            }
        } else {
            out.push(PathBuf::from(pattern));
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_repeated_overrides() {
        let cli = CommandLineInterface::try_parse_from([
            "model-sampleable", "literal", "String", "--field", "name",
            "--override", "String=custom", "--override", "Int=7",
        ])
        .unwrap();
        let Command::Literal(target) = &cli.cmd else { panic!("expected literal command") };
        let options = target.synth_settings.options().unwrap();
        assert_eq!(options.overrides, Overrides::none().with_string("custom").with_int(7));
        assert_eq!(options.max_depth, DEFAULT_MAX_DEPTH);
    }

    #[test]
    fn unknown_override_key_is_an_error() {
        let cli = CommandLineInterface::try_parse_from([
            "model-sampleable", "literal", "Int", "--override", "Uuid=x",
        ])
        .unwrap();
        let Command::Literal(target) = &cli.cmd else { panic!("expected literal command") };
        assert!(target.synth_settings.options().is_err());
    }

    #[test]
    fn literal_paths_pass_through_unchanged() {
        let paths = resolve_file_path_patterns(["decls/model.json"]).unwrap();
        assert_eq!(paths, vec![PathBuf::from("decls/model.json")]);
    }
}
