//! CLI: JSON → (python | declarations)
use std::collections::HashSet;
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use rayon::prelude::*;
use tracing::{debug, info, warn};

use json_pytypes::{Config, Converter, LineEnding, NumericMode, OutputDialect};

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// infer Python type declarations (TypedDict, dataclass, pydantic) from JSON documents
#[derive(Parser, Debug)]
#[command(name = "json-pytypes", version)]
pub struct CommandLineInterface {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// infer and emit Python type declarations
    Python(PythonOut),
    /// infer and print the derived declaration list as JSON (debug view)
    Declarations(DeclarationsOut),
}

#[derive(Args, Debug, Clone)]
struct InputSettings {
    /// JSON Pointer to select a subnode in each document (e.g. /data/items/0/payload)
    #[arg(long)]
    json_pointer: Option<String>,

    /// One or more inputs. May be literal paths, quoted glob patterns, or '-' for stdin.
    /// Each input is converted independently.
    #[arg(long, short, num_args = 1.., required = true)]
    input: Vec<String>,
}

#[derive(Args, Debug, Clone)]
struct ConvertSettings {
    /// output declaration style
    #[arg(long, value_enum, default_value_t = OutputDialect::TypedDict)]
    dialect: OutputDialect,

    /// how JSON numbers are typed
    #[arg(long, value_enum, default_value_t = NumericMode::Union)]
    number: NumericMode,

    /// line separator of the generated source
    #[arg(long, value_enum, default_value_t = LineEnding::Native)]
    line_ending: LineEnding,
}

#[derive(clap::Parser, Debug)]
struct PythonOut {
    #[command(flatten)]
    input_settings: InputSettings,

    #[command(flatten)]
    convert_settings: ConvertSettings,

    /// output .py file, or a directory when there are several inputs (stdout if omitted)
    #[arg(short, long)]
    out: Option<PathBuf>,
}

#[derive(clap::Parser, Debug)]
struct DeclarationsOut {
    #[command(flatten)]
    input_settings: InputSettings,

    #[command(flatten)]
    convert_settings: ConvertSettings,

    /// output .json file, or a directory when there are several inputs (stdout if omitted)
    #[arg(short, long)]
    out: Option<PathBuf>,
}

/// One loaded input document.
#[derive(Debug)]
struct Source {
    label: String,
    stem: String,
    text: String,
}

/// Result of converting one [`Source`].
struct Outcome {
    source: Source,
    result: Result<String>,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl InputSettings {
    fn load(&self) -> Result<Vec<Source>> {
        let mut sources = Vec::new();
        for pattern in &self.input {
            if pattern == "-" {
                let mut text = String::new();
                std::io::stdin()
                    .read_to_string(&mut text)
                    .context("failed to read JSON from stdin")?;
                sources.push(Source::new("<stdin>".into(), "stdin".into(), text));
                continue;
            }
            for path in resolve_file_path_patterns([pattern])? {
                let text = std::fs::read_to_string(&path)
                    .with_context(|| format!("failed to read source file {}", path.display()))?;
                let stem = path
                    .file_stem()
                    .map(|s| s.to_string_lossy().into_owned())
                    .unwrap_or_else(|| "output".into());
                sources.push(Source::new(path.display().to_string(), stem, text));
            }
        }
        debug!(count = sources.len(), "inputs loaded");
        Ok(sources)
    }

    /// Convert every source in parallel; each run is independent.
    fn process<F>(&self, sources: Vec<Source>, convert: F) -> Vec<Outcome>
    where
        F: Fn(&str) -> Result<String> + Sync,
    {
        sources
            .into_par_iter()
            .map(|source| {
                let result = if source.text.trim().is_empty() {
                    // nothing to convert, nothing to print
                    Ok(String::new())
                } else {
                    match self.json_pointer.as_deref() {
                        None => convert(&source.text),
                        Some(ptr) => json_pytypes::path_de::select_pointer(&source.text, ptr)
                            .map_err(anyhow::Error::from)
                            .and_then(|text| convert(&text)),
                    }
                };
                Outcome { source, result }
            })
            .collect()
    }
}

impl Source {
    fn new(label: String, stem: String, text: String) -> Self {
        // a UTF-8 BOM is not JSON
        let text = match text.strip_prefix('\u{feff}') {
            Some(rest) => rest.to_string(),
            None => text,
        };
        Self { label, stem, text }
    }
}

impl ConvertSettings {
    fn converter(&self) -> Converter {
        Converter::new(
            Config::new(self.dialect, self.number).with_line_ending(self.line_ending),
        )
    }
}

impl CommandLineInterface {
    pub fn load() -> Self {
        Self::parse()
    }
    pub fn run(&self) -> Result<()> {
        match &self.cmd {
            Command::Python(target) => {
                let converter = target.convert_settings.converter();
                let sources = target.input_settings.load()?;
                let outcomes = target.input_settings.process(sources, |text| Ok(converter.try_convert(text)?));
                write_outcomes(outcomes, target.out.as_deref(), "py")
            }
            Command::Declarations(target) => {
                let converter = target.convert_settings.converter();
                let sources = target.input_settings.load()?;
                let outcomes = target.input_settings.process(sources, |text| {
                    let declarations = converter.declarations(text)?;
                    Ok(serde_json::to_string_pretty(&declarations)? + "\n")
                });
                write_outcomes(outcomes, target.out.as_deref(), "json")
            }
        }
    }
}

// ————————————————————————————————————————————————————————————————————————————
// INTERNAL HELPERS
// ————————————————————————————————————————————————————————————————————————————

fn write_outcomes(outcomes: Vec<Outcome>, out: Option<&Path>, extension: &str) -> Result<()> {
    let total = outcomes.len();
    let many = total > 1;
    let mut failed = 0usize;
    let mut written = HashSet::<String>::new();

    for Outcome { source, result } in outcomes {
        let document = match result {
            Ok(document) => document,
            Err(error) => {
                failed += 1;
                eprintln!("{} {}: {error:#}", "error:".red().bold(), source.label);
                continue;
            }
        };
        match out {
            None => {
                if many {
                    println!("# {}", source.label);
                }
                print!("{document}");
            }
            Some(out) => {
                let path = if many || out.is_dir() {
                    std::fs::create_dir_all(out)
                        .with_context(|| format!("failed to create {}", out.display()))?;
                    let stem = unique_stem(&mut written, &source.stem);
                    if stem != source.stem {
                        warn!(input = %source.label, stem = %stem, "output name already taken, renamed");
                    }
                    out.join(format!("{stem}.{extension}"))
                } else {
                    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
                        std::fs::create_dir_all(parent)
                            .with_context(|| format!("failed to create {}", parent.display()))?;
                    }
                    out.to_path_buf()
                };
                std::fs::write(&path, &document)
                    .with_context(|| format!("failed to write {}", path.display()))?;
                info!(input = %source.label, output = %path.display(), "wrote");
            }
        }
    }

    if failed > 0 {
        bail!("{failed} of {total} input(s) could not be converted");
    }
    Ok(())
}

/// Inputs from different directories may share a file stem (`a/data.json`,
/// `b/data.json`); later ones get `-2`, `-3`, … so no output is overwritten.
fn unique_stem(taken: &mut HashSet<String>, stem: &str) -> String {
    let mut candidate = stem.to_string();
    let mut suffix = 2usize;
    while !taken.insert(candidate.clone()) {
        candidate = format!("{stem}-{suffix}");
        suffix += 1;
    }
    candidate
}

fn resolve_file_path_patterns<I>(patterns: I) -> Result<Vec<PathBuf>>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    fn has_glob_chars(s: &str) -> bool {
        // Minimal glob detection for the `glob` crate syntax.
        s.bytes().any(|b| matches!(b, b'*' | b'?' | b'['))
    }

    let mut out = Vec::<PathBuf>::new();

    for raw in patterns {
        let pattern = raw.as_ref();

        if has_glob_chars(pattern) {
            let mut matched_any = false;
            for entry in glob::glob(pattern).with_context(|| format!("invalid glob pattern: {pattern}"))? {
                out.push(entry?);
                matched_any = true;
            }
            if !matched_any {
                // explicit glob that matched nothing is an error
                bail!("glob pattern matched no files: {pattern}");
            }
        } else {
            out.push(PathBuf::from(pattern));
        }
    }

    Ok(out)
}
