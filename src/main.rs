//! cloet - run ChemSTEER occupational exposure models from the command line.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde_json::{Map, Number, Value as Json};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cloet::reports::{file_report, json_report, text_report};
use cloet::ModelKind;

#[derive(Parser, Debug)]
#[command(name = "cloet", version)]
#[command(about = "Command Line Occupational Exposure Tool (ChemSTEER dermal and inhalation models)")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every model with its route and name
    Models,

    /// List the valid scenarios of a model
    Scenarios {
        /// Model identifier, e.g. one_hand_liquid_contact
        model: ModelKind,
    },

    /// Evaluate a model and print or save its report
    Run {
        /// Model identifier, e.g. one_hand_liquid_contact
        model: ModelKind,

        /// Scenario key (defaults to the model's first scenario)
        #[arg(long, short)]
        scenario: Option<String>,

        /// Parameter assignment NAME=VALUE; repeatable, overrides --params-file
        #[arg(long = "param", short = 'p', value_name = "NAME=VALUE")]
        params: Vec<String>,

        /// JSON object of parameters
        #[arg(long, value_name = "FILE")]
        params_file: Option<PathBuf>,

        /// Report format
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,

        /// Write the report to a file (generated name when FILE is omitted)
        #[arg(long, value_name = "FILE", num_args = 0..=1)]
        save: Option<Option<PathBuf>>,

        /// Replace an existing report file instead of picking a new name
        #[arg(long, requires = "save")]
        overwrite: bool,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Format {
    Text,
    Json,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cloet=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Models => {
            for kind in ModelKind::ALL {
                println!("{:<34} {:<11} {}", kind.id(), kind.route().as_str(), kind.model_name());
            }
        }
        Command::Scenarios { model } => {
            let default = model.default_scenario();
            for scenario in model.scenarios() {
                if scenario == default {
                    println!("{scenario} (default)");
                } else {
                    println!("{scenario}");
                }
            }
        }
        Command::Run {
            model,
            scenario,
            params,
            params_file,
            format,
            save,
            overwrite,
        } => {
            let mut bag = match params_file {
                Some(path) => read_params_file(&path)?,
                None => Map::new(),
            };
            for assignment in &params {
                let (name, value) = parse_assignment(assignment)?;
                bag.insert(name, value);
            }
            check_parameter_names(model, &bag)?;
            debug!(model = model.id(), params = ?bag, "evaluating");

            let result = model
                .evaluate(Json::Object(bag), scenario.as_deref())
                .with_context(|| format!("failed to evaluate {}", model.model_name()))?;

            match (save, format) {
                (Some(path), Format::Text) => {
                    let written = file_report(result.as_ref(), path.as_deref(), !overwrite)
                        .context("failed to write report")?;
                    println!("{}", written.display());
                }
                (Some(_), Format::Json) => {
                    bail!("--save writes text reports; use --format text");
                }
                (None, Format::Text) => print!("{}", text_report(result.as_ref())),
                (None, Format::Json) => {
                    let report = json_report(result.as_ref());
                    println!("{}", serde_json::to_string_pretty(&report)?);
                }
            }
        }
    }
    Ok(())
}

fn read_params_file(path: &Path) -> Result<Map<String, Json>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read parameter file {}", path.display()))?;
    let parsed: Json = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse parameter file {}", path.display()))?;
    match parsed {
        Json::Object(map) => Ok(map),
        _ => bail!("parameter file {} must hold a JSON object", path.display()),
    }
}

/// `NAME=VALUE`; integer literals stay integers (worker counts), anything
/// else must parse as a finite float.
fn parse_assignment(raw: &str) -> Result<(String, Json)> {
    let (name, value) = raw
        .split_once('=')
        .with_context(|| format!("expected NAME=VALUE, got '{raw}'"))?;
    let name = name.trim();
    let value = value.trim();
    if name.is_empty() {
        bail!("missing parameter name in '{raw}'");
    }

    if let Ok(int) = value.parse::<u64>() {
        return Ok((name.to_string(), Json::from(int)));
    }
    let float: f64 = value
        .parse()
        .with_context(|| format!("parameter {name}: '{value}' is not a number"))?;
    let number = Number::from_f64(float)
        .with_context(|| format!("parameter {name}: '{value}' is not finite"))?;
    Ok((name.to_string(), Json::Number(number)))
}

fn check_parameter_names(model: ModelKind, bag: &Map<String, Json>) -> Result<()> {
    let known = model.parameter_names();
    let unknown: Vec<&str> = bag
        .keys()
        .map(String::as_str)
        .filter(|name| !known.iter().any(|k| k == name))
        .collect();
    if !unknown.is_empty() {
        bail!(
            "unknown parameter(s) for {}: {}; accepted: {}",
            model.id(),
            unknown.join(", "),
            known.join(", ")
        );
    }
    Ok(())
}
