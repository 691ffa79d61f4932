/// Human and machine readable reports of a model evaluation.
mod file;
mod text;

pub use file::{checkfile, date_stamp, default_file_name, file_report};
pub use text::{format_value, text_report};

use cloet_core::{ModelResult, ParameterMap, Route};
use indexmap::IndexMap;
use serde::Serialize;

/// Serializable snapshot of an evaluated model.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JsonReport {
    pub route: Route,
    pub model_name: &'static str,
    pub scenario: &'static str,
    pub equations: IndexMap<String, String>,
    pub inputs: ParameterMap,
    pub outputs: ParameterMap,
}

pub fn json_report(result: &dyn ModelResult) -> JsonReport {
    JsonReport {
        route: result.route(),
        model_name: result.model_name(),
        scenario: result.scenario(),
        equations: split_equations(result.equations()),
        inputs: result.inputs().clone(),
        outputs: result.outputs().clone(),
    }
}

/// Split equation text into left-hand side to right-hand side pairs.
///
/// Blank lines are skipped; a line without `" = "` continues the previous
/// right-hand side.
pub fn split_equations(text: &str) -> IndexMap<String, String> {
    let mut equations: IndexMap<String, String> = IndexMap::new();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match line.split_once(" = ") {
            Some((lhs, rhs)) => {
                equations.insert(lhs.trim().to_string(), rhs.trim().to_string());
            }
            None => {
                if let Some((_, rhs)) = equations.last_mut() {
                    rhs.push(' ');
                    rhs.push_str(line);
                }
            }
        }
    }
    equations
}
