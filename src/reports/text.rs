/// Fixed-width boxed text report.
use cloet_core::units::unit_of;
use cloet_core::{ModelResult, Value};

use super::split_equations;

/// Total report width, borders included.
pub const REPORT_WIDTH: usize = 90;
const INNER_WIDTH: usize = REPORT_WIDTH - 2;
const ENTRY_INDENT: usize = 5;
const SIGNIFICANT_DIGITS: usize = 5;

pub fn text_report(result: &dyn ModelResult) -> String {
    let equations = split_equations(result.equations());
    let inputs = result.inputs();
    let outputs = result.outputs();

    let k_len = equations
        .keys()
        .map(String::len)
        .chain(inputs.keys().map(|k| k.len()))
        .chain(outputs.keys().map(|k| k.len()))
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    border(&mut out);
    row(&mut out, &format!(" Exposure Route: {}", result.route()));
    row(&mut out, &format!(" Exposure Model: {}", result.model_name()));
    row(&mut out, &format!(" Exposure Scenario: {}", result.scenario()));
    border(&mut out);

    row(&mut out, " Model Equations:");
    for (lhs, rhs) in &equations {
        entry(&mut out, k_len, lhs, rhs);
    }
    border(&mut out);

    row(&mut out, " Model Inputs:");
    for (&name, value) in inputs {
        entry(&mut out, k_len, name, &format!("{value} {}", unit_of(name)));
    }
    border(&mut out);

    row(&mut out, " Model Results:");
    for (&name, value) in outputs {
        entry(&mut out, k_len, name, &format!("{} {}", format_value(value), unit_of(name)));
    }
    border(&mut out);
    out
}

/// Render a result value: integers verbatim, floats to five significant
/// digits, falling back to four-decimal scientific notation when the
/// short form would be wider than five characters.
pub fn format_value(value: &Value) -> String {
    match *value {
        Value::Int(v) => v.to_string(),
        Value::Float(v) => {
            let short = general(v, SIGNIFICANT_DIGITS);
            if short.len() > SIGNIFICANT_DIGITS {
                scientific(v, SIGNIFICANT_DIGITS - 1)
            } else {
                short
            }
        }
    }
}

// -- Number formatting --

/// `precision` significant digits, scientific when the decimal exponent is
/// below -4 or at least `precision - 1`. Fixed output keeps one decimal.
fn general(v: f64, precision: usize) -> String {
    if !v.is_finite() {
        return non_finite(v);
    }
    let digits = precision.max(1);
    let exponent = decimal_exponent(v, digits - 1);

    if exponent < -4 || exponent >= digits as i32 - 1 {
        let sci = format!("{:.*e}", digits - 1, v);
        let (mantissa, exp) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
        let mantissa = strip_zeros(mantissa);
        return format!("{mantissa}e{}", signed_exponent(exp));
    }

    let decimals = (digits as i32 - 1 - exponent).max(0) as usize;
    let fixed = strip_zeros(&format!("{v:.decimals$}"));
    if fixed.contains('.') {
        fixed
    } else {
        format!("{fixed}.0")
    }
}

/// `{:.Ne}` with a signed, at least two-digit exponent (`2.5127e-03`).
fn scientific(v: f64, decimals: usize) -> String {
    if !v.is_finite() {
        return non_finite(v);
    }
    let sci = format!("{v:.decimals$e}");
    match sci.split_once('e') {
        Some((mantissa, exp)) => format!("{mantissa}e{}", signed_exponent(exp)),
        None => sci,
    }
}

/// Decimal exponent of `v` after rounding to `decimals + 1` significant digits.
fn decimal_exponent(v: f64, decimals: usize) -> i32 {
    let sci = format!("{v:.decimals$e}");
    sci.split_once('e')
        .and_then(|(_, exp)| exp.parse().ok())
        .unwrap_or(0)
}

fn signed_exponent(exp: &str) -> String {
    match exp.strip_prefix('-') {
        Some(digits) => format!("-{digits:0>2}"),
        None => format!("+{exp:0>2}"),
    }
}

fn strip_zeros(s: &str) -> String {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s.to_string()
    }
}

fn non_finite(v: f64) -> String {
    if v.is_nan() {
        "nan".to_string()
    } else if v > 0.0 {
        "inf".to_string()
    } else {
        "-inf".to_string()
    }
}

// -- Layout --

fn border(out: &mut String) {
    out.push('|');
    out.push_str(&"-".repeat(INNER_WIDTH));
    out.push_str("|\n");
}

/// One boxed row. Content wider than the box wraps onto continuation rows
/// indented by `hang` spaces.
fn wrapped_row(out: &mut String, content: &str, hang: usize) {
    let mut line = content.to_string();
    while line.len() > INNER_WIDTH {
        let head = &line[..=INNER_WIDTH];
        let cut = head
            .rfind(' ')
            .filter(|&i| i > hang && line[..i].trim_end().len() > hang)
            .unwrap_or(INNER_WIDTH);
        let (first, rest) = line.split_at(cut);
        out.push_str(&format!("|{:<INNER_WIDTH$}|\n", first.trim_end()));
        line = format!("{:hang$}{}", "", rest.trim_start());
    }
    out.push_str(&format!("|{line:<INNER_WIDTH$}|\n"));
}

fn row(out: &mut String, content: &str) {
    wrapped_row(out, content, ENTRY_INDENT);
}

fn entry(out: &mut String, k_len: usize, name: &str, value: &str) {
    let content = format!("{:ENTRY_INDENT$}{name:>k_len$} = {value}", "");
    wrapped_row(out, &content, ENTRY_INDENT + k_len + 3);
}
