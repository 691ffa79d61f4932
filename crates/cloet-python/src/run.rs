use pyo3::exceptions::{PyKeyError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::PyDict;
use serde_json::Value as Json;

use cloet::reports::{json_report, text_report};
use cloet_core::units::try_unit_of;
use cloet_core::{ModelKind, ModelResult};

use crate::convert::{kwargs_to_params, parameter_map_to_dict};
use crate::errors::to_py_err;

/// Result of one model evaluation.
#[pyclass(frozen, module = "cloet._core")]
pub struct ModelRun {
    inner: Box<dyn ModelResult>,
}

#[pymethods]
impl ModelRun {
    #[getter]
    fn route(&self) -> &'static str {
        self.inner.route().as_str()
    }

    #[getter]
    fn model_name(&self) -> &'static str {
        self.inner.model_name()
    }

    #[getter]
    fn equations(&self) -> &'static str {
        self.inner.equations()
    }

    #[getter]
    fn scenario(&self) -> &'static str {
        self.inner.scenario()
    }

    #[getter]
    fn inputs<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyDict>> {
        parameter_map_to_dict(py, self.inner.inputs())
    }

    #[getter]
    fn outputs<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyDict>> {
        parameter_map_to_dict(py, self.inner.outputs())
    }

    /// Report as a dict with `route`, `model_name`, `scenario`,
    /// `equations`, `inputs` and `outputs`.
    fn json_report<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyDict>> {
        let report = json_report(self.inner.as_ref());
        let equations = PyDict::new(py);
        for (lhs, rhs) in &report.equations {
            equations.set_item(lhs, rhs)?;
        }

        let dict = PyDict::new(py);
        dict.set_item("route", report.route.as_str())?;
        dict.set_item("model_name", report.model_name)?;
        dict.set_item("scenario", report.scenario)?;
        dict.set_item("equations", equations)?;
        dict.set_item("inputs", parameter_map_to_dict(py, &report.inputs)?)?;
        dict.set_item("outputs", parameter_map_to_dict(py, &report.outputs)?)?;
        Ok(dict)
    }

    fn text_report(&self) -> String {
        text_report(self.inner.as_ref())
    }

    fn __repr__(&self) -> String {
        format!(
            "ModelRun(model_name='{}', scenario='{}')",
            self.inner.model_name(),
            self.inner.scenario()
        )
    }
}

fn model_kind(model: &str) -> PyResult<ModelKind> {
    model.parse().map_err(to_py_err)
}

/// Evaluate `model` with keyword parameters, e.g.
/// `evaluate("one_hand_liquid_contact", scenario="high", Yderm=0.1)`.
#[pyfunction]
#[pyo3(signature = (model, scenario=None, **params))]
fn evaluate(
    model: &str,
    scenario: Option<&str>,
    params: Option<&Bound<'_, PyDict>>,
) -> PyResult<ModelRun> {
    let kind = model_kind(model)?;
    let params = kwargs_to_params(params)?;

    let known = kind.parameter_names();
    if let Some(unknown) = params.keys().find(|name| !known.iter().any(|k| k == name)) {
        return Err(PyValueError::new_err(format!(
            "unknown parameter '{unknown}' for {}; accepted: {}",
            kind.id(),
            known.join(", ")
        )));
    }

    let inner = kind
        .evaluate(Json::Object(params), scenario)
        .map_err(to_py_err)?;
    Ok(ModelRun { inner })
}

#[pyfunction]
fn get_scenarios(model: &str) -> PyResult<Vec<&'static str>> {
    Ok(model_kind(model)?.scenarios())
}

#[pyfunction]
fn models() -> Vec<&'static str> {
    ModelKind::ALL.iter().map(|kind| kind.id()).collect()
}

/// Unit string of a parameter or result name.
#[pyfunction]
fn unit(name: &str) -> PyResult<&'static str> {
    try_unit_of(name).ok_or_else(|| PyKeyError::new_err(name.to_string()))
}

pub fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(evaluate, m)?)?;
    m.add_function(wrap_pyfunction!(get_scenarios, m)?)?;
    m.add_function(wrap_pyfunction!(models, m)?)?;
    m.add_function(wrap_pyfunction!(unit, m)?)?;
    m.add_class::<ModelRun>()?;
    Ok(())
}
