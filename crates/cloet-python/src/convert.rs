use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::{PyBool, PyDict, PyInt};
use serde_json::{Map, Number, Value as Json};

use cloet_core::{ParameterMap, Value};

/// Keyword arguments to a JSON parameter bag. `None` values are dropped
/// so the model default applies.
pub fn kwargs_to_params(kwargs: Option<&Bound<'_, PyDict>>) -> PyResult<Map<String, Json>> {
    let mut params = Map::new();
    let Some(kwargs) = kwargs else {
        return Ok(params);
    };

    for (key, value) in kwargs.iter() {
        let name: String = key.extract()?;
        if value.is_none() {
            continue;
        }
        if value.is_instance_of::<PyBool>() {
            return Err(PyValueError::new_err(format!("{name} must be a number, got bool")));
        }
        if value.is_instance_of::<PyInt>() {
            if let Ok(int) = value.extract::<u64>() {
                params.insert(name, Json::from(int));
                continue;
            }
        }
        let float: f64 = value
            .extract()
            .map_err(|_| PyValueError::new_err(format!("{name} must be a number")))?;
        let number = Number::from_f64(float)
            .ok_or_else(|| PyValueError::new_err(format!("{name} must be finite, got {float}")))?;
        params.insert(name, Json::Number(number));
    }
    Ok(params)
}

/// Ordered name to value mapping as a Python dict (insertion order kept).
pub fn parameter_map_to_dict<'py>(py: Python<'py>, map: &ParameterMap) -> PyResult<Bound<'py, PyDict>> {
    let dict = PyDict::new(py);
    for (&name, value) in map {
        match *value {
            Value::Int(v) => dict.set_item(name, v)?,
            Value::Float(v) => dict.set_item(name, v)?,
        }
    }
    Ok(dict)
}
