use pyo3::create_exception;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use cloet_core::{CatalogError, ExposureError};

create_exception!(_core, BoundsError, PyValueError, "A parameter is outside its admissible range.");
create_exception!(_core, ScenarioError, PyValueError, "The scenario is not offered by the model.");
create_exception!(_core, RouteError, PyValueError, "Unknown exposure route.");

/// Map a catalog failure onto the matching Python exception class.
pub fn to_py_err(err: CatalogError) -> PyErr {
    let message = err.to_string();
    match err {
        CatalogError::Exposure(ExposureError::Bounds { .. })
        | CatalogError::Exposure(ExposureError::ZeroDivisor { .. }) => BoundsError::new_err(message),
        CatalogError::Exposure(ExposureError::Scenario { .. }) => ScenarioError::new_err(message),
        CatalogError::Exposure(ExposureError::Route { .. }) => RouteError::new_err(message),
        CatalogError::UnknownModel(_) | CatalogError::InvalidParameters(_) => {
            PyValueError::new_err(message)
        }
    }
}

pub fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    let py = m.py();
    m.add("BoundsError", py.get_type::<BoundsError>())?;
    m.add("ScenarioError", py.get_type::<ScenarioError>())?;
    m.add("RouteError", py.get_type::<RouteError>())?;
    Ok(())
}
