use pyo3::prelude::*;

use cloet_core::{ModelKind, Route};

pub const SUBMODULES: &[&str] = &["dermal", "inhalation"];

/// One submodule per exposure route, listing the route's model identifiers
/// as `MODELS`.
pub fn register(parent: &Bound<'_, PyModule>) -> PyResult<()> {
    for route in Route::ALL {
        let m = PyModule::new(parent.py(), route.as_str())?;
        let ids: Vec<&'static str> = ModelKind::for_route(route).map(|kind| kind.id()).collect();
        m.add("MODELS", ids)?;
        parent.add_submodule(&m)?;
    }
    Ok(())
}
