//! Occupational exposure model engine.
//!
//! Pure formula models for the dermal and inhalation routes: validation,
//! scenario resolution, shared dose arithmetic and the model catalog. The
//! engine performs no I/O and never logs.

// Lets `#[derive(Record)]` output (which names `::cloet_core`) resolve here.
extern crate self as cloet_core;

pub mod catalog;
pub mod checks;
pub mod dermal;
pub mod error;
pub mod exposures;
pub mod family;
pub mod inhalation;
pub mod model;
pub mod record;
pub mod route;
pub mod scenario;
pub mod units;
pub mod value;

pub use catalog::{CatalogError, ModelKind};
pub use error::ExposureError;
pub use model::{Evaluation, ExposureModel, ModelResult};
pub use route::Route;
pub use value::{ParameterMap, Value};
