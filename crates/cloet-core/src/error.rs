use thiserror::Error;

/// Failure raised while constructing a model instance.
///
/// Every variant is fatal to the evaluation that raised it; no partial
/// inputs or outputs escape.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExposureError {
    /// A numeric parameter fell outside its admissible range.
    #[error("{name} = {value} is out of bounds [{min}, {max}]")]
    Bounds {
        name: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// The scenario key is not one of the model's valid keys.
    #[error("invalid scenario '{value}'; options are '{}'", .valid.join("', '"))]
    Scenario {
        value: String,
        valid: Vec<&'static str>,
    },

    /// A parameter that appears as a divisor is zero.
    #[error("{name} must be non-zero")]
    ZeroDivisor { name: &'static str },

    /// The dose arithmetic was handed a route tag (or term set) it does not know.
    #[error("unknown exposure route provided ({route})")]
    Route { route: String },
}
