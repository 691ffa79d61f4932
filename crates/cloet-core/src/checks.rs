/// Bounds checks applied to every numeric model parameter.
///
/// Each check returns the value unchanged when it is admissible so that
/// resolution code can validate inline: `let yderm = UNIT.check("Yderm", p.yderm)?;`.
/// NaN never passes a check.
use crate::error::ExposureError;

/// Closed admissible interval `[min, max]` for a parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

impl Bounds {
    /// `[0, 1]`, used for fractions and weight fractions.
    pub const UNIT: Bounds = Bounds { min: 0.0, max: 1.0 };

    /// `[0, inf)`.
    pub const NON_NEGATIVE: Bounds = Bounds {
        min: 0.0,
        max: f64::INFINITY,
    };

    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub const fn at_least(min: f64) -> Self {
        Self {
            min,
            max: f64::INFINITY,
        }
    }

    pub const fn at_most(max: f64) -> Self {
        Self {
            min: f64::NEG_INFINITY,
            max,
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }

    pub fn check(&self, name: &'static str, value: f64) -> Result<f64, ExposureError> {
        if self.contains(value) {
            Ok(value)
        } else {
            Err(ExposureError::Bounds {
                name,
                value,
                min: self.min,
                max: self.max,
            })
        }
    }

    /// Checks an optional caller value, passing `None` through.
    pub fn check_opt(
        &self,
        name: &'static str,
        value: Option<f64>,
    ) -> Result<Option<f64>, ExposureError> {
        value.map(|v| self.check(name, v)).transpose()
    }
}

pub fn check_bounded_range(
    name: &'static str,
    value: f64,
    min: f64,
    max: f64,
) -> Result<f64, ExposureError> {
    Bounds::new(min, max).check(name, value)
}

/// `check_bounded_range` with the default `[0, 1]` interval.
pub fn check_unit_interval(name: &'static str, value: f64) -> Result<f64, ExposureError> {
    Bounds::UNIT.check(name, value)
}

pub fn check_lower_bound(name: &'static str, value: f64, min: f64) -> Result<f64, ExposureError> {
    Bounds::at_least(min).check(name, value)
}

/// `check_lower_bound` with the default minimum of zero.
pub fn check_non_negative(name: &'static str, value: f64) -> Result<f64, ExposureError> {
    Bounds::NON_NEGATIVE.check(name, value)
}

pub fn check_upper_bound(name: &'static str, value: f64, max: f64) -> Result<f64, ExposureError> {
    Bounds::at_most(max).check(name, value)
}

/// Rejects a zero divisor. Range checks run first, so only exact zero is caught here.
pub fn check_divisor(name: &'static str, value: f64) -> Result<f64, ExposureError> {
    if value == 0.0 {
        Err(ExposureError::ZeroDivisor { name })
    } else {
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn divisor_rejects_zero_only() {
        assert_eq!(check_divisor("BW", 70.0), Ok(70.0));
        assert_eq!(check_divisor("BW", -0.0), Err(ExposureError::ZeroDivisor { name: "BW" }));
        assert_eq!(check_divisor("Ysf", 0.0), Err(ExposureError::ZeroDivisor { name: "Ysf" }));
    }

    #[test]
    fn bounded_range_accepts_edges() {
        assert_eq!(check_bounded_range("ED", 0.0, 0.0, 365.0), Ok(0.0));
        assert_eq!(check_bounded_range("ED", 365.0, 0.0, 365.0), Ok(365.0));
    }

    #[test]
    fn bounded_range_rejects_outside() {
        let err = check_bounded_range("ED", 365.5, 0.0, 365.0).unwrap_err();
        assert_eq!(
            err,
            ExposureError::Bounds {
                name: "ED",
                value: 365.5,
                min: 0.0,
                max: 365.0
            }
        );
        assert!(check_bounded_range("ED", -1.0, 0.0, 365.0).is_err());
    }

    #[test]
    fn unit_interval() {
        assert!(check_unit_interval("Yderm", 0.0).is_ok());
        assert!(check_unit_interval("Yderm", 1.0).is_ok());
        assert!(check_unit_interval("Yderm", -0.01).is_err());
        assert!(check_unit_interval("Yderm", 1.01).is_err());
    }

    #[test]
    fn lower_bound() {
        assert_eq!(check_lower_bound("BW", 2.0, 2.0), Ok(2.0));
        assert!(check_lower_bound("BW", 1.99, 2.0).is_err());
        assert!(check_non_negative("BW", 0.0).is_ok());
        assert!(check_non_negative("BW", -1e-9).is_err());
        assert!(check_non_negative("BW", f64::INFINITY).is_ok());
    }

    #[test]
    fn upper_bound_is_symmetric() {
        assert_eq!(check_upper_bound("h", 24.0, 24.0), Ok(24.0));
        assert_eq!(check_upper_bound("h", -5.0, 24.0), Ok(-5.0));
        assert!(check_upper_bound("h", 24.01, 24.0).is_err());
    }

    #[test]
    fn nan_never_passes() {
        assert!(check_unit_interval("X", f64::NAN).is_err());
        assert!(check_non_negative("X", f64::NAN).is_err());
        assert!(check_upper_bound("X", f64::NAN, 1.0).is_err());
    }

    #[test]
    fn check_opt_passes_none_through() {
        assert_eq!(Bounds::UNIT.check_opt("Ys", None), Ok(None));
        assert_eq!(Bounds::UNIT.check_opt("Ys", Some(0.5)), Ok(Some(0.5)));
        assert!(Bounds::UNIT.check_opt("Ys", Some(2.0)).is_err());
    }
}
