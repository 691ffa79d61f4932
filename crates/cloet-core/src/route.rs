use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ExposureError;

/// Exposure route, fixed per model family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Route {
    Dermal,
    Inhalation,
}

impl Route {
    pub const ALL: [Route; 2] = [Route::Dermal, Route::Inhalation];

    pub fn as_str(&self) -> &'static str {
        match self {
            Route::Dermal => "dermal",
            Route::Inhalation => "inhalation",
        }
    }

    /// Name the potential dose rate is reported under.
    pub fn dose_rate_name(&self) -> &'static str {
        match self {
            Route::Dermal => "Dexp",
            Route::Inhalation => "I",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Route {
    type Err = ExposureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "dermal" => Ok(Route::Dermal),
            "inhalation" => Ok(Route::Inhalation),
            _ => Err(ExposureError::Route {
                route: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_routes() {
        assert_eq!("dermal".parse::<Route>(), Ok(Route::Dermal));
        assert_eq!("Inhalation".parse::<Route>(), Ok(Route::Inhalation));
    }

    #[test]
    fn unknown_route_is_route_error() {
        assert_eq!(
            "oral".parse::<Route>(),
            Err(ExposureError::Route {
                route: "oral".into()
            })
        );
    }

    #[test]
    fn dose_rate_names() {
        assert_eq!(Route::Dermal.dose_rate_name(), "Dexp");
        assert_eq!(Route::Inhalation.dose_rate_name(), "I");
    }
}
