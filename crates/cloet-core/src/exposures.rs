/// Dose arithmetic shared by every model, independent of the model catalog.
///
/// Operation order mirrors the reference tool so results are bit-identical.
use crate::error::ExposureError;
use crate::route::Route;

/// Days per year used in the average daily dose denominators.
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Terms the potential dose rate is computed from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DoseRateTerms {
    /// `SQu * Yderm * FT`
    DermalSolids { squ: f64, yderm: f64, ft: f64 },
    /// `S * Qu * Yderm * FT`
    DermalLiquid { s: f64, qu: f64, yderm: f64, ft: f64 },
    /// `Cm * b * h`
    Airborne { cm: f64, b: f64, h: f64 },
    /// `EF * AH * Ys * Sd`
    Handling { ef: f64, ah: f64, ys: f64, sd: f64 },
}

impl DoseRateTerms {
    pub fn route(&self) -> Route {
        match self {
            DoseRateTerms::DermalSolids { .. } | DoseRateTerms::DermalLiquid { .. } => {
                Route::Dermal
            }
            DoseRateTerms::Airborne { .. } | DoseRateTerms::Handling { .. } => Route::Inhalation,
        }
    }
}

/// Potential dose rate: mg/day for dermal, mg/day for inhalation.
///
/// Fails with a route error when the term set belongs to the other route.
pub fn potential_dose_rate(route: Route, terms: &DoseRateTerms) -> Result<f64, ExposureError> {
    if terms.route() != route {
        return Err(ExposureError::Route {
            route: format!("{route} with {} terms", terms.route()),
        });
    }
    Ok(match *terms {
        DoseRateTerms::DermalSolids { squ, yderm, ft } => squ * yderm * ft,
        DoseRateTerms::DermalLiquid { s, qu, yderm, ft } => s * qu * yderm * ft,
        DoseRateTerms::Airborne { cm, b, h } => cm * b * h,
        DoseRateTerms::Handling { ef, ah, ys, sd } => ef * ah * ys * sd,
    })
}

/// `potential_dose_rate` keyed by a free-form route tag.
pub fn potential_dose_rate_for(route: &str, terms: &DoseRateTerms) -> Result<f64, ExposureError> {
    potential_dose_rate(route.parse()?, terms)
}

/// Total number of exposed workers across all sites.
pub fn workers_exposed(nwexp: u32, ns: u32) -> u64 {
    u64::from(nwexp) * u64::from(ns)
}

/// Average daily dose over the averaging time `t` [years].
///
/// Called with `ATc` for the lifetime average (LADD) and `AT` for the
/// average daily dose (ADD).
pub fn daily_dose(pdr: f64, ed: f64, ey: f64, bw: f64, t: f64) -> f64 {
    (pdr * ed * ey) / (bw * t * DAYS_PER_YEAR)
}

pub fn acute_potential_dose_rate(pdr: f64, bw: f64) -> f64 {
    pdr / bw
}
