/// Parameters and dose results shared by every model of a route family.
use serde::Deserialize;

use crate::checks::{check_divisor, Bounds};
use crate::error::ExposureError;
use crate::exposures::{acute_potential_dose_rate, daily_dose, workers_exposed};
use crate::record::Record;
use crate::route::Route;

/// Days exposed per year [days/site-yr].
pub const DEFAULT_ED: f64 = 1.0;
/// Workers exposed per site, unless the model overrides it.
pub const DEFAULT_NWEXP: u32 = 1;
/// Number of sites.
pub const DEFAULT_NS: u32 = 1;
/// Years of occupational exposure.
pub const DEFAULT_EY: f64 = 40.0;
/// Body weight [kg].
pub const DEFAULT_BW: f64 = 70.0;
/// Averaging time over a lifetime [years].
pub const DEFAULT_ATC: f64 = 70.0;
/// Averaging time for inhalation models when `AT` is not given [years].
pub const DEFAULT_AT: f64 = 40.0;

pub const ED_BOUNDS: Bounds = Bounds::new(0.0, 365.0);

/// Caller-supplied family parameters; `None` takes the family default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CommonParams {
    #[serde(rename = "ED")]
    pub ed: Option<f64>,
    #[serde(rename = "NWexp")]
    pub nwexp: Option<u32>,
    #[serde(rename = "NS")]
    pub ns: Option<u32>,
    #[serde(rename = "EY")]
    pub ey: Option<f64>,
    #[serde(rename = "BW")]
    pub bw: Option<f64>,
    #[serde(rename = "ATc")]
    pub atc: Option<f64>,
    #[serde(rename = "AT")]
    pub at: Option<f64>,
}

/// Names accepted by [`CommonParams`].
pub const COMMON_PARAMETERS: &[&str] = &["ED", "NWexp", "NS", "EY", "BW", "ATc", "AT"];

impl CommonParams {
    /// Validates the family parameters and fills in defaults.
    ///
    /// `AT` defaults to `EY` for dermal models and to [`DEFAULT_AT`] for
    /// inhalation models; an explicit `AT` is honored by both.
    pub fn resolve(&self, route: Route, default_workers: u32) -> Result<FamilyInputs, ExposureError> {
        let ed = ED_BOUNDS.check("ED", self.ed.unwrap_or(DEFAULT_ED))?;
        let ey = Bounds::NON_NEGATIVE.check("EY", self.ey.unwrap_or(DEFAULT_EY))?;
        let bw = Bounds::NON_NEGATIVE.check("BW", self.bw.unwrap_or(DEFAULT_BW))?;
        let bw = check_divisor("BW", bw)?;
        let atc = Bounds::NON_NEGATIVE.check("ATc", self.atc.unwrap_or(DEFAULT_ATC))?;
        let atc = check_divisor("ATc", atc)?;
        // Dermal models average over the exposure years unless told otherwise.
        let at = match (self.at, route) {
            (Some(at), _) => Bounds::NON_NEGATIVE.check("AT", at)?,
            (None, Route::Dermal) => ey,
            (None, Route::Inhalation) => DEFAULT_AT,
        };
        let at = check_divisor("AT", at)?;

        Ok(FamilyInputs {
            ed,
            nwexp: self.nwexp.unwrap_or(default_workers),
            ns: self.ns.unwrap_or(DEFAULT_NS),
            ey,
            bw,
            atc,
            at,
        })
    }
}

/// Validated family parameters, reported first among a model's inputs.
#[derive(Debug, Clone, Copy, PartialEq, Record)]
pub struct FamilyInputs {
    #[record(name = "ED")]
    pub ed: f64,
    #[record(name = "NWexp")]
    pub nwexp: u32,
    #[record(name = "NS")]
    pub ns: u32,
    #[record(name = "EY")]
    pub ey: f64,
    #[record(name = "BW")]
    pub bw: f64,
    #[record(name = "ATc")]
    pub atc: f64,
    #[record(name = "AT")]
    pub at: f64,
}

/// Worker count and dose results derived from a potential dose rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DoseSummary {
    pub nw: u64,
    pub ladd: f64,
    pub add: f64,
    pub apdr: f64,
}

impl DoseSummary {
    pub fn from_dose_rate(pdr: f64, family: &FamilyInputs) -> Self {
        Self {
            nw: workers_exposed(family.nwexp, family.ns),
            ladd: daily_dose(pdr, family.ed, family.ey, family.bw, family.atc),
            add: daily_dose(pdr, family.ed, family.ey, family.bw, family.at),
            apdr: acute_potential_dose_rate(pdr, family.bw),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;
    use approx::assert_relative_eq;

    #[test]
    fn defaults() {
        let family = CommonParams::default().resolve(Route::Inhalation, 1).unwrap();
        assert_eq!(
            family,
            FamilyInputs {
                ed: 1.0,
                nwexp: 1,
                ns: 1,
                ey: 40.0,
                bw: 70.0,
                atc: 70.0,
                at: 40.0,
            }
        );
    }

    #[test]
    fn dermal_at_follows_ey() {
        let params = CommonParams {
            ey: Some(25.0),
            ..Default::default()
        };
        assert_eq!(params.resolve(Route::Dermal, 1).unwrap().at, 25.0);
        assert_eq!(params.resolve(Route::Inhalation, 1).unwrap().at, DEFAULT_AT);

        let defaults = CommonParams::default();
        assert_eq!(defaults.resolve(Route::Dermal, 1).unwrap().at, DEFAULT_EY);
    }

    #[test]
    fn explicit_at_is_honored_by_both_routes() {
        let params = CommonParams {
            at: Some(30.0),
            ..Default::default()
        };
        assert_eq!(params.resolve(Route::Dermal, 1).unwrap().at, 30.0);
        assert_eq!(params.resolve(Route::Inhalation, 1).unwrap().at, 30.0);
    }

    #[test]
    fn model_worker_default_applies_unless_given() {
        let family = CommonParams::default().resolve(Route::Inhalation, 17).unwrap();
        assert_eq!(family.nwexp, 17);

        let params = CommonParams {
            nwexp: Some(2),
            ..Default::default()
        };
        assert_eq!(params.resolve(Route::Inhalation, 17).unwrap().nwexp, 2);
    }

    #[test]
    fn ed_bounds() {
        for ed in [0.0, 365.0] {
            let params = CommonParams {
                ed: Some(ed),
                ..Default::default()
            };
            assert!(params.resolve(Route::Dermal, 1).is_ok());
        }
        for ed in [-0.01, 365.01] {
            let params = CommonParams {
                ed: Some(ed),
                ..Default::default()
            };
            assert!(matches!(
                params.resolve(Route::Dermal, 1),
                Err(ExposureError::Bounds { name: "ED", .. })
            ));
        }
    }

    #[test]
    fn negative_family_values_fail() {
        let cases = [
            CommonParams { ey: Some(-1.0), ..Default::default() },
            CommonParams { bw: Some(-1.0), ..Default::default() },
            CommonParams { atc: Some(-1.0), ..Default::default() },
            CommonParams { at: Some(-1.0), ..Default::default() },
        ];
        for params in cases {
            assert!(params.resolve(Route::Inhalation, 1).is_err(), "{params:?}");
        }
    }

    #[test]
    fn zero_divisors_fail() {
        let zero_bw = CommonParams { bw: Some(0.0), ..Default::default() };
        assert_eq!(
            zero_bw.resolve(Route::Inhalation, 1),
            Err(ExposureError::ZeroDivisor { name: "BW" })
        );

        let zero_atc = CommonParams { atc: Some(0.0), ..Default::default() };
        assert_eq!(
            zero_atc.resolve(Route::Dermal, 1),
            Err(ExposureError::ZeroDivisor { name: "ATc" })
        );

        // Dermal AT inherits a zero EY.
        let zero_ey = CommonParams { ey: Some(0.0), ..Default::default() };
        assert_eq!(
            zero_ey.resolve(Route::Dermal, 1),
            Err(ExposureError::ZeroDivisor { name: "AT" })
        );
        assert!(zero_ey.resolve(Route::Inhalation, 1).is_ok());
    }

    #[test]
    fn deserializes_reference_names() {
        let params: CommonParams =
            serde_json::from_str(r#"{"ED": 250, "NWexp": 4, "ATc": 75.5}"#).unwrap();
        assert_eq!(params.ed, Some(250.0));
        assert_eq!(params.nwexp, Some(4));
        assert_eq!(params.atc, Some(75.5));
        assert_eq!(params.ns, None);
    }

    #[test]
    fn family_record_order() {
        let family = CommonParams::default().resolve(Route::Dermal, 1).unwrap();
        assert_eq!(FamilyInputs::field_names(), COMMON_PARAMETERS.to_vec());
        assert_eq!(family.entries()[1], ("NWexp", Value::Int(1)));
    }

    #[test]
    fn dose_summary() {
        let family = CommonParams::default().resolve(Route::Dermal, 1).unwrap();
        let summary = DoseSummary::from_dose_rate(112.35, &family);
        assert_eq!(summary.nw, 1);
        assert_relative_eq!(summary.apdr, 112.35 / 70.0);
        assert_relative_eq!(summary.ladd, 112.35 * 40.0 / (70.0 * 70.0 * 365.0));
        assert_relative_eq!(summary.add, 112.35 * 40.0 / (70.0 * 40.0 * 365.0));
    }
}
