/// EPA-OPPT Small Volume Solids Handling: `I = EF * AH * Ys * Sd`.
use serde::Deserialize;

use super::constants::{
    AH_BOUNDS, DEFAULT_AH, DEFAULT_SD, HANDLING_EQUATIONS, SD_BOUNDS, TYPICAL_EF, WORST_CASE_EF,
};
use super::outputs::InhalationOutputs;
use super::scenarios::HandlingScenario;
use crate::checks::Bounds;
use crate::error::ExposureError;
use crate::exposures::{potential_dose_rate, DoseRateTerms};
use crate::family::{CommonParams, FamilyInputs};
use crate::model::ExposureModel;
use crate::record::Record;
use crate::route::Route;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct HandlingParams {
    /// Weight fraction of the chemical in the solid [0, 1].
    #[serde(rename = "Ys")]
    pub ys: f64,
    /// Exposure factor, read for the `user` scenario [mg/kg].
    #[serde(rename = "EF", default)]
    pub ef: Option<f64>,
    #[serde(rename = "AH", default)]
    pub ah: Option<f64>,
    #[serde(rename = "Sd", default)]
    pub sd: Option<f64>,
    #[serde(flatten)]
    pub common: CommonParams,
}

impl HandlingParams {
    pub fn new(ys: f64) -> Self {
        Self {
            ys,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Record)]
pub struct HandlingInputs {
    #[record(flatten)]
    pub family: FamilyInputs,
    #[record(name = "AH")]
    pub ah: f64,
    #[record(name = "Ys")]
    pub ys: f64,
    #[record(name = "Sd")]
    pub sd: f64,
    #[record(name = "EF")]
    pub ef: f64,
}

#[derive(Debug, Clone, Copy)]
pub struct SmallVolumeSolidsHandling;

impl ExposureModel for SmallVolumeSolidsHandling {
    type Params = HandlingParams;
    type Scenario = HandlingScenario;
    type Inputs = HandlingInputs;
    type Outputs = InhalationOutputs;

    const ROUTE: Route = Route::Inhalation;
    const MODEL_NAME: &'static str = "EPA-OPPT Small Volume Solids Handling";
    const EQUATIONS: &'static str = HANDLING_EQUATIONS;
    const DEFAULT_SCENARIO: HandlingScenario = HandlingScenario::Typical;
    const PARAMETERS: &'static [&'static str] = &["Ys", "EF", "AH", "Sd"];

    fn common(params: &HandlingParams) -> &CommonParams {
        &params.common
    }

    fn resolve(
        params: &HandlingParams,
        scenario: HandlingScenario,
        family: FamilyInputs,
    ) -> Result<HandlingInputs, ExposureError> {
        let ah = AH_BOUNDS.check("AH", params.ah.unwrap_or(DEFAULT_AH))?;
        let ys = Bounds::UNIT.check("Ys", params.ys)?;
        let sd = SD_BOUNDS.check("Sd", params.sd.unwrap_or(DEFAULT_SD))?;
        let ef = match scenario {
            HandlingScenario::Typical => TYPICAL_EF,
            HandlingScenario::WorstCase => WORST_CASE_EF,
            HandlingScenario::User => {
                Bounds::NON_NEGATIVE.check("EF", params.ef.unwrap_or(TYPICAL_EF))?
            }
        };
        Ok(HandlingInputs {
            family,
            ah,
            ys,
            sd,
            ef,
        })
    }

    fn compute(inputs: &HandlingInputs) -> Result<InhalationOutputs, ExposureError> {
        let i = potential_dose_rate(
            Route::Inhalation,
            &DoseRateTerms::Handling {
                ef: inputs.ef,
                ah: inputs.ah,
                ys: inputs.ys,
                sd: inputs.sd,
            },
        )?;
        Ok(InhalationOutputs::from_dose_rate(i, &inputs.family))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ModelResult;
    use approx::assert_relative_eq;

    #[test]
    fn typical_defaults() {
        let run = SmallVolumeSolidsHandling::evaluate(&HandlingParams::new(0.5), None).unwrap();
        assert_eq!(run.scenario(), "typical");
        assert_eq!(run.input_record().ef, 0.0477);
        assert_eq!(run.output_record().i, 0.0477 * 1.0 * 0.5 * 1.0);
        // Inhalation AT defaults to 40 years.
        assert_eq!(run.input_record().family.at, 40.0);
        assert_relative_eq!(
            run.output_record().add,
            run.output_record().i * 40.0 / (70.0 * 40.0 * 365.0)
        );
    }

    #[test]
    fn exposure_factor_table() {
        let params = HandlingParams {
            ef: Some(0.3),
            ..HandlingParams::new(1.0)
        };
        let ef = |scenario: &str| {
            SmallVolumeSolidsHandling::evaluate(&params, Some(scenario))
                .unwrap()
                .input_record()
                .ef
        };
        assert_eq!(ef("typical"), 0.0477);
        assert_eq!(ef("Worst-Case"), 0.161);
        assert_eq!(ef("user"), 0.3);
    }

    #[test]
    fn bounds() {
        let edge = HandlingParams {
            ah: Some(54.0),
            sd: Some(3.0),
            ..HandlingParams::new(1.0)
        };
        assert!(SmallVolumeSolidsHandling::evaluate(&edge, None).is_ok());

        let over_ah = HandlingParams {
            ah: Some(54.1),
            ..HandlingParams::new(1.0)
        };
        let over_sd = HandlingParams {
            sd: Some(3.1),
            ..HandlingParams::new(1.0)
        };
        assert!(SmallVolumeSolidsHandling::evaluate(&over_ah, None).is_err());
        assert!(SmallVolumeSolidsHandling::evaluate(&over_sd, None).is_err());
        assert!(SmallVolumeSolidsHandling::evaluate(&HandlingParams::new(1.5), None).is_err());
    }

    #[test]
    fn mapping_order() {
        let run = SmallVolumeSolidsHandling::evaluate(&HandlingParams::new(0.5), None).unwrap();
        let inputs: Vec<_> = run.inputs().keys().copied().collect();
        assert_eq!(
            inputs,
            ["ED", "NWexp", "NS", "EY", "BW", "ATc", "AT", "AH", "Ys", "Sd", "EF"]
        );
        let outputs: Vec<_> = run.outputs().keys().copied().collect();
        assert_eq!(outputs, ["NW", "LADD", "ADD", "APDR", "I"]);
    }
}
