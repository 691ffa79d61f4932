/// Solids and container surface contact models: `Dexp = SQu * Yderm * FT`.
use serde::Deserialize;

use super::constants::{
    CONTAINER_SURFACE_SQU, DEFAULT_FT, FT_BOUNDS, SOLIDS_EQUATIONS, SOLIDS_SQU, YDERM_BOUNDS,
};
use super::outputs::DermalOutputs;
use super::scenarios::SolidsScenario;
use crate::checks::Bounds;
use crate::error::ExposureError;
use crate::exposures::{potential_dose_rate, DoseRateTerms};
use crate::family::{CommonParams, FamilyInputs};
use crate::model::ExposureModel;
use crate::record::Record;
use crate::route::Route;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SolidsParams {
    #[serde(rename = "Yderm")]
    pub yderm: f64,
    /// Total solids on skin, read for the `user` scenario [mg/event].
    #[serde(rename = "SQu", default)]
    pub squ: Option<f64>,
    #[serde(rename = "FT", default)]
    pub ft: Option<f64>,
    #[serde(flatten)]
    pub common: CommonParams,
}

impl SolidsParams {
    pub fn new(yderm: f64) -> Self {
        Self {
            yderm,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Record)]
pub struct SolidsInputs {
    #[record(flatten)]
    pub family: FamilyInputs,
    #[record(name = "SQu")]
    pub squ: f64,
    #[record(name = "FT")]
    pub ft: f64,
    #[record(name = "Yderm")]
    pub yderm: f64,
}

const SOLIDS_PARAMETERS: &[&str] = &["Yderm", "SQu", "FT"];

fn resolve_solids(
    params: &SolidsParams,
    scenario: SolidsScenario,
    family: FamilyInputs,
    preset: f64,
) -> Result<SolidsInputs, ExposureError> {
    let squ = match scenario {
        SolidsScenario::High => preset,
        SolidsScenario::User => Bounds::NON_NEGATIVE.check("SQu", params.squ.unwrap_or(preset))?,
    };
    let ft = FT_BOUNDS.check("FT", params.ft.unwrap_or(DEFAULT_FT))?;
    let yderm = YDERM_BOUNDS.check("Yderm", params.yderm)?;
    Ok(SolidsInputs {
        family,
        squ,
        ft,
        yderm,
    })
}

fn compute_solids(inputs: &SolidsInputs) -> Result<DermalOutputs, ExposureError> {
    let dexp = potential_dose_rate(
        Route::Dermal,
        &DoseRateTerms::DermalSolids {
            squ: inputs.squ,
            yderm: inputs.yderm,
            ft: inputs.ft,
        },
    )?;
    Ok(DermalOutputs::from_dose_rate(dexp, &inputs.family))
}

/// EPA-OPPT 2-Hand Dermal Contact with Solids.
#[derive(Debug, Clone, Copy)]
pub struct TwoHandSolidsContact;

impl ExposureModel for TwoHandSolidsContact {
    type Params = SolidsParams;
    type Scenario = SolidsScenario;
    type Inputs = SolidsInputs;
    type Outputs = DermalOutputs;

    const ROUTE: Route = Route::Dermal;
    const MODEL_NAME: &'static str = "EPA-OPPT 2-Hand Dermal Contact with Solids";
    const EQUATIONS: &'static str = SOLIDS_EQUATIONS;
    const DEFAULT_SCENARIO: SolidsScenario = SolidsScenario::High;
    const PARAMETERS: &'static [&'static str] = SOLIDS_PARAMETERS;

    fn common(params: &SolidsParams) -> &CommonParams {
        &params.common
    }

    fn resolve(
        params: &SolidsParams,
        scenario: SolidsScenario,
        family: FamilyInputs,
    ) -> Result<SolidsInputs, ExposureError> {
        resolve_solids(params, scenario, family, SOLIDS_SQU)
    }

    fn compute(inputs: &SolidsInputs) -> Result<DermalOutputs, ExposureError> {
        compute_solids(inputs)
    }
}

/// EPA-OPPT 2-Hand Dermal Contact with Container Surfaces.
#[derive(Debug, Clone, Copy)]
pub struct TwoHandContainerSurfaceContact;

impl ExposureModel for TwoHandContainerSurfaceContact {
    type Params = SolidsParams;
    type Scenario = SolidsScenario;
    type Inputs = SolidsInputs;
    type Outputs = DermalOutputs;

    const ROUTE: Route = Route::Dermal;
    const MODEL_NAME: &'static str = "EPA-OPPT 2-Hand Dermal Contact with Container Surfaces";
    const EQUATIONS: &'static str = SOLIDS_EQUATIONS;
    const DEFAULT_SCENARIO: SolidsScenario = SolidsScenario::High;
    const PARAMETERS: &'static [&'static str] = SOLIDS_PARAMETERS;

    fn common(params: &SolidsParams) -> &CommonParams {
        &params.common
    }

    fn resolve(
        params: &SolidsParams,
        scenario: SolidsScenario,
        family: FamilyInputs,
    ) -> Result<SolidsInputs, ExposureError> {
        resolve_solids(params, scenario, family, CONTAINER_SURFACE_SQU)
    }

    fn compute(inputs: &SolidsInputs) -> Result<DermalOutputs, ExposureError> {
        compute_solids(inputs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ModelResult;
    use approx::assert_relative_eq;

    #[test]
    fn solids_high() {
        let run = TwoHandSolidsContact::evaluate(&SolidsParams::new(0.5), None).unwrap();
        assert_eq!(run.scenario(), "high");
        assert_eq!(run.input_record().squ, 3100.0);
        assert_eq!(run.output_record().dexp, 1550.0);
        assert_relative_eq!(run.output_record().apdr, 1550.0 / 70.0);
    }

    #[test]
    fn container_surface_presets() {
        let params = SolidsParams {
            squ: Some(42.0),
            ..SolidsParams::new(1.0)
        };
        let high = TwoHandContainerSurfaceContact::evaluate(&params, Some("high")).unwrap();
        assert_eq!(high.input_record().squ, 1100.0);
        let user = TwoHandContainerSurfaceContact::evaluate(&params, Some("User")).unwrap();
        assert_eq!(user.input_record().squ, 42.0);

        let defaulted =
            TwoHandContainerSurfaceContact::evaluate(&SolidsParams::new(1.0), Some("user")).unwrap();
        assert_eq!(defaulted.input_record().squ, 1100.0);
    }

    #[test]
    fn solids_have_no_low_scenario() {
        assert_eq!(TwoHandSolidsContact::get_scenarios(), vec!["high", "user"]);
        let err = TwoHandSolidsContact::evaluate(&SolidsParams::new(0.5), Some("low")).unwrap_err();
        assert!(matches!(err, ExposureError::Scenario { .. }));
    }

    #[test]
    fn bounds() {
        assert!(TwoHandSolidsContact::evaluate(&SolidsParams::new(1.01), None).is_err());
        let negative = SolidsParams {
            squ: Some(-5.0),
            ..SolidsParams::new(0.5)
        };
        assert!(TwoHandSolidsContact::evaluate(&negative, Some("user")).is_err());
        // presets ignore the caller value
        assert!(TwoHandSolidsContact::evaluate(&negative, Some("high")).is_ok());
    }

    #[test]
    fn mapping_order() {
        let run = TwoHandSolidsContact::evaluate(&SolidsParams::new(0.5), None).unwrap();
        let inputs: Vec<_> = run.inputs().keys().copied().collect();
        assert_eq!(
            inputs,
            ["ED", "NWexp", "NS", "EY", "BW", "ATc", "AT", "SQu", "FT", "Yderm"]
        );
        assert_eq!(
            run.outputs().keys().last().copied(),
            Some("Dexp")
        );
    }
}
