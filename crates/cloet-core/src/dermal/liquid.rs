/// Liquid contact and immersion models: `Dexp = S * Qu * Yderm * FT`.
use serde::Deserialize;

use super::constants::{
    QuantityTable, CONTACT_QU, DEFAULT_FT, FT_BOUNDS, IMMERSION_QU, LIQUID_EQUATIONS,
    ONE_HAND_AREA, TWO_HAND_AREA, YDERM_BOUNDS,
};
use super::outputs::DermalOutputs;
use super::scenarios::LiquidScenario;
use crate::checks::Bounds;
use crate::error::ExposureError;
use crate::exposures::{potential_dose_rate, DoseRateTerms};
use crate::family::{CommonParams, FamilyInputs};
use crate::model::ExposureModel;
use crate::record::Record;
use crate::route::Route;

/// Caller parameters. Only `Yderm` is required.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LiquidParams {
    /// Weight fraction of the chemical in the liquid [0, 1].
    #[serde(rename = "Yderm")]
    pub yderm: f64,
    /// Surface area of contact [cm^2].
    #[serde(rename = "S", default)]
    pub s: Option<f64>,
    /// Quantity remaining on skin, read for the `user` scenario [mg/cm^2-event].
    #[serde(rename = "Qu", default)]
    pub qu: Option<f64>,
    #[serde(rename = "FT", default)]
    pub ft: Option<f64>,
    #[serde(flatten)]
    pub common: CommonParams,
}

impl LiquidParams {
    pub fn new(yderm: f64) -> Self {
        Self {
            yderm,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Record)]
pub struct LiquidInputs {
    #[record(flatten)]
    pub family: FamilyInputs,
    #[record(name = "S")]
    pub s: f64,
    #[record(name = "Qu")]
    pub qu: f64,
    #[record(name = "FT")]
    pub ft: f64,
    #[record(name = "Yderm")]
    pub yderm: f64,
}

const LIQUID_PARAMETERS: &[&str] = &["Yderm", "S", "Qu", "FT"];

/// Validates `FT` and `Yderm`, in that order, and assembles the inputs.
fn finish(
    params: &LiquidParams,
    family: FamilyInputs,
    s: f64,
    qu: f64,
) -> Result<LiquidInputs, ExposureError> {
    let ft = FT_BOUNDS.check("FT", params.ft.unwrap_or(DEFAULT_FT))?;
    let yderm = YDERM_BOUNDS.check("Yderm", params.yderm)?;
    Ok(LiquidInputs {
        family,
        s,
        qu,
        ft,
        yderm,
    })
}

/// Fixed surface area (caller-overridable), `Qu` from the scenario table.
fn resolve_with_table(
    params: &LiquidParams,
    scenario: LiquidScenario,
    family: FamilyInputs,
    area: f64,
    table: QuantityTable,
) -> Result<LiquidInputs, ExposureError> {
    let s = Bounds::NON_NEGATIVE.check("S", params.s.unwrap_or(area))?;
    let qu = match scenario {
        LiquidScenario::Low => table.low,
        LiquidScenario::High => table.high,
        LiquidScenario::User => Bounds::NON_NEGATIVE.check("Qu", params.qu.unwrap_or(table.high))?,
    };
    finish(params, family, s, qu)
}

fn compute_liquid(inputs: &LiquidInputs) -> Result<DermalOutputs, ExposureError> {
    let dexp = potential_dose_rate(
        Route::Dermal,
        &DoseRateTerms::DermalLiquid {
            s: inputs.s,
            qu: inputs.qu,
            yderm: inputs.yderm,
            ft: inputs.ft,
        },
    )?;
    Ok(DermalOutputs::from_dose_rate(dexp, &inputs.family))
}

/// EPA-OPPT 1-Hand Dermal Contact with Liquid.
#[derive(Debug, Clone, Copy)]
pub struct OneHandLiquidContact;

impl ExposureModel for OneHandLiquidContact {
    type Params = LiquidParams;
    type Scenario = LiquidScenario;
    type Inputs = LiquidInputs;
    type Outputs = DermalOutputs;

    const ROUTE: Route = Route::Dermal;
    const MODEL_NAME: &'static str = "EPA-OPPT 1-Hand Dermal Contact with Liquid";
    const EQUATIONS: &'static str = LIQUID_EQUATIONS;
    const DEFAULT_SCENARIO: LiquidScenario = LiquidScenario::High;
    const PARAMETERS: &'static [&'static str] = LIQUID_PARAMETERS;

    fn common(params: &LiquidParams) -> &CommonParams {
        &params.common
    }

    fn resolve(
        params: &LiquidParams,
        scenario: LiquidScenario,
        family: FamilyInputs,
    ) -> Result<LiquidInputs, ExposureError> {
        resolve_with_table(params, scenario, family, ONE_HAND_AREA, CONTACT_QU)
    }

    fn compute(inputs: &LiquidInputs) -> Result<DermalOutputs, ExposureError> {
        compute_liquid(inputs)
    }
}

/// EPA-OPPT 2-Hand Dermal Contact with Liquid.
#[derive(Debug, Clone, Copy)]
pub struct TwoHandLiquidContact;

impl ExposureModel for TwoHandLiquidContact {
    type Params = LiquidParams;
    type Scenario = LiquidScenario;
    type Inputs = LiquidInputs;
    type Outputs = DermalOutputs;

    const ROUTE: Route = Route::Dermal;
    const MODEL_NAME: &'static str = "EPA-OPPT 2-Hand Dermal Contact with Liquid";
    const EQUATIONS: &'static str = LIQUID_EQUATIONS;
    const DEFAULT_SCENARIO: LiquidScenario = LiquidScenario::High;
    const PARAMETERS: &'static [&'static str] = LIQUID_PARAMETERS;

    fn common(params: &LiquidParams) -> &CommonParams {
        &params.common
    }

    fn resolve(
        params: &LiquidParams,
        scenario: LiquidScenario,
        family: FamilyInputs,
    ) -> Result<LiquidInputs, ExposureError> {
        resolve_with_table(params, scenario, family, TWO_HAND_AREA, CONTACT_QU)
    }

    fn compute(inputs: &LiquidInputs) -> Result<DermalOutputs, ExposureError> {
        compute_liquid(inputs)
    }
}

/// EPA-OPPT 2-Hand Dermal Immersion with Liquid.
#[derive(Debug, Clone, Copy)]
pub struct TwoHandLiquidImmersion;

impl ExposureModel for TwoHandLiquidImmersion {
    type Params = LiquidParams;
    type Scenario = LiquidScenario;
    type Inputs = LiquidInputs;
    type Outputs = DermalOutputs;

    const ROUTE: Route = Route::Dermal;
    const MODEL_NAME: &'static str = "EPA-OPPT 2-Hand Dermal Immersion with Liquid";
    const EQUATIONS: &'static str = LIQUID_EQUATIONS;
    const DEFAULT_SCENARIO: LiquidScenario = LiquidScenario::High;
    const PARAMETERS: &'static [&'static str] = LIQUID_PARAMETERS;

    fn common(params: &LiquidParams) -> &CommonParams {
        &params.common
    }

    fn resolve(
        params: &LiquidParams,
        scenario: LiquidScenario,
        family: FamilyInputs,
    ) -> Result<LiquidInputs, ExposureError> {
        resolve_with_table(params, scenario, family, TWO_HAND_AREA, IMMERSION_QU)
    }

    fn compute(inputs: &LiquidInputs) -> Result<DermalOutputs, ExposureError> {
        compute_liquid(inputs)
    }
}

/// User-defined Dermal: the scenario selects the surface area as well as `Qu`.
#[derive(Debug, Clone, Copy)]
pub struct UserDefinedDermal;

impl ExposureModel for UserDefinedDermal {
    type Params = LiquidParams;
    type Scenario = LiquidScenario;
    type Inputs = LiquidInputs;
    type Outputs = DermalOutputs;

    const ROUTE: Route = Route::Dermal;
    const MODEL_NAME: &'static str = "User-defined Dermal";
    const EQUATIONS: &'static str = LIQUID_EQUATIONS;
    const DEFAULT_SCENARIO: LiquidScenario = LiquidScenario::High;
    const PARAMETERS: &'static [&'static str] = LIQUID_PARAMETERS;

    fn common(params: &LiquidParams) -> &CommonParams {
        &params.common
    }

    fn resolve(
        params: &LiquidParams,
        scenario: LiquidScenario,
        family: FamilyInputs,
    ) -> Result<LiquidInputs, ExposureError> {
        let (s, qu) = match scenario {
            LiquidScenario::Low => (ONE_HAND_AREA, CONTACT_QU.low),
            LiquidScenario::High => (TWO_HAND_AREA, CONTACT_QU.high),
            LiquidScenario::User => (
                Bounds::NON_NEGATIVE.check("S", params.s.unwrap_or(TWO_HAND_AREA))?,
                Bounds::NON_NEGATIVE.check("Qu", params.qu.unwrap_or(CONTACT_QU.high))?,
            ),
        };
        finish(params, family, s, qu)
    }

    fn compute(inputs: &LiquidInputs) -> Result<DermalOutputs, ExposureError> {
        compute_liquid(inputs)
    }
}
