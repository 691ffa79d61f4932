/// EPA-OPPT Mass Balance: vapor generation diluted by ventilation.
use serde::Deserialize;

use super::constants::{
    B_BOUNDS, DEFAULT_B, DEFAULT_H, DEFAULT_T, DEFAULT_VM, DEFAULT_VZ, H_BOUNDS, INDOOR_TYPICAL,
    INDOOR_WORST_CASE, MASS_BALANCE_EQUATIONS, OUTDOOR_TYPICAL, OUTDOOR_WORST_CASE_K,
};
use super::outputs::{airborne_outputs, InhalationOutputs};
use super::processes::{mass_balance_cv, mass_concentration, outdoor_worst_case_ventilation};
use super::scenarios::MassBalanceScenario;
use crate::checks::{check_divisor, Bounds};
use crate::error::ExposureError;
use crate::family::{CommonParams, FamilyInputs};
use crate::model::ExposureModel;
use crate::record::Record;
use crate::route::Route;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MassBalanceParams {
    /// Vapor generation rate [g/s].
    #[serde(rename = "G")]
    pub g: f64,
    /// Molecular weight [g/mol].
    #[serde(rename = "MW")]
    pub mw: f64,
    /// Vapor pressure [torr].
    #[serde(rename = "VP")]
    pub vp: f64,
    /// Mole fraction in the liquid [0, 1].
    #[serde(rename = "X")]
    pub x: f64,
    #[serde(rename = "T", default)]
    pub t: Option<f64>,
    /// Ventilation rate, read for the `user` scenario [ft^3/min].
    #[serde(rename = "Q", default)]
    pub q: Option<f64>,
    /// Mixing factor, read for the `user` scenario.
    #[serde(rename = "k", default)]
    pub k: Option<f64>,
    /// Wind speed for the outdoor worst case [ft/min].
    #[serde(default)]
    pub vz: Option<f64>,
    #[serde(rename = "Vm", default)]
    pub vm: Option<f64>,
    #[serde(default)]
    pub b: Option<f64>,
    #[serde(default)]
    pub h: Option<f64>,
    #[serde(flatten)]
    pub common: CommonParams,
}

impl MassBalanceParams {
    pub fn new(g: f64, mw: f64, vp: f64, x: f64) -> Self {
        Self {
            g,
            mw,
            vp,
            x,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Record)]
pub struct MassBalanceInputs {
    #[record(flatten)]
    pub family: FamilyInputs,
    #[record(name = "T")]
    pub t: f64,
    #[record(name = "G")]
    pub g: f64,
    #[record(name = "MW")]
    pub mw: f64,
    #[record(name = "X")]
    pub x: f64,
    #[record(name = "VP")]
    pub vp: f64,
    #[record(name = "Vm")]
    pub vm: f64,
    pub b: f64,
    pub h: f64,
    #[record(name = "Q")]
    pub q: f64,
    pub k: f64,
}

#[derive(Debug, Clone, Copy)]
pub struct MassBalance;

impl ExposureModel for MassBalance {
    type Params = MassBalanceParams;
    type Scenario = MassBalanceScenario;
    type Inputs = MassBalanceInputs;
    type Outputs = InhalationOutputs;

    const ROUTE: Route = Route::Inhalation;
    const MODEL_NAME: &'static str = "EPA-OPPT Mass Balance";
    const EQUATIONS: &'static str = MASS_BALANCE_EQUATIONS;
    const DEFAULT_SCENARIO: MassBalanceScenario = MassBalanceScenario::IndoorTypical;
    const PARAMETERS: &'static [&'static str] =
        &["G", "MW", "VP", "X", "T", "Q", "k", "vz", "Vm", "b", "h"];

    fn common(params: &MassBalanceParams) -> &CommonParams {
        &params.common
    }

    fn resolve(
        params: &MassBalanceParams,
        scenario: MassBalanceScenario,
        family: FamilyInputs,
    ) -> Result<MassBalanceInputs, ExposureError> {
        let t = Bounds::NON_NEGATIVE.check("T", params.t.unwrap_or(DEFAULT_T))?;
        let g = Bounds::NON_NEGATIVE.check("G", params.g)?;
        let mw = check_divisor("MW", Bounds::NON_NEGATIVE.check("MW", params.mw)?)?;
        let x = Bounds::UNIT.check("X", params.x)?;
        let vp = Bounds::NON_NEGATIVE.check("VP", params.vp)?;
        let vm = Bounds::NON_NEGATIVE.check("Vm", params.vm.unwrap_or(DEFAULT_VM))?;
        let vm = check_divisor("Vm", vm)?;
        let b = B_BOUNDS.check("b", params.b.unwrap_or(DEFAULT_B))?;
        let h = H_BOUNDS.check("h", params.h.unwrap_or(DEFAULT_H))?;

        let (q, k) = match scenario {
            MassBalanceScenario::IndoorTypical => (INDOOR_TYPICAL.q, INDOOR_TYPICAL.k),
            MassBalanceScenario::IndoorWorstCase => (INDOOR_WORST_CASE.q, INDOOR_WORST_CASE.k),
            MassBalanceScenario::OutdoorTypical => (OUTDOOR_TYPICAL.q, OUTDOOR_TYPICAL.k),
            MassBalanceScenario::OutdoorWorstCase => {
                let vz = Bounds::NON_NEGATIVE.check("vz", params.vz.unwrap_or(DEFAULT_VZ))?;
                (outdoor_worst_case_ventilation(vz), OUTDOOR_WORST_CASE_K)
            }
            MassBalanceScenario::User => (
                Bounds::NON_NEGATIVE.check("Q", params.q.unwrap_or(INDOOR_TYPICAL.q))?,
                Bounds::UNIT.check("k", params.k.unwrap_or(INDOOR_TYPICAL.k))?,
            ),
        };
        let q = check_divisor("Q", q)?;
        let k = check_divisor("k", k)?;

        Ok(MassBalanceInputs {
            family,
            t,
            g,
            mw,
            x,
            vp,
            vm,
            b,
            h,
            q,
            k,
        })
    }

    fn compute(inputs: &MassBalanceInputs) -> Result<InhalationOutputs, ExposureError> {
        let cv = mass_balance_cv(
            inputs.t, inputs.g, inputs.mw, inputs.q, inputs.k, inputs.x, inputs.vp,
        );
        let cm = mass_concentration(cv, inputs.mw, inputs.vm);
        Ok(airborne_outputs(cm, inputs.b, inputs.h, &inputs.family)?.with_cv(cv))
    }
}
