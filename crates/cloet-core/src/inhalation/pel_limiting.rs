/// OSHA PEL-limiting models: the airborne concentration is capped by a
/// permissible exposure limit scaled by weight fraction.
use serde::Deserialize;

use super::constants::{
    B_BOUNDS, DEFAULT_B, DEFAULT_H, DEFAULT_VM, DEFAULT_YPEL, H_BOUNDS, PARTICULATE_EQUATIONS,
    PARTICULATE_KCK, RESPIRABLE_PNOR_KCK, SOLIDS_FRACTION_EQUATIONS, TOTAL_PNOR_KCK,
    VAPOR_EQUATIONS,
};
use super::outputs::{airborne_outputs, InhalationOutputs};
use super::processes::{mass_concentration, vapor_pel_cv};
use super::scenarios::UserScenario;
use crate::checks::{check_divisor, Bounds};
use crate::error::ExposureError;
use crate::family::{CommonParams, FamilyInputs};
use crate::model::ExposureModel;
use crate::record::Record;
use crate::route::Route;

// -- Substance-specific particulates --

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ParticulateParams {
    #[serde(rename = "Ys")]
    pub ys: f64,
    /// PEL of the substance [mg/m^3].
    #[serde(rename = "KCk", default)]
    pub kck: Option<f64>,
    /// Weight fraction the PEL refers to.
    #[serde(rename = "Ypel", default)]
    pub ypel: Option<f64>,
    #[serde(default)]
    pub b: Option<f64>,
    #[serde(default)]
    pub h: Option<f64>,
    #[serde(flatten)]
    pub common: CommonParams,
}

impl ParticulateParams {
    pub fn new(ys: f64) -> Self {
        Self {
            ys,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Record)]
pub struct ParticulateInputs {
    #[record(flatten)]
    pub family: FamilyInputs,
    #[record(name = "KCk")]
    pub kck: f64,
    #[record(name = "Ys")]
    pub ys: f64,
    #[record(name = "Ypel")]
    pub ypel: f64,
    pub b: f64,
    pub h: f64,
}

/// OSHA PEL-limiting Model for Substance-specific Particulates.
#[derive(Debug, Clone, Copy)]
pub struct PelLimitingParticulates;

impl ExposureModel for PelLimitingParticulates {
    type Params = ParticulateParams;
    type Scenario = UserScenario;
    type Inputs = ParticulateInputs;
    type Outputs = InhalationOutputs;

    const ROUTE: Route = Route::Inhalation;
    const MODEL_NAME: &'static str = "OSHA PEL-limiting Model for Substance-specific Particulates";
    const EQUATIONS: &'static str = PARTICULATE_EQUATIONS;
    const DEFAULT_SCENARIO: UserScenario = UserScenario::User;
    const PARAMETERS: &'static [&'static str] = &["Ys", "KCk", "Ypel", "b", "h"];

    fn common(params: &ParticulateParams) -> &CommonParams {
        &params.common
    }

    fn resolve(
        params: &ParticulateParams,
        _scenario: UserScenario,
        family: FamilyInputs,
    ) -> Result<ParticulateInputs, ExposureError> {
        let ypel = Bounds::UNIT.check("Ypel", params.ypel.unwrap_or(DEFAULT_YPEL))?;
        Ok(ParticulateInputs {
            family,
            kck: Bounds::NON_NEGATIVE.check("KCk", params.kck.unwrap_or(PARTICULATE_KCK))?,
            ys: Bounds::UNIT.check("Ys", params.ys)?,
            ypel: check_divisor("Ypel", ypel)?,
            b: B_BOUNDS.check("b", params.b.unwrap_or(DEFAULT_B))?,
            h: H_BOUNDS.check("h", params.h.unwrap_or(DEFAULT_H))?,
        })
    }

    fn compute(inputs: &ParticulateInputs) -> Result<InhalationOutputs, ExposureError> {
        let cm = inputs.kck * inputs.ys / inputs.ypel;
        airborne_outputs(cm, inputs.b, inputs.h, &inputs.family)
    }
}

// -- Substance-specific vapors --

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct VaporParams {
    /// PEL of the substance [ppm].
    #[serde(rename = "Cvk")]
    pub cvk: f64,
    #[serde(rename = "VP")]
    pub vp: f64,
    #[serde(rename = "Ys")]
    pub ys: f64,
    #[serde(rename = "MW")]
    pub mw: f64,
    /// Vapor pressure of the PEL reference [torr].
    #[serde(rename = "VPpel")]
    pub vp_pel: f64,
    /// Molecular weight of the PEL reference [g/mol].
    #[serde(rename = "MWpel")]
    pub mw_pel: f64,
    #[serde(rename = "X")]
    pub x: f64,
    #[serde(rename = "Vm", default)]
    pub vm: Option<f64>,
    #[serde(default)]
    pub b: Option<f64>,
    #[serde(default)]
    pub h: Option<f64>,
    #[serde(flatten)]
    pub common: CommonParams,
}

#[derive(Debug, Clone, Copy, PartialEq, Record)]
pub struct VaporInputs {
    #[record(flatten)]
    pub family: FamilyInputs,
    #[record(name = "Cvk")]
    pub cvk: f64,
    #[record(name = "VP")]
    pub vp: f64,
    #[record(name = "Ys")]
    pub ys: f64,
    #[record(name = "MW")]
    pub mw: f64,
    #[record(name = "VPpel")]
    pub vp_pel: f64,
    /// Always `1 - Ys`.
    #[record(name = "Ypel")]
    pub y_pel: f64,
    #[record(name = "MWpel")]
    pub mw_pel: f64,
    #[record(name = "X")]
    pub x: f64,
    #[record(name = "Vm")]
    pub vm: f64,
    pub b: f64,
    pub h: f64,
}

/// OSHA PEL-limiting Model for Substance-specific Vapors.
#[derive(Debug, Clone, Copy)]
pub struct PelLimitingVapors;

impl ExposureModel for PelLimitingVapors {
    type Params = VaporParams;
    type Scenario = UserScenario;
    type Inputs = VaporInputs;
    type Outputs = InhalationOutputs;

    const ROUTE: Route = Route::Inhalation;
    const MODEL_NAME: &'static str = "OSHA PEL-limiting Model for Substance-specific Vapors";
    const EQUATIONS: &'static str = VAPOR_EQUATIONS;
    const DEFAULT_SCENARIO: UserScenario = UserScenario::User;
    const PARAMETERS: &'static [&'static str] =
        &["Cvk", "VP", "Ys", "MW", "VPpel", "MWpel", "X", "Vm", "b", "h"];

    fn common(params: &VaporParams) -> &CommonParams {
        &params.common
    }

    fn resolve(
        params: &VaporParams,
        _scenario: UserScenario,
        family: FamilyInputs,
    ) -> Result<VaporInputs, ExposureError> {
        let ys = Bounds::UNIT.check("Ys", params.ys)?;
        let vm = Bounds::NON_NEGATIVE.check("Vm", params.vm.unwrap_or(DEFAULT_VM))?;
        Ok(VaporInputs {
            family,
            cvk: Bounds::NON_NEGATIVE.check("Cvk", params.cvk)?,
            vp: Bounds::NON_NEGATIVE.check("VP", params.vp)?,
            ys,
            mw: check_divisor("MW", Bounds::NON_NEGATIVE.check("MW", params.mw)?)?,
            vp_pel: check_divisor("VPpel", Bounds::NON_NEGATIVE.check("VPpel", params.vp_pel)?)?,
            // The PEL reference makes up the rest of the mixture.
            y_pel: check_divisor("Ypel", 1.0 - ys)?,
            mw_pel: check_divisor("MWpel", Bounds::NON_NEGATIVE.check("MWpel", params.mw_pel)?)?,
            x: Bounds::UNIT.check("X", params.x)?,
            vm: check_divisor("Vm", vm)?,
            b: B_BOUNDS.check("b", params.b.unwrap_or(DEFAULT_B))?,
            h: H_BOUNDS.check("h", params.h.unwrap_or(DEFAULT_H))?,
        })
    }

    fn compute(inputs: &VaporInputs) -> Result<InhalationOutputs, ExposureError> {
        let cv = vapor_pel_cv(
            inputs.cvk,
            inputs.vp,
            inputs.ys,
            inputs.mw,
            inputs.vp_pel,
            inputs.y_pel,
            inputs.mw_pel,
            inputs.x,
        );
        let cm = mass_concentration(cv, inputs.mw, inputs.vm);
        Ok(airborne_outputs(cm, inputs.b, inputs.h, &inputs.family)?.with_cv(cv))
    }
}

// -- Particulates not otherwise regulated --

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PnorParams {
    #[serde(rename = "Ys")]
    pub ys: f64,
    #[serde(rename = "KCk", default)]
    pub kck: Option<f64>,
    #[serde(default)]
    pub b: Option<f64>,
    #[serde(default)]
    pub h: Option<f64>,
    #[serde(flatten)]
    pub common: CommonParams,
}

impl PnorParams {
    pub fn new(ys: f64) -> Self {
        Self {
            ys,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Record)]
pub struct PnorInputs {
    #[record(flatten)]
    pub family: FamilyInputs,
    #[record(name = "KCk")]
    pub kck: f64,
    #[record(name = "Ys")]
    pub ys: f64,
    pub b: f64,
    pub h: f64,
}

const PNOR_PARAMETERS: &[&str] = &["Ys", "KCk", "b", "h"];

fn resolve_pnor(
    params: &PnorParams,
    family: FamilyInputs,
    default_kck: f64,
) -> Result<PnorInputs, ExposureError> {
    Ok(PnorInputs {
        family,
        kck: Bounds::NON_NEGATIVE.check("KCk", params.kck.unwrap_or(default_kck))?,
        ys: Bounds::UNIT.check("Ys", params.ys)?,
        b: B_BOUNDS.check("b", params.b.unwrap_or(DEFAULT_B))?,
        h: H_BOUNDS.check("h", params.h.unwrap_or(DEFAULT_H))?,
    })
}

fn compute_pnor(inputs: &PnorInputs) -> Result<InhalationOutputs, ExposureError> {
    airborne_outputs(inputs.kck * inputs.ys, inputs.b, inputs.h, &inputs.family)
}

/// OSHA Total PNOR PEL-limiting.
#[derive(Debug, Clone, Copy)]
pub struct TotalPnorPelLimiting;

impl ExposureModel for TotalPnorPelLimiting {
    type Params = PnorParams;
    type Scenario = UserScenario;
    type Inputs = PnorInputs;
    type Outputs = InhalationOutputs;

    const ROUTE: Route = Route::Inhalation;
    const MODEL_NAME: &'static str = "OSHA Total PNOR PEL-limiting";
    const EQUATIONS: &'static str = SOLIDS_FRACTION_EQUATIONS;
    const DEFAULT_SCENARIO: UserScenario = UserScenario::User;
    const PARAMETERS: &'static [&'static str] = PNOR_PARAMETERS;

    fn common(params: &PnorParams) -> &CommonParams {
        &params.common
    }

    fn resolve(
        params: &PnorParams,
        _scenario: UserScenario,
        family: FamilyInputs,
    ) -> Result<PnorInputs, ExposureError> {
        resolve_pnor(params, family, TOTAL_PNOR_KCK)
    }

    fn compute(inputs: &PnorInputs) -> Result<InhalationOutputs, ExposureError> {
        compute_pnor(inputs)
    }
}

/// OSHA Respirable PNOR PEL-limiting.
#[derive(Debug, Clone, Copy)]
pub struct RespirablePnorPelLimiting;

impl ExposureModel for RespirablePnorPelLimiting {
    type Params = PnorParams;
    type Scenario = UserScenario;
    type Inputs = PnorInputs;
    type Outputs = InhalationOutputs;

    const ROUTE: Route = Route::Inhalation;
    const MODEL_NAME: &'static str = "OSHA Respirable PNOR PEL-limiting";
    const EQUATIONS: &'static str = SOLIDS_FRACTION_EQUATIONS;
    const DEFAULT_SCENARIO: UserScenario = UserScenario::User;
    const PARAMETERS: &'static [&'static str] = PNOR_PARAMETERS;

    fn common(params: &PnorParams) -> &CommonParams {
        &params.common
    }

    fn resolve(
        params: &PnorParams,
        _scenario: UserScenario,
        family: FamilyInputs,
    ) -> Result<PnorInputs, ExposureError> {
        resolve_pnor(params, family, RESPIRABLE_PNOR_KCK)
    }

    fn compute(inputs: &PnorInputs) -> Result<InhalationOutputs, ExposureError> {
        compute_pnor(inputs)
    }
}
