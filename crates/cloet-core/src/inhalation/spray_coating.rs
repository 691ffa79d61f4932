/// Spray and roll coating models: `Cm` from a scenario table of `KCk`
/// values, scaled by the solids fraction of the mist.
use serde::Deserialize;

use super::constants::{
    AUTOMOBILE_EQUATIONS, AUTOMOBILE_WORKERS_PER_SITE, B_BOUNDS, DEFAULT_B, DEFAULT_H,
    DEFAULT_YSF, H_BOUNDS, OEM_WORKERS_PER_SITE, REFINISH_WORKERS_PER_SITE,
    SOLIDS_FRACTION_EQUATIONS, SPRAY_BOOTH_KCK, UV_ROLL_HIGH_KCK, UV_ROLL_LOW_KCK,
};
use super::outputs::{airborne_outputs, InhalationOutputs};
use super::processes::solids_fraction;
use super::scenarios::{AutomobileSprayScenario, SprayBoothScenario, UvRollScenario};
use crate::checks::{check_divisor, Bounds};
use crate::error::ExposureError;
use crate::family::{CommonParams, FamilyInputs};
use crate::model::ExposureModel;
use crate::record::Record;
use crate::route::Route;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MistParams {
    /// Weight fraction of the chemical in the mist [0, 1].
    #[serde(rename = "Ymist")]
    pub ymist: f64,
    /// Read for the `user` scenario [mg/m^3].
    #[serde(rename = "KCk", default)]
    pub kck: Option<f64>,
    /// Weight fraction of the chemical in the solids; derived when omitted.
    #[serde(rename = "Ys", default)]
    pub ys: Option<f64>,
    #[serde(rename = "Ysf", default)]
    pub ysf: Option<f64>,
    #[serde(default)]
    pub b: Option<f64>,
    #[serde(default)]
    pub h: Option<f64>,
    #[serde(flatten)]
    pub common: CommonParams,
}

impl MistParams {
    pub fn new(ymist: f64) -> Self {
        Self {
            ymist,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Record)]
pub struct MistInputs {
    #[record(flatten)]
    pub family: FamilyInputs,
    #[record(name = "KCk")]
    pub kck: f64,
    #[record(name = "Ymist")]
    pub ymist: f64,
    #[record(name = "Ysf")]
    pub ysf: f64,
    #[record(name = "Ys")]
    pub ys: f64,
    pub b: f64,
    pub h: f64,
}

const MIST_PARAMETERS: &[&str] = &["Ymist", "KCk", "Ys", "Ysf", "b", "h"];

fn resolve_mist(
    params: &MistParams,
    family: FamilyInputs,
    kck: f64,
) -> Result<MistInputs, ExposureError> {
    let ymist = Bounds::UNIT.check("Ymist", params.ymist)?;
    let ysf = Bounds::UNIT.check("Ysf", params.ysf.unwrap_or(DEFAULT_YSF))?;
    let ys = match params.ys {
        Some(ys) => ys,
        None => solids_fraction(ymist, check_divisor("Ysf", ysf)?),
    };
    let ys = Bounds::UNIT.check("Ys", ys)?;
    Ok(MistInputs {
        family,
        kck,
        ymist,
        ysf,
        ys,
        b: B_BOUNDS.check("b", params.b.unwrap_or(DEFAULT_B))?,
        h: H_BOUNDS.check("h", params.h.unwrap_or(DEFAULT_H))?,
    })
}

fn user_kck(params: &MistParams, default: f64) -> Result<f64, ExposureError> {
    Bounds::NON_NEGATIVE.check("KCk", params.kck.unwrap_or(default))
}

fn spray_booth_kck(
    params: &MistParams,
    scenario: SprayBoothScenario,
    user_default: f64,
) -> Result<f64, ExposureError> {
    Ok(match scenario {
        SprayBoothScenario::ConventionalDowndraft => SPRAY_BOOTH_KCK.conventional_downdraft,
        SprayBoothScenario::ConventionalCrossdraft => SPRAY_BOOTH_KCK.conventional_crossdraft,
        SprayBoothScenario::HvlpDowndraft => SPRAY_BOOTH_KCK.hvlp_downdraft,
        SprayBoothScenario::HvlpCrossdraft => SPRAY_BOOTH_KCK.hvlp_crossdraft,
        SprayBoothScenario::User => user_kck(params, user_default)?,
    })
}

fn compute_mist(inputs: &MistInputs) -> Result<InhalationOutputs, ExposureError> {
    airborne_outputs(inputs.kck * inputs.ys, inputs.b, inputs.h, &inputs.family)
}

/// EPA-OPPT automobile OEM Spray Coating.
#[derive(Debug, Clone, Copy)]
pub struct AutomobileOemSprayCoating;

impl ExposureModel for AutomobileOemSprayCoating {
    type Params = MistParams;
    type Scenario = SprayBoothScenario;
    type Inputs = MistInputs;
    type Outputs = InhalationOutputs;

    const ROUTE: Route = Route::Inhalation;
    const MODEL_NAME: &'static str = "EPA-OPPT automobile OEM Spray Coating";
    const EQUATIONS: &'static str = SOLIDS_FRACTION_EQUATIONS;
    const DEFAULT_SCENARIO: SprayBoothScenario = SprayBoothScenario::ConventionalDowndraft;
    const DEFAULT_WORKERS_PER_SITE: u32 = OEM_WORKERS_PER_SITE;
    const PARAMETERS: &'static [&'static str] = MIST_PARAMETERS;

    fn common(params: &MistParams) -> &CommonParams {
        &params.common
    }

    fn resolve(
        params: &MistParams,
        scenario: SprayBoothScenario,
        family: FamilyInputs,
    ) -> Result<MistInputs, ExposureError> {
        let kck = spray_booth_kck(params, scenario, SPRAY_BOOTH_KCK.conventional_downdraft)?;
        resolve_mist(params, family, kck)
    }

    fn compute(inputs: &MistInputs) -> Result<InhalationOutputs, ExposureError> {
        compute_mist(inputs)
    }
}

/// EPA-OPPT Automobile Refinish Spray Coating.
#[derive(Debug, Clone, Copy)]
pub struct AutomobileRefinishSprayCoating;

impl ExposureModel for AutomobileRefinishSprayCoating {
    type Params = MistParams;
    type Scenario = SprayBoothScenario;
    type Inputs = MistInputs;
    type Outputs = InhalationOutputs;

    const ROUTE: Route = Route::Inhalation;
    const MODEL_NAME: &'static str = "EPA-OPPT Automobile Refinish Spray Coating";
    const EQUATIONS: &'static str = SOLIDS_FRACTION_EQUATIONS;
    const DEFAULT_SCENARIO: SprayBoothScenario = SprayBoothScenario::ConventionalCrossdraft;
    const DEFAULT_WORKERS_PER_SITE: u32 = REFINISH_WORKERS_PER_SITE;
    const PARAMETERS: &'static [&'static str] = MIST_PARAMETERS;

    fn common(params: &MistParams) -> &CommonParams {
        &params.common
    }

    fn resolve(
        params: &MistParams,
        scenario: SprayBoothScenario,
        family: FamilyInputs,
    ) -> Result<MistInputs, ExposureError> {
        let kck = spray_booth_kck(params, scenario, SPRAY_BOOTH_KCK.conventional_crossdraft)?;
        resolve_mist(params, family, kck)
    }

    fn compute(inputs: &MistInputs) -> Result<InhalationOutputs, ExposureError> {
        compute_mist(inputs)
    }
}

/// EPA-OPPT UV Roll Coating.
#[derive(Debug, Clone, Copy)]
pub struct UvRollCoating;

impl ExposureModel for UvRollCoating {
    type Params = MistParams;
    type Scenario = UvRollScenario;
    type Inputs = MistInputs;
    type Outputs = InhalationOutputs;

    const ROUTE: Route = Route::Inhalation;
    const MODEL_NAME: &'static str = "EPA-OPPT UV Roll Coating";
    const EQUATIONS: &'static str = SOLIDS_FRACTION_EQUATIONS;
    const DEFAULT_SCENARIO: UvRollScenario = UvRollScenario::HighEnd;
    const PARAMETERS: &'static [&'static str] = MIST_PARAMETERS;

    fn common(params: &MistParams) -> &CommonParams {
        &params.common
    }

    fn resolve(
        params: &MistParams,
        scenario: UvRollScenario,
        family: FamilyInputs,
    ) -> Result<MistInputs, ExposureError> {
        let kck = match scenario {
            UvRollScenario::LowEnd => UV_ROLL_LOW_KCK,
            UvRollScenario::HighEnd => UV_ROLL_HIGH_KCK,
            UvRollScenario::User => user_kck(params, UV_ROLL_HIGH_KCK)?,
        };
        resolve_mist(params, family, kck)
    }

    fn compute(inputs: &MistInputs) -> Result<InhalationOutputs, ExposureError> {
        compute_mist(inputs)
    }
}

// -- Automobile spray coating --

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AutomobileSprayParams {
    #[serde(default)]
    pub b: Option<f64>,
    #[serde(default)]
    pub h: Option<f64>,
    #[serde(flatten)]
    pub common: CommonParams,
}

#[derive(Debug, Clone, Copy, PartialEq, Record)]
pub struct AutomobileSprayInputs {
    #[record(flatten)]
    pub family: FamilyInputs,
    #[record(name = "KCk")]
    pub kck: f64,
    pub b: f64,
    pub h: f64,
}

/// EPA-OPPT Automobile Spray Coating: `Cm = KCk`, no caller override.
#[derive(Debug, Clone, Copy)]
pub struct AutomobileSprayCoating;

impl ExposureModel for AutomobileSprayCoating {
    type Params = AutomobileSprayParams;
    type Scenario = AutomobileSprayScenario;
    type Inputs = AutomobileSprayInputs;
    type Outputs = InhalationOutputs;

    const ROUTE: Route = Route::Inhalation;
    const MODEL_NAME: &'static str = "EPA-OPPT Automobile Spray Coating";
    const EQUATIONS: &'static str = AUTOMOBILE_EQUATIONS;
    const DEFAULT_SCENARIO: AutomobileSprayScenario =
        AutomobileSprayScenario::HighConventionalCrossdraft;
    const DEFAULT_WORKERS_PER_SITE: u32 = AUTOMOBILE_WORKERS_PER_SITE;
    const PARAMETERS: &'static [&'static str] = &["b", "h"];

    fn common(params: &AutomobileSprayParams) -> &CommonParams {
        &params.common
    }

    fn resolve(
        params: &AutomobileSprayParams,
        scenario: AutomobileSprayScenario,
        family: FamilyInputs,
    ) -> Result<AutomobileSprayInputs, ExposureError> {
        use AutomobileSprayScenario::*;

        let kck = match scenario {
            LowConventionalCrossdraft => 0.05,
            HighConventionalCrossdraft => 18.4,
            LowConventionalDowndraft => 0.01,
            HighConventionalDowndraft => 3.7,
            LowHvlpCrossdraft => 1.0,
            HighHvlpCrossdraft => 5.2,
            LowHvlpDowndraft => 0.6,
            HighHvlpDowndraft => 1.4,
        };
        Ok(AutomobileSprayInputs {
            family,
            kck,
            b: B_BOUNDS.check("b", params.b.unwrap_or(DEFAULT_B))?,
            h: H_BOUNDS.check("h", params.h.unwrap_or(DEFAULT_H))?,
        })
    }

    fn compute(inputs: &AutomobileSprayInputs) -> Result<InhalationOutputs, ExposureError> {
        airborne_outputs(inputs.kck, inputs.b, inputs.h, &inputs.family)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ModelResult;

    #[test]
    fn solids_fraction_defaults_from_mist() {
        let params = MistParams {
            ysf: Some(0.25),
            ..MistParams::new(0.9)
        };
        let run = AutomobileOemSprayCoating::evaluate(&params, None).unwrap();
        assert_eq!(run.input_record().ys, 1.0);

        let run = UvRollCoating::evaluate(&MistParams::new(0.1), None).unwrap();
        assert_eq!(run.input_record().ys, 0.1 / 0.25);
        assert_eq!(run.output_record().cm, Some(0.26 * (0.1 / 0.25)));
    }

    #[test]
    fn explicit_solids_fraction_wins() {
        let params = MistParams {
            ys: Some(0.3),
            ..MistParams::new(0.9)
        };
        let run = AutomobileRefinishSprayCoating::evaluate(&params, None).unwrap();
        assert_eq!(run.input_record().ys, 0.3);

        let bad = MistParams {
            ys: Some(1.3),
            ..MistParams::new(0.9)
        };
        assert!(AutomobileRefinishSprayCoating::evaluate(&bad, None).is_err());
    }

    #[test]
    fn zero_solids_fraction_of_mist_fails() {
        let params = MistParams {
            ysf: Some(0.0),
            ..MistParams::new(0.0)
        };
        assert_eq!(
            UvRollCoating::evaluate(&params, None).unwrap_err(),
            ExposureError::ZeroDivisor { name: "Ysf" }
        );

        // Ysf only divides when Ys is derived.
        let params = MistParams {
            ysf: Some(0.0),
            ys: Some(0.3),
            ..MistParams::new(0.0)
        };
        assert_eq!(UvRollCoating::evaluate(&params, None).unwrap().input_record().ys, 0.3);
    }

    #[test]
    fn oem_defaults() {
        let run = AutomobileOemSprayCoating::evaluate(&MistParams::new(0.1), None).unwrap();
        assert_eq!(run.scenario(), "conventional,downdraft");
        assert_eq!(run.input_record().kck, 2.3);
        assert_eq!(run.input_record().family.nwexp, 17);
        assert_eq!(run.output_record().nw, 17);
    }

    #[test]
    fn refinish_defaults() {
        let run = AutomobileRefinishSprayCoating::evaluate(&MistParams::new(0.1), None).unwrap();
        assert_eq!(run.scenario(), "conventional,crossdraft");
        assert_eq!(run.input_record().kck, 15.0);
        assert_eq!(run.output_record().nw, 3);

        let user = AutomobileRefinishSprayCoating::evaluate(&MistParams::new(0.1), Some("user")).unwrap();
        assert_eq!(user.input_record().kck, 15.0);
    }

    #[test]
    fn spray_booth_table() {
        let params = MistParams {
            kck: Some(4.0),
            ..MistParams::new(0.1)
        };
        let kck = |scenario: &str| {
            AutomobileOemSprayCoating::evaluate(&params, Some(scenario))
                .unwrap()
                .input_record()
                .kck
        };
        assert_eq!(kck("conventional, crossdraft"), 15.0);
        assert_eq!(kck("HVLP,downdraft"), 1.9);
        assert_eq!(kck("hvlp,crossdraft"), 15.0);
        assert_eq!(kck("user"), 4.0);
    }

    #[test]
    fn uv_roll_table() {
        let low = UvRollCoating::evaluate(&MistParams::new(0.1), Some("Low End of Range")).unwrap();
        assert_eq!(low.input_record().kck, 0.04);
        assert_eq!(
            UvRollCoating::get_scenarios(),
            vec!["low end of range", "high end of range", "user"]
        );
    }

    #[test]
    fn automobile_table() {
        let params = AutomobileSprayParams::default();
        let expected = [
            ("low,conventional,crossdraft", 0.05),
            ("high,conventional,crossdraft", 18.4),
            ("low,conventional,downdraft", 0.01),
            ("high,conventional,downdraft", 3.7),
            ("low,hvlp,crossdraft", 1.0),
            ("high,hvlp,crossdraft", 5.2),
            ("low,hvlp,downdraft", 0.6),
            ("high,hvlp,downdraft", 1.4),
        ];
        for (scenario, kck) in expected {
            let run = AutomobileSprayCoating::evaluate(&params, Some(scenario)).unwrap();
            assert_eq!(run.output_record().cm, Some(kck));
            assert_eq!(run.output_record().i, kck * 1.25 * 8.0);
            assert_eq!(run.output_record().nw, 3);
        }
        assert!(AutomobileSprayCoating::evaluate(&params, Some("user")).is_err());
        let default = AutomobileSprayCoating::evaluate(&params, None).unwrap();
        assert_eq!(default.scenario(), "high,conventional,crossdraft");
    }

    #[test]
    fn mist_mapping_order() {
        let run = UvRollCoating::evaluate(&MistParams::new(0.1), None).unwrap();
        let inputs: Vec<_> = run.inputs().keys().skip(7).copied().collect();
        assert_eq!(inputs, ["KCk", "Ymist", "Ysf", "Ys", "b", "h"]);
        let outputs: Vec<_> = run.outputs().keys().copied().collect();
        assert_eq!(outputs, ["Cm", "NW", "LADD", "ADD", "APDR", "I"]);
    }
}
