/// User-defined Inhalation: the caller supplies the airborne concentration.
use serde::Deserialize;

use super::constants::{B_BOUNDS, DEFAULT_B, DEFAULT_USER_YS, DEFAULT_VM, H_BOUNDS, USER_EQUATIONS};
use super::outputs::InhalationOutputs;
use super::processes::mass_concentration;
use super::scenarios::UserScenario;
use crate::checks::{check_divisor, Bounds};
use crate::error::ExposureError;
use crate::exposures::{potential_dose_rate, DoseRateTerms};
use crate::family::{CommonParams, FamilyInputs};
use crate::model::ExposureModel;
use crate::record::Record;
use crate::route::Route;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct UserInhalationParams {
    /// Volumetric concentration [ppm].
    #[serde(rename = "Cv")]
    pub cv: f64,
    #[serde(rename = "MW")]
    pub mw: f64,
    pub h: f64,
    /// Mass concentration override [mg/m^3]; derived from `Cv` when omitted.
    #[serde(rename = "Cm", default)]
    pub cm: Option<f64>,
    #[serde(rename = "Vm", default)]
    pub vm: Option<f64>,
    #[serde(rename = "Ys", default)]
    pub ys: Option<f64>,
    #[serde(default)]
    pub b: Option<f64>,
    #[serde(flatten)]
    pub common: CommonParams,
}

impl UserInhalationParams {
    pub fn new(cv: f64, mw: f64, h: f64) -> Self {
        Self {
            cv,
            mw,
            h,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Record)]
pub struct UserInhalationInputs {
    #[record(flatten)]
    pub family: FamilyInputs,
    #[record(name = "Cv")]
    pub cv: f64,
    #[record(name = "MW")]
    pub mw: f64,
    #[record(name = "Vm")]
    pub vm: f64,
    #[record(name = "Ys")]
    pub ys: f64,
    #[record(name = "Cm")]
    pub cm: f64,
    pub b: f64,
    pub h: f64,
}

#[derive(Debug, Clone, Copy)]
pub struct UserDefinedInhalation;

impl ExposureModel for UserDefinedInhalation {
    type Params = UserInhalationParams;
    type Scenario = UserScenario;
    type Inputs = UserInhalationInputs;
    type Outputs = InhalationOutputs;

    const ROUTE: Route = Route::Inhalation;
    const MODEL_NAME: &'static str = "User-defined Inhalation";
    const EQUATIONS: &'static str = USER_EQUATIONS;
    const DEFAULT_SCENARIO: UserScenario = UserScenario::User;
    const PARAMETERS: &'static [&'static str] = &["Cv", "MW", "h", "Cm", "Vm", "Ys", "b"];

    fn common(params: &UserInhalationParams) -> &CommonParams {
        &params.common
    }

    fn resolve(
        params: &UserInhalationParams,
        _scenario: UserScenario,
        family: FamilyInputs,
    ) -> Result<UserInhalationInputs, ExposureError> {
        let cv = Bounds::NON_NEGATIVE.check("Cv", params.cv)?;
        let mw = Bounds::NON_NEGATIVE.check("MW", params.mw)?;
        let vm = Bounds::NON_NEGATIVE.check("Vm", params.vm.unwrap_or(DEFAULT_VM))?;
        let ys = Bounds::UNIT.check("Ys", params.ys.unwrap_or(DEFAULT_USER_YS))?;
        let cm = match params.cm {
            Some(cm) => cm,
            None => mass_concentration(cv, mw, check_divisor("Vm", vm)?) * ys,
        };
        let cm = Bounds::NON_NEGATIVE.check("Cm", cm)?;
        Ok(UserInhalationInputs {
            family,
            cv,
            mw,
            vm,
            ys,
            cm,
            b: B_BOUNDS.check("b", params.b.unwrap_or(DEFAULT_B))?,
            h: H_BOUNDS.check("h", params.h)?,
        })
    }

    fn compute(inputs: &UserInhalationInputs) -> Result<InhalationOutputs, ExposureError> {
        let i = potential_dose_rate(
            Route::Inhalation,
            &DoseRateTerms::Airborne {
                cm: inputs.cm,
                b: inputs.b,
                h: inputs.h,
            },
        )?;
        // Cm is an input here, so it is not repeated among the outputs.
        Ok(InhalationOutputs::from_dose_rate(i, &inputs.family))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ModelResult;

    #[test]
    fn derives_cm_from_cv() {
        let params = UserInhalationParams {
            ys: Some(0.5),
            ..UserInhalationParams::new(10.0, 100.0, 4.0)
        };
        let run = UserDefinedInhalation::evaluate(&params, None).unwrap();
        let cm = 10.0 * 100.0 / 24.45 * 0.5;
        assert_eq!(run.input_record().cm, cm);
        assert_eq!(run.output_record().i, cm * 1.25 * 4.0);
    }

    #[test]
    fn cm_override() {
        let params = UserInhalationParams {
            cm: Some(2.0),
            ..UserInhalationParams::new(10.0, 100.0, 8.0)
        };
        let run = UserDefinedInhalation::evaluate(&params, None).unwrap();
        assert_eq!(run.input_record().cm, 2.0);
        assert_eq!(run.output_record().i, 20.0);

        let negative = UserInhalationParams {
            cm: Some(-2.0),
            ..UserInhalationParams::new(10.0, 100.0, 8.0)
        };
        assert!(matches!(
            UserDefinedInhalation::evaluate(&negative, None),
            Err(ExposureError::Bounds { name: "Cm", .. })
        ));
    }

    #[test]
    fn zero_molar_volume_fails_only_when_cm_is_derived() {
        let params = UserInhalationParams {
            vm: Some(0.0),
            ..UserInhalationParams::new(10.0, 100.0, 8.0)
        };
        assert_eq!(
            UserDefinedInhalation::evaluate(&params, None).unwrap_err(),
            ExposureError::ZeroDivisor { name: "Vm" }
        );

        let params = UserInhalationParams {
            cm: Some(2.0),
            ..params
        };
        assert_eq!(UserDefinedInhalation::evaluate(&params, None).unwrap().input_record().cm, 2.0);
    }

    #[test]
    fn h_is_required_and_bounded() {
        let params = UserInhalationParams::new(10.0, 100.0, 25.0);
        assert!(UserDefinedInhalation::evaluate(&params, None).is_err());
        assert!(serde_json::from_str::<UserInhalationParams>(r#"{"Cv": 1, "MW": 2}"#).is_err());
    }

    #[test]
    fn mapping_order() {
        let run =
            UserDefinedInhalation::evaluate(&UserInhalationParams::new(1.0, 2.0, 3.0), None).unwrap();
        let inputs: Vec<_> = run.inputs().keys().skip(7).copied().collect();
        assert_eq!(inputs, ["Cv", "MW", "Vm", "Ys", "Cm", "b", "h"]);
        let outputs: Vec<_> = run.outputs().keys().copied().collect();
        assert_eq!(outputs, ["NW", "LADD", "ADD", "APDR", "I"]);
    }
}
