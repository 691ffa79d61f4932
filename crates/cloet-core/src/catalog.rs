/// Model catalog: every model addressable by identifier and driven from a
/// name-to-value parameter bag.
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer};
use thiserror::Error;

use crate::dermal::{
    OneHandLiquidContact, TwoHandContainerSurfaceContact, TwoHandLiquidContact,
    TwoHandLiquidImmersion, TwoHandSolidsContact, UserDefinedDermal,
};
use crate::error::ExposureError;
use crate::family::COMMON_PARAMETERS;
use crate::inhalation::{
    AutomobileOemSprayCoating, AutomobileRefinishSprayCoating, AutomobileSprayCoating, MassBalance,
    PelLimitingParticulates, PelLimitingVapors, RespirablePnorPelLimiting,
    SmallVolumeSolidsHandling, TotalPnorPelLimiting, UserDefinedInhalation, UvRollCoating,
};
use crate::model::{ExposureModel, ModelResult};
use crate::record::Record;
use crate::route::Route;
use crate::scenario::ScenarioKey;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("unknown model '{0}'")]
    UnknownModel(String),

    #[error("invalid parameters: {0}")]
    InvalidParameters(String),

    #[error(transparent)]
    Exposure(#[from] ExposureError),
}

fn run<'de, M, D>(params: D, scenario: Option<&str>) -> Result<Box<dyn ModelResult>, CatalogError>
where
    M: ExposureModel,
    D: Deserializer<'de>,
{
    let params = M::Params::deserialize(params)
        .map_err(|err| CatalogError::InvalidParameters(err.to_string()))?;
    Ok(Box::new(M::evaluate(&params, scenario)?))
}

fn parameter_names<M: ExposureModel>() -> Vec<&'static str> {
    COMMON_PARAMETERS
        .iter()
        .chain(M::PARAMETERS)
        .copied()
        .collect()
}

macro_rules! model_catalog {
    ($($variant:ident => $id:literal: $model:ty),+ $(,)?) => {
        /// Every model in the catalog.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum ModelKind {
            $($variant),+
        }

        impl ModelKind {
            pub const ALL: &'static [ModelKind] = &[$(ModelKind::$variant),+];

            /// Snake-case identifier, e.g. `one_hand_liquid_contact`.
            pub fn id(&self) -> &'static str {
                match self {
                    $(ModelKind::$variant => $id),+
                }
            }

            pub fn route(&self) -> Route {
                match self {
                    $(ModelKind::$variant => <$model as ExposureModel>::ROUTE),+
                }
            }

            pub fn model_name(&self) -> &'static str {
                match self {
                    $(ModelKind::$variant => <$model as ExposureModel>::MODEL_NAME),+
                }
            }

            pub fn equations(&self) -> &'static str {
                match self {
                    $(ModelKind::$variant => <$model as ExposureModel>::EQUATIONS),+
                }
            }

            pub fn scenarios(&self) -> Vec<&'static str> {
                match self {
                    $(ModelKind::$variant => <$model as ExposureModel>::get_scenarios()),+
                }
            }

            pub fn default_scenario(&self) -> &'static str {
                match self {
                    $(ModelKind::$variant => {
                        <$model as ExposureModel>::DEFAULT_SCENARIO.as_str()
                    }),+
                }
            }

            /// Parameter names the model accepts, family names first.
            pub fn parameter_names(&self) -> Vec<&'static str> {
                match self {
                    $(ModelKind::$variant => parameter_names::<$model>()),+
                }
            }

            /// Names the model can report among its inputs.
            pub fn input_names(&self) -> Vec<&'static str> {
                match self {
                    $(ModelKind::$variant => {
                        <<$model as ExposureModel>::Inputs as Record>::field_names()
                    }),+
                }
            }

            /// Names the model can report among its outputs.
            pub fn output_names(&self) -> Vec<&'static str> {
                match self {
                    $(ModelKind::$variant => {
                        <<$model as ExposureModel>::Outputs as Record>::field_names()
                    }),+
                }
            }

            /// Deserializes `params` into the model's parameter struct and
            /// evaluates it. `None` selects the default scenario.
            pub fn evaluate<'de, D: Deserializer<'de>>(
                self,
                params: D,
                scenario: Option<&str>,
            ) -> Result<Box<dyn ModelResult>, CatalogError> {
                match self {
                    $(ModelKind::$variant => run::<$model, D>(params, scenario)),+
                }
            }
        }
    };
}

model_catalog! {
    OneHandLiquidContact => "one_hand_liquid_contact": OneHandLiquidContact,
    TwoHandLiquidContact => "two_hand_liquid_contact": TwoHandLiquidContact,
    TwoHandLiquidImmersion => "two_hand_liquid_immersion": TwoHandLiquidImmersion,
    TwoHandSolidsContact => "two_hand_solids_contact": TwoHandSolidsContact,
    TwoHandContainerSurfaceContact => "two_hand_container_surface_contact": TwoHandContainerSurfaceContact,
    UserDefinedDermal => "user_defined_dermal": UserDefinedDermal,
    SmallVolumeSolidsHandling => "small_volume_solids_handling": SmallVolumeSolidsHandling,
    MassBalance => "mass_balance": MassBalance,
    PelLimitingParticulates => "pel_limiting_particulates": PelLimitingParticulates,
    PelLimitingVapors => "pel_limiting_vapors": PelLimitingVapors,
    TotalPnorPelLimiting => "total_pnor_pel_limiting": TotalPnorPelLimiting,
    RespirablePnorPelLimiting => "respirable_pnor_pel_limiting": RespirablePnorPelLimiting,
    AutomobileOemSprayCoating => "automobile_oem_spray_coating": AutomobileOemSprayCoating,
    AutomobileRefinishSprayCoating => "automobile_refinish_spray_coating": AutomobileRefinishSprayCoating,
    AutomobileSprayCoating => "automobile_spray_coating": AutomobileSprayCoating,
    UvRollCoating => "uv_roll_coating": UvRollCoating,
    UserDefinedInhalation => "user_defined_inhalation": UserDefinedInhalation,
}

impl ModelKind {
    pub fn for_route(route: Route) -> impl Iterator<Item = ModelKind> {
        Self::ALL.iter().copied().filter(move |kind| kind.route() == route)
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ModelKind {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace('-', "_");
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.id() == wanted)
            .ok_or_else(|| CatalogError::UnknownModel(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::try_unit_of;
    use crate::value::Value;
    use approx::assert_relative_eq;
    use serde_json::json;

    #[test]
    fn catalog_is_complete() {
        assert_eq!(ModelKind::ALL.len(), 17);
        assert_eq!(ModelKind::for_route(Route::Dermal).count(), 6);
        assert_eq!(ModelKind::for_route(Route::Inhalation).count(), 11);
    }

    #[test]
    fn identifiers_round_trip() {
        for kind in ModelKind::ALL {
            assert_eq!(kind.id().parse::<ModelKind>().unwrap(), *kind);
        }
        assert_eq!(
            "Mass-Balance".parse::<ModelKind>().unwrap(),
            ModelKind::MassBalance
        );
        assert!(matches!(
            "oral_gavage".parse::<ModelKind>(),
            Err(CatalogError::UnknownModel(_))
        ));
    }

    #[test]
    fn default_scenario_is_listed() {
        for kind in ModelKind::ALL {
            assert!(
                kind.scenarios().contains(&kind.default_scenario()),
                "{kind}"
            );
        }
    }

    #[test]
    fn every_reported_name_has_a_unit() {
        for kind in ModelKind::ALL {
            for name in kind.input_names().into_iter().chain(kind.output_names()) {
                assert!(try_unit_of(name).is_some(), "{kind}: no unit for {name}");
            }
        }
    }

    #[test]
    fn reported_inputs_are_accepted_parameters() {
        for kind in ModelKind::ALL {
            let accepted = kind.parameter_names();
            for name in kind.input_names() {
                // KCk is table-driven for the automobile model; vapor Ypel is 1 - Ys
                let derived = (*kind == ModelKind::AutomobileSprayCoating && name == "KCk")
                    || (*kind == ModelKind::PelLimitingVapors && name == "Ypel");
                if derived {
                    continue;
                }
                assert!(accepted.contains(&name), "{kind}: {name} not accepted");
            }
        }
    }

    #[test]
    fn evaluates_from_parameter_bag() {
        let run = ModelKind::OneHandLiquidContact
            .evaluate(json!({"Yderm": 0.1}), Some("high"))
            .unwrap();
        assert_eq!(run.route(), Route::Dermal);
        assert_eq!(run.model_name(), "EPA-OPPT 1-Hand Dermal Contact with Liquid");
        assert_relative_eq!(run.output("Dexp").unwrap(), 112.35, epsilon = 1e-10);
        assert_eq!(run.outputs()["NW"], Value::Int(1));
    }

    #[test]
    fn family_parameters_flow_through_the_bag() {
        let run = ModelKind::AutomobileOemSprayCoating
            .evaluate(json!({"Ymist": 0.2, "NWexp": 4, "NS": 2}), None)
            .unwrap();
        assert_eq!(run.outputs()["NW"], Value::Int(8));
    }

    #[test]
    fn errors_are_classified() {
        let missing = ModelKind::MassBalance.evaluate(json!({"G": 1.0}), None);
        assert!(matches!(missing, Err(CatalogError::InvalidParameters(_))));

        let wrong_type = ModelKind::OneHandLiquidContact.evaluate(json!({"Yderm": "high"}), None);
        assert!(matches!(wrong_type, Err(CatalogError::InvalidParameters(_))));

        let bounds = ModelKind::OneHandLiquidContact.evaluate(json!({"Yderm": 2.0}), None);
        assert!(matches!(
            bounds,
            Err(CatalogError::Exposure(ExposureError::Bounds { .. }))
        ));

        let scenario = ModelKind::OneHandLiquidContact.evaluate(json!({"Yderm": 0.5}), Some("nope"));
        assert!(matches!(
            scenario,
            Err(CatalogError::Exposure(ExposureError::Scenario { .. }))
        ));
    }

    /// Smallest parameter bag every scenario of `kind` accepts.
    fn required_bag(kind: ModelKind) -> serde_json::Value {
        match kind {
            ModelKind::OneHandLiquidContact
            | ModelKind::TwoHandLiquidContact
            | ModelKind::TwoHandLiquidImmersion
            | ModelKind::UserDefinedDermal
            | ModelKind::TwoHandSolidsContact
            | ModelKind::TwoHandContainerSurfaceContact => json!({"Yderm": 0.5}),
            ModelKind::SmallVolumeSolidsHandling
            | ModelKind::PelLimitingParticulates
            | ModelKind::TotalPnorPelLimiting
            | ModelKind::RespirablePnorPelLimiting => json!({"Ys": 0.5}),
            ModelKind::MassBalance => json!({"G": 0.01, "MW": 50.0, "VP": 10.0, "X": 0.5}),
            ModelKind::PelLimitingVapors => json!({
                "Cvk": 500.0, "VP": 23.7564, "Ys": 0.4, "MW": 18.015,
                "VPpel": 28.4, "MWpel": 92.141, "X": 0.5
            }),
            ModelKind::AutomobileOemSprayCoating
            | ModelKind::AutomobileRefinishSprayCoating
            | ModelKind::UvRollCoating => json!({"Ymist": 0.5}),
            ModelKind::AutomobileSprayCoating => json!({}),
            ModelKind::UserDefinedInhalation => json!({"Cv": 1.0, "MW": 50.0, "h": 8.0}),
        }
    }

    #[test]
    fn every_listed_scenario_evaluates() {
        for &kind in ModelKind::ALL {
            for key in kind.scenarios() {
                let run = kind
                    .evaluate(required_bag(kind), Some(key))
                    .unwrap_or_else(|err| panic!("{kind} '{key}': {err}"));
                assert_eq!(run.scenario(), key, "{kind}");

                let loose = key.to_uppercase().replace(',', " , ");
                let run = kind
                    .evaluate(required_bag(kind), Some(&loose))
                    .unwrap_or_else(|err| panic!("{kind} '{loose}': {err}"));
                assert_eq!(run.scenario(), key, "{kind}");
            }

            let bogus = kind.evaluate(required_bag(kind), Some("not-a-scenario"));
            assert!(
                matches!(bogus, Err(CatalogError::Exposure(ExposureError::Scenario { .. }))),
                "{kind} accepted a bogus scenario"
            );
        }
    }

    #[test]
    fn outputs_never_carry_the_internal_dose_rate_name() {
        let bags = [
            (ModelKind::TwoHandSolidsContact, json!({"Yderm": 0.5})),
            (ModelKind::SmallVolumeSolidsHandling, json!({"Ys": 0.5})),
            (ModelKind::UvRollCoating, json!({"Ymist": 0.5})),
            (ModelKind::UserDefinedInhalation, json!({"Cv": 1.0, "MW": 50.0, "h": 8.0})),
        ];
        for (kind, bag) in bags {
            let run = kind.evaluate(bag, None).unwrap();
            assert!(!run.outputs().contains_key("PDR"));
            assert!(run.outputs().contains_key(kind.route().dose_rate_name()));
        }
    }
}
