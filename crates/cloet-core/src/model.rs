/// The construction protocol every exposure model follows, and the frozen
/// result it produces.
use std::fmt;
use std::marker::PhantomData;

use serde::de::DeserializeOwned;

use crate::error::ExposureError;
use crate::family::{CommonParams, FamilyInputs, DEFAULT_NWEXP};
use crate::record::Record;
use crate::route::Route;
use crate::scenario::ScenarioKey;
use crate::value::ParameterMap;

/// Core trait for exposure models.
///
/// Models supply their scenario table and formulas through `resolve` and
/// `compute`; `evaluate` runs the shared protocol: validate family
/// parameters, check the scenario, resolve model inputs, compute outputs.
pub trait ExposureModel: Sized + 'static {
    /// Caller-supplied parameters, deserializable under the reference names.
    type Params: fmt::Debug + Clone + DeserializeOwned;
    type Scenario: ScenarioKey + fmt::Debug + Send + Sync;
    type Inputs: Record + fmt::Debug + Clone + PartialEq + Send + Sync;
    type Outputs: Record + fmt::Debug + Clone + PartialEq + Send + Sync;

    const ROUTE: Route;
    const MODEL_NAME: &'static str;
    const EQUATIONS: &'static str;
    const DEFAULT_SCENARIO: Self::Scenario;
    const DEFAULT_WORKERS_PER_SITE: u32 = DEFAULT_NWEXP;
    /// Model-specific parameter names, excluding the family ones.
    const PARAMETERS: &'static [&'static str];

    fn common(params: &Self::Params) -> &CommonParams;

    /// Applies the scenario table and validates every model input.
    fn resolve(
        params: &Self::Params,
        scenario: Self::Scenario,
        family: FamilyInputs,
    ) -> Result<Self::Inputs, ExposureError>;

    fn compute(inputs: &Self::Inputs) -> Result<Self::Outputs, ExposureError>;

    fn get_scenarios() -> Vec<&'static str> {
        Self::Scenario::keys()
    }

    /// Builds a model instance. `None` selects `DEFAULT_SCENARIO`.
    fn evaluate(
        params: &Self::Params,
        scenario: Option<&str>,
    ) -> Result<Evaluation<Self>, ExposureError> {
        let family = Self::common(params).resolve(Self::ROUTE, Self::DEFAULT_WORKERS_PER_SITE)?;
        let scenario = match scenario {
            Some(raw) => Self::Scenario::parse(raw)?,
            None => Self::DEFAULT_SCENARIO,
        };
        let inputs = Self::resolve(params, scenario, family)?;
        let outputs = Self::compute(&inputs)?;
        Ok(Evaluation::new(scenario, inputs, outputs))
    }
}

/// An evaluated model instance. Immutable once built.
pub struct Evaluation<M: ExposureModel> {
    scenario: M::Scenario,
    inputs: M::Inputs,
    outputs: M::Outputs,
    input_map: ParameterMap,
    output_map: ParameterMap,
    _model: PhantomData<fn() -> M>,
}

impl<M: ExposureModel> Evaluation<M> {
    fn new(scenario: M::Scenario, inputs: M::Inputs, outputs: M::Outputs) -> Self {
        let input_map = inputs.to_map();
        let output_map = outputs.to_map();
        Self {
            scenario,
            inputs,
            outputs,
            input_map,
            output_map,
            _model: PhantomData,
        }
    }

    pub fn scenario_key(&self) -> M::Scenario {
        self.scenario
    }

    pub fn input_record(&self) -> &M::Inputs {
        &self.inputs
    }

    pub fn output_record(&self) -> &M::Outputs {
        &self.outputs
    }
}

impl<M: ExposureModel> Clone for Evaluation<M> {
    fn clone(&self) -> Self {
        Self {
            scenario: self.scenario,
            inputs: self.inputs.clone(),
            outputs: self.outputs.clone(),
            input_map: self.input_map.clone(),
            output_map: self.output_map.clone(),
            _model: PhantomData,
        }
    }
}

impl<M: ExposureModel> PartialEq for Evaluation<M> {
    fn eq(&self, other: &Self) -> bool {
        self.scenario == other.scenario
            && self.inputs == other.inputs
            && self.outputs == other.outputs
    }
}

impl<M: ExposureModel> fmt::Debug for Evaluation<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Evaluation")
            .field("model_name", &M::MODEL_NAME)
            .field("scenario", &self.scenario)
            .field("inputs", &self.inputs)
            .field("outputs", &self.outputs)
            .finish()
    }
}

/// Read-only view of any evaluated model, independent of its type.
pub trait ModelResult: fmt::Debug + Send + Sync {
    fn route(&self) -> Route;
    fn model_name(&self) -> &'static str;
    fn equations(&self) -> &'static str;
    /// The normalized scenario key actually used.
    fn scenario(&self) -> &'static str;
    fn inputs(&self) -> &ParameterMap;
    fn outputs(&self) -> &ParameterMap;

    fn output(&self, name: &str) -> Option<f64> {
        self.outputs().get(name).map(|v| v.as_f64())
    }
}

impl<M: ExposureModel> ModelResult for Evaluation<M> {
    fn route(&self) -> Route {
        M::ROUTE
    }

    fn model_name(&self) -> &'static str {
        M::MODEL_NAME
    }

    fn equations(&self) -> &'static str {
        M::EQUATIONS
    }

    fn scenario(&self) -> &'static str {
        self.scenario.as_str()
    }

    fn inputs(&self) -> &ParameterMap {
        &self.input_map
    }

    fn outputs(&self) -> &ParameterMap {
        &self.output_map
    }
}
