/// Dermal exposure models.
///
/// Six models sharing `Dexp = S * Qu * Yderm * FT` (liquid contact and
/// immersion) or `Dexp = SQu * Yderm * FT` (solids and container surfaces).
/// They differ only in their scenario tables.
pub mod constants;
pub mod liquid;
pub mod outputs;
pub mod scenarios;
pub mod solids;

pub use liquid::{
    LiquidInputs, LiquidParams, OneHandLiquidContact, TwoHandLiquidContact,
    TwoHandLiquidImmersion, UserDefinedDermal,
};
pub use outputs::DermalOutputs;
pub use scenarios::{LiquidScenario, SolidsScenario};
pub use solids::{SolidsInputs, SolidsParams, TwoHandContainerSurfaceContact, TwoHandSolidsContact};
