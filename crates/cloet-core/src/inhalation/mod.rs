/// Inhalation exposure models.
///
/// Eleven models. All but the small-volume solids model report
/// `I = Cm * b * h`; they differ in how the airborne mass concentration `Cm`
/// is obtained (mass balance, PEL limiting, spray-coating tables, or the
/// caller). Small-volume solids handling uses `I = EF * AH * Ys * Sd`.
pub mod constants;
pub mod handling;
pub mod mass_balance;
pub mod outputs;
pub mod pel_limiting;
pub mod processes;
pub mod scenarios;
pub mod spray_coating;
pub mod user_defined;

pub use handling::{HandlingInputs, HandlingParams, SmallVolumeSolidsHandling};
pub use mass_balance::{MassBalance, MassBalanceInputs, MassBalanceParams};
pub use outputs::InhalationOutputs;
pub use pel_limiting::{
    ParticulateInputs, ParticulateParams, PelLimitingParticulates, PelLimitingVapors, PnorInputs,
    PnorParams, RespirablePnorPelLimiting, TotalPnorPelLimiting, VaporInputs, VaporParams,
};
pub use spray_coating::{
    AutomobileOemSprayCoating, AutomobileRefinishSprayCoating, AutomobileSprayCoating,
    AutomobileSprayInputs, AutomobileSprayParams, MistInputs, MistParams, UvRollCoating,
};
pub use user_defined::{UserDefinedInhalation, UserInhalationInputs, UserInhalationParams};
