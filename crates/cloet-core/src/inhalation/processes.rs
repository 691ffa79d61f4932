/// Airborne concentration formulas.
///
/// Pure functions; arguments follow the reference parameter names.
use super::constants::{
    ATMOSPHERE_TORR, FEET_PER_MILE, MASS_BALANCE_FACTOR, MINUTES_PER_HOUR,
    OUTDOOR_VENTILATION_FACTOR, PPM,
};

/// Saturation concentration [ppm] of a component with mole fraction `x`
/// and vapor pressure `vp` [torr].
pub fn saturation_cv(x: f64, vp: f64) -> f64 {
    PPM * x * vp / ATMOSPHERE_TORR
}

/// Mass balance volumetric concentration [ppm], capped at saturation.
///
/// - `t`: temperature [K]
/// - `g`: vapor generation rate [g/s]
/// - `mw`: molecular weight [g/mol]
/// - `q`: ventilation rate [ft^3/min]
/// - `k`: mixing factor [-]
pub fn mass_balance_cv(t: f64, g: f64, mw: f64, q: f64, k: f64, x: f64, vp: f64) -> f64 {
    let generated = (MASS_BALANCE_FACTOR * t * g) / (mw * q * k);
    generated.min(saturation_cv(x, vp))
}

/// Volumetric concentration [ppm] limited by a vapor PEL, capped at saturation.
#[allow(clippy::too_many_arguments)]
pub fn vapor_pel_cv(
    cvk: f64,
    vp: f64,
    ys: f64,
    mw: f64,
    vp_pel: f64,
    y_pel: f64,
    mw_pel: f64,
    x: f64,
) -> f64 {
    let limited = cvk * (vp * ys / mw) / (vp_pel * y_pel / mw_pel);
    limited.min(saturation_cv(x, vp))
}

/// Mass concentration [mg/m^3] from a volumetric concentration [ppm].
pub fn mass_concentration(cv: f64, mw: f64, vm: f64) -> f64 {
    cv * mw / vm
}

/// Outdoor worst-case ventilation rate [ft^3/min] for wind speed `vz` [ft/min].
pub fn outdoor_worst_case_ventilation(vz: f64) -> f64 {
    OUTDOOR_VENTILATION_FACTOR * (MINUTES_PER_HOUR * vz / FEET_PER_MILE).powf(3.0)
}

/// Solids fraction of a mist, `min(Ymist / Ysf, 1)`.
pub fn solids_fraction(ymist: f64, ysf: f64) -> f64 {
    (ymist / ysf).min(1.0)
}
