/// Inhalation numerical constants, scenario tables and bounds.
use crate::checks::Bounds;

// -- Shared breathing parameters --

/// Inhalation rate [m^3/hr].
pub const DEFAULT_B: f64 = 1.25;
pub const B_BOUNDS: Bounds = Bounds::new(0.0, 7.9);

/// Exposure duration [hrs/day].
pub const DEFAULT_H: f64 = 8.0;
pub const H_BOUNDS: Bounds = Bounds::new(0.0, 24.0);

/// Molar volume at 25 C and 1 atm [L/mol].
pub const DEFAULT_VM: f64 = 24.45;

// -- Saturation and mass balance --

/// Converts a mole fraction at vapor pressure `VP` [torr] to ppm.
pub const PPM: f64 = 1_000_000.0;

/// Standard atmospheric pressure [torr].
pub const ATMOSPHERE_TORR: f64 = 760.0;

/// Unit-conversion factor of the mass balance generation term.
pub const MASS_BALANCE_FACTOR: f64 = 170_000.0;

/// Ambient temperature [K].
pub const DEFAULT_T: f64 = 298.0;

/// Outdoor wind speed for the worst-case ventilation rate [ft/min].
pub const DEFAULT_VZ: f64 = 440.0;

/// Outdoor worst-case ventilation: `Q = 26400 * (60 * vz / 5280)^3`.
pub const OUTDOOR_VENTILATION_FACTOR: f64 = 26_400.0;
pub const MINUTES_PER_HOUR: f64 = 60.0;
pub const FEET_PER_MILE: f64 = 5_280.0;

/// Ventilation rate [ft^3/min] and mixing factor for a mass balance scenario.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ventilation {
    pub q: f64,
    pub k: f64,
}

pub const INDOOR_TYPICAL: Ventilation = Ventilation { q: 3000.0, k: 0.5 };
pub const INDOOR_WORST_CASE: Ventilation = Ventilation { q: 500.0, k: 0.1 };
pub const OUTDOOR_TYPICAL: Ventilation = Ventilation {
    q: 237_600.0,
    k: 0.5,
};
pub const OUTDOOR_WORST_CASE_K: f64 = 0.1;

// -- Small volume solids handling --

/// Exposure factors [mg/kg].
pub const TYPICAL_EF: f64 = 0.0477;
pub const WORST_CASE_EF: f64 = 0.161;

/// Amount of solid handled [kg/worker-shift].
pub const DEFAULT_AH: f64 = 1.0;
pub const AH_BOUNDS: Bounds = Bounds::new(0.0, 54.0);

/// Shifts per worker-day.
pub const DEFAULT_SD: f64 = 1.0;
pub const SD_BOUNDS: Bounds = Bounds::new(0.0, 3.0);

// -- PEL limiting [mg/m^3] --

pub const PARTICULATE_KCK: f64 = 15.0;
pub const TOTAL_PNOR_KCK: f64 = 15.0;
pub const RESPIRABLE_PNOR_KCK: f64 = 5.0;
pub const DEFAULT_YPEL: f64 = 1.0;

// -- Spray and roll coating --

/// Solids fraction of the coating used to derive `Ys` from `Ymist`.
pub const DEFAULT_YSF: f64 = 0.25;

/// `KCk` [mg/m^3] by spray technology and booth airflow.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SprayBoothTable {
    pub conventional_downdraft: f64,
    pub conventional_crossdraft: f64,
    pub hvlp_downdraft: f64,
    pub hvlp_crossdraft: f64,
}

pub const SPRAY_BOOTH_KCK: SprayBoothTable = SprayBoothTable {
    conventional_downdraft: 2.3,
    conventional_crossdraft: 15.0,
    hvlp_downdraft: 1.9,
    hvlp_crossdraft: 15.0,
};

pub const OEM_WORKERS_PER_SITE: u32 = 17;
pub const REFINISH_WORKERS_PER_SITE: u32 = 3;
pub const AUTOMOBILE_WORKERS_PER_SITE: u32 = 3;

/// UV roll coating PNOR-TWA range [mg/m^3].
pub const UV_ROLL_LOW_KCK: f64 = 0.04;
pub const UV_ROLL_HIGH_KCK: f64 = 0.26;

// -- User defined --

pub const DEFAULT_USER_YS: f64 = 1.0;

// -- Equations --

pub const HANDLING_EQUATIONS: &str = "\
I    = EF * AH * Ys * Sd
NW   = NWexp * NS
LADD = (I * ED * EY) / (BW * ATc * days_per_year)
ADD  = (I * ED * EY) / (BW * AT * days_per_year)
APDR = I / BW";

pub const MASS_BALANCE_EQUATIONS: &str = "\
Cv   = min((170000 * T * G) / (MW * Q * k), (1000000 * X * VP) / 760)
Cm   = Cv * MW / Vm
I    = Cm * b * h
NW   = NWexp * NS
LADD = (I * ED * EY) / (BW * ATc * days_per_year)
ADD  = (I * ED * EY) / (BW * AT * days_per_year)
APDR = I / BW";

pub const PARTICULATE_EQUATIONS: &str = "\
Cm   = KCk * Ys / Ypel
I    = Cm * b * h
NW   = NWexp * NS
LADD = (I * ED * EY) / (BW * ATc * days_per_year)
ADD  = (I * ED * EY) / (BW * AT * days_per_year)
APDR = I / BW";

pub const VAPOR_EQUATIONS: &str = "\
Cv   = min(Cvk * (VP * Ys / MW) / (VPpel * Ypel / MWpel), (1000000 * X * VP) / 760)
Cm   = Cv * MW / Vm
I    = Cm * b * h
NW   = NWexp * NS
LADD = (I * ED * EY) / (BW * ATc * days_per_year)
ADD  = (I * ED * EY) / (BW * AT * days_per_year)
APDR = I / BW";

pub const SOLIDS_FRACTION_EQUATIONS: &str = "\
Cm   = KCk * Ys
I    = Cm * b * h
NW   = NWexp * NS
LADD = (I * ED * EY) / (BW * ATc * days_per_year)
ADD  = (I * ED * EY) / (BW * AT * days_per_year)
APDR = I / BW";

pub const AUTOMOBILE_EQUATIONS: &str = "\
Cm   = KCk
I    = Cm * b * h
NW   = NWexp * NS
LADD = (I * ED * EY) / (BW * ATc * days_per_year)
ADD  = (I * ED * EY) / (BW * AT * days_per_year)
APDR = I / BW";

pub const USER_EQUATIONS: &str = "\
Cm   = Cv * MW / Vm * Ys
I    = Cm * b * h
NW   = NWexp * NS
LADD = (I * ED * EY) / (BW * ATc * days_per_year)
ADD  = (I * ED * EY) / (BW * AT * days_per_year)
APDR = I / BW";
