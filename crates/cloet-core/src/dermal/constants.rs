/// Dermal scenario tables and bounds.
use crate::checks::Bounds;

// -- Surface areas [cm^2] --

/// One hand, palm side.
pub const ONE_HAND_AREA: f64 = 535.0;

/// Two hands, palm side.
pub const TWO_HAND_AREA: f64 = 1070.0;

// -- Quantity remaining on skin --

/// Low/high `Qu` presets [mg/cm^2-event].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuantityTable {
    pub low: f64,
    pub high: f64,
}

/// Contact with liquid.
pub const CONTACT_QU: QuantityTable = QuantityTable { low: 0.7, high: 2.1 };

/// Immersion in liquid.
pub const IMMERSION_QU: QuantityTable = QuantityTable {
    low: 1.3,
    high: 10.3,
};

/// Total solids on skin, contact with solids [mg/event].
pub const SOLIDS_SQU: f64 = 3100.0;

/// Total solids on skin, contact with container surfaces [mg/event].
pub const CONTAINER_SURFACE_SQU: f64 = 1100.0;

/// Frequency of events [events/worker-day].
pub const DEFAULT_FT: f64 = 1.0;

// -- Bounds --

pub const YDERM_BOUNDS: Bounds = Bounds::UNIT;
pub const FT_BOUNDS: Bounds = Bounds::NON_NEGATIVE;

// -- Equations --

pub const LIQUID_EQUATIONS: &str = "\
Dexp = S * Qu * Yderm * FT
NW   = NWexp * NS
LADD = (Dexp * ED * EY) / (BW * ATc * days_per_year)
ADD  = (Dexp * ED * EY) / (BW * AT * days_per_year)
APDR = Dexp / BW";

pub const SOLIDS_EQUATIONS: &str = "\
Dexp = SQu * Yderm * FT
NW   = NWexp * NS
LADD = (Dexp * ED * EY) / (BW * ATc * days_per_year)
ADD  = (Dexp * ED * EY) / (BW * AT * days_per_year)
APDR = Dexp / BW";
