//! Display units for every parameter and result name the catalog reports.

/// `(name, unit)` pairs. Units are documentation only; formulas assume them.
pub const UNITS: &[(&str, &str)] = &[
    // family
    ("ED", "days/site-yr"),
    ("NWexp", "workers/site"),
    ("NS", "sites"),
    ("EY", "years"),
    ("BW", "kg"),
    ("ATc", "years"),
    ("AT", "years"),
    // dermal
    ("S", "cm^2"),
    ("Qu", "mg/cm^2-event"),
    ("SQu", "mg/event"),
    ("Yderm", "dimensionless"),
    ("FT", "events/worker-day"),
    // inhalation
    ("EF", "mg/kg"),
    ("AH", "kg/worker-shift"),
    ("Ys", "dimensionless"),
    ("Sd", "shifts/worker-day"),
    ("Cv", "ppm"),
    ("Cm", "mg/m^3"),
    ("T", "K"),
    ("G", "g/s"),
    ("MW", "g/mol"),
    ("Q", "ft^3/min"),
    ("k", "dimensionless"),
    ("X", "dimensionless"),
    ("VP", "torr"),
    ("Vm", "L/mol"),
    ("b", "m^3/hr"),
    ("h", "hrs/day"),
    ("KCk", "mg/m^3"),
    ("Ypel", "dimensionless"),
    ("Cvk", "ppm"),
    ("VPpel", "torr"),
    ("MWpel", "g/mol"),
    ("Ymist", "dimensionless"),
    ("Ysf", "dimensionless"),
    // results
    ("Dexp", "mg/day"),
    ("I", "mg/day"),
    ("NW", "workers"),
    ("LADD", "mg/kg-day"),
    ("ADD", "mg/kg-day"),
    ("APDR", "mg/kg-day"),
];

pub fn try_unit_of(name: &str) -> Option<&'static str> {
    UNITS
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, unit)| *unit)
}

/// Unit of a known name.
///
/// # Panics
///
/// On a name the catalog never reports; that is a programming error.
pub fn unit_of(name: &str) -> &'static str {
    match try_unit_of(name) {
        Some(unit) => unit,
        None => panic!("no unit registered for '{name}'"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_units() {
        assert_eq!(unit_of("LADD"), "mg/kg-day");
        assert_eq!(unit_of("Qu"), "mg/cm^2-event");
        assert_eq!(try_unit_of("vz"), None);
    }

    #[test]
    #[should_panic(expected = "no unit registered")]
    fn unknown_unit_panics() {
        unit_of("PDR");
    }

    #[test]
    fn names_are_unique() {
        for (i, (name, _)) in UNITS.iter().enumerate() {
            assert!(
                UNITS[i + 1..].iter().all(|(other, _)| other != name),
                "duplicate unit entry {name}"
            );
        }
    }
}
