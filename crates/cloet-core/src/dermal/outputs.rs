use crate::family::{DoseSummary, FamilyInputs};
use crate::record::Record;

/// Results shared by every dermal model. `Dexp` is reported last.
#[derive(Debug, Clone, Copy, PartialEq, Record)]
pub struct DermalOutputs {
    #[record(name = "NW")]
    pub nw: u64,
    #[record(name = "LADD")]
    pub ladd: f64,
    #[record(name = "ADD")]
    pub add: f64,
    #[record(name = "APDR")]
    pub apdr: f64,
    #[record(name = "Dexp")]
    pub dexp: f64,
}

impl DermalOutputs {
    pub fn from_dose_rate(dexp: f64, family: &FamilyInputs) -> Self {
        let DoseSummary { nw, ladd, add, apdr } = DoseSummary::from_dose_rate(dexp, family);
        Self {
            nw,
            ladd,
            add,
            apdr,
            dexp,
        }
    }
}
