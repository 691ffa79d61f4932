use crate::error::ExposureError;
use crate::exposures::{potential_dose_rate, DoseRateTerms};
use crate::family::{DoseSummary, FamilyInputs};
use crate::record::Record;
use crate::route::Route;

/// Results shared by every inhalation model.
///
/// Airborne concentrations come first when the model derives them; `I` is
/// reported last.
#[derive(Debug, Clone, Copy, PartialEq, Record)]
pub struct InhalationOutputs {
    #[record(name = "Cv")]
    pub cv: Option<f64>,
    #[record(name = "Cm")]
    pub cm: Option<f64>,
    #[record(name = "NW")]
    pub nw: u64,
    #[record(name = "LADD")]
    pub ladd: f64,
    #[record(name = "ADD")]
    pub add: f64,
    #[record(name = "APDR")]
    pub apdr: f64,
    #[record(name = "I")]
    pub i: f64,
}

impl InhalationOutputs {
    pub fn from_dose_rate(i: f64, family: &FamilyInputs) -> Self {
        let DoseSummary { nw, ladd, add, apdr } = DoseSummary::from_dose_rate(i, family);
        Self {
            cv: None,
            cm: None,
            nw,
            ladd,
            add,
            apdr,
            i,
        }
    }

    pub fn with_cm(mut self, cm: f64) -> Self {
        self.cm = Some(cm);
        self
    }

    pub fn with_cv(mut self, cv: f64) -> Self {
        self.cv = Some(cv);
        self
    }
}

/// `I = Cm * b * h`, with `Cm` reported among the outputs.
pub fn airborne_outputs(
    cm: f64,
    b: f64,
    h: f64,
    family: &FamilyInputs,
) -> Result<InhalationOutputs, ExposureError> {
    let i = potential_dose_rate(Route::Inhalation, &DoseRateTerms::Airborne { cm, b, h })?;
    Ok(InhalationOutputs::from_dose_rate(i, family).with_cm(cm))
}
