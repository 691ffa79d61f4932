use crate::value::{ParameterMap, Value};

pub use cloet_macros::Record;

/// A statically-defined, ordered set of named values: the validated inputs
/// or the computed outputs of a model. Implemented with `#[derive(Record)]`.
pub trait Record {
    /// Every name the record can report, in order.
    fn field_names() -> Vec<&'static str>;

    /// Present entries, in order.
    fn entries(&self) -> Vec<(&'static str, Value)>;

    fn to_map(&self) -> ParameterMap {
        self.entries().into_iter().collect()
    }
}
