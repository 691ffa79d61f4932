/// cloet: Command Line Occupational Exposure Tool.
///
/// Re-exports the `cloet-core` engine and adds the reporting layer used by
/// the `cloet` binary and the Python bindings.
pub mod reports;

pub use cloet_core::*;
