use cloet_core::record::Record;
use cloet_core::value::Value;

#[derive(Debug, Clone, Copy, Record)]
pub struct Shared {
    #[record(name = "NWexp")]
    pub nwexp: u32,
}

#[derive(Debug, Clone, Copy, Record)]
pub struct TestInputs {
    #[record(flatten)]
    pub shared: Shared,
    #[record(name = "Yderm")]
    pub yderm: f64,
}

fn main() {
    let inputs = TestInputs { shared: Shared { nwexp: 4 }, yderm: 0.1 };
    assert_eq!(TestInputs::field_names(), vec!["NWexp", "Yderm"]);
    assert_eq!(
        inputs.entries(),
        vec![("NWexp", Value::Int(4)), ("Yderm", Value::Float(0.1))]
    );
}
