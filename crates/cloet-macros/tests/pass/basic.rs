use cloet_core::record::Record;
use cloet_core::value::Value;

#[derive(Debug, Clone, Copy, Record)]
pub struct TestOutputs {
    pub workers: u64,
    pub ladd: f64,
    pub concentration: Option<f64>,
}

fn main() {
    let with = TestOutputs { workers: 3, ladd: 0.5, concentration: Some(2.0) };
    let without = TestOutputs { concentration: None, ..with };

    assert_eq!(TestOutputs::field_names(), vec!["workers", "ladd", "concentration"]);
    assert_eq!(
        with.entries(),
        vec![
            ("workers", Value::Int(3)),
            ("ladd", Value::Float(0.5)),
            ("concentration", Value::Float(2.0)),
        ]
    );
    assert_eq!(without.entries().len(), 2);
    assert_eq!(with.to_map().keys().copied().collect::<Vec<_>>(), vec!["workers", "ladd", "concentration"]);
}
