use cloet_core::record::Record;

#[derive(Record)]
pub struct Broken {
    pub label: String,
}

fn main() {
    let _ = Broken { label: String::new() };
}
