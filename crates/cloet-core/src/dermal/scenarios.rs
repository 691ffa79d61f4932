use crate::scenario_set;

scenario_set! {
    /// Scenarios of the liquid contact and immersion models.
    pub enum LiquidScenario {
        Low => "low",
        High => "high",
        User => "user",
    }
}

scenario_set! {
    /// Scenarios of the solids and container surface models.
    pub enum SolidsScenario {
        High => "high",
        User => "user",
    }
}
