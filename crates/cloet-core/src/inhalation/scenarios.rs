use crate::scenario_set;

scenario_set! {
    pub enum HandlingScenario {
        Typical => "typical",
        WorstCase => "worst-case",
        User => "user",
    }
}

scenario_set! {
    pub enum MassBalanceScenario {
        IndoorTypical => "indoor,typical",
        IndoorWorstCase => "indoor,worst-case",
        OutdoorTypical => "outdoor,typical",
        OutdoorWorstCase => "outdoor,worst-case",
        User => "user",
    }
}

scenario_set! {
    /// Models whose only scenario is caller-supplied values.
    pub enum UserScenario {
        User => "user",
    }
}

scenario_set! {
    /// Spray technology and booth airflow, for OEM and refinish coating.
    pub enum SprayBoothScenario {
        ConventionalDowndraft => "conventional,downdraft",
        ConventionalCrossdraft => "conventional,crossdraft",
        HvlpDowndraft => "hvlp,downdraft",
        HvlpCrossdraft => "hvlp,crossdraft",
        User => "user",
    }
}

scenario_set! {
    /// Exposure band, spray technology and booth airflow.
    pub enum AutomobileSprayScenario {
        LowConventionalCrossdraft => "low,conventional,crossdraft",
        HighConventionalCrossdraft => "high,conventional,crossdraft",
        LowConventionalDowndraft => "low,conventional,downdraft",
        HighConventionalDowndraft => "high,conventional,downdraft",
        LowHvlpCrossdraft => "low,hvlp,crossdraft",
        HighHvlpCrossdraft => "high,hvlp,crossdraft",
        LowHvlpDowndraft => "low,hvlp,downdraft",
        HighHvlpDowndraft => "high,hvlp,downdraft",
    }
}

scenario_set! {
    pub enum UvRollScenario {
        LowEnd => "low end of range",
        HighEnd => "high end of range",
        User => "user",
    }
}
