/// Scenario keys: closed, ordered sets of named parameter presets.
use crate::error::ExposureError;

/// A model's closed set of scenario keys.
pub trait ScenarioKey: Copy + Eq + Sized + 'static {
    /// Every key, in the order the model lists them.
    const ALL: &'static [Self];

    fn as_str(&self) -> &'static str;

    fn keys() -> Vec<&'static str> {
        Self::ALL.iter().map(|s| s.as_str()).collect()
    }

    /// Looks up a key after normalizing case and comma spacing, so
    /// `"Indoor, Typical"` finds `"indoor,typical"`.
    fn parse(raw: &str) -> Result<Self, ExposureError> {
        let wanted = normalize(raw);
        Self::ALL
            .iter()
            .copied()
            .find(|s| s.as_str() == wanted)
            .ok_or_else(|| ExposureError::Scenario {
                value: raw.to_string(),
                valid: Self::keys(),
            })
    }
}

/// Lower-cases, trims each comma-separated part and collapses inner runs
/// of whitespace to a single space.
pub fn normalize(raw: &str) -> String {
    raw.to_lowercase()
        .split(',')
        .map(|part| part.split_whitespace().collect::<Vec<_>>().join(" "))
        .collect::<Vec<_>>()
        .join(",")
}

/// Defines a scenario enum with its key strings and a `ScenarioKey` impl.
///
/// ```ignore
/// scenario_set! {
///     pub enum LiquidScenario {
///         Low => "low",
///         High => "high",
///     }
/// }
/// ```
#[macro_export]
macro_rules! scenario_set {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $($variant:ident => $key:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $($variant),+
        }

        impl $crate::scenario::ScenarioKey for $name {
            const ALL: &'static [Self] = &[$($name::$variant),+];

            fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $key),+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::scenario::ScenarioKey::as_str(self))
            }
        }
    };
}
