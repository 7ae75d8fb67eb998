//! Tunable policy for structure generation.

use serde::{Deserialize, Serialize};

use crate::mol::MAX_RESONANCE;

/// How many bonds a halogen may form when it is the central atom.
///
/// Period-2 fluorine never expands; this only applies from chlorine down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HalogenValence {
    /// Up to four bonds (ClF3, ICl4-), but not BrF5 or IF7.
    Restricted,
    /// Up to seven bonds, one per valence electron.
    #[default]
    Expanded,
}

impl HalogenValence {
    pub fn ceiling(self) -> u8 {
        match self {
            HalogenValence::Restricted => 4,
            HalogenValence::Expanded => 7,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub halogen_valence: HalogenValence,
    /// Upper bound on resonance contributors; clamped to `1..=MAX_RESONANCE`.
    pub max_resonance: usize,
}

impl Config {
    pub fn resonance_cap(&self) -> usize {
        self.max_resonance.clamp(1, MAX_RESONANCE)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            halogen_valence: HalogenValence::default(),
            max_resonance: MAX_RESONANCE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy() {
        let config = Config::default();
        assert_eq!(config.halogen_valence, HalogenValence::Expanded);
        assert_eq!(config.resonance_cap(), MAX_RESONANCE);
    }

    #[test]
    fn resonance_cap_is_clamped() {
        let mut config = Config {
            max_resonance: 0,
            ..Config::default()
        };
        assert_eq!(config.resonance_cap(), 1);
        config.max_resonance = 100;
        assert_eq!(config.resonance_cap(), MAX_RESONANCE);
    }

    #[test]
    fn deserialize_partial() {
        let config: Config = serde_json::from_str(r#"{"halogen_valence":"restricted"}"#).unwrap();
        assert_eq!(config.halogen_valence, HalogenValence::Restricted);
        assert_eq!(config.max_resonance, MAX_RESONANCE);
    }
}
