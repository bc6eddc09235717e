use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Default minimum composite score for an accepted match.
pub const DEFAULT_THRESHOLD: f64 = 70.0;
/// Default weight of the name sub-score. Name match is the primary signal.
pub const DEFAULT_NAME_WEIGHT: f64 = 0.5;
/// Default weight of the spec sub-score. Specs corroborate the name.
pub const DEFAULT_SPEC_WEIGHT: f64 = 0.3;
/// Default weight of the price sub-score. Price is a weak tiebreaker.
pub const DEFAULT_PRICE_WEIGHT: f64 = 0.2;
/// Default bar a label pairing must clear (strictly) for value comparison.
pub const DEFAULT_LABEL_THRESHOLD: f64 = 80.0;

const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Tunable parameters of the reconciliation engine.
///
/// Surfaced as explicit configuration rather than embedded literals so the
/// engine can be tested across parameterizations and tuned per deployment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Minimum composite score ∈ [0, 100] for a candidate to be accepted.
    pub threshold: f64,
    pub name_weight: f64,
    pub spec_weight: f64,
    pub price_weight: f64,
    /// Label similarity ∈ [0, 100] a spec-label pairing must exceed before
    /// the values are compared at all.
    pub label_threshold: f64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            name_weight: DEFAULT_NAME_WEIGHT,
            spec_weight: DEFAULT_SPEC_WEIGHT,
            price_weight: DEFAULT_PRICE_WEIGHT,
            label_threshold: DEFAULT_LABEL_THRESHOLD,
        }
    }
}

impl MatchConfig {
    /// Validates the configuration.
    ///
    /// Weights must be finite, non-negative, and sum to 1 (within a small
    /// tolerance) so the composite score stays in [0, 100] and is monotone in
    /// each sub-score. Thresholds must lie in [0, 100].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let weights = [
            ("name_weight", self.name_weight),
            ("spec_weight", self.spec_weight),
            ("price_weight", self.price_weight),
        ];
        for (field, value) in weights {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Validation(format!(
                    "{field} must be finite and non-negative, got {value}"
                )));
            }
        }

        let sum = self.name_weight + self.spec_weight + self.price_weight;
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(ConfigError::Validation(format!(
                "weights must sum to 1.0, got {sum}"
            )));
        }

        for (field, value) in [
            ("threshold", self.threshold),
            ("label_threshold", self.label_threshold),
        ] {
            if !value.is_finite() || !(0.0..=100.0).contains(&value) {
                return Err(ConfigError::Validation(format!(
                    "{field} must be in [0, 100], got {value}"
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(MatchConfig::default().validate().is_ok());
    }

    #[test]
    fn default_weights_match_design_constants() {
        let config = MatchConfig::default();
        assert!((config.name_weight - 0.5).abs() < f64::EPSILON);
        assert!((config.spec_weight - 0.3).abs() < f64::EPSILON);
        assert!((config.price_weight - 0.2).abs() < f64::EPSILON);
        assert!((config.threshold - 70.0).abs() < f64::EPSILON);
        assert!((config.label_threshold - 80.0).abs() < f64::EPSILON);
    }

    #[test]
    fn negative_weight_rejected() {
        let config = MatchConfig {
            name_weight: -0.1,
            spec_weight: 0.9,
            price_weight: 0.2,
            ..MatchConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation(msg)) if msg.contains("name_weight")
        ));
    }

    #[test]
    fn weights_not_summing_to_one_rejected() {
        let config = MatchConfig {
            name_weight: 0.5,
            spec_weight: 0.5,
            price_weight: 0.5,
            ..MatchConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation(msg)) if msg.contains("sum to 1.0")
        ));
    }

    #[test]
    fn nan_weight_rejected() {
        let config = MatchConfig {
            spec_weight: f64::NAN,
            ..MatchConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn threshold_above_100_rejected() {
        let config = MatchConfig {
            threshold: 100.5,
            ..MatchConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation(msg)) if msg.contains("threshold")
        ));
    }

    #[test]
    fn label_threshold_below_zero_rejected() {
        let config = MatchConfig {
            label_threshold: -1.0,
            ..MatchConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn alternate_valid_weighting_accepted() {
        let config = MatchConfig {
            name_weight: 0.7,
            spec_weight: 0.2,
            price_weight: 0.1,
            ..MatchConfig::default()
        };
        assert!(config.validate().is_ok());
    }
}
