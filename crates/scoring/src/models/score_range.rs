use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::{Result, ScoringError};

/// Inclusive bounds of a country's credit scoring scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ScoreRange {
    pub min: f64,
    pub max: f64,
}

impl ScoreRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// A range is usable only when `max > min`; anything else would divide by
    /// a zero or negative span during normalization.
    pub fn is_well_formed(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.span() > 0.0
    }
}

/// Country id to scoring range, with an explicit fallback range for ids that
/// are not registered.
///
/// Lookups are case-sensitive exact matches: `"usa"` and `" USA"` are not
/// `"USA"` and resolve to the default range.
#[derive(Debug, Clone)]
pub struct RangeTable {
    ranges: HashMap<String, ScoreRange>,
    default: ScoreRange,
}

impl RangeTable {
    pub fn new<I, K>(ranges: I, default: ScoreRange) -> Self
    where
        I: IntoIterator<Item = (K, ScoreRange)>,
        K: Into<String>,
    {
        Self {
            ranges: ranges.into_iter().map(|(k, r)| (k.into(), r)).collect(),
            default,
        }
    }

    /// The placeholder ranges shipped with the service. They are illustrative
    /// values, not a certified scoring model.
    pub fn builtin() -> Self {
        Self::new(
            [
                ("USA", ScoreRange::new(300.0, 850.0)),
                ("UK", ScoreRange::new(0.0, 1000.0)),
                ("Germany", ScoreRange::new(0.0, 1000.0)),
                ("Japan", ScoreRange::new(100.0, 900.0)),
                ("Australia", ScoreRange::new(0.0, 1200.0)),
            ],
            ScoreRange::new(0.0, 1000.0),
        )
    }

    pub fn lookup(&self, country: &str) -> ScoreRange {
        self.ranges.get(country).copied().unwrap_or(self.default)
    }

    pub fn default_range(&self) -> ScoreRange {
        self.default
    }

    /// Registered country ids, sorted.
    pub fn countries(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.ranges.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    /// Checks every range, the default included, once at startup.
    pub fn validate(&self) -> Result<()> {
        if !self.default.is_well_formed() {
            return Err(ScoringError::Configuration(format!(
                "default range [{}, {}] must satisfy max > min",
                self.default.min, self.default.max
            )));
        }

        for country in self.countries() {
            let range = self.lookup(country);
            if !range.is_well_formed() {
                return Err(ScoringError::Configuration(format!(
                    "range for '{}' [{}, {}] must satisfy max > min",
                    country, range.min, range.max
                )));
            }
        }

        Ok(())
    }
}
