//! FILENAME: engine/src/tier.rs
//! PURPOSE: Four-bucket tier classification of a total scenario EIQ load.
//! CONTEXT: Pure, stateless. Thresholds are closed below and open above;
//! the top bucket is unbounded. Non-positive input carries no tier at all.

use serde::{Deserialize, Serialize};

/// Qualitative classification of a total scenario EIQ value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tier {
    /// 0 < v < 200
    Expert,
    /// 200 <= v < 500
    Master,
    /// 500 <= v < 800
    Beginner,
    /// v >= 800
    TooHigh,
}

impl Tier {
    /// Classifies a total EIQ value. Returns `None` for non-positive input
    /// (the report renders that as a placeholder glyph, not a tier).
    pub fn classify(value: f64) -> Option<Tier> {
        if value <= 0.0 {
            None
        } else if value < 200.0 {
            Some(Tier::Expert)
        } else if value < 500.0 {
            Some(Tier::Master)
        } else if value < 800.0 {
            Some(Tier::Beginner)
        } else {
            Some(Tier::TooHigh)
        }
    }

    /// The display label for this tier.
    pub fn label(&self) -> &'static str {
        match self {
            Tier::Expert => "Expert",
            Tier::Master => "Master",
            Tier::Beginner => "Beginner",
            Tier::TooHigh => "Too high for Regenerative agriculture",
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
