mod bands;
mod policy;
mod rules;

pub use policy::{APPROVAL_THRESHOLD, BASE_SCORE};
pub use rules::ScoringRule;

use super::domain::ApplicationProfile;
use super::locale::Locale;
use policy::{is_approved, to_probability};
use serde::{Deserialize, Serialize};

/// Stateless scorer applying the band ladders to a profile.
#[derive(Debug, Clone, Copy, Default)]
pub struct Scorer {
    locale: Locale,
}

impl Scorer {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Every adjustment applied to the base score, in summation order.
    pub fn breakdown(&self, profile: &ApplicationProfile) -> ScoreBreakdown {
        ScoreBreakdown {
            base_score: BASE_SCORE,
            adjustments: rules::score_profile(profile),
        }
    }

    pub fn score(&self, profile: &ApplicationProfile) -> ScoringResult {
        let breakdown = self.breakdown(profile);
        let raw_score = breakdown.raw_score();
        let probability = to_probability(raw_score);
        let approved = is_approved(probability);

        tracing::debug!(raw_score, probability, approved, "loan profile scored");

        ScoringResult {
            approved,
            probability,
            message: self.locale.decision_message(approved).to_string(),
        }
    }
}

/// Contribution of one rule, kept so decisions can be audited.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreAdjustment {
    pub rule: ScoringRule,
    pub delta: f64,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub base_score: f64,
    pub adjustments: Vec<ScoreAdjustment>,
}

impl ScoreBreakdown {
    /// Base plus every delta, summed left to right and left unclamped.
    pub fn raw_score(&self) -> f64 {
        self.adjustments
            .iter()
            .fold(self.base_score, |score, adjustment| score + adjustment.delta)
    }
}

/// Binary decision with its rounded approval probability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringResult {
    pub approved: bool,
    pub probability: f64,
    pub message: String,
}
