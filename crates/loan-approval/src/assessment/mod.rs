//! Loan application scoring and decision explanation.
//!
//! A submitted [`ApplicationProfile`] flows one way: the [`Scorer`] sums twelve band adjustments
//! onto a base score and publishes a rounded probability with its decision, then the
//! [`Explainer`] ranks six display factors by static importance. Both steps are pure, so one
//! engine is shared by every request without locking.

pub mod domain;
pub mod explanation;
pub mod intake;
pub mod locale;
pub mod router;
pub mod scoring;

#[cfg(test)]
mod tests;

pub use domain::{
    ApplicationProfile, Attribute, Education, Gender, HomeOwnership, LoanIntent, UnknownLabel,
    REQUIRED_FIELDS,
};
pub use explanation::{
    Explainer, ExplanationFactor, FactorValue, Impact, ImportanceTable, FEATURE_IMPORTANCE,
};
pub use intake::{profile_from_json, IntakeError};
pub use locale::Locale;
pub use router::assessment_router;
pub use scoring::{ScoreAdjustment, ScoreBreakdown, Scorer, ScoringResult, ScoringRule};

use serde::{Deserialize, Serialize};

/// Scorer and explainer evaluated in sequence for each application.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoanAssessmentEngine {
    scorer: Scorer,
    explainer: Explainer,
}

impl LoanAssessmentEngine {
    pub fn new(locale: Locale) -> Self {
        Self {
            scorer: Scorer::new(locale),
            explainer: Explainer::new(locale),
        }
    }

    pub fn locale(&self) -> Locale {
        self.scorer.locale()
    }

    pub fn scorer(&self) -> &Scorer {
        &self.scorer
    }

    pub fn assess(&self, profile: &ApplicationProfile) -> LoanAssessment {
        let ScoringResult {
            approved,
            probability,
            message,
        } = self.scorer.score(profile);
        let factors = self.explainer.explain(profile, approved);

        LoanAssessment {
            approved,
            probability,
            message,
            factors,
        }
    }
}

/// Response record: the scoring result with its ranked explanation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanAssessment {
    pub approved: bool,
    pub probability: f64,
    pub message: String,
    pub factors: Vec<ExplanationFactor>,
}

impl LoanAssessment {
    pub fn summary(&self) -> String {
        format!(
            "{} ({:.0}% approval probability)",
            self.message,
            self.probability * 100.0
        )
    }
}
