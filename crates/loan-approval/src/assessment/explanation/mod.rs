mod factors;
mod format;
mod importance;

pub use importance::{ImportanceTable, FEATURE_IMPORTANCE};

use super::domain::ApplicationProfile;
use super::locale::Locale;
use factors::ExplainedFactor;
use serde::{Deserialize, Serialize};

/// Direction a factor pushed the decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    Positive,
    Negative,
    Neutral,
}

impl Impact {
    fn classify(favorable: bool, unfavorable: bool) -> Self {
        if unfavorable {
            Self::Negative
        } else if favorable {
            Self::Positive
        } else {
            Self::Neutral
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
        }
    }
}

/// Value shown next to a factor: a preformatted string or a bare integer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FactorValue {
    Integer(i64),
    Text(String),
}

impl std::fmt::Display for FactorValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FactorValue::Integer(value) => write!(f, "{value}"),
            FactorValue::Text(value) => f.write_str(value),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExplanationFactor {
    pub feature: String,
    pub importance: f64,
    pub value: FactorValue,
    pub impact: Impact,
}

/// Builds the ranked factor list shown alongside a decision.
#[derive(Debug, Clone, Copy)]
pub struct Explainer {
    locale: Locale,
    importance: &'static ImportanceTable,
}

impl Default for Explainer {
    fn default() -> Self {
        Self::new(Locale::default())
    }
}

impl Explainer {
    pub fn new(locale: Locale) -> Self {
        Self::with_importance(locale, ImportanceTable::standard())
    }

    pub fn with_importance(locale: Locale, importance: &'static ImportanceTable) -> Self {
        Self { locale, importance }
    }

    /// Six factors sorted by descending importance.
    ///
    /// `_approved` is part of the contract but does not influence the factors.
    pub fn explain(&self, profile: &ApplicationProfile, _approved: bool) -> Vec<ExplanationFactor> {
        let mut factors: Vec<ExplanationFactor> = ExplainedFactor::ordered()
            .into_iter()
            .map(|factor| {
                let (value, impact) = factor.assess(profile, self.locale);
                ExplanationFactor {
                    feature: factor.label(self.locale).to_string(),
                    importance: self.importance.weight(factor.attribute()),
                    value,
                    impact,
                }
            })
            .collect();

        // stable: equal weights keep build order
        factors.sort_by(|a, b| b.importance.total_cmp(&a.importance));
        factors
    }
}
