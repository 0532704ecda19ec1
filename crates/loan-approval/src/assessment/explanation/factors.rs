use super::super::domain::{ApplicationProfile, Attribute};
use super::super::locale::Locale;
use super::format;
use super::{FactorValue, Impact};

/// Attributes surfaced to the applicant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ExplainedFactor {
    LoanToIncomeRatio,
    CreditScore,
    AnnualIncome,
    PriorDefault,
    InterestRate,
    CreditHistory,
}

impl ExplainedFactor {
    /// Build order; ranking ties keep this order.
    pub(crate) const fn ordered() -> [Self; 6] {
        [
            Self::LoanToIncomeRatio,
            Self::CreditScore,
            Self::AnnualIncome,
            Self::PriorDefault,
            Self::InterestRate,
            Self::CreditHistory,
        ]
    }

    pub(crate) const fn attribute(self) -> Attribute {
        match self {
            Self::LoanToIncomeRatio => Attribute::LoanToIncomeRatio,
            Self::CreditScore => Attribute::CreditScore,
            Self::AnnualIncome => Attribute::AnnualIncome,
            Self::PriorDefault => Attribute::PriorDefault,
            Self::InterestRate => Attribute::LoanInterestRate,
            Self::CreditHistory => Attribute::CreditHistoryLength,
        }
    }

    pub(crate) const fn label(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Self::LoanToIncomeRatio, Locale::French) => "Ratio Prêt/Revenu",
            (Self::LoanToIncomeRatio, Locale::English) => "Loan-to-Income Ratio",
            (Self::CreditScore, Locale::French) => "Score de Crédit",
            (Self::CreditScore, Locale::English) => "Credit Score",
            (Self::AnnualIncome, Locale::French) => "Revenu Annuel",
            (Self::AnnualIncome, Locale::English) => "Annual Income",
            (Self::PriorDefault, Locale::French) => "Défauts Antérieurs",
            (Self::PriorDefault, Locale::English) => "Prior Defaults",
            (Self::InterestRate, Locale::French) => "Taux d'Intérêt",
            (Self::InterestRate, Locale::English) => "Interest Rate",
            (Self::CreditHistory, Locale::French) => "Historique de Crédit",
            (Self::CreditHistory, Locale::English) => "Credit History",
        }
    }

    /// Display value and impact. Thresholds are independent of the scoring bands.
    pub(crate) fn assess(self, profile: &ApplicationProfile, locale: Locale) -> (FactorValue, Impact) {
        match self {
            Self::LoanToIncomeRatio => {
                let ratio = profile.loan_to_income_ratio;
                (
                    FactorValue::Text(format::ratio_percent(ratio)),
                    Impact::classify(ratio < 0.15, ratio > 0.30),
                )
            }
            Self::CreditScore => {
                let score = profile.credit_score;
                (
                    FactorValue::Integer(score),
                    Impact::classify(score >= 700, score < 600),
                )
            }
            Self::AnnualIncome => {
                let income = profile.annual_income;
                (
                    FactorValue::Text(format::currency(income, locale)),
                    Impact::classify(income >= 80_000.0, income < 40_000.0),
                )
            }
            Self::PriorDefault => {
                let defaulted = profile.has_prior_default;
                (
                    FactorValue::Text(locale.yes_no(defaulted).to_string()),
                    Impact::classify(!defaulted, defaulted),
                )
            }
            Self::InterestRate => {
                let rate = profile.loan_interest_rate_percent;
                (
                    FactorValue::Text(format::plain_percent(rate)),
                    Impact::classify(rate < 10.0, rate > 15.0),
                )
            }
            Self::CreditHistory => {
                let years = profile.credit_history_length_years;
                (
                    FactorValue::Text(format!("{years} {}", locale.years_suffix())),
                    Impact::classify(years >= 5, years < 2),
                )
            }
        }
    }
}
