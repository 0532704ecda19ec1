use super::super::domain::{ApplicationProfile, Attribute, Education, HomeOwnership, LoanIntent};
use super::bands;
use super::ScoreAdjustment;
use serde::{Deserialize, Serialize};

/// The twelve scoring rules, in the order their deltas are summed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringRule {
    LoanPercentIncome,
    AnnualIncome,
    CreditScore,
    InterestRate,
    LoanAmountToIncome,
    Age,
    CreditHistory,
    EmploymentExperience,
    PriorDefault,
    HomeOwnership,
    LoanIntent,
    Education,
}

impl ScoringRule {
    pub const fn ordered() -> [Self; 12] {
        [
            Self::LoanPercentIncome,
            Self::AnnualIncome,
            Self::CreditScore,
            Self::InterestRate,
            Self::LoanAmountToIncome,
            Self::Age,
            Self::CreditHistory,
            Self::EmploymentExperience,
            Self::PriorDefault,
            Self::HomeOwnership,
            Self::LoanIntent,
            Self::Education,
        ]
    }

    /// Profile attribute the rule reads. The recomputed ratio is attributed to the loan amount.
    pub const fn attribute(self) -> Attribute {
        match self {
            Self::LoanPercentIncome => Attribute::LoanToIncomeRatio,
            Self::AnnualIncome => Attribute::AnnualIncome,
            Self::CreditScore => Attribute::CreditScore,
            Self::InterestRate => Attribute::LoanInterestRate,
            Self::LoanAmountToIncome => Attribute::LoanAmount,
            Self::Age => Attribute::Age,
            Self::CreditHistory => Attribute::CreditHistoryLength,
            Self::EmploymentExperience => Attribute::EmploymentExperience,
            Self::PriorDefault => Attribute::PriorDefault,
            Self::HomeOwnership => Attribute::HomeOwnership,
            Self::LoanIntent => Attribute::LoanIntent,
            Self::Education => Attribute::Education,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::LoanPercentIncome => "Loan percent income",
            Self::AnnualIncome => "Annual income",
            Self::CreditScore => "Credit score",
            Self::InterestRate => "Interest rate",
            Self::LoanAmountToIncome => "Loan amount / income",
            Self::Age => "Age",
            Self::CreditHistory => "Credit history",
            Self::EmploymentExperience => "Employment experience",
            Self::PriorDefault => "Prior default",
            Self::HomeOwnership => "Home ownership",
            Self::LoanIntent => "Loan intent",
            Self::Education => "Education",
        }
    }

    fn evaluate(self, profile: &ApplicationProfile) -> ScoreAdjustment {
        let (delta, notes) = match self {
            Self::LoanPercentIncome => {
                let ratio = profile.loan_to_income_ratio;
                (
                    bands::LOAN_PERCENT_INCOME.delta(ratio),
                    format!("supplied ratio {ratio:.2}"),
                )
            }
            Self::AnnualIncome => {
                let income = profile.annual_income;
                (
                    bands::ANNUAL_INCOME.delta(income),
                    format!("income {income:.0}"),
                )
            }
            Self::CreditScore => {
                let score = profile.credit_score;
                (
                    bands::CREDIT_SCORE.delta(score as f64),
                    format!("credit score {score}"),
                )
            }
            Self::InterestRate => {
                let rate = profile.loan_interest_rate_percent;
                (
                    bands::INTEREST_RATE.delta(rate),
                    format!("interest rate {rate}%"),
                )
            }
            Self::LoanAmountToIncome => {
                let ratio = profile.recomputed_loan_to_income();
                (
                    bands::LOAN_AMOUNT_TO_INCOME.delta(ratio),
                    format!("recomputed ratio {ratio:.4}"),
                )
            }
            Self::Age => {
                let age = profile.age;
                (bands::AGE.delta(age as f64), format!("age {age}"))
            }
            Self::CreditHistory => {
                let years = profile.credit_history_length_years;
                (
                    bands::CREDIT_HISTORY.delta(years as f64),
                    format!("{years} year(s) of credit history"),
                )
            }
            Self::EmploymentExperience => {
                let years = profile.employment_experience_years;
                (
                    bands::EMPLOYMENT_EXPERIENCE.delta(years as f64),
                    format!("{years} year(s) of employment"),
                )
            }
            Self::PriorDefault => {
                if profile.has_prior_default {
                    (-0.25, "prior default on file".to_string())
                } else {
                    (0.05, "no prior default".to_string())
                }
            }
            Self::HomeOwnership => {
                let delta = match profile.home_ownership {
                    HomeOwnership::Own => 0.04,
                    HomeOwnership::Mortgage => 0.02,
                    HomeOwnership::Rent => -0.01,
                    HomeOwnership::Other => 0.0,
                };
                (delta, format!("home ownership {}", profile.home_ownership))
            }
            Self::LoanIntent => {
                let delta = match profile.loan_intent {
                    LoanIntent::Education | LoanIntent::HomeImprovement => 0.02,
                    LoanIntent::Venture => -0.02,
                    LoanIntent::DebtConsolidation | LoanIntent::Medical | LoanIntent::Personal => {
                        0.0
                    }
                };
                (delta, format!("loan intent {}", profile.loan_intent))
            }
            Self::Education => {
                let delta = match profile.education {
                    Education::Doctorate | Education::Master => 0.02,
                    Education::Bachelor => 0.01,
                    Education::HighSchool | Education::Associate => 0.0,
                };
                (delta, format!("education {}", profile.education))
            }
        };

        ScoreAdjustment {
            rule: self,
            delta,
            notes,
        }
    }
}

pub(crate) fn score_profile(profile: &ApplicationProfile) -> Vec<ScoreAdjustment> {
    ScoringRule::ordered()
        .into_iter()
        .map(|rule| rule.evaluate(profile))
        .collect()
}
