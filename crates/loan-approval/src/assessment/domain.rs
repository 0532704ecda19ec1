use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Applicant gender as collected by the intake form. Not scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Female,
    Male,
}

impl Gender {
    pub const fn ordered() -> [Self; 2] {
        [Self::Female, Self::Male]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Female => "female",
            Self::Male => "male",
        }
    }
}

/// Highest completed education level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Education {
    #[serde(rename = "High School")]
    HighSchool,
    Associate,
    Bachelor,
    Master,
    Doctorate,
}

impl Education {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::HighSchool,
            Self::Associate,
            Self::Bachelor,
            Self::Master,
            Self::Doctorate,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::HighSchool => "High School",
            Self::Associate => "Associate",
            Self::Bachelor => "Bachelor",
            Self::Master => "Master",
            Self::Doctorate => "Doctorate",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HomeOwnership {
    Mortgage,
    Own,
    Rent,
    Other,
}

impl HomeOwnership {
    pub const fn ordered() -> [Self; 4] {
        [Self::Mortgage, Self::Own, Self::Rent, Self::Other]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Mortgage => "MORTGAGE",
            Self::Own => "OWN",
            Self::Rent => "RENT",
            Self::Other => "OTHER",
        }
    }
}

/// Declared purpose of the loan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LoanIntent {
    DebtConsolidation,
    Education,
    HomeImprovement,
    Medical,
    Personal,
    Venture,
}

impl LoanIntent {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::DebtConsolidation,
            Self::Education,
            Self::HomeImprovement,
            Self::Medical,
            Self::Personal,
            Self::Venture,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::DebtConsolidation => "DEBTCONSOLIDATION",
            Self::Education => "EDUCATION",
            Self::HomeImprovement => "HOMEIMPROVEMENT",
            Self::Medical => "MEDICAL",
            Self::Personal => "PERSONAL",
            Self::Venture => "VENTURE",
        }
    }
}

/// Wire labels accepted for the prior-default answer.
pub const PRIOR_DEFAULT_OPTIONS: [&str; 2] = ["No", "Yes"];

/// Error raised when a label does not name a known variant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} '{value}' (expected one of: {expected})")]
pub struct UnknownLabel {
    pub kind: &'static str,
    pub value: String,
    pub expected: String,
}

fn parse_label<T: Copy>(
    kind: &'static str,
    raw: &str,
    variants: &[T],
    label: fn(T) -> &'static str,
) -> Result<T, UnknownLabel> {
    let trimmed = raw.trim();
    variants
        .iter()
        .copied()
        .find(|variant| label(*variant).eq_ignore_ascii_case(trimmed))
        .ok_or_else(|| UnknownLabel {
            kind,
            value: raw.to_string(),
            expected: variants
                .iter()
                .map(|variant| label(*variant))
                .collect::<Vec<_>>()
                .join(", "),
        })
}

impl FromStr for Gender {
    type Err = UnknownLabel;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        parse_label("gender", raw, &Self::ordered(), Self::label)
    }
}

impl FromStr for Education {
    type Err = UnknownLabel;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        parse_label("education level", raw, &Self::ordered(), Self::label)
    }
}

impl FromStr for HomeOwnership {
    type Err = UnknownLabel;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        parse_label("home ownership", raw, &Self::ordered(), Self::label)
    }
}

impl FromStr for LoanIntent {
    type Err = UnknownLabel;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        parse_label("loan intent", raw, &Self::ordered(), Self::label)
    }
}

macro_rules! display_label {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        })*
    };
}

display_label!(Gender, Education, HomeOwnership, LoanIntent);

/// Parse a `Yes`/`No` answer into a boolean.
pub fn parse_yes_no(raw: &str) -> Result<bool, UnknownLabel> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "yes" => Ok(true),
        "no" => Ok(false),
        _ => Err(UnknownLabel {
            kind: "prior default answer",
            value: raw.to_string(),
            expected: PRIOR_DEFAULT_OPTIONS.join(", "),
        }),
    }
}

/// Serde adapter for booleans carried as `"Yes"` / `"No"` on the wire.
pub(crate) mod yes_no {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &bool, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(if *value { "Yes" } else { "No" })
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<bool, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        super::parse_yes_no(&raw).map_err(serde::de::Error::custom)
    }
}

/// Serde adapter for whole-number fields. Out-of-range values are kept for the band ladders to
/// score; integral floats such as `30.0` are accepted as well.
pub(crate) mod whole_number {
    use std::fmt;

    use serde::de::{self, Visitor};
    use serde::{Deserializer, Serializer};

    pub fn serialize<S>(value: &i64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i64(*value)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<i64, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(WholeNumberVisitor)
    }

    struct WholeNumberVisitor;

    impl<'de> Visitor<'de> for WholeNumberVisitor {
        type Value = i64;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a whole number")
        }

        fn visit_i64<E: de::Error>(self, value: i64) -> Result<i64, E> {
            Ok(value)
        }

        fn visit_u64<E: de::Error>(self, value: u64) -> Result<i64, E> {
            i64::try_from(value)
                .map_err(|_| E::invalid_value(de::Unexpected::Unsigned(value), &self))
        }

        fn visit_f64<E: de::Error>(self, value: f64) -> Result<i64, E> {
            // i64::MAX as f64 rounds up to 2^63, so the upper bound is exclusive
            if value.is_finite()
                && value.fract() == 0.0
                && value >= i64::MIN as f64
                && value < i64::MAX as f64
            {
                Ok(value as i64)
            } else {
                Err(E::invalid_value(de::Unexpected::Float(value), &self))
            }
        }
    }
}

/// Applicant financial profile submitted for a single assessment.
///
/// Field names on the wire follow the dataset the heuristic was tuned on, so the JSON body keeps
/// keys such as `person_income` and `loan_percent_income`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationProfile {
    #[serde(rename = "person_age", with = "whole_number")]
    pub age: i64,
    #[serde(rename = "person_gender")]
    pub gender: Gender,
    #[serde(rename = "person_education")]
    pub education: Education,
    #[serde(rename = "person_income")]
    pub annual_income: f64,
    #[serde(rename = "person_emp_exp", with = "whole_number")]
    pub employment_experience_years: i64,
    #[serde(rename = "person_home_ownership")]
    pub home_ownership: HomeOwnership,
    #[serde(rename = "loan_amnt")]
    pub loan_amount: f64,
    pub loan_intent: LoanIntent,
    #[serde(rename = "loan_int_rate")]
    pub loan_interest_rate_percent: f64,
    /// Caller supplied ratio; not reconciled with `loan_amount / annual_income`.
    #[serde(rename = "loan_percent_income")]
    pub loan_to_income_ratio: f64,
    #[serde(rename = "cb_person_cred_hist_length", with = "whole_number")]
    pub credit_history_length_years: i64,
    #[serde(with = "whole_number")]
    pub credit_score: i64,
    #[serde(rename = "previous_loan_defaults_on_file", with = "yes_no")]
    pub has_prior_default: bool,
}

impl ApplicationProfile {
    /// Ratio of loan amount to income, recomputed from the raw amounts.
    ///
    /// A zero income yields a non-finite value, which every ceiling band rejects.
    pub fn recomputed_loan_to_income(&self) -> f64 {
        self.loan_amount / self.annual_income
    }

    /// The ratio the intake form pre-fills: loan amount over income rounded to two decimals.
    pub fn suggested_loan_to_income(loan_amount: f64, annual_income: f64) -> Option<f64> {
        if loan_amount > 0.0 && annual_income > 0.0 {
            Some((loan_amount / annual_income * 100.0).round() / 100.0)
        } else {
            None
        }
    }
}

/// The thirteen profile attributes, in canonical form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attribute {
    Age,
    Gender,
    Education,
    AnnualIncome,
    EmploymentExperience,
    HomeOwnership,
    LoanAmount,
    LoanIntent,
    LoanInterestRate,
    LoanToIncomeRatio,
    CreditHistoryLength,
    CreditScore,
    PriorDefault,
}

impl Attribute {
    pub const fn ordered() -> [Self; 13] {
        [
            Self::Age,
            Self::Gender,
            Self::Education,
            Self::AnnualIncome,
            Self::EmploymentExperience,
            Self::HomeOwnership,
            Self::LoanAmount,
            Self::LoanIntent,
            Self::LoanInterestRate,
            Self::LoanToIncomeRatio,
            Self::CreditHistoryLength,
            Self::CreditScore,
            Self::PriorDefault,
        ]
    }

    /// JSON key carrying this attribute.
    pub const fn field_name(self) -> &'static str {
        match self {
            Self::Age => "person_age",
            Self::Gender => "person_gender",
            Self::Education => "person_education",
            Self::AnnualIncome => "person_income",
            Self::EmploymentExperience => "person_emp_exp",
            Self::HomeOwnership => "person_home_ownership",
            Self::LoanAmount => "loan_amnt",
            Self::LoanIntent => "loan_intent",
            Self::LoanInterestRate => "loan_int_rate",
            Self::LoanToIncomeRatio => "loan_percent_income",
            Self::CreditHistoryLength => "cb_person_cred_hist_length",
            Self::CreditScore => "credit_score",
            Self::PriorDefault => "previous_loan_defaults_on_file",
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field_name())
    }
}

/// Required JSON keys in the order the intake checks them.
pub const REQUIRED_FIELDS: [&str; 13] = {
    let attributes = Attribute::ordered();
    let mut fields = [""; 13];
    let mut index = 0;
    while index < attributes.len() {
        fields[index] = attributes[index].field_name();
        index += 1;
    }
    fields
};
