use serde_json::{json, Value};

use crate::assessment::domain::{
    ApplicationProfile, Education, Gender, HomeOwnership, LoanIntent,
};
use crate::assessment::{Locale, LoanAssessmentEngine};

/// The intake form's pre-filled profile.
pub(super) fn form_defaults() -> ApplicationProfile {
    ApplicationProfile {
        age: 30,
        gender: Gender::Male,
        education: Education::Bachelor,
        annual_income: 60_000.0,
        employment_experience_years: 5,
        home_ownership: HomeOwnership::Rent,
        loan_amount: 10_000.0,
        loan_intent: LoanIntent::Personal,
        loan_interest_rate_percent: 11.0,
        loan_to_income_ratio: 0.17,
        credit_history_length_years: 5,
        credit_score: 650,
        has_prior_default: false,
    }
}

/// Form defaults with a prior default on file and a sub-prime credit score.
pub(super) fn adverse_profile() -> ApplicationProfile {
    ApplicationProfile {
        has_prior_default: true,
        credit_score: 550,
        ..form_defaults()
    }
}

pub(super) fn strong_profile() -> ApplicationProfile {
    ApplicationProfile {
        age: 42,
        gender: Gender::Female,
        education: Education::Doctorate,
        annual_income: 150_000.0,
        employment_experience_years: 15,
        home_ownership: HomeOwnership::Own,
        loan_amount: 12_000.0,
        loan_intent: LoanIntent::HomeImprovement,
        loan_interest_rate_percent: 6.5,
        loan_to_income_ratio: 0.08,
        credit_history_length_years: 14,
        credit_score: 810,
        has_prior_default: false,
    }
}

pub(super) fn weak_profile() -> ApplicationProfile {
    ApplicationProfile {
        age: 21,
        gender: Gender::Male,
        education: Education::HighSchool,
        annual_income: 18_000.0,
        employment_experience_years: 0,
        home_ownership: HomeOwnership::Rent,
        loan_amount: 25_000.0,
        loan_intent: LoanIntent::Venture,
        loan_interest_rate_percent: 19.5,
        loan_to_income_ratio: 1.39,
        credit_history_length_years: 1,
        credit_score: 520,
        has_prior_default: true,
    }
}

pub(super) fn form_defaults_json() -> Value {
    json!({
        "person_age": 30,
        "person_gender": "male",
        "person_education": "Bachelor",
        "person_income": 60000,
        "person_emp_exp": 5,
        "person_home_ownership": "RENT",
        "loan_amnt": 10000,
        "loan_intent": "PERSONAL",
        "loan_int_rate": 11,
        "loan_percent_income": 0.17,
        "cb_person_cred_hist_length": 5,
        "credit_score": 650,
        "previous_loan_defaults_on_file": "No"
    })
}

pub(super) fn engine() -> LoanAssessmentEngine {
    LoanAssessmentEngine::new(Locale::French)
}
