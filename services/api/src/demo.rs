use clap::Args;
use loan_approval::assessment::domain::parse_yes_no;
use loan_approval::assessment::{
    ApplicationProfile, Education, Gender, HomeOwnership, IntakeError, LoanAssessment,
    LoanAssessmentEngine, LoanIntent, Locale, ScoreBreakdown,
};
use loan_approval::error::AppError;

#[derive(Args, Debug)]
pub(crate) struct AssessArgs {
    /// Applicant age in years
    #[arg(long)]
    pub(crate) age: i64,
    /// female or male
    #[arg(long)]
    pub(crate) gender: Gender,
    /// High School, Associate, Bachelor, Master, or Doctorate
    #[arg(long)]
    pub(crate) education: Education,
    /// Annual income
    #[arg(long)]
    pub(crate) income: f64,
    /// Years of employment experience
    #[arg(long)]
    pub(crate) employment_years: i64,
    /// MORTGAGE, OWN, RENT, or OTHER
    #[arg(long)]
    pub(crate) home_ownership: HomeOwnership,
    /// Requested loan amount
    #[arg(long)]
    pub(crate) loan_amount: f64,
    /// DEBTCONSOLIDATION, EDUCATION, HOMEIMPROVEMENT, MEDICAL, PERSONAL, or VENTURE
    #[arg(long)]
    pub(crate) loan_intent: LoanIntent,
    /// Interest rate in percent
    #[arg(long)]
    pub(crate) interest_rate: f64,
    /// Loan-to-income ratio. Defaults to loan amount / income rounded to two decimals.
    #[arg(long)]
    pub(crate) loan_percent_income: Option<f64>,
    /// Length of credit history in years
    #[arg(long)]
    pub(crate) credit_history_years: i64,
    /// Credit score (conventionally 300-850)
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) credit_score: i64,
    /// Prior loan default on file (Yes or No)
    #[arg(long, default_value = "No", value_parser = parse_yes_no, action = clap::ArgAction::Set)]
    pub(crate) prior_default: bool,
    /// Output language: fr or en
    #[arg(long, default_value = "fr")]
    pub(crate) locale: Locale,
    /// Print the HTTP response body instead of the text report
    #[arg(long)]
    pub(crate) json: bool,
    /// List every scoring adjustment
    #[arg(long)]
    pub(crate) breakdown: bool,
}

impl AssessArgs {
    pub(crate) fn profile(&self) -> Result<ApplicationProfile, AppError> {
        let loan_to_income_ratio = match self.loan_percent_income {
            Some(ratio) => ratio,
            None => ApplicationProfile::suggested_loan_to_income(self.loan_amount, self.income)
                .ok_or(IntakeError::MissingField("loan_percent_income"))?,
        };

        Ok(ApplicationProfile {
            age: self.age,
            gender: self.gender,
            education: self.education,
            annual_income: self.income,
            employment_experience_years: self.employment_years,
            home_ownership: self.home_ownership,
            loan_amount: self.loan_amount,
            loan_intent: self.loan_intent,
            loan_interest_rate_percent: self.interest_rate,
            loan_to_income_ratio,
            credit_history_length_years: self.credit_history_years,
            credit_score: self.credit_score,
            has_prior_default: self.prior_default,
        })
    }
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Output language: fr or en
    #[arg(long, default_value = "fr")]
    pub(crate) locale: Locale,
    /// Hide the per-rule scoring adjustments
    #[arg(long)]
    pub(crate) no_breakdown: bool,
}

pub(crate) fn run_assess(args: AssessArgs) -> Result<(), AppError> {
    let profile = args.profile()?;
    let engine = LoanAssessmentEngine::new(args.locale);
    let assessment = engine.assess(&profile);

    if args.json {
        let body = serde_json::to_string_pretty(&assessment).map_err(std::io::Error::from)?;
        println!("{body}");
        return Ok(());
    }

    let breakdown = args
        .breakdown
        .then(|| engine.scorer().breakdown(&profile));
    render_assessment(&assessment, breakdown.as_ref());
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        locale,
        no_breakdown,
    } = args;
    let engine = LoanAssessmentEngine::new(locale);

    println!("Loan approval demo ({locale})");
    for (title, profile) in reference_profiles() {
        println!("\n== {title}");
        let assessment = engine.assess(&profile);
        let breakdown = (!no_breakdown).then(|| engine.scorer().breakdown(&profile));
        render_assessment(&assessment, breakdown.as_ref());
    }

    Ok(())
}

/// The form's default application and the same applicant with a default and poor credit.
pub(crate) fn reference_profiles() -> [(&'static str, ApplicationProfile); 2] {
    let standard = ApplicationProfile {
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
    };
    let adverse = ApplicationProfile {
        credit_score: 550,
        has_prior_default: true,
        ..standard.clone()
    };

    [
        ("Standard applicant (form defaults)", standard),
        ("Prior default and low credit score", adverse),
    ]
}

fn render_assessment(assessment: &LoanAssessment, breakdown: Option<&ScoreBreakdown>) {
    println!("{}", assessment.message);
    println!(
        "Approval probability: {:.0}%",
        assessment.probability * 100.0
    );

    println!("\nDecision factors");
    for factor in &assessment.factors {
        println!(
            "- {} ({:.0}%): {} [{}]",
            factor.feature,
            factor.importance * 100.0,
            factor.value,
            factor.impact.label()
        );
    }

    if let Some(breakdown) = breakdown {
        println!("\nScore breakdown (base {:.2})", breakdown.base_score);
        for adjustment in &breakdown.adjustments {
            println!(
                "- {} [{}]: {:+.2} ({})",
                adjustment.rule.label(),
                adjustment.rule.attribute(),
                adjustment.delta,
                adjustment.notes
            );
        }
        println!("Raw score: {:.2}", breakdown.raw_score());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_profiles_cover_both_outcomes() {
        let engine = LoanAssessmentEngine::new(Locale::French);
        let [(_, standard), (_, adverse)] = reference_profiles();

        let approved = engine.assess(&standard);
        let declined = engine.assess(&adverse);

        assert!(approved.approved);
        assert_eq!(approved.probability, 0.89);
        assert!(!declined.approved);
        assert_eq!(declined.probability, 0.36);
    }

    #[test]
    fn missing_ratio_without_income_is_rejected() {
        let args = AssessArgs {
            age: 30,
            gender: Gender::Female,
            education: Education::Master,
            income: 0.0,
            employment_years: 3,
            home_ownership: HomeOwnership::Own,
            loan_amount: 5_000.0,
            loan_intent: LoanIntent::Medical,
            interest_rate: 9.0,
            loan_percent_income: None,
            credit_history_years: 4,
            credit_score: 700,
            prior_default: false,
            locale: Locale::English,
            json: false,
            breakdown: false,
        };

        let error = args.profile().expect_err("ratio cannot be derived");
        assert_eq!(error.to_string(), "Missing required field: loan_percent_income");
    }
}
