use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Serialize;
use serde_json::{json, Value};

use super::domain::{
    Education, Gender, HomeOwnership, LoanIntent, PRIOR_DEFAULT_OPTIONS, REQUIRED_FIELDS,
};
use super::intake::{profile_from_json, IntakeError};
use super::LoanAssessmentEngine;

/// Router builder exposing the assessment endpoints.
pub fn assessment_router(engine: Arc<LoanAssessmentEngine>) -> Router {
    Router::new()
        .route("/api/v1/loan/assessments", post(assess_handler))
        .route("/api/predict", post(assess_handler))
        .route("/api/v1/loan/options", get(options_handler))
        .with_state(engine)
}

pub(crate) async fn assess_handler(
    State(engine): State<Arc<LoanAssessmentEngine>>,
    body: Result<axum::Json<Value>, JsonRejection>,
) -> Response {
    let payload = match body {
        Ok(axum::Json(payload)) => payload,
        Err(rejected) => {
            return rejection(IntakeError::UnreadableBody {
                details: rejected.body_text(),
            })
        }
    };

    let profile = match profile_from_json(payload) {
        Ok(profile) => profile,
        Err(error) => return rejection(error),
    };

    let assessment = engine.assess(&profile);
    tracing::info!(
        approved = assessment.approved,
        probability = assessment.probability,
        "loan application assessed"
    );

    (StatusCode::OK, axum::Json(assessment)).into_response()
}

fn rejection(error: IntakeError) -> Response {
    tracing::warn!(%error, "loan application rejected at intake");

    let payload = match &error {
        IntakeError::InvalidField { source } => json!({
            "error": error.to_string(),
            "details": source.to_string(),
        }),
        IntakeError::UnreadableBody { details } => json!({
            "error": error.to_string(),
            "details": details,
        }),
        IntakeError::NotAnObject | IntakeError::MissingField(_) => json!({
            "error": error.to_string(),
        }),
    };
    (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response()
}

/// Label sets the intake form renders as choices.
#[derive(Debug, Clone, Serialize)]
pub struct FormOptions {
    pub genders: Vec<&'static str>,
    pub education_levels: Vec<&'static str>,
    pub home_ownership: Vec<&'static str>,
    pub loan_intents: Vec<&'static str>,
    pub prior_defaults: Vec<&'static str>,
    pub required_fields: Vec<&'static str>,
}

impl FormOptions {
    pub fn standard() -> Self {
        Self {
            genders: Gender::ordered().map(Gender::label).to_vec(),
            education_levels: Education::ordered().map(Education::label).to_vec(),
            home_ownership: HomeOwnership::ordered().map(HomeOwnership::label).to_vec(),
            loan_intents: LoanIntent::ordered().map(LoanIntent::label).to_vec(),
            prior_defaults: PRIOR_DEFAULT_OPTIONS.to_vec(),
            required_fields: REQUIRED_FIELDS.to_vec(),
        }
    }
}

pub(crate) async fn options_handler() -> axum::Json<FormOptions> {
    axum::Json(FormOptions::standard())
}
