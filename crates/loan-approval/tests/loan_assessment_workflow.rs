//! Integration specifications for the loan assessment workflow.
//!
//! Scenarios drive the public engine and HTTP router so intake, scoring, and explanation are
//! validated together without reaching into private modules.

mod common {
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request};
    use axum::Router;
    use serde_json::{json, Value};

    use loan_approval::assessment::{assessment_router, LoanAssessmentEngine, Locale};

    pub(super) fn application() -> Value {
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

    pub(super) fn router(locale: Locale) -> Router {
        assessment_router(Arc::new(LoanAssessmentEngine::new(locale)))
    }

    pub(super) fn submit(payload: &Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/v1/loan/assessments")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(payload.to_string()))
            .expect("request builds")
    }

    pub(super) async fn read_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body readable");
        serde_json::from_slice(&bytes).expect("json body")
    }
}

use axum::http::StatusCode;
use common::*;
use loan_approval::assessment::{
    profile_from_json, Impact, LoanAssessment, LoanAssessmentEngine, Locale, REQUIRED_FIELDS,
};
use serde_json::json;
use tower::ServiceExt;

#[tokio::test]
async fn form_defaults_are_approved_with_ranked_factors() {
    let response = router(Locale::French)
        .oneshot(submit(&application()))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body: LoanAssessment =
        serde_json::from_value(read_json(response).await).expect("assessment body");

    assert!(body.approved);
    assert_eq!(body.probability, 0.89);
    assert_eq!(body.message, "Prêt approuvé ✅");
    assert_eq!(body.factors.len(), 6);
    assert!(body
        .factors
        .windows(2)
        .all(|pair| pair[0].importance >= pair[1].importance));
}

#[tokio::test]
async fn prior_default_with_low_credit_is_declined() {
    let mut payload = application();
    payload["previous_loan_defaults_on_file"] = json!("Yes");
    payload["credit_score"] = json!(550);

    let response = router(Locale::English)
        .oneshot(submit(&payload))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    assert_eq!(body["approved"], false);
    assert_eq!(body["probability"], 0.36);
    assert_eq!(body["message"], "Loan declined ❌");

    let credit = body["factors"]
        .as_array()
        .and_then(|factors| {
            factors
                .iter()
                .find(|factor| factor["feature"] == "Credit Score")
        })
        .expect("credit factor present");
    assert_eq!(credit["impact"], "negative");
    assert_eq!(credit["value"], 550);
}

#[tokio::test]
async fn every_missing_field_is_rejected_by_name() {
    for field in REQUIRED_FIELDS {
        let mut payload = application();
        payload
            .as_object_mut()
            .expect("object payload")
            .remove(field);

        let response = router(Locale::French)
            .oneshot(submit(&payload))
            .await
            .expect("router responds");

        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{field}");
        let body = read_json(response).await;
        assert_eq!(
            body["error"],
            format!("Missing required field: {field}"),
            "{field}"
        );
    }
}

#[test]
fn engine_is_shareable_across_threads() {
    let engine = std::sync::Arc::new(LoanAssessmentEngine::new(Locale::French));
    let profile = profile_from_json(application()).expect("profile parses");
    let expected = engine.assess(&profile);

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let engine = engine.clone();
            let profile = profile.clone();
            std::thread::spawn(move || engine.assess(&profile))
        })
        .collect();

    for handle in handles {
        let assessment = handle.join().expect("worker finished");
        assert_eq!(assessment, expected);
    }
    assert_eq!(expected.factors[0].impact, Impact::Neutral);
}
