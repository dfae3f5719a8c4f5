//! HTTP endpoint handlers

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{rejection::FormRejection, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse},
    Form,
};

use crate::domain::{PredictionResult, RawInput};
use crate::utils::error::RiskError;
use crate::web::{render, AppState};

const SCRIPT: &str = include_str!("../../static/script.js");

/// Render the empty form.
pub async fn show_form(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(render::page(state.service.mapping(), None, None))
}

/// Score a submitted form and render the page with the outcome.
pub async fn submit_form(
    State(state): State<Arc<AppState>>,
    form: Result<Form<HashMap<String, String>>, FormRejection>,
) -> (StatusCode, Html<String>) {
    let mapping = state.service.mapping();

    let input = match form {
        Ok(Form(fields)) => RawInput::from(fields),
        Err(rejection) => {
            tracing::warn!("Rejected form body: {}", rejection);
            let result = PredictionResult::Failed(rejection.body_text());
            return (
                rejection.status(),
                Html(render::page(mapping, None, Some(&result))),
            );
        }
    };

    let outcome = state.service.predict(&input);
    let status = match &outcome {
        Ok(_) => StatusCode::OK,
        Err(RiskError::Validation(_)) => StatusCode::UNPROCESSABLE_ENTITY,
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    let result = state.service.report(outcome);

    (status, Html(render::page(mapping, Some(&input), Some(&result))))
}

pub async fn script() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/javascript; charset=utf-8")],
        SCRIPT,
    )
}
