//! Lead API endpoint
//!
//! - POST /api/leads - Validate and store a lead row `{ email, created_at }`

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use serde::Serialize;

use super::repository::LeadRepository;
use crate::core::error::StoreError;
use crate::core::lead::{LeadRecord, LeadSubmission};
use crate::core::validation::{ValidationError, validate_email};

/// Lead API state containing the repository
#[derive(Clone)]
pub struct LeadApiState {
    pub repository: Arc<dyn LeadRepository>,
}

impl LeadApiState {
    pub fn new(repository: Arc<dyn LeadRepository>) -> Self {
        Self { repository }
    }
}

/// API error response
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
}

impl ApiError {
    pub fn new(error: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code: code.into(),
        }
    }
}

/// Lead endpoint error types
#[derive(Debug, thiserror::Error)]
pub enum LeadApiError {
    #[error("{0}")]
    InvalidEmail(ValidationError),

    #[error("created_at must be an ISO-8601 timestamp")]
    InvalidTimestamp,

    #[error("Failed to store lead")]
    Store(StoreError),
}

impl IntoResponse for LeadApiError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            LeadApiError::InvalidEmail(_) => (StatusCode::UNPROCESSABLE_ENTITY, "INVALID_EMAIL"),
            LeadApiError::InvalidTimestamp => {
                (StatusCode::UNPROCESSABLE_ENTITY, "INVALID_TIMESTAMP")
            }
            LeadApiError::Store(_) => (StatusCode::BAD_GATEWAY, "STORE_ERROR"),
        };

        let body = ApiError::new(self.to_string(), code);

        (status, Json(body)).into_response()
    }
}

/// Response for a stored lead
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub success: bool,
}

/// Create the lead API router
pub fn leads_router(state: LeadApiState) -> Router {
    Router::new()
        .route("/api/leads", post(create_lead))
        .with_state(state)
}

/// POST /api/leads
/// Store a lead captured by one of the page forms
async fn create_lead(
    State(state): State<LeadApiState>,
    Json(record): Json<LeadRecord>,
) -> Result<(StatusCode, Json<CreatedResponse>), LeadApiError> {
    let email = validate_email(&record.email).map_err(LeadApiError::InvalidEmail)?;
    let created_at = record.created_at().ok_or(LeadApiError::InvalidTimestamp)?;
    let submission = LeadSubmission::new(email, created_at);

    if let Err(e) = state.repository.insert(submission.to_record()).await {
        tracing::error!("Failed to store lead {}: {}", submission.email, e);
        return Err(LeadApiError::Store(e));
    }

    tracing::info!("Lead captured: {}", submission.email);

    Ok((StatusCode::CREATED, Json(CreatedResponse { success: true })))
}
