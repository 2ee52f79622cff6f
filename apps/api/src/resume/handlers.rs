use axum::Json;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::resume::extractor::extract_skills;

#[derive(Debug, Deserialize)]
pub struct ExtractRequest {
    pub text: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ExtractResponse {
    pub skills: Vec<String>,
}

/// POST /api/v1/skills/extract
pub async fn handle_extract_skills(
    Json(request): Json<ExtractRequest>,
) -> Result<Json<ExtractResponse>, AppError> {
    if request.text.trim().is_empty() {
        return Err(AppError::Validation("text cannot be empty".to_string()));
    }

    Ok(Json(ExtractResponse {
        skills: extract_skills(&request.text),
    }))
}
