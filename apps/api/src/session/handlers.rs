//! Axum route handlers for the Session API.

use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::matching::handlers::{gap_report, ranked_matches, GapResponse, MatchResponse};
use crate::matching::scorer::MatchFilter;
use crate::resume::extractor::{parse_resume, parse_skill_list};
use crate::session::store::Session;
use crate::state::AppState;

/// Skills supplied either as a list or as comma-separated text.
/// `skillsText` wins when both are present.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillsInput {
    #[serde(default)]
    pub skills: Option<Vec<String>>,
    #[serde(default)]
    pub skills_text: Option<String>,
}

impl SkillsInput {
    pub fn into_skills(self) -> Vec<String> {
        match (self.skills_text, self.skills) {
            (Some(text), _) => parse_skill_list(&text),
            (None, Some(list)) => list
                .into_iter()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            (None, None) => vec![],
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AddSkillRequest {
    pub skill: String,
}

/// POST /api/v1/sessions
pub async fn handle_create_session(
    State(state): State<AppState>,
    Json(input): Json<SkillsInput>,
) -> Result<(StatusCode, Json<Session>), AppError> {
    let session = state.sessions.create(input.into_skills()).await;
    Ok((StatusCode::CREATED, Json(session)))
}

/// GET /api/v1/sessions/:id
pub async fn handle_get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Session>, AppError> {
    Ok(Json(state.sessions.get(id).await?))
}

/// DELETE /api/v1/sessions/:id
pub async fn handle_clear_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.sessions.clear(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// PUT /api/v1/sessions/:id/skills
///
/// Manual entry. Replaces the whole list and marks the session processed.
pub async fn handle_replace_skills(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(input): Json<SkillsInput>,
) -> Result<Json<Session>, AppError> {
    let session = state.sessions.replace_skills(id, input.into_skills()).await?;
    Ok(Json(session))
}

/// POST /api/v1/sessions/:id/skills
pub async fn handle_add_skill(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<AddSkillRequest>,
) -> Result<Json<Session>, AppError> {
    Ok(Json(state.sessions.add_skill(id, &request.skill).await?))
}

/// DELETE /api/v1/sessions/:id/skills/:skill
pub async fn handle_remove_skill(
    State(state): State<AppState>,
    Path((id, skill)): Path<(Uuid, String)>,
) -> Result<Json<Session>, AppError> {
    Ok(Json(state.sessions.remove_skill(id, &skill).await?))
}

/// POST /api/v1/sessions/:id/resume
///
/// Multipart upload with a `file` part. The part's content type selects the
/// extractor; the extracted skills replace the session's list.
pub async fn handle_upload_resume(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    mut multipart: Multipart,
) -> Result<Json<Session>, AppError> {
    state.sessions.get(id).await?;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let content_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;

        let skills = parse_resume(&content_type, &bytes)?;
        if skills.is_empty() {
            return Err(AppError::ExtractionFailed(
                "No recognizable skills found in resume".to_string(),
            ));
        }

        info!(session_id = %id, skills = skills.len(), "Skills extracted from resume");
        return Ok(Json(state.sessions.replace_skills(id, skills).await?));
    }

    Err(AppError::Validation(
        "multipart field 'file' is required".to_string(),
    ))
}

/// GET /api/v1/sessions/:id/matches
pub async fn handle_session_matches(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<MatchResponse>, AppError> {
    let session = state.sessions.get(id).await?;
    let skills = session.processed_skills()?;
    Ok(Json(
        ranked_matches(&state, skills, &MatchFilter::default()).await?,
    ))
}

/// GET /api/v1/sessions/:id/skill-gaps
pub async fn handle_session_gaps(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<GapResponse>, AppError> {
    let session = state.sessions.get(id).await?;
    let skills = session.processed_skills()?;
    Ok(Json(gap_report(&state, skills).await?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skills_text_wins() {
        let input = SkillsInput {
            skills: Some(vec!["go".to_string()]),
            skills_text: Some("rust, sql".to_string()),
        };
        assert_eq!(input.into_skills(), vec!["rust", "sql"]);
    }

    #[test]
    fn test_skill_list_is_trimmed() {
        let input = SkillsInput {
            skills: Some(vec![" rust ".to_string(), "".to_string()]),
            skills_text: None,
        };
        assert_eq!(input.into_skills(), vec!["rust"]);
    }

    #[test]
    fn test_missing_input_is_empty() {
        assert!(SkillsInput::default().into_skills().is_empty());
    }
}
