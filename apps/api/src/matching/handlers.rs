//! Axum route handlers for the stateless Matching API.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::{Course, JobPosting};
use crate::errors::AppError;
use crate::matching::courses::{courses_by_skill, recommend_courses};
use crate::matching::gaps::{analyze_gaps_with, skill_coverage_with, SkillGap};
use crate::matching::scorer::{rank_jobs_with, MatchFilter, MatchResult};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct MatchRequest {
    pub skills: Vec<String>,
    #[serde(flatten)]
    pub filter: MatchFilter,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MatchResponse {
    pub matches: Vec<MatchResult>,
}

#[derive(Debug, Deserialize)]
pub struct GapRequest {
    pub skills: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GapResponse {
    pub gaps: Vec<SkillGap>,
    /// Percentage of distinct catalog skills already covered.
    pub coverage: u32,
}

#[derive(Debug, Deserialize)]
pub struct CourseQuery {
    pub skill: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RecommendRequest {
    pub gaps: Vec<SkillGap>,
}

// ────────────────────────────────────────────────────────────────────────────
// Shared pipeline steps (also used by the session-scoped handlers)
// ────────────────────────────────────────────────────────────────────────────

pub async fn ranked_matches(
    state: &AppState,
    skills: &[String],
    filter: &MatchFilter,
) -> Result<MatchResponse, AppError> {
    let catalog = state.catalog.internships().await?;
    let ranked = rank_jobs_with(state.matcher.as_ref(), skills, &catalog);
    let matches = filter.apply(ranked);

    debug!(
        skills = skills.len(),
        matches = matches.len(),
        matcher = state.matcher.name(),
        "Ranked internships"
    );
    Ok(MatchResponse { matches })
}

pub async fn gap_report(state: &AppState, skills: &[String]) -> Result<GapResponse, AppError> {
    let catalog = state.catalog.internships().await?;
    let gaps = analyze_gaps_with(state.matcher.as_ref(), skills, &catalog);
    let coverage = skill_coverage_with(state.matcher.as_ref(), skills, &catalog);

    debug!(skills = skills.len(), gaps = gaps.len(), coverage, "Analyzed skill gaps");
    Ok(GapResponse { gaps, coverage })
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/internships
pub async fn handle_list_internships(
    State(state): State<AppState>,
) -> Result<Json<Vec<JobPosting>>, AppError> {
    Ok(Json(state.catalog.internships().await?))
}

/// POST /api/v1/matches
///
/// Ranks the whole catalog against the given skills, best match first.
/// An empty skill list is accepted and scores every posting 0.
pub async fn handle_matches(
    State(state): State<AppState>,
    Json(request): Json<MatchRequest>,
) -> Result<Json<MatchResponse>, AppError> {
    let response = ranked_matches(&state, &request.skills, &request.filter).await?;
    Ok(Json(response))
}

/// POST /api/v1/skill-gaps
pub async fn handle_skill_gaps(
    State(state): State<AppState>,
    Json(request): Json<GapRequest>,
) -> Result<Json<GapResponse>, AppError> {
    Ok(Json(gap_report(&state, &request.skills).await?))
}

/// GET /api/v1/courses?skill=
pub async fn handle_list_courses(
    State(state): State<AppState>,
    Query(query): Query<CourseQuery>,
) -> Result<Json<Vec<Course>>, AppError> {
    let courses = state.courses.courses().await?;
    let courses = match query.skill.as_deref().map(str::trim) {
        Some(skill) if !skill.is_empty() => courses_by_skill(skill, &courses),
        _ => courses,
    };
    Ok(Json(courses))
}

/// POST /api/v1/courses/recommended
pub async fn handle_recommended_courses(
    State(state): State<AppState>,
    Json(request): Json<RecommendRequest>,
) -> Result<Json<Vec<Course>>, AppError> {
    let courses = state.courses.courses().await?;
    Ok(Json(recommend_courses(&request.gaps, &courses)))
}
