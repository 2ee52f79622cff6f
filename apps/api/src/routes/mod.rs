pub mod health;

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::matching::handlers as matching;
use crate::resume::handlers as resume;
use crate::session::handlers as session;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Catalog + stateless matching
        .route("/api/v1/internships", get(matching::handle_list_internships))
        .route("/api/v1/matches", post(matching::handle_matches))
        .route("/api/v1/skill-gaps", post(matching::handle_skill_gaps))
        .route("/api/v1/courses", get(matching::handle_list_courses))
        .route(
            "/api/v1/courses/recommended",
            post(matching::handle_recommended_courses),
        )
        .route("/api/v1/skills/extract", post(resume::handle_extract_skills))
        // Sessions
        .route("/api/v1/sessions", post(session::handle_create_session))
        .route(
            "/api/v1/sessions/:id",
            get(session::handle_get_session).delete(session::handle_clear_session),
        )
        .route(
            "/api/v1/sessions/:id/skills",
            post(session::handle_add_skill).put(session::handle_replace_skills),
        )
        .route(
            "/api/v1/sessions/:id/skills/:skill",
            delete(session::handle_remove_skill),
        )
        .route(
            "/api/v1/sessions/:id/resume",
            post(session::handle_upload_resume),
        )
        .route(
            "/api/v1/sessions/:id/matches",
            get(session::handle_session_matches),
        )
        .route(
            "/api/v1/sessions/:id/skill-gaps",
            get(session::handle_session_gaps),
        )
        .with_state(state)
}
