use std::sync::Arc;

use tracing::info;

use crate::catalog::{CatalogProvider, CourseProvider, FileCatalog, FixtureCatalog};
use crate::config::Config;
use crate::matching::skill_match::SkillMatcher;
use crate::session::store::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Internship source. Default: bundled fixtures; CATALOG_PATH swaps in a JSON file.
    pub catalog: Arc<dyn CatalogProvider>,
    pub courses: Arc<dyn CourseProvider>,
    /// Pluggable skill comparison. Swap via SKILL_MATCH_MODE.
    pub matcher: Arc<dyn SkillMatcher>,
    pub sessions: SessionStore,
}

impl AppState {
    pub fn from_config(config: &Config) -> Self {
        let fixtures = Arc::new(FixtureCatalog::new(config.simulated_latency));

        let catalog: Arc<dyn CatalogProvider> = match &config.catalog_path {
            Some(path) => {
                info!("Internship catalog: {}", path.display());
                Arc::new(FileCatalog::new(path.clone()))
            }
            None => fixtures.clone(),
        };

        AppState {
            catalog,
            courses: fixtures,
            matcher: config.skill_match_mode.build_matcher(),
            sessions: SessionStore::new(config.session_ttl),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use crate::matching::skill_match::MatchMode;

    #[test]
    fn test_state_follows_config() {
        let config = Config {
            skill_match_mode: MatchMode::Exact,
            session_ttl: Duration::from_secs(5),
            ..Config::default()
        };
        let state = AppState::from_config(&config);
        assert_eq!(state.matcher.name(), "exact");
        assert_eq!(state.sessions.idle_ttl(), Duration::from_secs(5));
    }

    #[tokio::test]
    async fn test_fixtures_used_without_catalog_path() {
        let state = AppState::from_config(&Config::default());
        assert_eq!(state.catalog.internships().await.unwrap().len(), 8);
    }
}
