//! Read-only data sources for internships and courses.
//!
//! Scoring code only ever sees the slices these providers return. `AppState`
//! holds them as `Arc<dyn ...>` so a database- or API-backed source can be
//! swapped in at startup without touching the matching algorithms.

pub mod courses;
pub mod file;
pub mod internships;

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::errors::AppError;

pub use courses::Course;
pub use file::FileCatalog;
pub use internships::JobPosting;

#[async_trait]
pub trait CatalogProvider: Send + Sync {
    async fn internships(&self) -> Result<Vec<JobPosting>, AppError>;
}

#[async_trait]
pub trait CourseProvider: Send + Sync {
    async fn courses(&self) -> Result<Vec<Course>, AppError>;
}

/// Serves the bundled fixture data, optionally after an artificial delay.
pub struct FixtureCatalog {
    latency: Duration,
}

impl FixtureCatalog {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

#[async_trait]
impl CatalogProvider for FixtureCatalog {
    async fn internships(&self) -> Result<Vec<JobPosting>, AppError> {
        self.simulate_latency().await;
        let postings = internships::fixture_internships();
        debug!(count = postings.len(), "Loaded internship fixtures");
        Ok(postings)
    }
}

#[async_trait]
impl CourseProvider for FixtureCatalog {
    async fn courses(&self) -> Result<Vec<Course>, AppError> {
        self.simulate_latency().await;
        let courses = courses::fixture_courses();
        debug!(count = courses.len(), "Loaded course fixtures");
        Ok(courses)
    }
}
