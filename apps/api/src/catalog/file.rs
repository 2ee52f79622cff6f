use std::path::PathBuf;

use anyhow::Context;
use async_trait::async_trait;
use tracing::debug;

use crate::catalog::{CatalogProvider, JobPosting};
use crate::errors::AppError;

/// Internships loaded from a JSON array of postings on every call, so edits
/// to the file show up without a restart. Read or parse failures surface as
/// `AppError::Internal`.
pub struct FileCatalog {
    path: PathBuf,
}

impl FileCatalog {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait]
impl CatalogProvider for FileCatalog {
    async fn internships(&self) -> Result<Vec<JobPosting>, AppError> {
        let raw = tokio::fs::read(&self.path)
            .await
            .with_context(|| format!("Failed to read catalog {}", self.path.display()))?;
        let postings: Vec<JobPosting> = serde_json::from_slice(&raw)
            .with_context(|| format!("Malformed catalog {}", self.path.display()))?;

        debug!(count = postings.len(), path = %self.path.display(), "Loaded internship catalog");
        Ok(postings)
    }
}
