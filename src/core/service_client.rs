// src/core/service_client.rs
//! HTTP client for the jobs backend

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, error, info};

use crate::config::ClientConfig;
use crate::types::{JobListing, JobSubmission};

const JOBS_ENDPOINT: &str = "/api/jobs";
const RECRUITER_JOBS_SEGMENTS: [&str; 3] = ["api", "jobs", "recruiter"];

/// Backend operations the screens depend on
#[async_trait]
pub trait JobsApi: Send + Sync {
    /// Create a job from a multipart submission, returning the response body
    async fn create_job(&self, submission: JobSubmission) -> Result<Value>;

    /// All jobs owned by a recruiter
    async fn recruiter_jobs(&self, user_id: &str) -> Result<Vec<JobListing>>;
}

#[derive(Debug, Clone)]
pub struct JobBoardClient {
    client: reqwest::Client,
    base_url: String,
}

impl JobBoardClient {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build().context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The user id is one percent-encoded path segment
    fn recruiter_jobs_url(&self, user_id: &str) -> Result<reqwest::Url> {
        let mut url = reqwest::Url::parse(&self.base_url)
            .with_context(|| format!("Invalid API base URL: {}", self.base_url))?;
        url.path_segments_mut()
            .map_err(|_| anyhow::anyhow!("API base URL cannot take a path: {}", self.base_url))?
            .pop_if_empty()
            .extend(RECRUITER_JOBS_SEGMENTS)
            .push(user_id.trim());
        Ok(url)
    }
}

#[async_trait]
impl JobsApi for JobBoardClient {
    async fn create_job(&self, submission: JobSubmission) -> Result<Value> {
        let url = format!("{}{}", self.base_url, JOBS_ENDPOINT);
        let has_logo = submission.logo.is_some();
        let form = submission.into_form()?;

        info!("Posting job to {} (logo attached: {})", url, has_logo);

        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .with_context(|| format!("Failed to POST to {}", url))?;

        let status = response.status();
        debug!("Response status: {}", status);

        let body = response
            .text()
            .await
            .context("Failed to read response text")?;

        if !status.is_success() {
            error!("Job creation rejected with {}: {}", status, body);
            anyhow::bail!("Service returned error status {}: {}", status, body);
        }

        // The body is informational only, keep it even when it is not JSON
        Ok(serde_json::from_str(&body).unwrap_or(Value::String(body)))
    }

    async fn recruiter_jobs(&self, user_id: &str) -> Result<Vec<JobListing>> {
        let url = self.recruiter_jobs_url(user_id)?;

        info!("Fetching recruiter jobs from {}", url);

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .with_context(|| format!("Failed to GET from {}", url))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            anyhow::bail!("HTTP {} error: {}", status, error_text);
        }

        let listings: Vec<JobListing> = response
            .json()
            .await
            .context("Failed to parse recruiter jobs response")?;

        debug!("Received {} jobs for recruiter {}", listings.len(), user_id);
        Ok(listings)
    }
}
