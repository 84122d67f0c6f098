// src/testing.rs
//! In-memory `JobsApi` used by the view-model tests

use anyhow::Result;
use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::core::JobsApi;
use crate::types::{JobListing, JobSubmission};

pub(crate) struct FakeJobsApi {
    fail: bool,
    listings: Vec<JobListing>,
    submissions: Mutex<Vec<JobSubmission>>,
    fetched_for: Mutex<Vec<String>>,
    create_calls: AtomicUsize,
}

impl FakeJobsApi {
    pub(crate) fn succeeding() -> Self {
        Self::with_listings(Vec::new())
    }

    pub(crate) fn failing() -> Self {
        Self {
            fail: true,
            ..Self::succeeding()
        }
    }

    pub(crate) fn with_listings(listings: Vec<JobListing>) -> Self {
        Self {
            fail: false,
            listings,
            submissions: Mutex::new(Vec::new()),
            fetched_for: Mutex::new(Vec::new()),
            create_calls: AtomicUsize::new(0),
        }
    }

    pub(crate) fn submissions(&self) -> Vec<JobSubmission> {
        self.submissions.lock().unwrap().clone()
    }

    pub(crate) fn create_calls(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }

    pub(crate) fn fetched_for(&self) -> Vec<String> {
        self.fetched_for.lock().unwrap().clone()
    }

    pub(crate) fn total_calls(&self) -> usize {
        self.create_calls() + self.fetched_for().len()
    }
}

#[async_trait]
impl JobsApi for FakeJobsApi {
    async fn create_job(&self, submission: JobSubmission) -> Result<Value> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        self.submissions.lock().unwrap().push(submission);
        if self.fail {
            anyhow::bail!("Service returned error status 500 Internal Server Error");
        }
        Ok(json!({ "id": 1, "message": "created" }))
    }

    async fn recruiter_jobs(&self, user_id: &str) -> Result<Vec<JobListing>> {
        self.fetched_for.lock().unwrap().push(user_id.to_string());
        if self.fail {
            anyhow::bail!("HTTP 503 error: unavailable");
        }
        Ok(self.listings.clone())
    }
}

/// Listing with the fields the dashboard displays
pub(crate) fn listing(id: i64, title: &str, applications: Option<u64>) -> JobListing {
    serde_json::from_value(json!({
        "id": id,
        "title": title,
        "company_name": "DevHire Inc.",
        "location": "Remote",
        "job_status": "Open",
        "applications": applications,
    }))
    .unwrap()
}
