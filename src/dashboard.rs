// src/dashboard.rs
//! Recruiter dashboard view model
//!
//! Status changes and deletions only touch the in-memory list. Nothing is
//! written back, so the next fetch restores the server's version. Making these
//! durable needs backend calls with an optimistic update and a rollback when
//! the call fails.

use tracing::{debug, error, info};

use crate::core::JobsApi;
use crate::session::Session;
use crate::types::{JobId, JobListing, JobStatus};

pub const DELETE_PROMPT: &str = "Are you sure you want to delete this job?";

/// Blocking yes/no question asked before destructive actions
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> bool;
}

impl<F> Confirm for F
where
    F: FnMut(&str) -> bool,
{
    fn confirm(&mut self, prompt: &str) -> bool {
        self(prompt)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Metrics {
    pub total_jobs: usize,
    pub total_applications: u64,
}

impl Metrics {
    pub fn from_listings(listings: &[JobListing]) -> Self {
        Self {
            total_jobs: listings.len(),
            total_applications: listings
                .iter()
                .map(JobListing::application_count)
                .fold(0, u64::saturating_add),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Nobody signed in, nothing requested
    NoUser,
    /// Already showing this user's jobs
    Unchanged,
    Loaded(usize),
    Failed,
}

#[derive(Debug, Clone, Default)]
pub struct RecruiterDashboard {
    listings: Vec<JobListing>,
    metrics: Metrics,
    loaded_for: Option<String>,
}

impl RecruiterDashboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn listings(&self) -> &[JobListing] {
        &self.listings
    }

    pub fn metrics(&self) -> Metrics {
        self.metrics
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    pub fn get(&self, id: &JobId) -> Option<&JobListing> {
        self.listings.iter().find(|job| &job.id == id)
    }

    /// Fetch when the signed-in user differs from the one last loaded
    pub async fn sync<A>(&mut self, api: &A, session: &Session) -> FetchOutcome
    where
        A: JobsApi + ?Sized,
    {
        match session.user_id() {
            None => FetchOutcome::NoUser,
            Some(user_id) if self.loaded_for.as_deref() == Some(user_id) => {
                debug!("Dashboard already loaded for user {}", user_id);
                FetchOutcome::Unchanged
            }
            Some(_) => self.refresh(api, session).await,
        }
    }

    /// Fetch the signed-in user's jobs, replacing the list on success
    pub async fn refresh<A>(&mut self, api: &A, session: &Session) -> FetchOutcome
    where
        A: JobsApi + ?Sized,
    {
        let Some(user_id) = session.user_id() else {
            return FetchOutcome::NoUser;
        };

        match api.recruiter_jobs(user_id).await {
            Ok(listings) => {
                let count = listings.len();
                self.listings = listings;
                self.recompute();
                self.loaded_for = Some(user_id.to_string());
                info!(
                    "Loaded {} jobs ({} applications) for recruiter {}",
                    count, self.metrics.total_applications, user_id
                );
                FetchOutcome::Loaded(count)
            }
            Err(e) => {
                error!("Failed to fetch recruiter jobs: {:#}", e);
                FetchOutcome::Failed
            }
        }
    }

    /// Set one listing's displayed status. Returns false when no listing has `id`.
    pub fn change_status(&mut self, id: &JobId, status: JobStatus) -> bool {
        match self.listings.iter_mut().find(|job| &job.id == id) {
            Some(job) => {
                debug!("Job {} status {} -> {}", id, job.job_status, status);
                job.job_status = status.to_string();
                true
            }
            None => false,
        }
    }

    /// Remove one listing after confirmation. Returns true only if something was removed.
    pub fn delete<C>(&mut self, id: &JobId, confirm: &mut C) -> bool
    where
        C: Confirm + ?Sized,
    {
        if self.get(id).is_none() {
            return false;
        }
        if !confirm.confirm(DELETE_PROMPT) {
            debug!("Delete of job {} cancelled", id);
            return false;
        }

        self.listings.retain(|job| &job.id != id);
        self.recompute();
        info!("Removed job {} from dashboard (local only)", id);
        true
    }

    fn recompute(&mut self) {
        self.metrics = Metrics::from_listings(&self.listings);
    }
}
