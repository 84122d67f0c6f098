// src/lib.rs
//! Recruiter-side client for the job board: post jobs through a form and
//! manage your postings on a dashboard.

pub mod cli;
pub mod config;
pub mod context;
pub mod core;
pub mod dashboard;
pub mod logo;
pub mod posting;
pub mod render;
pub mod session;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;

pub use config::{ClientConfig, PlaceholderIds};
pub use context::AppContext;
pub use crate::core::{JobBoardClient, JobsApi};
pub use dashboard::{Confirm, FetchOutcome, Metrics, RecruiterDashboard};
pub use logo::{Logo, LogoError};
pub use posting::{Field, FormMessage, JobPostingDraft, PostJobForm, SubmitOutcome};
pub use session::Session;
pub use types::{JobId, JobListing, JobStatus, JobSubmission, JobType};
