// src/types/mod.rs
pub mod job;
pub mod listing;
pub mod submission;

pub use job::{JobStatus, JobType};
pub use listing::{JobId, JobListing};
pub use submission::JobSubmission;
