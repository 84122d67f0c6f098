// src/posting.rs
//! Job posting form: draft state, required-field gate and multipart submission

use anyhow::Result;
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use tracing::{error, info, warn};

use crate::config::PlaceholderIds;
use crate::core::JobsApi;
use crate::logo::Logo;
use crate::types::{JobStatus, JobSubmission, JobType};

pub const POSTED_MESSAGE: &str = "Job posted successfully!";
pub const FAILED_MESSAGE: &str = "Failed to post job. Try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Title,
    Company,
    Location,
    JobType,
    Salary,
    Description,
    Requirements,
    ApplyLink,
    JobStatus,
}

impl Field {
    pub const ALL: [Field; 9] = [
        Self::Title,
        Self::Company,
        Self::Location,
        Self::JobType,
        Self::Salary,
        Self::JobStatus,
        Self::Description,
        Self::Requirements,
        Self::ApplyLink,
    ];

    pub const REQUIRED: [Field; 7] = [
        Self::Title,
        Self::Company,
        Self::Location,
        Self::JobType,
        Self::JobStatus,
        Self::Description,
        Self::Requirements,
    ];

    pub fn is_required(&self) -> bool {
        Self::REQUIRED.contains(self)
    }

    /// Input name, as the form keys its state
    pub fn name(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Company => "company",
            Self::Location => "location",
            Self::JobType => "jobType",
            Self::Salary => "salary",
            Self::Description => "description",
            Self::Requirements => "requirements",
            Self::ApplyLink => "applyLink",
            Self::JobStatus => "jobStatus",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Title => "Job Title",
            Self::Company => "Company",
            Self::Location => "Location",
            Self::JobType => "Job Type",
            Self::Salary => "Salary (Optional)",
            Self::Description => "Job Description",
            Self::Requirements => "Job Requirements",
            Self::ApplyLink => "Application Link (Optional)",
            Self::JobStatus => "Job Status",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Field {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| anyhow::anyhow!("Unknown form field: {}", s))
    }
}

/// In-progress, unsaved job posting
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobPostingDraft {
    pub title: String,
    pub company: String,
    pub location: String,
    pub job_type: Option<JobType>,
    pub salary: Option<u64>,
    pub description: String,
    pub requirements: String,
    pub apply_link: String,
    pub job_status: Option<JobStatus>,
    pub logo: Option<Logo>,
}

impl JobPostingDraft {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Current value of a field as the input would display it
    pub fn value(&self, field: Field) -> String {
        match field {
            Field::Title => self.title.clone(),
            Field::Company => self.company.clone(),
            Field::Location => self.location.clone(),
            Field::JobType => self.job_type.map(|t| t.to_string()).unwrap_or_default(),
            Field::Salary => self.salary.map(|s| s.to_string()).unwrap_or_default(),
            Field::Description => self.description.clone(),
            Field::Requirements => self.requirements.clone(),
            Field::ApplyLink => self.apply_link.clone(),
            Field::JobStatus => self.job_status.map(|s| s.to_string()).unwrap_or_default(),
        }
    }

    /// Required fields that are still empty, in form order
    pub fn missing_required(&self) -> Vec<Field> {
        Field::REQUIRED
            .into_iter()
            .filter(|field| self.value(*field).is_empty())
            .collect()
    }

    /// Multipart payload for the jobs endpoint.
    ///
    /// The company name is not part of the payload, the backend only receives
    /// the placeholder `company_id`.
    pub fn to_submission(&self, ids: PlaceholderIds) -> JobSubmission {
        let fields = vec![
            ("title", self.title.clone()),
            ("company_id", ids.company_id.to_string()),
            ("location", self.location.clone()),
            ("jobType", self.value(Field::JobType)),
            ("salary", self.value(Field::Salary)),
            ("description", self.description.clone()),
            ("requirements", self.requirements.clone()),
            ("applyLink", self.apply_link.clone()),
            ("jobStatus", self.value(Field::JobStatus)),
            ("recruiter_id", ids.recruiter_id.to_string()),
        ];

        JobSubmission {
            fields,
            logo: self.logo.clone(),
        }
    }
}

/// Banner shown above the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormMessage {
    #[default]
    None,
    Posted,
    Failed,
}

impl FormMessage {
    pub fn text(&self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::Posted => Some(POSTED_MESSAGE),
            Self::Failed => Some(FAILED_MESSAGE),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Required fields were empty; nothing was sent
    Blocked { missing: Vec<Field> },
    Posted(Value),
    Failed,
}

#[derive(Debug, Clone, Default)]
pub struct PostJobForm {
    draft: JobPostingDraft,
    message: FormMessage,
}

impl PostJobForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &JobPostingDraft {
        &self.draft
    }

    pub fn message(&self) -> FormMessage {
        self.message
    }

    /// Apply an input change. Select fields take their option label, an empty
    /// value clears them. Salary only accepts a whole non-negative number.
    pub fn set_field(&mut self, field: Field, value: &str) -> Result<()> {
        match field {
            Field::Title => self.draft.title = value.to_string(),
            Field::Company => self.draft.company = value.to_string(),
            Field::Location => self.draft.location = value.to_string(),
            Field::Description => self.draft.description = value.to_string(),
            Field::Requirements => self.draft.requirements = value.to_string(),
            Field::ApplyLink => self.draft.apply_link = value.to_string(),
            Field::JobType => {
                self.draft.job_type = if value.trim().is_empty() {
                    None
                } else {
                    Some(value.parse()?)
                }
            }
            Field::JobStatus => {
                self.draft.job_status = if value.trim().is_empty() {
                    None
                } else {
                    Some(value.parse()?)
                }
            }
            Field::Salary => {
                let value = value.trim();
                self.draft.salary = if value.is_empty() {
                    None
                } else {
                    Some(value.parse().map_err(|_| {
                        anyhow::anyhow!("Salary must be a whole non-negative number: {}", value)
                    })?)
                }
            }
        }
        Ok(())
    }

    pub fn attach_logo(&mut self, logo: Logo) {
        self.draft.logo = Some(logo);
    }

    pub fn clear_logo(&mut self) {
        self.draft.logo = None;
    }

    pub fn missing_required(&self) -> Vec<Field> {
        self.draft.missing_required()
    }

    /// Send the draft once. Success clears the form, failure keeps it as entered.
    pub async fn submit<A>(&mut self, api: &A, ids: PlaceholderIds) -> SubmitOutcome
    where
        A: JobsApi + ?Sized,
    {
        self.message = FormMessage::None;

        let missing = self.missing_required();
        if !missing.is_empty() {
            warn!("Submission blocked, missing required fields: {:?}", missing);
            return SubmitOutcome::Blocked { missing };
        }

        let submission = self.draft.to_submission(ids);
        match api.create_job(submission).await {
            Ok(body) => {
                info!("Job posted: {}", body);
                self.message = FormMessage::Posted;
                self.reset();
                SubmitOutcome::Posted(body)
            }
            Err(e) => {
                error!("Error posting job: {:#}", e);
                self.message = FormMessage::Failed;
                SubmitOutcome::Failed
            }
        }
    }

    fn reset(&mut self) {
        self.draft = JobPostingDraft::default();
    }
}
