// src/render.rs
//! Plain-text views of the two screens

use std::fmt::Write;

use crate::dashboard::RecruiterDashboard;
use crate::posting::{Field, PostJobForm};

pub const EMPTY_STATE: &str = "You haven't posted any jobs yet.";
pub const POST_FIRST_JOB: &str = "+ Post Your First Job";
pub const POST_JOB: &str = "+ Post a Job";

pub fn job_details_path(id: impl std::fmt::Display) -> String {
    format!("/recruiter/job/{}", id)
}

pub fn render_dashboard(dashboard: &RecruiterDashboard) -> String {
    let metrics = dashboard.metrics();
    let mut out = String::new();

    let _ = writeln!(out, "Recruiter Dashboard");
    let _ = writeln!(out, "{}", "=".repeat(40));
    let _ = writeln!(out, "{:>6}  Jobs Posted", metrics.total_jobs);
    let _ = writeln!(out, "{:>6}  Total Applications", metrics.total_applications);
    let _ = writeln!(out, "Updated Soon  Recent Activity");
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", POST_JOB);
    let _ = writeln!(out);
    let _ = writeln!(out, "Your Job Postings");
    let _ = writeln!(out, "{}", "-".repeat(40));

    if dashboard.is_empty() {
        let _ = writeln!(out, "{}", EMPTY_STATE);
        let _ = writeln!(out, "{}", POST_FIRST_JOB);
        return out;
    }

    for job in dashboard.listings() {
        let _ = writeln!(out, "[{}] {}", job.id, job.title);
        let _ = writeln!(out, "    {} - {}", job.company_name, job.location);
        let _ = writeln!(out, "    Status: {}", job.job_status);
        let _ = writeln!(out, "    Applications: {}", job.application_count());
        let _ = writeln!(out, "    View Details: {}", job_details_path(&job.id));
    }

    out
}

pub fn render_form(form: &PostJobForm) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Post a Job");
    if let Some(message) = form.message().text() {
        let _ = writeln!(out, ">> {}", message);
    }

    let draft = form.draft();
    for field in Field::ALL {
        let marker = if field.is_required() { "*" } else { " " };
        let _ = writeln!(out, "{}{:<28} {}", marker, field.label(), draft.value(field));
    }

    let logo = draft
        .logo
        .as_ref()
        .map(|l| format!("{} ({})", l.file_name, l.mime_type()))
        .unwrap_or_default();
    let _ = writeln!(out, " {:<28} {}", "Company Logo (Optional)", logo);

    out
}
