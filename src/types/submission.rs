// src/types/submission.rs
use anyhow::{Context, Result};
use reqwest::multipart::{Form, Part};

use crate::logo::Logo;

pub const LOGO_PART: &str = "companyLogo";

/// One multipart job-creation payload: text parts in wire order plus the optional logo
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobSubmission {
    pub fields: Vec<(&'static str, String)>,
    pub logo: Option<Logo>,
}

impl JobSubmission {
    /// Value of a text part, if the submission carries it
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn field_names(&self) -> Vec<&'static str> {
        self.fields.iter().map(|(key, _)| *key).collect()
    }

    pub fn into_form(self) -> Result<Form> {
        let mut form = Form::new();
        for (name, value) in self.fields {
            form = form.text(name, value);
        }

        if let Some(logo) = self.logo {
            let mime = logo.mime_type();
            let part = Part::bytes(logo.bytes)
                .file_name(logo.file_name)
                .mime_str(mime)
                .context("Failed to create logo multipart")?;
            form = form.part(LOGO_PART, part);
        }

        Ok(form)
    }
}
