// src/types/job.rs
//! Closed vocabularies shared by the posting form and the dashboard

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobType {
    #[serde(rename = "Full-time")]
    FullTime,
    #[serde(rename = "Part-time")]
    PartTime,
    #[serde(rename = "Contract")]
    Contract,
}

impl JobType {
    pub const ALL: [JobType; 3] = [Self::FullTime, Self::PartTime, Self::Contract];

    /// Label as shown in the selector and sent on the wire
    pub fn label(&self) -> &'static str {
        match self {
            Self::FullTime => "Full-time",
            Self::PartTime => "Part-time",
            Self::Contract => "Contract",
        }
    }
}

impl fmt::Display for JobType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for JobType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "full-time" | "fulltime" | "full_time" => Ok(Self::FullTime),
            "part-time" | "parttime" | "part_time" => Ok(Self::PartTime),
            "contract" => Ok(Self::Contract),
            _ => anyhow::bail!(
                "Unknown job type: {}. Use Full-time, Part-time or Contract",
                s
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobStatus {
    Open,
    Interviewing,
    Closed,
}

impl JobStatus {
    pub const ALL: [JobStatus; 3] = [Self::Open, Self::Interviewing, Self::Closed];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::Interviewing => "Interviewing",
            Self::Closed => "Closed",
        }
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for JobStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "open" => Ok(Self::Open),
            "interviewing" => Ok(Self::Interviewing),
            "closed" => Ok(Self::Closed),
            _ => anyhow::bail!(
                "Unknown job status: {}. Use Open, Interviewing or Closed",
                s
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_type_labels_parse_back() {
        for job_type in JobType::ALL {
            assert_eq!(job_type.label().parse::<JobType>().unwrap(), job_type);
        }
        assert_eq!("full-time".parse::<JobType>().unwrap(), JobType::FullTime);
        assert!("Internship".parse::<JobType>().is_err());
    }

    #[test]
    fn test_job_status_parse_is_case_insensitive() {
        assert_eq!("closed".parse::<JobStatus>().unwrap(), JobStatus::Closed);
        assert_eq!(" Open ".parse::<JobStatus>().unwrap(), JobStatus::Open);
        assert!("".parse::<JobStatus>().is_err());
    }

    #[test]
    fn test_job_type_serializes_as_label() {
        let json = serde_json::to_string(&JobType::PartTime).unwrap();
        assert_eq!(json, "\"Part-time\"");
    }
}
