// src/types/listing.rs
//! Job records as returned by the recruiter jobs endpoint

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Server-assigned job identifier. The backend may hand out numbers or strings,
/// two ids are equal when they print the same.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum JobId {
    Number(i64),
    Text(String),
}

impl PartialEq for JobId {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => a == b,
            _ => self.to_string() == other.to_string(),
        }
    }
}

impl Eq for JobId {}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for JobId {
    fn from(s: &str) -> Self {
        let s = s.trim();
        s.parse::<i64>()
            .map(Self::Number)
            .unwrap_or_else(|_| Self::Text(s.to_string()))
    }
}

impl FromStr for JobId {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl From<i64> for JobId {
    fn from(n: i64) -> Self {
        Self::Number(n)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobListing {
    pub id: JobId,
    #[serde(default, deserialize_with = "lenient_text")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub company_name: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub location: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub job_status: String,
    #[serde(default, deserialize_with = "lenient_count")]
    pub applications: Option<u64>,
    /// Every other field the backend sends, kept as-is
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl JobListing {
    /// Applications received, missing counts as zero
    pub fn application_count(&self) -> u64 {
        self.applications.unwrap_or(0)
    }
}

// Numbers and booleans display as text, any other non-string shows as empty.
fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => s,
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    })
}

// Counts are whole and non-negative; anything else is treated as absent.
fn lenient_count<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_u64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && *f >= 0.0 && f.fract() == 0.0)
                .filter(|f| *f <= u64::MAX as f64)
                .map(|f| f as u64)
        }),
        Some(Value::String(s)) => s.trim().parse::<u64>().ok(),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_listing_keeps_unknown_fields() {
        let listing: JobListing = serde_json::from_value(json!({
            "id": 7,
            "title": "Backend Engineer",
            "company_name": "DevHire Inc.",
            "location": "Texas",
            "job_status": "Open",
            "applications": 4,
            "salary": "90000",
            "created_at": "2024-01-02"
        }))
        .unwrap();

        assert_eq!(listing.id, JobId::Number(7));
        assert_eq!(listing.application_count(), 4);
        assert_eq!(listing.extra.get("salary"), Some(&json!("90000")));
        assert_eq!(listing.extra.len(), 2);
    }

    #[test]
    fn test_listing_tolerates_missing_and_null_fields() {
        let listing: JobListing = serde_json::from_value(json!({
            "id": "abc",
            "title": null,
            "applications": null
        }))
        .unwrap();

        assert_eq!(listing.title, "");
        assert_eq!(listing.company_name, "");
        assert_eq!(listing.applications, None);
        assert_eq!(listing.application_count(), 0);
    }

    #[test]
    fn test_application_count_from_string_or_garbage() {
        let from_string: JobListing =
            serde_json::from_value(json!({"id": 1, "applications": "12"})).unwrap();
        let from_garbage: JobListing =
            serde_json::from_value(json!({"id": 2, "applications": {"n": 3}})).unwrap();

        assert_eq!(from_string.applications, Some(12));
        assert_eq!(from_garbage.applications, None);
    }

    #[test]
    fn test_non_string_display_fields_do_not_reject_the_list() {
        let listings: Vec<JobListing> = serde_json::from_value(json!([
            {"id": 1, "title": "A"},
            {"id": 2, "title": 12345, "location": true, "company_name": {"n": "x"}}
        ]))
        .unwrap();

        assert_eq!(listings.len(), 2);
        assert_eq!(listings[1].title, "12345");
        assert_eq!(listings[1].location, "true");
        assert_eq!(listings[1].company_name, "");
    }

    #[test]
    fn test_fractional_applications_count_as_absent() {
        let fractional: JobListing =
            serde_json::from_value(json!({"id": 1, "applications": 2.5})).unwrap();
        let whole_float: JobListing =
            serde_json::from_value(json!({"id": 2, "applications": 3.0})).unwrap();

        assert_eq!(fractional.applications, None);
        assert_eq!(whole_float.applications, Some(3));
    }

    #[test]
    fn test_job_id_equality_across_representations() {
        assert_eq!("42".parse::<JobId>().unwrap(), JobId::Number(42));
        assert_eq!(JobId::Text("42".to_string()), JobId::Number(42));
        assert_ne!(JobId::Text("x1".to_string()), JobId::Number(1));
    }
}
