// src/config.rs
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "devhire.yaml";

const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";
const DEFAULT_LOG_FILE: &str = "/tmp/devhire.log";
const DEFAULT_PLACEHOLDER_ID: u64 = 1;

/// Where the backend lives and which placeholder ids go out with new postings
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub company_id: u64,
    pub recruiter_id: u64,
    /// No timeout when unset
    pub timeout_seconds: Option<u64>,
    pub log_file: PathBuf,
    /// `local` or `production`, picked at load time
    #[serde(skip)]
    pub environment: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            company_id: DEFAULT_PLACEHOLDER_ID,
            recruiter_id: DEFAULT_PLACEHOLDER_ID,
            timeout_seconds: None,
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            environment: "local".to_string(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    local: ClientConfig,
    #[serde(default)]
    production: ClientConfig,
}

impl ClientConfig {
    /// Load `devhire.yaml` from the working directory if present, then apply env overrides
    ///
    /// Runs before logging is set up, so it does not log; the caller reports
    /// `environment` once the subscriber is installed.
    pub fn load() -> Result<Self> {
        Self::load_with(|key| std::env::var(key).ok())
    }

    pub fn load_with<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = lookup("DEVHIRE_ENV")
            .or_else(|| lookup("ENVIRONMENT"))
            .unwrap_or_else(|| "local".to_string());

        let path = PathBuf::from(CONFIG_FILE);
        let mut base = if path.exists() {
            Self::load_from_file(&path, &environment)?
        } else {
            Self::default()
        };
        base.environment = environment;

        base.with_env_overrides(lookup)
    }

    pub fn load_from_file(path: &Path, environment: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_yaml(&content, environment)
            .with_context(|| format!("Failed to parse {}", path.display()))
    }

    pub fn from_yaml(content: &str, environment: &str) -> Result<Self> {
        let file: ConfigFile = serde_yaml::from_str(content)?;
        let mut config = match environment {
            "production" => file.production,
            _ => file.local,
        };
        config.environment = environment.to_string();
        Ok(config.normalized())
    }

    /// Apply `DEVHIRE_*` overrides through `lookup`
    pub fn with_env_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("DEVHIRE_API_URL") {
            self.api_base_url = url;
        }
        if let Some(id) = lookup("DEVHIRE_COMPANY_ID") {
            self.company_id = id
                .parse()
                .context("DEVHIRE_COMPANY_ID must be a non-negative integer")?;
        }
        if let Some(id) = lookup("DEVHIRE_RECRUITER_ID") {
            self.recruiter_id = id
                .parse()
                .context("DEVHIRE_RECRUITER_ID must be a non-negative integer")?;
        }
        if let Some(secs) = lookup("DEVHIRE_TIMEOUT_SECS") {
            self.timeout_seconds = Some(
                secs.parse()
                    .context("DEVHIRE_TIMEOUT_SECS must be a number of seconds")?,
            );
        }
        if let Some(file) = lookup("DEVHIRE_LOG_FILE") {
            self.log_file = PathBuf::from(file);
        }
        Ok(self.normalized())
    }

    fn normalized(mut self) -> Self {
        let trimmed = self.api_base_url.trim().trim_end_matches('/').to_string();
        self.api_base_url = trimmed;
        self
    }

    /// Placeholder ids sent with every new posting
    pub fn placeholder_ids(&self) -> PlaceholderIds {
        PlaceholderIds {
            company_id: self.company_id,
            recruiter_id: self.recruiter_id,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaceholderIds {
    pub company_id: u64,
    pub recruiter_id: u64,
}

impl Default for PlaceholderIds {
    fn default() -> Self {
        Self {
            company_id: DEFAULT_PLACEHOLDER_ID,
            recruiter_id: DEFAULT_PLACEHOLDER_ID,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    const SAMPLE: &str = r#"
local:
  api_base_url: "http://localhost:5000/"
production:
  api_base_url: "https://jobs.example.com"
  company_id: 12
  recruiter_id: 34
  timeout_seconds: 20
"#;

    #[test]
    fn test_defaults_use_single_endpoint() {
        let config = ClientConfig::default();
        assert_eq!(config.api_base_url, "http://localhost:5000");
        assert_eq!(config.placeholder_ids(), PlaceholderIds::default());
        assert_eq!(config.timeout_seconds, None);
    }

    #[test]
    fn test_from_yaml_selects_environment() {
        let local = ClientConfig::from_yaml(SAMPLE, "local").unwrap();
        assert_eq!(local.api_base_url, "http://localhost:5000");
        assert_eq!(local.company_id, 1);

        let prod = ClientConfig::from_yaml(SAMPLE, "production").unwrap();
        assert_eq!(prod.api_base_url, "https://jobs.example.com");
        assert_eq!(prod.company_id, 12);
        assert_eq!(prod.recruiter_id, 34);
        assert_eq!(prod.timeout_seconds, Some(20));
        assert_eq!(prod.environment, "production");
        assert_eq!(prod.log_file, PathBuf::from(DEFAULT_LOG_FILE));
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = [
            ("DEVHIRE_API_URL", "http://127.0.0.1:9999/"),
            ("DEVHIRE_RECRUITER_ID", "7"),
        ]
        .into_iter()
        .collect();

        let config = ClientConfig::default()
            .with_env_overrides(|key| env.get(key).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.api_base_url, "http://127.0.0.1:9999");
        assert_eq!(config.recruiter_id, 7);
        assert_eq!(config.company_id, 1);
    }

    #[test]
    fn test_load_with_reports_selected_environment() {
        let config = ClientConfig::load_with(|key| match key {
            "ENVIRONMENT" => Some("production".to_string()),
            "DEVHIRE_API_URL" => Some("http://jobs.internal:8080".to_string()),
            _ => None,
        })
        .unwrap();

        assert_eq!(config.environment, "production");
        assert_eq!(config.api_base_url, "http://jobs.internal:8080");
    }

    #[test]
    fn test_bad_env_override_is_an_error() {
        let result = ClientConfig::default().with_env_overrides(|key| {
            (key == "DEVHIRE_COMPANY_ID").then(|| "acme".to_string())
        });
        assert!(result.is_err());
    }
}
