//! Agent catalog domain types and port

pub mod error;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::config::CatalogLimits;
pub use error::CatalogError;

/// Metadata of a file attached to an agent. Contents are never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRef {
    pub name: String,
    #[serde(default)]
    pub size: u64,
    #[serde(default)]
    pub content_type: String,
}

/// An agent as held by the catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentRecord {
    pub id: String,
    pub name: String,
    pub description: String,
    pub files: Vec<FileRef>,
    pub urls: Vec<String>,
    pub is_recursive: bool,
    pub created_at: DateTime<Utc>,
}

/// List entry returned by `GET /api/agents`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentSummary {
    pub id: String,
    pub name: String,
    pub description: String,
    pub file_count: usize,
    pub url_count: usize,
}

impl From<&AgentRecord> for AgentSummary {
    fn from(record: &AgentRecord) -> Self {
        Self {
            id: record.id.clone(),
            name: record.name.clone(),
            description: record.description.clone(),
            file_count: record.files.len(),
            url_count: record.urls.len(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAgentRequest {
    /// Client-chosen id; generated by the catalog when absent
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub files: Vec<FileRef>,
    #[serde(default)]
    pub urls: Vec<String>,
    #[serde(default)]
    pub is_recursive: bool,
}

impl CreateAgentRequest {
    /// Checks the request against the same rules the creation form applies,
    /// plus the configured limits.
    pub fn validate(&self, limits: &CatalogLimits) -> Result<(), CatalogError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(CatalogError::Validation("name is required".to_string()));
        }
        if name.chars().count() > limits.max_name_length {
            return Err(CatalogError::LimitExceeded(format!(
                "name is longer than {} characters",
                limits.max_name_length
            )));
        }
        if self.id.as_deref().is_some_and(|id| id.trim().is_empty()) {
            return Err(CatalogError::Validation("id must not be blank".to_string()));
        }

        let sources = self.files.len() + self.urls.len();
        if sources == 0 {
            return Err(CatalogError::Validation(
                "at least one file or URL is required".to_string(),
            ));
        }
        if sources > limits.max_sources {
            return Err(CatalogError::LimitExceeded(format!(
                "{} sources given, at most {} allowed",
                sources, limits.max_sources
            )));
        }

        if let Some(bad) = self.urls.iter().find(|u| Url::parse(u).is_err()) {
            return Err(CatalogError::Validation(format!("invalid URL: {}", bad)));
        }
        if self.files.iter().any(|f| f.name.trim().is_empty()) {
            return Err(CatalogError::Validation("file name must not be empty".to_string()));
        }

        Ok(())
    }
}

/// Storage port for agents
#[async_trait]
pub trait AgentCatalog: Send + Sync {
    /// All agents in creation order
    async fn list(&self) -> Vec<AgentSummary>;
    async fn get(&self, id: &str) -> Result<AgentRecord, CatalogError>;
    async fn create(&self, request: CreateAgentRequest) -> Result<AgentRecord, CatalogError>;
    async fn delete(&self, id: &str) -> Result<AgentRecord, CatalogError>;
    async fn count(&self) -> usize;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: &str, urls: &[&str]) -> CreateAgentRequest {
        CreateAgentRequest {
            id: None,
            name: name.to_string(),
            description: String::new(),
            files: vec![],
            urls: urls.iter().map(|u| u.to_string()).collect(),
            is_recursive: false,
        }
    }

    #[test]
    fn test_valid_request_passes() {
        let limits = CatalogLimits::default();
        assert!(request("Foo", &["https://example.com"]).validate(&limits).is_ok());
    }

    #[test]
    fn test_blank_name_is_rejected() {
        let limits = CatalogLimits::default();
        let err = request("  ", &["https://example.com"]).validate(&limits).unwrap_err();
        assert!(matches!(err, CatalogError::Validation(_)));
    }

    #[test]
    fn test_missing_sources_are_rejected() {
        let limits = CatalogLimits::default();
        let err = request("Foo", &[]).validate(&limits).unwrap_err();
        assert!(err.to_string().contains("at least one file or URL"));
    }

    #[test]
    fn test_relative_url_is_rejected() {
        let limits = CatalogLimits::default();
        let err = request("Foo", &["not a url"]).validate(&limits).unwrap_err();
        assert_eq!(err.status_code(), axum::http::StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_limits_are_enforced() {
        let limits = CatalogLimits {
            max_agents: 10,
            max_sources: 1,
            max_name_length: 3,
        };

        let too_long = request("Foobar", &["https://example.com"]).validate(&limits);
        assert!(matches!(too_long, Err(CatalogError::LimitExceeded(_))));

        let too_many = request("Foo", &["https://a.example", "https://b.example"]).validate(&limits);
        assert!(matches!(too_many, Err(CatalogError::LimitExceeded(_))));
    }

    #[test]
    fn test_files_alone_are_enough() {
        let limits = CatalogLimits::default();
        let mut req = request("Foo", &[]);
        req.files.push(FileRef {
            name: "notes.txt".to_string(),
            size: 12,
            content_type: "text/plain".to_string(),
        });
        assert!(req.validate(&limits).is_ok());
    }
}
