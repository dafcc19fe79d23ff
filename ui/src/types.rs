//! Shared types for the agentdeck Web UI
//!
//! These types mirror the agent catalog API request and response structures.

use serde::{Deserialize, Serialize};

use crate::state::{Agent, AgentSubmission, SelectedFile};

/// Generic API response wrapper
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

/// File metadata forwarded to the catalog
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FileRef {
    pub name: String,
    pub size: u64,
    pub content_type: String,
}

impl From<&SelectedFile> for FileRef {
    fn from(file: &SelectedFile) -> Self {
        Self {
            name: file.name.clone(),
            size: file.size,
            content_type: file.content_type.clone(),
        }
    }
}

/// Body of `POST /api/agents`
#[derive(Debug, Clone, Serialize)]
pub struct CreateAgentRequest {
    pub id: String,
    pub name: String,
    pub description: String,
    pub files: Vec<FileRef>,
    pub urls: Vec<String>,
    pub is_recursive: bool,
}

impl CreateAgentRequest {
    /// Pairs a locally created agent with the inputs the form collected.
    pub fn new(agent: &Agent, submission: &AgentSubmission) -> Self {
        Self {
            id: agent.id.clone(),
            name: agent.name.clone(),
            description: agent.description.clone(),
            files: submission.files.iter().map(FileRef::from).collect(),
            urls: submission.urls.clone(),
            is_recursive: submission.recursive,
        }
    }
}

/// Agent as stored by the catalog
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AgentRecord {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub files: Vec<FileRef>,
    #[serde(default)]
    pub urls: Vec<String>,
    #[serde(default)]
    pub is_recursive: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_carries_inert_fields() {
        let agent = Agent {
            id: "1700000000000".to_string(),
            name: "Foo".to_string(),
            description: "docs".to_string(),
        };
        let submission = AgentSubmission {
            name: "Foo".to_string(),
            description: "docs".to_string(),
            files: vec![SelectedFile {
                name: "a.pdf".to_string(),
                size: 10,
                content_type: "application/pdf".to_string(),
            }],
            urls: vec!["https://example.com".to_string()],
            recursive: true,
        };

        let body = serde_json::to_value(CreateAgentRequest::new(&agent, &submission)).unwrap();

        assert_eq!(body["id"], "1700000000000");
        assert_eq!(body["files"][0]["name"], "a.pdf");
        assert_eq!(body["urls"][0], "https://example.com");
        assert_eq!(body["is_recursive"], true);
    }
}
