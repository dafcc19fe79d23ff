use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::config::CatalogLimits;
use crate::domain::{AgentCatalog, AgentRecord, AgentSummary, CatalogError, CreateAgentRequest};

#[derive(Default)]
struct CatalogState {
    agents: Vec<AgentRecord>,
    last_id: i64,
}

impl CatalogState {
    fn contains(&self, id: &str) -> bool {
        self.agents.iter().any(|a| a.id == id)
    }

    /// Millisecond timestamp ids, bumped past the previous id and any
    /// client-supplied id already in use.
    fn next_id(&mut self, now_ms: i64) -> String {
        let mut candidate = now_ms.max(self.last_id + 1);
        while self.contains(&candidate.to_string()) {
            candidate += 1;
        }
        self.last_id = candidate;
        candidate.to_string()
    }
}

/// Process-lifetime agent catalog. Nothing is persisted.
#[derive(Clone)]
pub struct InMemoryAgentCatalog {
    state: Arc<RwLock<CatalogState>>,
    limits: CatalogLimits,
}

impl InMemoryAgentCatalog {
    pub fn new(limits: CatalogLimits) -> Self {
        Self {
            state: Arc::new(RwLock::new(CatalogState::default())),
            limits,
        }
    }
}

impl Default for InMemoryAgentCatalog {
    fn default() -> Self {
        Self::new(CatalogLimits::default())
    }
}

#[async_trait]
impl AgentCatalog for InMemoryAgentCatalog {
    async fn list(&self) -> Vec<AgentSummary> {
        let state = self.state.read().await;
        state.agents.iter().map(AgentSummary::from).collect()
    }

    async fn get(&self, id: &str) -> Result<AgentRecord, CatalogError> {
        let state = self.state.read().await;
        state
            .agents
            .iter()
            .find(|a| a.id == id)
            .cloned()
            .ok_or_else(|| CatalogError::NotFound { id: id.to_string() })
    }

    async fn create(&self, request: CreateAgentRequest) -> Result<AgentRecord, CatalogError> {
        request.validate(&self.limits)?;

        let mut state = self.state.write().await;
        if state.agents.len() >= self.limits.max_agents {
            return Err(CatalogError::LimitExceeded(format!(
                "catalog already holds {} agents",
                self.limits.max_agents
            )));
        }

        let now = Utc::now();
        let id = match request.id {
            Some(id) => {
                let id = id.trim().to_string();
                if state.contains(&id) {
                    return Err(CatalogError::Duplicate { id });
                }
                id
            }
            None => state.next_id(now.timestamp_millis()),
        };

        let record = AgentRecord {
            id,
            name: request.name.trim().to_string(),
            description: request.description,
            files: request.files,
            urls: request.urls,
            is_recursive: request.is_recursive,
            created_at: now,
        };
        state.agents.push(record.clone());

        info!(
            "Registered agent '{}' ({}) with {} file(s) and {} URL(s)",
            record.name,
            record.id,
            record.files.len(),
            record.urls.len()
        );
        Ok(record)
    }

    async fn delete(&self, id: &str) -> Result<AgentRecord, CatalogError> {
        let mut state = self.state.write().await;
        let index = state
            .agents
            .iter()
            .position(|a| a.id == id)
            .ok_or_else(|| CatalogError::NotFound { id: id.to_string() })?;

        let removed = state.agents.remove(index);
        debug!("Removed agent '{}' ({})", removed.name, removed.id);
        Ok(removed)
    }

    async fn count(&self) -> usize {
        self.state.read().await.agents.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FileRef;

    fn request(id: Option<&str>, name: &str) -> CreateAgentRequest {
        CreateAgentRequest {
            id: id.map(str::to_string),
            name: name.to_string(),
            description: "docs".to_string(),
            files: vec![FileRef {
                name: "guide.pdf".to_string(),
                size: 2048,
                content_type: "application/pdf".to_string(),
            }],
            urls: vec!["https://example.com".to_string()],
            is_recursive: true,
        }
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let catalog = InMemoryAgentCatalog::default();

        let created = catalog.create(request(None, " Foo ")).await.unwrap();
        let fetched = catalog.get(&created.id).await.unwrap();

        assert_eq!(fetched.name, "Foo");
        assert_eq!(fetched.files.len(), 1);
        assert!(fetched.is_recursive);
    }

    #[tokio::test]
    async fn test_generated_ids_are_unique() {
        let catalog = InMemoryAgentCatalog::default();

        let mut ids = Vec::new();
        for i in 0..20 {
            ids.push(catalog.create(request(None, &format!("agent {i}"))).await.unwrap().id);
        }
        ids.sort();
        ids.dedup();

        assert_eq!(ids.len(), 20);
    }

    #[tokio::test]
    async fn test_client_id_is_kept_and_duplicates_rejected() {
        let catalog = InMemoryAgentCatalog::default();

        let created = catalog.create(request(Some("1700000000000"), "Foo")).await.unwrap();
        assert_eq!(created.id, "1700000000000");

        let err = catalog.create(request(Some("1700000000000"), "Bar")).await.unwrap_err();
        assert!(matches!(err, CatalogError::Duplicate { .. }));
        assert_eq!(catalog.count().await, 1);
    }

    #[tokio::test]
    async fn test_generated_id_skips_client_ids() {
        let catalog = InMemoryAgentCatalog::default();
        let far_future = (Utc::now().timestamp_millis() + 60_000).to_string();
        catalog.create(request(Some(&far_future), "Foo")).await.unwrap();

        let mut state = catalog.state.write().await;
        state.last_id = far_future.parse::<i64>().unwrap() - 1;
        let id = state.next_id(0);

        assert_ne!(id, far_future);
    }

    #[tokio::test]
    async fn test_delete_keeps_order_of_others() {
        let catalog = InMemoryAgentCatalog::default();
        for id in ["1", "2", "3"] {
            catalog.create(request(Some(id), &format!("agent {id}"))).await.unwrap();
        }

        let removed = catalog.delete("2").await.unwrap();

        assert_eq!(removed.id, "2");
        let ids: Vec<_> = catalog.list().await.into_iter().map(|a| a.id).collect();
        assert_eq!(ids, vec!["1", "3"]);
        assert!(matches!(
            catalog.delete("2").await,
            Err(CatalogError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_max_agents_limit() {
        let catalog = InMemoryAgentCatalog::new(CatalogLimits {
            max_agents: 1,
            ..CatalogLimits::default()
        });
        catalog.create(request(None, "Foo")).await.unwrap();

        let err = catalog.create(request(None, "Bar")).await.unwrap_err();
        assert!(matches!(err, CatalogError::LimitExceeded(_)));
    }
}
