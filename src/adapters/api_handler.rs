//! REST API handlers for the agent catalog
//!
//! Provides list, fetch, create and delete endpoints used by the Web UI.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Serialize;
use std::sync::Arc;
use tracing::warn;

use crate::domain::{AgentCatalog, AgentRecord, AgentSummary, CatalogError, CreateAgentRequest};

/// Shared application state for API handlers
#[derive(Clone)]
pub struct ApiState {
    pub catalog: Arc<dyn AgentCatalog>,
}

// ============================================================================
// Response Types
// ============================================================================

#[derive(Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }
}

impl<T> ApiResponse<T> {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

impl ApiResponse<()> {
    pub fn ok() -> Self {
        Self {
            success: true,
            data: None,
            error: None,
        }
    }
}

fn error_response<T>(err: CatalogError) -> (StatusCode, Json<ApiResponse<T>>) {
    (err.status_code(), Json(ApiResponse::error(err.to_string())))
}

// ============================================================================
// Agent Endpoints
// ============================================================================

/// GET /api/agents - List all agents
pub async fn list_agents(State(state): State<ApiState>) -> impl IntoResponse {
    let agents: Vec<AgentSummary> = state.catalog.list().await;
    (StatusCode::OK, Json(ApiResponse::success(agents)))
}

/// GET /api/agents/:id - Get a single agent
pub async fn get_agent(
    State(state): State<ApiState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    match state.catalog.get(&id).await {
        Ok(agent) => (StatusCode::OK, Json(ApiResponse::success(agent))),
        Err(e) => error_response::<AgentRecord>(e),
    }
}

/// POST /api/agents - Register a new agent
pub async fn create_agent(
    State(state): State<ApiState>,
    Json(request): Json<CreateAgentRequest>,
) -> impl IntoResponse {
    match state.catalog.create(request).await {
        Ok(agent) => (StatusCode::CREATED, Json(ApiResponse::success(agent))),
        Err(e) => {
            warn!("Rejected agent registration: {}", e);
            error_response::<AgentRecord>(e)
        }
    }
}

/// DELETE /api/agents/:id - Remove an agent
pub async fn delete_agent(
    State(state): State<ApiState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    match state.catalog.delete(&id).await {
        Ok(_) => (StatusCode::OK, Json(ApiResponse::<()>::ok())),
        Err(e) => error_response::<()>(e),
    }
}
