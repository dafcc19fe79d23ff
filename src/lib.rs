//! # agentdeck
//!
//! Web UI for defining agents (named knowledge bundles backed by files or
//! URLs) and chatting with them, plus the in-memory agent catalog service the
//! UI forwards its changes to.
//!
//! The catalog records what the creation form collects. It does not read
//! files, fetch URLs, build an index or run a model, and it keeps nothing
//! across restarts.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use agentdeck::adapters::agent_catalog::InMemoryAgentCatalog;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let catalog = Arc::new(InMemoryAgentCatalog::default());
//!     let app = agentdeck::create_app(catalog);
//!     let listener = tokio::net::TcpListener::bind("127.0.0.1:3000").await?;
//!     axum::serve(listener, app).await?;
//!     Ok(())
//! }
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod domain;

use crate::adapters::api_handler::{self, ApiState};
use crate::adapters::health_handler::HealthHandler;
use crate::adapters::ui_handler::UIHandler;
use crate::domain::AgentCatalog;
use axum::{routing::get, Router};
use std::sync::Arc;

/// Creates the Axum application router with all endpoints configured.
///
/// Health checks live at the root, the catalog API under `/api`, and every
/// other path serves the embedded Web UI.
pub fn create_app(catalog: Arc<dyn AgentCatalog>) -> Router {
    let health_handler = Arc::new(HealthHandler::new(catalog.clone()));

    let health_router = Router::new()
        .route("/health", get({
            let handler = health_handler.clone();
            move || {
                let h = handler.clone();
                async move { h.health().await }
            }
        }))
        .route("/health/live", get({
            let handler = health_handler.clone();
            move || {
                let h = handler.clone();
                async move { h.live().await }
            }
        }));

    let api_router = Router::new()
        .route("/agents", get(api_handler::list_agents).post(api_handler::create_agent))
        .route("/agents/:id", get(api_handler::get_agent).delete(api_handler::delete_agent))
        .with_state(ApiState { catalog });

    health_router
        .nest("/api", api_router)
        .fallback(UIHandler::serve)
        .layer(
            tower_http::cors::CorsLayer::new()
                .allow_origin(tower_http::cors::Any)
                .allow_methods(tower_http::cors::Any)
                .allow_headers(tower_http::cors::Any),
        )
}
