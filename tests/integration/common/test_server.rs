use agentdeck::adapters::agent_catalog::InMemoryAgentCatalog;
use agentdeck::config::CatalogLimits;
use std::net::SocketAddr;
use std::sync::Arc;

pub struct TestServer {
    pub addr: SocketAddr,
    pub base_url: String,
}

impl TestServer {
    pub async fn new() -> Self {
        Self::with_limits(CatalogLimits::default()).await
    }

    pub async fn with_limits(limits: CatalogLimits) -> Self {
        let catalog = Arc::new(InMemoryAgentCatalog::new(limits));
        let app = agentdeck::create_app(catalog);

        // Start server on random port
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        // Wait for server to be ready
        tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;

        TestServer { addr, base_url }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}
