//! API client for the agent catalog

use crate::types::*;
use gloo_net::http::Request;

const API_BASE: &str = "/api";

/// Register an agent with the catalog
pub async fn create_agent(request: &CreateAgentRequest) -> Result<AgentRecord, String> {
    let url = format!("{}/agents", API_BASE);
    post_json::<CreateAgentRequest, AgentRecord>(&url, request).await
}

/// Remove an agent from the catalog
pub async fn delete_agent(id: &str) -> Result<(), String> {
    let url = format!("{}/agents/{}", API_BASE, id);
    delete_request(&url).await
}

async fn post_json<T: serde::Serialize, R: serde::de::DeserializeOwned>(
    url: &str,
    body: &T,
) -> Result<R, String> {
    let response = Request::post(url)
        .json(body)
        .map_err(|e| format!("Failed to serialize body: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    let api_response: ApiResponse<R> = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    if api_response.success {
        api_response.data.ok_or_else(|| "No data in response".to_string())
    } else {
        Err(api_response.error.unwrap_or_else(|| "Unknown error".to_string()))
    }
}

async fn delete_request(url: &str) -> Result<(), String> {
    let response = Request::delete(url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    let api_response: ApiResponse<()> = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    if api_response.success {
        Ok(())
    } else {
        Err(api_response.error.unwrap_or_else(|| "Unknown error".to_string()))
    }
}
