/// IGDB API provider
///
/// Queries are APIcalypse text posted to `<api_url>/<endpoint>`. Authentication uses a
/// Twitch application client ID and an OAuth bearer token.
use crate::{
    error::{AppError, AppResult},
    models::{BuiltQuery, RawRecord},
    services::providers::CatalogProvider,
};
use reqwest::Client as HttpClient;

const CLIENT_ID_HEADER: &str = "Client-ID";

#[derive(Clone)]
pub struct IgdbProvider {
    http_client: HttpClient,
    client_id: String,
    access_token: String,
    api_url: String,
}

impl IgdbProvider {
    pub fn new(client_id: String, access_token: String, api_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            client_id,
            access_token,
            api_url,
        }
    }

    fn endpoint_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.api_url.trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    /// Extracts the candidate list from a response body
    fn parse_candidates(body: &str) -> AppResult<Vec<RawRecord>> {
        let value: serde_json::Value = serde_json::from_str(body).map_err(|e| {
            tracing::error!(error = %e, response = %body, "Failed to parse IGDB response");
            AppError::ExternalApi(format!("Failed to parse IGDB response: {}", e))
        })?;

        match value {
            serde_json::Value::Array(candidates) => Ok(candidates),
            other => {
                tracing::error!(response = %other, "IGDB response is not an array");
                Err(AppError::ExternalApi(
                    "Invalid IGDB response format: expected an array".to_string(),
                ))
            }
        }
    }
}

#[async_trait::async_trait]
impl CatalogProvider for IgdbProvider {
    async fn query(&self, endpoint: &str, query: &BuiltQuery) -> AppResult<Vec<RawRecord>> {
        let url = self.endpoint_url(endpoint);

        let response = self
            .http_client
            .post(&url)
            .header(CLIENT_ID_HEADER, &self.client_id)
            .bearer_auth(&self.access_token)
            .body(query.body.clone())
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "IGDB API returned status {}: {}",
                status, body
            )));
        }

        let response_text = response.text().await?;
        tracing::debug!(response = %response_text, "Raw IGDB API response");

        let candidates = Self::parse_candidates(&response_text)?;

        tracing::info!(
            endpoint = %endpoint,
            search_type = %query.search_type,
            results = candidates.len(),
            provider = self.name(),
            "Catalog query completed"
        );

        Ok(candidates)
    }

    fn name(&self) -> &'static str {
        "igdb"
    }
}
