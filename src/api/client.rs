//! HTTP implementation of [`SearchApi`] on reqwest.

use super::{Endpoints, SearchApi};
use crate::model::ApiError;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

/// Body of the autocomplete endpoint.
#[derive(Debug, Deserialize)]
struct SuggestionsResponse {
    suggestions: Vec<String>,
}

/// Body of the resolve endpoint.
#[derive(Debug, Deserialize)]
struct ResolveResponse {
    query: String,
}

/// Talks to the live endpoints.
#[derive(Debug, Clone)]
pub struct HttpSearchApi {
    client: reqwest::Client,
    endpoints: Endpoints,
}

impl HttpSearchApi {
    /// Build a client sending `user_agent` with every request.
    pub fn new(endpoints: Endpoints, user_agent: &str) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .build()
            .map_err(|source| ApiError::Transport {
                url: endpoints.base_url().to_string(),
                source,
            })?;
        Ok(Self { client, endpoints })
    }

    /// GET `url` and decode its JSON body.
    ///
    /// The status code is not inspected; an error page fails in decoding.
    async fn get_json<T: DeserializeOwned>(&self, url: String) -> Result<T, ApiError> {
        debug!(%url, "GET");
        let transport = |source: reqwest::Error| ApiError::Transport {
            url: url.clone(),
            source,
        };

        let response = self.client.get(&url).send().await.map_err(transport)?;
        let status = response.status();
        let body = response.bytes().await.map_err(transport)?;
        debug!(%url, %status, bytes = body.len(), "response");

        serde_json::from_slice(&body).map_err(|source| ApiError::Decode { url, source })
    }
}

impl SearchApi for HttpSearchApi {
    async fn fetch_suggestions(&self, query: &str) -> Result<Vec<String>, ApiError> {
        let url = self.endpoints.autocomplete_url(query);
        let body: SuggestionsResponse = self.get_json(url).await?;
        Ok(body.suggestions)
    }

    async fn resolve_listing_path(&self, query: &str) -> Result<String, ApiError> {
        let url = self.endpoints.resolve_url(query);
        let body: ResolveResponse = self.get_json(url).await?;
        Ok(body.query)
    }
}
