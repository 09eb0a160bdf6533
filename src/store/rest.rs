//! REST client for the hosted event store.
//!
//! The backend is a hosted Postgres exposing its tables over a PostgREST
//! API. Rows live in the `events` table; authentication is key-based, the
//! same key as `apikey` header and bearer token on every request.

use reqwest::Method;
use serde::Deserialize;

use mtlcal_core::error::{StoreError, StoreResult};
use mtlcal_core::event::{Event, NewEvent};

use crate::config::StoreConfig;
use crate::store::EventStore;

pub struct RestStore {
    http: reqwest::Client,
    base_url: String,
    key: String,
}

/// Error envelope the backend returns on non-2xx responses.
#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

impl RestStore {
    pub fn new(config: &StoreConfig) -> Self {
        RestStore {
            http: reqwest::Client::new(),
            base_url: config.url.trim_end_matches('/').to_string(),
            key: config.key.clone(),
        }
    }

    fn events_url(&self) -> String {
        format!("{}/rest/v1/events", self.base_url)
    }

    fn list_url(&self) -> String {
        format!("{}?select=*", self.events_url())
    }

    fn delete_url(&self, id: i64) -> String {
        format!("{}?id=eq.{}", self.events_url(), id)
    }

    fn request(&self, method: Method, url: String) -> reqwest::RequestBuilder {
        self.http
            .request(method, url)
            .header("apikey", &self.key)
            .bearer_auth(&self.key)
    }

    /// Extract the backend's error message, falling back to the status code.
    async fn error_message(response: reqwest::Response) -> String {
        let status = response.status();
        match response.json::<ErrorBody>().await {
            Ok(body) => body.message,
            Err(_) => format!("store returned {status}"),
        }
    }
}

impl EventStore for RestStore {
    async fn list_all(&self) -> StoreResult<Vec<Event>> {
        let response = self
            .request(Method::GET, self.list_url())
            .send()
            .await
            .map_err(|e| StoreError::Read(e.to_string()))?;

        if !response.status().is_success() {
            return Err(StoreError::Read(Self::error_message(response).await));
        }

        response
            .json()
            .await
            .map_err(|e| StoreError::Read(e.to_string()))
    }

    async fn insert(&self, draft: &NewEvent) -> StoreResult<Event> {
        // PostgREST inserts take an array of rows and echo the created rows
        // back when asked for a representation.
        let response = self
            .request(Method::POST, self.events_url())
            .header("Prefer", "return=representation")
            .json(&[draft])
            .send()
            .await
            .map_err(|e| StoreError::Write(e.to_string()))?;

        if !response.status().is_success() {
            return Err(StoreError::Write(Self::error_message(response).await));
        }

        let rows: Vec<Event> = response
            .json()
            .await
            .map_err(|e| StoreError::Write(e.to_string()))?;

        rows.into_iter()
            .next()
            .ok_or_else(|| StoreError::Write("store returned no created row".to_string()))
    }

    async fn delete_by_id(&self, id: i64) -> StoreResult<()> {
        let response = self
            .request(Method::DELETE, self.delete_url(id))
            .send()
            .await
            .map_err(|e| StoreError::Write(e.to_string()))?;

        if !response.status().is_success() {
            return Err(StoreError::Write(Self::error_message(response).await));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> RestStore {
        RestStore::new(&StoreConfig {
            url: "https://demo.supabase.co/".to_string(),
            key: "anon-123".to_string(),
        })
    }

    #[test]
    fn urls_target_the_events_table() {
        let store = store();
        // Trailing slash on the configured url must not double up
        assert_eq!(
            store.list_url(),
            "https://demo.supabase.co/rest/v1/events?select=*"
        );
        assert_eq!(
            store.delete_url(7),
            "https://demo.supabase.co/rest/v1/events?id=eq.7"
        );
    }

    #[test]
    fn error_body_parses_postgrest_envelope() {
        let body: ErrorBody =
            serde_json::from_str(r#"{"message": "permission denied", "code": "42501"}"#).unwrap();
        assert_eq!(body.message, "permission denied");
    }
}
