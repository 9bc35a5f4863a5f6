// Adapters layer: concrete CardStore backends for the publish/fetch gateway.

use crate::domain::model::CardRecord;
use crate::domain::ports::CardStore;
use crate::utils::error::{CardError, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::collections::HashMap;
use std::sync::RwLock;
use std::time::Duration;

const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Document store reached over REST: records live at
/// `{base}/{collection}/{slug}` as JSON documents. A 404 on read maps to
/// "not found"; any other non-success status is a store failure. Requests
/// carry a conservative timeout and expiry surfaces as a failure.
#[derive(Debug, Clone)]
pub struct HttpDocumentStore {
    base_url: String,
    collection: String,
    client: Client,
}

impl HttpDocumentStore {
    pub fn new(base_url: &str, collection: &str) -> Self {
        Self::with_timeout(base_url, collection, DEFAULT_REQUEST_TIMEOUT)
    }

    pub fn with_timeout(base_url: &str, collection: &str, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            collection: collection.to_string(),
            client,
        }
    }

    fn document_url(&self, slug: &str) -> String {
        format!("{}/{}/{}", self.base_url, self.collection, slug)
    }
}

#[async_trait]
impl CardStore for HttpDocumentStore {
    async fn put(&self, slug: &str, card: &CardRecord) -> Result<()> {
        let url = self.document_url(slug);
        tracing::debug!("PUT {}", url);

        let response = self.client.put(&url).json(card).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(CardError::StoreError {
                status: status.as_u16(),
                message: format!("write to '{}' rejected", url),
            });
        }
        Ok(())
    }

    async fn get(&self, slug: &str) -> Result<Option<CardRecord>> {
        let url = self.document_url(slug);
        tracing::debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(CardError::StoreError {
                status: status.as_u16(),
                message: format!("read from '{}' failed", url),
            });
        }

        let card: CardRecord = response.json().await?;
        Ok(Some(card))
    }
}

/// Process-local store for demos and tests, the counterpart of
/// [`HttpDocumentStore`] the way a local directory stands in for a bucket.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    records: RwLock<HashMap<String, CardRecord>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CardStore for InMemoryStore {
    async fn put(&self, slug: &str, card: &CardRecord) -> Result<()> {
        let mut records = self.records.write().map_err(|_| CardError::StoreError {
            status: 0,
            message: "in-memory store lock poisoned".to_string(),
        })?;
        records.insert(slug.to_string(), card.clone());
        Ok(())
    }

    async fn get(&self, slug: &str) -> Result<Option<CardRecord>> {
        let records = self.records.read().map_err(|_| CardError::StoreError {
            status: 0,
            message: "in-memory store lock poisoned".to_string(),
        })?;
        Ok(records.get(slug).cloned())
    }
}
