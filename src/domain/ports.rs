use crate::domain::model::CardRecord;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Keyed read/write port against the external document store. The store is
/// an opaque collaborator: records are replaced wholesale, never patched.
///
/// `get` returns `Ok(None)` for a key that was never written; `Err` is
/// reserved for transport/store failures so callers can tell the two apart.
#[async_trait]
pub trait CardStore: Send + Sync {
    async fn put(&self, slug: &str, card: &CardRecord) -> Result<()>;
    async fn get(&self, slug: &str) -> Result<Option<CardRecord>>;
}
