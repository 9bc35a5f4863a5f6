use crate::domain::model::CardRecord;
use crate::domain::ports::CardStore;
use crate::domain::slug::is_valid_slug;
use crate::utils::error::{CardError, Result};
use chrono::{DateTime, Utc};
use std::sync::atomic::{AtomicBool, Ordering};

/// Outcome of a successful publish: where the card now lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishReceipt {
    pub slug: String,
    pub share_url: String,
    pub published_at: DateTime<Utc>,
}

/// The only stateful component: publishes and fetches whole card records
/// keyed by slug against an external [`CardStore`]. Holds the per-session
/// async state (the in-flight publish flag); everything else is passed in.
pub struct CardGateway<S: CardStore> {
    store: S,
    public_origin: String,
    publish_in_flight: AtomicBool,
}

impl<S: CardStore> CardGateway<S> {
    /// `public_origin` is the scheme+host the share link is built from,
    /// e.g. `https://wbify.com`.
    pub fn new(store: S, public_origin: &str) -> Self {
        Self {
            store,
            public_origin: public_origin.trim_end_matches('/').to_string(),
            publish_in_flight: AtomicBool::new(false),
        }
    }

    /// Public link for a published card: `<origin>/card/<slug>`.
    pub fn share_url(&self, slug: &str) -> String {
        format!("{}/card/{}", self.public_origin, slug)
    }

    /// Writes/overwrites the full record at key `card.slug`. Last publisher
    /// wins; there is no reservation or collision detection. Refuses
    /// locally, without touching the store, when the slug is empty or not
    /// in normalized form, or when another publish is still in flight.
    /// Single attempt per call; store failures propagate to the caller.
    pub async fn publish(&self, card: &CardRecord) -> Result<PublishReceipt> {
        if card.slug.is_empty() {
            return Err(CardError::ValidationError {
                message: "cannot publish: card has no custom link (slug)".to_string(),
            });
        }
        if !is_valid_slug(&card.slug) {
            return Err(CardError::ValidationError {
                message: format!("cannot publish: slug {:?} is not normalized", card.slug),
            });
        }
        if self.publish_in_flight.swap(true, Ordering::SeqCst) {
            return Err(CardError::ValidationError {
                message: "a publish is already in progress".to_string(),
            });
        }
        let _guard = InFlightGuard(&self.publish_in_flight);

        tracing::info!("Publishing card at slug '{}'", card.slug);
        self.store.put(&card.slug, card).await?;

        Ok(PublishReceipt {
            slug: card.slug.clone(),
            share_url: self.share_url(&card.slug),
            published_at: Utc::now(),
        })
    }

    /// Fresh point read of the record at `slug`. `Ok(None)` means no card
    /// was ever published there, which is a normal outcome and presented
    /// differently from a transport/store failure.
    pub async fn fetch(&self, slug: &str) -> Result<Option<CardRecord>> {
        tracing::debug!("Fetching card at slug '{}'", slug);
        self.store.get(slug).await
    }
}

// Clears the in-flight flag on every exit path, including store errors.
struct InFlightGuard<'a>(&'a AtomicBool);

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryStore;
    use crate::domain::presets::sample_card;
    use std::sync::Arc;
    use tokio::sync::Notify;

    #[tokio::test]
    async fn test_publish_then_fetch_round_trip() {
        let gateway = CardGateway::new(InMemoryStore::new(), "https://wbify.com");
        let card = sample_card();

        let receipt = gateway.publish(&card).await.unwrap();
        assert_eq!(receipt.slug, "jane-doe");
        assert_eq!(receipt.share_url, "https://wbify.com/card/jane-doe");

        let fetched = gateway.fetch("jane-doe").await.unwrap();
        assert_eq!(fetched, Some(card));
    }

    #[tokio::test]
    async fn test_fetch_unknown_slug_is_none_not_error() {
        let gateway = CardGateway::new(InMemoryStore::new(), "https://wbify.com");
        assert_eq!(gateway.fetch("never-published").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_publish_refuses_empty_slug() {
        let gateway = CardGateway::new(InMemoryStore::new(), "https://wbify.com");
        let mut card = sample_card();
        card.slug = String::new();

        let err = gateway.publish(&card).await.unwrap_err();
        assert!(matches!(err, CardError::ValidationError { .. }));
        // refused locally, nothing written
        assert_eq!(gateway.fetch("").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_publish_refuses_unnormalized_slug() {
        let gateway = CardGateway::new(InMemoryStore::new(), "https://wbify.com");
        let mut card = sample_card();
        card.slug = "Jane--Doe".to_string();

        let err = gateway.publish(&card).await.unwrap_err();
        assert!(matches!(err, CardError::ValidationError { .. }));
    }

    #[tokio::test]
    async fn test_last_write_wins() {
        let gateway = CardGateway::new(InMemoryStore::new(), "https://wbify.com");
        let mut card = sample_card();
        gateway.publish(&card).await.unwrap();

        card.title = "Principal Brand Architect".to_string();
        gateway.publish(&card).await.unwrap();

        let fetched = gateway.fetch("jane-doe").await.unwrap().unwrap();
        assert_eq!(fetched.title, "Principal Brand Architect");
    }

    #[tokio::test]
    async fn test_in_flight_flag_resets_after_publish() {
        let gateway = CardGateway::new(InMemoryStore::new(), "https://wbify.com");
        let card = sample_card();
        gateway.publish(&card).await.unwrap();
        // a second sequential publish must not be blocked by a stale flag
        gateway.publish(&card).await.unwrap();
    }

    // Store whose writes park until released, so a publish can be held
    // mid-flight from the test.
    struct ParkedStore {
        entered: Arc<Notify>,
        release: Arc<Notify>,
    }

    #[async_trait::async_trait]
    impl CardStore for ParkedStore {
        async fn put(&self, _slug: &str, _card: &CardRecord) -> Result<()> {
            self.entered.notify_one();
            self.release.notified().await;
            Ok(())
        }

        async fn get(&self, _slug: &str) -> Result<Option<CardRecord>> {
            Ok(None)
        }
    }

    #[tokio::test]
    async fn test_concurrent_publish_is_refused_while_one_is_pending() {
        let entered = Arc::new(Notify::new());
        let release = Arc::new(Notify::new());
        let gateway = Arc::new(CardGateway::new(
            ParkedStore {
                entered: entered.clone(),
                release: release.clone(),
            },
            "https://wbify.com",
        ));
        let card = sample_card();

        let first = tokio::spawn({
            let gateway = gateway.clone();
            let card = card.clone();
            async move { gateway.publish(&card).await }
        });
        entered.notified().await;

        // first publish is parked inside the store: the trigger is disabled
        let err = gateway.publish(&card).await.unwrap_err();
        assert!(matches!(err, CardError::ValidationError { .. }));

        release.notify_one();
        first.await.unwrap().unwrap();

        // flag cleared once the first publish completed
        release.notify_one();
        gateway.publish(&card).await.unwrap();
    }

    #[test]
    fn test_share_url_trims_trailing_slash() {
        let gateway = CardGateway::new(InMemoryStore::new(), "https://wbify.com/");
        assert_eq!(gateway.share_url("jane-doe"), "https://wbify.com/card/jane-doe");
    }
}
