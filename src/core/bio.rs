use reqwest::Client;
use std::time::Duration;

/// Env var carrying the text-generation API credential. Absence is a valid
/// configuration state, not an error.
pub const BIO_API_KEY_ENV: &str = "CARDLINK_GENAI_API_KEY";

/// What the editor shows when no credential is configured.
pub const BIO_PLACEHOLDER: &str =
    "AI bio suggestions are unavailable. Add a short professional bio by hand.";

/// Fixed failure messages, returned instead of errors so callers never need
/// a failure-handling branch beyond reading the text.
pub const BIO_FAILURE_MESSAGE: &str =
    "Error generating bio. Please check your connection or try later.";
pub const BIO_EMPTY_MESSAGE: &str = "Bio generation failed. Please try again.";

// Fixed sampling parameters for every suggestion request.
pub const BIO_TEMPERATURE: f64 = 0.7;
pub const BIO_TOP_P: f64 = 0.8;
pub const BIO_TOP_K: u32 = 40;

const BIO_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the external text-generation service. Construct it once at
/// startup via [`BioSuggestionClient::from_env`]; a `None` there means the
/// capability is statically absent and callers use [`BIO_PLACEHOLDER`]
/// without ever touching the network.
#[derive(Debug, Clone)]
pub struct BioSuggestionClient {
    endpoint: String,
    api_key: String,
    client: Client,
}

impl BioSuggestionClient {
    pub fn new(endpoint: &str, api_key: &str) -> Self {
        let client = Client::builder()
            .timeout(BIO_REQUEST_TIMEOUT)
            .build()
            .unwrap_or_default();
        Self {
            endpoint: endpoint.to_string(),
            api_key: api_key.to_string(),
            client,
        }
    }

    /// Capability check, done once: `None` when the credential env var is
    /// unset or blank.
    pub fn from_env(endpoint: &str) -> Option<Self> {
        match std::env::var(BIO_API_KEY_ENV) {
            Ok(key) if !key.trim().is_empty() => Some(Self::new(endpoint, &key)),
            _ => {
                tracing::debug!("{} not set, bio suggestions disabled", BIO_API_KEY_ENV);
                None
            }
        }
    }

    /// Asks the service for a short professional bio. Never fails: any
    /// transport error, bad status or malformed body collapses into a fixed
    /// human-readable message. The returned text is informational only; the
    /// caller decides whether to write it into the card.
    pub async fn suggest_bio(
        &self,
        name: &str,
        title: &str,
        company: &str,
        style_keywords: &str,
    ) -> String {
        let prompt = format!(
            "Generate a professional, catchy, and concise bio (max 150 characters) \
             for a digital business card.\nName: {}\nJob Title: {}\nCompany: {}\nAdditional Info: {}",
            name, title, company, style_keywords
        );

        let body = serde_json::json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
            "generationConfig": {
                "temperature": BIO_TEMPERATURE,
                "topP": BIO_TOP_P,
                "topK": BIO_TOP_K,
            }
        });

        tracing::debug!("Requesting bio suggestion from {}", self.endpoint);

        let response = match self
            .client
            .post(&self.endpoint)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
        {
            Ok(resp) => resp,
            Err(e) => {
                tracing::warn!("Bio suggestion request failed: {}", e);
                return BIO_FAILURE_MESSAGE.to_string();
            }
        };

        if !response.status().is_success() {
            tracing::warn!("Bio suggestion service returned {}", response.status());
            return BIO_FAILURE_MESSAGE.to_string();
        }

        let payload: serde_json::Value = match response.json().await {
            Ok(v) => v,
            Err(e) => {
                tracing::warn!("Bio suggestion response unreadable: {}", e);
                return BIO_FAILURE_MESSAGE.to_string();
            }
        };

        match extract_text(&payload) {
            Some(text) if !text.is_empty() => text,
            _ => BIO_EMPTY_MESSAGE.to_string(),
        }
    }
}

fn extract_text(payload: &serde_json::Value) -> Option<String> {
    let text = payload
        .get("candidates")?
        .get(0)?
        .get("content")?
        .get("parts")?
        .get(0)?
        .get("text")?
        .as_str()?;
    Some(text.trim().to_string())
}
