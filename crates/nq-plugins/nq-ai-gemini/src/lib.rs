//! # nq-ai-gemini
//! Gemini-backed implementation of `Recommender`.
//!
//! Talks to the `generateContent` REST endpoint. Recommendation calls
//! constrain the response to a JSON array of strings via the response
//! schema; description calls take the freeform candidate text. Every
//! failure maps to a typed [`RecommendError`] so callers degrade instead
//! of erroring — the provider is enrichment, never a correctness
//! dependency.

use std::time::Duration;

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use nq_core::error::RecommendError;
use nq_core::models::{Property, PropertyDraft, UserPreferences};
use nq_core::traits::Recommender;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

/// Cap on how many ranked ids a recommendation may return.
const MAX_RECOMMENDATIONS: usize = 3;

pub struct GeminiClient {
    http: reqwest::Client,
    api_key: Option<SecretString>,
    model: String,
    base_url: String,
}

impl GeminiClient {
    /// `api_key = None` builds a permanently-unconfigured client: every
    /// call returns `RecommendError::Unconfigured` without touching the
    /// network.
    pub fn new(api_key: Option<SecretString>, model: impl Into<String>) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(15))
            .build()?;
        Ok(Self {
            http,
            api_key,
            model: model.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    async fn generate(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<String, RecommendError> {
        let key = self
            .api_key
            .as_ref()
            .filter(|k| !k.expose_secret().is_empty())
            .ok_or(RecommendError::Unconfigured)?;

        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        );
        debug!(model = %self.model, "calling generateContent");

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", key.expose_secret())
            .json(request)
            .send()
            .await
            .map_err(|err| RecommendError::Transport(err.to_string()))?
            .error_for_status()
            .map_err(|err| RecommendError::Transport(err.to_string()))?;

        let body: GenerateContentResponse = response
            .json()
            .await
            .map_err(|err| RecommendError::Malformed(err.to_string()))?;

        extract_text(&body).ok_or(RecommendError::Empty)
    }
}

#[async_trait]
impl Recommender for GeminiClient {
    async fn recommend(
        &self,
        preferences: &UserPreferences,
        catalog: &[Property],
    ) -> Result<Vec<String>, RecommendError> {
        let request = GenerateContentRequest {
            contents: vec![Content::from_text(build_recommend_prompt(
                preferences,
                catalog,
            )?)],
            generation_config: Some(GenerationConfig::string_array()),
        };

        let text = self.generate(&request).await.inspect_err(|err| {
            warn!(%err, "recommendation call failed");
        })?;

        let ids: Vec<String> = serde_json::from_str(&text)
            .map_err(|err| RecommendError::Malformed(err.to_string()))?;
        Ok(sanitize_ids(ids, catalog))
    }

    async fn describe(&self, draft: &PropertyDraft) -> Result<String, RecommendError> {
        let request = GenerateContentRequest {
            contents: vec![Content::from_text(build_describe_prompt(draft))],
            generation_config: None,
        };
        self.generate(&request).await.inspect_err(|err| {
            warn!(%err, "description call failed");
        })
    }
}

/// Minimal projection of a listing, bounding the request size.
#[derive(Debug, Serialize)]
struct PropertySnapshot<'a> {
    id: &'a str,
    title: &'a str,
    price: i64,
    area: &'a str,
    #[serde(rename = "type")]
    property_type: String,
    sqft: u32,
    bedrooms: u8,
}

impl<'a> From<&'a Property> for PropertySnapshot<'a> {
    fn from(p: &'a Property) -> Self {
        Self {
            id: &p.id,
            title: &p.title,
            price: p.price,
            area: &p.area,
            property_type: p.property_type.to_string(),
            sqft: p.sqft,
            bedrooms: p.bedrooms,
        }
    }
}

fn build_recommend_prompt(
    preferences: &UserPreferences,
    catalog: &[Property],
) -> Result<String, RecommendError> {
    let snapshot: Vec<PropertySnapshot<'_>> = catalog.iter().map(Into::into).collect();
    let preferences = serde_json::to_string(preferences)
        .map_err(|err| RecommendError::Malformed(err.to_string()))?;
    let snapshot = serde_json::to_string(&snapshot)
        .map_err(|err| RecommendError::Malformed(err.to_string()))?;
    Ok(format!(
        "Renter Preferences: {preferences}. \
         Available Properties: {snapshot}. \
         Based on the preferences, return an array of up to {MAX_RECOMMENDATIONS} \
         property IDs that are the best matches."
    ))
}

fn build_describe_prompt(draft: &PropertyDraft) -> String {
    format!(
        "Write a short, catchy and professional real estate listing description \
         for a {} in {}. Features: {} Bedrooms, {} Bathrooms, {} Sqft, {}. Title: {}.",
        draft.property_type,
        draft.area,
        draft.bedrooms,
        draft.bathrooms,
        draft.sqft,
        draft.furnishing_status,
        draft.title,
    )
}

/// Drops ids the model invented, dedupes, and truncates to the cap. Every
/// returned id is guaranteed to exist in `catalog`.
fn sanitize_ids(ids: Vec<String>, catalog: &[Property]) -> Vec<String> {
    let mut seen = Vec::with_capacity(MAX_RECOMMENDATIONS);
    for id in ids {
        if seen.len() == MAX_RECOMMENDATIONS {
            break;
        }
        if catalog.iter().any(|p| p.id == id) && !seen.contains(&id) {
            seen.push(id);
        }
    }
    seen
}

fn extract_text(response: &GenerateContentResponse) -> Option<String> {
    let text = response
        .candidates
        .first()?
        .content
        .parts
        .first()?
        .text
        .trim();
    (!text.is_empty()).then(|| text.to_string())
}

// ── Wire types ──────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

impl Content {
    fn from_text(text: String) -> Self {
        Self {
            parts: vec![Part { text }],
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: &'static str,
    response_schema: serde_json::Value,
}

impl GenerationConfig {
    /// Constrains the response to a JSON array of strings.
    fn string_array() -> Self {
        Self {
            response_mime_type: "application/json",
            response_schema: serde_json::json!({
                "type": "ARRAY",
                "items": { "type": "STRING" }
            }),
        }
    }
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}
