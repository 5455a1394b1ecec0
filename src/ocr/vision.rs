//! Google Cloud Vision client: one `images:annotate` POST per extraction.

use std::path::Path;
use std::time::Instant;

use base64::{Engine as _, engine::general_purpose};
use serde::Deserialize;
use serde_json::json;

use super::{OcrError, OcrResult, ServiceInfo};

pub const SERVICE_NAME: &str = "Google Cloud Vision API";
const SERVICE_DESCRIPTION: &str =
    "Google's OCR service with high accuracy for text detection";
const DEFAULT_ENDPOINT: &str = "https://vision.googleapis.com";

/// Placeholder score reported on success; the TEXT_DETECTION response
/// carries no usable scalar confidence.
const PLACEHOLDER_CONFIDENCE: f64 = 0.95;

/// Injectable adapter around the Vision text-detection endpoint.
///
/// Holds no shared mutable state; concurrent calls are independent. An
/// absent credential is a valid, detectable state — `extract_image` then
/// fails with [`OcrError::Configuration`] without touching the network.
#[derive(Clone)]
pub struct VisionClient {
    http: reqwest::Client,
    api_key: Option<String>,
    endpoint: String,
}

impl VisionClient {
    pub fn new(http: reqwest::Client, api_key: Option<String>) -> Self {
        Self::with_endpoint(http, api_key, DEFAULT_ENDPOINT)
    }

    /// Endpoint override for tests pointing at a local mock server.
    pub fn with_endpoint(
        http: reqwest::Client,
        api_key: Option<String>,
        endpoint: impl Into<String>,
    ) -> Self {
        Self {
            http,
            api_key: api_key.filter(|k| !k.is_empty()),
            endpoint: endpoint.into(),
        }
    }

    pub fn from_env(http: reqwest::Client) -> Self {
        let api_key = std::env::var("GOOGLE_VISION_API_KEY").ok();
        Self::new(http, api_key)
    }

    /// True iff a credential is configured.
    pub fn is_available(&self) -> bool {
        self.api_key.is_some()
    }

    /// Static descriptive metadata; no network access.
    pub fn service_info(&self) -> ServiceInfo {
        ServiceInfo {
            name: SERVICE_NAME,
            is_available: self.is_available(),
            description: SERVICE_DESCRIPTION,
        }
    }

    /// Read a whole image file into memory and extract its text.
    /// An unreadable file fails with [`OcrError::Io`] before any network I/O.
    pub async fn extract_file(&self, path: &Path) -> Result<OcrResult, OcrError> {
        if !self.is_available() {
            return Err(OcrError::Configuration);
        }
        let bytes = std::fs::read(path)?;
        self.extract_image(&bytes).await
    }

    /// Extract text from in-memory image bytes with a single annotate call.
    pub async fn extract_image(&self, image: &[u8]) -> Result<OcrResult, OcrError> {
        let api_key = self.api_key.as_deref().ok_or(OcrError::Configuration)?;

        let started = Instant::now();
        let content = general_purpose::STANDARD.encode(image);

        let body = json!({
            "requests": [{
                "image": { "content": content },
                "features": [{ "type": "TEXT_DETECTION", "maxResults": 1 }]
            }]
        });

        let url = format!("{}/v1/images:annotate", self.endpoint);
        let response = self
            .http
            .post(&url)
            .query(&[("key", api_key)])
            .json(&body)
            .send()
            .await
            .map_err(|e| OcrError::Provider(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let reason = status.canonical_reason().unwrap_or("unknown status");
            let detail = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|b| b.error)
                .map(|e| e.message)
                .unwrap_or_else(|| "unknown error".to_string());
            return Err(OcrError::Provider(format!("{reason} - {detail}")));
        }

        let parsed: AnnotateResponse = response
            .json()
            .await
            .map_err(|e| OcrError::Provider(format!("malformed provider response: {e}")))?;

        let first = parsed.responses.into_iter().next().unwrap_or_default();

        if let Some(err) = first.error {
            return Err(OcrError::Provider(err.message));
        }

        let text = first
            .text_annotations
            .first()
            .map(|a| a.description.trim().to_string())
            .filter(|t| !t.is_empty())
            .ok_or(OcrError::NoTextDetected)?;

        let processing_time_ms = started.elapsed().as_millis() as u64;
        log::info!(
            "Vision text extraction succeeded: {} chars in {}ms",
            text.len(),
            processing_time_ms
        );

        Ok(OcrResult {
            text,
            confidence: PLACEHOLDER_CONFIDENCE,
            service: SERVICE_NAME,
            processing_time_ms,
        })
    }
}

// Wire shapes for the annotate response. Unknown fields are ignored.

#[derive(Debug, Default, Deserialize)]
struct AnnotateResponse {
    #[serde(default)]
    responses: Vec<ImageResponse>,
}

#[derive(Debug, Default, Deserialize)]
struct ImageResponse {
    error: Option<ProviderStatus>,
    #[serde(rename = "textAnnotations", default)]
    text_annotations: Vec<TextAnnotation>,
}

#[derive(Debug, Deserialize)]
struct ProviderStatus {
    #[allow(dead_code)]
    #[serde(default)]
    code: i64,
    message: String,
}

#[derive(Debug, Deserialize)]
struct TextAnnotation {
    description: String,
}

/// Body shape Google uses for non-2xx responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<ProviderStatus>,
}
