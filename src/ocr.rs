//! Text extraction from images via an external OCR provider.
//!
//! The adapter is deliberately a single best-effort call: no retries, no
//! internal timeout, no batching. Callers that want resilience wrap it
//! themselves (the injected `reqwest::Client` can carry a timeout).

use serde::Serialize;
use thiserror::Error;

pub mod vision;

pub use vision::VisionClient;

/// The outcome of one successful extraction. Produced once per call,
/// consumed immediately, never cached.
#[derive(Debug, Clone, Serialize)]
pub struct OcrResult {
    /// Full detected text block, trimmed.
    pub text: String,
    /// The provider does not return a usable scalar confidence for this
    /// request shape, so this is a fixed high-confidence placeholder.
    pub confidence: f64,
    pub service: &'static str,
    pub processing_time_ms: u64,
}

/// Static descriptive metadata about the configured provider.
#[derive(Debug, Clone, Serialize)]
pub struct ServiceInfo {
    pub name: &'static str,
    pub is_available: bool,
    pub description: &'static str,
}

/// Failure kinds for one extraction call. The four kinds stay
/// distinguishable so callers can branch: re-prompt for a clearer image on
/// `NoTextDetected`, surface a setup instruction on `Configuration`, and
/// so on. Nothing is retried internally.
#[derive(Debug, Error)]
pub enum OcrError {
    #[error("OCR provider credential not configured; set GOOGLE_VISION_API_KEY")]
    Configuration,

    #[error("failed to read image: {0}")]
    Io(#[from] std::io::Error),

    #[error("text detection provider error: {0}")]
    Provider(String),

    #[error("no text detected in the image")]
    NoTextDetected,
}

impl OcrError {
    /// Stable machine-readable kind tag used in JSON error bodies.
    pub fn kind(&self) -> &'static str {
        match self {
            OcrError::Configuration => "configuration",
            OcrError::Io(_) => "io",
            OcrError::Provider(_) => "provider",
            OcrError::NoTextDetected => "no_text_detected",
        }
    }
}
