use actix_session::Session;
use actix_web::{HttpResponse, web};
use base64::{Engine as _, engine::general_purpose};
use serde::Deserialize;
use serde_json::json;

use crate::config::AppConfig;
use crate::errors::{AppError, render};
use crate::ocr::{OcrError, VisionClient};
use crate::templates_structs::{OcrToolTemplate, PageContext};

/// OCR utility page: file picker plus a result panel.
pub async fn page(
    config: web::Data<AppConfig>,
    vision: web::Data<VisionClient>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let ctx = PageContext::build(&session, &config, "/tools/ocr")?;
    render(OcrToolTemplate {
        ctx,
        info: vision.service_info(),
    })
}

/// JSON request body; `content` is the base64 image produced client-side.
#[derive(Deserialize)]
pub struct ExtractRequest {
    pub filename: String,
    pub content: String,
}

/// JSON API: extract text from an uploaded image.
///
/// Success is the serialized `OcrResult`; failures map the four error
/// kinds onto distinct statuses so the page can branch on them:
/// configuration 503, io 400, provider 502, no_text_detected 422.
pub async fn extract(
    vision: web::Data<VisionClient>,
    payload: web::Json<ExtractRequest>,
) -> HttpResponse {
    let image = match general_purpose::STANDARD.decode(&payload.content) {
        Ok(bytes) => bytes,
        Err(e) => {
            return HttpResponse::BadRequest().json(json!({
                "error": { "kind": "bad_request", "message": format!("invalid base64 image payload: {e}") }
            }));
        }
    };

    log::info!(
        "OCR extraction requested for {} ({} bytes)",
        payload.filename,
        image.len()
    );

    match vision.extract_image(&image).await {
        Ok(result) => HttpResponse::Ok().json(result),
        Err(err) => {
            let status = match err {
                OcrError::Configuration => actix_web::http::StatusCode::SERVICE_UNAVAILABLE,
                OcrError::Io(_) => actix_web::http::StatusCode::BAD_REQUEST,
                OcrError::Provider(_) => actix_web::http::StatusCode::BAD_GATEWAY,
                OcrError::NoTextDetected => actix_web::http::StatusCode::UNPROCESSABLE_ENTITY,
            };
            log::warn!("OCR extraction failed for {}: {err}", payload.filename);
            HttpResponse::build(status).json(json!({
                "error": { "kind": err.kind(), "message": err.to_string() }
            }))
        }
    }
}
