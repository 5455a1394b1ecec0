use actix_session::Session;
use actix_web::{HttpResponse, web};

use crate::config::AppConfig;
use crate::errors::{AppError, render};
use crate::models::catalog::{Catalog, SessionKind};
use crate::templates_structs::{
    CandidateListTemplate, ClassTypeTemplate, FeedbackTemplate, PageContext,
};

/// Candidate roster.
pub async fn list(
    config: web::Data<AppConfig>,
    catalog: web::Data<Catalog>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let ctx = PageContext::build(&session, &config, "/candidates")?;
    render(CandidateListTemplate {
        ctx,
        candidates: catalog.candidates(),
    })
}

/// Session-kind selection for one candidate: each module links to its
/// lecture and social feedback pages.
pub async fn class_type(
    path: web::Path<String>,
    config: web::Data<AppConfig>,
    catalog: web::Data<Catalog>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let candidate_id = path.into_inner();
    let candidate = catalog
        .find_candidate(&candidate_id)
        .ok_or(AppError::NotFound)?;

    let current = format!("/candidate/{candidate_id}/class-type");
    let ctx = PageContext::build(&session, &config, &current)?;
    render(ClassTypeTemplate {
        ctx,
        candidate,
        modules: catalog.modules(),
    })
}

/// Feedback overview for a candidate × module × session kind. Every path
/// segment is validated against the catalog; anything unknown is a 404.
pub async fn feedback(
    path: web::Path<(String, String, String)>,
    config: web::Data<AppConfig>,
    catalog: web::Data<Catalog>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let (candidate_id, module_id, session_type) = path.into_inner();

    let candidate = catalog
        .find_candidate(&candidate_id)
        .ok_or(AppError::NotFound)?;
    let module = catalog.find_module(&module_id).ok_or(AppError::NotFound)?;
    let kind = SessionKind::parse(&session_type).ok_or(AppError::NotFound)?;

    let presentations = module.presentations_of(kind).collect();

    let current = format!("/candidate/{candidate_id}/feedback/{module_id}/{session_type}");
    let ctx = PageContext::build(&session, &config, &current)?;
    render(FeedbackTemplate {
        ctx,
        candidate,
        module,
        kind,
        presentations,
    })
}
