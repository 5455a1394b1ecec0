use actix_session::Session;
use actix_web::{HttpResponse, web};

use crate::config::AppConfig;
use crate::errors::{AppError, render};
use crate::models::catalog::Catalog;
use crate::templates_structs::{DocumentationIndexTemplate, ModuleDetailTemplate, PageContext};

/// Documentation landing page: core module grid plus outside-core programs.
pub async fn index(
    config: web::Data<AppConfig>,
    catalog: web::Data<Catalog>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let ctx = PageContext::build(&session, &config, "/documentation")?;
    render(DocumentationIndexTemplate {
        ctx,
        modules: catalog.modules(),
        programs: catalog.programs(),
    })
}

/// Module detail: ordered presentations with kind and duration badges.
/// Unknown module ids get the 404 page.
pub async fn module_detail(
    path: web::Path<String>,
    config: web::Data<AppConfig>,
    catalog: web::Data<Catalog>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let module_id = path.into_inner();
    let module = catalog.find_module(&module_id).ok_or(AppError::NotFound)?;

    let current = format!("/documentation/{module_id}");
    let ctx = PageContext::build(&session, &config, &current)?;
    render(ModuleDetailTemplate { ctx, module })
}
