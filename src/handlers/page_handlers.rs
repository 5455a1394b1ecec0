use actix_session::Session;
use actix_web::{HttpResponse, web};
use chrono::{Local, Timelike};

use crate::config::AppConfig;
use crate::errors::{AppError, render};
use crate::models::catalog::Catalog;
use crate::templates_structs::{
    AboutTemplate, HomeTemplate, PageContext, ProgramsTemplate, VisionTemplate,
};

fn time_greeting() -> String {
    let hour = Local::now().hour();
    let period = match hour {
        5..=11 => "Good morning",
        12..=16 => "Good afternoon",
        _ => "Good evening",
    };
    format!("{period} — welcome to Vanguard")
}

pub async fn home(
    config: web::Data<AppConfig>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let ctx = PageContext::build(&session, &config, "/")?;
    let greeting = time_greeting();
    render(HomeTemplate { ctx, greeting })
}

pub async fn about(
    config: web::Data<AppConfig>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let ctx = PageContext::build(&session, &config, "/about")?;
    render(AboutTemplate { ctx })
}

pub async fn vision(
    config: web::Data<AppConfig>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let ctx = PageContext::build(&session, &config, "/vision")?;
    render(VisionTemplate { ctx })
}

pub async fn programs(
    config: web::Data<AppConfig>,
    catalog: web::Data<Catalog>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let ctx = PageContext::build(&session, &config, "/programs")?;
    render(ProgramsTemplate {
        ctx,
        modules: catalog.modules(),
        programs: catalog.programs(),
    })
}
