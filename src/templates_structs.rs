// Template context structures for Askama templates, organized by domain.
// All types are re-exported: `use vanguard::templates_structs::*`

use actix_session::Session;

use crate::auth::csrf;
use crate::auth::session::take_flash;
use crate::config::AppConfig;
use crate::errors::AppError;
use crate::models::nav_item;

/// Common context shared by all gated pages.
/// Templates access these as `ctx.app_name`, `ctx.nav_modules`, etc.
pub struct PageContext {
    pub app_name: String,
    pub csrf_token: String,
    pub flash: Option<String>,
    pub nav_modules: Vec<nav_item::NavModule>,
}

impl PageContext {
    pub fn build(
        session: &Session,
        config: &AppConfig,
        current_path: &str,
    ) -> Result<Self, AppError> {
        let csrf_token = csrf::get_or_create_token(session);
        let flash = take_flash(session);
        let nav_modules = nav_item::find_navigation(current_path);
        Ok(Self {
            app_name: config.app_name.clone(),
            csrf_token,
            flash,
            nav_modules,
        })
    }
}

mod candidate;
mod common;
mod documentation;
mod ocr;

pub use self::candidate::{CandidateListTemplate, ClassTypeTemplate, FeedbackTemplate};
pub use self::common::{
    AboutTemplate, HomeTemplate, LoginTemplate, ProgramsTemplate, VisionTemplate,
};
pub use self::documentation::{DocumentationIndexTemplate, ModuleDetailTemplate};
pub use self::ocr::OcrToolTemplate;
