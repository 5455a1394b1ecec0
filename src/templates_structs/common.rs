use askama::Template;

use super::PageContext;
use crate::models::catalog::{Module, Program};

#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    pub error: Option<String>,
    pub app_name: String,
    pub csrf_token: String,
}

#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub ctx: PageContext,
    pub greeting: String,
}

#[derive(Template)]
#[template(path = "about.html")]
pub struct AboutTemplate {
    pub ctx: PageContext,
}

#[derive(Template)]
#[template(path = "vision.html")]
pub struct VisionTemplate {
    pub ctx: PageContext,
}

#[derive(Template)]
#[template(path = "programs.html")]
pub struct ProgramsTemplate<'a> {
    pub ctx: PageContext,
    pub modules: &'a [Module],
    pub programs: &'a [Program],
}
