use askama::Template;

use super::PageContext;
use crate::models::catalog::{Module, Program};

#[derive(Template)]
#[template(path = "documentation/index.html")]
pub struct DocumentationIndexTemplate<'a> {
    pub ctx: PageContext,
    pub modules: &'a [Module],
    pub programs: &'a [Program],
}

#[derive(Template)]
#[template(path = "documentation/module.html")]
pub struct ModuleDetailTemplate<'a> {
    pub ctx: PageContext,
    pub module: &'a Module,
}
