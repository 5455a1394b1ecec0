use askama::Template;

use super::PageContext;
use crate::models::catalog::{Candidate, Module, Presentation, SessionKind};

#[derive(Template)]
#[template(path = "candidates/list.html")]
pub struct CandidateListTemplate<'a> {
    pub ctx: PageContext,
    pub candidates: &'a [Candidate],
}

#[derive(Template)]
#[template(path = "candidates/class_type.html")]
pub struct ClassTypeTemplate<'a> {
    pub ctx: PageContext,
    pub candidate: &'a Candidate,
    pub modules: &'a [Module],
}

#[derive(Template)]
#[template(path = "candidates/feedback.html")]
pub struct FeedbackTemplate<'a> {
    pub ctx: PageContext,
    pub candidate: &'a Candidate,
    pub module: &'a Module,
    pub kind: SessionKind,
    pub presentations: Vec<&'a Presentation>,
}
