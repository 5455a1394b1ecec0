use askama::Template;

use super::PageContext;
use crate::ocr::ServiceInfo;

#[derive(Template)]
#[template(path = "tools/ocr.html")]
pub struct OcrToolTemplate {
    pub ctx: PageContext,
    pub info: ServiceInfo,
}
