pub mod auth_handlers;
pub mod candidate_handlers;
pub mod documentation_handlers;
pub mod ocr_handlers;
pub mod page_handlers;
