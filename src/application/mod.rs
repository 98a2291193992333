pub mod app_error;
pub mod page_templates;
pub mod use_cases;
