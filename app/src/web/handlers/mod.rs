// bluetick/src/web/handlers/mod.rs

pub mod admin_handlers;
pub mod ai_handlers;
pub mod article_handlers;
pub mod catalog_handlers;
pub mod checkout_handlers;
pub mod reader_handlers;
pub mod studio_handlers;
