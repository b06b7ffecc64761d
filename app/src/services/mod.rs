// bluetick/src/services/mod.rs

pub mod admin_credential;
pub mod markdown;
pub mod notify_mock;
pub mod order_ids;
