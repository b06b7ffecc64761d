// bluetick/src/pipelines/mod.rs

//! Defines and registers the flows the service runs on `tickflow`.

use crate::errors::AppError;
use std::sync::Arc;
use tickflow::Flows;

pub mod checkout_pipeline;
pub mod contexts;
pub mod fashion_pipeline;

/// Registers every flow. Called once while building `AppState`.
pub fn register_all_pipelines(flows: &Arc<Flows<AppError>>) {
  tracing::info!("Registering flows...");
  checkout_pipeline::register_checkout_pipeline(flows);
  fashion_pipeline::register_fashion_job_pipeline(flows);
  tracing::info!("All application flows registered.");
}
