// bluetick/src/lib.rs

//! Bluetick: the verification storefront service.
//!
//! Package catalog, checkout hand-off, the fashion studio queue, the article
//! reader and the admin dashboard, all held in memory per visitor session.
//! Multi-step work runs as `tickflow` flows.

pub mod admin;
pub mod ai;
pub mod checkout;
pub mod config;
pub mod errors;
pub mod models;
pub mod pipelines;
pub mod reader;
pub mod services;
pub mod state;
pub mod store;
pub mod studio;
pub mod web;

pub use crate::config::AppConfig;
pub use crate::errors::{AppError, Result};
pub use crate::state::AppState;
