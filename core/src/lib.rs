// tickflow/src/lib.rs

//! Tickflow: a small asynchronous step-pipeline engine.
//!
//! A flow is an ordered list of named steps. Each step can carry `before`,
//! `on` and `after` handlers, a skip condition, and an optional flag.
//! Handlers share a lockable context and decide whether the flow continues
//! or stops. Flows are registered by context type in a [`Flows`] registry.
//!
//! The [`lifecycle`] module adds one-way status transitions for records that
//! move through a fixed set of states (orders, jobs).

pub mod core;
pub mod error;
pub mod lifecycle;
pub mod pipeline;
pub mod registry;

pub use crate::core::context::Handler;
pub use crate::core::context_data::ContextData;
pub use crate::core::control::{PipelineControl, PipelineResult};
pub use crate::core::step::{SkipCondition, StepDef};

pub use crate::pipeline::definition::Pipeline;

pub use crate::error::{FlowError, FlowResult};
pub use crate::lifecycle::{advance, Lifecycle};

pub use crate::registry::Flows;
