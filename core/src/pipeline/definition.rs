// tickflow/src/pipeline/definition.rs

//! The `Pipeline<TData, Err>` struct and its structural edits.

use crate::core::context::Handler;
use crate::core::step::{SkipCondition, StepDef};
use crate::error::FlowError;
use std::collections::HashMap;

/// An ordered list of named steps over a shared `ContextData<TData>`.
///
/// `Err` is what handlers return; it must absorb [`FlowError`] so the runner
/// can report engine-level failures (a required step without handlers) in
/// the same type.
pub struct Pipeline<TData, Err>
where
  TData: 'static + Send + Sync,
  Err: std::error::Error + From<FlowError> + Send + Sync + 'static,
{
  pub(crate) name: String,
  pub(crate) steps: Vec<StepDef<TData>>,

  pub(crate) before: HashMap<String, Vec<Handler<TData, Err>>>,
  pub(crate) on: HashMap<String, Vec<Handler<TData, Err>>>,
  pub(crate) after: HashMap<String, Vec<Handler<TData, Err>>>,
}

impl<TData, Err> Pipeline<TData, Err>
where
  TData: 'static + Send + Sync,
  Err: std::error::Error + From<FlowError> + Send + Sync + 'static,
{
  /// Builds a pipeline from `(name, optional, skip_if)` tuples.
  pub fn new(step_defs: &[(&str, bool, Option<SkipCondition<TData>>)]) -> Self {
    let steps = step_defs
      .iter()
      .map(|(name, optional, skip_cond_opt)| StepDef {
        name: (*name).to_string(),
        optional: *optional,
        skip_if: skip_cond_opt.clone(),
      })
      .collect();
    Self::from_steps(steps)
  }

  pub fn from_steps(steps: Vec<StepDef<TData>>) -> Self {
    Self {
      name: std::any::type_name::<TData>().to_string(),
      steps,
      before: HashMap::new(),
      on: HashMap::new(),
      after: HashMap::new(),
    }
  }

  /// Names the flow in log output. Defaults to the context type name.
  pub fn named(mut self, name: impl Into<String>) -> Self {
    self.name = name.into();
    self
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  pub fn step_names(&self) -> Vec<&str> {
    self.steps.iter().map(|s| s.name.as_str()).collect()
  }

  /// Position of `step_name`. Panics on an unknown name: that is a wiring
  /// mistake in flow setup, not a runtime condition.
  pub(crate) fn step_index(&self, step_name: &str) -> usize {
    match self.steps.iter().position(|s| s.name == step_name) {
      Some(idx) => idx,
      None => panic!(
        "tickflow setup error: step '{}' not found in flow '{}'.",
        step_name, self.name
      ),
    }
  }

  fn ensure_step_not_exists(&self, step_name: &str) {
    if self.steps.iter().any(|s| s.name == step_name) {
      panic!(
        "tickflow setup error: step '{}' already exists in flow '{}'.",
        step_name, self.name
      );
    }
  }

  pub fn insert_before_step(&mut self, existing_step_name: &str, step: StepDef<TData>) {
    let idx = self.step_index(existing_step_name);
    self.ensure_step_not_exists(&step.name);
    self.steps.insert(idx, step);
  }

  pub fn insert_after_step(&mut self, existing_step_name: &str, step: StepDef<TData>) {
    let idx = self.step_index(existing_step_name);
    self.ensure_step_not_exists(&step.name);
    self.steps.insert(idx + 1, step);
  }

  /// Removes a step and its handlers. Unknown names are a no-op.
  pub fn remove_step(&mut self, step_name: &str) {
    if let Some(idx) = self.steps.iter().position(|s| s.name == step_name) {
      self.steps.remove(idx);
      self.before.remove(step_name);
      self.on.remove(step_name);
      self.after.remove(step_name);
    }
  }
}
