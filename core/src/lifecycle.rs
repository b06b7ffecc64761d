// tickflow/src/lifecycle.rs

//! One-way status machines.
//!
//! A type implementing [`Lifecycle`] names its legal edges; [`advance`] is the
//! only way callers move a status forward, so a record can never drift back
//! to an earlier state.

use crate::error::{FlowError, FlowResult};
use tracing::{event, Level};

pub trait Lifecycle: Copy + PartialEq + std::fmt::Debug {
  /// Whether `self -> next` is a legal edge.
  fn can_advance_to(self, next: Self) -> bool;

  fn label(self) -> &'static str;
}

/// Moves `current` to `next` if the edge is legal.
pub fn advance<S: Lifecycle>(current: &mut S, next: S) -> FlowResult<()> {
  if !current.can_advance_to(next) {
    event!(Level::WARN, from = current.label(), to = next.label(), "Rejected status transition.");
    return Err(FlowError::InvalidTransition {
      from: current.label().to_string(),
      to: next.label().to_string(),
    });
  }
  event!(Level::TRACE, from = current.label(), to = next.label(), "Status advanced.");
  *current = next;
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[derive(Debug, Clone, Copy, PartialEq)]
  enum Light {
    Red,
    Green,
    Off,
  }

  impl Lifecycle for Light {
    fn can_advance_to(self, next: Self) -> bool {
      matches!((self, next), (Light::Red, Light::Green) | (Light::Green, Light::Off))
    }

    fn label(self) -> &'static str {
      match self {
        Light::Red => "red",
        Light::Green => "green",
        Light::Off => "off",
      }
    }
  }

  #[test]
  fn legal_edges_advance() {
    let mut light = Light::Red;
    advance(&mut light, Light::Green).unwrap();
    advance(&mut light, Light::Off).unwrap();
    assert_eq!(light, Light::Off);
  }

  #[test]
  fn backwards_edge_is_rejected_and_state_kept() {
    let mut light = Light::Green;
    let err = advance(&mut light, Light::Red).unwrap_err();
    assert!(matches!(err, FlowError::InvalidTransition { ref from, ref to } if from == "green" && to == "red"));
    assert_eq!(light, Light::Green);
  }
}
