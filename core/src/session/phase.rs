//! Picker session phases and the transitions allowed between them.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// No list materialised.
    Idle,
    /// Gathering task data from collaborators.
    Building,
    /// Items and action provider are materialised.
    Ready,
    /// Handed to the picker widget.
    Presenting,
}

#[derive(Debug, Error)]
pub enum TransitionError {
    #[error("Invalid transition from {from:?} to {to:?}")]
    InvalidTransition {
        from: SessionPhase,
        to: SessionPhase,
    },
}

pub struct PhaseTransition;

impl PhaseTransition {
    pub fn validate(from: SessionPhase, to: SessionPhase) -> Result<(), TransitionError> {
        let is_valid = match (from, to) {
            (SessionPhase::Idle, SessionPhase::Building) => true,
            (SessionPhase::Building, SessionPhase::Ready) => true,
            (SessionPhase::Ready, SessionPhase::Presenting) => true,
            // Closing, or abandoning a build that failed.
            (
                SessionPhase::Building | SessionPhase::Ready | SessionPhase::Presenting,
                SessionPhase::Idle,
            ) => true,
            _ => false,
        };

        if is_valid {
            Ok(())
        } else {
            Err(TransitionError::InvalidTransition { from, to })
        }
    }
}
