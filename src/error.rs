//! Error types for round operations.
//!
//! Every error here marks a structural invariant violation, a logic defect
//! in the state machine rather than a recoverable condition. There are no
//! external failure sources inside the simulation.

use thiserror::Error;

/// Errors that can occur during hand replenishment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PullError {
    /// Hand sizes differ before replenishment.
    #[error("hand sizes differ before replenishment")]
    HandSizeMismatch,
}

/// Errors that can occur during trick resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TrickError {
    /// A play was requested from an empty hand.
    #[error("play requested from an empty hand")]
    EmptyHand,
}

/// Errors that can occur while playing out a full round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// Replenishment failed.
    #[error(transparent)]
    Pull(#[from] PullError),
    /// Trick resolution failed.
    #[error(transparent)]
    Trick(#[from] TrickError),
}
