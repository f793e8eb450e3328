//! Error types for sequence construction and execution.
//!
//! This module defines [`SequenceError`], the one error type the engine
//! originates, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - A failing step operation never crosses the step boundary as itself:
//!   its full detail is logged at debug level and the caller sees
//!   [`SequenceError::StepFailed`] carrying the string form of the
//!   original failure.
//! - Lookup misses from selective runs keep their own variants; they are
//!   never folded into `StepFailed`.

use thiserror::Error;

/// Core error type for sequence operations.
#[derive(Debug, Error)]
pub enum SequenceError {
    /// A step descriptor was rejected at construction time.
    #[error("invalid step: {message}")]
    InvalidStep { message: String },

    /// A step's operation failed during execution.
    #[error("step '{step}' failed: {message}")]
    StepFailed { step: String, message: String },

    /// A selective run named a step the sequence does not contain.
    #[error("no step named '{step}' in sequence '{sequence}'")]
    UnknownStep { sequence: String, step: String },

    /// A selective run named a sequence the runner does not contain.
    #[error("no sequence named '{sequence}'")]
    UnknownSequence { sequence: String },
}

/// Result type alias for sequence operations.
pub type Result<T> = std::result::Result<T, SequenceError>;
