// Copyright © SoftOboros Technology, Inc.
// SPDX-License-Identifier: MIT
//! Module: error types

use thiserror::Error;

/// Errors raised while generating or loading motions.
#[derive(Debug, Error)]
pub enum MotionError {
    /// A precondition on counts, parity, curves or targets was violated.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Normalization hit a zero or non-finite maximum.
    #[error("degenerate input: {0}")]
    DegenerateInput(String),

    /// Motion sheet JSON could not be parsed.
    #[error("malformed motion sheet: {0}")]
    Json(#[from] serde_json::Error),

    /// Motion sheet could not be read.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl MotionError {
    /// Shorthand for [`MotionError::InvalidArgument`].
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Shorthand for [`MotionError::DegenerateInput`].
    pub fn degenerate(msg: impl Into<String>) -> Self {
        Self::DegenerateInput(msg.into())
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, MotionError>;
