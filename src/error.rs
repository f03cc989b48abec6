// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, FinoraError>;

/// Failures surfaced by the library layer.
///
/// None of these are retried internally; the command layer reports them and
/// abandons the current operation.
#[derive(Debug, Error)]
pub enum FinoraError {
    /// Network or HTTP failure reaching the sheet, the model or the search API.
    #[error("transport error: {0}")]
    Transport(String),

    /// The transaction source answered with something that is not the
    /// eight-column row layout.
    #[error("schema error: {0}")]
    Schema(String),

    /// The chat-completion call failed or produced nothing usable.
    #[error("answer generation failed: {0}")]
    AnswerGeneration(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl FinoraError {
    pub(crate) fn transport(context: &str, err: impl std::fmt::Display) -> Self {
        FinoraError::Transport(format!("{context}: {err}"))
    }
}
