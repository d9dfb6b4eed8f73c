// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for softmax operations.

/// Errors that can occur while computing or configuring a softmax transform.
#[derive(Debug, thiserror::Error)]
pub enum SoftmaxError {
    /// The input sequence cannot be transformed (e.g., it is empty).
    #[error("invalid input for {op}: {detail}")]
    InvalidInput { op: &'static str, detail: String },

    /// A caller-provided output buffer does not match the input length.
    #[error("length mismatch for {op}: input has {expected} elements, output buffer has {actual}")]
    LengthMismatch {
        op: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Configuration could not be read, parsed, or interpreted.
    #[error("configuration error: {0}")]
    Config(String),
}

impl SoftmaxError {
    pub(crate) fn empty_input(op: &'static str) -> Self {
        SoftmaxError::InvalidInput {
            op,
            detail: "input sequence is empty".to_string(),
        }
    }
}
