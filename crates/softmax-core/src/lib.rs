// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # softmax-core
//!
//! Softmax over one-dimensional `f64` sequences.
//!
//! This crate provides:
//! - [`SoftmaxTransform`]: the transform, parameterised by a [`Stability`] mode.
//! - [`softmax`], [`softmax_naive`], [`softmax_into`]: free-function entry points.
//! - [`Distribution`]: the owned output, same length as the input.
//! - [`TransformConfig`]: TOML-backed configuration.
//!
//! # Numerical stability
//! [`Stability::Naive`] reproduces direct exponentiation and overflows for
//! inputs above roughly `709.78`. [`Stability::MaxShifted`] (the default)
//! subtracts the maximum first and never overflows for finite input.
//!
//! # Design Goals
//! - Pure functions: no shared state, safe to call from any thread.
//! - Empty input is an explicit [`SoftmaxError::InvalidInput`], never `NaN`.
//! - Clean error types via `thiserror`.

mod config;
mod distribution;
mod error;
mod ops;
mod stability;

pub use config::TransformConfig;
pub use distribution::Distribution;
pub use error::SoftmaxError;
pub use ops::{softmax, softmax_into, softmax_naive, SoftmaxTransform};
pub use stability::Stability;
