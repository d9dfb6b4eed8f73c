// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Numeric kernels.
//!
//! Each kernel has an allocating entry point and an `_into` variant that
//! writes into a caller-owned buffer.

mod softmax_op;

pub use softmax_op::{softmax, softmax_into, softmax_naive, SoftmaxTransform};
