// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Softmax over a one-dimensional `f64` sequence.

use crate::{Distribution, SoftmaxError, Stability};

/// Maps a sequence of reals to a probability distribution over the same indices.
///
/// `y[i] = exp(x[i]) / Σ_k exp(x[k])`
///
/// The transform is stateless; the only setting is the [`Stability`] mode.
///
/// # Examples
/// ```
/// use softmax_core::{SoftmaxTransform, Stability};
/// let t = SoftmaxTransform::new(Stability::MaxShifted);
/// let y = t.apply(&[0.0, 0.0]).unwrap();
/// assert_eq!(y.as_slice(), &[0.5, 0.5]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SoftmaxTransform {
    stability: Stability,
}

impl SoftmaxTransform {
    /// Creates a transform using the given stability mode.
    pub fn new(stability: Stability) -> Self {
        Self { stability }
    }

    /// Returns the configured stability mode.
    pub fn stability(&self) -> Stability {
        self.stability
    }

    /// Human-readable name, e.g. `"softmax/max-shifted"`.
    pub fn name(&self) -> &'static str {
        match self.stability {
            Stability::Naive => "softmax/naive",
            Stability::MaxShifted => "softmax/max-shifted",
        }
    }

    /// Computes softmax into a freshly allocated [`Distribution`].
    ///
    /// # Errors
    /// Returns [`SoftmaxError::InvalidInput`] if `input` is empty.
    pub fn apply(&self, input: &[f64]) -> Result<Distribution, SoftmaxError> {
        let mut probs = vec![0.0; input.len()];
        self.apply_into(input, &mut probs)?;
        Ok(Distribution::from_vec(probs))
    }

    /// Computes softmax into a caller-owned buffer of the same length.
    ///
    /// # Errors
    /// Returns [`SoftmaxError::InvalidInput`] if `input` is empty.
    /// Returns [`SoftmaxError::LengthMismatch`] if `output.len() != input.len()`.
    pub fn apply_into(&self, input: &[f64], output: &mut [f64]) -> Result<(), SoftmaxError> {
        let op = self.name();

        if input.is_empty() {
            return Err(SoftmaxError::empty_input(op));
        }

        if input.len() != output.len() {
            return Err(SoftmaxError::LengthMismatch {
                op,
                expected: input.len(),
                actual: output.len(),
            });
        }

        // Naive mode exponentiates the raw values.
        let shift = match self.stability {
            Stability::Naive => 0.0,
            Stability::MaxShifted => input.iter().copied().fold(f64::NEG_INFINITY, f64::max),
        };

        let mut total = 0.0f64;
        for (d, &x) in output.iter_mut().zip(input) {
            let e = (x - shift).exp();
            *d = e;
            total += e;
        }

        if !total.is_finite() || total == 0.0 {
            tracing::debug!(
                op,
                len = input.len(),
                total,
                "softmax normalizer is degenerate; output will contain NaN or zeros"
            );
        }

        for d in output.iter_mut() {
            *d /= total;
        }

        tracing::trace!(op, len = input.len(), "softmax computed");
        Ok(())
    }
}

/// Numerically stable softmax (max-shifted), returning a new [`Distribution`].
///
/// # Errors
/// Returns [`SoftmaxError::InvalidInput`] if `input` is empty.
pub fn softmax(input: &[f64]) -> Result<Distribution, SoftmaxError> {
    SoftmaxTransform::new(Stability::MaxShifted).apply(input)
}

/// Softmax by direct exponentiation, without the max shift.
///
/// Inputs above roughly `709.78` overflow `exp` and poison the normalizer:
/// `[1000.0, 1.0]` yields `[NaN, 0.0]`. When every input is below roughly `-745`
/// the normalizer underflows to `0` and the output is all `NaN`. Neither is an error.
///
/// # Errors
/// Returns [`SoftmaxError::InvalidInput`] if `input` is empty.
pub fn softmax_naive(input: &[f64]) -> Result<Distribution, SoftmaxError> {
    SoftmaxTransform::new(Stability::Naive).apply(input)
}

/// Softmax into a pre-allocated buffer with an explicit stability mode.
///
/// # Errors
/// See [`SoftmaxTransform::apply_into`].
pub fn softmax_into(
    input: &[f64],
    output: &mut [f64],
    stability: Stability,
) -> Result<(), SoftmaxError> {
    SoftmaxTransform::new(stability).apply_into(input, output)
}
