// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Owned result of a softmax transform.

use std::fmt;

/// A probability distribution produced by [`crate::softmax`] and friends.
///
/// `Distribution` owns a freshly allocated buffer that never aliases the
/// input. Its length always equals the input length, so it is never empty
/// when produced by this crate.
///
/// Under [`crate::Stability::Naive`] the entries may be `NaN` when the
/// normalizer is degenerate: it overflows to `inf` (some input above ~709.78)
/// or every `exp` underflows to `0` (all inputs below ~-745), which makes the
/// whole output `NaN`. Use [`is_finite`](Distribution::is_finite) to check.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(transparent)]
pub struct Distribution {
    probs: Vec<f64>,
}

impl Distribution {
    pub(crate) fn from_vec(probs: Vec<f64>) -> Self {
        Self { probs }
    }

    /// Returns the probabilities as a slice.
    pub fn as_slice(&self) -> &[f64] {
        &self.probs
    }

    /// Number of entries (equal to the input length).
    pub fn len(&self) -> usize {
        self.probs.len()
    }

    /// Returns `true` if the distribution has no entries.
    pub fn is_empty(&self) -> bool {
        self.probs.is_empty()
    }

    /// Sum of all entries. `≈ 1.0` for finite, non-overflowing input.
    pub fn sum(&self) -> f64 {
        self.probs.iter().sum()
    }

    /// Index of the most probable entry.
    ///
    /// Ties resolve to the lowest index; `NaN` entries are skipped. Returns
    /// `None` if every entry is `NaN`.
    pub fn argmax(&self) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (i, &p) in self.probs.iter().enumerate() {
            if p.is_nan() {
                continue;
            }
            match best {
                Some((_, b)) if p <= b => {}
                _ => best = Some((i, p)),
            }
        }
        best.map(|(i, _)| i)
    }

    /// Returns `true` if no entry is `NaN` or infinite.
    pub fn is_finite(&self) -> bool {
        self.probs.iter().all(|p| p.is_finite())
    }

    /// Iterates over the probabilities.
    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.probs.iter()
    }

    /// Consumes the distribution and returns the underlying buffer.
    pub fn into_vec(self) -> Vec<f64> {
        self.probs
    }
}

impl AsRef<[f64]> for Distribution {
    fn as_ref(&self) -> &[f64] {
        &self.probs
    }
}

impl IntoIterator for Distribution {
    type Item = f64;
    type IntoIter = std::vec::IntoIter<f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.probs.into_iter()
    }
}

impl<'a> IntoIterator for &'a Distribution {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.probs.iter()
    }
}

impl fmt::Display for Distribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, p) in self.probs.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            match f.precision() {
                Some(prec) => write!(f, "{p:.prec$}")?,
                None => write!(f, "{p}")?,
            }
        }
        f.write_str("]")
    }
}
