// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Numerical stability modes for the softmax kernel.

use std::fmt;
use std::str::FromStr;

use crate::SoftmaxError;

/// Selects how the exponentials are computed.
///
/// The two modes agree mathematically. They differ only once `exp(x[i])`
/// leaves the representable `f64` range: overflow above roughly `709.78`, or
/// underflow of every term below roughly `-745`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Stability {
    /// Direct exponentiation: `exp(x[i]) / Σ exp(x[k])`.
    ///
    /// Overflow-prone. An overflowed entry yields `inf / inf = NaN` and the
    /// remaining entries collapse to `0.0`. If every input is below ~-745 all
    /// exponentials underflow to `0`, and the output is `0 / 0 = NaN` throughout.
    #[serde(alias = "reference")]
    Naive,
    /// Subtracts `max(x)` before exponentiating, so the largest exponent is `exp(0) = 1`.
    #[default]
    #[serde(alias = "stable")]
    MaxShifted,
}

impl Stability {
    /// All modes, in declaration order.
    pub const ALL: [Stability; 2] = [Stability::Naive, Stability::MaxShifted];

    /// Returns the canonical config/CLI label for this mode.
    pub fn as_str(self) -> &'static str {
        match self {
            Stability::Naive => "naive",
            Stability::MaxShifted => "max-shifted",
        }
    }
}

impl fmt::Display for Stability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Stability {
    type Err = SoftmaxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "naive" | "reference" => Ok(Stability::Naive),
            "max-shifted" | "stable" => Ok(Stability::MaxShifted),
            other => Err(SoftmaxError::Config(format!(
                "unknown stability mode '{other}'; expected 'naive' or 'max-shifted'"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_max_shifted() {
        assert_eq!(Stability::default(), Stability::MaxShifted);
    }

    #[test]
    fn test_parse_aliases() {
        assert_eq!("naive".parse::<Stability>().unwrap(), Stability::Naive);
        assert_eq!("Reference".parse::<Stability>().unwrap(), Stability::Naive);
        assert_eq!(" stable ".parse::<Stability>().unwrap(), Stability::MaxShifted);
        assert_eq!("MAX-SHIFTED".parse::<Stability>().unwrap(), Stability::MaxShifted);
    }

    #[test]
    fn test_parse_unknown() {
        let err = "log-sum-exp".parse::<Stability>().unwrap_err();
        assert!(matches!(err, SoftmaxError::Config(_)));
        assert!(err.to_string().contains("log-sum-exp"));
    }

    #[test]
    fn test_label_parses_back() {
        for mode in Stability::ALL {
            assert_eq!(mode.as_str().parse::<Stability>().unwrap(), mode);
        }
    }
}
