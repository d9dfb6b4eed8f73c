// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Transform configuration loaded from TOML files or constructed programmatically.
//!
//! # TOML Format
//! ```toml
//! stability = "max-shifted"
//! precision = 6
//! ```

use std::path::Path;

use crate::{SoftmaxError, SoftmaxTransform, Stability};

/// Configuration for a [`SoftmaxTransform`] and how its output is rendered.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TransformConfig {
    /// Stability mode: `"naive"` or `"max-shifted"`.
    pub stability: Stability,
    /// Decimal places used when printing probabilities.
    pub precision: usize,
}

impl TransformConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, SoftmaxError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            SoftmaxError::Config(format!("cannot read config '{}': {e}", path.display()))
        })?;
        Self::from_toml(&content)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, SoftmaxError> {
        toml::from_str(toml_str).map_err(|e| SoftmaxError::Config(e.to_string()))
    }

    /// Serialises configuration to TOML.
    pub fn to_toml(&self) -> Result<String, SoftmaxError> {
        toml::to_string_pretty(self)
            .map_err(|e| SoftmaxError::Config(format!("TOML serialise error: {e}")))
    }

    /// Creates the transform described by this config.
    pub fn create_transform(&self) -> SoftmaxTransform {
        SoftmaxTransform::new(self.stability)
    }
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            stability: Stability::MaxShifted,
            precision: 6,
        }
    }
}
