// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `softmax apply` command: transform one sequence and print the distribution.

use std::path::PathBuf;

use anyhow::Context;
use softmax_core::{Distribution, Stability, TransformConfig};

/// JSON shape emitted by `--json`.
#[derive(Debug, serde::Serialize)]
pub struct ApplyReport<'a> {
    pub stability: Stability,
    pub input: &'a [f64],
    pub output: &'a Distribution,
    pub sum: f64,
}

pub fn execute(
    mut config: TransformConfig,
    values: Vec<String>,
    input: Option<PathBuf>,
    stability: Option<String>,
    precision: Option<usize>,
    json: bool,
) -> anyhow::Result<()> {
    if let Some(name) = stability {
        config.stability = name.parse()?;
    }
    if let Some(p) = precision {
        config.precision = p;
    }

    let x = super::read_values(&values, input)?;
    let transform = config.create_transform();
    tracing::info!(len = x.len(), transform = transform.name(), "applying softmax");

    let y = transform.apply(&x).with_context(|| format!("{} failed", transform.name()))?;

    if !y.is_finite() {
        tracing::warn!("output contains non-finite values; try --stability max-shifted");
    }

    if json {
        let report = ApplyReport {
            stability: config.stability,
            input: &x,
            output: &y,
            sum: y.sum(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_table(&x, &y, config.precision));
    }
    Ok(())
}

/// Renders one row per element followed by the sum.
fn render_table(x: &[f64], y: &Distribution, precision: usize) -> String {
    let mut out = String::new();
    out.push_str(&format!("  {:<6} {:>16} {:>16}\n", "Idx", "Input", "Probability"));
    out.push_str(&format!("  {}\n", "-".repeat(40)));
    for (i, (xi, yi)) in x.iter().zip(y.iter()).enumerate() {
        out.push_str(&format!(
            "  {:<6} {:>16} {:>16.prec$}\n",
            i,
            xi,
            yi,
            prec = precision
        ));
    }
    out.push_str(&format!("  {}\n", "-".repeat(40)));
    out.push_str(&format!(
        "  {:<6} {:>16} {:>16.prec$}\n",
        "sum",
        "",
        y.sum(),
        prec = precision
    ));
    out
}
