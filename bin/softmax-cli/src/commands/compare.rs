// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `softmax compare` command: naive vs max-shifted, row by row.
//!
//! Rows where the two disagree (a `NaN` on either side, or an absolute
//! difference above [`DIVERGENCE_TOLERANCE`]) are flagged with `!`.

use std::path::PathBuf;

use softmax_core::{Distribution, SoftmaxTransform, Stability, TransformConfig};

/// Largest absolute difference still reported as agreement.
pub const DIVERGENCE_TOLERANCE: f64 = 1e-12;

pub fn execute(
    mut config: TransformConfig,
    values: Vec<String>,
    input: Option<PathBuf>,
    precision: Option<usize>,
) -> anyhow::Result<()> {
    if let Some(p) = precision {
        config.precision = p;
    }
    let x = super::read_values(&values, input)?;

    let naive = SoftmaxTransform::new(Stability::Naive).apply(&x)?;
    let stable = SoftmaxTransform::new(Stability::MaxShifted).apply(&x)?;

    let diverged = count_divergent(&naive, &stable);
    if diverged > 0 {
        tracing::warn!(diverged, "naive and max-shifted softmax disagree");
    }

    print!("{}", render_comparison(&x, &naive, &stable, config.precision));
    Ok(())
}

/// Renders the side-by-side table, the sums, and a divergence summary if any.
fn render_comparison(
    x: &[f64],
    naive: &Distribution,
    stable: &Distribution,
    prec: usize,
) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "  {:<6} {:>16} {:>16} {:>16}\n",
        "Idx", "Input", "naive", "max-shifted"
    ));
    out.push_str(&format!("  {}\n", "-".repeat(60)));

    for (i, ((xi, a), b)) in x.iter().zip(naive.iter()).zip(stable.iter()).enumerate() {
        let flag = if diverges(*a, *b) { " !" } else { "" };
        out.push_str(&format!("  {i:<6} {xi:>16} {a:>16.prec$} {b:>16.prec$}{flag}\n"));
    }

    out.push_str(&format!("  {}\n", "-".repeat(60)));
    out.push_str(&format!(
        "  {:<6} {:>16} {:>16.prec$} {:>16.prec$}\n",
        "sum",
        "",
        naive.sum(),
        stable.sum()
    ));

    let diverged = count_divergent(naive, stable);
    if diverged > 0 {
        let n = x.len();
        out.push_str(&format!("\n  {diverged} of {n} entries diverge (naive normalizer out of range).\n"));
    }
    out
}

fn count_divergent(naive: &Distribution, stable: &Distribution) -> usize {
    naive.iter().zip(stable.iter()).filter(|(a, b)| diverges(**a, **b)).count()
}

fn diverges(a: f64, b: f64) -> bool {
    a.is_nan() || b.is_nan() || (a - b).abs() > DIVERGENCE_TOLERANCE
}
