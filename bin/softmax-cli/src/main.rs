// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # softmax
//!
//! Command-line interface for `softmax-core`.
//!
//! ## Usage
//! ```bash
//! # Transform values given on the command line
//! softmax apply 1 2 3
//!
//! # Read values from a file (or "-" for stdin), reference (naive) behaviour, JSON output
//! softmax apply --input logits.txt --stability naive --json
//!
//! # Show where naive and max-shifted softmax disagree
//! softmax compare 1000 1
//! ```

mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "softmax",
    about = "Softmax over real-valued sequences with selectable numerical stability",
    version,
    author
)]
struct Cli {
    /// Path to a TOML configuration file (CLI flags take precedence).
    #[arg(short, long, global = true)]
    config: Option<std::path::PathBuf>,

    /// Enable verbose logging (repeat for more: -v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply softmax to a sequence of numbers.
    Apply {
        /// Input values (comma- or whitespace-separated).
        #[arg(allow_negative_numbers = true)]
        values: Vec<String>,

        /// Read values from a file instead ("-" for stdin).
        #[arg(short, long)]
        input: Option<std::path::PathBuf>,

        /// Stability mode: naive (reference) or max-shifted.
        #[arg(short, long)]
        stability: Option<String>,

        /// Decimal places to print.
        #[arg(short, long)]
        precision: Option<usize>,

        /// Emit a JSON object instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// Compare naive and max-shifted softmax side by side.
    Compare {
        /// Input values (comma- or whitespace-separated).
        #[arg(allow_negative_numbers = true)]
        values: Vec<String>,

        /// Read values from a file instead ("-" for stdin).
        #[arg(short, long)]
        input: Option<std::path::PathBuf>,

        /// Decimal places to print.
        #[arg(short, long)]
        precision: Option<usize>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    commands::init_tracing(cli.verbose);

    let config = commands::load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Apply {
            values,
            input,
            stability,
            precision,
            json,
        } => commands::apply::execute(config, values, input, stability, precision, json),
        Commands::Compare {
            values,
            input,
            precision,
        } => commands::compare::execute(config, values, input, precision),
    }
}
