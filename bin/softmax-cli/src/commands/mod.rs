// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Subcommand implementations and shared helpers.

pub mod apply;
pub mod compare;

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::Context;
use softmax_core::TransformConfig;
use tracing_subscriber::EnvFilter;

/// Installs a stderr `fmt` subscriber. `RUST_LOG` wins over `-v` when set.
pub fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Loads the TOML config if a path was given, else the defaults.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<TransformConfig> {
    match path {
        Some(p) => {
            let config = TransformConfig::from_file(p)?;
            tracing::info!(path = %p.display(), stability = %config.stability, "loaded config");
            Ok(config)
        }
        None => Ok(TransformConfig::default()),
    }
}

/// Collects input values from positional arguments or from `--input`.
///
/// `--input -` reads stdin. Supplying both sources is an error.
pub fn read_values(args: &[String], input: Option<PathBuf>) -> anyhow::Result<Vec<f64>> {
    let text = match input {
        Some(path) if !args.is_empty() => {
            anyhow::bail!(
                "values given both on the command line and via --input '{}'",
                path.display()
            )
        }
        Some(path) if path.as_os_str() == "-" => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read values from stdin")?;
            buf
        }
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read values from '{}'", path.display()))?,
        None => args.join(" "),
    };
    parse_values(&text)
}

/// Parses reals separated by commas and/or whitespace.
pub fn parse_values(text: &str) -> anyhow::Result<Vec<f64>> {
    text.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|tok| !tok.is_empty())
        .enumerate()
        .map(|(i, tok)| {
            tok.parse::<f64>()
                .with_context(|| format!("value #{} ('{tok}') is not a real number", i + 1))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_mixed_separators() {
        let v = parse_values("1, 2.5\n-3e2\t0").unwrap();
        assert_eq!(v, vec![1.0, 2.5, -300.0, 0.0]);
    }

    #[test]
    fn test_parse_empty() {
        assert!(parse_values("  , \n").unwrap().is_empty());
    }

    #[test]
    fn test_parse_bad_token_reports_position() {
        let err = parse_values("1 2 abc").unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("#3"), "message was: {msg}");
        assert!(msg.contains("abc"), "message was: {msg}");
    }

    #[test]
    fn test_read_values_from_args() {
        let args = vec!["1,2".to_string(), "-3".to_string()];
        assert_eq!(read_values(&args, None).unwrap(), vec![1.0, 2.0, -3.0]);
    }

    #[test]
    fn test_read_values_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "0.5 1.5").unwrap();
        let v = read_values(&[], Some(file.path().to_path_buf())).unwrap();
        assert_eq!(v, vec![0.5, 1.5]);
    }

    #[test]
    fn test_read_values_rejects_both_sources() {
        let args = vec!["1".to_string()];
        assert!(read_values(&args, Some(PathBuf::from("values.txt"))).is_err());
    }

    #[test]
    fn test_load_config_default() {
        assert_eq!(load_config(None).unwrap(), TransformConfig::default());
    }
}
