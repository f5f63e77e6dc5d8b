// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Ledger Harness Developers

//! Logging related stuff

use anyhow::Context;
use tracing::level_filters::LevelFilter;
use tracing_log::LogTracer;
use tracing_subscriber::Registry;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Parses `--log-level` values into a [`LevelFilter`].
#[derive(Clone)]
pub struct LogLevelParser;

impl clap::builder::TypedValueParser for LogLevelParser {
    type Value = LevelFilter;

    fn parse_ref(
        &self,
        cmd: &clap::Command,
        arg: Option<&clap::Arg>,
        value: &std::ffi::OsStr,
    ) -> Result<Self::Value, clap::Error> {
        clap::builder::TypedValueParser::parse(self, cmd, arg, value.to_owned())
    }

    fn parse(
        &self,
        cmd: &clap::Command,
        arg: Option<&clap::Arg>,
        value: std::ffi::OsString,
    ) -> Result<Self::Value, clap::Error> {
        use std::str::FromStr;
        let p = clap::builder::PossibleValuesParser::new([
            "off", "error", "warn", "info", "debug", "trace",
        ]);
        let v = p.parse(cmd, arg, value)?;

        LevelFilter::from_str(&v)
            .map_err(|_| clap::Error::new(clap::error::ErrorKind::InvalidValue).with_cmd(cmd))
    }
}

/// The `RUST_LOG` style directive used when `RUST_LOG` is not set.
///
/// Other crates stay at `warn`, the calling crate and the harness crates log at `log_level`.
pub fn default_directive(crate_name: &str, log_level: &LevelFilter) -> String {
    match *log_level {
        LevelFilter::OFF => "off".to_string(),
        _ => {
            let log_level = log_level.to_string().to_lowercase();
            format!(
                "warn,{crate_name}={log_level},ledger_harness={log_level},ledger_rest_api={log_level}"
            )
        }
    }
}

/// Setup standard logging and loglevel for the calling crate and the harness crates.
///
/// Call with `env!("CARGO_CRATE_NAME")` as `crate_name`.
pub fn setup_logging(crate_name: &str, log_level: &LevelFilter) -> anyhow::Result<()> {
    LogTracer::init().context("Failed to set logger")?;
    let filter = EnvFilter::builder()
        .try_from_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(crate_name, log_level)));
    let subscriber = Registry::default()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr));
    tracing::subscriber::set_global_default(subscriber)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{Arg, Command};

    fn command() -> Command {
        Command::new("test").arg(
            Arg::new("log_level")
                .long("log-level")
                .value_parser(LogLevelParser),
        )
    }

    #[test]
    fn test_log_level_parser() {
        let matches = command()
            .try_get_matches_from(["test", "--log-level", "debug"])
            .unwrap();
        assert_eq!(
            matches.get_one::<LevelFilter>("log_level"),
            Some(&LevelFilter::DEBUG)
        );
    }

    #[test]
    fn test_log_level_parser_rejects_unknown() {
        assert!(command()
            .try_get_matches_from(["test", "--log-level", "verbose"])
            .is_err());
    }

    #[test]
    fn test_default_directive() {
        assert_eq!(
            default_directive("harness_cli", &LevelFilter::INFO),
            "warn,harness_cli=info,ledger_harness=info,ledger_rest_api=info"
        );
        assert_eq!(default_directive("harness_cli", &LevelFilter::OFF), "off");
    }
}
