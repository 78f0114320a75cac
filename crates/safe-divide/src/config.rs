//! Runtime configuration: positional operands plus an env-driven log filter.

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::EnvFilter;

/// Env var holding an `EnvFilter` directive for console logging.
pub const LOG_ENV: &str = "SAFE_DIVIDE_LOG";
pub const DEFAULT_LOG: &str = "warn";

#[derive(Clone, Debug, PartialEq)]
pub struct SafeDivideConfig {
    pub dividend: f64,
    pub divisor: f64,
    pub log: String,
}

impl SafeDivideConfig {
    pub fn from_env() -> Result<Self> {
        Self::parse(std::env::args().skip(1), std::env::var(LOG_ENV).ok())
    }

    pub fn parse<I>(args: I, log: Option<String>) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        let dividend = operand(args.next(), "dividend")?;
        let divisor = operand(args.next(), "divisor")?;
        if let Some(extra) = args.next() {
            return Err(anyhow!("unexpected argument '{extra}'"));
        }
        Ok(Self { dividend, divisor, log: log.unwrap_or_else(|| DEFAULT_LOG.to_owned()) })
    }

    /// Falls back to [`DEFAULT_LOG`] when the configured directive does not parse.
    pub fn log_filter(&self) -> EnvFilter {
        EnvFilter::try_new(&self.log).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG))
    }
}

fn operand(arg: Option<String>, name: &str) -> Result<f64> {
    let arg = arg.ok_or_else(|| anyhow!("missing {name}; usage: safe-divide <dividend> <divisor>"))?;
    arg.parse().with_context(|| format!("{name} '{arg}' is not a number"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parses_operands_and_defaults_log() {
        let cfg = SafeDivideConfig::parse(args(&["10", "2.5"]), None).unwrap();
        assert_eq!(cfg, SafeDivideConfig { dividend: 10.0, divisor: 2.5, log: DEFAULT_LOG.into() });
    }

    #[test]
    fn keeps_log_directive() {
        let cfg = SafeDivideConfig::parse(args(&["1", "0"]), Some("optional=debug".into())).unwrap();
        assert_eq!(cfg.log, "optional=debug");
        assert_eq!(cfg.log_filter().to_string(), "optional=debug");
    }

    #[test]
    fn falls_back_on_bad_log_directive() {
        for bad in ["foo=notalevel", "[[[", "=="] {
            let cfg = SafeDivideConfig::parse(args(&["1", "2"]), Some(bad.into())).unwrap();
            assert_eq!(cfg.log_filter().to_string(), DEFAULT_LOG);
        }
    }

    #[test]
    fn rejects_bad_arguments() {
        assert!(SafeDivideConfig::parse(args(&["10"]), None).is_err());
        assert!(SafeDivideConfig::parse(args(&["ten", "2"]), None).is_err());
        assert!(SafeDivideConfig::parse(args(&["10", "2", "3"]), None).is_err());
    }
}
