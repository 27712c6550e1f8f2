use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("toast duration must be greater than zero")]
    ZeroToastDuration,
}

/// Command-line flags. Each flag falls back to an environment variable.
#[derive(Parser, Debug)]
#[command(name = "applyform", version, about = "Terminal job application form")]
pub struct Args {
    /// Simulated submission delay in milliseconds
    #[arg(long, env = "APPLYFORM_DELAY_MS", default_value_t = 1500)]
    pub delay_ms: u64,
    /// How long the confirmation toast stays visible, in milliseconds
    #[arg(long, env = "APPLYFORM_TOAST_MS", default_value_t = 5000)]
    pub toast_ms: u64,
    /// Write logs to this file (the terminal is reserved for the form)
    #[arg(long, env = "APPLYFORM_LOG")]
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub submit_delay: Duration,
    pub toast_duration: Duration,
    pub log_file: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            submit_delay: Duration::from_millis(1500),
            toast_duration: Duration::from_millis(5000),
            log_file: None,
        }
    }
}

impl Settings {
    pub fn from_args(args: Args) -> Result<Self, ConfigError> {
        if args.toast_ms == 0 {
            return Err(ConfigError::ZeroToastDuration);
        }
        Ok(Self {
            submit_delay: Duration::from_millis(args.delay_ms),
            toast_duration: Duration::from_millis(args.toast_ms),
            log_file: args.log_file,
        })
    }
}

pub fn load_settings() -> Result<Settings, ConfigError> {
    Settings::from_args(Args::parse())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("applyform").chain(argv.iter().copied())).unwrap()
    }

    #[test]
    fn test_flags_override_defaults() {
        let settings =
            Settings::from_args(parse(&["--delay-ms", "10", "--toast-ms", "20", "--log-file", "form.log"]))
                .unwrap();
        assert_eq!(settings.submit_delay, Duration::from_millis(10));
        assert_eq!(settings.toast_duration, Duration::from_millis(20));
        assert_eq!(settings.log_file, Some(PathBuf::from("form.log")));
    }

    #[test]
    fn test_zero_delay_is_allowed() {
        let settings = Settings::from_args(parse(&["--delay-ms", "0"])).unwrap();
        assert_eq!(settings.submit_delay, Duration::ZERO);
    }

    #[test]
    fn test_zero_toast_is_rejected() {
        let err = Settings::from_args(parse(&["--toast-ms", "0"])).unwrap_err();
        assert_eq!(err, ConfigError::ZeroToastDuration);
    }

    #[test]
    fn test_rejects_non_numeric_delay() {
        let result = Args::try_parse_from(["applyform", "--delay-ms", "soon"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.submit_delay, Duration::from_millis(1500));
        assert_eq!(settings.toast_duration, Duration::from_secs(5));
        assert!(settings.log_file.is_none());
    }
}
