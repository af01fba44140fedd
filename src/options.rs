use std::path::{Path, PathBuf};

use log::LevelFilter;
use tsplib_derive::TsplibToken;

#[derive(Clone, Copy, Debug, Eq, PartialEq, TsplibToken)]
#[tsplib(lowercase, ignore_case)]
pub enum LogLevel {
    Error,
    #[tsplib(name = "warn", alias = "warning")]
    Warn,
    Info,
    Debug,
    Trace,
    Off,
}

impl LogLevel {
    pub fn to_filter(self) -> LevelFilter {
        match self {
            Self::Error => LevelFilter::Error,
            Self::Warn => LevelFilter::Warn,
            Self::Info => LevelFilter::Info,
            Self::Debug => LevelFilter::Debug,
            Self::Trace => LevelFilter::Trace,
            Self::Off => LevelFilter::Off,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, TsplibToken)]
#[tsplib(lowercase, ignore_case)]
pub enum LogFormat {
    Compact,
    Pretty,
}

/// Settings for [`crate::logging::init_logger`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LogOptions {
    pub level: LogLevel,
    pub format: LogFormat,
    pub timestamp: bool,
    /// Log file; empty or `-` means stderr.
    pub output: String,
}

impl Default for LogOptions {
    fn default() -> Self {
        Self {
            level: LogLevel::Warn,
            format: LogFormat::Compact,
            timestamp: false,
            output: String::new(),
        }
    }
}

impl LogOptions {
    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_timestamp(mut self, timestamp: bool) -> Self {
        self.timestamp = timestamp;
        self
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into().display().to_string();
        self
    }

    pub fn output_path(&self) -> Option<&Path> {
        let output = self.output.trim();
        if output.is_empty() || output == "-" {
            None
        } else {
            Some(Path::new(output))
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use log::LevelFilter;
    use rstest::rstest;

    use super::{LogFormat, LogLevel, LogOptions};
    use crate::Error;

    #[test]
    fn log_level_maps_to_filter() {
        assert_eq!(LogLevel::Error.to_filter(), LevelFilter::Error);
        assert_eq!(LogLevel::Warn.to_filter(), LevelFilter::Warn);
        assert_eq!(LogLevel::Info.to_filter(), LevelFilter::Info);
        assert_eq!(LogLevel::Debug.to_filter(), LevelFilter::Debug);
        assert_eq!(LogLevel::Trace.to_filter(), LevelFilter::Trace);
        assert_eq!(LogLevel::Off.to_filter(), LevelFilter::Off);
    }

    #[rstest]
    #[case("warn", LogLevel::Warn)]
    #[case("WARNING", LogLevel::Warn)]
    #[case("Debug", LogLevel::Debug)]
    #[case("off", LogLevel::Off)]
    fn log_level_parses_case_insensitively(#[case] raw: &str, #[case] expected: LogLevel) {
        assert_eq!(raw.parse::<LogLevel>().expect("known level"), expected);
    }

    #[test]
    fn log_level_displays_canonical_token() {
        assert_eq!(LogLevel::Warn.to_string(), "warn");
        assert_eq!(LogFormat::Pretty.to_string(), "pretty");
        assert_eq!(LogLevel::TOKENS, &["error", "warn", "info", "debug", "trace", "off"]);
    }

    #[test]
    fn unknown_log_format_lists_choices() {
        let err = "fancy".parse::<LogFormat>().expect_err("unknown format");
        let Error::InvalidValue {
            field,
            given,
            expected,
        } = &err
        else {
            panic!("expected invalid value, got {err:?}");
        };
        assert_eq!(*field, "LOG_FORMAT");
        assert_eq!(given, "fancy");
        assert_eq!(expected, "compact, pretty");
    }

    #[test]
    fn defaults_log_warnings_to_stderr() {
        let options = LogOptions::default();
        assert_eq!(options.level, LogLevel::Warn);
        assert_eq!(options.format, LogFormat::Compact);
        assert!(!options.timestamp);
        assert!(options.output_path().is_none());
    }

    #[rstest]
    #[case("")]
    #[case("-")]
    #[case("   ")]
    fn output_path_treats_empty_and_dash_as_stderr(#[case] output: &str) {
        let options = LogOptions::default().with_output(output);
        assert!(options.output_path().is_none());
    }

    #[test]
    fn output_path_returns_path_for_non_empty_value() {
        let options = LogOptions::default()
            .with_level(LogLevel::Debug)
            .with_format(LogFormat::Pretty)
            .with_timestamp(true)
            .with_output("logs/run.log");
        assert_eq!(options.output_path(), Some(Path::new("logs/run.log")));
        assert_eq!(options.level, LogLevel::Debug);
        assert_eq!(options.format, LogFormat::Pretty);
        assert!(options.timestamp);
    }
}
