use std::{
    fs::File,
    io::{self, Write},
};

use env_logger::{Builder, Target, fmt::Formatter};
use log::{Level, Record};

use crate::{
    Error, Result,
    options::{LogFormat, LogOptions},
};

/// Installs an `env_logger` backend for the `log` records this crate emits.
///
/// Fails if the log file can't be created or a logger is already installed.
pub fn init_logger(options: &LogOptions) -> Result<()> {
    let log_format = options.format;
    let log_timestamp = options.timestamp;

    let mut builder = Builder::new();
    builder
        .filter_level(options.level.to_filter())
        .write_style(env_logger::WriteStyle::Never)
        .format(move |buf: &mut Formatter, record| {
            let timestamp = log_timestamp.then(|| buf.timestamp_millis().to_string());
            format_record(buf, timestamp.as_deref(), log_format, record)
        });

    if let Some(log_path) = options.output_path() {
        let log_file = File::create(log_path).map_err(|e| {
            Error::other(format!(
                "failed to create log output file {}: {e}",
                log_path.display()
            ))
        })?;
        builder.target(Target::Pipe(Box::new(log_file)));
    } else {
        builder.target(Target::Stderr);
    }

    builder
        .try_init()
        .map_err(|e| Error::other(format!("logger init failed: {e}")))
}

/// Writes one record as `[timestamp ]LEVEL message` (compact) or
/// `[timestamp ]LEVEL [target] message` (pretty).
fn format_record<W: Write + ?Sized>(
    buf: &mut W,
    timestamp: Option<&str>,
    format: LogFormat,
    record: &Record<'_>,
) -> io::Result<()> {
    if let Some(timestamp) = timestamp {
        write!(buf, "{timestamp} ")?;
    }

    let level = level_tag(record.level());
    match format {
        LogFormat::Compact => writeln!(buf, "{level} {}", record.args()),
        LogFormat::Pretty => writeln!(buf, "{level} [{}] {}", record.target(), record.args()),
    }
}

fn level_tag(level: Level) -> &'static str {
    match level {
        Level::Error => "ERROR",
        Level::Warn => "WARN",
        Level::Info => "INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    }
}

#[cfg(test)]
mod tests {
    use log::{Level, Record};
    use rstest::rstest;

    use super::{format_record, init_logger, level_tag};
    use crate::{
        Error,
        options::{LogFormat, LogOptions},
    };

    fn render(timestamp: Option<&str>, format: LogFormat) -> String {
        let mut buf = Vec::new();
        format_record(
            &mut buf,
            timestamp,
            format,
            &Record::builder()
                .args(format_args!("read tour from run.tour: nodes=3 terminated=true"))
                .level(Level::Debug)
                .target("concorde_tsplib::tour")
                .build(),
        )
        .expect("write to vec");
        String::from_utf8(buf).expect("utf8")
    }

    #[rstest]
    #[case(
        None,
        LogFormat::Compact,
        "DEBUG read tour from run.tour: nodes=3 terminated=true\n"
    )]
    #[case(
        None,
        LogFormat::Pretty,
        "DEBUG [concorde_tsplib::tour] read tour from run.tour: nodes=3 terminated=true\n"
    )]
    #[case(
        Some("2026-10-18T09:30:00.123Z"),
        LogFormat::Compact,
        "2026-10-18T09:30:00.123Z DEBUG read tour from run.tour: nodes=3 terminated=true\n"
    )]
    #[case(
        Some("2026-10-18T09:30:00.123Z"),
        LogFormat::Pretty,
        "2026-10-18T09:30:00.123Z DEBUG [concorde_tsplib::tour] read tour from run.tour: nodes=3 terminated=true\n"
    )]
    fn formats_records_per_options(
        #[case] timestamp: Option<&str>,
        #[case] format: LogFormat,
        #[case] expected: &str,
    ) {
        assert_eq!(render(timestamp, format), expected);
    }

    #[test]
    fn level_tags_are_upper_case() {
        assert_eq!(level_tag(Level::Error), "ERROR");
        assert_eq!(level_tag(Level::Warn), "WARN");
        assert_eq!(level_tag(Level::Info), "INFO");
        assert_eq!(level_tag(Level::Debug), "DEBUG");
        assert_eq!(level_tag(Level::Trace), "TRACE");
    }

    #[test]
    fn unwritable_log_file_is_reported() {
        let dir = tempfile::tempdir().expect("temp dir");
        let options = LogOptions::default().with_output(dir.path().join("missing").join("run.log"));

        let err = init_logger(&options).expect_err("parent directory does not exist");
        assert!(matches!(err, Error::Other(_)));
        assert!(err.to_string().contains("failed to create log output file"));
    }
}
