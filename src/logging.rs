use std::io::Write;

use clap::ValueEnum;
use log::LevelFilter;

/// Verbosity levels exposed on the command line, mirroring the classic
/// syslog-style set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "UPPER")]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
    Critical,
}

impl LogLevel {
    /// The `log` facade has no level above `Error`, so CRITICAL collapses
    /// into it.
    pub fn filter(self) -> LevelFilter {
        match self {
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Warning => LevelFilter::Warn,
            LogLevel::Error | LogLevel::Critical => LevelFilter::Error,
        }
    }
}

/// Install the process-wide logger for the requested level.
///
/// At DEBUG the format carries the source module and line; at every other
/// level it is just a timestamp, a padded level tag and the message.
/// Repeated calls are ignored (the `log` facade only accepts one logger
/// per process).
pub fn init(level: LogLevel) {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(level.filter());

    if level == LogLevel::Debug {
        builder.format(|buf, record| {
            writeln!(
                buf,
                "{} {} {}:{} {}",
                buf.timestamp(),
                record.level(),
                record.module_path().unwrap_or("<unknown>"),
                record.line().unwrap_or(0),
                record.args()
            )
        });
    } else {
        builder.format(|buf, record| {
            writeln!(
                buf,
                "{} {:<8} {}",
                buf.timestamp(),
                record.level(),
                record.args()
            )
        });
    }

    let _ = builder.try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_mapping() {
        assert_eq!(LogLevel::Debug.filter(), LevelFilter::Debug);
        assert_eq!(LogLevel::Info.filter(), LevelFilter::Info);
        assert_eq!(LogLevel::Warning.filter(), LevelFilter::Warn);
        assert_eq!(LogLevel::Error.filter(), LevelFilter::Error);
        assert_eq!(LogLevel::Critical.filter(), LevelFilter::Error);
    }

    #[test]
    fn test_cli_value_names_are_uppercase() {
        let names: Vec<_> = LogLevel::value_variants()
            .iter()
            .map(|v| v.to_possible_value().unwrap().get_name().to_string())
            .collect();
        assert_eq!(names, ["DEBUG", "INFO", "WARNING", "ERROR", "CRITICAL"]);
    }
}
