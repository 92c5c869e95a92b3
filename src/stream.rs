use std::fmt;
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use crate::error::{Result, TplrError};

/// Where template variables come from: a named file or standard input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VarsSource {
    File(PathBuf),
    Stdin,
}

impl VarsSource {
    pub fn open(&self) -> Result<Box<dyn Read>> {
        match self {
            VarsSource::File(path) => {
                let file = File::open(path).map_err(|e| TplrError::Unreadable {
                    path: path.clone(),
                    source: e,
                })?;
                Ok(Box::new(file))
            }
            VarsSource::Stdin => Ok(Box::new(io::stdin())),
        }
    }
}

impl fmt::Display for VarsSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VarsSource::File(path) => write!(f, "{}", path.display()),
            VarsSource::Stdin => write!(f, "-"),
        }
    }
}

/// Where rendered output goes: a named file (created or truncated) or
/// standard output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputSink {
    File(PathBuf),
    Stdout,
}

impl OutputSink {
    pub fn create(&self) -> Result<Box<dyn Write>> {
        match self {
            OutputSink::File(path) => {
                let file = File::create(path).map_err(|e| TplrError::Unwritable {
                    path: path.clone(),
                    source: e,
                })?;
                Ok(Box::new(file))
            }
            OutputSink::Stdout => Ok(Box::new(io::stdout())),
        }
    }
}

impl fmt::Display for OutputSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputSink::File(path) => write!(f, "{}", path.display()),
            OutputSink::Stdout => write!(f, "-"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_missing_vars_file_is_a_usage_error() {
        let source = VarsSource::File(PathBuf::from("no/such/file"));
        let err = source.open().err().unwrap();
        assert!(matches!(err, TplrError::Unreadable { .. }));
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().contains("no/such/file"));
    }

    #[test]
    fn test_create_output_in_missing_directory_is_a_usage_error() {
        let sink = OutputSink::File(PathBuf::from("no/such/dir/out.txt"));
        let err = sink.create().err().unwrap();
        assert!(matches!(err, TplrError::Unwritable { .. }));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_standard_streams_display_as_dash() {
        assert_eq!(VarsSource::Stdin.to_string(), "-");
        assert_eq!(OutputSink::Stdout.to_string(), "-");
    }

    #[test]
    fn test_create_truncates_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        std::fs::write(&path, "previous contents").unwrap();

        let sink = OutputSink::File(path.clone());
        let mut writer = sink.create().unwrap();
        writer.write_all(b"new").unwrap();
        drop(writer);

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "new");
    }
}
