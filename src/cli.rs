use std::path::{Component, Path, PathBuf};

use clap::Parser;

use crate::logging::LogLevel;
use crate::stream::{OutputSink, VarsSource};
use crate::RenderOptions;

#[derive(Debug, Parser)]
#[command(
    name = "tplr",
    about = "Render a Tera template against JSON variables",
    version
)]
pub struct Cli {
    /// Tera template file, resolved relative to the current directory
    pub template: PathBuf,

    /// Template variables file (JSON); STDIN used if omitted
    #[arg(value_name = "variables")]
    pub vars: Option<PathBuf>,

    /// Output file; STDOUT used by default
    #[arg(long, value_name = "FILE")]
    pub out: Option<PathBuf>,

    /// Logging level
    #[arg(short = 'l', long = "log-level", value_enum, default_value_t = LogLevel::Error)]
    pub log_level: LogLevel,
}

impl Cli {
    pub fn into_options(self) -> RenderOptions {
        RenderOptions {
            template: normalize_path(&self.template),
            vars: match self.vars {
                Some(path) => VarsSource::File(path),
                None => VarsSource::Stdin,
            },
            out: match self.out {
                Some(path) => OutputSink::File(path),
                None => OutputSink::Stdout,
            },
        }
    }
}

/// Lexically normalize a path: drop redundant separators and `.` segments,
/// collapse `name/..` pairs. Purely textual, no filesystem access, so a
/// nonexistent path normalizes fine and only fails later when opened.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other.as_os_str()),
        }
    }
    if out.as_os_str().is_empty() {
        out.push(".");
    }
    out
}
