use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Exit status for usage errors, matching the convention of standard
/// argument-parsing libraries (clap uses the same value).
pub const USAGE_EXIT_CODE: i32 = 2;

#[derive(Debug, Error, Diagnostic)]
pub enum TplrError {
    #[error("cannot open variables file: {path}")]
    #[diagnostic(help("Check that the file exists and is readable"))]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot open output file: {path}")]
    #[diagnostic(help("Check that the parent directory exists and is writable"))]
    Unwritable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("variables from {source_name} are not valid JSON")]
    #[diagnostic(help("The variables source must hold exactly one JSON document"))]
    MalformedVariables {
        source_name: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("variables from {source_name} must be a JSON object, got {found}")]
    #[diagnostic(help("Top-level arrays, strings, numbers, booleans and null cannot be bound as template scope"))]
    VariablesNotAnObject { source_name: String, found: String },

    #[error("template not found: {name}")]
    #[diagnostic(help("Template names are resolved relative to the current directory"))]
    TemplateNotFound {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse template: {name}")]
    #[diagnostic(help("Check the Tera template syntax"))]
    TemplateSyntax {
        name: String,
        #[source]
        source: tera::Error,
    },

    #[error("failed to render template: {name}")]
    Render {
        name: String,
        #[source]
        source: tera::Error,
    },

    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

impl TplrError {
    /// Process exit status for this error: 2 for usage errors (unreadable
    /// input, unwritable output), 1 for everything else.
    pub fn exit_code(&self) -> i32 {
        match self {
            TplrError::Unreadable { .. } | TplrError::Unwritable { .. } => USAGE_EXIT_CODE,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, TplrError>;
