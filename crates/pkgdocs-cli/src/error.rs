//! Error types and handling for the CLI
//!
//! Every failure mode maps to exit code 1; the value of the enum is the
//! stage prefix each variant's message carries, so a diagnostic names
//! the stage that failed (read, parse, import, generate, emit).

use pkgdocs_schema::ImportError;
use pkgdocs_templates::GenerateError;
use std::io;
use std::path::PathBuf;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for CLI operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error (reading the schema file, etc.)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Schema file does not exist
    #[error("file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// Schema file is not valid JSON for a package specification
    #[error("error unmarshalling schema into a package spec: {0}")]
    Json(#[from] serde_json::Error),

    /// The importer rejected the specification
    #[error("error importing package spec: {0}")]
    Import(#[from] ImportError),

    /// The template generator failed
    #[error("generating package: {0}")]
    Generate(#[from] GenerateError),

    /// A generated file could not be written
    #[error("emitting file {path:?}: {source}")]
    Emit {
        path: String,
        #[source]
        source: io::Error,
    },

    /// Generic error with context
    #[error("{message}")]
    Other { message: String },
}

impl Error {
    /// Create a generic error with message
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
        }
    }
}

/// Format an error for display to the user
pub fn format_error(error: &Error, use_color: bool) -> String {
    if use_color {
        use colored::Colorize;
        format!("{} {}", "error:".red().bold(), error)
    } else {
        format!("error: {}", error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn import_failures_carry_the_stage_prefix() {
        let error = Error::from(ImportError::EmptyName);
        assert!(error.to_string().starts_with("error importing package spec:"));
    }

    #[test]
    fn emit_failures_name_the_file() {
        let error = Error::Emit {
            path: "resources/storage/bucket.md".to_string(),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        let text = error.to_string();
        assert!(text.contains("emitting file"));
        assert!(text.contains("resources/storage/bucket.md"));
    }

    #[test]
    fn plain_formatting_has_no_ansi_codes() {
        let text = format_error(&Error::other("boom"), false);
        assert_eq!(text, "error: boom");
    }
}
