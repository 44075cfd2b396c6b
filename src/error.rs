//! Errors for a single conversion run.
//!
//! Every variant is terminal: nothing is retried and nothing already written
//! to disk is rolled back.

use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertError {
    /// The input path does not exist or does not end in `.docx`.
    #[error("File not found or is not a .docx file: {}", path.display())]
    InvalidInput { path: PathBuf },

    /// No pandoc executable on PATH, at the fallback locations, or at the
    /// configured path.
    #[error(
        "Pandoc executable not found.\n\
         Please install pandoc with 'brew install pandoc', \
         or point --pandoc / DOCX2MD_PANDOC at an existing binary"
    )]
    PandocNotFound,

    #[error("Failed to create image directory '{}': {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to run '{}': {source}", program.display())]
    Spawn {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Pandoc ran but exited unsuccessfully. The captured streams are kept
    /// verbatim so they can be shown to the user.
    #[error(
        "Command failed: {command}\n\
         Exit status: {status}\n\
         STDOUT: {stdout}\n\
         STDERR: {stderr}\n\
         Failed to convert .docx to .md with Pandoc."
    )]
    PandocFailed {
        command: String,
        status: ExitStatus,
        stdout: String,
        stderr: String,
    },
}

pub type Result<T> = std::result::Result<T, ConvertError>;
