use crate::error::{ConvertError, Result};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::debug;

pub const FROM_FORMAT: &str = "docx";
pub const TO_FORMAT: &str = "markdown";

/// One pandoc invocation: DOCX in, Markdown out, embedded media extracted
/// into `media_dir`.
pub struct PandocCommand<'a> {
    program: &'a Path,
    input: &'a Path,
    output: &'a Path,
    media_dir: &'a Path,
}

impl<'a> PandocCommand<'a> {
    pub fn new(program: &'a Path, input: &'a Path, output: &'a Path, media_dir: &'a Path) -> Self {
        Self {
            program,
            input,
            output,
            media_dir,
        }
    }

    pub fn args(&self) -> Vec<OsString> {
        vec![
            "-f".into(),
            FROM_FORMAT.into(),
            "-t".into(),
            TO_FORMAT.into(),
            "--extract-media".into(),
            self.media_dir.into(),
            self.input.into(),
            "-o".into(),
            self.output.into(),
        ]
    }

    /// Command line as shown in error reports.
    pub fn display(&self) -> String {
        std::iter::once(self.program.as_os_str().to_owned())
            .chain(self.args())
            .map(|a| a.to_string_lossy().into_owned())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Run to completion with both output streams captured.
    pub fn run(&self) -> Result<()> {
        debug!(command = %self.display(), "running pandoc");

        let output = Command::new(self.program)
            .args(self.args())
            .output()
            .map_err(|source| ConvertError::Spawn {
                program: PathBuf::from(self.program),
                source,
            })?;

        if output.status.success() {
            return Ok(());
        }

        Err(ConvertError::PandocFailed {
            command: self.display(),
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
