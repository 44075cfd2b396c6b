use crate::assets;
use crate::error::{ConvertError, Result};
use crate::locator::Locator;
use crate::pandoc::PandocCommand;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Suffix an input document must carry, compared case-sensitively.
pub const DOCX_EXTENSION: &str = "docx";

/// Paths derived from one input document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionPaths {
    pub input: PathBuf,
    /// `<doc-dir>/<doc-stem>.md`, written by pandoc
    pub markdown: PathBuf,
    /// `<doc-dir>/assets/images/<doc-stem>`, created before pandoc runs
    pub images_dir: PathBuf,
}

impl ConversionPaths {
    pub fn derive(input: &Path) -> Result<Self> {
        let stem = input.file_stem().ok_or_else(|| ConvertError::InvalidInput {
            path: input.to_path_buf(),
        })?;

        Ok(Self {
            input: input.to_path_buf(),
            markdown: input.with_extension("md"),
            images_dir: assets::images_dir_for(doc_dir(input), stem),
        })
    }

    pub fn doc_dir(&self) -> &Path {
        doc_dir(&self.input)
    }
}

/// Outcome of a successful run.
#[derive(Debug)]
pub struct Conversion {
    pub paths: ConversionPaths,
    pub pandoc: PathBuf,
}

impl Conversion {
    pub fn summary(&self) -> String {
        let markdown_name = self
            .paths
            .markdown
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        format!(
            "\nSuccess! Created:\n  Markdown: {}\n  Images:   {}",
            markdown_name,
            assets::display_relative(&self.paths.images_dir, self.paths.doc_dir())
        )
    }
}

/// Convert one DOCX document next to itself.
///
/// The locator is consulted before anything touches the filesystem, so an
/// invalid input or a missing pandoc leaves no trace. Once pandoc has been
/// started, whatever it wrote stays on disk even if it fails.
pub fn convert(input: &Path, locator: &Locator) -> Result<Conversion> {
    validate(input)?;

    let pandoc = locator.locate().ok_or(ConvertError::PandocNotFound)?;
    let paths = ConversionPaths::derive(input)?;
    debug!(?paths, pandoc = %pandoc.display(), "derived conversion paths");

    assets::prepare(&paths.images_dir)?;

    println!(
        "Converting '{}' to Markdown...",
        input
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default()
    );

    PandocCommand::new(&pandoc, &paths.input, &paths.markdown, &paths.images_dir).run()?;

    Ok(Conversion { paths, pandoc })
}

fn validate(input: &Path) -> Result<()> {
    let is_docx = input.extension().is_some_and(|ext| ext == DOCX_EXTENSION);
    if !is_docx || !input.exists() {
        return Err(ConvertError::InvalidInput {
            path: input.to_path_buf(),
        });
    }
    Ok(())
}

fn doc_dir(input: &Path) -> &Path {
    input.parent().unwrap_or_else(|| Path::new(""))
}
