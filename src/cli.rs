use clap::Parser;
use std::path::PathBuf;

/// Convert a DOCX document to Markdown with pandoc, extracting images
/// into `assets/images/<name>/` next to the document
#[derive(Parser, Debug)]
#[command(name = "docx2md", version, about)]
pub struct Cli {
    /// Path to the input DOCX file
    pub input: PathBuf,

    /// Path to the pandoc executable, or a bare program name to look up on PATH.
    /// Defaults to searching PATH, then the usual Homebrew locations.
    #[arg(long, env = "DOCX2MD_PANDOC")]
    pub pandoc: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, env = "DOCX2MD_VERBOSE", default_value_t = false)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_single_positional() {
        let cli = Cli::try_parse_from(["docx2md", "post.docx"]).unwrap();
        assert_eq!(cli.input, PathBuf::from("post.docx"));
        assert!(!cli.verbose);
    }

    #[test]
    fn rejects_missing_and_extra_arguments() {
        assert!(Cli::try_parse_from(["docx2md"]).is_err());
        assert!(Cli::try_parse_from(["docx2md", "a.docx", "b.docx"]).is_err());
    }

    #[test]
    fn accepts_explicit_pandoc() {
        let cli =
            Cli::try_parse_from(["docx2md", "--pandoc", "/opt/pandoc", "-v", "post.docx"]).unwrap();
        assert_eq!(cli.pandoc, Some(PathBuf::from("/opt/pandoc")));
        assert!(cli.verbose);
    }
}
