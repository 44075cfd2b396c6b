use crate::error::{ConvertError, Result};
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

/// Subfolder pandoc itself creates inside the `--extract-media` directory.
pub const PANDOC_MEDIA_DIR: &str = "media";

/// Image directory for a document, laid out the way Jekyll-style blogs
/// expect: `<doc-dir>/assets/images/<doc-stem>`.
pub fn images_dir_for(parent: &Path, stem: &OsStr) -> PathBuf {
    parent.join("assets").join("images").join(stem)
}

/// Create the image directory and any missing parents.
/// An existing directory is left as is.
pub fn prepare(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|source| ConvertError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })
}

/// Where the images end up, relative to the document's directory.
/// Falls back to the full path if `dir` is not under `base`.
pub fn display_relative(dir: &Path, base: &Path) -> String {
    let rel = dir.strip_prefix(base).unwrap_or(dir);
    format!("{}/{}", rel.display(), PANDOC_MEDIA_DIR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn images_dir_layout() {
        assert_eq!(
            images_dir_for(Path::new("/blog"), OsStr::new("My-Post")),
            PathBuf::from("/blog/assets/images/My-Post")
        );
    }

    #[test]
    fn prepare_is_idempotent() {
        let tmp = TempDir::new().unwrap();
        let dir = images_dir_for(tmp.path(), OsStr::new("post"));

        prepare(&dir).unwrap();
        assert!(dir.is_dir());
        prepare(&dir).unwrap();
        assert!(dir.is_dir());
    }

    #[test]
    fn prepare_reports_blocked_path() {
        let tmp = TempDir::new().unwrap();
        let blocker = tmp.path().join("assets");
        fs::write(&blocker, "not a directory").unwrap();

        let err = prepare(&images_dir_for(tmp.path(), OsStr::new("post"))).unwrap_err();
        assert!(matches!(err, ConvertError::CreateDir { .. }));
    }

    #[test]
    fn relative_display_mentions_media() {
        let shown = display_relative(Path::new("/blog/assets/images/My-Post"), Path::new("/blog"));
        assert_eq!(shown, "assets/images/My-Post/media");
    }
}
