use std::env;
use std::ffi::{OsStr, OsString};
use std::path::{Component, Path, PathBuf};
use tracing::{debug, warn};

/// Program name looked up on the search path.
pub const PANDOC: &str = "pandoc";

/// Probed in order when pandoc is not on PATH (Homebrew on Apple Silicon,
/// then Homebrew on Intel / manual installs).
pub const FALLBACK_LOCATIONS: &[&str] = &["/opt/homebrew/bin/pandoc", "/usr/local/bin/pandoc"];

/// Searched instead of `PATH` when the variable is unset.
pub const DEFAULT_SEARCH_PATH: &str = "/bin:/usr/bin";

/// Finds the external converter executable.
///
/// Strategies run in order and stop at the first hit: an explicitly
/// configured path, the search path, then the fixed fallback locations.
/// Not finding anything is a normal outcome reported as `None`.
#[derive(Debug, Clone)]
pub struct Locator {
    program: String,
    explicit: Option<PathBuf>,
    search_path: Option<OsString>,
    fallbacks: Vec<PathBuf>,
}

impl Locator {
    /// Locator for pandoc driven by the process `PATH`.
    pub fn from_env(explicit: Option<PathBuf>) -> Self {
        Self::with_search_path(explicit, env::var_os("PATH"))
    }

    fn with_search_path(explicit: Option<PathBuf>, path: Option<OsString>) -> Self {
        Self::new(PANDOC)
            .explicit(explicit)
            .fallbacks(FALLBACK_LOCATIONS.iter().copied())
            .search_path(path.unwrap_or_else(|| DEFAULT_SEARCH_PATH.into()))
    }

    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            explicit: None,
            search_path: None,
            fallbacks: Vec::new(),
        }
    }

    pub fn explicit(mut self, path: Option<PathBuf>) -> Self {
        self.explicit = path;
        self
    }

    pub fn search_path(mut self, path: impl Into<OsString>) -> Self {
        self.search_path = Some(path.into());
        self
    }

    pub fn fallbacks<I, P>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.fallbacks = paths.into_iter().map(Into::into).collect();
        self
    }

    pub fn locate(&self) -> Option<PathBuf> {
        if let Some(ref path) = self.explicit {
            // A bare name such as `pandoc-3` is looked up like a command.
            if let Some(name) = bare_name(path) {
                let found = self.search_for(name);
                match found {
                    Some(ref p) => debug!(path = %p.display(), "resolved configured converter name"),
                    None => warn!(name = %path.display(), "configured converter not found on search path"),
                }
                return found;
            }
            if path.is_file() {
                debug!(path = %path.display(), "using configured converter");
                return Some(path.clone());
            }
            warn!(path = %path.display(), "configured converter does not exist");
            return None;
        }

        if let Some(found) = self.search_for(OsStr::new(&self.program)) {
            debug!(path = %found.display(), "found converter on search path");
            return Some(found);
        }

        let found = self.fallbacks.iter().find(|p| p.is_file()).cloned();
        match found {
            Some(ref p) => debug!(path = %p.display(), "found converter at fallback location"),
            None => debug!(program = %self.program, "converter not found"),
        }
        found
    }

    fn search_for(&self, program: &OsStr) -> Option<PathBuf> {
        let search_path = self.search_path.as_ref()?;
        env::split_paths(search_path)
            .filter(|dir| !dir.as_os_str().is_empty())
            .flat_map(|dir| candidate_names(program).map(move |name| dir.join(name)))
            .find(|candidate| is_executable(candidate))
    }
}

fn candidate_names(program: &OsStr) -> impl Iterator<Item = OsString> {
    let exe = if cfg!(windows) {
        let mut name = program.to_os_string();
        name.push(".exe");
        Some(name)
    } else {
        None
    };
    std::iter::once(program.to_os_string()).chain(exe)
}

/// The path itself if it is a single plain component with no directory part.
fn bare_name(path: &Path) -> Option<&OsStr> {
    let mut components = path.components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(name)), None) => Some(name),
        _ => None,
    }
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    path.metadata()
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}
