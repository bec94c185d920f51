//! In-memory [`ContentSource`] for tests and offline fixtures.
//!
//! Files are held as text and handed out base64-encoded, exactly as the
//! contents API would. Directory listings are derived from file paths unless
//! an explicit listing is registered. Individual paths can be made to fail.

use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::{ContentSource, DirEntry, FileContent, GitHubError, RateLimitMode, RepoRef};

/// Failure to inject for a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Failure {
    /// Non-success status, surfaced as [`GitHubError::Api`].
    Status(u16),
    RateLimited,
    Unauthorized,
}

impl Failure {
    fn to_error(self) -> GitHubError {
        match self {
            Self::Status(status) => GitHubError::Api {
                status,
                message: String::from("injected failure"),
            },
            Self::RateLimited => GitHubError::RateLimited { reset_at: None },
            Self::Unauthorized => GitHubError::Unauthorized { status: 401 },
        }
    }
}

/// Repository contents served from memory.
pub struct MemorySource {
    mode: RateLimitMode,
    files: BTreeMap<String, String>,
    listings: HashMap<String, Vec<DirEntry>>,
    failures: HashMap<String, Failure>,
    requests: AtomicUsize,
}

impl Default for MemorySource {
    fn default() -> Self {
        Self::new()
    }
}

impl MemorySource {
    #[must_use]
    pub fn new() -> Self {
        Self {
            mode: RateLimitMode::Unauthenticated,
            files: BTreeMap::new(),
            listings: HashMap::new(),
            failures: HashMap::new(),
            requests: AtomicUsize::new(0),
        }
    }

    #[must_use]
    pub const fn with_mode(mut self, mode: RateLimitMode) -> Self {
        self.mode = mode;
        self
    }

    /// Add a file at `path` with the given text.
    #[must_use]
    pub fn with_file(mut self, path: &str, text: &str) -> Self {
        self.files.insert(trim(path).to_string(), text.to_string());
        self
    }

    /// Serve `entries` verbatim when `dir` is listed.
    #[must_use]
    pub fn with_listing(mut self, dir: &str, entries: Vec<DirEntry>) -> Self {
        self.listings.insert(trim(dir).to_string(), entries);
        self
    }

    /// Make every request for `path` fail.
    #[must_use]
    pub fn with_failure(mut self, path: &str, failure: Failure) -> Self {
        self.failures.insert(trim(path).to_string(), failure);
        self
    }

    /// Number of requests served so far, failed ones included.
    #[must_use]
    pub fn request_count(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }

    fn begin(&self, path: &str) -> Result<(), GitHubError> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        self.failures.get(path).map_or(Ok(()), |f| Err(f.to_error()))
    }

    fn is_dir(&self, path: &str) -> bool {
        let prefix = format!("{path}/");
        self.listings.contains_key(path) || self.files.keys().any(|p| p.starts_with(&prefix))
    }

    /// Immediate children of `dir`, sorted by name like GitHub returns them.
    fn derive_listing(&self, dir: &str) -> Vec<DirEntry> {
        let prefix = format!("{dir}/");
        let mut children: BTreeMap<String, DirEntry> = BTreeMap::new();
        for path in self.files.keys() {
            let Some(rest) = path.strip_prefix(&prefix) else {
                continue;
            };
            match rest.split_once('/') {
                None => {
                    children.insert(rest.to_string(), DirEntry::file(path));
                }
                Some((sub, _)) => {
                    children
                        .entry(sub.to_string())
                        .or_insert_with(|| DirEntry::dir(&format!("{prefix}{sub}")));
                }
            }
        }
        children.into_values().collect()
    }
}

fn trim(path: &str) -> &str {
    path.trim_matches('/')
}

#[async_trait]
impl ContentSource for MemorySource {
    async fn list_directory(
        &self,
        _repo: &RepoRef,
        path: &str,
    ) -> Result<Vec<DirEntry>, GitHubError> {
        let path = trim(path);
        self.begin(path)?;

        if let Some(entries) = self.listings.get(path) {
            return Ok(entries.clone());
        }
        if self.files.contains_key(path) {
            return Err(GitHubError::NotADirectory {
                path: path.to_string(),
            });
        }
        if !self.is_dir(path) {
            return Err(GitHubError::NotFound {
                path: path.to_string(),
            });
        }
        Ok(self.derive_listing(path))
    }

    async fn get_file(&self, _repo: &RepoRef, path: &str) -> Result<FileContent, GitHubError> {
        let path = trim(path);
        self.begin(path)?;

        if let Some(text) = self.files.get(path) {
            return Ok(FileContent::from_text(path, text));
        }
        if self.is_dir(path) {
            return Err(GitHubError::NotAFile {
                path: path.to_string(),
            });
        }
        Err(GitHubError::NotFound {
            path: path.to_string(),
        })
    }

    fn rate_limit_mode(&self) -> RateLimitMode {
        self.mode
    }
}
