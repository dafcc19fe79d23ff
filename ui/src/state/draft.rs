//! Draft agent input held by the create dialog
//!
//! The draft collects a name, description, picked files, URLs and the
//! recursive-crawl flag. Nothing here reads a file or fetches a URL: files are
//! kept as metadata and URLs are only checked for being absolute.

use thiserror::Error;
use url::Url;

/// Metadata of a file picked in the browser. The file body is never read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub size: u64,
    pub content_type: String,
}

/// Validation failures raised while editing or submitting a draft
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("agent name is required")]
    NameRequired,
    #[error("at least one file or URL is required")]
    ContentRequired,
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
}

/// Payload handed to the page when the form passes validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentSubmission {
    pub name: String,
    pub description: String,
    pub files: Vec<SelectedFile>,
    pub urls: Vec<String>,
    pub recursive: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AgentDraft {
    pub name: String,
    pub description: String,
    /// Text currently typed in the URL field, not yet added
    pub url_input: String,
    urls: Vec<String>,
    files: Vec<SelectedFile>,
    pub recursive: bool,
    open: bool,
}

impl AgentDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn urls(&self) -> &[String] {
        &self.urls
    }

    pub fn files(&self) -> &[SelectedFile] {
        &self.files
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Opening shows the form; closing throws the draft away.
    pub fn set_open(&mut self, open: bool) {
        if open {
            self.open = true;
        } else {
            self.reset();
        }
    }

    /// A new pick replaces the previous selection.
    pub fn set_files(&mut self, files: Vec<SelectedFile>) {
        self.files = files;
    }

    /// Moves the typed URL into the pending list.
    ///
    /// An empty field is ignored. A value that does not parse as an absolute
    /// URL is rejected and left in the field for correction.
    pub fn add_url(&mut self) -> Result<(), DraftError> {
        let candidate = self.url_input.trim();
        if candidate.is_empty() {
            return Ok(());
        }

        Url::parse(candidate).map_err(|_| DraftError::InvalidUrl(candidate.to_string()))?;

        self.urls.push(candidate.to_string());
        self.url_input.clear();
        Ok(())
    }

    pub fn remove_url(&mut self, index: usize) {
        if index < self.urls.len() {
            self.urls.remove(index);
        }
    }

    /// Validates the draft and, on success, returns the payload and resets
    /// the form (closed, every field cleared). On failure nothing changes.
    pub fn submit(&mut self) -> Result<AgentSubmission, DraftError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(DraftError::NameRequired);
        }
        if self.files.is_empty() && self.urls.is_empty() {
            return Err(DraftError::ContentRequired);
        }

        let submission = AgentSubmission {
            name: name.to_string(),
            description: std::mem::take(&mut self.description),
            files: std::mem::take(&mut self.files),
            urls: std::mem::take(&mut self.urls),
            recursive: self.recursive,
        };
        self.reset();
        Ok(submission)
    }

    fn reset(&mut self) {
        *self = Self::default();
    }
}
