//! Request boundary: validate an optimize request, resolve its text, run the
//! pipeline.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::pipeline::{self, OptimizationReport};
use crate::recommender::Settings;

const PDF_PLACEHOLDER: &str = "The file is a PDF. Text extraction requires passing the 'text' field directly from the frontend.";

// ---------------------------------------------------------------------------
// Data structures
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FileType {
    Pdf,
    Txt,
    Md,
    Html,
    Rtf,
}

impl FileType {
    /// Whether the stored bytes can be read directly as text.
    pub fn is_text(self) -> bool {
        !matches!(self, FileType::Pdf)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredFile {
    pub id: i64,
    pub owner: i64,
    pub title: String,
    pub path: PathBuf,
    pub file_type: FileType,
}

/// Where a request's text comes from. Inline text wins.
enum TextSource<'a> {
    Inline(&'a str),
    File(i64),
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct OptimizeRequest {
    #[serde(default)]
    pub file_id: Option<i64>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub current_settings: Settings,
}

impl OptimizeRequest {
    /// Inline text with surrounding whitespace trimmed; blank counts as absent.
    fn text(&self) -> Option<&str> {
        self.text
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }

    fn file_id(&self) -> Option<i64> {
        self.file_id.filter(|&id| id != 0)
    }

    fn source(&self) -> Result<TextSource<'_>> {
        match (self.text(), self.file_id()) {
            (Some(text), _) => Ok(TextSource::Inline(text)),
            (None, Some(file_id)) => Ok(TextSource::File(file_id)),
            (None, None) => Err(Error::Validation(
                "Either 'file_id' or 'text' must be provided.".to_string(),
            )),
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.source().map(|_| ())
    }
}

// ---------------------------------------------------------------------------
// File sources
// ---------------------------------------------------------------------------

/// Looks up stored files on behalf of a caller.
pub trait FileSource {
    /// Return the file with `file_id` if `owner` owns it, else `NotFound`.
    fn lookup(&self, file_id: i64, owner: i64) -> Result<StoredFile>;
}

/// In-memory file index built from configuration.
#[derive(Debug, Clone, Default)]
pub struct Library {
    files: HashMap<i64, StoredFile>,
}

impl Library {
    pub fn new(files: impl IntoIterator<Item = StoredFile>) -> Self {
        Self {
            files: files.into_iter().map(|f| (f.id, f)).collect(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.library.files.iter().cloned().map(StoredFile::from))
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl FileSource for Library {
    fn lookup(&self, file_id: i64, owner: i64) -> Result<StoredFile> {
        self.files
            .get(&file_id)
            .filter(|f| f.owner == owner)
            .cloned()
            .ok_or(Error::NotFound { file_id })
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn sample(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Text-mode newline handling: `\r\n` and lone `\r` become `\n`.
fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

fn read_file_text(file: &StoredFile, max_chars: usize) -> Result<String> {
    if !file.file_type.is_text() {
        debug!(file_id = file.id, "no direct text extraction for file type");
        return Ok(PDF_PLACEHOLDER.to_string());
    }
    let contents = fs::read_to_string(&file.path).map_err(|source| Error::Read {
        path: file.path.clone(),
        source,
    })?;
    let contents = normalize_newlines(&contents);
    Ok(sample(&contents, max_chars).to_string())
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Resolve the text for `request`, reading from `source` when the request
/// carries only a file id.
pub fn resolve_text(
    request: &OptimizeRequest,
    owner: i64,
    source: &dyn FileSource,
    config: &Config,
) -> Result<String> {
    let file_id = match request.source()? {
        TextSource::Inline(text) => return Ok(text.to_string()),
        TextSource::File(file_id) => file_id,
    };
    let file = source
        .lookup(file_id, owner)
        .inspect_err(|_| warn!(file_id, owner, "stored file lookup failed"))?;
    read_file_text(&file, config.library.sample_chars)
}

/// Validate `request`, resolve its text and run the optimization pipeline.
pub fn handle(
    request: &OptimizeRequest,
    owner: i64,
    source: &dyn FileSource,
    config: &Config,
) -> Result<OptimizationReport> {
    let text = resolve_text(request, owner, source, config)?;
    Ok(pipeline::process(&text, Some(&request.current_settings)))
}
