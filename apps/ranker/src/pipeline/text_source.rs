//! Text sources — turn a document into plain text.
//!
//! `TextSource` is the seam between the pipeline and document decoding.
//! `DocumentTextSource` handles PDF (via `pdf-extract`) and UTF-8 text;
//! `TimedTextSource` bounds any source with a timeout.

use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    PlainText,
}

impl DocumentKind {
    /// Kind implied by a file extension; `None` for unsupported files.
    pub fn from_file_name(name: &str) -> Option<Self> {
        let extension = Path::new(name).extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "pdf" => Some(DocumentKind::Pdf),
            "txt" => Some(DocumentKind::PlainText),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub enum DocumentContent {
    File(PathBuf),
    Inline(Bytes),
}

/// One resume to process. `id` is what logs and reports show.
#[derive(Debug, Clone)]
pub struct Document {
    pub id: String,
    pub kind: DocumentKind,
    pub content: DocumentContent,
}

impl Document {
    pub fn file(id: impl Into<String>, kind: DocumentKind, path: PathBuf) -> Self {
        Self {
            id: id.into(),
            kind,
            content: DocumentContent::File(path),
        }
    }

    pub fn inline(id: impl Into<String>, kind: DocumentKind, bytes: Bytes) -> Self {
        Self {
            id: id.into(),
            kind,
            content: DocumentContent::Inline(bytes),
        }
    }
}

#[derive(Debug, Error)]
pub enum TextSourceError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF text extraction failed: {0}")]
    Pdf(String),

    #[error("Document is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),

    #[error("Text extraction timed out after {0:?}")]
    Timeout(Duration),

    #[error("Text extraction aborted: {0}")]
    Aborted(String),
}

#[async_trait]
pub trait TextSource: Send + Sync {
    async fn read_text(&self, document: &Document) -> Result<String, TextSourceError>;
}

/// Decodes PDF and plain-text documents on the blocking thread pool.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentTextSource;

#[async_trait]
impl TextSource for DocumentTextSource {
    async fn read_text(&self, document: &Document) -> Result<String, TextSourceError> {
        let document = document.clone();
        // A panic inside pdf-extract surfaces here as a JoinError.
        tokio::task::spawn_blocking(move || decode(&document))
            .await
            .map_err(|e| TextSourceError::Aborted(e.to_string()))?
    }
}

fn decode(document: &Document) -> Result<String, TextSourceError> {
    match (&document.kind, &document.content) {
        (DocumentKind::Pdf, DocumentContent::File(path)) => {
            pdf_extract::extract_text(path).map_err(|e| TextSourceError::Pdf(e.to_string()))
        }
        (DocumentKind::Pdf, DocumentContent::Inline(bytes)) => {
            pdf_extract::extract_text_from_mem(bytes)
                .map_err(|e| TextSourceError::Pdf(e.to_string()))
        }
        (DocumentKind::PlainText, DocumentContent::File(path)) => {
            Ok(String::from_utf8(std::fs::read(path)?)?)
        }
        (DocumentKind::PlainText, DocumentContent::Inline(bytes)) => {
            Ok(String::from_utf8(bytes.to_vec())?)
        }
    }
}

/// Fails a read that takes longer than `timeout`.
///
/// Blocking work already handed to the thread pool keeps running after the
/// timeout fires; only the waiting document is released.
pub struct TimedTextSource<S> {
    inner: S,
    timeout: Duration,
}

impl<S: TextSource> TimedTextSource<S> {
    pub fn new(inner: S, timeout: Duration) -> Self {
        Self { inner, timeout }
    }
}

#[async_trait]
impl<S: TextSource> TextSource for TimedTextSource<S> {
    async fn read_text(&self, document: &Document) -> Result<String, TextSourceError> {
        tokio::time::timeout(self.timeout, self.inner.read_text(document))
            .await
            .map_err(|_| TextSourceError::Timeout(self.timeout))?
    }
}
