//! Corpus processing — one record per readable document, failures skipped.
//!
//! Each document moves `Pending → Reading → Extracting → Built`, or
//! `Pending → Reading → Failed` when its text cannot be obtained. A panic
//! while extracting also ends in `Failed`. Documents never affect each other.

use std::fmt;
use std::sync::Arc;

use futures::stream::{self, StreamExt};
use tracing::{debug, warn};

use crate::extraction::ResumeExtractor;
use crate::models::{FailedDocument, ResumeRecord};
use crate::pipeline::text_source::{Document, TextSource};
use crate::scoring::BuiltRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentState {
    Pending,
    Reading,
    Extracting,
    Built,
    Failed,
}

impl fmt::Display for DocumentState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DocumentState::Pending => "pending",
            DocumentState::Reading => "reading",
            DocumentState::Extracting => "extracting",
            DocumentState::Built => "built",
            DocumentState::Failed => "failed",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentOutcome {
    Built(BuiltRecord),
    Failed(FailedDocument),
}

impl DocumentOutcome {
    pub fn state(&self) -> DocumentState {
        match self {
            DocumentOutcome::Built(_) => DocumentState::Built,
            DocumentOutcome::Failed(_) => DocumentState::Failed,
        }
    }
}

/// Built records and failures, each in enumeration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CorpusOutcome {
    pub built: Vec<BuiltRecord>,
    pub failed: Vec<FailedDocument>,
}

impl FromIterator<DocumentOutcome> for CorpusOutcome {
    fn from_iter<I: IntoIterator<Item = DocumentOutcome>>(iter: I) -> Self {
        let mut outcome = CorpusOutcome::default();
        for item in iter {
            match item {
                DocumentOutcome::Built(b) => outcome.built.push(b),
                DocumentOutcome::Failed(f) => outcome.failed.push(f),
            }
        }
        outcome
    }
}

/// Turns one document's text into a record. Runs on the blocking pool.
pub trait RecordBuilder: Send + Sync {
    fn build_record(&self, text: &str) -> ResumeRecord;
}

impl RecordBuilder for ResumeExtractor {
    fn build_record(&self, text: &str) -> ResumeRecord {
        ResumeExtractor::build_record(self, text)
    }
}

pub struct CorpusProcessor {
    builder: Arc<dyn RecordBuilder>,
    concurrency: usize,
}

impl CorpusProcessor {
    /// `concurrency` is the number of documents in flight; values below 1
    /// are treated as 1.
    pub fn new(builder: Arc<dyn RecordBuilder>, concurrency: usize) -> Self {
        Self {
            builder,
            concurrency: concurrency.max(1),
        }
    }

    /// Processes every document. Output order equals input order regardless
    /// of concurrency.
    pub async fn process(
        &self,
        source: &dyn TextSource,
        documents: Vec<Document>,
    ) -> CorpusOutcome {
        stream::iter(documents)
            .map(|document| self.process_document(source, document))
            .buffered(self.concurrency)
            .collect::<Vec<_>>()
            .await
            .into_iter()
            .collect()
    }

    pub async fn process_document(
        &self,
        source: &dyn TextSource,
        document: Document,
    ) -> DocumentOutcome {
        let id = document.id.clone();
        transition(&id, DocumentState::Pending);
        transition(&id, DocumentState::Reading);

        let text = match source.read_text(&document).await {
            Ok(text) => text,
            Err(e) => return fail(id, e.to_string()),
        };

        transition(&id, DocumentState::Extracting);
        let builder = Arc::clone(&self.builder);
        match tokio::task::spawn_blocking(move || builder.build_record(&text)).await {
            Ok(record) => {
                let outcome = DocumentOutcome::Built(BuiltRecord {
                    source: id.clone(),
                    record,
                });
                transition(&id, outcome.state());
                outcome
            }
            Err(e) => fail(id, format!("Extraction aborted: {e}")),
        }
    }
}

fn transition(id: &str, state: DocumentState) {
    debug!("Document {id}: {state}");
}

fn fail(source: String, reason: String) -> DocumentOutcome {
    warn!("Error processing {source}: {reason}");
    DocumentOutcome::Failed(FailedDocument { source, reason })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extraction::vocabulary::Vocabulary;
    use crate::pipeline::text_source::{DocumentContent, DocumentKind, TextSourceError};
    use async_trait::async_trait;
    use bytes::Bytes;
    use std::time::Duration;

    /// Returns the inline bytes as text; ids containing "bad" fail.
    struct StubSource;

    #[async_trait]
    impl TextSource for StubSource {
        async fn read_text(&self, document: &Document) -> Result<String, TextSourceError> {
            if document.id.contains("bad") {
                return Err(TextSourceError::Pdf("unreadable".to_string()));
            }
            match &document.content {
                DocumentContent::Inline(b) => Ok(String::from_utf8(b.to_vec())?),
                DocumentContent::File(_) => {
                    Err(TextSourceError::Aborted("file content not supported".to_string()))
                }
            }
        }
    }

    /// Panics on any text mentioning "boom".
    struct FragileBuilder(ResumeExtractor);

    impl RecordBuilder for FragileBuilder {
        fn build_record(&self, text: &str) -> ResumeRecord {
            if text.contains("boom") {
                panic!("extractor blew up");
            }
            self.0.build_record(text)
        }
    }

    /// Earlier documents take longer, so completion order is reversed.
    struct StaggeredSource;

    #[async_trait]
    impl TextSource for StaggeredSource {
        async fn read_text(&self, document: &Document) -> Result<String, TextSourceError> {
            let delay: u64 = document.id.trim_start_matches("doc").parse().unwrap_or(0);
            tokio::time::sleep(Duration::from_millis(100 - delay * 10)).await;
            Ok(format!("Candidate {}", document.id))
        }
    }

    fn doc(id: &str, text: &'static str) -> Document {
        Document::inline(id, DocumentKind::PlainText, Bytes::from_static(text.as_bytes()))
    }

    fn processor(concurrency: usize) -> CorpusProcessor {
        let extractor = ResumeExtractor::new(&Vocabulary::default()).unwrap();
        CorpusProcessor::new(Arc::new(extractor), concurrency)
    }

    #[tokio::test]
    async fn test_failed_document_is_skipped() {
        let docs = vec![
            doc("one.txt", "Alice Smith"),
            doc("bad.pdf", "ignored"),
            doc("three.txt", "Bob Jones"),
        ];

        let outcome = processor(1).process(&StubSource, docs).await;

        let sources: Vec<&str> = outcome.built.iter().map(|b| b.source.as_str()).collect();
        assert_eq!(sources, vec!["one.txt", "three.txt"]);
        assert_eq!(outcome.built[0].record.name, "Alice Smith");
        assert_eq!(outcome.built[1].record.name, "Bob Jones");

        assert_eq!(outcome.failed.len(), 1);
        assert_eq!(outcome.failed[0].source, "bad.pdf");
        assert!(outcome.failed[0].reason.contains("unreadable"));
    }

    #[tokio::test]
    async fn test_all_documents_fail() {
        let outcome = processor(1)
            .process(&StubSource, vec![doc("bad1", ""), doc("bad2", "")])
            .await;
        assert!(outcome.built.is_empty());
        assert_eq!(outcome.failed.len(), 2);
    }

    #[tokio::test]
    async fn test_empty_corpus() {
        let outcome = processor(1).process(&StubSource, vec![]).await;
        assert_eq!(outcome, CorpusOutcome::default());
    }

    #[tokio::test(start_paused = true)]
    async fn test_concurrency_preserves_order() {
        let docs: Vec<Document> = (0..5).map(|i| doc(&format!("doc{i}"), "")).collect();

        let outcome = processor(5).process(&StaggeredSource, docs).await;

        let sources: Vec<&str> = outcome.built.iter().map(|b| b.source.as_str()).collect();
        assert_eq!(sources, vec!["doc0", "doc1", "doc2", "doc3", "doc4"]);
    }

    #[tokio::test]
    async fn test_single_document_states() {
        let p = processor(1);
        let built = p.process_document(&StubSource, doc("ok.txt", "Carol King")).await;
        assert_eq!(built.state(), DocumentState::Built);

        let failed = p.process_document(&StubSource, doc("bad.txt", "")).await;
        assert_eq!(failed.state(), DocumentState::Failed);
    }

    #[tokio::test]
    async fn test_extraction_panic_fails_only_that_document() {
        let extractor = ResumeExtractor::new(&Vocabulary::default()).unwrap();
        let processor = CorpusProcessor::new(Arc::new(FragileBuilder(extractor)), 2);
        let docs = vec![
            doc("first.txt", "Alice Smith"),
            doc("crash.txt", "boom"),
            doc("last.txt", "Bob Jones"),
        ];

        let outcome = processor.process(&StubSource, docs).await;

        let sources: Vec<&str> = outcome.built.iter().map(|b| b.source.as_str()).collect();
        assert_eq!(sources, vec!["first.txt", "last.txt"]);
        assert_eq!(outcome.failed.len(), 1);
        assert_eq!(outcome.failed[0].source, "crash.txt");
        assert!(outcome.failed[0].reason.starts_with("Extraction aborted"));
    }

    #[test]
    fn test_zero_concurrency_is_clamped() {
        assert_eq!(processor(0).concurrency, 1);
    }
}
