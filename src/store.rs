use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::RwLock;

/// The most recently uploaded document and its extracted text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredDocument {
    pub file_name: String,
    pub path: PathBuf,
    pub text: String,
}

/// Single-slot holder of the current document. Every successful upload
/// replaces the whole entry; nothing is ever merged.
#[derive(Clone, Default)]
pub struct DocumentStore {
    inner: Arc<RwLock<Option<StoredDocument>>>,
}

impl DocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn replace(&self, file_name: impl Into<String>, path: PathBuf, text: impl Into<String>) {
        let document = StoredDocument {
            file_name: file_name.into(),
            path,
            text: text.into(),
        };
        let mut guard = self.inner.write().await;
        *guard = Some(document);
    }

    /// The current document, or `None` before the first upload with text.
    pub async fn read(&self) -> Option<StoredDocument> {
        let guard = self.inner.read().await;
        guard.as_ref().filter(|doc| !doc.text.is_empty()).cloned()
    }

    pub async fn is_loaded(&self) -> bool {
        let guard = self.inner.read().await;
        guard.as_ref().is_some_and(|doc| !doc.text.is_empty())
    }
}
