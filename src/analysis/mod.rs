//! Document analysis: word count and display excerpt of the stored text.

use crate::utils::{char_prefix, word_count};

/// Characters of stored text returned by `/process`.
pub const EXCERPT_CHARS: usize = 500;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentAnalysis {
    /// Whitespace-delimited tokens in the full text.
    pub word_count: usize,
    pub excerpt: String,
}

impl DocumentAnalysis {
    pub fn message(&self) -> String {
        format!("Analysis successful! Word count: {}", self.word_count)
    }
}

pub fn analyze(text: &str) -> DocumentAnalysis {
    DocumentAnalysis {
        word_count: word_count(text),
        excerpt: char_prefix(text, EXCERPT_CHARS).to_string(),
    }
}
