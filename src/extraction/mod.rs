//! Text extraction
//!
//! Turns an uploaded file into plain text. The reader is chosen once from the
//! file extension through [`DocumentFormat`]:
//! - `.pdf` - text layer of every page (lopdf)
//! - `.docx` - paragraph text (docx-rs)
//! - `.csv` - aligned text table (csv)
//! - `.xlsx` / `.xls` - first worksheet as an aligned text table (calamine)

pub mod docx;
pub mod pdf;
pub mod tabular;

use std::path::Path;

/// Failure to turn a stored file into text.
#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("Unsupported file type: {extension:?}")]
    Unsupported { extension: String },

    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Error reading PDF: {0}")]
    Pdf(String),

    #[error("Error reading DOCX: {0}")]
    Docx(String),

    #[error("Error reading CSV: {0}")]
    Csv(String),

    #[error("Error reading Excel file: {0}")]
    Spreadsheet(String),
}

impl ExtractionError {
    /// True when the format is simply not handled, as opposed to a corrupt
    /// or unreadable file.
    pub fn is_unsupported(&self) -> bool {
        matches!(self, ExtractionError::Unsupported { .. })
    }
}

pub type ExtractionResult = Result<String, ExtractionError>;

/// Supported upload formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    Docx,
    Csv,
    Spreadsheet,
    Unsupported,
}

impl DocumentFormat {
    pub fn from_extension(extension: &str) -> Self {
        match extension.to_ascii_lowercase().as_str() {
            "pdf" => DocumentFormat::Pdf,
            "docx" => DocumentFormat::Docx,
            "csv" => DocumentFormat::Csv,
            "xlsx" | "xls" => DocumentFormat::Spreadsheet,
            _ => DocumentFormat::Unsupported,
        }
    }

    pub fn from_path(path: &Path) -> Self {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(Self::from_extension)
            .unwrap_or(DocumentFormat::Unsupported)
    }

    /// Run this format's reader against `path`.
    pub fn extract(self, path: &Path) -> ExtractionResult {
        match self {
            DocumentFormat::Pdf => pdf::extract_pdf(path),
            DocumentFormat::Docx => docx::extract_docx(path),
            DocumentFormat::Csv => tabular::extract_csv(path),
            DocumentFormat::Spreadsheet => tabular::extract_spreadsheet(path),
            DocumentFormat::Unsupported => Err(ExtractionError::Unsupported {
                extension: path
                    .extension()
                    .map(|ext| ext.to_string_lossy().into_owned())
                    .unwrap_or_default(),
            }),
        }
    }
}

/// Extract the text of the file at `path`, picking the reader by extension.
pub fn extract_text(path: &Path) -> ExtractionResult {
    let format = DocumentFormat::from_path(path);
    tracing::debug!(path = %path.display(), ?format, "Extracting text");
    format.extract(path)
}
