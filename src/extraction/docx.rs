// Word document paragraph extraction

use std::path::Path;

use docx_rs::{DocumentChild, Paragraph, ParagraphChild, Run, RunChild};

use super::{ExtractionError, ExtractionResult};

/// Join the text of every body paragraph with newlines.
/// Tables, headers, footers and embedded objects are not read.
pub fn extract_docx(path: &Path) -> ExtractionResult {
    let bytes = std::fs::read(path)?;
    let doc = docx_rs::read_docx(&bytes).map_err(|e| ExtractionError::Docx(e.to_string()))?;

    let paragraphs: Vec<String> = doc
        .document
        .children
        .iter()
        .filter_map(|child| match child {
            DocumentChild::Paragraph(para) => Some(paragraph_text(para)),
            _ => None,
        })
        .collect();

    Ok(paragraphs.join("\n"))
}

fn paragraph_text(para: &Paragraph) -> String {
    let mut text = String::new();
    for child in &para.children {
        match child {
            ParagraphChild::Run(run) => push_run_text(run, &mut text),
            ParagraphChild::Hyperlink(link) => {
                for inner in &link.children {
                    if let ParagraphChild::Run(run) = inner {
                        push_run_text(run, &mut text);
                    }
                }
            }
            _ => {}
        }
    }
    text
}

fn push_run_text(run: &Run, output: &mut String) {
    for run_child in &run.children {
        if let RunChild::Text(t) = run_child {
            output.push_str(&t.text);
        }
    }
}
