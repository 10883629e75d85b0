// PDF text layer extraction

use std::path::Path;

use lopdf::Document;
use tracing::warn;

use super::{ExtractionError, ExtractionResult};

/// Concatenate the text of every page in page order, one newline after each page.
/// Pages whose text cannot be decoded are skipped.
pub fn extract_pdf(path: &Path) -> ExtractionResult {
    let data = std::fs::read(path)?;
    let doc = Document::load_mem(&data).map_err(|e| ExtractionError::Pdf(e.to_string()))?;

    let mut text = String::new();
    for page_number in doc.get_pages().keys() {
        match doc.extract_text(&[*page_number]) {
            Ok(page_text) => text.push_str(&page_text),
            Err(e) => warn!(page = page_number, error = %e, "Could not extract text from PDF page"),
        }
        text.push('\n');
    }

    Ok(text)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Object, Stream};

    /// Write a PDF with one Courier text line per page.
    pub(crate) fn write_pdf(path: &Path, pages: &[&str]) {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Courier",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! {
                "F1" => font_id,
            },
        });

        let mut kids: Vec<Object> = Vec::new();
        for line in pages {
            let content = Content {
                operations: vec![
                    Operation::new("BT", vec![]),
                    Operation::new("Tf", vec!["F1".into(), 24.into()]),
                    Operation::new("Td", vec![72.into(), 700.into()]),
                    Operation::new("Tj", vec![Object::string_literal(*line)]),
                    Operation::new("ET", vec![]),
                ],
            };
            let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
                "Resources" => resources_id,
            });
            kids.push(page_id.into());
        }

        let count = kids.len() as i64;
        let pages_dict = dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
        };
        doc.objects.insert(pages_id, Object::Dictionary(pages_dict));
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);
        doc.save(path).unwrap();
    }

    #[test]
    fn test_extract_pages_in_order() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("statement.pdf");
        write_pdf(&path, &["Revenue: 100", "Net income: 25"]);

        let text = extract_pdf(&path).unwrap();
        let revenue = text.find("Revenue: 100").expect("first page text");
        let income = text.find("Net income: 25").expect("second page text");
        assert!(revenue < income);
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn test_corrupt_pdf_is_an_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("broken.pdf");
        std::fs::write(&path, b"this is not a pdf").unwrap();

        let err = extract_pdf(&path).unwrap_err();
        assert!(matches!(err, ExtractionError::Pdf(_)));
        assert!(err.to_string().starts_with("Error reading PDF"));
    }
}
