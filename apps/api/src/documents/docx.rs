//! Raw text from a Word (OOXML) document: the runs of `word/document.xml`,
//! one line per paragraph.

use std::io::{Cursor, Read};

use quick_xml::events::Event;
use quick_xml::Reader;

use super::DocumentError;

const DOCUMENT_PART: &str = "word/document.xml";

/// Local file header signature every OOXML package starts with.
pub(crate) const ZIP_MAGIC: &[u8] = b"PK\x03\x04";

pub(crate) fn is_zip_package(bytes: &[u8]) -> bool {
    bytes.starts_with(ZIP_MAGIC)
}

pub fn extract_docx_text(bytes: &[u8]) -> Result<String, DocumentError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| DocumentError::Docx(format!("not a Word package: {e}")))?;

    let mut xml = String::new();
    archive
        .by_name(DOCUMENT_PART)
        .map_err(|e| DocumentError::Docx(format!("{DOCUMENT_PART} missing: {e}")))?
        .read_to_string(&mut xml)
        .map_err(|e| DocumentError::Docx(format!("{DOCUMENT_PART} unreadable: {e}")))?;

    paragraphs_text(&xml)
}

fn paragraphs_text(xml: &str) -> Result<String, DocumentError> {
    let mut reader = Reader::from_str(xml);
    let mut text = String::new();
    let mut in_text_run = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) if e.name().as_ref() == b"w:t" => in_text_run = true,
            Ok(Event::End(e)) => match e.name().as_ref() {
                b"w:t" => in_text_run = false,
                b"w:p" => text.push('\n'),
                _ => {}
            },
            Ok(Event::Empty(e)) => match e.name().as_ref() {
                b"w:tab" => text.push('\t'),
                b"w:br" | b"w:cr" => text.push('\n'),
                _ => {}
            },
            Ok(Event::Text(t)) if in_text_run => {
                let run = t
                    .unescape()
                    .map_err(|e| DocumentError::Docx(format!("bad text run: {e}")))?;
                text.push_str(&run);
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(DocumentError::Docx(format!(
                    "malformed {DOCUMENT_PART} at byte {}: {e}",
                    reader.buffer_position()
                )))
            }
            _ => {}
        }
    }

    Ok(text)
}

#[cfg(test)]
pub(crate) mod fixtures {
    use std::io::{Cursor, Write};

    use zip::write::FileOptions;
    use zip::{CompressionMethod, ZipWriter};

    /// Minimal Word package whose body holds the given paragraphs.
    pub fn docx_with_paragraphs(paragraphs: &[&str]) -> Vec<u8> {
        let body: String = paragraphs
            .iter()
            .map(|p| format!("<w:p><w:r><w:t xml:space=\"preserve\">{p}</w:t></w:r></w:p>"))
            .collect();
        let xml = format!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\
             <w:document xmlns:w=\"http://schemas.openxmlformats.org/wordprocessingml/2006/main\">\
             <w:body>{body}</w:body></w:document>"
        );
        package_with(&[("word/document.xml", xml.as_str())])
    }

    pub fn package_with(parts: &[(&str, &str)]) -> Vec<u8> {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        let options = FileOptions::default().compression_method(CompressionMethod::Stored);
        for (name, content) in parts {
            writer.start_file(*name, options).unwrap();
            writer.write_all(content.as_bytes()).unwrap();
        }
        writer.finish().unwrap().into_inner()
    }
}
