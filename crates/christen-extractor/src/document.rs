//! Text-layer extraction for compound documents

use std::fs;
use std::path::Path;

use calamine::{open_workbook, Data, Reader, Xlsx};
use christen_domain::ExtractedContent;
use docx_rs::{DocumentChild, ParagraphChild, RunChild};
use tracing::debug;

use crate::text::truncate_chars;

/// Extract the text layer of a compound document, bounded to `max_chars`.
///
/// pptx has no text-layer backend and always reports unavailable.
pub fn extract(path: &Path, ext: &str, max_chars: usize) -> ExtractedContent {
    let result = match ext {
        "pdf" => pdf_text(path),
        "docx" => docx_text(path),
        "xlsx" => xlsx_text(path, max_chars),
        "pptx" => Err("pptx text extraction is not supported".to_string()),
        other => Err(format!("not a document format: .{other}")),
    };

    match result {
        Ok(text) if text.trim().is_empty() => {
            ExtractedContent::unavailable("document has no extractable text")
        }
        Ok(text) => {
            debug!(chars = text.len(), "document text extracted");
            ExtractedContent::Text(truncate_chars(&text, max_chars).to_string())
        }
        Err(reason) => ExtractedContent::unavailable(reason),
    }
}

fn pdf_text(path: &Path) -> Result<String, String> {
    pdf_extract::extract_text(path).map_err(|e| format!("pdf extraction failed: {e}"))
}

fn docx_text(path: &Path) -> Result<String, String> {
    let bytes = fs::read(path).map_err(|e| format!("could not read docx: {e}"))?;
    let docx = docx_rs::read_docx(&bytes).map_err(|e| format!("docx parsing failed: {e:?}"))?;

    let mut out = String::new();
    for child in &docx.document.children {
        if let DocumentChild::Paragraph(paragraph) = child {
            for pc in &paragraph.children {
                if let ParagraphChild::Run(run) = pc {
                    for rc in &run.children {
                        if let RunChild::Text(text) = rc {
                            out.push_str(&text.text);
                        }
                    }
                }
            }
            out.push('\n');
        }
    }
    Ok(out)
}

fn xlsx_text(path: &Path, max_chars: usize) -> Result<String, String> {
    let mut workbook: Xlsx<_> =
        open_workbook(path).map_err(|e| format!("xlsx parsing failed: {e}"))?;

    let mut out = String::new();
    for sheet in workbook.sheet_names().to_owned() {
        let range = match workbook.worksheet_range(&sheet) {
            Ok(range) => range,
            Err(_) => continue,
        };
        for row in range.rows() {
            let cells: Vec<String> = row
                .iter()
                .filter(|cell| !matches!(cell, Data::Empty))
                .map(|cell| cell.to_string())
                .collect();
            if !cells.is_empty() {
                out.push_str(&cells.join(", "));
                out.push('\n');
            }
        }
        // The caller truncates anyway; stop reading sheets once past budget
        if out.len() > max_chars {
            break;
        }
    }
    Ok(out)
}
