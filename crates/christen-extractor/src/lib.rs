//! Christen Content Extractor
//!
//! Turns a file into text or a textual description for the suggestion
//! pipeline.
//!
//! # Overview
//!
//! Supported formats fall into three classes:
//!
//! - **text** (txt, md, csv, json, yaml/yml, xml, html/htm, css): read
//!   directly with lossy UTF-8 decoding
//! - **image** (jpg, jpeg, png, gif, svg, ico): described from the image
//!   header; svg is XML and is read as text
//! - **document** (pdf, docx, xlsx, pptx): text layer extracted via the
//!   per-format backend
//!
//! # Failure model
//!
//! Extraction is total: it never panics and never returns an error. Any
//! failure — missing file, unsupported format, corrupt content, empty
//! content — is reported as [`ExtractedContent::Unavailable`] and the
//! pipeline degrades to a generic fallback name.

#![warn(missing_docs)]

mod document;
mod format;
mod image;
mod text;

use std::path::Path;

use christen_domain::{ContentExtractor, ExtractedContent};
use tracing::debug;

pub use format::{extension_of, FormatClass};

/// Default content budget in characters; keeps the downstream prompt well
/// inside model token limits
pub const DEFAULT_MAX_CONTENT_CHARS: usize = 12_000;

/// Content extractor dispatching on file extension
#[derive(Debug, Clone)]
pub struct FileExtractor {
    max_chars: usize,
}

impl FileExtractor {
    /// Create an extractor with the default content budget
    pub fn new() -> Self {
        Self {
            max_chars: DEFAULT_MAX_CONTENT_CHARS,
        }
    }

    /// Override the content budget (characters)
    pub fn with_max_chars(mut self, max_chars: usize) -> Self {
        self.max_chars = max_chars;
        self
    }
}

impl Default for FileExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentExtractor for FileExtractor {
    fn extract(&self, path: &Path) -> ExtractedContent {
        let ext = extension_of(path);
        if ext.is_empty() {
            return ExtractedContent::unavailable("file has no extension");
        }

        debug!(path = %path.display(), extension = %ext, "extracting content");

        match FormatClass::from_extension(&ext) {
            FormatClass::Text => read_as_text(path, self.max_chars),
            // svg is a vector format but its XML source is useful text
            FormatClass::Image if ext == "svg" => read_as_text(path, self.max_chars),
            FormatClass::Image => image::describe(path, &ext),
            FormatClass::Document => document::extract(path, &ext, self.max_chars),
            FormatClass::Unknown => {
                ExtractedContent::unavailable(format!("unsupported file format: .{ext}"))
            }
        }
    }
}

fn read_as_text(path: &Path, max_chars: usize) -> ExtractedContent {
    match text::read_lossy(path) {
        Ok(content) if content.trim().is_empty() => {
            ExtractedContent::unavailable("no extractable content")
        }
        Ok(content) => ExtractedContent::Text(text::truncate_chars(&content, max_chars).to_string()),
        Err(e) => ExtractedContent::unavailable(format!("could not read file: {e}")),
    }
}
