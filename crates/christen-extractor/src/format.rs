//! File format classification

use std::path::Path;

/// Supported format classes, dispatched on file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatClass {
    /// Plain or structured text, read directly
    Text,
    /// Raster or vector image, described rather than read
    Image,
    /// Compound document with an extractable text layer
    Document,
    /// Not a supported format
    Unknown,
}

impl FormatClass {
    /// Classify a lowercased extension (no leading dot)
    pub fn from_extension(ext: &str) -> Self {
        match ext {
            "txt" | "md" | "csv" | "json" | "yaml" | "yml" | "xml" | "html" | "htm" | "css" => {
                Self::Text
            }
            "jpg" | "jpeg" | "png" | "gif" | "svg" | "ico" => Self::Image,
            "pdf" | "docx" | "xlsx" | "pptx" => Self::Document,
            _ => Self::Unknown,
        }
    }
}

/// The file's extension, lowercased and without the dot; empty when absent
pub fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_formats() {
        for ext in ["txt", "md", "csv", "json", "yaml", "yml", "xml", "html", "htm", "css"] {
            assert_eq!(FormatClass::from_extension(ext), FormatClass::Text);
        }
    }

    #[test]
    fn test_image_formats() {
        for ext in ["jpg", "jpeg", "png", "gif", "svg", "ico"] {
            assert_eq!(FormatClass::from_extension(ext), FormatClass::Image);
        }
    }

    #[test]
    fn test_document_formats() {
        for ext in ["pdf", "docx", "xlsx", "pptx"] {
            assert_eq!(FormatClass::from_extension(ext), FormatClass::Document);
        }
    }

    #[test]
    fn test_unknown_formats() {
        assert_eq!(FormatClass::from_extension("exe"), FormatClass::Unknown);
        assert_eq!(FormatClass::from_extension(""), FormatClass::Unknown);
    }

    #[test]
    fn test_extension_of() {
        assert_eq!(extension_of(Path::new("report.PDF")), "pdf");
        assert_eq!(extension_of(Path::new("archive.tar.gz")), "gz");
        assert_eq!(extension_of(Path::new("README")), "");
        assert_eq!(extension_of(Path::new(".gitignore")), "");
    }
}
