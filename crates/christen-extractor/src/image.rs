//! Descriptive extraction for image formats
//!
//! Raster images carry no text layer; the adapter produces a short textual
//! description (format and dimensions) the model can at least classify on.

use std::path::Path;

use christen_domain::ExtractedContent;

/// Describe an image file from its header.
pub fn describe(path: &Path, ext: &str) -> ExtractedContent {
    match image::image_dimensions(path) {
        Ok((width, height)) => ExtractedContent::Text(format!(
            "{} image, {}x{} pixels",
            ext.to_ascii_uppercase(),
            width,
            height
        )),
        Err(e) => ExtractedContent::unavailable(format!("could not read image: {e}")),
    }
}
