//! Direct text reading for text-class formats

use std::fs;
use std::io;
use std::path::Path;

/// Read a file as text with lossy UTF-8 decoding.
///
/// Invalid byte sequences become replacement characters instead of failing
/// the whole extraction.
pub fn read_lossy(path: &Path) -> io::Result<String> {
    let bytes = fs::read(path)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Truncate to at most `max` characters, on a char boundary.
pub fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_read_lossy_utf8() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all("hello café".as_bytes()).unwrap();
        assert_eq!(read_lossy(file.path()).unwrap(), "hello café");
    }

    #[test]
    fn test_read_lossy_invalid_bytes() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[b'o', b'k', 0xFF, 0xFE, b'!']).unwrap();
        let text = read_lossy(file.path()).unwrap();
        assert!(text.starts_with("ok"));
        assert!(text.ends_with('!'));
    }

    #[test]
    fn test_read_missing_file() {
        assert!(read_lossy(Path::new("/nonexistent/file.txt")).is_err());
    }

    #[test]
    fn test_truncate_chars() {
        assert_eq!(truncate_chars("abcdef", 4), "abcd");
        assert_eq!(truncate_chars("abc", 10), "abc");
        // Truncation respects multi-byte boundaries
        assert_eq!(truncate_chars("café au lait", 4), "café");
    }
}
