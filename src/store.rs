// src/store.rs
//
// Local cache of the fetched routine page. Always stored as UTF-8 text, so
// reading it back never depends on what the page's <meta> claims.

use std::{fs, path::Path};

use crate::core::encoding::decode_document;
use crate::error::{Error, Result};
use crate::file::ensure_parent;

pub fn save_page(path: &Path, html: &str) -> Result<()> {
    ensure_parent(path)?;
    fs::write(path, html).map_err(|e| Error::io(path, e))
}

/// Read a cached page. `encoding` overrides the UTF-8 the cache is written in
/// (for pages saved by other tools).
pub fn load_page(path: &Path, encoding: Option<&str>) -> Result<String> {
    let bytes = fs::read(path).map_err(|e| Error::io(path, e))?;
    logd!("Cache: read {} ({} bytes)", path.display(), bytes.len());
    Ok(decode_document(&bytes, Some(encoding.unwrap_or("utf-8"))).text)
}

/// Read any HTML file, sniffing the encoding (BOM, `<meta>`, else UTF-8)
/// unless one is given.
pub fn read_html(path: &Path, encoding: Option<&str>) -> Result<String> {
    let bytes = fs::read(path).map_err(|e| Error::io(path, e))?;
    Ok(decode_document(&bytes, encoding).text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cache_round_trips_utf8_even_with_lying_meta() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("routine.php.html");
        let html = r#"<meta charset="windows-1252"><td>B:Main⇒Room:1</td>"#;

        save_page(&path, html).unwrap();
        assert_eq!(load_page(&path, None).unwrap(), html);
    }

    #[test]
    fn read_html_sniffs_meta() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("legacy.html");
        let mut bytes = b"<meta charset=\"windows-1252\"><p>caf".to_vec();
        bytes.push(0xE9);
        fs::write(&path, &bytes).unwrap();

        assert!(read_html(&path, None).unwrap().ends_with("café"));
    }

    #[test]
    fn missing_cache_is_an_io_error() {
        let err = load_page(Path::new("/definitely/not/here.html"), None).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}
