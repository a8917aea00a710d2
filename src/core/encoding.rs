// src/core/encoding.rs
//
// Byte → text with an explicit encoding decision. The routine page has been
// seen double-decoded (the `⇒` room separator arriving as `â‡’`), so text
// never reaches the parser without going through here first.

use encoding_rs::{Encoding, UTF_8};

/// How far into the document a `<meta charset>` is looked for.
const META_PRESCAN_BYTES: usize = 1024;

/// Why a given encoding was picked.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EncodingSource {
    Bom,
    Declared,
    Meta,
    Default,
}

#[derive(Debug)]
pub struct Decoded {
    pub text: String,
    pub encoding: &'static Encoding,
    pub source: EncodingSource,
    /// Malformed sequences were replaced with U+FFFD.
    pub had_errors: bool,
}

/// Decode `bytes`, preferring (in order) a BOM, the caller's declared label
/// (HTTP `Content-Type` charset or a CLI override), a `<meta>` charset in the
/// first KiB, then UTF-8.
pub fn decode_document(bytes: &[u8], declared: Option<&str>) -> Decoded {
    let (encoding, source) = pick_encoding(bytes, declared);
    let (text, used, had_errors) = encoding.decode(bytes);
    let source = if used != encoding { EncodingSource::Bom } else { source };

    if had_errors {
        logw!("Decode: {} input had malformed sequences", used.name());
    } else {
        logd!("Decode: {} ({:?})", used.name(), source);
    }

    Decoded { text: text.into_owned(), encoding: used, source, had_errors }
}

fn pick_encoding(bytes: &[u8], declared: Option<&str>) -> (&'static Encoding, EncodingSource) {
    if let Some((enc, _)) = Encoding::for_bom(bytes) {
        return (enc, EncodingSource::Bom);
    }
    if let Some(enc) = declared.and_then(|l| Encoding::for_label(l.trim().as_bytes())) {
        return (enc.output_encoding(), EncodingSource::Declared);
    }
    if let Some(enc) = meta_charset(bytes) {
        return (enc, EncodingSource::Meta);
    }
    (UTF_8, EncodingSource::Default)
}

/// Cheap prescan for `<meta charset=x>` / `<meta http-equiv=... content="...; charset=x">`.
fn meta_charset(bytes: &[u8]) -> Option<&'static Encoding> {
    let head = &bytes[..bytes.len().min(META_PRESCAN_BYTES)];
    let lower: Vec<u8> = head.iter().map(u8::to_ascii_lowercase).collect();

    let mut from = 0usize;
    while let Some(rel) = find(&lower[from..], b"<meta") {
        let start = from + rel;
        let end = lower[start..].iter().position(|&b| b == b'>').map_or(lower.len(), |e| start + e);
        if let Some(enc) = charset_in(&lower[start..end]) {
            return Some(enc.output_encoding());
        }
        from = end;
    }
    None
}

/// `text/html; charset="windows-1252"` → `windows-1252`.
pub fn charset_from_content_type(content_type: &str) -> Option<String> {
    let lower = content_type.to_ascii_lowercase();
    let i = lower.find("charset=")? + "charset=".len();
    let label: String = lower[i..]
        .trim_start_matches(['"', '\''])
        .chars()
        .take_while(|c| !matches!(c, '"' | '\'' | ';' | ' '))
        .collect();
    (!label.is_empty()).then_some(label)
}

fn charset_in(tag: &[u8]) -> Option<&'static Encoding> {
    let i = find(tag, b"charset")? + b"charset".len();
    let rest = &tag[i..];
    let rest = &rest[rest.iter().position(|&b| b != b' ')?..];
    let rest = rest.strip_prefix(b"=")?;
    let label: Vec<u8> = rest
        .iter()
        .copied()
        .skip_while(|b| matches!(b, b' ' | b'"' | b'\''))
        .take_while(|b| !matches!(b, b'"' | b'\'' | b';' | b' ' | b'/' | b'>'))
        .collect();
    Encoding::for_label(&label)
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use encoding_rs::WINDOWS_1252;

    #[test]
    fn utf8_arrow_survives() {
        let d = decode_document("B:Main⇒Room:301".as_bytes(), None);
        assert_eq!(d.text, "B:Main⇒Room:301");
        assert_eq!(d.source, EncodingSource::Default);
        assert!(!d.had_errors);
    }

    #[test]
    fn bom_beats_declared_label() {
        let mut bytes = vec![0xEF, 0xBB, 0xBF];
        bytes.extend_from_slice("⇒".as_bytes());
        let d = decode_document(&bytes, Some("windows-1252"));
        assert_eq!(d.text, "⇒");
        assert_eq!(d.source, EncodingSource::Bom);
    }

    #[test]
    fn declared_label_beats_meta() {
        let html = br#"<html><head><meta charset="windows-1252"></head>"#;
        let d = decode_document(html, Some("utf-8"));
        assert_eq!(d.encoding, UTF_8);
        assert_eq!(d.source, EncodingSource::Declared);
    }

    #[test]
    fn meta_charset_is_honoured() {
        let mut html = b"<html><head><meta http-equiv=\"Content-Type\" content=\"text/html; charset=windows-1252\"></head><body>".to_vec();
        html.push(0xE9); // é in windows-1252
        let d = decode_document(&html, None);
        assert_eq!(d.encoding, WINDOWS_1252);
        assert_eq!(d.source, EncodingSource::Meta);
        assert!(d.text.ends_with('é'));
    }

    #[test]
    fn content_type_charset() {
        assert_eq!(charset_from_content_type("text/html; charset=UTF-8").as_deref(), Some("utf-8"));
        assert_eq!(charset_from_content_type("text/html; charset=\"iso-8859-1\"").as_deref(), Some("iso-8859-1"));
        assert_eq!(charset_from_content_type("text/html"), None);
    }
}
