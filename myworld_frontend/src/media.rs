use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;

const DEFAULT_MIME: &str = "application/octet-stream";

/// Encodes raw bytes as `data:<mime>;base64,<payload>`, sniffing the MIME type.
pub fn bytes_to_data_url(bytes: &[u8]) -> String {
    let mime = infer::get(bytes)
        .map(|kind| kind.mime_type())
        .unwrap_or(DEFAULT_MIME);
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}

pub fn file_to_data_url(path: &Path) -> Result<String> {
    let bytes = fs::read(path).with_context(|| format!("failed to read image {:?}", path))?;
    Ok(bytes_to_data_url(&bytes))
}

/// Decodes a base64 data URL back to bytes; `None` for anything else.
pub fn decode_data_url(reference: &str) -> Option<Vec<u8>> {
    let rest = reference.strip_prefix("data:")?;
    let (meta, payload) = rest.split_once(',')?;
    if !meta.ends_with(";base64") {
        return None;
    }
    STANDARD.decode(payload.trim()).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_MAGIC: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 0];

    #[test]
    fn png_bytes_get_png_mime() {
        let url = bytes_to_data_url(PNG_MAGIC);
        assert!(url.starts_with("data:image/png;base64,"));
        assert_eq!(decode_data_url(&url).as_deref(), Some(PNG_MAGIC));
    }

    #[test]
    fn unknown_bytes_fall_back_to_octet_stream() {
        let url = bytes_to_data_url(b"hello");
        assert_eq!(url, "data:application/octet-stream;base64,aGVsbG8=");
    }

    #[test]
    fn non_data_references_do_not_decode() {
        assert_eq!(decode_data_url("https://example.com/a.png"), None);
        assert_eq!(decode_data_url("data:text/plain,hello"), None);
    }

    #[test]
    fn reads_file_from_disk() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("avatar.png");
        fs::write(&path, PNG_MAGIC).expect("write");
        let url = file_to_data_url(&path).expect("encode");
        assert!(url.starts_with("data:image/png;base64,"));
        assert!(file_to_data_url(&dir.path().join("missing.png")).is_err());
    }
}
