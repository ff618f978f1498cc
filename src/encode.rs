//! Base64 fallback encoding for rich-content message bodies.
//!
//! When a message row has no plain text, its `attributedBody` blob (a
//! serialized rich-content payload) is returned base64-encoded instead,
//! prefixed with [`RICH_CONTENT_MARKER`] so callers can tell the two
//! encodings apart.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// Sentinel prefix marking a base64-encoded rich-content payload.
pub const RICH_CONTENT_MARKER: &str = "__BASE64__:";

/// Encode bytes as standard base64 (RFC 4648 alphabet, `=` padding).
///
/// Empty input yields an empty string.
pub fn encode(data: &[u8]) -> String {
    STANDARD.encode(data)
}

/// Wrap a rich-content blob in the marker-prefixed base64 form.
pub fn encode_rich_content(blob: &[u8]) -> String {
    format!("{RICH_CONTENT_MARKER}{}", encode(blob))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_empty_string() {
        assert_eq!(encode(&[]), "");
    }

    #[test]
    fn known_vectors() {
        assert_eq!(encode(&[0x00]), "AA==");
        assert_eq!(encode(&[0x00, 0x01]), "AAE=");
        assert_eq!(encode(&[0x00, 0x01, 0x02]), "AAEC");
    }

    #[test]
    fn decode_round_trip() {
        for len in 0..64usize {
            let data: Vec<u8> = (0..len).map(|i| (i * 37 % 251) as u8).collect();
            let decoded = STANDARD.decode(encode(&data)).expect("valid base64");
            assert_eq!(decoded, data);
        }
    }

    #[test]
    fn rich_content_is_marked() {
        let s = encode_rich_content(&[0x00, 0x01, 0x02]);
        assert_eq!(s, "__BASE64__:AAEC");
        assert!(s.starts_with(RICH_CONTENT_MARKER));
    }
}
