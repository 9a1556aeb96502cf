use std::path::Path;

use base64::{Engine as _, engine::general_purpose::STANDARD};
use thiserror::Error;

const SCHEME: &str = "data:";
const DEFAULT_MEDIA_TYPE: &str = "text/plain";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DataUriError {
    #[error("not a data URI (missing `data:` prefix)")]
    MissingScheme,
    #[error("data URI has no `,` before its payload")]
    MissingComma,
    #[error("malformed data URI parameter `{0}`")]
    MalformedParameter(String),
    #[error("invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),
}

/// A parsed `data:` URI borrowing from its source string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUri<'a> {
    pub media_type: &'a str,
    pub params: Vec<(&'a str, &'a str)>,
    pub base64: bool,
    pub payload: &'a str,
}

impl<'a> DataUri<'a> {
    pub fn parse(uri: &'a str) -> Result<Self, DataUriError> {
        let has_scheme = uri
            .get(..SCHEME.len())
            .is_some_and(|s| s.eq_ignore_ascii_case(SCHEME));
        if !has_scheme {
            return Err(DataUriError::MissingScheme);
        }
        let rest = &uri[SCHEME.len()..];
        let (header, payload) = rest.split_once(',').ok_or(DataUriError::MissingComma)?;

        let mut parts = header.split(';');
        let media_type = parts.next().map(str::trim).unwrap_or_default();
        let media_type = if media_type.is_empty() {
            DEFAULT_MEDIA_TYPE
        } else {
            media_type
        };

        let mut params = Vec::new();
        let mut base64 = false;
        for part in parts {
            if part.eq_ignore_ascii_case("base64") {
                base64 = true;
                continue;
            }
            match part.split_once('=') {
                Some((k, v)) if !k.trim().is_empty() => params.push((k.trim(), v.trim())),
                _ => return Err(DataUriError::MalformedParameter(part.to_string())),
            }
        }

        Ok(DataUri {
            media_type,
            params,
            base64,
            payload,
        })
    }

    /// True for any `image/*` media type.
    pub fn is_image(&self) -> bool {
        self.media_type
            .split_once('/')
            .is_some_and(|(top, sub)| top.eq_ignore_ascii_case("image") && !sub.is_empty())
    }

    pub fn param(&self, name: &str) -> Option<&'a str> {
        self.params
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| *v)
    }

    /// Payload bytes. Non-base64 payloads are returned verbatim, without percent-decoding.
    pub fn decode(&self) -> Result<Vec<u8>, DataUriError> {
        if self.base64 {
            Ok(STANDARD.decode(self.payload.trim())?)
        } else {
            Ok(self.payload.as_bytes().to_vec())
        }
    }
}

/// Encode raw bytes as a base64 data URI.
pub fn to_data_url(
    media_type: &str,
    bytes: &[u8],
) -> String {
    format!("data:{media_type};base64,{}", STANDARD.encode(bytes))
}

/// Image media type for a file, judged by its extension.
pub fn media_type_for_path(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        "svg" => Some("image/svg+xml"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::LOGO;

    #[test]
    fn parses_logo_header() {
        let uri = DataUri::parse(LOGO).unwrap();
        assert_eq!(uri.media_type, "image/svg+xml");
        assert_eq!(uri.param("Charset"), Some("utf-8"));
        assert!(!uri.base64);
        assert!(uri.is_image());
        assert!(uri.payload.starts_with("<svg"));
    }

    #[test]
    fn empty_media_type_defaults_to_text_plain() {
        let uri = DataUri::parse("data:,hello").unwrap();
        assert_eq!(uri.media_type, "text/plain");
        assert!(!uri.is_image());
        assert_eq!(uri.decode().unwrap(), b"hello");
    }

    #[test]
    fn payload_keeps_later_commas() {
        let uri = DataUri::parse("data:text/csv,a,b,c").unwrap();
        assert_eq!(uri.payload, "a,b,c");
    }

    #[test]
    fn rejects_bad_input() {
        assert_eq!(
            DataUri::parse("http://example.com/logo.svg"),
            Err(DataUriError::MissingScheme)
        );
        assert_eq!(
            DataUri::parse("data:image/png;base64"),
            Err(DataUriError::MissingComma)
        );
        assert_eq!(
            DataUri::parse("data:image/png;charset,xx"),
            Err(DataUriError::MalformedParameter("charset".into()))
        );
        let bad = DataUri::parse("data:image/png;base64,!!!").unwrap();
        assert!(matches!(bad.decode(), Err(DataUriError::Base64(_))));
    }

    #[test]
    fn scheme_is_case_insensitive() {
        let uri = DataUri::parse("DATA:image/gif;BASE64,R0lG").unwrap();
        assert!(uri.base64);
        assert!(uri.is_image());
    }

    #[test]
    fn encodes_user_picture() {
        let url = to_data_url("image/png", &[0x89, b'P', b'N', b'G']);
        assert_eq!(url, "data:image/png;base64,iVBORw==");
        let uri = DataUri::parse(&url).unwrap();
        assert_eq!(uri.decode().unwrap(), vec![0x89, b'P', b'N', b'G']);
    }

    #[test]
    fn media_type_from_extension() {
        assert_eq!(media_type_for_path(Path::new("me.JPG")), Some("image/jpeg"));
        assert_eq!(media_type_for_path(Path::new("a/b/logo.svg")), Some("image/svg+xml"));
        assert_eq!(media_type_for_path(Path::new("notes.txt")), None);
        assert_eq!(media_type_for_path(Path::new("Makefile")), None);
    }
}
