use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::error::{DomainError, DomainResult};

/// Image formats accepted from signature capture devices.
const ACCEPTED_FORMATS: [&str; 4] = ["png", "jpeg", "jpg", "webp"];

/// Validate a captured signature payload.
///
/// Capture pads submit signatures as base64 data URLs
/// (`data:image/png;base64,…`). The payload must name an accepted image
/// format and carry a non-empty body that decodes as base64; anything else
/// is rejected before a row is written.
pub fn ensure_signature_image(payload: &str) -> DomainResult<()> {
    let rest = payload.strip_prefix("data:image/").ok_or_else(|| {
        DomainError::Validation("signature payload is not an image data URL".to_string())
    })?;

    let (format, body) = rest.split_once(";base64,").ok_or_else(|| {
        DomainError::Validation("signature payload is not base64-encoded".to_string())
    })?;

    if !ACCEPTED_FORMATS.contains(&format) {
        return Err(DomainError::Validation(format!(
            "unsupported signature image format: {format}"
        )));
    }

    if body.is_empty() {
        return Err(DomainError::Validation(
            "signature payload is empty".to_string(),
        ));
    }

    STANDARD
        .decode(body)
        .map_err(|_| DomainError::Validation("signature payload is not valid base64".to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // A 1x1 transparent PNG.
    const TINY_PNG: &str = "data:image/png;base64,iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNkYPhfDwAChwGA60e6kgAAAABJRU5ErkJggg==";

    #[test]
    fn accepts_png_data_urls() {
        assert!(ensure_signature_image(TINY_PNG).is_ok());
    }

    #[test]
    fn rejects_non_image_payloads() {
        for payload in [
            "hello",
            "data:text/plain;base64,aGVsbG8=",
            "data:image/png;base64,",
            "data:image/png;base64,not-@-valid-base64!",
            "data:image/tiff;base64,aGVsbG8=",
        ] {
            assert!(
                matches!(
                    ensure_signature_image(payload),
                    Err(DomainError::Validation(_))
                ),
                "payload should be rejected: {payload}"
            );
        }
    }
}
