//! # QR Code Links
//!
//! Builds image URLs for the qrserver.com QR generator. The core never
//! downloads the image; front-ends hand the URL to whatever renders it.
//!
//! The payload is percent-encoded with the same reserved set JavaScript's
//! `encodeURIComponent` uses, so URLs stay interchangeable with web
//! front-ends pointing at the same generator.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::errors::{ToolError, ToolResult};

/// Image generator endpoint.
const QR_ENDPOINT: &str = "https://api.qrserver.com/v1/create-qr-code/";

/// Default edge length of the generated image.
pub const DEFAULT_SIZE_PX: u32 = 200;

/// Everything `encodeURIComponent` escapes: non-alphanumeric except
/// `- _ . ! ~ * ' ( )`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Build a QR image URL for arbitrary text or a link.
///
/// # Returns
///
/// * `Ok(String)` - Generator URL producing a `size_px` square image
/// * `Err(ToolError)` - `MissingField` for empty data, `InvalidInput` for
///   a zero size
pub fn qr_code_url(data: &str, size_px: u32) -> ToolResult<String> {
    if data.is_empty() {
        return Err(ToolError::missing_field("data"));
    }
    if size_px == 0 {
        return Err(ToolError::invalid_input(
            "size_px",
            size_px.to_string(),
            "Image size must be at least one pixel",
        ));
    }

    let encoded = utf8_percent_encode(data, COMPONENT);
    Ok(format!(
        "{}?data={}&size={}x{}",
        QR_ENDPOINT, encoded, size_px, size_px
    ))
}
