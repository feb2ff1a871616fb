//! Text-safe encoding of database images.
//!
//! The private storage capability only accepts text, so raw database bytes
//! are stored as standard padded base64.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use notas_common::{Error, Result};

/// Encode raw bytes as base64 text.
pub fn encode(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Decode base64 text produced by [`encode`] back into raw bytes.
pub fn decode(text: &str) -> Result<Vec<u8>> {
    STANDARD
        .decode(text.trim_end())
        .map_err(|e| Error::encoding(format!("Invalid base64 database image: {e}")))
}
