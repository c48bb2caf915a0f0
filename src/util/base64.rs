use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use super::error::UtilError;

/// Decodes base64 file content as returned by a contents API.
///
/// The API wraps the payload every 60 characters and may pad it with
/// whitespace, so every ASCII whitespace character is removed before the
/// remainder is decoded with the standard (padded, non URL-safe) alphabet.
/// Anything else outside the alphabet is rejected.
///
/// # Errors
///
/// Returns [`UtilError::Decode`] if the stripped input is not valid base64.
/// No partial output is produced.
pub fn decode_file_content(encoded: &str) -> Result<Vec<u8>, UtilError> {
    let stripped: Vec<u8> = encoded
        .bytes()
        .filter(|b| !b.is_ascii_whitespace())
        .collect();

    Ok(STANDARD.decode(stripped)?)
}

/// Encodes raw bytes as unwrapped, padded standard base64.
pub fn encode_file_content<T: AsRef<[u8]>>(input: T) -> String {
    STANDARD.encode(input.as_ref())
}
