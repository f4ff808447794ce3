//! Output encoding for raw KDF bytes.

/// Lowercase hex, two digits per byte, no separator and no prefix.
#[must_use]
pub fn to_hex(bytes: &[u8]) -> String {
    data_encoding::HEXLOWER.encode(bytes)
}
