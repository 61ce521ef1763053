//! Lossless round-trip between an embedding and its stored byte form.
//!
//! Each element is serialized as a 4-byte IEEE-754 single-precision float in
//! little-endian order, so a stored blob is always exactly `4 * dimensions`
//! bytes. Providers that emit higher-precision values upstream lose that
//! extra precision here; relative to its own 32-bit format the codec is
//! exact, NaN and infinity included.

use super::errors::VectorError;

/// Byte width of one serialized element.
pub const ELEMENT_SIZE: usize = std::mem::size_of::<f32>();

/// Serialize an embedding into its storage form.
///
/// Never fails; an empty embedding encodes to an empty blob.
pub fn encode(vector: &[f32]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(vector.len() * ELEMENT_SIZE);
    for value in vector {
        bytes.extend_from_slice(&value.to_le_bytes());
    }
    bytes
}

/// Deserialize a stored blob back into an embedding.
///
/// Fails with [`VectorError::MalformedEncoding`] if the blob length is not a
/// multiple of the element width. An empty blob decodes to an empty
/// embedding.
pub fn decode(bytes: &[u8]) -> Result<Vec<f32>, VectorError> {
    if bytes.len() % ELEMENT_SIZE != 0 {
        return Err(VectorError::MalformedEncoding { len: bytes.len() });
    }

    Ok(bytes
        .chunks_exact(ELEMENT_SIZE)
        .map(|chunk| f32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect())
}
