//! Raw binary interchange for bit vectors.
//!
//! The only long-lived format this crate commits to is the bit-vector
//! layout itself: little-endian `u64` words, LSB-first within each word.
//! This module provides zero-copy casts between words and bytes, plus a
//! minimal framed encoding of a [`BitVector`]: a little-endian `u64` bit
//! count followed by the raw words. Index structures are rebuilt after
//! decoding, never serialized.
//!
//! ## Example
//!
//! ```
//! use poprank::{binary, BitVector};
//!
//! let mut bv = BitVector::new(100);
//! bv.set(42, true);
//!
//! let bytes = binary::encode(&bv);
//! let restored = binary::decode(&bytes).unwrap();
//! assert_eq!(restored.len(), 100);
//! assert!(restored.get(42));
//! ```

#[cfg(not(any(test, feature = "std")))]
use alloc::vec::Vec;

use bytemuck::cast_slice;

use crate::bit_vector::BitVector;

/// View a slice of u64 words as raw little-endian bytes.
#[inline]
pub fn words_to_bytes(words: &[u64]) -> &[u8] {
    cast_slice(words)
}

/// View raw bytes as u64 words.
///
/// # Panics
///
/// Panics if `bytes.len()` is not a multiple of 8 or the bytes are not
/// 8-byte aligned.
#[inline]
pub fn bytes_to_words(bytes: &[u8]) -> &[u64] {
    if bytes.is_empty() {
        return &[];
    }
    cast_slice(bytes)
}

/// Encode a bit vector as a little-endian `u64` bit count followed by its
/// raw words.
pub fn encode(bv: &BitVector) -> Vec<u8> {
    let mut out = Vec::with_capacity(8 + bv.num_words() * 8);
    out.extend_from_slice(&(bv.len() as u64).to_le_bytes());
    out.extend_from_slice(words_to_bytes(bv.data()));
    out
}

/// Decode a bit vector produced by [`encode`].
///
/// Returns `None` if the framing is malformed (truncated header, word
/// payload not matching the bit count, or trailing bytes).
pub fn decode(bytes: &[u8]) -> Option<BitVector> {
    let header = bytes.get(..8)?;
    let bits = u64::from_le_bytes(header.try_into().ok()?) as usize;
    let payload = &bytes[8..];

    let expected_words = (bits >> 6) + 1;
    if payload.len() != expected_words * 8 {
        return None;
    }

    let mut words = Vec::with_capacity(expected_words);
    for chunk in payload.chunks_exact(8) {
        words.push(u64::from_le_bytes(chunk.try_into().ok()?));
    }
    Some(BitVector::from_words(words, bits))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_to_bytes_little_endian() {
        let words = [0x0123_4567_89AB_CDEFu64];
        let bytes = words_to_bytes(&words);
        assert_eq!(bytes, &[0xEF, 0xCD, 0xAB, 0x89, 0x67, 0x45, 0x23, 0x01]);
    }

    #[test]
    fn bytes_to_words_round_trip() {
        let original = [0x1111_1111_1111_1111u64, u64::MAX, 0];
        let bytes = words_to_bytes(&original);
        assert_eq!(bytes_to_words(bytes), &original);
    }

    #[test]
    fn empty_slices() {
        assert!(words_to_bytes(&[]).is_empty());
        assert!(bytes_to_words(&[]).is_empty());
    }

    #[test]
    fn encode_decode_round_trip() {
        let mut bv = BitVector::new(1000);
        for i in (0..1000).step_by(7) {
            bv.set(i, true);
        }

        let bytes = encode(&bv);
        assert_eq!(bytes.len(), 8 + bv.num_words() * 8);

        let restored = decode(&bytes).unwrap();
        assert_eq!(restored.len(), 1000);
        for i in 0..1000 {
            assert_eq!(restored.get(i), bv.get(i), "bit {}", i);
        }
    }

    #[test]
    fn encode_decode_empty() {
        let bv = BitVector::new(0);
        let restored = decode(&encode(&bv)).unwrap();
        assert_eq!(restored.len(), 0);
    }

    #[test]
    fn decode_rejects_truncated_header() {
        assert!(decode(&[1, 2, 3]).is_none());
    }

    #[test]
    fn decode_rejects_bad_payload_length() {
        let bv = BitVector::new(100);
        let mut bytes = encode(&bv);
        bytes.pop();
        assert!(decode(&bytes).is_none());
        bytes.push(0);
        bytes.push(0);
        assert!(decode(&bytes).is_none());
    }
}
