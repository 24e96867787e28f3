//! Slot frame codec
//!
//! Wraps a payload in a small checksummed header so a torn or foreign file
//! is detected instead of being handed to the JSON decoder.

use bytes::{Buf, BufMut, Bytes, BytesMut};

use crate::error::{DiaryError, Result};

/// Magic bytes identifying a flockdiary slot file
pub const MAGIC: &[u8; 4] = b"FDKV";

/// Current slot format version
pub const VERSION: u16 = 1;

/// Header size: Magic (4) + Version (2) + CRC (4) + Len (4) = 14 bytes
pub const HEADER_SIZE: usize = 14;

/// Encode a payload into a slot frame
///
/// Format: magic (4) + version (2) + crc32 (4) + payload_len (4) + payload
pub fn encode_frame(payload: &[u8]) -> Result<Bytes> {
    let len = u32::try_from(payload.len()).map_err(|_| {
        DiaryError::Storage(format!("payload too large: {} bytes", payload.len()))
    })?;

    let mut buf = BytesMut::with_capacity(HEADER_SIZE + payload.len());
    buf.put_slice(MAGIC);
    buf.put_u16(VERSION);
    buf.put_u32(crc32fast::hash(payload));
    buf.put_u32(len);
    buf.put_slice(payload);

    Ok(buf.freeze())
}

/// Decode a slot frame, verifying header and checksum
///
/// Returns the payload without copying.
pub fn decode_frame(mut frame: Bytes) -> Result<Bytes> {
    if frame.len() < HEADER_SIZE {
        return Err(DiaryError::Storage(format!(
            "truncated frame: {} bytes, header needs {}",
            frame.len(),
            HEADER_SIZE
        )));
    }

    let magic = frame.split_to(MAGIC.len());
    if &magic[..] != MAGIC {
        return Err(DiaryError::Storage("bad magic".to_string()));
    }

    let version = frame.get_u16();
    if version != VERSION {
        return Err(DiaryError::Storage(format!(
            "unsupported frame version {}",
            version
        )));
    }

    let expected_crc = frame.get_u32();
    let len = frame.get_u32() as usize;

    // Everything left is payload
    if frame.len() != len {
        return Err(DiaryError::Storage(format!(
            "length mismatch: header says {}, found {}",
            len,
            frame.len()
        )));
    }

    let actual_crc = crc32fast::hash(&frame);
    if actual_crc != expected_crc {
        return Err(DiaryError::Storage(format!(
            "checksum mismatch: expected {:08x}, got {:08x}",
            expected_crc, actual_crc
        )));
    }

    Ok(frame)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_layout() {
        let frame = encode_frame(b"[]").unwrap();

        assert_eq!(frame.len(), HEADER_SIZE + 2);
        assert_eq!(&frame[..4], MAGIC);
        assert_eq!(&frame[4..6], &VERSION.to_be_bytes());
        assert_eq!(&frame[10..14], &2u32.to_be_bytes());
        assert_eq!(&frame[14..], b"[]");
    }

    #[test]
    fn test_flipped_payload_bit_is_detected() {
        let frame = encode_frame(b"[{\"a\":1}]").unwrap();
        let mut corrupted = frame.to_vec();
        let last = corrupted.len() - 1;
        corrupted[last] ^= 0x01;

        let err = decode_frame(Bytes::from(corrupted)).unwrap_err();
        assert!(err.to_string().contains("checksum"));
    }

    #[test]
    fn test_truncated_payload_is_detected() {
        let frame = encode_frame(b"[1,2,3]").unwrap();
        let truncated = frame.slice(..frame.len() - 2);

        let err = decode_frame(truncated).unwrap_err();
        assert!(err.to_string().contains("length mismatch"));
    }

    #[test]
    fn test_short_input_is_detected() {
        assert!(decode_frame(Bytes::from_static(b"FDKV")).is_err());
        assert!(decode_frame(Bytes::new()).is_err());
    }
}
