//! Token payloads and the variable-length integer (VInt) codec used to store
//! annotation metadata in them.
//!
//! A VInt stores a `u32` in 1 to 5 bytes: seven bits per byte, low-order group
//! first, with the high bit set on every byte except the last one.

use annotext_common::{Result, error::Error, verify_data};
use tinyvec::TinyVec;

/// Maximum number of bytes a single `u32` VInt occupies.
pub const MAX_VINT_LEN: usize = 5;

/// Inline capacity of a payload: room for two VInts (annotation start and length)
/// without a heap allocation.
const INLINE_PAYLOAD_LEN: usize = 2 * MAX_VINT_LEN;

/// An opaque byte buffer attached to a token.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Payload(TinyVec<[u8; INLINE_PAYLOAD_LEN]>);

impl Payload {
    pub fn new() -> Payload {
        Payload(TinyVec::new())
    }

    pub fn from_bytes(bytes: &[u8]) -> Payload {
        let mut buf = TinyVec::new();
        buf.extend_from_slice(bytes);
        Payload(buf)
    }

    /// Creates a payload holding the VInt encoding of each value in order.
    pub fn from_vints(values: &[u32]) -> Payload {
        let mut payload = Payload::new();
        for &value in values {
            payload.push_vint(value);
        }
        payload
    }

    pub fn push_vint(&mut self, value: u32) {
        let mut buf = [0u8; MAX_VINT_LEN];
        let len = write_vint(&mut buf, value);
        self.0.extend_from_slice(&buf[..len]);
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Decodes the whole payload as a sequence of VInts.
    pub fn read_vints(&self) -> Result<Vec<u32>> {
        let bytes = self.as_bytes();
        let mut offset = 0;
        let mut values = Vec::new();
        while offset < bytes.len() {
            values.push(read_vint(bytes, &mut offset)?);
        }
        Ok(values)
    }
}

/// Writes the VInt encoding of `value` into `buf` and returns the number of
/// bytes written.
pub fn write_vint(buf: &mut [u8; MAX_VINT_LEN], mut value: u32) -> usize {
    let mut len = 0;
    while value >= 0x80 {
        buf[len] = (value as u8 & 0x7f) | 0x80;
        value >>= 7;
        len += 1;
    }
    buf[len] = value as u8;
    len + 1
}

/// Reads a VInt from `bytes` starting at `offset`, advancing `offset` past it.
pub fn read_vint(bytes: &[u8], offset: &mut usize) -> Result<u32> {
    let mut value = 0u32;
    let mut i = 0;
    loop {
        let Some(&b) = bytes.get(*offset + i) else {
            return Err(Error::invalid_format(
                "vint",
                format!("truncated at byte {}", *offset + i),
            ));
        };
        if i == MAX_VINT_LEN - 1 {
            // The fifth byte may only carry the remaining 4 bits of a u32.
            verify_data!(vint, b & 0xf0 == 0);
        }
        value |= u32::from(b & 0x7f) << (7 * i);
        if b & 0x80 == 0 {
            *offset += i + 1;
            return Ok(value);
        }
        i += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vint_byte_layout() {
        assert_eq!(Payload::from_vints(&[0]).as_bytes(), &[0x00]);
        assert_eq!(Payload::from_vints(&[1]).as_bytes(), &[0x01]);
        assert_eq!(Payload::from_vints(&[127]).as_bytes(), &[0x7f]);
        assert_eq!(Payload::from_vints(&[128]).as_bytes(), &[0x80, 0x01]);
        assert_eq!(Payload::from_vints(&[300]).as_bytes(), &[0xac, 0x02]);
        assert_eq!(
            Payload::from_vints(&[u32::MAX]).as_bytes(),
            &[0xff, 0xff, 0xff, 0xff, 0x0f]
        );
    }

    #[test]
    fn test_read_multiple_vints() {
        let payload = Payload::from_vints(&[5, 1, 16384, u32::MAX]);
        assert_eq!(payload.len(), 1 + 1 + 3 + 5);
        assert_eq!(payload.read_vints().unwrap(), vec![5, 1, 16384, u32::MAX]);
    }

    #[test]
    fn test_read_vint_advances_offset() {
        let bytes = [0x81, 0x01, 0x03];
        let mut offset = 0;
        assert_eq!(read_vint(&bytes, &mut offset).unwrap(), 129);
        assert_eq!(offset, 2);
        assert_eq!(read_vint(&bytes, &mut offset).unwrap(), 3);
        assert_eq!(offset, 3);
    }

    #[test]
    fn test_truncated_vint() {
        let payload = Payload::from_bytes(&[0x80]);
        assert!(payload.read_vints().is_err());

        let mut offset = 1;
        assert!(read_vint(&[0x01], &mut offset).is_err());
    }

    #[test]
    fn test_overlong_vint() {
        let mut offset = 0;
        let err = read_vint(&[0xff, 0xff, 0xff, 0xff, 0x1f], &mut offset).unwrap_err();
        match err.into_kind() {
            annotext_common::error::ErrorKind::InvalidFormat { element, .. } => {
                assert_eq!(element, "vint")
            }
            other => panic!("unexpected error kind: {other:?}"),
        }
        assert!(read_vint(&[0x80, 0x80, 0x80, 0x80, 0x80, 0x01], &mut offset).is_err());
        assert_eq!(offset, 0);
    }

    #[test]
    fn test_empty_payload() {
        let payload = Payload::new();
        assert!(payload.is_empty());
        assert_eq!(payload.read_vints().unwrap(), Vec::<u32>::new());
    }
}
