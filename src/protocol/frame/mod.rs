//! UBX frame layer: recognizes, validates, and constructs full wire frames.
//!
//! Wire format (all multi-byte values little-endian):
//!
//! ```text
//! offset 0..1   sync bytes B5 62
//! offset 2      message class
//! offset 3      message id
//! offset 4..5   payload length
//! offset 6..6+L payload
//! offset 6+L..  checksum pair (CK_A, CK_B)
//! ```
//!
//! A full frame is presented at once; partial-frame buffering belongs to
//! the transport layer, which is outside this crate.
use crate::core::UbxMessage;
use crate::error::{EncodeError, FrameError};
use crate::protocol::registry;
use alloc::vec::Vec;

/// The two fixed bytes every UBX frame opens with.
pub const SYNC: [u8; 2] = [0xB5, 0x62];

/// Bytes before the payload: sync pair, class, id, length.
const HEADER_LEN: usize = 6;
/// Trailing checksum pair.
const CHECKSUM_LEN: usize = 2;

/// Running 8-bit Fletcher checksum, computed over the class, id, length,
/// and payload bytes of a frame (sync excluded).
#[derive(Debug, Default, Clone, Copy)]
pub struct Checksum {
    a: u8,
    b: u8,
}

impl Checksum {
    /// Fresh accumulator pair, both halves at zero.
    pub const fn new() -> Self {
        Self { a: 0, b: 0 }
    }

    /// Fold one byte into the running sum.
    #[inline]
    pub fn push(&mut self, byte: u8) {
        self.a = self.a.wrapping_add(byte);
        self.b = self.b.wrapping_add(self.a);
    }

    /// Fold a byte sequence into the running sum.
    pub fn push_slice(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.push(byte);
        }
    }

    /// The `(CK_A, CK_B)` pair in wire order.
    pub const fn pair(&self) -> [u8; 2] {
        [self.a, self.b]
    }
}

/// Validate a full frame and split it into `(class_id, msg_id, payload)`.
///
/// Walks the frame in wire order: sync pair, header, payload extent, then
/// the trailing checksum. Each stage fails with its own error; nothing is
/// returned from a frame that does not validate end to end.
pub fn split_frame(raw: &[u8]) -> Result<(u8, u8, &[u8]), FrameError> {
    // Sync is judged as soon as two bytes are present, before any length
    // reasoning.
    if raw.len() >= 2 && raw[..2] != SYNC {
        #[cfg(feature = "defmt")]
        defmt::debug!("Frame rejected: bad sync {=u8:x} {=u8:x}", raw[0], raw[1]);
        return Err(FrameError::BadSync);
    }
    if raw.len() < HEADER_LEN + CHECKSUM_LEN {
        return Err(FrameError::Truncated {
            expected: HEADER_LEN + CHECKSUM_LEN,
            actual: raw.len(),
        });
    }

    let class_id = raw[2];
    let msg_id = raw[3];
    let length = u16::from_le_bytes([raw[4], raw[5]]) as usize;

    let expected = HEADER_LEN + length + CHECKSUM_LEN;
    if raw.len() < expected {
        return Err(FrameError::Truncated {
            expected,
            actual: raw.len(),
        });
    }
    if raw.len() > expected {
        return Err(FrameError::Oversized {
            expected,
            actual: raw.len(),
        });
    }

    let payload = &raw[HEADER_LEN..HEADER_LEN + length];

    let mut checksum = Checksum::new();
    checksum.push_slice(&raw[2..HEADER_LEN + length]);
    let computed = checksum.pair();
    let found = [raw[expected - 2], raw[expected - 1]];
    if computed != found {
        #[cfg(feature = "defmt")]
        defmt::warn!(
            "Frame rejected: checksum mismatch (computed {=[u8; 2]:x}, found {=[u8; 2]:x})",
            computed,
            found
        );
        return Err(FrameError::ChecksumMismatch { computed, found });
    }

    Ok((class_id, msg_id, payload))
}

/// Decode a full wire frame into a message instance.
///
/// Validates the framing, then dispatches the payload through the registry
/// to the codec engine.
pub fn decode_frame(raw: &[u8]) -> Result<UbxMessage, FrameError> {
    let (class_id, msg_id, payload) = split_frame(raw)?;
    Ok(registry::decode_payload(class_id, msg_id, payload)?)
}

/// Wrap an already encoded payload into a full frame.
pub fn build_frame(class_id: u8, msg_id: u8, payload: &[u8]) -> Result<Vec<u8>, EncodeError> {
    if payload.len() > u16::MAX as usize {
        return Err(EncodeError::OversizedPayload {
            len: payload.len(),
        });
    }
    let length = payload.len() as u16;

    let mut frame = Vec::with_capacity(HEADER_LEN + payload.len() + CHECKSUM_LEN);
    frame.extend_from_slice(&SYNC);
    frame.push(class_id);
    frame.push(msg_id);
    frame.extend_from_slice(&length.to_le_bytes());
    frame.extend_from_slice(payload);

    let mut checksum = Checksum::new();
    checksum.push_slice(&frame[2..]);
    frame.extend_from_slice(&checksum.pair());

    Ok(frame)
}

/// Encode a message instance into a full wire frame.
pub fn encode_frame(message: &UbxMessage) -> Result<Vec<u8>, EncodeError> {
    let payload = registry::encode_payload(message)?;
    build_frame(message.class_id, message.msg_id, &payload)
}

//==================================================================================TESTS
#[cfg(test)]
#[path = "tests.rs"]
mod tests;
