//! Message registry: maps a `(class_id, msg_id)` pair to its static
//! descriptor and exposes the registry-aware codec entry points.
//!
//! The registry is plain static data (`messages::ALL`): it is assembled at
//! compile time, never mutated, and therefore safe for unsynchronized
//! concurrent reads. The table invariants (unique identifier pairs, valid
//! repeating sets) are enforced by the registry tests.
use crate::core::{MessageDescriptor, UbxMessage};
use crate::error::{DecodeError, EncodeError};
use crate::infra::codec::engine;
use crate::protocol::messages;
use alloc::vec::Vec;

/// Find the descriptor registered for an identifier pair.
pub fn lookup(class_id: u8, msg_id: u8) -> Result<&'static MessageDescriptor, DecodeError> {
    messages::ALL
        .iter()
        .copied()
        .find(|descriptor| descriptor.class_id == class_id && descriptor.msg_id == msg_id)
        .ok_or(DecodeError::UnknownMessage { class_id, msg_id })
}

/// Build an empty poll request for a registered message kind.
///
/// The instance carries no fields and encodes to a zero-length payload,
/// which is how a receiver is asked to send the message back.
pub fn poll(class_id: u8, msg_id: u8) -> Result<UbxMessage, DecodeError> {
    lookup(class_id, msg_id)?;
    Ok(UbxMessage::poll(class_id, msg_id))
}

/// Decode a raw payload against the registered descriptor for the pair.
/// Used directly when a caller has already split header and payload.
pub fn decode_payload(
    class_id: u8,
    msg_id: u8,
    payload: &[u8],
) -> Result<UbxMessage, DecodeError> {
    let descriptor = lookup(class_id, msg_id)?;
    engine::decode(descriptor, payload)
}

/// Encode a message instance into payload bytes using its registered
/// descriptor.
///
/// An instance with no fields is a poll request and encodes to a
/// zero-length payload regardless of its descriptor layout.
pub fn encode_payload(message: &UbxMessage) -> Result<Vec<u8>, EncodeError> {
    let descriptor =
        lookup(message.class_id, message.msg_id).map_err(|_| EncodeError::UnknownMessage {
            class_id: message.class_id,
            msg_id: message.msg_id,
        })?;
    if message.is_empty() {
        return Ok(Vec::new());
    }
    engine::encode(message, descriptor)
}
