//! Generic serialization/deserialization engine driven by static message
//! descriptors. It controls the byte-level reader/writer and turns raw
//! payloads into dynamic `UbxMessage` instances and back.
//!
//! The engine is entirely generic over any descriptor: concrete message
//! layouts are data (`protocol::messages`), never engine logic.
use super::bytes::{ByteReader, ByteWriter};
use super::layout::{resolve_decode, resolve_encode, Layout};
use crate::core::{FieldKind, MessageDescriptor, UbxMessage, UbxValue};
use crate::error::{DecodeError, EncodeError};
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

/// Decode a raw payload into a message instance.
///
/// # Parameters
/// * `descriptor` – static descriptor that defines the message layout
/// * `payload` – raw body received from the wire, framing stripped
///
/// Resolves the indexed layout for `payload.len()`, then decodes every
/// field in wire order. Either a fully populated instance is returned or a
/// specific error; no partial decode is produced.
pub fn decode(
    descriptor: &'static MessageDescriptor,
    payload: &[u8],
) -> Result<UbxMessage, DecodeError> {
    let layout = resolve_decode(descriptor, payload)?;
    let mut reader = ByteReader::new(payload);
    let mut message = UbxMessage::poll(descriptor.class_id, descriptor.msg_id);

    for slot in layout.fields {
        let field = &descriptor.fields[slot.index];
        let value = read_field_value(&mut reader, field.name, field.kind)?;
        message.set(&slot.name, value);
    }

    Ok(message)
}

/// Encode a message instance into a freshly sized payload buffer.
///
/// The layout is re-resolved from the instance's live values: a mutated
/// count field changes how many occurrences are written, and length-driven
/// groups are sized by the indexed occurrences actually stored.
pub fn encode(
    message: &UbxMessage,
    descriptor: &'static MessageDescriptor,
) -> Result<Vec<u8>, EncodeError> {
    let layout: Layout = resolve_encode(descriptor, message)?;
    let mut buffer = vec![0u8; layout.total_len];
    let mut writer = ByteWriter::new(&mut buffer);

    for slot in &layout.fields {
        let field = &descriptor.fields[slot.index];
        let value = match message.get(&slot.name) {
            Some(value) => value,
            // The resolver already verified group occurrences; only a plain
            // field can still be absent here.
            None => {
                return Err(EncodeError::FieldNotFound {
                    field: slot.name.clone(),
                })
            }
        };
        write_field(&mut writer, &slot.name, field.kind, value)?;
    }

    Ok(buffer)
}

/// Shared helper to read a single field according to its wire type.
fn read_field_value(
    reader: &mut ByteReader<'_>,
    field_name: &'static str,
    kind: FieldKind,
) -> Result<UbxValue, DecodeError> {
    let available = reader.remaining();
    let truncated = |needed: usize| DecodeError::TruncatedField {
        field: field_name,
        needed,
        available,
    };

    let value = match kind {
        FieldKind::U8 => UbxValue::U8(reader.read_u8().map_err(|_| truncated(1))?),
        FieldKind::U16 => UbxValue::U16(reader.read_u16().map_err(|_| truncated(2))?),
        FieldKind::U32 | FieldKind::Raw32 => {
            UbxValue::U32(reader.read_u32().map_err(|_| truncated(4))?)
        }
        FieldKind::I8 => UbxValue::I8(reader.read_i8().map_err(|_| truncated(1))?),
        FieldKind::I16 => UbxValue::I16(reader.read_i16().map_err(|_| truncated(2))?),
        FieldKind::I32 => UbxValue::I32(reader.read_i32().map_err(|_| truncated(4))?),
        FieldKind::Text(len) => {
            let slot = reader.read_slice(len).map_err(|_| truncated(len))?;
            // The slot is NUL padded; content stops at the first zero byte,
            // or fills the whole slot when none is present.
            let content = match slot.iter().position(|&byte| byte == 0) {
                Some(end) => &slot[..end],
                None => slot,
            };
            UbxValue::Text(String::from_utf8_lossy(content).into_owned())
        }
    };

    Ok(value)
}

/// Private helper that writes a single value according to its wire type.
/// The stored variant must match the field's wire type exactly, so a value
/// never gets silently narrowed; text overflow past the slot is dropped
/// silently, matching the fixed-width wire format.
fn write_field(
    writer: &mut ByteWriter<'_>,
    field_name: &str,
    kind: FieldKind,
    value: &UbxValue,
) -> Result<(), EncodeError> {
    let write_err = |err| EncodeError::WriteError { err };

    match (kind, value) {
        (FieldKind::U8, UbxValue::U8(raw)) => writer.write_u8(*raw).map_err(write_err)?,
        (FieldKind::U16, UbxValue::U16(raw)) => writer.write_u16(*raw).map_err(write_err)?,
        (FieldKind::U32 | FieldKind::Raw32, UbxValue::U32(raw)) => {
            writer.write_u32(*raw).map_err(write_err)?
        }
        (FieldKind::I8, UbxValue::I8(raw)) => writer.write_i8(*raw).map_err(write_err)?,
        (FieldKind::I16, UbxValue::I16(raw)) => writer.write_i16(*raw).map_err(write_err)?,
        (FieldKind::I32, UbxValue::I32(raw)) => writer.write_i32(*raw).map_err(write_err)?,
        (FieldKind::Text(len), UbxValue::Text(text)) => {
            let bytes = text.as_bytes();
            let written = bytes.len().min(len);
            writer.write_slice(&bytes[..written]).map_err(write_err)?;
            writer.write_zeros(len - written).map_err(write_err)?;
        }
        _ => {
            return Err(EncodeError::TypeMismatch {
                field: String::from(field_name),
                value: value.clone(),
            })
        }
    }

    Ok(())
}
