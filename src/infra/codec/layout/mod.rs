//! Repeat resolver: turns a message descriptor plus a concrete payload (or
//! a live message instance) into a fully indexed field layout, with every
//! occurrence count and byte offset resolved.
use crate::core::{indexed_name, FieldKind, MessageDescriptor, UbxMessage};
use crate::error::{DecodeError, EncodeError};
use alloc::string::String;
use alloc::vec::Vec;

/// One concrete field slot within a payload.
#[derive(Debug)]
pub struct ResolvedField {
    /// Index of the backing descriptor in `MessageDescriptor::fields`.
    pub index: usize,
    /// Resolved name: the base name, suffixed with `_{k}` for occurrence
    /// `k` (1-based) of a repeating group.
    pub name: String,
    /// Occurrence number within a repeating group, `None` outside groups.
    pub occurrence: Option<usize>,
    /// Byte offset of the field within the payload.
    pub offset: usize,
}

/// A fully resolved message layout: indexed field slots in wire order.
#[derive(Debug)]
pub struct Layout {
    pub fields: Vec<ResolvedField>,
    /// Exact payload length the layout occupies.
    pub total_len: usize,
}

/// Resolve a layout against a received payload.
///
/// Count-driven groups read their occurrence count straight out of the
/// payload prefix (the count field always precedes its group in the fixed
/// region); a length-driven group consumes the remainder, which must be an
/// exact multiple of the block width. The payload must be consumed
/// entirely: leftover bytes are a `TrailingBytes` error.
pub fn resolve_decode(
    descriptor: &'static MessageDescriptor,
    payload: &[u8],
) -> Result<Layout, DecodeError> {
    let mut fields: Vec<ResolvedField> = Vec::with_capacity(descriptor.fields.len());
    let mut offset = 0usize;
    let mut index = 0usize;

    while index < descriptor.fields.len() {
        if let Some(set) = descriptor.set_starting_at(index) {
            let block_width = descriptor.block_width(set);
            let base = descriptor.fields[set.start_field_index].name;

            let count = match set.count_field_index {
                Some(count_index) => {
                    let resolved = fields
                        .iter()
                        .find(|slot| slot.index == count_index)
                        .ok_or(DecodeError::CountFieldMissing {
                            field: descriptor.fields[count_index].name,
                        })?;
                    read_count(descriptor, count_index, resolved.offset, payload)?
                }
                None => {
                    let remaining = payload.len().saturating_sub(offset);
                    if remaining % block_width != 0 {
                        return Err(DecodeError::MisalignedRepeat {
                            field: base,
                            block_width,
                            remaining,
                        });
                    }
                    remaining / block_width
                }
            };

            // A hostile count field must not drive the expansion past the
            // payload it claims to describe.
            let needed = count.saturating_mul(block_width);
            let available = payload.len().saturating_sub(offset);
            if needed > available {
                return Err(DecodeError::TruncatedField {
                    field: base,
                    needed,
                    available,
                });
            }

            for occurrence in 1..=count {
                for slot in 0..set.size {
                    let field = &descriptor.fields[index + slot];
                    fields.push(ResolvedField {
                        index: index + slot,
                        name: indexed_name(field.name, occurrence),
                        occurrence: Some(occurrence),
                        offset,
                    });
                    offset += field.kind.width();
                }
            }
            index += set.size;
        } else {
            let field = &descriptor.fields[index];
            fields.push(ResolvedField {
                index,
                name: String::from(field.name),
                occurrence: None,
                offset,
            });
            offset += field.kind.width();
            index += 1;
        }
    }

    if offset < payload.len() {
        return Err(DecodeError::TrailingBytes {
            expected: offset,
            actual: payload.len(),
        });
    }

    Ok(Layout {
        fields,
        total_len: offset,
    })
}

/// Resolve a layout from the live values of a message instance.
///
/// Count-driven groups re-read the count field from the instance (the
/// caller may have mutated it); length-driven groups are sized by the
/// indexed occurrences actually stored, which must be contiguous from `_1`.
pub fn resolve_encode(
    descriptor: &'static MessageDescriptor,
    message: &UbxMessage,
) -> Result<Layout, EncodeError> {
    let mut fields: Vec<ResolvedField> = Vec::with_capacity(descriptor.fields.len());
    let mut offset = 0usize;
    let mut index = 0usize;

    while index < descriptor.fields.len() {
        if let Some(set) = descriptor.set_starting_at(index) {
            let base = descriptor.fields[set.start_field_index].name;

            let count = match set.count_field_index {
                Some(count_index) => {
                    let count_name = descriptor.fields[count_index].name;
                    message
                        .unsigned(count_name)
                        .ok_or(EncodeError::InconsistentGroup {
                            field: base,
                            detail: "count field absent",
                        })? as usize
                }
                None => stored_occurrences(descriptor, set, message)?,
            };

            for occurrence in 1..=count {
                for slot in 0..set.size {
                    let field = &descriptor.fields[index + slot];
                    let name = indexed_name(field.name, occurrence);
                    if message.get(&name).is_none() {
                        return Err(EncodeError::InconsistentGroup {
                            field: base,
                            detail: "occurrence missing for the declared count",
                        });
                    }
                    fields.push(ResolvedField {
                        index: index + slot,
                        name,
                        occurrence: Some(occurrence),
                        offset,
                    });
                    offset += field.kind.width();
                }
            }
            index += set.size;
        } else {
            let field = &descriptor.fields[index];
            fields.push(ResolvedField {
                index,
                name: String::from(field.name),
                occurrence: None,
                offset,
            });
            offset += field.kind.width();
            index += 1;
        }
    }

    Ok(Layout {
        fields,
        total_len: offset,
    })
}

/// Decode the unsigned value of a count field straight from the payload.
fn read_count(
    descriptor: &'static MessageDescriptor,
    count_index: usize,
    offset: usize,
    payload: &[u8],
) -> Result<usize, DecodeError> {
    let field = &descriptor.fields[count_index];
    let width = field.kind.width();
    let bytes = payload
        .get(offset..offset + width)
        .ok_or(DecodeError::TruncatedField {
            field: field.name,
            needed: width,
            available: payload.len().saturating_sub(offset),
        })?;
    match field.kind {
        FieldKind::U8 => Ok(bytes[0] as usize),
        FieldKind::U16 => Ok(u16::from_le_bytes([bytes[0], bytes[1]]) as usize),
        FieldKind::U32 => {
            Ok(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]) as usize)
        }
        // Registration validates count fields as unsigned integers.
        _ => Err(DecodeError::CountFieldMissing { field: field.name }),
    }
}

/// Number of contiguous occurrences of a length-driven group stored in the
/// instance, counted from `_1`. Partial occurrences or gaps are rejected.
fn stored_occurrences(
    descriptor: &'static MessageDescriptor,
    set: &crate::core::RepeatingFieldSet,
    message: &UbxMessage,
) -> Result<usize, EncodeError> {
    let group = &descriptor.fields[set.start_field_index..set.start_field_index + set.size];
    let base = group[0].name;

    let mut count = 0usize;
    loop {
        let present = group
            .iter()
            .filter(|field| message.get(&indexed_name(field.name, count + 1)).is_some())
            .count();
        match present {
            0 => break,
            n if n == group.len() => count += 1,
            _ => {
                return Err(EncodeError::InconsistentGroup {
                    field: base,
                    detail: "partial occurrence",
                })
            }
        }
    }

    // Any straggler above `count` means the occurrences are not contiguous.
    for (name, _) in message.iter() {
        for field in group {
            if let Some(suffix) = name.strip_prefix(field.name).and_then(|s| s.strip_prefix('_')) {
                if let Ok(occurrence) = suffix.parse::<usize>() {
                    if occurrence > count {
                        return Err(EncodeError::InconsistentGroup {
                            field: base,
                            detail: "non-contiguous occurrences",
                        });
                    }
                }
            }
        }
    }

    Ok(count)
}
