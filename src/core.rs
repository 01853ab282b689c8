//! Defines the "data contract" between the static message tables and the
//! serialization/deserialization engine (the interpreter).
//!
//! The `protocol::messages` modules declare static descriptors that follow
//! this contract. The `infra::codec` modules consume those descriptors to
//! parse or build binary payloads.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

/// Wire type of a field within a UBX payload.
/// Mirrors the primitive types of the UBX interface description
/// (`U1/U2/U4`, `I1/I2/I4`, `CH[n]`, `X4`).
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FieldKind {
    /// Unsigned integer, 1 byte.
    U8,
    /// Unsigned integer, 2 bytes, little-endian.
    U16,
    /// Unsigned integer, 4 bytes, little-endian.
    U32,
    /// Signed two's-complement integer, 1 byte.
    I8,
    /// Signed two's-complement integer, 2 bytes, little-endian.
    I16,
    /// Signed two's-complement integer, 4 bytes, little-endian.
    I32,
    /// Fixed-length character slot. Decodes up to the first NUL byte;
    /// encodes with NUL padding and silent truncation past the slot.
    Text(usize),
    /// 32-bit bit pattern (flag/bitmask fields), carried as a plain
    /// little-endian unsigned integer. Callers interpret the bits.
    Raw32,
}

impl FieldKind {
    /// Number of payload bytes one occurrence of the field consumes.
    pub const fn width(&self) -> usize {
        match self {
            FieldKind::U8 | FieldKind::I8 => 1,
            FieldKind::U16 | FieldKind::I16 => 2,
            FieldKind::U32 | FieldKind::I32 | FieldKind::Raw32 => 4,
            FieldKind::Text(n) => *n,
        }
    }

    /// Whether the field carries an unsigned integer (counters must).
    pub const fn is_unsigned(&self) -> bool {
        matches!(self, FieldKind::U8 | FieldKind::U16 | FieldKind::U32)
    }
}

/// Descriptor for a single payload field.
#[derive(Debug)]
pub struct FieldDescriptor {
    /// Field identifier, unique within one message before indexing.
    pub name: &'static str,
    /// Wire type; also determines the byte width.
    pub kind: FieldKind,
}

/// Describes a repeating field group within a message.
///
/// Some UBX messages contain groups of fields that repeat a variable number
/// of times (satellite blocks, GNSS configuration blocks, version extension
/// strings). The group is a run of `size` consecutive fields starting at
/// `start_field_index`.
#[derive(Debug)]
pub struct RepeatingFieldSet {
    /// Index of the field holding the repetition count, decoded before the
    /// group it sizes.
    ///
    /// `None` means the repetitions are derived from the remaining payload
    /// length instead (the group must then close the message).
    pub count_field_index: Option<usize>,

    /// Index of the first field in the repeating group (0-based).
    pub start_field_index: usize,

    /// Number of consecutive fields inside the repeating group.
    pub size: usize,
}

/// Descriptor for an entire message layout.
#[derive(Debug)]
pub struct MessageDescriptor {
    /// UBX message class byte.
    pub class_id: u8,
    /// Message identifier within the class.
    pub msg_id: u8,
    /// Canonical name (diagnostics), e.g. `"NAV-SAT"`.
    pub name: &'static str,
    /// Ordered list of field descriptors.
    pub fields: &'static [FieldDescriptor],
    /// Repeating field sets (can be empty).
    pub repeating_field_sets: &'static [RepeatingFieldSet],
}

impl MessageDescriptor {
    /// The repeating set starting exactly at field `index`, if any.
    pub fn set_starting_at(&self, index: usize) -> Option<&'static RepeatingFieldSet> {
        self.repeating_field_sets
            .iter()
            .find(|set| set.start_field_index == index)
    }

    /// Whether field `index` belongs to any repeating group.
    pub fn is_repeating_field(&self, index: usize) -> bool {
        self.repeating_field_sets
            .iter()
            .any(|set| index >= set.start_field_index && index < set.start_field_index + set.size)
    }

    /// Total byte width of one occurrence of the given repeating set.
    pub fn block_width(&self, set: &RepeatingFieldSet) -> usize {
        self.fields[set.start_field_index..set.start_field_index + set.size]
            .iter()
            .map(|field| field.kind.width())
            .sum()
    }

    /// Check the registration-time rules for this descriptor.
    ///
    /// The field tables are static data, so these rules are enforced once
    /// over the whole registry (see the registry invariant tests) instead
    /// of on every decode: unique field names, in-bounds and non-overlapping
    /// sets declared in field order, count fields that precede their group
    /// in the fixed region and hold an unsigned integer, and at most one
    /// length-driven set, closing the message.
    pub fn validate(&self) -> Result<(), crate::error::DescriptorError> {
        use crate::error::DescriptorError;

        for (i, field) in self.fields.iter().enumerate() {
            if self.fields[..i].iter().any(|other| other.name == field.name) {
                return Err(DescriptorError::DuplicateFieldName { name: field.name });
            }
        }

        let length_driven = self
            .repeating_field_sets
            .iter()
            .filter(|set| set.count_field_index.is_none())
            .count();
        if length_driven > 1 {
            return Err(DescriptorError::MultipleLengthDrivenSets);
        }

        let mut previous_end = 0usize;
        for set in self.repeating_field_sets {
            let end = set.start_field_index + set.size;
            if set.size == 0 || end > self.fields.len() {
                return Err(DescriptorError::SetOutOfBounds {
                    start: set.start_field_index,
                    size: set.size,
                });
            }
            if set.start_field_index < previous_end {
                return Err(DescriptorError::OverlappingSets {
                    start: set.start_field_index,
                });
            }
            previous_end = end;

            if self.block_width(set) == 0 {
                return Err(DescriptorError::ZeroBlockWidth {
                    start: set.start_field_index,
                });
            }

            match set.count_field_index {
                Some(count_index) => {
                    let name = self
                        .fields
                        .get(count_index)
                        .map(|field| field.name)
                        .unwrap_or("?");
                    if count_index >= set.start_field_index || self.is_repeating_field(count_index)
                    {
                        return Err(DescriptorError::MisplacedCountField { name });
                    }
                    if !self.fields[count_index].kind.is_unsigned() {
                        return Err(DescriptorError::BadCountFieldKind { name });
                    }
                }
                None => {
                    if end != self.fields.len() {
                        return Err(DescriptorError::LengthDrivenNotFinal {
                            start: set.start_field_index,
                        });
                    }
                }
            }
        }

        Ok(())
    }
}

/// Dynamic value of a decoded field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UbxValue {
    U8(u8),
    U16(u16),
    U32(u32),
    I8(i8),
    I16(i16),
    I32(i32),
    Text(String),
}

impl UbxValue {
    /// Widen an unsigned variant to `u64`. `None` for signed or text values.
    pub fn as_unsigned(&self) -> Option<u64> {
        match self {
            UbxValue::U8(v) => Some(*v as u64),
            UbxValue::U16(v) => Some(*v as u64),
            UbxValue::U32(v) => Some(*v as u64),
            _ => None,
        }
    }

    /// Widen a signed variant to `i64`. `None` for unsigned or text values.
    pub fn as_signed(&self) -> Option<i64> {
        match self {
            UbxValue::I8(v) => Some(*v as i64),
            UbxValue::I16(v) => Some(*v as i64),
            UbxValue::I32(v) => Some(*v as i64),
            _ => None,
        }
    }

    /// Borrow the text content of a `Text` variant.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            UbxValue::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }
}

impl fmt::Display for UbxValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UbxValue::U8(v) => write!(f, "{v}"),
            UbxValue::U16(v) => write!(f, "{v}"),
            UbxValue::U32(v) => write!(f, "0x{v:08X}"),
            UbxValue::I8(v) => write!(f, "{v}"),
            UbxValue::I16(v) => write!(f, "{v}"),
            UbxValue::I32(v) => write!(f, "{v}"),
            UbxValue::Text(s) => write!(f, "{s:?}"),
        }
    }
}

/// A decoded (or under-construction) UBX message.
///
/// Holds an ordered mapping from resolved field name to value. Fields of
/// repeating groups appear under their base name suffixed with a 1-based
/// occurrence index (`gnssId_1`, `gnssId_2`, ...). The mapping is mutable:
/// overwriting a field and re-encoding produces the mutated payload.
#[derive(Debug, Clone, PartialEq)]
pub struct UbxMessage {
    /// UBX message class byte.
    pub class_id: u8,
    /// Message identifier within the class.
    pub msg_id: u8,
    fields: Vec<(String, UbxValue)>,
}

impl UbxMessage {
    /// An empty message tagged with the given identifiers. Encodes to a
    /// zero-length payload, which is how UBX poll requests are built.
    pub fn poll(class_id: u8, msg_id: u8) -> Self {
        Self {
            class_id,
            msg_id,
            fields: Vec::new(),
        }
    }

    /// Read a field by its resolved name.
    pub fn get(&self, name: &str) -> Option<&UbxValue> {
        self.fields
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    /// Write a field by its resolved name, inserting it when absent.
    /// The wire position of a field is fixed by the descriptor, so
    /// insertion order does not affect encoding.
    pub fn set(&mut self, name: &str, value: UbxValue) {
        match self.fields.iter_mut().find(|(key, _)| key == name) {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((String::from(name), value)),
        }
    }

    /// Unsigned integer accessor (`U8`/`U16`/`U32`/`Raw32` fields).
    pub fn unsigned(&self, name: &str) -> Option<u64> {
        self.get(name).and_then(UbxValue::as_unsigned)
    }

    /// Signed integer accessor (`I8`/`I16`/`I32` fields).
    pub fn signed(&self, name: &str) -> Option<i64> {
        self.get(name).and_then(UbxValue::as_signed)
    }

    /// Text accessor (`Text` fields).
    pub fn text(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(UbxValue::as_text)
    }

    /// Number of stored fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the message carries no fields (poll messages do not).
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate over `(resolved name, value)` pairs in decode order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &UbxValue)> {
        self.fields.iter().map(|(key, value)| (key.as_str(), value))
    }
}

impl fmt::Display for UbxMessage {
    /// Renders the registered message name (`MON-VER`) followed by one
    /// line per field; an unregistered pair falls back to the raw
    /// identifiers.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match crate::protocol::registry::lookup(self.class_id, self.msg_id) {
            Ok(descriptor) => write!(f, "{}", descriptor.name)?,
            Err(_) => write!(f, "UBX 0x{:02X}/0x{:02X}", self.class_id, self.msg_id)?,
        }
        for (name, value) in self.iter() {
            write!(f, "\n  {name}: {value}")?;
        }
        Ok(())
    }
}

/// Render the resolved name of occurrence `index` (1-based) of a field.
pub(crate) fn indexed_name(base: &str, index: usize) -> String {
    format!("{base}_{index}")
}

//==================================================================================TESTS
#[cfg(test)]
#[path = "core_tests.rs"]
mod tests;
