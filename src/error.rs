//! Error definitions shared across library modules.
//! Each type models a specific failure scenario (framing, payload decoding,
//! payload encoding, byte-level access, descriptor validation).
use crate::core::UbxValue;
use alloc::string::String;
use thiserror_no_std::Error;

#[derive(Error, Debug, PartialEq, Eq)]
/// Errors raised while validating or dismantling a full UBX frame.
pub enum FrameError {
    /// Frame does not open with the `B5 62` sync pair.
    #[error("Frame does not start with the UBX sync bytes")]
    BadSync,

    /// Fewer bytes were supplied than the header announces.
    #[error("Truncated frame: expected {expected} bytes, got {actual}")]
    Truncated { expected: usize, actual: usize },

    /// Bytes remain after the checksum pair.
    #[error("Oversized frame: expected {expected} bytes, got {actual}")]
    Oversized { expected: usize, actual: usize },

    /// Trailing checksum pair disagrees with the running Fletcher sum.
    #[error("Checksum mismatch: computed {computed:02X?}, found {found:02X?}")]
    ChecksumMismatch { computed: [u8; 2], found: [u8; 2] },

    /// Payload failed to decode against its registered descriptor.
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

#[derive(Error, Debug, PartialEq, Eq)]
/// Errors raised while decoding a payload into a `UbxMessage`.
pub enum DecodeError {
    /// No descriptor registered for the identifier pair.
    #[error("No message registered for class 0x{class_id:02X}, id 0x{msg_id:02X}")]
    UnknownMessage { class_id: u8, msg_id: u8 },

    /// Insufficient bytes remain to decode a fixed-width field.
    #[error("Truncated field {field}: needs {needed} bytes, {available} available")]
    TruncatedField {
        field: &'static str,
        needed: usize,
        available: usize,
    },

    /// A length-driven group's remainder is not a multiple of its block width.
    #[error("Repeating block {field} of {block_width} bytes does not divide the {remaining} remaining bytes")]
    MisalignedRepeat {
        field: &'static str,
        block_width: usize,
        remaining: usize,
    },

    /// The schema consumed less than the full payload.
    #[error("Payload carries {actual} bytes but the schema consumes {expected}")]
    TrailingBytes { expected: usize, actual: usize },

    /// The field sizing a count-driven group could not be read.
    #[error("Count field {field} missing or not an unsigned integer")]
    CountFieldMissing { field: &'static str },
}

#[derive(Error, Debug, PartialEq, Eq)]
/// Errors raised while encoding a `UbxMessage` back into payload bytes.
pub enum EncodeError {
    /// No descriptor registered for the instance's identifier pair.
    #[error("No message registered for class 0x{class_id:02X}, id 0x{msg_id:02X}")]
    UnknownMessage { class_id: u8, msg_id: u8 },

    /// A non-repeating field expected by the descriptor is absent.
    #[error("Field {field} not found")]
    FieldNotFound { field: String },

    /// Stored value variant does not match the field's wire type.
    #[error("Value {value:?} does not fit field {field}")]
    TypeMismatch { field: String, value: UbxValue },

    /// Indexed fields of a repeating group are missing, non-contiguous, or
    /// the referenced count field is absent.
    #[error("Inconsistent repeating group starting at {field}: {detail}")]
    InconsistentGroup {
        field: &'static str,
        detail: &'static str,
    },

    /// Encoded payload does not fit the 16-bit frame length field.
    #[error("Payload of {len} bytes exceeds the frame length field")]
    OversizedPayload { len: usize },

    /// Failed while writing bytes into the output buffer.
    #[error("Byte write error: {err}")]
    WriteError { err: ByteWriterError },
}

#[derive(Error, Debug, PartialEq, Eq)]
/// Registration-time violations of the descriptor rules.
pub enum DescriptorError {
    /// Two fields share a name before indexing.
    #[error("Duplicate field name {name}")]
    DuplicateFieldName { name: &'static str },

    /// A repeating set points outside the field list.
    #[error("Repeating set at field {start} of size {size} is out of bounds")]
    SetOutOfBounds { start: usize, size: usize },

    /// Two repeating sets overlap or are out of declaration order.
    #[error("Repeating set at field {start} overlaps another set")]
    OverlappingSets { start: usize },

    /// A count field sits at or after its group, or inside another group.
    #[error("Count field {name} does not precede its group in the fixed region")]
    MisplacedCountField { name: &'static str },

    /// A count field does not hold an unsigned integer.
    #[error("Count field {name} is not an unsigned integer")]
    BadCountFieldKind { name: &'static str },

    /// A length-driven set is not the final element of the schema.
    #[error("Length-driven set at field {start} must close the message")]
    LengthDrivenNotFinal { start: usize },

    /// More than one length-driven set in one schema.
    #[error("Only one length-driven set is allowed per message")]
    MultipleLengthDrivenSets,

    /// A length-driven set with an empty block can never make progress.
    #[error("Repeating set at field {start} has a zero block width")]
    ZeroBlockWidth { start: usize },
}

//==================================================================================BYTE_ACCESS
#[derive(Debug, Error, PartialEq, Eq)]
/// Errors raised during cursor-based buffer reads.
pub enum ByteReaderError {
    /// Attempted to read past the end of the buffer.
    #[error("Attempted to read out of bounds -> asked: {asked}, available: {available}")]
    OutOfBounds { asked: usize, available: usize },
}

#[derive(Debug, Error, PartialEq, Eq)]
/// Errors raised during cursor-based buffer writes.
pub enum ByteWriterError {
    /// Attempted to write beyond the provided capacity.
    #[error("Attempted to write out of bounds -> asked: {asked}, available: {available}")]
    OutOfBounds { asked: usize, available: usize },
}
