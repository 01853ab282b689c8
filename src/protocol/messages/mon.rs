//! MON class (0x0A): receiver monitoring.
use crate::core::{FieldDescriptor, FieldKind, MessageDescriptor, RepeatingFieldSet, UbxMessage};

/// MON message class byte.
pub const CLASS_ID: u8 = 0x0A;

/// MON-VER: receiver and software version strings. The fixed header is
/// followed by as many 30-byte extension strings as the payload carries.
pub mod ver {
    use super::{
        FieldDescriptor, FieldKind, MessageDescriptor, RepeatingFieldSet, UbxMessage,
    };

    pub const CLASS_ID: u8 = super::CLASS_ID;
    pub const MSG_ID: u8 = 0x04;

    pub static DESCRIPTOR: MessageDescriptor = MessageDescriptor {
        class_id: CLASS_ID,
        msg_id: MSG_ID,
        name: "MON-VER",
        fields: &[
            FieldDescriptor { name: "swVersion", kind: FieldKind::Text(30) },
            FieldDescriptor { name: "hwVersion", kind: FieldKind::Text(10) },
            FieldDescriptor { name: "extension", kind: FieldKind::Text(30) },
        ],
        repeating_field_sets: &[RepeatingFieldSet {
            count_field_index: None,
            start_field_index: 2,
            size: 1,
        }],
    };

    pub fn poll() -> UbxMessage {
        UbxMessage::poll(CLASS_ID, MSG_ID)
    }
}
