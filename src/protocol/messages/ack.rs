//! ACK class (0x05): acknowledge and reject replies to CFG messages.
use crate::core::{FieldDescriptor, FieldKind, MessageDescriptor, UbxMessage};

/// ACK message class byte.
pub const CLASS_ID: u8 = 0x05;

/// ACK-ACK: message acknowledged.
pub mod ack {
    use super::{FieldDescriptor, FieldKind, MessageDescriptor, UbxMessage};

    pub const CLASS_ID: u8 = super::CLASS_ID;
    pub const MSG_ID: u8 = 0x01;

    pub static DESCRIPTOR: MessageDescriptor = MessageDescriptor {
        class_id: CLASS_ID,
        msg_id: MSG_ID,
        name: "ACK-ACK",
        fields: &[
            FieldDescriptor { name: "clsID", kind: FieldKind::U8 },
            FieldDescriptor { name: "msgID", kind: FieldKind::U8 },
        ],
        repeating_field_sets: &[],
    };

    pub fn poll() -> UbxMessage {
        UbxMessage::poll(CLASS_ID, MSG_ID)
    }
}

/// ACK-NAK: message rejected.
pub mod nak {
    use super::{FieldDescriptor, FieldKind, MessageDescriptor, UbxMessage};

    pub const CLASS_ID: u8 = super::CLASS_ID;
    pub const MSG_ID: u8 = 0x00;

    pub static DESCRIPTOR: MessageDescriptor = MessageDescriptor {
        class_id: CLASS_ID,
        msg_id: MSG_ID,
        name: "ACK-NAK",
        fields: &[
            FieldDescriptor { name: "clsID", kind: FieldKind::U8 },
            FieldDescriptor { name: "msgID", kind: FieldKind::U8 },
        ],
        repeating_field_sets: &[],
    };

    pub fn poll() -> UbxMessage {
        UbxMessage::poll(CLASS_ID, MSG_ID)
    }
}
