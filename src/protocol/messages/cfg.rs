//! CFG class (0x06): receiver configuration. Sending one of these either
//! polls (empty payload) or sets the named configuration block.
use crate::core::{FieldDescriptor, FieldKind, MessageDescriptor, RepeatingFieldSet, UbxMessage};

/// CFG message class byte.
pub const CLASS_ID: u8 = 0x06;

/// CFG-PRT: I/O port configuration.
pub mod prt {
    use super::{FieldDescriptor, FieldKind, MessageDescriptor, UbxMessage};

    pub const CLASS_ID: u8 = super::CLASS_ID;
    pub const MSG_ID: u8 = 0x00;

    pub static DESCRIPTOR: MessageDescriptor = MessageDescriptor {
        class_id: CLASS_ID,
        msg_id: MSG_ID,
        name: "CFG-PRT",
        fields: &[
            FieldDescriptor { name: "portID", kind: FieldKind::U8 },
            FieldDescriptor { name: "reserved1", kind: FieldKind::U8 },
            FieldDescriptor { name: "txReady", kind: FieldKind::U16 },
            FieldDescriptor { name: "mode", kind: FieldKind::Raw32 },
            FieldDescriptor { name: "baudRate", kind: FieldKind::U32 },
            FieldDescriptor { name: "inProtoMask", kind: FieldKind::U16 },
            FieldDescriptor { name: "outProtoMask", kind: FieldKind::U16 },
            FieldDescriptor { name: "flags", kind: FieldKind::U16 },
            FieldDescriptor { name: "reserved2", kind: FieldKind::U16 },
        ],
        repeating_field_sets: &[],
    };

    pub fn poll() -> UbxMessage {
        UbxMessage::poll(CLASS_ID, MSG_ID)
    }
}

/// CFG-MSG: per-message output rate.
pub mod msg {
    use super::{FieldDescriptor, FieldKind, MessageDescriptor, UbxMessage};

    pub const CLASS_ID: u8 = super::CLASS_ID;
    pub const MSG_ID: u8 = 0x01;

    pub static DESCRIPTOR: MessageDescriptor = MessageDescriptor {
        class_id: CLASS_ID,
        msg_id: MSG_ID,
        name: "CFG-MSG",
        fields: &[
            FieldDescriptor { name: "msgClass", kind: FieldKind::U8 },
            FieldDescriptor { name: "msgID", kind: FieldKind::U8 },
            FieldDescriptor { name: "rate", kind: FieldKind::U8 },
        ],
        repeating_field_sets: &[],
    };

    pub fn poll() -> UbxMessage {
        UbxMessage::poll(CLASS_ID, MSG_ID)
    }
}

/// CFG-RATE: navigation and measurement rates.
pub mod rate {
    use super::{FieldDescriptor, FieldKind, MessageDescriptor, UbxMessage};

    pub const CLASS_ID: u8 = super::CLASS_ID;
    pub const MSG_ID: u8 = 0x08;

    pub static DESCRIPTOR: MessageDescriptor = MessageDescriptor {
        class_id: CLASS_ID,
        msg_id: MSG_ID,
        name: "CFG-RATE",
        fields: &[
            FieldDescriptor { name: "measRate", kind: FieldKind::U16 },
            FieldDescriptor { name: "navRate", kind: FieldKind::U16 },
            FieldDescriptor { name: "timeRef", kind: FieldKind::U16 },
        ],
        repeating_field_sets: &[],
    };

    pub fn poll() -> UbxMessage {
        UbxMessage::poll(CLASS_ID, MSG_ID)
    }
}

/// CFG-RXM: receiver power mode.
pub mod rxm {
    use super::{FieldDescriptor, FieldKind, MessageDescriptor, UbxMessage};

    pub const CLASS_ID: u8 = super::CLASS_ID;
    pub const MSG_ID: u8 = 0x11;

    pub static DESCRIPTOR: MessageDescriptor = MessageDescriptor {
        class_id: CLASS_ID,
        msg_id: MSG_ID,
        name: "CFG-RXM",
        fields: &[
            FieldDescriptor { name: "reserved1", kind: FieldKind::U8 },
            FieldDescriptor { name: "lpMode", kind: FieldKind::U8 },
        ],
        repeating_field_sets: &[],
    };

    pub fn poll() -> UbxMessage {
        UbxMessage::poll(CLASS_ID, MSG_ID)
    }
}

/// CFG-GNSS: GNSS system configuration. One config block repeats per
/// system, sized by `numConfigBlocks`.
pub mod gnss {
    use super::{
        FieldDescriptor, FieldKind, MessageDescriptor, RepeatingFieldSet, UbxMessage,
    };

    pub const CLASS_ID: u8 = super::CLASS_ID;
    pub const MSG_ID: u8 = 0x3E;

    pub static DESCRIPTOR: MessageDescriptor = MessageDescriptor {
        class_id: CLASS_ID,
        msg_id: MSG_ID,
        name: "CFG-GNSS",
        fields: &[
            FieldDescriptor { name: "msgVer", kind: FieldKind::U8 },
            FieldDescriptor { name: "numTrkChHw", kind: FieldKind::U8 },
            FieldDescriptor { name: "numTrkChUse", kind: FieldKind::U8 },
            FieldDescriptor { name: "numConfigBlocks", kind: FieldKind::U8 },
            FieldDescriptor { name: "gnssId", kind: FieldKind::U8 },
            FieldDescriptor { name: "resTrkCh", kind: FieldKind::U8 },
            FieldDescriptor { name: "maxTrkCh", kind: FieldKind::U8 },
            FieldDescriptor { name: "reserved1", kind: FieldKind::U8 },
            FieldDescriptor { name: "flags", kind: FieldKind::Raw32 },
        ],
        repeating_field_sets: &[RepeatingFieldSet {
            count_field_index: Some(3),
            start_field_index: 4,
            size: 5,
        }],
    };

    pub fn poll() -> UbxMessage {
        UbxMessage::poll(CLASS_ID, MSG_ID)
    }
}
