//! NAV class (0x01): navigation solution output.
use crate::core::{FieldDescriptor, FieldKind, MessageDescriptor, RepeatingFieldSet, UbxMessage};

/// NAV message class byte.
pub const CLASS_ID: u8 = 0x01;

/// NAV-POSLLH: geodetic position solution.
pub mod posllh {
    use super::{FieldDescriptor, FieldKind, MessageDescriptor, UbxMessage};

    pub const CLASS_ID: u8 = super::CLASS_ID;
    pub const MSG_ID: u8 = 0x02;

    pub static DESCRIPTOR: MessageDescriptor = MessageDescriptor {
        class_id: CLASS_ID,
        msg_id: MSG_ID,
        name: "NAV-POSLLH",
        fields: &[
            FieldDescriptor { name: "iTOW", kind: FieldKind::U32 },
            FieldDescriptor { name: "lon", kind: FieldKind::I32 },
            FieldDescriptor { name: "lat", kind: FieldKind::I32 },
            FieldDescriptor { name: "height", kind: FieldKind::I32 },
            FieldDescriptor { name: "hMSL", kind: FieldKind::I32 },
            FieldDescriptor { name: "hAcc", kind: FieldKind::U32 },
            FieldDescriptor { name: "vAcc", kind: FieldKind::U32 },
        ],
        repeating_field_sets: &[],
    };

    pub fn poll() -> UbxMessage {
        UbxMessage::poll(CLASS_ID, MSG_ID)
    }
}

/// NAV-STATUS: receiver navigation status.
pub mod status {
    use super::{FieldDescriptor, FieldKind, MessageDescriptor, UbxMessage};

    pub const CLASS_ID: u8 = super::CLASS_ID;
    pub const MSG_ID: u8 = 0x03;

    pub static DESCRIPTOR: MessageDescriptor = MessageDescriptor {
        class_id: CLASS_ID,
        msg_id: MSG_ID,
        name: "NAV-STATUS",
        fields: &[
            FieldDescriptor { name: "iTOW", kind: FieldKind::U32 },
            FieldDescriptor { name: "gpsFix", kind: FieldKind::U8 },
            FieldDescriptor { name: "flags", kind: FieldKind::U8 },
            FieldDescriptor { name: "fixStat", kind: FieldKind::U8 },
            FieldDescriptor { name: "flags2", kind: FieldKind::U8 },
            FieldDescriptor { name: "ttff", kind: FieldKind::U32 },
            FieldDescriptor { name: "msss", kind: FieldKind::U32 },
        ],
        repeating_field_sets: &[],
    };

    pub fn poll() -> UbxMessage {
        UbxMessage::poll(CLASS_ID, MSG_ID)
    }
}

/// NAV-DOP: dilution of precision, all values scaled by 0.01.
pub mod dop {
    use super::{FieldDescriptor, FieldKind, MessageDescriptor, UbxMessage};

    pub const CLASS_ID: u8 = super::CLASS_ID;
    pub const MSG_ID: u8 = 0x04;

    pub static DESCRIPTOR: MessageDescriptor = MessageDescriptor {
        class_id: CLASS_ID,
        msg_id: MSG_ID,
        name: "NAV-DOP",
        fields: &[
            FieldDescriptor { name: "iTOW", kind: FieldKind::U32 },
            FieldDescriptor { name: "gDOP", kind: FieldKind::U16 },
            FieldDescriptor { name: "pDOP", kind: FieldKind::U16 },
            FieldDescriptor { name: "tDOP", kind: FieldKind::U16 },
            FieldDescriptor { name: "vDOP", kind: FieldKind::U16 },
            FieldDescriptor { name: "hDOP", kind: FieldKind::U16 },
            FieldDescriptor { name: "nDOP", kind: FieldKind::U16 },
            FieldDescriptor { name: "eDOP", kind: FieldKind::U16 },
        ],
        repeating_field_sets: &[],
    };

    pub fn poll() -> UbxMessage {
        UbxMessage::poll(CLASS_ID, MSG_ID)
    }
}

/// NAV-PVT: combined position, velocity, and time solution (92 bytes).
pub mod pvt {
    use super::{FieldDescriptor, FieldKind, MessageDescriptor, UbxMessage};

    pub const CLASS_ID: u8 = super::CLASS_ID;
    pub const MSG_ID: u8 = 0x07;

    pub static DESCRIPTOR: MessageDescriptor = MessageDescriptor {
        class_id: CLASS_ID,
        msg_id: MSG_ID,
        name: "NAV-PVT",
        fields: &[
            FieldDescriptor { name: "iTOW", kind: FieldKind::U32 },
            FieldDescriptor { name: "year", kind: FieldKind::U16 },
            FieldDescriptor { name: "month", kind: FieldKind::U8 },
            FieldDescriptor { name: "day", kind: FieldKind::U8 },
            FieldDescriptor { name: "hour", kind: FieldKind::U8 },
            FieldDescriptor { name: "min", kind: FieldKind::U8 },
            FieldDescriptor { name: "sec", kind: FieldKind::U8 },
            FieldDescriptor { name: "valid", kind: FieldKind::U8 },
            FieldDescriptor { name: "tAcc", kind: FieldKind::U32 },
            FieldDescriptor { name: "nano", kind: FieldKind::I32 },
            FieldDescriptor { name: "fixType", kind: FieldKind::U8 },
            FieldDescriptor { name: "flags", kind: FieldKind::U8 },
            FieldDescriptor { name: "flags2", kind: FieldKind::U8 },
            FieldDescriptor { name: "numSV", kind: FieldKind::U8 },
            FieldDescriptor { name: "lon", kind: FieldKind::I32 },
            FieldDescriptor { name: "lat", kind: FieldKind::I32 },
            FieldDescriptor { name: "height", kind: FieldKind::I32 },
            FieldDescriptor { name: "hMSL", kind: FieldKind::I32 },
            FieldDescriptor { name: "hAcc", kind: FieldKind::U32 },
            FieldDescriptor { name: "vAcc", kind: FieldKind::U32 },
            FieldDescriptor { name: "velN", kind: FieldKind::I32 },
            FieldDescriptor { name: "velE", kind: FieldKind::I32 },
            FieldDescriptor { name: "velD", kind: FieldKind::I32 },
            FieldDescriptor { name: "gSpeed", kind: FieldKind::I32 },
            FieldDescriptor { name: "headMot", kind: FieldKind::I32 },
            FieldDescriptor { name: "sAcc", kind: FieldKind::U32 },
            FieldDescriptor { name: "headAcc", kind: FieldKind::U32 },
            FieldDescriptor { name: "pDOP", kind: FieldKind::U16 },
            FieldDescriptor { name: "reserved1", kind: FieldKind::U32 },
            FieldDescriptor { name: "reserved2", kind: FieldKind::U16 },
            FieldDescriptor { name: "headVeh", kind: FieldKind::I32 },
            FieldDescriptor { name: "magDec", kind: FieldKind::I16 },
            FieldDescriptor { name: "magAcc", kind: FieldKind::U16 },
        ],
        repeating_field_sets: &[],
    };

    pub fn poll() -> UbxMessage {
        UbxMessage::poll(CLASS_ID, MSG_ID)
    }
}

/// NAV-VELNED: velocity solution in north/east/down.
pub mod velned {
    use super::{FieldDescriptor, FieldKind, MessageDescriptor, UbxMessage};

    pub const CLASS_ID: u8 = super::CLASS_ID;
    pub const MSG_ID: u8 = 0x12;

    pub static DESCRIPTOR: MessageDescriptor = MessageDescriptor {
        class_id: CLASS_ID,
        msg_id: MSG_ID,
        name: "NAV-VELNED",
        fields: &[
            FieldDescriptor { name: "iTOW", kind: FieldKind::U32 },
            FieldDescriptor { name: "velN", kind: FieldKind::I32 },
            FieldDescriptor { name: "velE", kind: FieldKind::I32 },
            FieldDescriptor { name: "velD", kind: FieldKind::I32 },
            FieldDescriptor { name: "speed", kind: FieldKind::U32 },
            FieldDescriptor { name: "gSpeed", kind: FieldKind::U32 },
            FieldDescriptor { name: "heading", kind: FieldKind::I32 },
            FieldDescriptor { name: "sAcc", kind: FieldKind::U32 },
            FieldDescriptor { name: "cAcc", kind: FieldKind::U32 },
        ],
        repeating_field_sets: &[],
    };

    pub fn poll() -> UbxMessage {
        UbxMessage::poll(CLASS_ID, MSG_ID)
    }
}

/// NAV-SAT: per-satellite status. One 12-byte block repeats per tracked
/// satellite, sized by `numSvs`.
pub mod sat {
    use super::{
        FieldDescriptor, FieldKind, MessageDescriptor, RepeatingFieldSet, UbxMessage,
    };

    pub const CLASS_ID: u8 = super::CLASS_ID;
    pub const MSG_ID: u8 = 0x35;

    pub static DESCRIPTOR: MessageDescriptor = MessageDescriptor {
        class_id: CLASS_ID,
        msg_id: MSG_ID,
        name: "NAV-SAT",
        fields: &[
            FieldDescriptor { name: "iTOW", kind: FieldKind::U32 },
            FieldDescriptor { name: "version", kind: FieldKind::U8 },
            FieldDescriptor { name: "numSvs", kind: FieldKind::U8 },
            FieldDescriptor { name: "reserved0", kind: FieldKind::U16 },
            FieldDescriptor { name: "gnssId", kind: FieldKind::U8 },
            FieldDescriptor { name: "svId", kind: FieldKind::U8 },
            FieldDescriptor { name: "cno", kind: FieldKind::U8 },
            FieldDescriptor { name: "elev", kind: FieldKind::I8 },
            FieldDescriptor { name: "azim", kind: FieldKind::I16 },
            FieldDescriptor { name: "prRes", kind: FieldKind::I16 },
            FieldDescriptor { name: "flags", kind: FieldKind::Raw32 },
        ],
        repeating_field_sets: &[RepeatingFieldSet {
            count_field_index: Some(2),
            start_field_index: 4,
            size: 7,
        }],
    };

    pub fn poll() -> UbxMessage {
        UbxMessage::poll(CLASS_ID, MSG_ID)
    }
}
