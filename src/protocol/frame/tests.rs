//! Frame layer tests against hand-computed wire frames.
use super::*;
use crate::core::UbxValue;
use crate::error::DecodeError;
use crate::protocol::messages::{ack, cfg, mon};

/// Complete ACK-ACK frame acknowledging CFG-MSG (payload 06 01).
const ACK_ACK_FRAME: [u8; 10] = [0xB5, 0x62, 0x05, 0x01, 0x02, 0x00, 0x06, 0x01, 0x0F, 0x38];

#[test]
/// Known checksum pair over the ACK-ACK body bytes.
fn test_checksum_known_vector() {
    let mut checksum = Checksum::new();
    checksum.push_slice(&[0x05, 0x01, 0x02, 0x00, 0x06, 0x01]);
    assert_eq!(checksum.pair(), [0x0F, 0x38]);
}

#[test]
/// Byte-at-a-time and slice folding agree.
fn test_checksum_push_equivalence() {
    let body = [0x06, 0x11, 0x02, 0x00, 0x48, 0x00];
    let mut one = Checksum::new();
    for &byte in &body {
        one.push(byte);
    }
    let mut all = Checksum::new();
    all.push_slice(&body);
    assert_eq!(one.pair(), all.pair());
    assert_eq!(one.pair(), [0x61, 0x11]);
}

#[test]
/// A valid frame splits into its class, id, and payload.
fn test_split_valid_frame() {
    let (class_id, msg_id, payload) = split_frame(&ACK_ACK_FRAME).unwrap();
    assert_eq!(class_id, 0x05);
    assert_eq!(msg_id, 0x01);
    assert_eq!(payload, [0x06, 0x01]);
}

#[test]
/// A zero-length payload is a legal frame.
fn test_split_empty_payload() {
    let poll = [0xB5, 0x62, 0x0A, 0x04, 0x00, 0x00, 0x0E, 0x34];
    let (class_id, msg_id, payload) = split_frame(&poll).unwrap();
    assert_eq!(class_id, mon::ver::CLASS_ID);
    assert_eq!(msg_id, mon::ver::MSG_ID);
    assert!(payload.is_empty());
}

#[test]
/// Wrong sync bytes are rejected before anything else is inspected.
fn test_split_bad_sync() {
    let mut frame = ACK_ACK_FRAME;
    frame[0] = 0xB6;
    assert_eq!(split_frame(&frame).unwrap_err(), FrameError::BadSync);
}

#[test]
/// Garbage that never syncs is bad sync even when shorter than a frame.
fn test_split_bad_sync_before_length() {
    assert_eq!(
        split_frame(&[0x24, 0x47, 0x50]).unwrap_err(),
        FrameError::BadSync
    );
    // With a single byte there is no sync pair to judge yet.
    assert_eq!(
        split_frame(&[0xB5]).unwrap_err(),
        FrameError::Truncated {
            expected: 8,
            actual: 1
        }
    );
}

#[test]
/// Anything shorter than a header plus checksum cannot be a frame.
fn test_split_too_short() {
    assert_eq!(
        split_frame(&[0xB5, 0x62, 0x05]).unwrap_err(),
        FrameError::Truncated {
            expected: 8,
            actual: 3
        }
    );
}

#[test]
/// The declared length must match the bytes actually present.
fn test_split_length_mismatch() {
    assert_eq!(
        split_frame(&ACK_ACK_FRAME[..9]).unwrap_err(),
        FrameError::Truncated {
            expected: 10,
            actual: 9
        }
    );

    let mut long = ACK_ACK_FRAME.to_vec();
    long.push(0x00);
    assert_eq!(
        split_frame(&long).unwrap_err(),
        FrameError::Oversized {
            expected: 10,
            actual: 11
        }
    );
}

#[test]
/// Any corrupted body byte fails the checksum with both pairs reported.
fn test_split_checksum_mismatch() {
    let mut frame = ACK_ACK_FRAME;
    frame[7] = 0x02;
    assert_eq!(
        split_frame(&frame).unwrap_err(),
        FrameError::ChecksumMismatch {
            computed: [0x10, 0x39],
            found: [0x0F, 0x38]
        }
    );
}

#[test]
/// Building a frame around a payload reproduces the known wire bytes.
fn test_build_frame() {
    let frame = build_frame(0x05, 0x01, &[0x06, 0x01]).unwrap();
    assert_eq!(frame, ACK_ACK_FRAME);

    let poll = build_frame(0x0A, 0x04, &[]).unwrap();
    assert_eq!(poll, [0xB5, 0x62, 0x0A, 0x04, 0x00, 0x00, 0x0E, 0x34]);
}

#[test]
/// A full frame decodes into a populated message instance.
fn test_decode_frame() {
    let message = decode_frame(&ACK_ACK_FRAME).unwrap();
    assert_eq!(message.class_id, ack::ack::CLASS_ID);
    assert_eq!(message.msg_id, ack::ack::MSG_ID);
    assert_eq!(message.unsigned("clsID"), Some(0x06));
    assert_eq!(message.unsigned("msgID"), Some(0x01));
}

#[test]
/// A valid frame carrying an unregistered message is a decode error.
fn test_decode_frame_unknown_message() {
    let frame = build_frame(0x27, 0x03, &[]).unwrap();
    assert_eq!(
        decode_frame(&frame).unwrap_err(),
        FrameError::Decode(DecodeError::UnknownMessage {
            class_id: 0x27,
            msg_id: 0x03
        })
    );
}

#[test]
/// Message to frame and back, including the checksum, is lossless.
fn test_encode_frame_round_trip() {
    let mut message = UbxMessage::poll(cfg::rxm::CLASS_ID, cfg::rxm::MSG_ID);
    message.set("reserved1", UbxValue::U8(0x48));
    message.set("lpMode", UbxValue::U8(0x01));

    let frame = encode_frame(&message).unwrap();
    assert_eq!(
        frame,
        [0xB5, 0x62, 0x06, 0x11, 0x02, 0x00, 0x48, 0x01, 0x62, 0x12]
    );

    let decoded = decode_frame(&frame).unwrap();
    assert_eq!(decoded.unsigned("lpMode"), Some(1));
}
