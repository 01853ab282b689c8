//! Decode payloads captured from a u-blox M8 receiver and check every
//! field, including indexed repeating-group occurrences, then re-encode.

use korri_ubx::core::UbxValue;
use korri_ubx::protocol::messages::{cfg, mon, nav};
use korri_ubx::protocol::registry;

/// NUL-padded text slot of a fixed width.
fn text_slot(text: &str, width: usize) -> Vec<u8> {
    let mut slot = text.as_bytes().to_vec();
    slot.resize(width, 0);
    slot
}

#[test]
fn test_class_and_message_constants() {
    assert_eq!(mon::CLASS_ID, 0x0A);
    assert_eq!(mon::ver::CLASS_ID, 0x0A);
    assert_eq!(mon::ver::MSG_ID, 0x04);
    assert_eq!(nav::sat::CLASS_ID, 0x01);
    assert_eq!(nav::sat::MSG_ID, 0x35);
}

#[test]
fn test_cfg_rxm_mutate_and_reencode() {
    let mut rxm = registry::decode_payload(cfg::rxm::CLASS_ID, cfg::rxm::MSG_ID, &[0x48, 0x00])
        .unwrap();
    assert_eq!(rxm.unsigned("reserved1"), Some(0x48));
    assert_eq!(rxm.unsigned("lpMode"), Some(0x00));

    rxm.set("lpMode", UbxValue::U8(1));
    assert_eq!(registry::encode_payload(&rxm).unwrap(), [0x48, 0x01]);
}

#[test]
fn test_mon_ver_with_extensions() {
    let mut payload = text_slot("ROM CORE 3.01 (107888)", 30);
    payload.extend(text_slot("00080000", 10));
    payload.extend(text_slot("FWVER=SPG 3.01", 30));
    payload.extend(text_slot("PROTVER=18.00", 30));
    payload.extend(text_slot("GPS;GLO;GAL;BDS", 30));
    payload.extend(text_slot("SBAS;IMES;QZSS", 30));
    assert_eq!(payload.len(), 160);

    let ver = registry::decode_payload(mon::ver::CLASS_ID, mon::ver::MSG_ID, &payload).unwrap();
    assert_eq!(ver.text("swVersion"), Some("ROM CORE 3.01 (107888)"));
    assert_eq!(ver.text("hwVersion"), Some("00080000"));
    assert_eq!(ver.text("extension_1"), Some("FWVER=SPG 3.01"));
    assert_eq!(ver.text("extension_2"), Some("PROTVER=18.00"));
    assert_eq!(ver.text("extension_3"), Some("GPS;GLO;GAL;BDS"));
    assert_eq!(ver.text("extension_4"), Some("SBAS;IMES;QZSS"));
    assert!(ver.get("extension_5").is_none());

    assert_eq!(registry::encode_payload(&ver).unwrap(), payload);
}

#[test]
fn test_mon_ver_without_extensions() {
    let mut payload = text_slot("ROM CORE 3.01 (107888)", 30);
    payload.extend(text_slot("00080000", 10));

    let ver = registry::decode_payload(mon::ver::CLASS_ID, mon::ver::MSG_ID, &payload).unwrap();
    assert_eq!(ver.text("hwVersion"), Some("00080000"));
    assert!(ver.get("extension_1").is_none());
    assert_eq!(registry::encode_payload(&ver).unwrap(), payload);
}

#[test]
fn test_nav_sat_three_satellites() {
    let payload = [
        0xB0, 0x1B, 0x48, 0x14, 0x01, 0x03, 0x00, 0x00, // header
        0x00, 0x01, 0x21, 0x01, 0x8A, 0x00, 0x18, 0xFD, 0x17, 0x09, 0x00, 0x00, // sv 1
        0x00, 0x00, 0x00, 0x04, 0x18, 0xA5, 0x00, 0x00, 0x00, 0x00, 0x04, 0x00, // sv 2
        0x00, 0x00, 0x00, 0x08, 0x16, 0xA5, 0x00, 0x00, 0x00, 0x00, 0x03, 0x00, // sv 3
    ];
    let sat = registry::decode_payload(nav::sat::CLASS_ID, nav::sat::MSG_ID, &payload).unwrap();

    assert_eq!(sat.unsigned("iTOW"), Some(0x14481BB0));
    assert_eq!(sat.unsigned("version"), Some(0x01));
    assert_eq!(sat.unsigned("numSvs"), Some(0x03));
    assert_eq!(sat.unsigned("reserved0"), Some(0x0000));

    assert_eq!(sat.unsigned("gnssId_1"), Some(0));
    assert_eq!(sat.unsigned("svId_1"), Some(1));
    assert_eq!(sat.unsigned("cno_1"), Some(33));
    assert_eq!(sat.signed("elev_1"), Some(1));
    assert_eq!(sat.signed("azim_1"), Some(138));
    assert_eq!(sat.signed("prRes_1"), Some(-744));
    assert_eq!(sat.unsigned("flags_1"), Some(0x00000917));

    assert_eq!(sat.signed("elev_2"), Some(4));
    assert_eq!(sat.signed("azim_2"), Some(-23272));
    assert_eq!(sat.unsigned("flags_2"), Some(0x00040000));

    assert_eq!(sat.signed("elev_3"), Some(8));
    assert_eq!(sat.signed("azim_3"), Some(-23274));
    assert_eq!(sat.unsigned("flags_3"), Some(0x00030000));

    assert!(sat.get("gnssId_4").is_none());

    assert_eq!(registry::encode_payload(&sat).unwrap(), payload);
}

#[test]
fn test_cfg_gnss_seven_config_blocks() {
    let payload = [
        0x00, 0x20, 0x20, 0x07, // header
        0x00, 0x08, 0x10, 0x00, 0x01, 0x00, 0x01, 0x01, // GPS
        0x01, 0x01, 0x03, 0x00, 0x01, 0x00, 0x01, 0x01, // SBAS
        0x02, 0x04, 0x08, 0x00, 0x00, 0x00, 0x01, 0x01, // Galileo
        0x03, 0x08, 0x10, 0x00, 0x00, 0x00, 0x01, 0x01, // BeiDou
        0x04, 0x00, 0x08, 0x00, 0x00, 0x00, 0x01, 0x03, // IMES
        0x05, 0x00, 0x03, 0x00, 0x01, 0x00, 0x01, 0x05, // QZSS
        0x06, 0x08, 0x0E, 0x00, 0x01, 0x00, 0x01, 0x01, // GLONASS
    ];
    let gnss = registry::decode_payload(cfg::gnss::CLASS_ID, cfg::gnss::MSG_ID, &payload).unwrap();

    assert_eq!(gnss.unsigned("msgVer"), Some(0x00));
    assert_eq!(gnss.unsigned("numConfigBlocks"), Some(0x07));
    assert_eq!(gnss.unsigned("gnssId_1"), Some(0x00));
    assert_eq!(gnss.unsigned("maxTrkCh_1"), Some(0x10));
    assert_eq!(gnss.unsigned("flags_4"), Some(0x01010000));
    assert_eq!(gnss.unsigned("maxTrkCh_7"), Some(0x0E));

    assert_eq!(registry::encode_payload(&gnss).unwrap(), payload);
}

#[test]
fn test_cfg_gnss_block_count_mismatch_rejected() {
    // Header claims 7 blocks but only one follows.
    let payload = [
        0x00, 0x20, 0x20, 0x07, 0x00, 0x08, 0x10, 0x00, 0x01, 0x00, 0x01, 0x01,
    ];
    assert!(registry::decode_payload(cfg::gnss::CLASS_ID, cfg::gnss::MSG_ID, &payload).is_err());
}
