//! # Quickstart Example
//!
//! Minimal example demonstrating the basics of korri-ubx:
//! - Build a poll request frame
//! - Decode a framed reply from the receiver
//! - Mutate a configuration message and re-encode it
//!
//! This example uses `std` for a quick trial run.
//!
//! ```bash
//! cargo run --example quickstart
//! ```

use korri_ubx::core::UbxValue;
use korri_ubx::protocol::frame;
use korri_ubx::protocol::messages::{cfg, mon};

fn main() {
    println!("=== korri-ubx Quickstart ===\n");

    // ======================================================================
    // 1. Build a poll request for MON-VER
    // ======================================================================
    println!("1. Building a MON-VER poll request");

    let poll = mon::ver::poll();
    let request = frame::encode_frame(&poll).expect("poll frames always encode");
    println!("   Request bytes: {request:02X?}\n");

    // ======================================================================
    // 2. Decode a framed reply (ACK-ACK captured from a receiver)
    // ======================================================================
    println!("2. Decoding an ACK-ACK reply frame");

    let reply = [0xB5, 0x62, 0x05, 0x01, 0x02, 0x00, 0x06, 0x01, 0x0F, 0x38];
    let ack = frame::decode_frame(&reply).expect("frame is valid");
    println!("   Decoded:\n{ack}");

    // ======================================================================
    // 3. Mutate a CFG-RXM message and re-encode it
    // ======================================================================
    println!("3. Switching the receiver to power save mode (CFG-RXM)");

    let payload = [0x48, 0x00];
    let mut rxm = korri_ubx::protocol::registry::decode_payload(
        cfg::rxm::CLASS_ID,
        cfg::rxm::MSG_ID,
        &payload,
    )
    .expect("payload matches the CFG-RXM layout");

    rxm.set("lpMode", UbxValue::U8(1));
    let command = frame::encode_frame(&rxm).expect("message is complete");
    println!("   Command bytes: {command:02X?}");
}
