//! `korri-ubx` library: a schema-driven codec for the u-blox UBX binary
//! protocol in a `no_std` + `alloc` environment. The crate exposes the
//! infrastructure modules (byte reader/writer, layout resolver, codec
//! engine) and the protocol layer (message tables, registry, framing).
#![no_std]
extern crate alloc;
//==================================================================================
/// Core data types shared by the message tables and the codec engine.
pub mod core;
/// Domain and low-level errors (framing, decoding, encoding, byte-level
/// access, and descriptor validation).
pub mod error;
/// Generic codec infrastructure, independent of any concrete message.
pub mod infra;
/// UBX protocol implementation: message tables, registry, and framing.
pub mod protocol;
//==================================================================================
