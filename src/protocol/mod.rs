//! High-level components of the UBX protocol: static message tables, the
//! message registry, and full-frame framing with checksum validation.
pub mod frame;
pub mod messages;
pub mod registry;
