//! Generic codec: cursor-based byte access, repeat resolution, and the
//! descriptor-driven encode/decode engine.
pub mod bytes;
pub mod engine;
pub mod layout;
