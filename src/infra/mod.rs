//! Infrastructure modules: the generic codec machinery, independent of any
//! concrete UBX message definition.
pub mod codec;
