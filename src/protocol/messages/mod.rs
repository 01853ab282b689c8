//! Static UBX message tables, grouped by message class.
//!
//! Each class module exposes its `CLASS_ID`, and each message submodule
//! exposes `CLASS_ID`, `MSG_ID`, the static `DESCRIPTOR`, and a `poll()`
//! constructor, so identifiers are reachable without building an instance
//! (`messages::nav::sat::MSG_ID` mirrors the protocol's `NAV-SAT` naming).
//!
//! Descriptors are pure data: the codec engine stays generic over any of
//! them, and growing the catalog means adding entries here, never engine
//! code. The layout tables follow the u-blox interface description.
pub mod ack;
pub mod cfg;
pub mod mon;
pub mod nav;

use crate::core::MessageDescriptor;

/// Every registered message descriptor, in class/id order.
pub static ALL: &[&MessageDescriptor] = &[
    &nav::posllh::DESCRIPTOR,
    &nav::status::DESCRIPTOR,
    &nav::dop::DESCRIPTOR,
    &nav::pvt::DESCRIPTOR,
    &nav::velned::DESCRIPTOR,
    &nav::sat::DESCRIPTOR,
    &ack::nak::DESCRIPTOR,
    &ack::ack::DESCRIPTOR,
    &cfg::prt::DESCRIPTOR,
    &cfg::msg::DESCRIPTOR,
    &cfg::rate::DESCRIPTOR,
    &cfg::rxm::DESCRIPTOR,
    &cfg::gnss::DESCRIPTOR,
    &mon::ver::DESCRIPTOR,
];
