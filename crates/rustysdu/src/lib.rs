//! RustySDU - L2CAP Service Data Unit handling
//!
//! This library models a single L2CAP SDU: the raw wire bytes of one fragment
//! of an L2CAP packet, with accessors for its header fields, its payload
//! extent and its Frame Check Sequence. An [`Assembler`] joins an ordered
//! stream of SDUs back into a basic-mode L2CAP packet.

pub mod l2cap;

// Re-export common types for convenience
pub use l2cap::{
    Assembler, AssemblerConfig, L2capHeader, L2capPacket, SduError, SduFrame, SduResult,
};
