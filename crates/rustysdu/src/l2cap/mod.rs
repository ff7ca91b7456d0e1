//! L2CAP SDU handling
//!
//! This module provides:
//! - Field access on individual SDU frames
//! - Frame Check Sequence computation and verification
//! - Reassembly of an ordered SDU stream into an L2CAP packet

pub mod constants;
pub mod types;
pub mod fcs;
pub mod sdu;
pub mod packet;
pub mod assemble;

// Re-export the public API
pub use self::types::*;
pub use self::sdu::SduFrame;
pub use self::packet::{L2capHeader, L2capPacket};
pub use self::assemble::Assembler;
