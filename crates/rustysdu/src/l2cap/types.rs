//! Type definitions for L2CAP SDU handling
//!
//! This module contains the error type and the configuration used when
//! reassembling SDU streams.

use super::constants::{SDU_CONTINUATION_PAYLOAD_OFFSET, SDU_FIRST_PAYLOAD_OFFSET};
use thiserror::Error;

/// Error types for SDU parsing and reassembly
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SduError {
    #[error("Malformed frame: {required} bytes required, {actual} available")]
    MalformedFrame { required: usize, actual: usize },

    #[error("Invalid payload offset {offset}, must not exceed {limit}")]
    InvalidOffset { offset: usize, limit: usize },

    #[error("FCS mismatch: stored 0x{stored:04X}, computed 0x{computed:04X}")]
    ChecksumMismatch { stored: u16, computed: u16 },

    #[error("Channel mismatch: expected 0x{expected:04X}, found 0x{found:04X}")]
    ChannelMismatch { expected: u16, found: u16 },

    #[error("SDU {index} length field says {declared}, frame carries {actual}")]
    SduLengthMismatch {
        index: usize,
        declared: u16,
        actual: usize,
    },

    #[error("Length mismatch: declared {declared}, assembled {assembled}")]
    LengthMismatch { declared: usize, assembled: usize },

    #[error("No SDUs to assemble")]
    EmptyStream,

    #[error("Packet too large: {0} bytes")]
    PacketTooLarge(usize),
}

/// Result type for SDU operations
pub type SduResult<T> = std::result::Result<T, SduError>;

/// Settings for reassembling an SDU stream into an L2CAP packet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssemblerConfig {
    /// Payload offset of the first SDU in a stream
    pub first_offset: usize,
    /// Payload offset of every following SDU
    pub continuation_offset: usize,
    /// Reject SDUs whose stored FCS does not match the computed one
    pub verify_fcs: bool,
}

impl Default for AssemblerConfig {
    fn default() -> Self {
        Self {
            first_offset: SDU_FIRST_PAYLOAD_OFFSET,
            continuation_offset: SDU_CONTINUATION_PAYLOAD_OFFSET,
            verify_fcs: true,
        }
    }
}
