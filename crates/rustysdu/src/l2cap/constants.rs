//! L2CAP SDU layout constants

/// Size of the basic L2CAP header (length + channel id)
pub const L2CAP_BASIC_HEADER_SIZE: usize = 4;

/// Largest payload a basic L2CAP header can describe
pub const L2CAP_MAX_PAYLOAD_SIZE: usize = u16::MAX as usize;

// SDU header field offsets, each field is a little-endian u16
pub const SDU_LENGTH_OFFSET: usize = 0;
pub const SDU_CHANNEL_ID_OFFSET: usize = 2;
pub const SDU_TOTAL_LENGTH_OFFSET: usize = 4;
pub const SDU_CONTROL_OFFSET: usize = 6;

/// Number of trailing FCS bytes
pub const SDU_FCS_SIZE: usize = 2;

/// Four header fields followed directly by the FCS
pub const SDU_MIN_SIZE: usize = 10;

/// Payload offset for the first SDU of a stream
pub const SDU_FIRST_PAYLOAD_OFFSET: usize = 8;

/// Payload offset for every SDU after the first
pub const SDU_CONTINUATION_PAYLOAD_OFFSET: usize = 6;
