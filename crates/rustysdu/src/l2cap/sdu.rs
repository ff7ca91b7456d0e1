//! L2CAP SDU frame
//!
//! An SDU carries one fragment of an L2CAP packet. The wire layout is:
//!
//! | Offset | Size | Field                     |
//! |--------|------|---------------------------|
//! | 0      | 2    | SDU length                |
//! | 2      | 2    | Channel ID                |
//! | 4      | 2    | Total L2CAP length        |
//! | 6      | 2    | Control field             |
//! | 8      | N    | Payload                   |
//! | 8+N    | 2    | Frame Check Sequence      |
//!
//! All fields are little-endian. The frame never validates itself; callers
//! compare [`SduFrame::stored_fcs`] against [`SduFrame::compute_fcs`].

use super::constants::*;
use super::fcs;
use super::types::{SduError, SduResult};
use byteorder::{ByteOrder, LittleEndian};
use std::fmt;

/// A single SDU, owning its wire bytes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SduFrame {
    bytes: Vec<u8>,
}

impl SduFrame {
    /// Wrap already-framed wire bytes, FCS included
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// Append a freshly computed FCS to header, control and payload bytes
    pub fn build(mut bytes: Vec<u8>) -> Self {
        let mut trailer = [0u8; SDU_FCS_SIZE];
        LittleEndian::write_u16(&mut trailer, fcs::compute(&bytes));
        bytes.extend_from_slice(&trailer);

        Self { bytes }
    }

    /// Total frame size in bytes
    pub fn buffer_size(&self) -> usize {
        self.bytes.len()
    }

    /// SDU length field
    pub fn length(&self) -> SduResult<u16> {
        self.header_field(SDU_LENGTH_OFFSET)
    }

    /// Channel identifier
    pub fn channel_id(&self) -> SduResult<u16> {
        self.header_field(SDU_CHANNEL_ID_OFFSET)
    }

    /// Length of the whole L2CAP payload across the stream
    pub fn total_l2cap_length(&self) -> SduResult<u16> {
        self.header_field(SDU_TOTAL_LENGTH_OFFSET)
    }

    /// Raw control field (SAR bits, TxSeq/ReqSeq)
    pub fn controls(&self) -> SduResult<u16> {
        self.header_field(SDU_CONTROL_OFFSET)
    }

    /// FCS as carried in the last two bytes
    pub fn stored_fcs(&self) -> SduResult<u16> {
        let end = self.payload_end()?;
        Ok(LittleEndian::read_u16(&self.bytes[end..]))
    }

    /// FCS computed over everything before the FCS slot
    pub fn compute_fcs(&self) -> SduResult<u16> {
        let end = self.payload_end()?;
        Ok(fcs::compute(&self.bytes[..end]))
    }

    /// Compare the stored FCS with the computed one
    pub fn verify_fcs(&self) -> SduResult<()> {
        let stored = self.stored_fcs()?;
        let computed = self.compute_fcs()?;

        if stored != computed {
            return Err(SduError::ChecksumMismatch { stored, computed });
        }

        Ok(())
    }

    /// Position of the first payload byte.
    ///
    /// `offset` is the number of header bytes preceding the payload: 8 for
    /// the first SDU of a stream, 6 for every later one. The frame cannot
    /// tell which it is, so the caller decides.
    pub fn payload_start(&self, offset: usize) -> SduResult<usize> {
        let limit = self.payload_end()?;

        if offset > limit {
            return Err(SduError::InvalidOffset { offset, limit });
        }

        Ok(offset)
    }

    /// Position one past the last payload byte, which is the first FCS byte
    pub fn payload_end(&self) -> SduResult<usize> {
        self.bytes
            .len()
            .checked_sub(SDU_FCS_SIZE)
            .ok_or(SduError::MalformedFrame {
                required: SDU_FCS_SIZE,
                actual: self.bytes.len(),
            })
    }

    /// Borrow the payload bytes for the given header offset
    pub fn payload(&self, offset: usize) -> SduResult<&[u8]> {
        let start = self.payload_start(offset)?;
        let end = self.payload_end()?;
        Ok(&self.bytes[start..end])
    }

    /// The raw wire bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Give back the wire bytes
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    fn header_field(&self, offset: usize) -> SduResult<u16> {
        if self.bytes.len() < SDU_MIN_SIZE {
            return Err(SduError::MalformedFrame {
                required: SDU_MIN_SIZE,
                actual: self.bytes.len(),
            });
        }

        Ok(LittleEndian::read_u16(&self.bytes[offset..offset + 2]))
    }
}

impl From<Vec<u8>> for SduFrame {
    fn from(bytes: Vec<u8>) -> Self {
        Self::new(bytes)
    }
}

impl AsRef<[u8]> for SduFrame {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl fmt::Display for SduFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.channel_id() {
            Ok(cid) => write!(
                f,
                "SDU cid=0x{:04X} size={} [{}]",
                cid,
                self.bytes.len(),
                hex::encode(&self.bytes)
            ),
            Err(_) => write!(
                f,
                "SDU (malformed) size={} [{}]",
                self.bytes.len(),
                hex::encode(&self.bytes)
            ),
        }
    }
}
