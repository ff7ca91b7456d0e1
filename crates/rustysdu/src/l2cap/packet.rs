//! L2CAP Packet handling
//!
//! This module provides the basic-mode L2CAP packet that an SDU stream
//! reassembles into.

use super::constants::*;
use super::types::{SduError, SduResult};
use byteorder::{ByteOrder, LittleEndian};

/// L2CAP Packet header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct L2capHeader {
    /// Length of the L2CAP payload in bytes
    pub length: u16,
    /// Channel Identifier
    pub channel_id: u16,
}

impl L2capHeader {
    /// Create a new L2CAP header
    pub fn new(length: u16, channel_id: u16) -> Self {
        Self { length, channel_id }
    }

    /// Parse an L2CAP header from raw bytes
    pub fn parse(data: &[u8]) -> SduResult<Self> {
        if data.len() < L2CAP_BASIC_HEADER_SIZE {
            return Err(SduError::MalformedFrame {
                required: L2CAP_BASIC_HEADER_SIZE,
                actual: data.len(),
            });
        }

        Ok(Self {
            length: LittleEndian::read_u16(&data[0..2]),
            channel_id: LittleEndian::read_u16(&data[2..4]),
        })
    }

    /// Serialize the header to bytes
    pub fn to_bytes(&self) -> [u8; L2CAP_BASIC_HEADER_SIZE] {
        let mut result = [0u8; L2CAP_BASIC_HEADER_SIZE];

        LittleEndian::write_u16(&mut result[0..2], self.length);
        LittleEndian::write_u16(&mut result[2..4], self.channel_id);

        result
    }
}

/// Represents a full L2CAP packet with header and payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct L2capPacket {
    /// L2CAP header
    pub header: L2capHeader,
    /// Payload data
    pub payload: Vec<u8>,
}

impl L2capPacket {
    /// Create a new L2CAP packet
    pub fn new(channel_id: u16, payload: Vec<u8>) -> SduResult<Self> {
        let length =
            u16::try_from(payload.len()).map_err(|_| SduError::PacketTooLarge(payload.len()))?;

        Ok(Self {
            header: L2capHeader::new(length, channel_id),
            payload,
        })
    }

    /// Parse an L2CAP packet from raw bytes
    pub fn parse(data: &[u8]) -> SduResult<Self> {
        let header = L2capHeader::parse(data)?;

        // Make sure we have enough data for the payload
        let payload_end = L2CAP_BASIC_HEADER_SIZE + header.length as usize;
        if data.len() < payload_end {
            return Err(SduError::MalformedFrame {
                required: payload_end,
                actual: data.len(),
            });
        }

        Ok(Self {
            header,
            payload: data[L2CAP_BASIC_HEADER_SIZE..payload_end].to_vec(),
        })
    }

    /// Serialize the L2CAP packet to a byte vector
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut result = Vec::with_capacity(self.size());

        result.extend_from_slice(&self.header.to_bytes());
        result.extend_from_slice(&self.payload);

        result
    }

    /// Get the full size of the packet in bytes
    pub fn size(&self) -> usize {
        L2CAP_BASIC_HEADER_SIZE + self.header.length as usize
    }
}
