//! SDU stream reassembly
//!
//! Concatenates the payloads of an ordered SDU stream into one L2CAP packet.
//! The Segmentation and Reassembly bits of the control field are not
//! interpreted; ordering is the caller's responsibility.
//!
//! Each SDU's length field counts the bytes between the channel id and the
//! FCS, so the first SDU's total-length and control bytes are included. The
//! first SDU's total-length field is the sum of those length fields across
//! the stream; a lone SDU therefore declares the same value twice.

use super::constants::L2CAP_BASIC_HEADER_SIZE;
use super::packet::L2capPacket;
use super::sdu::SduFrame;
use super::types::{AssemblerConfig, SduError, SduResult};
use log::{debug, trace};

/// Rebuilds L2CAP packets from SDU streams
#[derive(Debug, Clone, Default)]
pub struct Assembler {
    config: AssemblerConfig,
}

impl Assembler {
    /// Create an assembler with the given configuration
    pub fn new(config: AssemblerConfig) -> Self {
        Self { config }
    }

    /// The active configuration
    pub fn config(&self) -> &AssemblerConfig {
        &self.config
    }

    /// Reassemble `sdus`, in stream order, into one L2CAP packet
    pub fn assemble(&self, sdus: &[SduFrame]) -> SduResult<L2capPacket> {
        let first = sdus.first().ok_or(SduError::EmptyStream)?;
        let channel_id = first.channel_id()?;
        let declared = first.total_l2cap_length()? as usize;

        let mut counted = 0;
        let mut payload = Vec::with_capacity(declared);

        for (index, sdu) in sdus.iter().enumerate() {
            // Corruption anywhere in the frame is reported as such
            if self.config.verify_fcs {
                if let Err(err) = sdu.verify_fcs() {
                    debug!("SDU {} failed FCS check: {}", index, err);
                    return Err(err);
                }
            }

            let found = sdu.channel_id()?;
            if found != channel_id {
                debug!(
                    "SDU {} on channel 0x{:04X}, stream is on 0x{:04X}",
                    index, found, channel_id
                );
                return Err(SduError::ChannelMismatch {
                    expected: channel_id,
                    found,
                });
            }

            let length = sdu.length()?;
            let actual = sdu.payload_end()? - L2CAP_BASIC_HEADER_SIZE;
            if length as usize != actual {
                debug!(
                    "SDU {} declares {} bytes but carries {}",
                    index, length, actual
                );
                return Err(SduError::SduLengthMismatch {
                    index,
                    declared: length,
                    actual,
                });
            }

            let offset = if index == 0 {
                self.config.first_offset
            } else {
                self.config.continuation_offset
            };

            let fragment = sdu.payload(offset)?;
            trace!("SDU {}: {} payload bytes", index, fragment.len());
            payload.extend_from_slice(fragment);
            counted += actual;
        }

        if counted != declared {
            debug!(
                "SDU lengths add up to {} but stream declared {}",
                counted, declared
            );
            return Err(SduError::LengthMismatch {
                declared,
                assembled: counted,
            });
        }

        L2capPacket::new(channel_id, payload)
    }
}
