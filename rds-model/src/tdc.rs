pub const TDC_CHANNEL_COUNT: usize = 32;
pub const TDC_CHANNEL_BYTES: usize = 32;

/// Transparent Data Channels: 32 independent 32-byte ring buffers, one per
/// channel number carried in group 5A/5B.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tdc {
    pub channels: [[u8; TDC_CHANNEL_BYTES]; TDC_CHANNEL_COUNT],
    pub current_channel: u8,
}

impl Default for Tdc {
    fn default() -> Tdc {
        Tdc {
            channels: [[0u8; TDC_CHANNEL_BYTES]; TDC_CHANNEL_COUNT],
            current_channel: 0,
        }
    }
}

impl Tdc {
    /// Appends `bytes` to the tail of the given channel's ring, discarding
    /// the oldest bytes to keep the fixed 32-byte window.
    pub fn append(&mut self, channel: u8, bytes: &[u8]) {
        let ring = &mut self.channels[(channel as usize) % TDC_CHANNEL_COUNT];
        let n = bytes.len().min(TDC_CHANNEL_BYTES);
        ring.copy_within(n.., 0);
        ring[TDC_CHANNEL_BYTES - n..].copy_from_slice(&bytes[bytes.len() - n..]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_slides_the_ring_and_keeps_the_tail() {
        let mut tdc = Tdc::default();
        tdc.append(0, &[1, 2, 3, 4]);
        assert_eq!(&tdc.channels[0][TDC_CHANNEL_BYTES - 4..], &[1, 2, 3, 4]);
        assert_eq!(tdc.channels[0][0], 0);

        tdc.append(0, &[5, 6]);
        assert_eq!(&tdc.channels[0][TDC_CHANNEL_BYTES - 6..], &[1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn append_wraps_channel_number_into_range() {
        let mut tdc = Tdc::default();
        tdc.append(32, &[9]);
        assert_eq!(tdc.channels[0][TDC_CHANNEL_BYTES - 1], 9);
    }
}
