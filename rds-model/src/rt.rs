/// Which of the two Radiotext buffers is currently addressed by the A/B
/// flag in block B.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RtBuffer {
    A,
    B,
}

pub const RT_LEN: usize = 64;

/// Radiotext, modeled as two independent 64-character buffers selected by
/// the transmitted A/B flag, matching how stations use the flag to signal a
/// message change without waiting for the old one to be overwritten in
/// place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rt {
    pub a: [u8; RT_LEN],
    pub b: [u8; RT_LEN],
    pub active: RtBuffer,
}

impl Default for Rt {
    fn default() -> Rt {
        Rt {
            a: [b' '; RT_LEN],
            b: [b' '; RT_LEN],
            active: RtBuffer::A,
        }
    }
}

impl Rt {
    pub fn active_display(&self) -> &[u8; RT_LEN] {
        match self.active {
            RtBuffer::A => &self.a,
            RtBuffer::B => &self.b,
        }
    }

    pub fn active_display_mut(&mut self) -> &mut [u8; RT_LEN] {
        match self.active {
            RtBuffer::A => &mut self.a,
            RtBuffer::B => &mut self.b,
        }
    }

    pub fn as_str(&self) -> std::borrow::Cow<'_, str> {
        String::from_utf8_lossy(self.active_display())
    }
}
