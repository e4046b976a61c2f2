/// Program Service name: the eight-character station display name, as
/// currently believed. The confidence-voting buffers that produce this
/// value are decode-internal scratch state, not part of the observable
/// model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ps {
    pub display: [u8; 8],
}

impl Default for Ps {
    fn default() -> Ps {
        Ps { display: [b' '; 8] }
    }
}

impl Ps {
    pub fn as_str(&self) -> std::borrow::Cow<'_, str> {
        String::from_utf8_lossy(&self.display)
    }
}
