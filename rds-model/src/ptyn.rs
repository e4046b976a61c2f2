/// Program Type Name, group 10A: an eight-character expansion of the PTY
/// code's meaning, e.g. "NewsFlash" for PTY 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ptyn {
    pub display: [u8; 8],
}

impl Default for Ptyn {
    fn default() -> Ptyn {
        Ptyn { display: [b' '; 8] }
    }
}

impl Ptyn {
    pub fn as_str(&self) -> std::borrow::Cow<'_, str> {
        String::from_utf8_lossy(&self.display)
    }
}
