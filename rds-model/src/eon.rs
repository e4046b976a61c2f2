use crate::clock::Pic;
use crate::frequency::{AfTable, Frequency};

/// The other network's view as assembled from group 14A/14B, keyed by the
/// variant of the most recent message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EonOn {
    pub ps: [u8; 8],
    pub pty: u8,
    pub tp: bool,
    pub ta: bool,
    pub af: AfTable,
    pub pi: u16,
    pub pic: Pic,
}

impl EonOn {
    pub fn new() -> EonOn {
        EonOn {
            ps: [b' '; 8],
            ..Default::default()
        }
    }
}

/// One slot of this-network-to-other-network frequency mapping (RBDS
/// section 3.2.1.8, variant codes 5..9).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EonMapEntry {
    pub tuned_freq: Option<Frequency>,
    pub other_freq: Option<Frequency>,
}

pub const EON_MAP_SLOTS: usize = 5;

/// Enhanced Other Networks state: the network currently being described,
/// plus a small map of recently seen other-network PI/TP pairs.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Eon {
    pub on: EonOn,
    pub maps: [EonMapEntry; EON_MAP_SLOTS],
}

impl Default for Eon {
    fn default() -> Eon {
        Eon {
            on: EonOn::new(),
            maps: [EonMapEntry::default(); EON_MAP_SLOTS],
        }
    }
}
