/// Which frequency band an alternative-frequency code refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Band {
    /// VHF/FM broadcast band, 87.6-107.9 MHz, coded 1..204.
    Uhf,
    /// LF (153-279 kHz) or MF (531-1602 kHz) AM band, entered via code 250.
    LfMf,
}

/// Whether an alternative frequency carries the same program or a regional
/// variant of it, inferred from its position relative to the tuned
/// frequency when the table uses encoding method B.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FreqAttrib {
    SameProgram,
    RegionalVariant,
}

/// A single decoded alternative frequency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frequency {
    pub band: Band,
    pub attrib: FreqAttrib,
    /// Frequency in units of 10 kHz for UHF, or plain kHz for LF/MF.
    pub khz: u32,
}

/// An AF code's classification, per RBDS section 3.2.1.6.1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FreqCode {
    Frequency(u8),
    Filler,
    Count(u8),
    LfMfFollows,
    Ignored,
}

impl FreqCode {
    pub fn classify(code: u8) -> FreqCode {
        match code {
            1..=204 => FreqCode::Frequency(code),
            205 => FreqCode::Filler,
            225..=249 => FreqCode::Count(code - 224),
            250 => FreqCode::LfMfFollows,
            _ => FreqCode::Ignored,
        }
    }

    pub fn is_special(self) -> bool {
        !matches!(self, FreqCode::Frequency(_))
    }
}

/// Converts a classified, in-band AF code to a frequency value, per the
/// current band.
pub fn code_to_khz(band: Band, code: u8) -> u32 {
    match band {
        Band::Uhf => 8760 + (code as u32 - 1) * 10,
        Band::LfMf if code < 16 => 153 + 9 * (code as u32 - 1),
        Band::LfMf => 531 + 9 * (code as u32 - 16),
    }
}

/// One station's table of alternative frequencies, as observed so far. This
/// is the publicly observable half of AF decoding; the method-inference
/// scratch state that builds it up lives with the decoder, not here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AfTable {
    pub entries: Vec<Frequency>,
    /// The receiver's own tuned frequency, once known for this table.
    pub tuned_freq: Option<u32>,
}

pub const AF_TABLE_MAX_ENTRIES: usize = 25;

impl AfTable {
    /// Appends a frequency, refusing duplicates and enforcing the 25-entry
    /// cap silently, as the protocol never declares more.
    pub fn push(&mut self, freq: Frequency) -> bool {
        if self.entries.len() >= AF_TABLE_MAX_ENTRIES {
            return false;
        }
        if self.entries.iter().any(|f| f.khz == freq.khz) {
            return false;
        }
        self.entries.push(freq);
        true
    }
}

pub const AF_TABLE_GROUP_MAX_TABLES: usize = 20;

/// The set of AF tables known for all stations heard via this transmission,
/// keyed implicitly by `tuned_freq`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AfTableGroup {
    pub tables: Vec<AfTable>,
    /// Index into `tables` of the table currently being filled, or `None`
    /// between start-block and the first nth-block.
    pub current_table_idx: Option<usize>,
}

impl AfTableGroup {
    pub fn find_by_tuned_freq(&self, khz: u32) -> Option<usize> {
        self.tables.iter().position(|t| t.tuned_freq == Some(khz))
    }

    /// Allocates a new table, silently refusing once the 20-table cap is
    /// reached.
    pub fn allocate(&mut self) -> Option<usize> {
        if self.tables.len() >= AF_TABLE_GROUP_MAX_TABLES {
            return None;
        }
        self.tables.push(AfTable::default());
        Some(self.tables.len() - 1)
    }
}
