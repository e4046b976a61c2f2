use crate::clock::{ClockTime, Pic};
use crate::eon::Eon;
use crate::ews::Ews;
use crate::frequency::AfTableGroup;
use crate::oda::OdaTable;
use crate::ps::Ps;
use crate::ptyn::Ptyn;
use crate::rt::Rt;
use crate::slc::Slc;
use crate::stats::Stats;
use crate::tdc::Tdc;
use crate::valid::ValidValues;

/// The complete, host-owned view of a station's decoded RDS metadata. A
/// decoder is handed a mutable reference to one of these and never owns it;
/// the host allocates it once and keeps it for the lifetime of a tuning
/// session.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RdsData {
    pub pi_code: u16,
    pub pic: Pic,
    pub pty: u8,
    pub tp: bool,
    pub ta: bool,
    pub music: bool,
    pub ps: Ps,
    pub rt: Rt,
    pub clock: ClockTime,
    pub slc: Slc,
    pub ptyn: Ptyn,
    pub af: AfTableGroup,
    pub eon: Eon,
    pub oda: OdaTable,
    pub tdc: Tdc,
    pub ews: Ews,
    pub valid: ValidValues,
    pub stats: Stats,
}

impl Default for RdsData {
    fn default() -> RdsData {
        RdsData {
            pi_code: 0,
            pic: Pic::default(),
            pty: 0,
            tp: false,
            ta: false,
            music: false,
            ps: Ps::default(),
            rt: Rt::default(),
            clock: ClockTime::default(),
            slc: Slc::default(),
            ptyn: Ptyn::default(),
            af: AfTableGroup::default(),
            eon: Eon::default(),
            oda: OdaTable::default(),
            tdc: Tdc::default(),
            ews: Ews::default(),
            valid: ValidValues::default(),
            stats: Stats::default(),
        }
    }
}

impl RdsData {
    pub fn new() -> RdsData {
        RdsData::default()
    }

    /// Restores the record to its freshly-created state. The caller is
    /// responsible for invoking any bound ODA clear callback afterward.
    pub fn reset(&mut self) {
        *self = RdsData::default();
    }
}
