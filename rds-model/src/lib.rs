//! Data model for decoded RDS/RBDS (Radio Data System / Radio Broadcast Data
//! System) FM broadcast metadata: block/group wire shapes, and the
//! observable per-station state a decoder assembles from them.
//!
//! This crate holds plain data only; the state machines that populate it
//! live in `rds-decode`.

pub mod block;
pub mod clock;
pub mod eon;
pub mod ews;
pub mod frequency;
pub mod group;
pub mod oda;
pub mod ps;
pub mod ptyn;
pub mod rt;
pub mod slc;
pub mod state;
pub mod stats;
pub mod tdc;
pub mod valid;

pub use block::{Block, Blocks, Bler, BLER_A_MAX, BLER_B_MAX, BLER_C_MAX, BLER_D_MAX};
pub use clock::{ClockTime, Pic};
pub use eon::{Eon, EonMapEntry, EonOn};
pub use ews::Ews;
pub use frequency::{
    code_to_khz, AfTable, AfTableGroup, Band, FreqAttrib, FreqCode, Frequency,
    AF_TABLE_GROUP_MAX_TABLES, AF_TABLE_MAX_ENTRIES,
};
pub use group::{GroupType, GroupVersion};
pub use oda::{OdaEntry, OdaTable};
pub use ps::Ps;
pub use ptyn::Ptyn;
pub use rt::{Rt, RtBuffer};
pub use slc::{Slc, SlcVariant};
pub use state::RdsData;
pub use stats::Stats;
pub use tdc::Tdc;
pub use valid::ValidValues;
