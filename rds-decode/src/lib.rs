//!
//! # rds-decode
//! Decoding engine for RDS/RBDS (Radio Data System / Radio Broadcast Data
//! System) FM broadcast metadata. Consumes four-block groups produced by a
//! tuner/demodulator and assembles them into an `rds_model::RdsData` record,
//! including confidence-voted reconstruction of PS and Radiotext and
//! method-A/B disambiguation of Alternative Frequency lists.
//!
//! Open Data Applications are supported via the [`OdaHandler`] trait rather
//! than a bound callback; a host registers one with
//! [`Decoder::set_oda_handler`] to receive group payloads for group types
//! announced through group 3A.
//!

#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::correctness)]

mod af;
mod clock;
mod pic;
mod ps;
mod rt;
mod scratch;
mod slc;

pub mod decoder;
pub mod oda;
pub mod replay;
pub mod result;
pub mod summarize;

pub use decoder::{Decoder, DecoderConfig};
pub use oda::OdaHandler;
pub use result::{Error, Result};
