//! Radiotext reconstruction: naive write-through and confidence-voted
//! "advanced" modes, plus the A/B-flag transition handling that forces
//! re-validation when a station signals a new message.

use crate::scratch::ConfidenceBuf;
use rds_model::{Rt, RtBuffer, ValidValues};

const END_OF_MESSAGE: u8 = 0x0D;

/// Detects an A/B flag transition and, if one occurred, clears the
/// confidence scratch and bumps every unvalidated position so the new
/// message must re-earn its bytes rather than inherit stale confidence from
/// the old one.
pub fn handle_ab_transition(
    rt: &mut Rt,
    prev_active: &mut Option<RtBuffer>,
    scratch: &mut ConfidenceBuf<64>,
    flag: RtBuffer,
) {
    if *prev_active != Some(flag) {
        scratch.bump();
        scratch.reset();
        *prev_active = Some(flag);
    }
    rt.active = flag;
}

/// Applies one accepted Radiotext byte in simple mode at `addr`. An
/// end-of-message marker blanks everything after it; any zero bytes before
/// `addr` are treated as not-yet-received and rendered as spaces.
pub fn update_simple(rt: &mut Rt, valid: &mut ValidValues, addr: usize, byte: u8) {
    let display = rt.active_display_mut();
    if byte == END_OF_MESSAGE {
        for b in display[addr..].iter_mut() {
            *b = b' ';
        }
    } else {
        display[addr] = byte;
    }
    for b in display[..addr].iter_mut() {
        if *b == 0 {
            *b = b' ';
        }
    }
    valid.set(ValidValues::RT);
}

/// Applies one accepted Radiotext byte in advanced mode: nulls become
/// spaces before voting, then the byte is folded into the confidence
/// buffer and copied into the observable display.
pub fn update_advanced(
    rt: &mut Rt,
    valid: &mut ValidValues,
    scratch: &mut ConfidenceBuf<64>,
    addr: usize,
    byte: u8,
) {
    let byte = if byte == 0 { b' ' } else { byte };
    scratch.accept(addr, byte);
    rt.active_display_mut()[addr] = scratch.hi_prob[addr];
    valid.set(ValidValues::RT);
}
