//! Program Service name reconstruction: naive write-through, and the
//! confidence-voted "advanced" mode that tolerates transmission errors by
//! requiring a byte to repeat before it is trusted.

use crate::scratch::ConfidenceBuf;
use rds_model::{Ps, ValidValues};

/// Applies one accepted PS byte in simple mode: write straight through.
pub fn update_simple(ps: &mut Ps, valid: &mut ValidValues, idx: usize, byte: u8) {
    ps.display[idx] = byte;
    valid.set(ValidValues::PS);
}

/// Applies one accepted PS byte in advanced (confidence-voted) mode. Once
/// every position has validated, copies the high-probability buffer into
/// the observable display and marks it valid.
pub fn update_advanced(ps: &mut Ps, valid: &mut ValidValues, scratch: &mut ConfidenceBuf<8>, idx: usize, byte: u8) {
    scratch.accept(idx, byte);
    if scratch.complete() {
        ps.display = scratch.hi_prob;
        valid.set(ValidValues::PS);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scratch::VALIDATE_LIMIT;

    #[test]
    fn simple_mode_writes_through_immediately() {
        let mut ps = Ps::default();
        let mut valid = ValidValues::default();
        update_simple(&mut ps, &mut valid, 0, b'K');
        assert_eq!(ps.display[0], b'K');
        assert!(valid.is_set(ValidValues::PS));
    }

    #[test]
    fn advanced_mode_withholds_until_every_position_validates() {
        let mut ps = Ps::default();
        let mut valid = ValidValues::default();
        let mut scratch = ConfidenceBuf::<8>::default();

        update_advanced(&mut ps, &mut valid, &mut scratch, 0, b'K');
        assert!(!valid.is_set(ValidValues::PS));

        for idx in 0..8u8 {
            for _ in 0..VALIDATE_LIMIT {
                update_advanced(&mut ps, &mut valid, &mut scratch, idx as usize, b'A' + idx);
            }
        }
        assert!(valid.is_set(ValidValues::PS));
        assert_eq!(&ps.display, b"ABCDEFGH");
    }

    #[test]
    fn advanced_mode_rejects_a_single_conflicting_byte() {
        let mut ps = Ps::default();
        let mut valid = ValidValues::default();
        let mut scratch = ConfidenceBuf::<8>::default();

        for idx in 0..8u8 {
            for _ in 0..VALIDATE_LIMIT {
                update_advanced(&mut ps, &mut valid, &mut scratch, idx as usize, b'A' + idx);
            }
        }
        assert!(valid.is_set(ValidValues::PS));

        // One noisy byte at position 0 must not overwrite the validated name.
        update_advanced(&mut ps, &mut valid, &mut scratch, 0, b'Z');
        assert_eq!(ps.display[0], b'A');
    }
}
