/// Coarse block-error-rate class reported by the demodulator for a single
/// 16-bit block. This is a quality gate, not an error count: it only ever
/// gets coarser as errors accumulate within a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Bler {
    /// No detected errors.
    None = 0,
    /// One or two bit errors, likely correctable.
    OneOrTwo = 1,
    /// Three to five bit errors.
    ThreeToFive = 2,
    /// Six or more bit errors; block is unreliable.
    SixOrMore = 3,
}

impl Bler {
    /// The underlying 0..3 error-rate code, for combining thresholds across
    /// blocks (group 4A requires the sum of B/C/D codes to stay low).
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Maps the two-bit error-rate code carried alongside each block in most
    /// log and hardware interfaces onto a [`Bler`] class.
    pub fn from_code(code: u8) -> Bler {
        match code & 0x3 {
            0 => Bler::None,
            1 => Bler::OneOrTwo,
            2 => Bler::ThreeToFive,
            _ => Bler::SixOrMore,
        }
    }

    /// True if this class is no worse than `threshold`.
    pub fn at_most(self, threshold: Bler) -> bool {
        self <= threshold
    }
}

/// One 16-bit RDS block together with the demodulator's confidence in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Block {
    pub value: u16,
    pub errors: Bler,
}

impl Block {
    pub fn new(value: u16, errors: Bler) -> Block {
        Block { value, errors }
    }

    pub fn acceptable(self, threshold: Bler) -> bool {
        self.errors.at_most(threshold)
    }
}

/// The block-error-rate ceilings below which a block's content may be
/// latched into the decoded state. Per RBDS Annex, the dispatcher drops an
/// entire group when block B fails its own threshold.
pub const BLER_A_MAX: Bler = Bler::ThreeToFive;
pub const BLER_B_MAX: Bler = Bler::OneOrTwo;
pub const BLER_C_MAX: Bler = Bler::ThreeToFive;
pub const BLER_D_MAX: Bler = Bler::ThreeToFive;

/// The four blocks of one received RDS group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Blocks {
    pub a: Block,
    pub b: Block,
    pub c: Block,
    pub d: Block,
}

impl Blocks {
    pub fn new(a: Block, b: Block, c: Block, d: Block) -> Blocks {
        Blocks { a, b, c, d }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bler_from_code_masks_to_two_bits() {
        assert_eq!(Bler::from_code(0), Bler::None);
        assert_eq!(Bler::from_code(1), Bler::OneOrTwo);
        assert_eq!(Bler::from_code(2), Bler::ThreeToFive);
        assert_eq!(Bler::from_code(3), Bler::SixOrMore);
        assert_eq!(Bler::from_code(7), Bler::SixOrMore);
    }

    #[test]
    fn bler_ordering_is_monotonic_with_severity() {
        assert!(Bler::None < Bler::OneOrTwo);
        assert!(Bler::OneOrTwo < Bler::ThreeToFive);
        assert!(Bler::ThreeToFive < Bler::SixOrMore);
    }

    #[test]
    fn at_most_accepts_equal_and_better() {
        assert!(Bler::None.at_most(Bler::None));
        assert!(Bler::OneOrTwo.at_most(Bler::ThreeToFive));
        assert!(!Bler::SixOrMore.at_most(Bler::ThreeToFive));
    }

    #[test]
    fn block_acceptable_delegates_to_bler() {
        let block = Block::new(0x1234, Bler::ThreeToFive);
        assert!(block.acceptable(BLER_C_MAX));
        assert!(!block.acceptable(BLER_B_MAX));
    }
}
