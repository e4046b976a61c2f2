//! The group dispatcher: validates block error rates, derives the group
//! type, and routes to the per-field decoders in the sibling modules.

use crate::oda::OdaHandler;
use crate::scratch::Scratch;
use crate::{af, clock, pic, ps, rt, slc};
use rds_model::{
    Bler, Blocks, FreqCode, GroupType, GroupVersion, RdsData, RtBuffer, ValidValues, BLER_A_MAX,
    BLER_B_MAX, BLER_C_MAX, BLER_D_MAX,
};

/// Construction-time behavior switches for [`Decoder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecoderConfig {
    /// Use the confidence-voted reconstruction for PS (and, always, for
    /// Radiotext). When false, PS is written straight through.
    pub advanced_ps_decoding: bool,
}

impl Default for DecoderConfig {
    fn default() -> DecoderConfig {
        DecoderConfig {
            advanced_ps_decoding: true,
        }
    }
}

/// Decodes RDS groups into a host-owned [`RdsData`] record. Holds no
/// ownership over the record itself, only its own scratch state and an
/// optional ODA handler.
pub struct Decoder<'a> {
    config: DecoderConfig,
    rds: &'a mut RdsData,
    scratch: Scratch,
    oda: Option<Box<dyn OdaHandler>>,
}

impl<'a> Decoder<'a> {
    pub fn new(config: DecoderConfig, rds: &'a mut RdsData) -> Decoder<'a> {
        Decoder {
            config,
            rds,
            scratch: Scratch::default(),
            oda: None,
        }
    }

    pub fn set_oda_handler(&mut self, handler: Box<dyn OdaHandler>) {
        self.oda = Some(handler);
    }

    /// Restores the RDS state record to its freshly-created state and fires
    /// the bound ODA handler's `clear`, if any.
    pub fn reset(&mut self) {
        self.rds.reset();
        self.scratch.reset();
        if let Some(handler) = self.oda.as_mut() {
            handler.clear();
        }
    }

    /// Decodes one group. Silently drops it, per field, wherever its
    /// constituent blocks fail their error-rate thresholds.
    pub fn decode(&mut self, blocks: &Blocks) {
        if blocks.a.acceptable(BLER_A_MAX) {
            self.rds.pi_code = blocks.a.value;
            self.rds.valid.set(ValidValues::PI_CODE);
        }

        if !blocks.b.acceptable(BLER_B_MAX) {
            self.rds.stats.blockb_errors += 1;
            return;
        }

        let gt = GroupType::from_block_b(blocks.b.value);

        if gt.version == GroupVersion::B
            && blocks.c.acceptable(BLER_C_MAX)
            && blocks.c.errors < blocks.b.errors
        {
            self.rds.pi_code = blocks.c.value;
            self.rds.valid.set(ValidValues::PI_CODE);
        }

        decode_pty(self.rds, blocks.b.value);
        self.rds.stats.record(gt.code, gt.version == GroupVersion::B);

        if let Some(idx) = oda_owns(self.rds, gt) {
            if let Some(handler) = self.oda.as_mut() {
                self.rds.oda.entries[idx].packet_count += 1;
                let app_id = self.rds.oda.entries[idx].id;
                handler.decode(app_id, self.rds, blocks, gt);
                return;
            }
        }

        match gt.code {
            0 => self.decode_group0(gt, blocks),
            1 => self.decode_group1(gt, blocks),
            2 => self.decode_group2(gt, blocks),
            3 => self.decode_group3(gt, blocks),
            4 => self.decode_group4(gt, blocks),
            5 => self.decode_group5(gt, blocks),
            6 | 7 | 8 => {}
            9 => self.decode_group9(gt, blocks),
            10 => self.decode_group10(gt, blocks),
            11..=13 => {}
            14 => self.decode_group14(gt, blocks),
            15 => self.decode_group15(blocks),
            _ => {}
        }
    }

    fn decode_ps_byte(&mut self, idx: usize, byte: u8) {
        if self.config.advanced_ps_decoding {
            ps::update_advanced(&mut self.rds.ps, &mut self.rds.valid, &mut self.scratch.ps, idx, byte);
        } else {
            ps::update_simple(&mut self.rds.ps, &mut self.rds.valid, idx, byte);
        }
    }

    fn decode_group0(&mut self, gt: GroupType, blocks: &Blocks) {
        if gt.version == GroupVersion::A && blocks.c.errors == Bler::None {
            af_start_or_continue(self.rds, &mut self.scratch, &AfSlot::Main, blocks.c.value);
        }

        if !blocks.d.acceptable(BLER_D_MAX) {
            return;
        }

        let b = blocks.b.value;
        self.rds.ta = (b & 0x10) != 0;
        self.rds.valid.set(ValidValues::TA);
        self.rds.music = (b & 0x08) != 0;
        self.rds.valid.set(ValidValues::MUSIC);

        let pair = (b & 0x3) as usize * 2;
        let d = blocks.d.value;
        self.decode_ps_byte(pair, (d >> 8) as u8);
        self.decode_ps_byte(pair + 1, (d & 0xFF) as u8);
    }

    fn decode_group1(&mut self, gt: GroupType, blocks: &Blocks) {
        if gt.version == GroupVersion::A && blocks.c.acceptable(BLER_C_MAX) {
            self.rds.slc = slc::decode(blocks.c.value);
            self.rds.valid.set(ValidValues::SLC);
        }
        if blocks.d.acceptable(BLER_D_MAX) {
            self.rds.pic = pic::decode(blocks.d.value);
            self.rds.valid.set(ValidValues::PIC);
        }
    }

    fn decode_group2(&mut self, gt: GroupType, blocks: &Blocks) {
        let b = blocks.b.value;
        let flag = if (b & 0x10) != 0 { RtBuffer::B } else { RtBuffer::A };
        rt::handle_ab_transition(&mut self.rds.rt, &mut self.scratch.rt_prev_active, &mut self.scratch.rt, flag);

        if gt.version == GroupVersion::A {
            let addr = (b & 0xF) as usize * 4;
            if blocks.c.acceptable(BLER_C_MAX) {
                let c = blocks.c.value;
                self.decode_rt_byte(addr, (c >> 8) as u8);
                self.decode_rt_byte(addr + 1, (c & 0xFF) as u8);
            }
            if blocks.d.acceptable(BLER_D_MAX) {
                let d = blocks.d.value;
                self.decode_rt_byte(addr + 2, (d >> 8) as u8);
                self.decode_rt_byte(addr + 3, (d & 0xFF) as u8);
            }
        } else {
            let addr = (b & 0xF) as usize * 2;
            if blocks.d.acceptable(BLER_D_MAX) {
                let d = blocks.d.value;
                self.decode_rt_byte(addr, (d >> 8) as u8);
                self.decode_rt_byte(addr + 1, (d & 0xFF) as u8);
            }
        }
    }

    fn decode_rt_byte(&mut self, addr: usize, byte: u8) {
        rt::update_simple(&mut self.rds.rt, &mut self.rds.valid, addr, byte);
        rt::update_advanced(&mut self.rds.rt, &mut self.rds.valid, &mut self.scratch.rt, addr, byte);
    }

    fn decode_group3(&mut self, gt: GroupType, blocks: &Blocks) {
        if gt.version != GroupVersion::A {
            return;
        }
        if !blocks.d.acceptable(BLER_D_MAX) || blocks.d.value == 0 {
            return;
        }
        let b = blocks.b.value;
        // Retained as specified: the announcement payload's target group
        // code is bits 4..1 of block B, not the dispatcher's own top-nibble
        // derivation used for every other group.
        let code = ((b & 0b11110) >> 1) as u8;
        let version = if b & 0x1 != 0 { GroupVersion::B } else { GroupVersion::A };
        let target = GroupType::new(code, version);
        if self.rds.oda.announce(blocks.d.value, target) {
            self.rds.valid.set(ValidValues::ODA);
        }
    }

    fn decode_group4(&mut self, gt: GroupType, blocks: &Blocks) {
        if gt.version != GroupVersion::A {
            return;
        }
        if !blocks.b.acceptable(BLER_B_MAX) || !blocks.c.acceptable(BLER_C_MAX) || !blocks.d.acceptable(BLER_D_MAX) {
            return;
        }
        let sum = blocks.b.errors.code() + blocks.c.errors.code() + blocks.d.errors.code();
        if sum > BLER_B_MAX.code() {
            return;
        }
        self.rds.clock = clock::decode(blocks.b.value, blocks.c.value, blocks.d.value);
        self.rds.valid.set(ValidValues::CLOCK);
    }

    fn decode_group5(&mut self, gt: GroupType, blocks: &Blocks) {
        if gt.version == GroupVersion::A {
            if blocks.b.acceptable(BLER_B_MAX) {
                self.rds.tdc.current_channel = (blocks.b.value & 0x1F) as u8;
            }
            let bytes = [
                (blocks.c.value >> 8) as u8,
                (blocks.c.value & 0xFF) as u8,
                (blocks.d.value >> 8) as u8,
                (blocks.d.value & 0xFF) as u8,
            ];
            self.rds.tdc.append(self.rds.tdc.current_channel, &bytes);
            self.rds.valid.set(ValidValues::TDC);
        } else {
            let bytes = [(blocks.d.value >> 8) as u8, (blocks.d.value & 0xFF) as u8];
            self.rds.tdc.append(self.rds.tdc.current_channel, &bytes);
            self.rds.valid.set(ValidValues::TDC);
        }
    }

    fn decode_group9(&mut self, gt: GroupType, blocks: &Blocks) {
        if gt.version != GroupVersion::A {
            return;
        }
        self.rds.ews.b = blocks.b.value & 0x1F;
        self.rds.ews.c = blocks.c.value;
        self.rds.ews.d = blocks.d.value;
        self.rds.valid.set(ValidValues::EWS);
    }

    fn decode_group10(&mut self, gt: GroupType, blocks: &Blocks) {
        if gt.version != GroupVersion::A {
            return;
        }
        let b = blocks.b.value;
        let flag = (b & 0x10) != 0;
        if self.scratch.ptyn_last_ab != Some(flag) {
            self.rds.ptyn.display = [b' '; 8];
            self.scratch.ptyn_last_ab = Some(flag);
        }
        let base = if (b & 0x1) != 0 { 4 } else { 0 };
        if blocks.c.acceptable(BLER_C_MAX) {
            let c = blocks.c.value;
            self.rds.ptyn.display[base] = (c >> 8) as u8;
            self.rds.ptyn.display[base + 1] = (c & 0xFF) as u8;
            self.rds.valid.set(ValidValues::PTYN);
        }
        if blocks.d.acceptable(BLER_D_MAX) {
            let d = blocks.d.value;
            self.rds.ptyn.display[base + 2] = (d >> 8) as u8;
            self.rds.ptyn.display[base + 3] = (d & 0xFF) as u8;
            self.rds.valid.set(ValidValues::PTYN);
        }
    }

    fn decode_group14(&mut self, gt: GroupType, blocks: &Blocks) {
        self.rds.valid.set(ValidValues::EON);
        let b = blocks.b.value;

        if gt.version == GroupVersion::A {
            if !blocks.c.acceptable(BLER_C_MAX) {
                return;
            }
            let variant = (b & 0xF) as u8;
            let c = blocks.c.value;
            match variant {
                0..=3 => {
                    let k = variant as usize;
                    self.rds.eon.on.ps[2 * k] = (c >> 8) as u8;
                    self.rds.eon.on.ps[2 * k + 1] = (c & 0xFF) as u8;
                }
                4 => af_start_or_continue(self.rds, &mut self.scratch, &AfSlot::Eon, c),
                13 => {
                    // Corrected per the intended behavior: the PTY code is
                    // the top five bits, not a boolean comparison.
                    self.rds.eon.on.pty = ((c >> 11) & 0x1F) as u8;
                    self.rds.eon.on.ta = (c & 0x1) != 0;
                }
                _ => {}
            }
        } else if blocks.d.acceptable(BLER_D_MAX) {
            self.rds.eon.on.pi = blocks.d.value;
            self.rds.eon.on.tp = (b & 0x8) != 0;
            self.rds.eon.on.ta = (b & 0x4) != 0;
        }
    }

    fn decode_group15(&mut self, blocks: &Blocks) {
        let b = blocks.b.value;
        self.rds.ta = (b & 0x10) != 0;
        self.rds.valid.set(ValidValues::TA);
    }
}

fn decode_pty(rds: &mut RdsData, b: u16) {
    rds.tp = (b & 0x0400) != 0;
    rds.pty = ((b >> 5) & 0x1F) as u8;
    rds.valid.set(ValidValues::TP);
    rds.valid.set(ValidValues::PTY);
}

fn oda_owns(rds: &RdsData, gt: GroupType) -> Option<usize> {
    match (gt.code, gt.version) {
        (3, GroupVersion::A) | (10, GroupVersion::A) => None,
        (3, GroupVersion::B)
        | (4, GroupVersion::B)
        | (5, _)
        | (6, _)
        | (7, _)
        | (8, _)
        | (9, _)
        | (10, GroupVersion::B)
        | (11, _)
        | (12, _)
        | (13, _) => rds.oda.find_by_group_type(gt),
        _ => None,
    }
}

enum AfSlot {
    Main,
    Eon,
}

fn af_start_or_continue(rds: &mut RdsData, scratch: &mut Scratch, slot: &AfSlot, value: u16) {
    let hi = (value >> 8) as u8;
    let lo = (value & 0xFF) as u8;
    match slot {
        AfSlot::Main => {
            if let FreqCode::Count(n) = FreqCode::classify(hi) {
                af::group_start_block(&mut rds.af, &mut scratch.af, n, lo);
            } else {
                af::group_nth_block(&mut rds.af, &mut scratch.af, hi, lo);
            }
            rds.valid.set(ValidValues::AF);
        }
        AfSlot::Eon => {
            if let FreqCode::Count(n) = FreqCode::classify(hi) {
                af::start_block(&mut rds.eon.on.af, &mut scratch.eon_af, n, lo);
            } else {
                af::nth_block(&mut rds.eon.on.af, &mut scratch.eon_af, hi, lo);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rds_model::OdaTable;

    fn group(a: u16, b: u16, c: u16, d: u16) -> Blocks {
        Blocks::new(
            block_of(a),
            block_of(b),
            block_of(c),
            block_of(d),
        )
    }

    fn block_of(value: u16) -> rds_model::Block {
        rds_model::Block::new(value, Bler::None)
    }

    #[test]
    fn latches_pi_from_block_a_even_when_block_b_is_rejected() {
        let mut rds = RdsData::default();
        let mut decoder = Decoder::new(DecoderConfig::default(), &mut rds);
        let mut blocks = group(0xBEEF, 0x0400, 0, 0);
        blocks.b.errors = Bler::SixOrMore;
        decoder.decode(&blocks);

        assert_eq!(rds.pi_code, 0xBEEF);
        assert!(rds.valid.is_set(ValidValues::PI_CODE));
        assert_eq!(rds.stats.blockb_errors, 1);
        assert_eq!(rds.stats.groups_decoded, 0);
    }

    #[test]
    fn decodes_ps_in_simple_mode_across_four_groups() {
        let mut rds = RdsData::default();
        let config = DecoderConfig {
            advanced_ps_decoding: false,
        };
        let mut decoder = Decoder::new(config, &mut rds);

        let name = *b"KROCK   ";
        for pair in 0..4u16 {
            let hi = name[(pair * 2) as usize];
            let lo = name[(pair * 2 + 1) as usize];
            let d = ((hi as u16) << 8) | lo as u16;
            decoder.decode(&group(0x1234, pair, 0, d));
        }

        assert!(rds.valid.is_set(ValidValues::PS));
        assert_eq!(&rds.ps.display, b"KROCK   ");
    }

    #[test]
    fn decodes_clock_time_from_group_4a() {
        let mut rds = RdsData::default();
        let mut decoder = Decoder::new(DecoderConfig::default(), &mut rds);

        let b = 0x4000; // group 4A
        let c = 0x0000;
        let d = (12u16 << 12) | (30u16 << 6) | 5;
        decoder.decode(&group(0x1234, b, c, d));

        assert!(rds.valid.is_set(ValidValues::CLOCK));
        assert_eq!(rds.clock.hour, 12);
        assert_eq!(rds.clock.minute, 30);
    }

    #[test]
    fn group_b_block_failure_drops_the_entire_group() {
        let mut rds = RdsData::default();
        let mut decoder = Decoder::new(DecoderConfig::default(), &mut rds);

        let mut blocks = group(0x1234, 0x0000, 0, 0x4B44);
        blocks.b.errors = Bler::SixOrMore;
        decoder.decode(&blocks);

        assert!(!rds.valid.is_set(ValidValues::PS));
        assert_eq!(rds.stats.groups_decoded, 0);
        assert_eq!(rds.stats.blockb_errors, 1);
    }

    #[test]
    fn decodes_slc_and_pic_from_group_1a() {
        let mut rds = RdsData::default();
        let mut decoder = Decoder::new(DecoderConfig::default(), &mut rds);

        // group 1A, b = 0x1000; c carries an SLC language variant (code 3);
        // d carries a PIC with day=5, hour=10, minute=20.
        let b = 0x1000;
        let c = (3u16 << 12) | 0x042;
        let d = (5u16 << 11) | (10u16 << 6) | 20;
        decoder.decode(&group(0x1234, b, c, d));

        assert!(rds.valid.is_set(ValidValues::SLC));
        assert_eq!(rds.slc.variant, rds_model::SlcVariant::Language { code: 0x042 });
        assert!(rds.valid.is_set(ValidValues::PIC));
        assert_eq!(rds.pic.day, 5);
        assert_eq!(rds.pic.hour, 10);
        assert_eq!(rds.pic.minute, 20);
    }

    #[test]
    fn decodes_eon_ps_segment_from_group_14a() {
        let mut rds = RdsData::default();
        let mut decoder = Decoder::new(DecoderConfig::default(), &mut rds);

        // group 14A, variant 0 (b low nibble = 0) carries EON PS chars 0-1.
        let b = 0xE000;
        let c = ((b'W' as u16) << 8) | b'X' as u16;
        decoder.decode(&group(0x1234, b, c, 0));

        assert!(rds.valid.is_set(ValidValues::EON));
        assert_eq!(&rds.eon.on.ps[0..2], b"WX");
    }

    #[test]
    fn oda_announcement_then_dispatch_routes_to_the_bound_handler() {
        struct Counter(u32);
        impl OdaHandler for Counter {
            fn decode(&mut self, app_id: u16, _rds: &RdsData, _blocks: &Blocks, _gt: GroupType) {
                assert_eq!(app_id, 0xCD46);
                self.0 += 1;
            }
        }

        let mut rds = RdsData::default();
        let mut decoder = Decoder::new(DecoderConfig::default(), &mut rds);
        decoder.set_oda_handler(Box::new(Counter(0)));

        // Group 3A (b = 0x300B) announces app 0xCD46 bound to group 5B: the
        // announcement payload's target code/version live in bits 4..0 of
        // block B, not the dispatcher's own top-nibble/bit-11 derivation.
        decoder.decode(&group(0x1234, 0x300B, 0, 0xCD46));

        // A group 5B group (b = 0x5800) should now be routed to the handler
        // instead of the default TDC decoder.
        decoder.decode(&group(0x1234, 0x5800, 0x1111, 0x2222));
        assert_eq!(rds.oda.find_by_id(0xCD46), Some(0));
        assert_eq!(rds.oda.entries[0].packet_count, 1);
    }

    #[test]
    fn reset_restores_defaults_and_fires_the_handler_clear() {
        use std::cell::RefCell;
        use std::rc::Rc;

        struct Flag(Rc<RefCell<bool>>);
        impl OdaHandler for Flag {
            fn decode(&mut self, _: u16, _: &RdsData, _: &Blocks, _: GroupType) {}
            fn clear(&mut self) {
                *self.0.borrow_mut() = true;
            }
        }

        let cleared = Rc::new(RefCell::new(false));
        let mut rds = RdsData::default();
        let mut decoder = Decoder::new(DecoderConfig::default(), &mut rds);
        decoder.decode(&group(0x1234, 0x0000, 0, 0x4B44));
        assert!(decoder.rds.pi_code != 0);

        decoder.set_oda_handler(Box::new(Flag(cleared.clone())));
        decoder.reset();
        assert_eq!(decoder.rds.pi_code, 0);
        assert_eq!(decoder.rds.oda, OdaTable::default());
        assert!(*cleared.borrow());
    }
}

