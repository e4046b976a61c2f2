use rds_model::{Band, AF_TABLE_GROUP_MAX_TABLES};

pub const VALIDATE_LIMIT: u8 = 2;

/// Confidence-voting scratch for one eight-byte field (PS or PTYN use this
/// shape directly; Radiotext uses the 64-byte variant below).
#[derive(Debug, Clone)]
pub struct ConfidenceBuf<const N: usize> {
    pub hi_prob: [u8; N],
    pub lo_prob: [u8; N],
    pub hi_prob_cnt: [u8; N],
}

impl<const N: usize> Default for ConfidenceBuf<N> {
    fn default() -> Self {
        ConfidenceBuf {
            hi_prob: [0u8; N],
            lo_prob: [0u8; N],
            hi_prob_cnt: [0u8; N],
        }
    }
}

impl<const N: usize> ConfidenceBuf<N> {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Applies one accepted byte at `idx` per the double-buffer
    /// confidence-voting algorithm. Returns true if a bump (forced partial
    /// re-validation) was triggered, so the caller can propagate it beyond
    /// this one buffer if needed.
    pub fn accept(&mut self, idx: usize, byte: u8) -> bool {
        let mut in_transition = false;
        if byte == self.hi_prob[idx] {
            if self.hi_prob_cnt[idx] < VALIDATE_LIMIT {
                self.hi_prob_cnt[idx] += 1;
            } else {
                self.hi_prob_cnt[idx] = VALIDATE_LIMIT;
                self.lo_prob[idx] = byte;
            }
        } else if byte == self.lo_prob[idx] {
            std::mem::swap(&mut self.hi_prob[idx], &mut self.lo_prob[idx]);
            if self.hi_prob_cnt[idx] >= VALIDATE_LIMIT {
                self.hi_prob_cnt[idx] = VALIDATE_LIMIT + 1;
                in_transition = true;
            } else {
                self.hi_prob_cnt[idx] = VALIDATE_LIMIT;
            }
        } else if self.hi_prob_cnt[idx] == 0 {
            self.hi_prob[idx] = byte;
            self.hi_prob_cnt[idx] = 1;
        } else {
            self.lo_prob[idx] = byte;
        }

        if in_transition {
            for cnt in self.hi_prob_cnt.iter_mut() {
                if *cnt > 1 {
                    *cnt -= 1;
                }
            }
        }
        in_transition
    }

    pub fn complete(&self) -> bool {
        self.hi_prob_cnt.iter().all(|&c| c >= VALIDATE_LIMIT)
    }

    /// Forces every position to re-validate, used by Radiotext when the A/B
    /// flag transitions mid-stream.
    pub fn bump(&mut self) {
        for i in 0..N {
            if self.hi_prob_cnt[i] == 0 {
                self.hi_prob[i] = b' ';
                self.hi_prob_cnt[i] = 1;
            }
        }
    }
}

/// Per-table AF decode scratch: the encoding-method inference state that
/// the observable [`rds_model::AfTable`] deliberately omits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Unknown,
    A,
    B,
}

#[derive(Debug, Clone, Copy)]
pub struct AfScratch {
    pub method: Method,
    pub prev_method: Method,
    pub band: Band,
    pub expected_remaining: u8,
    /// A provisionally-decoded tuned frequency awaiting method
    /// disambiguation before it is trusted.
    pub pending_tuned: Option<u32>,
}

impl Default for AfScratch {
    fn default() -> AfScratch {
        AfScratch {
            method: Method::Unknown,
            prev_method: Method::Unknown,
            band: Band::Uhf,
            expected_remaining: 0,
            pending_tuned: None,
        }
    }
}

/// Scratch for every table in an [`rds_model::AfTableGroup`], indexed the
/// same way as its `tables` vector.
#[derive(Debug, Clone, Default)]
pub struct AfGroupScratch {
    pub tables: Vec<AfScratch>,
}

impl AfGroupScratch {
    pub fn ensure(&mut self, idx: usize) -> &mut AfScratch {
        if idx >= self.tables.len() {
            self.tables.resize(idx + 1, AfScratch::default());
        }
        &mut self.tables[idx]
    }

    pub fn reset(&mut self) {
        self.tables.clear();
    }
}

pub const _MAX_AF_SCRATCH: usize = AF_TABLE_GROUP_MAX_TABLES;

/// All decode-internal scratch state, kept alongside the public
/// [`rds_model::RdsData`] it feeds but never exposed through it.
#[derive(Debug, Clone, Default)]
pub struct Scratch {
    pub ps: ConfidenceBuf<8>,
    pub rt: ConfidenceBuf<64>,
    pub rt_prev_active: Option<rds_model::RtBuffer>,
    pub ptyn_last_ab: Option<bool>,
    pub af: AfGroupScratch,
    pub eon_af: AfScratch,
}

impl Scratch {
    pub fn reset(&mut self) {
        *self = Scratch::default();
    }
}
