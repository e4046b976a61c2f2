//! Alternative-frequency table decoding: method A/B disambiguation and
//! frequency table bookkeeping, operating on the public
//! [`rds_model::AfTable`]/[`rds_model::AfTableGroup`] plus the private
//! [`crate::scratch::AfScratch`]/[`crate::scratch::AfGroupScratch`] that
//! track encoding-method inference across calls.

use crate::scratch::{AfGroupScratch, AfScratch, Method};
use rds_model::{code_to_khz, AfTable, AfTableGroup, Band, FreqAttrib, FreqCode, Frequency};

fn classify(code: u8) -> FreqCode {
    FreqCode::classify(code)
}

fn push_frequency(table: &mut AfTable, scratch: &AfScratch, code: u8, attrib: FreqAttrib) {
    table.push(Frequency {
        band: scratch.band,
        attrib,
        khz: code_to_khz(scratch.band, code),
    });
}

/// Begins a new table: `count` is the declared number of frequencies to
/// follow, `first` is the first frequency-or-special byte.
pub fn start_block(table: &mut AfTable, scratch: &mut AfScratch, count: u8, first: u8) {
    scratch.expected_remaining = count;
    scratch.band = Band::Uhf;
    if scratch.method == Method::Unknown && scratch.prev_method != Method::Unknown {
        scratch.method = scratch.prev_method;
    }
    consume_one(table, scratch, first);
}

fn consume_one(table: &mut AfTable, scratch: &mut AfScratch, code: u8) {
    if scratch.expected_remaining == 0 {
        return;
    }
    scratch.expected_remaining -= 1;
    match classify(code) {
        FreqCode::Frequency(f) => {
            if scratch.method == Method::A || scratch.method == Method::Unknown {
                push_frequency(table, scratch, f, FreqAttrib::SameProgram);
            }
        }
        FreqCode::Filler => {}
        FreqCode::Count(_) => {}
        FreqCode::LfMfFollows => scratch.band = Band::LfMf,
        FreqCode::Ignored => {}
    }
}

/// Processes one nth-block pair `(f1, f2)` against the table's current
/// method-inference state.
pub fn nth_block(table: &mut AfTable, scratch: &mut AfScratch, f1: u8, f2: u8) {
    if scratch.expected_remaining == 0 {
        return;
    }

    let c1 = classify(f1);
    let c2 = classify(f2);

    if scratch.method == Method::Unknown {
        match (c1.is_special(), c2.is_special()) {
            (true, true) => {
                consume_special(scratch, c1);
                consume_special(scratch, c2);
                return;
            }
            (true, false) | (false, true) => {
                commit_method(scratch, Method::A);
            }
            (false, false) => {
                let tuned = table.tuned_freq;
                let code_khz = |c: FreqCode| match c {
                    FreqCode::Frequency(f) => Some(code_to_khz(scratch.band, f)),
                    _ => None,
                };
                let k1 = code_khz(c1);
                let k2 = code_khz(c2);
                if tuned.is_some() && (k1 == tuned || k2 == tuned) {
                    commit_method(scratch, Method::B);
                } else {
                    commit_method(scratch, Method::A);
                    scratch.pending_tuned.take();
                    table.tuned_freq = None;
                }
            }
        }
    }

    match scratch.method {
        Method::A => {
            consume_one(table, scratch, f1);
            consume_one(table, scratch, f2);
        }
        Method::B => {
            if c1.is_special() || c2.is_special() {
                scratch.expected_remaining = scratch.expected_remaining.saturating_sub(2);
                return;
            }
            apply_method_b(table, scratch, f1, f2);
        }
        Method::Unknown => unreachable!("method committed above"),
    }
}

fn consume_special(scratch: &mut AfScratch, code: FreqCode) {
    scratch.expected_remaining = scratch.expected_remaining.saturating_sub(1);
    if let FreqCode::LfMfFollows = code {
        scratch.band = Band::LfMf;
    }
}

fn commit_method(scratch: &mut AfScratch, method: Method) {
    scratch.method = method;
    scratch.prev_method = method;
}

fn apply_method_b(table: &mut AfTable, scratch: &mut AfScratch, f1: u8, f2: u8) {
    let (FreqCode::Frequency(c1), FreqCode::Frequency(c2)) = (classify(f1), classify(f2)) else {
        scratch.expected_remaining = scratch.expected_remaining.saturating_sub(2);
        return;
    };
    scratch.expected_remaining = scratch.expected_remaining.saturating_sub(2);

    let k1 = code_to_khz(scratch.band, c1);
    let k2 = code_to_khz(scratch.band, c2);
    let tuned = match table.tuned_freq {
        Some(t) => t,
        None => return,
    };

    let (anchor, other) = if k1 == tuned {
        (k1, (c2, k2))
    } else if k2 == tuned {
        (k2, (c1, k1))
    } else {
        return;
    };

    let attrib = if anchor < other.1 {
        FreqAttrib::RegionalVariant
    } else {
        FreqAttrib::SameProgram
    };
    push_frequency(table, scratch, other.0, attrib);
}

/// Group-level start-block handling: picks or allocates the table being
/// filled, per the reuse rules for single-table and tuned-frequency-keyed
/// stations.
pub fn group_start_block(
    group: &mut AfTableGroup,
    scratch: &mut AfGroupScratch,
    count: u8,
    first: u8,
) {
    let idx = if group.tables.len() == 1 && scratch.ensure(0).method == Method::A {
        0
    } else if count == 1 {
        if group.tables.is_empty() {
            group.allocate();
        }
        0
    } else {
        match classify(first) {
            FreqCode::Frequency(f) => {
                let khz = code_to_khz(Band::Uhf, f);
                match group.find_by_tuned_freq(khz) {
                    Some(i) => i,
                    None => match group.allocate() {
                        Some(i) => {
                            scratch.ensure(i).pending_tuned = Some(khz);
                            group.tables[i].tuned_freq = Some(khz);
                            i
                        }
                        None => return,
                    },
                }
            }
            _ => match group.allocate() {
                Some(i) => i,
                None => return,
            },
        }
    };

    group.current_table_idx = Some(idx);
    let table_scratch = scratch.ensure(idx);
    start_block(&mut group.tables[idx], table_scratch, count, first);
}

pub fn group_nth_block(group: &mut AfTableGroup, scratch: &mut AfGroupScratch, f1: u8, f2: u8) {
    let Some(idx) = group.current_table_idx else {
        return;
    };
    if idx >= group.tables.len() {
        return;
    }
    nth_block(&mut group.tables[idx], scratch.ensure(idx), f1, f2);
}
