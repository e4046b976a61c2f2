//! Replays an RDS-Spy-style log through [`rds_decode`] and prints the
//! resulting station state and per-field statistics. Exit codes:
//!
//! - `0`: success
//! - `1`: usage error
//! - `2`: could not read the log file
//! - `3`: the log contained no groups

use clap::Parser;
use env_logger::{Builder, Env};
use log::{debug, warn};
use rds_decode::replay::read_rds_spy_log;
use rds_decode::summarize::summarize;
use rds_decode::{Decoder, DecoderConfig, OdaHandler};
use rds_model::{Blocks, GroupType, RdsData};
use std::cell::RefCell;
use std::fs::File;
use std::process::ExitCode;
use std::rc::Rc;

const AID_RT_PLUS: u16 = 0x4BD7;
const AID_TMC: u16 = 0xCD46;
const AID_ITUNES: u16 = 0xC3B0;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to an RDS-Spy-style plain-text log.
    logfile: String,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct OdaCounters {
    rtplus: u32,
    tmc: u32,
    itunes: u32,
}

/// Counts the three well-known Open Data Applications named by the
/// bundled exerciser, mirroring the original utility's handler.
struct OdaCounterHandler(Rc<RefCell<OdaCounters>>);

impl OdaHandler for OdaCounterHandler {
    fn decode(&mut self, app_id: u16, _rds: &RdsData, _blocks: &Blocks, _group_type: GroupType) {
        let mut counters = self.0.borrow_mut();
        match app_id {
            AID_RT_PLUS => counters.rtplus += 1,
            AID_TMC => counters.tmc += 1,
            AID_ITUNES => counters.itunes += 1,
            _ => {}
        }
    }

    fn clear(&mut self) {
        *self.0.borrow_mut() = OdaCounters::default();
    }
}

fn main() -> ExitCode {
    Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::from(1);
        }
    };

    let file = match File::open(&cli.logfile) {
        Ok(file) => file,
        Err(err) => {
            eprintln!("can't read \"{}\": {err}", cli.logfile);
            return ExitCode::from(2);
        }
    };

    let groups = match read_rds_spy_log(file) {
        Ok(groups) => groups,
        Err(err) => {
            eprintln!("can't read \"{}\": {err}", cli.logfile);
            return ExitCode::from(2);
        }
    };

    if groups.is_empty() {
        eprintln!("\"{}\" is empty", cli.logfile);
        return ExitCode::from(3);
    }

    debug!("replaying {} groups", groups.len());

    let oda_counters = Rc::new(RefCell::new(OdaCounters::default()));
    let mut rds = RdsData::default();
    {
        let mut decoder = Decoder::new(DecoderConfig::default(), &mut rds);
        decoder.set_oda_handler(Box::new(OdaCounterHandler(oda_counters.clone())));
        for blocks in &groups {
            decoder.decode(blocks);
        }
    }

    if rds.stats.blockb_errors as usize > groups.len() / 2 {
        warn!("over half of received groups failed block B's error threshold");
    }

    println!("{}", summarize(&rds));
    let counters = oda_counters.borrow();
    println!("RT+: {}", counters.rtplus);
    println!("RDS-TMC: {}", counters.tmc);
    println!("iTunes: {}", counters.itunes);

    ExitCode::SUCCESS
}
