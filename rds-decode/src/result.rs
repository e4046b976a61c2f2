use std::io;

/// Errors from the one fallible surface in this crate: turning a text log
/// into [`rds_model::Blocks`](rds_model::Blocks). The group-by-group decode
/// path never returns a `Result` — transport noise and protocol violations
/// are absorbed silently, per the per-field failure semantics each decoder
/// documents.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("io error reading RDS log: {0}")]
    Io(#[from] io::Error),

    #[error("malformed log line {line}: {reason}")]
    MalformedLine { line: usize, reason: String },
}

pub type Result<T> = std::result::Result<T, Error>;
