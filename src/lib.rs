#[macro_use]
extern crate log;

pub mod classify;
pub mod ipid;

#[cfg(feature = "display")]
mod display;
#[cfg(feature = "packet")]
mod packet;
#[cfg(feature = "parse")]
mod parse;

/// Final classification for an observed IPID sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// every consecutive pair advanced by a small forward step.
    Global,
    /// some pair repeated a value or jumped too far.
    NonGlobal,
    /// a single value cannot confirm or deny a sequential relationship.
    InsufficientData,
    /// the input held no values at all.
    NoInput,
}

impl Verdict {
    /// process exit status reported for this verdict.
    pub fn exit_code(self) -> i32 {
        match self {
            Verdict::Global => 0,
            Verdict::NonGlobal => 3,
            Verdict::InsufficientData => 4,
            Verdict::NoInput => 5,
        }
    }
}
