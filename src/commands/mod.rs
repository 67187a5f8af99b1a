//! Command implementations

pub mod check;
pub mod simple;
pub mod words;

pub use check::{CheckResult, check_guess};
pub use simple::run_simple;
pub use words::{CorpusSummary, summarize_corpus};
