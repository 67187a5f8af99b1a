//! Corpus inspection command
//!
//! Reports how many candidate secrets a corpus yields.

use crate::core::Word;
use crate::error::Result;
use crate::game::load_from_file;
use std::path::{Path, PathBuf};

/// Words shown as a sample
const SAMPLE_SIZE: usize = 8;

/// Candidate count for a corpus file
pub struct CorpusSummary {
    pub path: PathBuf,
    pub count: usize,
    pub sample: Vec<Word>,
}

/// Load a corpus and summarise its candidate set
///
/// # Errors
///
/// Returns `GameError::Corpus` if the file cannot be read, or
/// `GameError::NoCandidates` if it holds no eligible word.
pub fn summarize_corpus<P: AsRef<Path>>(path: P) -> Result<CorpusSummary> {
    let path = path.as_ref();
    let mut words = load_from_file(path)?;
    let count = words.len();
    words.truncate(SAMPLE_SIZE);

    Ok(CorpusSummary {
        path: path.to_path_buf(),
        count,
        sample: words,
    })
}
