//! Candidate sources: the read side of the record store.
//!
//! The engine trusts whatever snapshot a source hands it; freshness,
//! indexing and persistence belong to the store.

use std::borrow::Cow;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::types::CandidateRecord;

/// Errors raised while fetching candidate records.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read candidate file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse candidate records: {0}")]
    Json(#[from] serde_json::Error),
}

/// Supplies the full candidate set for a search.
pub trait CandidateSource: Send + Sync {
    /// Fetch every record. Sources that already hold the records in memory
    /// should borrow them.
    fn fetch_all(&self) -> Result<Cow<'_, [CandidateRecord]>, SourceError>;
}

/// A source over records already held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    records: Vec<CandidateRecord>,
}

impl InMemorySource {
    pub fn new(records: Vec<CandidateRecord>) -> Self {
        Self { records }
    }

    /// Parse a JSON array of records.
    pub fn from_json(json: &str) -> Result<Self, SourceError> {
        Ok(Self::new(serde_json::from_str(json)?))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl From<Vec<CandidateRecord>> for InMemorySource {
    fn from(records: Vec<CandidateRecord>) -> Self {
        Self::new(records)
    }
}

impl CandidateSource for InMemorySource {
    fn fetch_all(&self) -> Result<Cow<'_, [CandidateRecord]>, SourceError> {
        Ok(Cow::Borrowed(&self.records))
    }
}

/// A source that re-reads a JSON array of records from disk on every fetch.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CandidateSource for JsonFileSource {
    fn fetch_all(&self) -> Result<Cow<'_, [CandidateRecord]>, SourceError> {
        let file = File::open(&self.path).map_err(|source| SourceError::Io {
            path: self.path.clone(),
            source,
        })?;
        let records: Vec<CandidateRecord> = serde_json::from_reader(BufReader::new(file))?;
        Ok(Cow::Owned(records))
    }
}
