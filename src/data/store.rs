//! In-memory record store.
//!
//! # Responsibilities
//! - Parse a CSV file (header row + data rows) into [`Record`]s
//! - Hold the rows for the lifetime of the process, read-only
//! - Apply the configured policy when the file cannot be read
//!
//! # Design Decisions
//! - Loaded exactly once at startup, then shared through `Arc`; no locking
//! - Values are kept as text, never trimmed or coerced
//! - Short rows omit trailing fields; extra cells are dropped

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::config::LoadFailurePolicy;
use crate::data::{DataError, Record};

/// Ordered, immutable collection of the rows loaded at startup.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    headers: Vec<String>,
    records: Vec<Record>,
    source: Option<PathBuf>,
}

impl RecordStore {
    /// An empty store, used when loading fails under [`LoadFailurePolicy::Empty`].
    pub fn empty() -> Self {
        Self::default()
    }

    /// Read and parse the CSV file at `path`.
    pub fn load(path: &Path) -> Result<Self, DataError> {
        let file = File::open(path).map_err(|source| DataError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        let mut store = Self::from_reader(file).map_err(|source| DataError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        store.source = Some(path.to_path_buf());
        Ok(store)
    }

    /// Parse CSV text from any reader. The first row is the header.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, csv::Error> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let headers: Vec<String> = reader.headers()?.iter().map(str::to_owned).collect();

        let mut records = Vec::new();
        for (index, row) in reader.records().enumerate() {
            let row = row?;
            if row.len() > headers.len() {
                tracing::debug!(
                    row = index + 1,
                    cells = row.len(),
                    columns = headers.len(),
                    "Dropping cells beyond header width"
                );
            }
            records.push(Record::from_pairs(headers.iter().zip(row.iter()).map(
                |(column, value)| (column.as_str(), value),
            )));
        }

        Ok(Self {
            headers,
            records,
            source: None,
        })
    }

    /// Column names from the header line.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// All rows in file order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// File the rows came from, if they came from one.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }
}

/// Load the store at startup, honouring `policy` on failure.
pub fn load_store(path: &Path, policy: LoadFailurePolicy) -> Result<RecordStore, DataError> {
    match RecordStore::load(path) {
        Ok(store) => {
            tracing::info!(
                record_count = store.len(),
                path = %path.display(),
                "Loaded records"
            );
            Ok(store)
        }
        Err(e) => match policy {
            LoadFailurePolicy::Fatal => Err(e),
            LoadFailurePolicy::Empty => {
                tracing::error!(error = %e, "Failed to load data, serving an empty store");
                Ok(RecordStore::empty())
            }
        },
    }
}
