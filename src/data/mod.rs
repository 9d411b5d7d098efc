//! Record data subsystem.
//!
//! # Data Flow
//! ```text
//! CSV file
//!     → store.rs (parse once at startup, apply load policy)
//!     → RecordStore (immutable, shared via Arc)
//!     → filter.rs (optional genre filter per request)
//!     → record.rs (header-ordered JSON objects)
//! ```

pub mod filter;
pub mod record;
pub mod store;

use std::path::PathBuf;

use thiserror::Error;

pub use filter::{GenreFilter, GENRE_FIELD};
pub use record::Record;
pub use store::{load_store, RecordStore};

/// Failure to read the CSV file.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("cannot open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV in {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}
