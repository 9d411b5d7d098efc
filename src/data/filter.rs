//! Genre filtering over the record store.

use crate::config::GenreMatch;
use crate::data::Record;

/// Column the `genre` query parameter is matched against.
pub const GENRE_FIELD: &str = "genre";

/// A prepared genre query.
///
/// The query side is normalised once so the per-row cost is a single
/// comparison (plus a lowercase of the field in case-insensitive mode).
#[derive(Debug, Clone)]
pub struct GenreFilter {
    needle: String,
    mode: GenreMatch,
}

impl GenreFilter {
    pub fn new(genre: &str, mode: GenreMatch) -> Self {
        let needle = match mode {
            GenreMatch::Exact => genre.to_owned(),
            GenreMatch::CaseInsensitive => genre.to_lowercase(),
        };
        Self { needle, mode }
    }

    /// A record with no `genre` column compares as the empty string.
    pub fn matches(&self, record: &Record) -> bool {
        let value = record.get(GENRE_FIELD).unwrap_or("");
        match self.mode {
            GenreMatch::Exact => value == self.needle,
            GenreMatch::CaseInsensitive => value.to_lowercase() == self.needle,
        }
    }

    /// Matching records, in file order.
    pub fn apply<'a>(&self, records: &'a [Record]) -> Vec<&'a Record> {
        records.iter().filter(|r| self.matches(r)).collect()
    }
}
