use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::models::{DurationWindow, TitleRecord};

pub mod genre_list;
pub mod loader;

pub use genre_list::{parse_genre_list, GenreListError};

/// Errors raised while loading the catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to open catalog {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read catalog: {0}")]
    Csv(#[from] csv::Error),

    #[error("invalid record on line {line}: {reason}")]
    InvalidRecord { line: u64, reason: String },
}

/// In-memory, read-only collection of catalog titles
///
/// Built once at startup and shared by reference afterwards. Nothing mutates
/// the records after construction, so concurrent readers need no locking.
#[derive(Debug)]
pub struct CatalogStore {
    records: Vec<TitleRecord>,
    loaded_at: DateTime<Utc>,
}

/// Summary of the loaded catalog
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogStats {
    pub record_count: usize,
    pub untagged_count: usize,
    pub duration_range: Option<DurationWindow>,
    pub tag_counts: BTreeMap<String, usize>,
    pub loaded_at: DateTime<Utc>,
}

impl CatalogStore {
    pub fn from_records(records: Vec<TitleRecord>) -> Self {
        Self {
            records,
            loaded_at: Utc::now(),
        }
    }

    /// Loads the catalog CSV at `path`
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let records = loader::load_catalog(path)?;

        let store = Self::from_records(records);
        tracing::info!(
            path = %path.display(),
            records = store.len(),
            untagged = store.records.iter().filter(|r| r.genre_tags.is_empty()).count(),
            "Loaded catalog"
        );

        Ok(store)
    }

    pub fn records(&self) -> &[TitleRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn stats(&self) -> CatalogStats {
        let mut tag_counts: BTreeMap<String, usize> = BTreeMap::new();
        for tag in self.records.iter().flat_map(|r| r.genre_tags.iter()) {
            *tag_counts.entry(tag.clone()).or_default() += 1;
        }

        let durations = self.records.iter().map(|r| r.duration_minutes);
        let duration_range = durations
            .clone()
            .min()
            .zip(durations.max())
            .map(|(min, max)| DurationWindow { min, max });

        CatalogStats {
            record_count: self.records.len(),
            untagged_count: self
                .records
                .iter()
                .filter(|r| r.genre_tags.is_empty())
                .count(),
            duration_range,
            tag_counts,
            loaded_at: self.loaded_at,
        }
    }
}
