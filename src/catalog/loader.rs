use serde::Deserialize;
use std::collections::BTreeSet;
use std::io;
use std::path::Path;

use super::genre_list::parse_genre_list;
use super::CatalogError;
use crate::models::TitleRecord;

/// Stored for titles whose release year cell is blank
const UNKNOWN_RELEASE_YEAR: i32 = 0;

/// One row of the bilingual catalog CSV as exported upstream
#[derive(Debug, Deserialize)]
struct CatalogRow {
    title_en: String,
    #[serde(default)]
    title_zh: String,
    #[serde(default)]
    release_year: Option<f64>,
    #[serde(default)]
    genre_list: String,
    #[serde(default)]
    duration_min: Option<f64>,
    #[serde(default)]
    rating: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    listed_in_zh_en: String,
}

impl CatalogRow {
    /// `Ok(None)` for a row without a duration, which no time bucket can admit
    fn into_record(self, line: u64) -> Result<Option<TitleRecord>, CatalogError> {
        // Blank and NaN cells both mean the export had no value
        let Some(raw_duration) = self.duration_min.filter(|d| !d.is_nan()) else {
            tracing::warn!(
                line,
                title = %self.title_en,
                "Missing duration, skipping title"
            );
            return Ok(None);
        };

        let duration_minutes = whole_minutes(raw_duration).ok_or_else(|| {
            CatalogError::InvalidRecord {
                line,
                reason: format!("duration_min {} is not a valid duration", raw_duration),
            }
        })?;

        let release_year = match self.release_year.filter(|y| !y.is_nan()) {
            Some(year) if year.is_finite() => year.round() as i32,
            Some(_) => {
                return Err(CatalogError::InvalidRecord {
                    line,
                    reason: "release_year is not a number".to_string(),
                })
            }
            None => UNKNOWN_RELEASE_YEAR,
        };

        let genre_tags = parse_genre_list(&self.genre_list).unwrap_or_else(|error| {
            tracing::warn!(
                line,
                title = %self.title_en,
                raw = %self.genre_list,
                error = %error,
                "Malformed genre list, treating title as untagged"
            );
            BTreeSet::new()
        });

        Ok(Some(TitleRecord {
            title_en: self.title_en,
            title_zh: self.title_zh,
            release_year,
            genre_tags,
            duration_minutes,
            rating: self.rating,
            description: self.description,
            combined_genre_label: self.listed_in_zh_en,
        }))
    }
}

/// Exports write durations as floats ("90.0"); round to whole minutes
fn whole_minutes(raw: f64) -> Option<u32> {
    if raw.is_finite() && raw >= 0.0 && raw <= f64::from(u32::MAX) {
        Some(raw.round() as u32)
    } else {
        None
    }
}

/// Reads catalog records from CSV data with a header row
pub fn read_catalog<R: io::Read>(source: R) -> Result<Vec<TitleRecord>, CatalogError> {
    let mut reader = csv::Reader::from_reader(source);
    let headers = reader.headers()?.clone();

    let mut records = Vec::new();
    let mut row = csv::StringRecord::new();

    while reader.read_record(&mut row)? {
        let line = row.position().map(|p| p.line()).unwrap_or_default();
        let parsed: CatalogRow =
            row.deserialize(Some(&headers))
                .map_err(|source| CatalogError::InvalidRecord {
                    line,
                    reason: source.to_string(),
                })?;
        if let Some(record) = parsed.into_record(line)? {
            records.push(record);
        }
    }

    Ok(records)
}

/// Reads the catalog CSV at `path`
pub fn load_catalog(path: &Path) -> Result<Vec<TitleRecord>, CatalogError> {
    let file = std::fs::File::open(path).map_err(|source| CatalogError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    read_catalog(io::BufReader::new(file))
}
