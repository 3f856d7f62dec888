use crate::models::{
    tags, CandidateCounts, DurationWindow, GenreSet, Phase, TimeBucket, TitleRecord,
};

/// Tags that keep a title out of the strict phase while kids are watching
pub const KID_EXCLUDED_TAGS: GenreSet = &[tags::HORROR, tags::THRILLER, tags::CRIME];

/// Minute bounds for the three time buckets
///
/// Neighbouring buckets overlap slightly so a title close to a boundary is
/// eligible for both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DurationThresholds {
    pub short_max: u32,
    pub medium_min: u32,
    pub medium_max: u32,
    pub long_min: u32,
}

impl Default for DurationThresholds {
    fn default() -> Self {
        Self {
            short_max: 40,
            medium_min: 30,
            medium_max: 100,
            long_min: 80,
        }
    }
}

impl DurationThresholds {
    pub fn admits(&self, bucket: TimeBucket, minutes: u32) -> bool {
        match bucket {
            TimeBucket::Short => minutes <= self.short_max,
            TimeBucket::Medium => (self.medium_min..=self.medium_max).contains(&minutes),
            TimeBucket::Long => minutes >= self.long_min,
        }
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.medium_min > self.medium_max {
            anyhow::bail!(
                "medium bucket is empty: {} > {}",
                self.medium_min,
                self.medium_max
            );
        }
        if self.medium_min > self.short_max {
            anyhow::bail!(
                "short and medium buckets do not overlap: short ends at {}, medium starts at {}",
                self.short_max,
                self.medium_min
            );
        }
        if self.long_min > self.medium_max {
            anyhow::bail!(
                "medium and long buckets do not overlap: medium ends at {}, long starts at {}",
                self.medium_max,
                self.long_min
            );
        }
        Ok(())
    }
}

/// Candidate sets of the three relaxation phases
///
/// Candidates borrow from the catalog and keep catalog order.
#[derive(Debug, Clone, Default)]
pub struct Phases<'a> {
    /// Time bucket, kid-safety exclusion and genre match
    pub strict: Vec<&'a TitleRecord>,
    /// Realized window and genre match, kid-safety dropped
    pub kid_relaxed: Vec<&'a TitleRecord>,
    /// Realized window only
    pub time_only: Vec<&'a TitleRecord>,
    /// Duration range actually spanned by the titles in the time bucket
    pub realized_window: Option<DurationWindow>,
}

impl<'a> Phases<'a> {
    pub fn candidates(&self, phase: Phase) -> &[&'a TitleRecord] {
        match phase {
            Phase::Strict => &self.strict,
            Phase::KidRelaxed => &self.kid_relaxed,
            Phase::TimeOnly => &self.time_only,
        }
    }

    pub fn counts(&self) -> CandidateCounts {
        CandidateCounts {
            strict: self.strict.len(),
            kid_relaxed: self.kid_relaxed.len(),
            time_only: self.time_only.len(),
        }
    }
}

fn is_kid_excluded(record: &TitleRecord, kids_watching: bool) -> bool {
    kids_watching && record.has_any_tag(KID_EXCLUDED_TAGS)
}

fn matches_genres(record: &TitleRecord, genres: Option<GenreSet>) -> bool {
    genres.map_or(true, |genres| record.has_any_tag(genres))
}

/// Builds the candidate sets of every phase
///
/// The later phases are bounded by the `[min, max]` duration range of the
/// titles admitted by the time bucket rather than by the bucket itself. When
/// the bucket admits nothing there is no such range and both later phases
/// stay empty.
pub fn build_phases<'a>(
    catalog: &'a [TitleRecord],
    bucket: TimeBucket,
    kids_watching: bool,
    genres: Option<GenreSet>,
    thresholds: &DurationThresholds,
) -> Phases<'a> {
    let in_bucket: Vec<&TitleRecord> = catalog
        .iter()
        .filter(|record| thresholds.admits(bucket, record.duration_minutes))
        .collect();

    let strict: Vec<&TitleRecord> = in_bucket
        .iter()
        .copied()
        .filter(|record| !is_kid_excluded(record, kids_watching))
        .filter(|record| matches_genres(record, genres))
        .collect();

    let realized_window = realized_window(&in_bucket);

    let Some(window) = realized_window else {
        return Phases {
            strict,
            ..Phases::default()
        };
    };

    let time_only: Vec<&TitleRecord> = catalog
        .iter()
        .filter(|record| window.contains(record.duration_minutes))
        .collect();

    let kid_relaxed: Vec<&TitleRecord> = time_only
        .iter()
        .copied()
        .filter(|record| matches_genres(record, genres))
        .collect();

    Phases {
        strict,
        kid_relaxed,
        time_only,
        realized_window,
    }
}

fn realized_window(records: &[&TitleRecord]) -> Option<DurationWindow> {
    let min = records.iter().map(|r| r.duration_minutes).min()?;
    let max = records.iter().map(|r| r.duration_minutes).max()?;
    Some(DurationWindow { min, max })
}
