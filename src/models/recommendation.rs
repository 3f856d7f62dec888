use serde::{Deserialize, Serialize};

use super::{GenreChoice, GenreSet, MoodArchetype, QuizAnswers, TimeBucket, TitleRecord};
use crate::locale::Locale;

/// Relaxation step of the filter cascade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Phase {
    /// Duration window, kid-safety exclusion and genre match
    Strict = 1,
    /// Kid-safety exclusion dropped
    KidRelaxed = 2,
    /// Only the realized duration window remains
    TimeOnly = 3,
}

impl Phase {
    pub const ORDER: [Phase; 3] = [Phase::Strict, Phase::KidRelaxed, Phase::TimeOnly];

    pub fn number(self) -> u8 {
        self as u8
    }
}

impl Serialize for Phase {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.number())
    }
}

/// Inclusive duration range in minutes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DurationWindow {
    pub min: u32,
    pub max: u32,
}

impl DurationWindow {
    pub fn contains(&self, minutes: u32) -> bool {
        (self.min..=self.max).contains(&minutes)
    }
}

/// Body of `POST /api/v1/recommendations`
#[derive(Debug, Clone, Deserialize)]
pub struct RecommendationRequest {
    pub answers: QuizAnswers,
    pub time_budget: TimeBucket,
    pub kids_watching: bool,
    #[serde(default)]
    pub genre_choice: GenreChoice,
    #[serde(default)]
    pub locale: Option<Locale>,
}

/// Candidate pool sizes per cascade phase
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CandidateCounts {
    pub strict: usize,
    pub kid_relaxed: usize,
    pub time_only: usize,
}

/// Result handed to the presentation layer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub mood_label: String,
    pub archetype: Option<MoodArchetype>,
    pub genres: Option<GenreSet>,
    /// Phase the sample was drawn from, `None` when every phase was empty
    pub phase_used: Option<Phase>,
    pub candidate_counts: CandidateCounts,
    pub realized_window: Option<DurationWindow>,
    pub records: Vec<TitleRecord>,
    /// Localized message when the strict phase came up empty
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Activity, Drink, Energy};

    #[test]
    fn test_phase_serializes_as_number() {
        assert_eq!(serde_json::to_string(&Phase::KidRelaxed).unwrap(), "2");
        assert_eq!(
            serde_json::to_string(&Option::<Phase>::None).unwrap(),
            "null"
        );
    }

    #[test]
    fn test_duration_window_is_inclusive() {
        let window = DurationWindow { min: 30, max: 95 };
        assert!(window.contains(30));
        assert!(window.contains(95));
        assert!(!window.contains(29));
        assert!(!window.contains(96));
    }

    #[test]
    fn test_request_defaults() {
        let request: RecommendationRequest = serde_json::from_str(
            r#"{
                "answers": ["just_chilling", "low_battery", "hot_cocoa"],
                "time_budget": "< 1 hour",
                "kids_watching": true
            }"#,
        )
        .unwrap();

        assert_eq!(
            request.answers,
            QuizAnswers::new(Activity::JustChilling, Energy::LowBattery, Drink::HotCocoa)
        );
        assert_eq!(request.time_budget, TimeBucket::Short);
        assert_eq!(request.genre_choice, GenreChoice::NoPreference);
        assert!(request.locale.is_none());
    }
}
