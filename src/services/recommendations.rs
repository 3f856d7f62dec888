use crate::{
    catalog::CatalogStore,
    locale::{Locale, NO_RECOMMENDATION_NOTICE, RELAXED_FALLBACK_NOTICE},
    models::{Phase, Recommendation, RecommendationRequest},
    services::{cascade, mood, sampler},
};

use super::cascade::DurationThresholds;

/// Knobs of the recommendation pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecommendationSettings {
    pub thresholds: DurationThresholds,
    pub sample_size: usize,
    pub seed_base: u64,
    pub default_locale: Locale,
}

impl Default for RecommendationSettings {
    fn default() -> Self {
        Self {
            thresholds: DurationThresholds::default(),
            sample_size: 5,
            seed_base: 42,
            default_locale: Locale::default(),
        }
    }
}

/// Generates watch recommendations for one quiz submission
///
/// Resolves the mood, runs the filter cascade over the catalog and samples
/// from the first phase that has candidates. The computation is pure: the
/// same catalog and request always yield the same recommendation.
pub fn recommend(
    catalog: &CatalogStore,
    request: &RecommendationRequest,
    settings: &RecommendationSettings,
) -> Recommendation {
    let locale = request.locale.unwrap_or(settings.default_locale);
    let mood = mood::resolve(&request.answers, request.genre_choice, locale);

    let phases = cascade::build_phases(
        catalog.records(),
        request.time_budget,
        request.kids_watching,
        mood.genres,
        &settings.thresholds,
    );
    let counts = phases.counts();

    let selection = sampler::select(&phases, settings.seed_base, settings.sample_size);

    tracing::info!(
        archetype = ?mood.archetype,
        time_budget = ?request.time_budget,
        kids_watching = request.kids_watching,
        strict = counts.strict,
        kid_relaxed = counts.kid_relaxed,
        time_only = counts.time_only,
        phase_used = ?selection.phase.map(|p| p.number()),
        returned = selection.records.len(),
        "Recommendation computed"
    );

    let notice = match selection.phase {
        Some(Phase::Strict) => None,
        Some(Phase::KidRelaxed | Phase::TimeOnly) => Some(locale.render(RELAXED_FALLBACK_NOTICE)),
        None => Some(locale.render(NO_RECOMMENDATION_NOTICE)),
    };

    Recommendation {
        mood_label: mood.label,
        archetype: mood.archetype,
        genres: mood.genres,
        phase_used: selection.phase,
        candidate_counts: counts,
        realized_window: phases.realized_window,
        records: selection.records.into_iter().cloned().collect(),
        notice,
    }
}
