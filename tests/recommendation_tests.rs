use std::collections::HashSet;

use moodflix_api::catalog::CatalogStore;
use moodflix_api::locale::Locale;
use moodflix_api::models::{
    tags, Activity, Drink, Energy, GenreChoice, MoodArchetype, Phase, QuizAnswers, QuizOption,
    RecommendationRequest, TimeBucket, TitleRecord,
};
use moodflix_api::services::cascade::{build_phases, DurationThresholds, KID_EXCLUDED_TAGS};
use moodflix_api::services::mood::resolve;
use moodflix_api::services::{recommend, RecommendationSettings};

fn record(title: &str, duration: u32, tags: &[&str]) -> TitleRecord {
    TitleRecord {
        title_en: title.to_string(),
        title_zh: String::new(),
        release_year: 2018,
        genre_tags: tags.iter().map(|t| t.to_string()).collect(),
        duration_minutes: duration,
        rating: "TV-MA".to_string(),
        description: String::new(),
        combined_genre_label: String::new(),
    }
}

/// Thirty titles cycling through durations and tag combinations
fn mixed_catalog() -> CatalogStore {
    let tag_cycle: [&[&str]; 7] = [
        &[tags::COMEDIES],
        &[tags::HORROR, tags::THRILLER],
        &[tags::DOCUMENTARY],
        &[tags::ROMANTIC, tags::DRAMA],
        &[tags::CRIME, tags::MYSTERY],
        &[tags::ACTION, tags::ADVENTURE],
        &[],
    ];
    let records = (0..30)
        .map(|i| {
            let duration = 10 + (i * 37) % 150;
            record(&format!("title-{i}"), duration, tag_cycle[i as usize % tag_cycle.len()])
        })
        .collect();
    CatalogStore::from_records(records)
}

fn every_request() -> Vec<RecommendationRequest> {
    let mut requests = Vec::new();
    for activity in Activity::ALL {
        for drink in Drink::ALL {
            for time_budget in TimeBucket::ALL {
                for kids_watching in [true, false] {
                    for genre_choice in GenreChoice::ALL {
                        requests.push(RecommendationRequest {
                            answers: QuizAnswers::new(activity, Energy::BalancedAndCalm, drink),
                            time_budget,
                            kids_watching,
                            genre_choice,
                            locale: Some(Locale::En),
                        });
                    }
                }
            }
        }
    }
    requests
}

#[test]
fn test_kid_safety_scenario_through_pipeline() {
    let catalog = CatalogStore::from_records(vec![
        record("t20", 20, &[tags::COMEDIES]),
        record("t35", 35, &[tags::DOCUMENTARY]),
        record("t50", 50, &[tags::HORROR]),
        record("t65", 65, &[tags::DRAMA]),
        record("t90", 90, &[tags::HORROR]),
        record("t95", 95, &[tags::FAMILY]),
        record("t30", 30, &[tags::ROMANTIC]),
        record("t45", 45, &[tags::COMEDIES]),
        record("t85", 85, &[tags::ACTION]),
        record("t10", 10, &[tags::HORROR]),
    ]);

    let request = RecommendationRequest {
        answers: QuizAnswers::new(Activity::JustChilling, Energy::LowBattery, Drink::HotCocoa),
        time_budget: TimeBucket::Medium,
        kids_watching: true,
        genre_choice: GenreChoice::HorrorThriller,
        locale: None,
    };
    let result = recommend(&catalog, &request, &RecommendationSettings::default());

    assert_eq!(result.candidate_counts.strict, 0);
    assert_eq!(result.phase_used, Some(Phase::KidRelaxed));

    let titles: HashSet<&str> = result.records.iter().map(|r| r.title_en.as_str()).collect();
    assert_eq!(titles, HashSet::from(["t50", "t90"]));
}

#[test]
fn test_pipeline_properties_hold_for_every_input() {
    let catalog = mixed_catalog();
    let settings = RecommendationSettings::default();

    for request in every_request() {
        let result = recommend(&catalog, &request, &settings);
        let repeat = recommend(&catalog, &request, &settings);
        assert_eq!(result, repeat, "non-deterministic for {:?}", request);

        let counts = result.candidate_counts;
        assert!(counts.strict <= counts.kid_relaxed, "{:?}", request);
        assert!(counts.kid_relaxed <= counts.time_only, "{:?}", request);

        let expected_phase = [
            (Phase::Strict, counts.strict),
            (Phase::KidRelaxed, counts.kid_relaxed),
            (Phase::TimeOnly, counts.time_only),
        ]
        .into_iter()
        .find(|(_, count)| *count > 0);

        match expected_phase {
            Some((phase, pool)) => {
                assert_eq!(result.phase_used, Some(phase), "{:?}", request);
                assert_eq!(result.records.len(), pool.min(5), "{:?}", request);
                assert_eq!(result.notice.is_none(), phase == Phase::Strict, "{:?}", request);
            }
            None => {
                assert_eq!(result.phase_used, None, "{:?}", request);
                assert!(result.records.is_empty());
                assert!(result.notice.is_some());
            }
        }

        let unique: HashSet<&str> = result.records.iter().map(|r| r.title_en.as_str()).collect();
        assert_eq!(unique.len(), result.records.len(), "duplicates for {:?}", request);
    }
}

#[test]
fn test_sample_is_drawn_from_chosen_phase() {
    let catalog = mixed_catalog();
    let settings = RecommendationSettings::default();

    for request in every_request() {
        let result = recommend(&catalog, &request, &settings);
        let Some(phase) = result.phase_used else {
            continue;
        };

        let mood = resolve(&request.answers, request.genre_choice, Locale::En);
        let phases = build_phases(
            catalog.records(),
            request.time_budget,
            request.kids_watching,
            mood.genres,
            &DurationThresholds::default(),
        );
        let pool: HashSet<&str> = phases
            .candidates(phase)
            .iter()
            .map(|r| r.title_en.as_str())
            .collect();

        assert!(
            result
                .records
                .iter()
                .all(|r| pool.contains(r.title_en.as_str())),
            "{:?}",
            request
        );

        if phase == Phase::Strict && request.kids_watching {
            assert!(result
                .records
                .iter()
                .all(|r| !r.has_any_tag(KID_EXCLUDED_TAGS)));
        }
    }
}

#[test]
fn test_fourth_options_resolve_to_romance_end_to_end() {
    let catalog = CatalogStore::from_records(vec![
        record("Slow Burn", 110, &[tags::ROMANTIC]),
        record("Loud Bang", 110, &[tags::ACTION]),
    ]);
    let request = RecommendationRequest {
        answers: QuizAnswers::new(
            Activity::FunAndCheerful,
            Energy::NeedComfort,
            Drink::WineOrCocktail,
        ),
        time_budget: TimeBucket::Long,
        kids_watching: false,
        genre_choice: GenreChoice::NoPreference,
        locale: Some(Locale::Bilingual),
    };

    let result = recommend(&catalog, &request, &RecommendationSettings::default());
    assert_eq!(result.archetype, Some(MoodArchetype::Romance));
    assert_eq!(result.mood_label, "Dopamine Hunter – Romance / 情感療癒模式");
    assert_eq!(result.phase_used, Some(Phase::Strict));
    assert_eq!(result.records.len(), 1);
    assert_eq!(result.records[0].title_en, "Slow Burn");
}
