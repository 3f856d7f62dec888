use crate::locale::{Locale, CUSTOM_GENRE_LABEL};
use crate::models::{GenreChoice, MoodArchetype, MoodResult, QuizAnswers};

/// Minimum number of votes an archetype needs to win the quiz
pub const MAJORITY_THRESHOLD: usize = 2;

/// First archetype in priority order that reaches the vote threshold
///
/// This is a threshold rule rather than a max-count rule: an earlier
/// archetype with exactly the threshold beats a later one with more votes.
pub fn majority_archetype(votes: &[MoodArchetype]) -> Option<MoodArchetype> {
    MoodArchetype::PRIORITY.into_iter().find(|archetype| {
        votes.iter().filter(|vote| *vote == archetype).count() >= MAJORITY_THRESHOLD
    })
}

/// Maps quiz answers and the genre override to a mood and genre set
///
/// An explicit genre choice wins over the quiz entirely. Otherwise the quiz
/// majority decides, falling back to [`MoodArchetype::DEFAULT`] for mixed
/// answers.
pub fn resolve(answers: &QuizAnswers, genre_choice: GenreChoice, locale: Locale) -> MoodResult {
    if genre_choice != GenreChoice::NoPreference {
        return MoodResult {
            label: locale.render(CUSTOM_GENRE_LABEL),
            archetype: None,
            genres: genre_choice.genres(),
        };
    }

    let archetype = majority_archetype(&answers.votes()).unwrap_or(MoodArchetype::DEFAULT);

    MoodResult {
        label: locale.label(archetype),
        archetype: Some(archetype),
        genres: Some(archetype.genres()),
    }
}
