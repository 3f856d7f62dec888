use serde::{Deserialize, Serialize};

use super::title::{tags, GenreSet};

/// Named viewing moods, each bound to a fixed genre set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoodArchetype {
    Chill,
    Thrill,
    Deep,
    Romance,
    /// Fallback when no archetype wins a majority of the quiz
    DarkTwist,
}

impl MoodArchetype {
    /// Archetypes the quiz can vote for, in tie-break priority order
    pub const PRIORITY: [MoodArchetype; 4] = [
        MoodArchetype::Chill,
        MoodArchetype::Thrill,
        MoodArchetype::Deep,
        MoodArchetype::Romance,
    ];

    pub const DEFAULT: MoodArchetype = MoodArchetype::DarkTwist;

    pub fn genres(self) -> GenreSet {
        match self {
            MoodArchetype::Chill => &[tags::COMEDIES, tags::FAMILY],
            MoodArchetype::Thrill => &[tags::ACTION, tags::THRILLER, tags::HORROR],
            MoodArchetype::Deep => &[tags::DOCUMENTARY],
            MoodArchetype::Romance => &[tags::ROMANTIC, tags::DRAMA],
            MoodArchetype::DarkTwist => &[tags::HORROR, tags::THRILLER],
        }
    }
}

/// Explicit genre selection that overrides the quiz
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenreChoice {
    /// Recommend by mood
    #[default]
    #[serde(alias = "none")]
    NoPreference,
    Comedy,
    HorrorThriller,
    Documentary,
    ActionAdventure,
    MysteryCrime,
    RomanticDrama,
}

impl GenreChoice {
    pub const ALL: [GenreChoice; 7] = [
        GenreChoice::NoPreference,
        GenreChoice::Comedy,
        GenreChoice::HorrorThriller,
        GenreChoice::Documentary,
        GenreChoice::ActionAdventure,
        GenreChoice::MysteryCrime,
        GenreChoice::RomanticDrama,
    ];

    pub fn id(self) -> &'static str {
        match self {
            GenreChoice::NoPreference => "no_preference",
            GenreChoice::Comedy => "comedy",
            GenreChoice::HorrorThriller => "horror_thriller",
            GenreChoice::Documentary => "documentary",
            GenreChoice::ActionAdventure => "action_adventure",
            GenreChoice::MysteryCrime => "mystery_crime",
            GenreChoice::RomanticDrama => "romantic_drama",
        }
    }

    /// Tags selected by this choice; `None` means no genre restriction
    pub fn genres(self) -> Option<GenreSet> {
        match self {
            GenreChoice::NoPreference => None,
            GenreChoice::Comedy => Some(&[tags::COMEDIES, tags::FAMILY]),
            GenreChoice::HorrorThriller => Some(&[tags::HORROR, tags::THRILLER]),
            GenreChoice::Documentary => Some(&[tags::DOCUMENTARY]),
            GenreChoice::ActionAdventure => Some(&[tags::ACTION, tags::ADVENTURE]),
            GenreChoice::MysteryCrime => Some(&[tags::CRIME, tags::MYSTERY]),
            GenreChoice::RomanticDrama => Some(&[tags::ROMANTIC, tags::DRAMA]),
        }
    }
}

/// Outcome of mood resolution
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoodResult {
    /// Localized display label
    pub label: String,
    /// Resolved archetype, absent when an explicit genre choice was made
    pub archetype: Option<MoodArchetype>,
    /// Genre restriction for filtering; `None` is unrestricted
    pub genres: Option<GenreSet>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_archetype_genre_sets() {
        assert_eq!(MoodArchetype::Thrill.genres(), &["Action", "Thriller", "Horror"]);
        assert_eq!(MoodArchetype::DarkTwist.genres(), &["Horror", "Thriller"]);
        assert!(MoodArchetype::PRIORITY
            .iter()
            .all(|archetype| !archetype.genres().is_empty()));
    }

    #[test]
    fn test_default_archetype_is_not_votable() {
        assert!(!MoodArchetype::PRIORITY.contains(&MoodArchetype::DEFAULT));
    }

    #[test]
    fn test_only_no_preference_is_unrestricted() {
        for choice in GenreChoice::ALL {
            assert_eq!(
                choice.genres().is_none(),
                choice == GenreChoice::NoPreference,
                "{:?}",
                choice
            );
        }
    }

    #[test]
    fn test_genre_choice_wire_format() {
        let choice: GenreChoice = serde_json::from_str("\"mystery_crime\"").unwrap();
        assert_eq!(choice.genres(), Some(&["Crime", "Mystery"][..]));
        assert_eq!(
            serde_json::to_string(&GenreChoice::NoPreference).unwrap(),
            format!("\"{}\"", GenreChoice::NoPreference.id())
        );
    }
}
