use serde::Serialize;

use crate::locale::{
    Locale, Localized, Text, ACTIVITY_PROMPT, DRINK_PROMPT, ENERGY_PROMPT, GENRE_CHOICE_PROMPT,
    KIDS_WATCHING_PROMPT, TIME_BUDGET_PROMPT,
};
use crate::models::{Activity, Drink, Energy, GenreChoice, QuizOption, TimeBucket};

/// Everything a client needs to render the quiz form
#[derive(Debug, Serialize)]
pub struct QuizSchema {
    pub locale: Locale,
    pub questions: Vec<Question>,
    pub time_budget: Question,
    pub kids_watching: Prompt,
    pub genre_choice: Question,
}

#[derive(Debug, Serialize)]
pub struct Question {
    pub id: &'static str,
    pub prompt: String,
    pub options: Vec<Choice>,
}

#[derive(Debug, Serialize)]
pub struct Prompt {
    pub id: &'static str,
    pub prompt: String,
}

#[derive(Debug, Serialize)]
pub struct Choice {
    pub id: &'static str,
    pub label: String,
}

fn question<T>(id: &'static str, prompt: Text, locale: Locale) -> Question
where
    T: QuizOption + Localized,
{
    Question {
        id,
        prompt: locale.render(prompt),
        options: T::ALL
            .into_iter()
            .map(|option| Choice {
                id: option.id(),
                label: locale.label(option),
            })
            .collect(),
    }
}

impl QuizSchema {
    pub fn build(locale: Locale) -> Self {
        Self {
            locale,
            questions: vec![
                question::<Activity>("activity", ACTIVITY_PROMPT, locale),
                question::<Energy>("energy", ENERGY_PROMPT, locale),
                question::<Drink>("drink", DRINK_PROMPT, locale),
            ],
            time_budget: Question {
                id: "time_budget",
                prompt: locale.render(TIME_BUDGET_PROMPT),
                options: TimeBucket::ALL
                    .into_iter()
                    .map(|bucket| Choice {
                        id: bucket.id(),
                        label: locale.label(bucket),
                    })
                    .collect(),
            },
            kids_watching: Prompt {
                id: "kids_watching",
                prompt: locale.render(KIDS_WATCHING_PROMPT),
            },
            genre_choice: Question {
                id: "genre_choice",
                prompt: locale.render(GENRE_CHOICE_PROMPT),
                options: GenreChoice::ALL
                    .into_iter()
                    .map(|choice| Choice {
                        id: choice.id(),
                        label: locale.label(choice),
                    })
                    .collect(),
            },
        }
    }
}
