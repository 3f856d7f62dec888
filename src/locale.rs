//! Display strings for the quiz and its results.
//!
//! Every string exists once as an English/Traditional Chinese pair and is
//! rendered according to the requested [`Locale`]. Decision logic never
//! branches on the locale.

use serde::{Deserialize, Serialize};

use crate::models::{Activity, Drink, Energy, GenreChoice, MoodArchetype, TimeBucket};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    En,
    Zh,
    /// English and Chinese side by side, e.g. "Soda / 汽水果汁"
    #[default]
    Bilingual,
}

/// A display string in both supported languages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Text {
    pub en: &'static str,
    pub zh: &'static str,
}

const fn text(en: &'static str, zh: &'static str) -> Text {
    Text { en, zh }
}

impl Locale {
    pub fn render(self, text: Text) -> String {
        match self {
            Locale::En => text.en.to_string(),
            Locale::Zh => text.zh.to_string(),
            Locale::Bilingual => format!("{} / {}", text.en, text.zh),
        }
    }

    pub fn label<T: Localized>(self, item: T) -> String {
        self.render(item.text())
    }
}

/// Items with a fixed display string
pub trait Localized {
    fn text(self) -> Text;
}

pub const CUSTOM_GENRE_LABEL: Text = text("Custom Genre Selected", "使用者自選類型");

pub const RELAXED_FALLBACK_NOTICE: Text = text(
    "No matches found. Here's a relaxed fallback:",
    "找不到完全符合的結果，以下為放寬條件後的推薦：",
);

pub const NO_RECOMMENDATION_NOTICE: Text = text(
    "Still no suggestions found. Try changing your mood or genre.",
    "仍然找不到推薦，試著換個心情或類型吧。",
);

pub const ACTIVITY_PROMPT: Text = text("What do you feel like doing?", "你現在想做什麼？");
pub const ENERGY_PROMPT: Text = text("Current energy level?", "精神狀態？");
pub const DRINK_PROMPT: Text = text("Preferred drink now?", "此刻想喝的？");
pub const TIME_BUDGET_PROMPT: Text = text("How much time do you have?", "今天打算看多久？");
pub const KIDS_WATCHING_PROMPT: Text = text("Kids watching?", "有小孩一起觀看嗎？");
pub const GENRE_CHOICE_PROMPT: Text = text("Pick a genre", "想看哪種類型？");

impl Localized for MoodArchetype {
    fn text(self) -> Text {
        match self {
            MoodArchetype::Chill => text("Chill Mode – Comedy", "耍廢喜劇模式"),
            MoodArchetype::Thrill => text("Thrill Seeker – Action", "刺激冒險模式"),
            MoodArchetype::Deep => text("Deep Thinker – Documentary", "沉思紀實模式"),
            MoodArchetype::Romance => text("Dopamine Hunter – Romance", "情感療癒模式"),
            MoodArchetype::DarkTwist => text("Dark Twist – Thriller", "黑暗曲線模式"),
        }
    }
}

impl Localized for Activity {
    fn text(self) -> Text {
        match self {
            Activity::JustChilling => text("Just chilling", "放空耍廢"),
            Activity::ExcitingAndIntense => text("Exciting and intense", "刺激熱血"),
            Activity::DeepAndThoughtful => text("Deep and thoughtful", "發人深省"),
            Activity::FunAndCheerful => text("Fun and cheerful", "輕鬆愉快"),
        }
    }
}

impl Localized for Energy {
    fn text(self) -> Text {
        match self {
            Energy::LowBattery => text("3% battery – save me", "精力枯竭"),
            Energy::EnergyDrinkMode => text("Energy drink mode", "精神抖擻"),
            Energy::BalancedAndCalm => text("Balanced and calm", "平靜放鬆"),
            Energy::NeedComfort => text("Need comfort", "情緒低落"),
        }
    }
}

impl Localized for Drink {
    fn text(self) -> Text {
        match self {
            Drink::HotCocoa => text("Hot cocoa", "巧克力熱飲"),
            Drink::BlackCoffee => text("Black coffee", "黑咖啡"),
            Drink::Soda => text("Soda", "汽水果汁"),
            Drink::WineOrCocktail => text("Wine or cocktail", "微醺酒感"),
        }
    }
}

impl Localized for TimeBucket {
    fn text(self) -> Text {
        match self {
            TimeBucket::Short => text("< 1 hour", "一小時以內"),
            TimeBucket::Medium => text("Around 1 hour", "一小時左右"),
            TimeBucket::Long => text("> 2 hours", "兩小時以上"),
        }
    }
}

impl Localized for GenreChoice {
    fn text(self) -> Text {
        match self {
            GenreChoice::NoPreference => text("None – Recommend by mood", "不指定，依分析結果推薦"),
            GenreChoice::Comedy => text("Comedy", "喜劇"),
            GenreChoice::HorrorThriller => text("Horror / Thriller", "恐怖驚悚"),
            GenreChoice::Documentary => text("Documentary", "紀錄片"),
            GenreChoice::ActionAdventure => text("Action / Adventure", "動作冒險"),
            GenreChoice::MysteryCrime => text("Mystery / Crime", "懸疑犯罪"),
            GenreChoice::RomanticDrama => text("Romantic / Drama", "愛情劇情"),
        }
    }
}
