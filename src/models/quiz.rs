use serde::{Deserialize, Serialize};

use super::MoodArchetype;

/// An option of a quiz question
///
/// Every question offers exactly four options and the option at position `k`
/// belongs to the archetype at position `k` of [`MoodArchetype::PRIORITY`].
pub trait QuizOption: Copy + Sized + 'static {
    /// All options in display order
    const ALL: [Self; 4];

    /// Stable identifier used on the wire
    fn id(self) -> &'static str;

    /// The archetype this option votes for
    fn archetype(self) -> MoodArchetype;
}

/// Question 1: what do you feel like doing?
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Activity {
    #[serde(alias = "Just chilling", alias = "Just chilling / 放空耍廢")]
    JustChilling,
    #[serde(alias = "Exciting and intense", alias = "Exciting and intense / 刺激熱血")]
    ExcitingAndIntense,
    #[serde(alias = "Deep and thoughtful", alias = "Deep and thoughtful / 發人深省")]
    DeepAndThoughtful,
    #[serde(alias = "Fun and cheerful", alias = "Fun and cheerful / 輕鬆愉快")]
    FunAndCheerful,
}

impl QuizOption for Activity {
    const ALL: [Self; 4] = [
        Activity::JustChilling,
        Activity::ExcitingAndIntense,
        Activity::DeepAndThoughtful,
        Activity::FunAndCheerful,
    ];

    fn id(self) -> &'static str {
        match self {
            Activity::JustChilling => "just_chilling",
            Activity::ExcitingAndIntense => "exciting_and_intense",
            Activity::DeepAndThoughtful => "deep_and_thoughtful",
            Activity::FunAndCheerful => "fun_and_cheerful",
        }
    }

    fn archetype(self) -> MoodArchetype {
        match self {
            Activity::JustChilling => MoodArchetype::Chill,
            Activity::ExcitingAndIntense => MoodArchetype::Thrill,
            Activity::DeepAndThoughtful => MoodArchetype::Deep,
            Activity::FunAndCheerful => MoodArchetype::Romance,
        }
    }
}

/// Question 2: current energy level?
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Energy {
    #[serde(alias = "3% battery – save me", alias = "3% battery – save me / 精力枯竭")]
    LowBattery,
    #[serde(alias = "Energy drink mode", alias = "Energy drink mode / 精神抖擻")]
    EnergyDrinkMode,
    #[serde(alias = "Balanced and calm", alias = "Balanced and calm / 平靜放鬆")]
    BalancedAndCalm,
    #[serde(alias = "Need comfort", alias = "Need comfort / 情緒低落")]
    NeedComfort,
}

impl QuizOption for Energy {
    const ALL: [Self; 4] = [
        Energy::LowBattery,
        Energy::EnergyDrinkMode,
        Energy::BalancedAndCalm,
        Energy::NeedComfort,
    ];

    fn id(self) -> &'static str {
        match self {
            Energy::LowBattery => "low_battery",
            Energy::EnergyDrinkMode => "energy_drink_mode",
            Energy::BalancedAndCalm => "balanced_and_calm",
            Energy::NeedComfort => "need_comfort",
        }
    }

    fn archetype(self) -> MoodArchetype {
        match self {
            Energy::LowBattery => MoodArchetype::Chill,
            Energy::EnergyDrinkMode => MoodArchetype::Thrill,
            Energy::BalancedAndCalm => MoodArchetype::Deep,
            Energy::NeedComfort => MoodArchetype::Romance,
        }
    }
}

/// Question 3: preferred drink right now?
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Drink {
    #[serde(alias = "Hot cocoa", alias = "Hot cocoa / 巧克力熱飲")]
    HotCocoa,
    #[serde(alias = "Black coffee", alias = "Black coffee / 黑咖啡")]
    BlackCoffee,
    #[serde(alias = "Soda", alias = "Soda / 汽水果汁")]
    Soda,
    #[serde(alias = "Wine or cocktail", alias = "Wine or cocktail / 微醺酒感")]
    WineOrCocktail,
}

impl QuizOption for Drink {
    const ALL: [Self; 4] = [
        Drink::HotCocoa,
        Drink::BlackCoffee,
        Drink::Soda,
        Drink::WineOrCocktail,
    ];

    fn id(self) -> &'static str {
        match self {
            Drink::HotCocoa => "hot_cocoa",
            Drink::BlackCoffee => "black_coffee",
            Drink::Soda => "soda",
            Drink::WineOrCocktail => "wine_or_cocktail",
        }
    }

    fn archetype(self) -> MoodArchetype {
        match self {
            Drink::HotCocoa => MoodArchetype::Chill,
            Drink::BlackCoffee => MoodArchetype::Thrill,
            Drink::Soda => MoodArchetype::Deep,
            Drink::WineOrCocktail => MoodArchetype::Romance,
        }
    }
}

/// The three quiz answers of one request
///
/// Accepted on the wire either as an ordered array `[activity, energy, drink]`
/// or as an object with named fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "AnswersWire")]
pub struct QuizAnswers {
    pub activity: Activity,
    pub energy: Energy,
    pub drink: Drink,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum AnswersWire {
    Ordered((Activity, Energy, Drink)),
    Named {
        activity: Activity,
        energy: Energy,
        drink: Drink,
    },
}

impl From<AnswersWire> for QuizAnswers {
    fn from(wire: AnswersWire) -> Self {
        match wire {
            AnswersWire::Ordered((activity, energy, drink))
            | AnswersWire::Named {
                activity,
                energy,
                drink,
            } => QuizAnswers {
                activity,
                energy,
                drink,
            },
        }
    }
}

impl QuizAnswers {
    pub fn new(activity: Activity, energy: Energy, drink: Drink) -> Self {
        Self {
            activity,
            energy,
            drink,
        }
    }

    /// The archetype each answer votes for, in question order
    pub fn votes(&self) -> [MoodArchetype; 3] {
        [
            self.activity.archetype(),
            self.energy.archetype(),
            self.drink.archetype(),
        ]
    }
}

/// How much time the viewer has
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeBucket {
    #[serde(alias = "< 1 hour")]
    Short,
    #[serde(alias = "Around 1 hour")]
    Medium,
    #[serde(alias = "> 2 hours")]
    Long,
}

impl TimeBucket {
    pub const ALL: [TimeBucket; 3] = [TimeBucket::Short, TimeBucket::Medium, TimeBucket::Long];

    pub fn id(self) -> &'static str {
        match self {
            TimeBucket::Short => "short",
            TimeBucket::Medium => "medium",
            TimeBucket::Long => "long",
        }
    }
}
