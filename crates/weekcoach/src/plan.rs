//! Core data model: the week's schedule, user goals, and returned tips.
//!
//! Everything here is transient — built during a single run, held in memory,
//! and discarded at exit. [`Schedule`] guarantees all seven weekdays are
//! present by construction, so downstream formatting never has to handle a
//! missing day.

use serde::{Deserialize, Serialize};
use std::fmt;

pub use chrono::Weekday;

/// The seven weekdays in display order.
pub const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Full English name for a weekday. Chrono's `Display` uses the short form
/// ("Mon"), which is wrong for prompts and summaries.
pub fn day_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

// ── Schedule ───────────────────────────────────────────────────────

/// A week of free-text activities, keyed by weekday.
///
/// All seven days are always present; a day without entries is an empty
/// list, never an absent key. Activities keep their insertion order. No
/// time-range parsing or overlap detection happens here — conflicts are
/// left for the model to spot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schedule {
    days: [Vec<String>; 7],
}

impl Schedule {
    /// An empty week.
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(day: Weekday) -> usize {
        day.num_days_from_monday() as usize
    }

    /// Append an activity to a day.
    pub fn add_activity(&mut self, day: Weekday, activity: impl Into<String>) {
        self.days[Self::slot(day)].push(activity.into());
    }

    /// Activities recorded for a day, possibly empty.
    pub fn activities(&self, day: Weekday) -> &[String] {
        &self.days[Self::slot(day)]
    }

    /// Iterate all seven days in Monday–Sunday order.
    pub fn iter(&self) -> impl Iterator<Item = (Weekday, &[String])> + '_ {
        WEEK.iter().map(move |&day| (day, self.activities(day)))
    }
}

// ── Goals ──────────────────────────────────────────────────────────

/// Coarse horizon tag for a goal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Timeframe {
    #[default]
    Short,
    Medium,
    Long,
}

impl Timeframe {
    /// Normalize raw user input. The match is exact and case-sensitive;
    /// anything outside `short`/`medium`/`long` falls back to [`Short`](Self::Short).
    pub fn from_input(input: &str) -> Self {
        match input {
            "short" => Self::Short,
            "medium" => Self::Medium,
            "long" => Self::Long,
            _ => Self::Short,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Short => "short",
            Self::Medium => "medium",
            Self::Long => "long",
        }
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A user-stated objective with its timeframe tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Goal {
    pub text: String,
    pub timeframe: Timeframe,
}

impl Goal {
    pub fn new(text: impl Into<String>, timeframe: Timeframe) -> Self {
        Self {
            text: text.into(),
            timeframe,
        }
    }
}

// ── Tips ───────────────────────────────────────────────────────────

/// One piece of categorized advice returned by the model.
///
/// The category string is kept verbatim rather than decoded into
/// [`Category`]: the model is trusted as-is, and a category outside the
/// known five still renders, just with the fallback symbol.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tip {
    pub category: String,
    pub tip: String,
}

/// The five advice categories the prompt asks the model to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    TimeManagement,
    Habits,
    Priorities,
    Balance,
    Strategy,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::TimeManagement,
        Category::Habits,
        Category::Priorities,
        Category::Balance,
        Category::Strategy,
    ];

    /// Decode a category string; `None` for anything outside the known five.
    pub fn parse(category: &str) -> Option<Self> {
        match category {
            "time-management" => Some(Self::TimeManagement),
            "habits" => Some(Self::Habits),
            "priorities" => Some(Self::Priorities),
            "balance" => Some(Self::Balance),
            "strategy" => Some(Self::Strategy),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::TimeManagement => "time-management",
            Self::Habits => "habits",
            Self::Priorities => "priorities",
            Self::Balance => "balance",
            Self::Strategy => "strategy",
        }
    }

    /// Symbol shown next to tips of this category.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::TimeManagement => "⏰",
            Self::Habits => "✅",
            Self::Priorities => "⭐",
            Self::Balance => "⚖️",
            Self::Strategy => "🎯",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schedule_always_has_seven_days() {
        let schedule = Schedule::new();
        let days: Vec<Weekday> = schedule.iter().map(|(day, _)| day).collect();
        assert_eq!(days, WEEK.to_vec());
        for (_, activities) in schedule.iter() {
            assert!(activities.is_empty());
        }
    }

    #[test]
    fn activities_keep_insertion_order() {
        let mut schedule = Schedule::new();
        schedule.add_activity(Weekday::Wed, "07:00-08:00 Gym");
        schedule.add_activity(Weekday::Wed, "09:00-10:30 Team meeting");
        assert_eq!(
            schedule.activities(Weekday::Wed),
            ["07:00-08:00 Gym", "09:00-10:30 Team meeting"]
        );
        assert!(schedule.activities(Weekday::Thu).is_empty());
    }

    #[test]
    fn timeframe_normalization_is_exact_match() {
        assert_eq!(Timeframe::from_input("short"), Timeframe::Short);
        assert_eq!(Timeframe::from_input("medium"), Timeframe::Medium);
        assert_eq!(Timeframe::from_input("long"), Timeframe::Long);

        // Everything else defaults to short, including other casings.
        assert_eq!(Timeframe::from_input("Medium"), Timeframe::Short);
        assert_eq!(Timeframe::from_input("LONG"), Timeframe::Short);
        assert_eq!(Timeframe::from_input("someday"), Timeframe::Short);
        assert_eq!(Timeframe::from_input(""), Timeframe::Short);
    }

    #[test]
    fn category_parse_round_trips_known_values() {
        for category in Category::ALL {
            assert_eq!(Category::parse(category.as_str()), Some(category));
        }
        assert_eq!(Category::parse("mindfulness"), None);
        assert_eq!(Category::parse("Time-Management"), None);
    }

    #[test]
    fn day_names_are_full_words() {
        assert_eq!(day_name(Weekday::Mon), "Monday");
        assert_eq!(day_name(Weekday::Sun), "Sunday");
    }
}
