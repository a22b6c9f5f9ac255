//! Console formatting for banners, summaries, and tips.
//!
//! Pure functions returning strings; the binary decides where they go.

use crate::plan::{Category, Goal, Schedule, Tip, day_name};

/// 60-column separator used for section banners.
pub const RULE: &str = "============================================================";

/// Symbol shown for tips whose category is not one of the known five.
pub const FALLBACK_SYMBOL: &str = "💡";

/// A section banner: rule, title, rule.
pub fn banner(title: &str) -> String {
    format!("\n{RULE}\n{title}\n{RULE}")
}

/// Symbol for a category string, tolerating unknown values.
pub fn category_symbol(category: &str) -> &'static str {
    Category::parse(category).map_or(FALLBACK_SYMBOL, Category::symbol)
}

/// Per-day bulleted recap of the collected week.
pub fn format_schedule_summary(schedule: &Schedule) -> String {
    let mut out = String::new();
    for (day, activities) in schedule.iter() {
        out.push_str(&format!("\n{}:\n", day_name(day)));
        if activities.is_empty() {
            out.push_str("  • No activities\n");
        } else {
            for activity in activities {
                out.push_str(&format!("  • {activity}\n"));
            }
        }
    }
    out
}

/// Bulleted recap of the collected goals.
pub fn format_goals_summary(goals: &[Goal]) -> String {
    if goals.is_empty() {
        return "  • No goals set\n".to_string();
    }
    goals
        .iter()
        .map(|goal| format!("  • {} ({}-term)\n", goal.text, goal.timeframe))
        .collect()
}

/// Numbered tip list: symbol, uppercased category label (hyphens become
/// spaces), tip text indented beneath.
pub fn format_tips(tips: &[Tip]) -> String {
    let mut out = String::new();
    for (i, tip) in tips.iter().enumerate() {
        let label = tip.category.replace('-', " ").to_uppercase();
        out.push_str(&format!(
            "\n{}. {} {}\n   {}\n",
            i + 1,
            category_symbol(&tip.category),
            label,
            tip.tip
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::{Timeframe, Weekday};

    #[test]
    fn known_categories_get_their_own_symbol() {
        assert_eq!(category_symbol("time-management"), "⏰");
        assert_eq!(category_symbol("balance"), "⚖️");
    }

    #[test]
    fn unknown_categories_get_the_fallback_symbol() {
        assert_eq!(category_symbol("mindfulness"), FALLBACK_SYMBOL);
        assert_eq!(category_symbol(""), FALLBACK_SYMBOL);
    }

    #[test]
    fn tips_are_numbered_from_one_with_readable_labels() {
        let tips = vec![
            Tip {
                category: "time-management".into(),
                tip: "Block your mornings".into(),
            },
            Tip {
                category: "self-care".into(),
                tip: "Rest on Sunday".into(),
            },
        ];
        let out = format_tips(&tips);
        assert!(out.contains("1. ⏰ TIME MANAGEMENT\n   Block your mornings"));
        assert!(out.contains("2. 💡 SELF CARE\n   Rest on Sunday"));
    }

    #[test]
    fn empty_tip_list_formats_to_nothing() {
        assert!(format_tips(&[]).is_empty());
    }

    #[test]
    fn schedule_summary_covers_all_days() {
        let mut schedule = Schedule::new();
        schedule.add_activity(Weekday::Mon, "09:00-10:30 Team meeting");
        let out = format_schedule_summary(&schedule);
        assert!(out.contains("Monday:\n  • 09:00-10:30 Team meeting"));
        assert!(out.contains("Tuesday:\n  • No activities"));
        assert!(out.contains("Sunday:\n  • No activities"));
    }

    #[test]
    fn goals_summary_handles_empty_and_non_empty() {
        assert_eq!(format_goals_summary(&[]), "  • No goals set\n");

        let goals = vec![Goal::new("Learn guitar", Timeframe::Medium)];
        assert_eq!(
            format_goals_summary(&goals),
            "  • Learn guitar (medium-term)\n"
        );
    }

    #[test]
    fn banner_wraps_title_in_rules() {
        let out = banner("YOUR GOALS");
        assert_eq!(out, format!("\n{RULE}\nYOUR GOALS\n{RULE}"));
    }
}
