//! Prompt construction: serialize the collected week and goals into the
//! coaching request sent to the model.
//!
//! [`build_prompt`] is a pure function — same inputs, same string — so the
//! whole request side of the pipeline is testable without a network. Empty
//! days and an empty goal list get explicit markers rather than being
//! omitted, so the model always sees the full shape of the week.

use crate::plan::{Goal, Schedule, day_name};

const PREAMBLE: &str = "\
You are a life coach and productivity expert. A person has shared their \
weekly schedule and goals. Please analyze them and provide 5-7 specific, \
actionable tips to help them achieve their goals while maintaining balance.

Pay special attention to:
- Time conflicts and overlapping activities
- Work-life balance
- Time for goal-related activities
- Gaps in the schedule that could be utilized
- Overcommitment or underutilization
";

const FORMAT_INSTRUCTIONS: &str = r#"Please provide tips in the following format - each tip should be a JSON object with "category" (one of: time-management, habits, priorities, balance, strategy) and "tip" (the actual advice). Return ONLY a JSON array of these objects, no other text.

Example format:
[
  {"category": "time-management", "tip": "Block out 30 minutes every morning for your most important task"},
  {"category": "balance", "tip": "I notice overlapping activities on Tuesday - consider prioritizing one"}
]"#;

/// Marker emitted for a day with no activities.
const NO_ACTIVITIES: &str = "No activities listed";
/// Marker substituted for an empty goal list.
const NO_GOALS: &str = "  No specific goals listed\n";

/// Build the full natural-language coaching prompt.
///
/// Always emits exactly seven day sections in Monday–Sunday order, one
/// bullet per goal, and the fixed instruction template asking for a JSON
/// array of `{category, tip}` objects.
pub fn build_prompt(schedule: &Schedule, goals: &[Goal]) -> String {
    let mut schedule_text = String::new();
    for (day, activities) in schedule.iter() {
        if activities.is_empty() {
            schedule_text.push_str(&format!("\n{}: {NO_ACTIVITIES}\n", day_name(day)));
        } else {
            schedule_text.push_str(&format!("\n{}:\n", day_name(day)));
            for activity in activities {
                schedule_text.push_str(&format!("  - {activity}\n"));
            }
        }
    }

    let mut goals_text = String::new();
    for goal in goals {
        goals_text.push_str(&format!("  - {} ({}-term)\n", goal.text, goal.timeframe));
    }
    if goals_text.is_empty() {
        goals_text.push_str(NO_GOALS);
    }

    format!(
        "{PREAMBLE}\nWeekly Schedule:\n{schedule_text}\nGoals:\n{goals_text}\n{FORMAT_INSTRUCTIONS}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::{Timeframe, WEEK, Weekday};

    #[test]
    fn empty_week_has_seven_day_sections_in_order() {
        let prompt = build_prompt(&Schedule::new(), &[]);

        let positions: Vec<usize> = WEEK
            .iter()
            .map(|&day| {
                let header = format!("\n{}:", day_name(day));
                assert_eq!(prompt.matches(&header).count(), 1, "one section per day");
                prompt.find(&header).unwrap()
            })
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn empty_day_gets_marker_and_no_bullets() {
        let prompt = build_prompt(&Schedule::new(), &[]);
        assert_eq!(prompt.matches(NO_ACTIVITIES).count(), 7);

        let schedule_section = prompt
            .split("Weekly Schedule:")
            .nth(1)
            .unwrap()
            .split("Goals:")
            .next()
            .unwrap();
        assert!(!schedule_section.contains("  - "));
    }

    #[test]
    fn goals_become_bullets_with_timeframe_tags() {
        let goals = vec![
            Goal::new("Learn guitar", Timeframe::Medium),
            Goal::new("Run a marathon", Timeframe::Long),
        ];
        let prompt = build_prompt(&Schedule::new(), &goals);
        assert!(prompt.contains("  - Learn guitar (medium-term)\n"));
        assert!(prompt.contains("  - Run a marathon (long-term)\n"));
        assert!(!prompt.contains(NO_GOALS));
    }

    #[test]
    fn empty_goal_list_gets_marker() {
        let prompt = build_prompt(&Schedule::new(), &[]);
        assert!(prompt.contains("No specific goals listed"));
    }

    #[test]
    fn single_busy_monday_scenario() {
        let mut schedule = Schedule::new();
        schedule.add_activity(Weekday::Mon, "09:00-10:30 Team meeting");
        let goals = vec![Goal::new("Learn guitar", Timeframe::Medium)];

        let prompt = build_prompt(&schedule, &goals);
        assert!(prompt.contains("Monday:\n  - 09:00-10:30 Team meeting"));
        assert!(prompt.contains("Tuesday: No activities listed"));
        assert!(prompt.contains("Learn guitar (medium-term)"));
    }

    #[test]
    fn output_is_deterministic() {
        let mut schedule = Schedule::new();
        schedule.add_activity(Weekday::Fri, "18:00-19:00 Guitar practice");
        let goals = vec![Goal::new("Learn guitar", Timeframe::Medium)];
        assert_eq!(
            build_prompt(&schedule, &goals),
            build_prompt(&schedule, &goals)
        );
    }

    #[test]
    fn instruction_template_names_the_allowed_categories() {
        let prompt = build_prompt(&Schedule::new(), &[]);
        assert!(prompt.contains("time-management, habits, priorities, balance, strategy"));
        assert!(prompt.contains("Return ONLY a JSON array"));
    }
}
