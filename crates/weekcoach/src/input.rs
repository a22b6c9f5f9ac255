//! Line-oriented collection of the week's schedule and goals.
//!
//! All reads go through the [`LineSource`] trait so the collection loops
//! can be driven by a scripted sequence in tests instead of a terminal.
//! End of input is not an error — collection simply finishes with whatever
//! was entered so far.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use crate::plan::{Goal, Schedule, Timeframe, WEEK, day_name};

/// A blocking source of user-entered lines.
pub trait LineSource {
    /// Show `prompt` and read one line without its trailing newline.
    /// `Ok(None)` means end of input.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;
}

/// Interactive source backed by stdin, prompting on stdout.
pub struct StdinSource;

impl LineSource for StdinSource {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        print!("{prompt}");
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(Some(line))
    }
}

/// Replays a fixed sequence of lines, then reports end of input.
///
/// Used by tests and useful for non-interactive scripting.
pub struct ScriptedSource {
    lines: VecDeque<String>,
}

impl ScriptedSource {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }
}

impl LineSource for ScriptedSource {
    fn read_line(&mut self, _prompt: &str) -> io::Result<Option<String>> {
        Ok(self.lines.pop_front())
    }
}

/// Collect the week's activities, one day at a time.
///
/// For each weekday in order, prompts repeatedly until a blank line ends
/// that day. End of input finishes the remaining days with no entries; the
/// returned [`Schedule`] always carries all seven days.
pub fn collect_schedule(source: &mut dyn LineSource) -> io::Result<Schedule> {
    let mut schedule = Schedule::new();
    for day in WEEK {
        println!("\n--- {} ---", day_name(day));
        loop {
            let prompt = format!("  {} activity (or press Enter to finish): ", day_name(day));
            let Some(line) = source.read_line(&prompt)? else {
                return Ok(schedule);
            };
            let activity = line.trim();
            if activity.is_empty() {
                break;
            }
            schedule.add_activity(day, activity);
        }
    }
    Ok(schedule)
}

/// Collect goals until the literal `done` (case-insensitive) or end of
/// input. Each non-empty goal line is followed by a timeframe line, which
/// is normalized via [`Timeframe::from_input`].
pub fn collect_goals(source: &mut dyn LineSource) -> io::Result<Vec<Goal>> {
    let mut goals = Vec::new();
    loop {
        let Some(line) = source.read_line("Goal: ")? else {
            break;
        };
        let text = line.trim();
        if text.eq_ignore_ascii_case("done") {
            break;
        }
        if text.is_empty() {
            continue;
        }
        let timeframe = match source.read_line("  Timeframe (short/medium/long): ")? {
            Some(tf) => Timeframe::from_input(tf.trim()),
            None => Timeframe::Short,
        };
        goals.push(Goal::new(text, timeframe));
    }
    Ok(goals)
}

/// One yes/no prompt. Only `yes` or `y` (case-insensitive) count as yes;
/// anything else, including end of input, is no.
pub fn confirm(source: &mut dyn LineSource, prompt: &str) -> io::Result<bool> {
    let answer = source.read_line(prompt)?.unwrap_or_default();
    let answer = answer.trim();
    Ok(answer.eq_ignore_ascii_case("yes") || answer.eq_ignore_ascii_case("y"))
}
