use chrono::NaiveDate;

use super::{StreakOutcome, UserStreak};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Folds one completion on `today` into `streak`.
///
/// Day differences are whole calendar days, so time of day never matters.
/// A stored date that fails to parse counts as no history at all.
pub fn update(streak: &mut UserStreak, today: NaiveDate) -> StreakOutcome {
    let today_str = today.format(DATE_FORMAT).to_string();

    let last_date = match NaiveDate::parse_from_str(&streak.last_quiz_date, DATE_FORMAT) {
        Ok(date) => date,
        Err(_) => {
            streak.current_streak = 1;
            streak.last_quiz_date = today_str;
            streak.longest_streak = streak.longest_streak.max(1);
            return StreakOutcome::Started;
        }
    };

    let day_difference = today.signed_duration_since(last_date).num_days();

    match day_difference {
        0 => {
            streak.last_quiz_date = today_str;
            StreakOutcome::SameDay
        }
        1 => {
            streak.current_streak += 1;
            streak.longest_streak = streak.longest_streak.max(streak.current_streak);
            streak.last_quiz_date = today_str;
            StreakOutcome::Extended
        }
        d if d > 1 => {
            streak.current_streak = 1;
            streak.last_quiz_date = today_str;
            StreakOutcome::Reset { missed_days: d - 1 }
        }
        // Backdated completion: keep the later stored date and the counters.
        _ => StreakOutcome::Backdated,
    }
}
