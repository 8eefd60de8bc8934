mod update;
mod badge;

use serde::{Deserialize, Serialize};

pub use badge::StreakBadge;
pub use update::update;

/// Consecutive-day completion counters, persisted inside the state document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStreak {
    pub current_streak: u32,
    /// `YYYY-MM-DD`, empty until the first completion.
    pub last_quiz_date: String,
    pub longest_streak: u32,
}

impl UserStreak {
    pub fn badge(&self) -> StreakBadge {
        StreakBadge::for_streak(self.current_streak)
    }
}

/// What a streak update did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreakOutcome {
    /// No usable previous completion.
    Started,
    /// Already completed something today.
    SameDay,
    /// Completed yesterday too.
    Extended,
    /// More than one calendar day since the last completion.
    Reset { missed_days: i64 },
    /// `today` is earlier than the stored date; nothing changed.
    Backdated,
}
