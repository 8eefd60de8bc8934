pub mod session;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use session::{QuizSession, SessionEvent, SessionSettings, SessionState};

/// `selected_option_index` recorded when the countdown ran out.
pub const TIMED_OUT: i32 = -1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizAnswer {
    pub question_id: String,
    pub selected_option_index: i32,
    pub is_correct: bool,
    pub time_spent_ms: u64,
}

impl QuizAnswer {
    pub fn is_timeout(&self) -> bool {
        self.selected_option_index == TIMED_OUT
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizResult {
    pub pack_id: String,
    /// When the session completed.
    pub date: DateTime<Utc>,
    pub answers: Vec<QuizAnswer>,
    pub total_correct: u32,
    pub total_time_ms: u64,
    pub streak_maintained: bool,
}

impl QuizResult {
    /// Builds the result from the full answer list; the totals are derived,
    /// never passed in.
    pub fn from_answers(pack_id: &str, date: DateTime<Utc>, answers: Vec<QuizAnswer>) -> Self {
        let total_correct = answers.iter().filter(|a| a.is_correct).count() as u32;
        let total_time_ms = answers.iter().map(|a| a.time_spent_ms).sum();
        Self {
            pack_id: pack_id.to_string(),
            date,
            answers,
            total_correct,
            total_time_ms,
            streak_maintained: true,
        }
    }
}
