use chrono::NaiveDate;
use tracing::debug;

use crate::log_warn;
use crate::quiz::QuizResult;
use crate::streak::{self, StreakOutcome};
use super::QuizStore;

impl QuizStore {
    /// Stores `result` under its pack id (replacing any earlier one) and
    /// folds the completion into the streak. This is the only path that
    /// changes streak state.
    pub fn record_result(&self, result: &QuizResult, today: NaiveDate) -> StreakOutcome {
        let mut state = self.load();

        state
            .completed_quizzes
            .insert(result.pack_id.clone(), result.clone());

        let outcome = streak::update(&mut state.streak, today);
        if outcome == StreakOutcome::Backdated {
            log_warn!(
                "Completion dated {} is earlier than last quiz date {}; streak left as is",
                today,
                state.streak.last_quiz_date
            );
        }
        debug!(
            pack_id = %result.pack_id,
            ?outcome,
            current = state.streak.current_streak,
            "recorded quiz result"
        );

        self.save(&state);
        outcome
    }
}
