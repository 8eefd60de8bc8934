use chrono::Utc;
use tracing::info;

use crate::log_debug;
use crate::quiz::{QuizAnswer, QuizResult};
use super::{QuizSession, SessionEvent, SessionState};

impl QuizSession {
    pub(super) fn record_and_advance(&mut self, answer: QuizAnswer) -> SessionEvent {
        let next_index = self.current_question_index().map_or(0, |index| index + 1);
        let was_correct = answer.is_correct;
        log_debug!(
            "{}: {} answered {} in {} ms",
            self.pack.id,
            answer.question_id,
            answer.selected_option_index,
            answer.time_spent_ms
        );

        if was_correct {
            self.total_correct += 1;
        }
        self.total_time_ms += answer.time_spent_ms;
        self.answers.push(answer);

        if next_index < self.pack.questions.len() {
            self.state = SessionState::InProgress {
                question_index: next_index,
                time_left_ms: self.settings.question_time_limit_ms,
            };
            self.question_started_at = self.clock.now();
            SessionEvent::Advanced { question_index: next_index, was_correct }
        } else {
            SessionEvent::Completed(self.complete())
        }
    }

    /// Exactly one store write per completed session. The store swallows
    /// its own failures, so the result always reaches the caller.
    fn complete(&mut self) -> QuizResult {
        self.state = SessionState::Completed;

        let result = QuizResult::from_answers(
            &self.pack.id,
            self.clock.now().with_timezone(&Utc),
            self.answers.clone(),
        );

        let outcome = self.store.record_result(&result, self.clock.today());
        info!(
            pack_id = %result.pack_id,
            correct = result.total_correct,
            total = self.pack.questions.len(),
            time_ms = result.total_time_ms,
            ?outcome,
            "quiz completed"
        );

        self.streak_outcome = Some(outcome);
        self.result = Some(result.clone());
        result
    }
}
