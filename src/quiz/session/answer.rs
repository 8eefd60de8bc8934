use crate::quiz::QuizAnswer;
use super::{QuizSession, SessionEvent};

impl QuizSession {
    /// Records `selected` for the current question. Ignored unless a
    /// question is on screen.
    pub fn answer(&mut self, selected: usize) -> Option<SessionEvent> {
        let question = self.current_question()?;

        let is_correct = selected == question.correct_option_index;
        let elapsed = self.clock.now() - self.question_started_at;

        let answer = QuizAnswer {
            question_id: question.id.clone(),
            selected_option_index: i32::try_from(selected).unwrap_or(i32::MAX),
            is_correct,
            time_spent_ms: elapsed.num_milliseconds().max(0) as u64,
        };

        Some(self.record_and_advance(answer))
    }
}
