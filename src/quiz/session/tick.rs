use crate::quiz::{QuizAnswer, TIMED_OUT};
use super::{QuizSession, SessionEvent, SessionState};

impl QuizSession {
    /// Advances the countdown by one step. When it reaches zero the current
    /// question is recorded as a timeout and the session moves on.
    pub fn tick(&mut self) -> Option<SessionEvent> {
        let SessionState::InProgress { question_index, time_left_ms } = self.state else {
            return None;
        };

        let time_left_ms = time_left_ms.saturating_sub(self.settings.tick_ms);
        self.state = SessionState::InProgress { question_index, time_left_ms };

        if time_left_ms > 0 {
            return None;
        }

        let question_id = self.pack.questions.get(question_index)?.id.clone();
        let answer = QuizAnswer {
            question_id: question_id.clone(),
            selected_option_index: TIMED_OUT,
            is_correct: false,
            time_spent_ms: self.settings.question_time_limit_ms,
        };

        match self.record_and_advance(answer) {
            SessionEvent::Advanced { question_index, .. } => {
                Some(SessionEvent::TimedOut { question_id, question_index })
            }
            completed => Some(completed),
        }
    }
}
