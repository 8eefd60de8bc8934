use tracing::debug;

use super::{QuizSession, SessionState};

impl QuizSession {
    /// Begins the first question. Only valid before the session has started
    /// (or after [`QuizSession::reset`]); a pack with no questions never
    /// starts.
    pub fn start(&mut self) {
        if self.state != SessionState::NotStarted || self.pack.questions.is_empty() {
            return;
        }

        self.answers.clear();
        self.total_correct = 0;
        self.total_time_ms = 0;
        self.result = None;
        self.streak_outcome = None;

        self.state = SessionState::InProgress {
            question_index: 0,
            time_left_ms: self.settings.question_time_limit_ms,
        };
        self.question_started_at = self.clock.now();

        debug!(pack_id = %self.pack.id, questions = self.pack.questions.len(), "quiz started");
    }
}
