use super::{QuizSession, SessionState};

impl QuizSession {
    /// Drops everything recorded so far and returns to `NotStarted`. The
    /// stored result of an earlier completion is untouched.
    pub fn reset(&mut self) {
        self.state = SessionState::NotStarted;
        self.answers.clear();
        self.total_correct = 0;
        self.total_time_ms = 0;
        self.result = None;
        self.streak_outcome = None;
        self.already_completed = self.store.has_completed(&self.pack.id);
    }
}
