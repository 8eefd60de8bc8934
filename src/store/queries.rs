use crate::quiz::QuizResult;
use crate::streak::UserStreak;
use super::QuizStore;

// Every query re-reads the document; nothing is cached between calls.
impl QuizStore {
    pub fn has_completed(&self, pack_id: &str) -> bool {
        self.load().completed_quizzes.contains_key(pack_id)
    }

    pub fn completed_result(&self, pack_id: &str) -> Option<QuizResult> {
        self.load().completed_quizzes.remove(pack_id)
    }

    pub fn user_streak(&self) -> UserStreak {
        self.load().streak
    }
}
