use crate::log_error;
use super::{QuizStore, UserQuizState};

impl QuizStore {
    /// Reads the document. Anything short of a well-formed document (no
    /// data, a backend error, unparseable JSON) yields the empty default.
    pub fn load(&self) -> UserQuizState {
        let contents = match self.backend.read() {
            Ok(Some(contents)) => contents,
            Ok(None) => return UserQuizState::default(),
            Err(e) => {
                log_error!("Error loading quiz state: {}", e);
                return UserQuizState::default();
            }
        };

        match serde_json::from_str(&contents) {
            Ok(state) => state,
            Err(e) => {
                log_error!("Error parsing quiz state: {}", e);
                UserQuizState::default()
            }
        }
    }
}
