use crate::log_error;
use super::{QuizStore, UserQuizState};

impl QuizStore {
    /// Writes the whole document in a single backend call. Failures are
    /// logged and dropped.
    pub fn save(&self, state: &UserQuizState) {
        let serialized = match serde_json::to_string(state) {
            Ok(serialized) => serialized,
            Err(e) => {
                log_error!("Error serializing quiz state: {}", e);
                return;
            }
        };

        if let Err(e) = self.backend.write(&serialized) {
            log_error!("Error saving quiz state: {}", e);
        }
    }
}
