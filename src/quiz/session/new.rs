use std::sync::Arc;

use crate::catalog::QuizPack;
use crate::clock::Clock;
use crate::store::QuizStore;
use super::{QuizSession, SessionSettings, SessionState};

impl QuizSession {
    pub fn new(pack: QuizPack, store: QuizStore, clock: Arc<dyn Clock>) -> Self {
        Self::with_settings(pack, store, clock, SessionSettings::default())
    }

    pub fn with_settings(
        pack: QuizPack,
        store: QuizStore,
        clock: Arc<dyn Clock>,
        settings: SessionSettings,
    ) -> Self {
        let already_completed = store.has_completed(&pack.id);
        let question_started_at = clock.now();

        Self {
            pack,
            store,
            clock,
            settings,
            state: SessionState::NotStarted,
            answers: Vec::new(),
            total_correct: 0,
            total_time_ms: 0,
            question_started_at,
            already_completed,
            result: None,
            streak_outcome: None,
        }
    }
}
