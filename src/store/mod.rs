// src/store/mod.rs

pub mod backend;
mod load;
mod save;
mod record_result;
mod queries;

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::quiz::QuizResult;
use crate::streak::UserStreak;
pub use backend::{FileBackend, MemoryBackend, StateBackend};

/// The whole persisted document. Always read and written as one unit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserQuizState {
    pub completed_quizzes: BTreeMap<String, QuizResult>,
    pub streak: UserStreak,
}

/// Handle to the state document. Cloning shares the backend.
#[derive(Debug, Clone)]
pub struct QuizStore {
    backend: Arc<dyn StateBackend>,
}

impl QuizStore {
    pub fn new(backend: Arc<dyn StateBackend>) -> Self {
        Self { backend }
    }

    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self::new(Arc::new(FileBackend::new(path)))
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryBackend::new()))
    }
}
