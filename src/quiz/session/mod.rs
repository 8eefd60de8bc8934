// src/quiz/session/mod.rs

mod new;
mod start;
mod tick;
mod answer;
mod advance;
mod reset;

use std::sync::Arc;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::catalog::{QuizPack, QuizQuestion};
use crate::clock::Clock;
use crate::store::QuizStore;
use crate::streak::StreakOutcome;
use super::{QuizAnswer, QuizResult};

pub const QUESTION_TIME_LIMIT_MS: u64 = 12_000;
pub const TICK_STEP_MS: u64 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSettings {
    pub question_time_limit_ms: u64,
    pub tick_ms: u64,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            question_time_limit_ms: QUESTION_TIME_LIMIT_MS,
            tick_ms: TICK_STEP_MS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    NotStarted,
    InProgress { question_index: usize, time_left_ms: u64 },
    Completed,
}

/// What a transition did, for the caller to react to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// An answer was recorded and `question_index` is now on screen.
    Advanced { question_index: usize, was_correct: bool },
    /// The countdown expired on `question_id`; `question_index` is next.
    TimedOut { question_id: String, question_index: usize },
    /// The last question was resolved and the result has been recorded.
    Completed(QuizResult),
}

/// One play-through of a pack.
#[derive(Debug)]
pub struct QuizSession {
    pack: QuizPack,
    store: QuizStore,
    clock: Arc<dyn Clock>,
    settings: SessionSettings,

    state: SessionState,
    answers: Vec<QuizAnswer>,
    total_correct: u32,
    total_time_ms: u64,
    question_started_at: DateTime<Local>,

    already_completed: bool,
    result: Option<QuizResult>,
    streak_outcome: Option<StreakOutcome>,
}

impl QuizSession {
    pub fn pack(&self) -> &QuizPack {
        &self.pack
    }

    pub fn settings(&self) -> SessionSettings {
        self.settings
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_started(&self) -> bool {
        !matches!(self.state, SessionState::NotStarted)
    }

    pub fn is_completed(&self) -> bool {
        matches!(self.state, SessionState::Completed)
    }

    /// Whether the store already held a result for this pack when the
    /// session was created.
    pub fn already_completed(&self) -> bool {
        self.already_completed
    }

    pub fn answers(&self) -> &[QuizAnswer] {
        &self.answers
    }

    pub fn total_correct(&self) -> u32 {
        self.total_correct
    }

    pub fn total_time_ms(&self) -> u64 {
        self.total_time_ms
    }

    pub fn result(&self) -> Option<&QuizResult> {
        self.result.as_ref()
    }

    pub fn streak_outcome(&self) -> Option<StreakOutcome> {
        self.streak_outcome
    }

    pub fn current_question_index(&self) -> Option<usize> {
        match self.state {
            SessionState::InProgress { question_index, .. } => Some(question_index),
            _ => None,
        }
    }

    pub fn current_question(&self) -> Option<&QuizQuestion> {
        self.current_question_index()
            .and_then(|index| self.pack.questions.get(index))
    }

    pub fn time_left_ms(&self) -> u64 {
        match self.state {
            SessionState::InProgress { time_left_ms, .. } => time_left_ms,
            SessionState::NotStarted => self.settings.question_time_limit_ms,
            SessionState::Completed => 0,
        }
    }

    /// Rounded `index / len * 100`. A completed session stays on its last
    /// question, so it reports `(len - 1) / len`.
    pub fn progress_percentage(&self) -> u16 {
        let total = self.pack.questions.len();
        let index = match self.state {
            SessionState::NotStarted => return 0,
            SessionState::InProgress { question_index, .. } => question_index,
            SessionState::Completed => total.saturating_sub(1),
        };
        if total == 0 {
            return 0;
        }
        ((index as f64 / total as f64) * 100.0).round() as u16
    }

    pub fn timer_percentage(&self) -> u16 {
        if self.settings.question_time_limit_ms == 0 {
            return 0;
        }
        let ratio = self.time_left_ms() as f64 / self.settings.question_time_limit_ms as f64;
        (ratio * 100.0).round().min(100.0) as u16
    }
}
