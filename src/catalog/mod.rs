// src/catalog/mod.rs

mod builtin;
mod from_json_file;
mod validate;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Number of answer options every question carries.
pub const OPTIONS_PER_QUESTION: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    pub id: String,
    pub text: String,
    pub options: Vec<String>,
    pub correct_option_index: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizPack {
    pub id: String,
    pub title: String,
    pub description: String,
    pub emoji: String,
    /// Serialized as `YYYY-MM-DD`; the pack unlocks on this local date.
    pub release_date: NaiveDate,
    pub questions: Vec<QuizQuestion>,
}

impl QuizPack {
    pub fn is_available(&self, today: NaiveDate) -> bool {
        self.release_date <= today
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }
}

/// Static list of packs keyed by release date.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    packs: Vec<QuizPack>,
}

impl Catalog {
    /// Packs are kept in release order; ties keep their given order.
    pub fn new(mut packs: Vec<QuizPack>) -> Self {
        packs.sort_by_key(|pack| pack.release_date);
        Self { packs }
    }

    pub fn packs(&self) -> &[QuizPack] {
        &self.packs
    }

    pub fn find(&self, pack_id: &str) -> Option<&QuizPack> {
        self.packs.iter().find(|pack| pack.id == pack_id)
    }

    /// The pack released exactly on `today`, if any.
    pub fn todays_pack(&self, today: NaiveDate) -> Option<&QuizPack> {
        self.packs.iter().find(|pack| pack.release_date == today)
    }

    /// Every pack whose release date is on or before `today`.
    pub fn available_packs(&self, today: NaiveDate) -> Vec<&QuizPack> {
        self.packs
            .iter()
            .filter(|pack| pack.is_available(today))
            .collect()
    }
}
