use std::collections::HashSet;

use crate::error::{QuizMemeError, Result};
use super::{Catalog, OPTIONS_PER_QUESTION};

impl Catalog {
    /// Rejects catalogs a session could not play: duplicate pack ids,
    /// duplicate question ids inside a pack, empty packs, and questions
    /// without exactly four options or with an out-of-range answer.
    pub fn validate(&self) -> Result<()> {
        let mut pack_ids = HashSet::new();

        for pack in &self.packs {
            if !pack_ids.insert(pack.id.as_str()) {
                return Err(QuizMemeError::CatalogError(format!("duplicate pack id '{}'", pack.id)));
            }

            if pack.questions.is_empty() {
                return Err(QuizMemeError::CatalogError(format!("pack '{}' has no questions", pack.id)));
            }

            let mut question_ids = HashSet::new();
            for question in &pack.questions {
                if !question_ids.insert(question.id.as_str()) {
                    return Err(QuizMemeError::CatalogError(format!(
                        "pack '{}' repeats question id '{}'",
                        pack.id, question.id
                    )));
                }

                if question.options.len() != OPTIONS_PER_QUESTION {
                    return Err(QuizMemeError::CatalogError(format!(
                        "question '{}' has {} options, expected {}",
                        question.id,
                        question.options.len(),
                        OPTIONS_PER_QUESTION
                    )));
                }

                if question.correct_option_index >= question.options.len() {
                    return Err(QuizMemeError::CatalogError(format!(
                        "question '{}' points at missing option {}",
                        question.id, question.correct_option_index
                    )));
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use crate::catalog::{Catalog, QuizPack, QuizQuestion};

    fn pack_with(id: &str, questions: Vec<QuizQuestion>) -> QuizPack {
        QuizPack {
            id: id.to_string(),
            title: "Pack".to_string(),
            description: String::new(),
            emoji: "🧪".to_string(),
            release_date: NaiveDate::from_ymd_opt(2023, 4, 18).unwrap(),
            questions,
        }
    }

    fn question(id: &str, options: usize, correct: usize) -> QuizQuestion {
        QuizQuestion {
            id: id.to_string(),
            text: "?".to_string(),
            options: (0..options).map(|i| format!("option {}", i)).collect(),
            correct_option_index: correct,
        }
    }

    #[test]
    fn test_validate_rejects_wrong_option_count() {
        let catalog = Catalog::new(vec![pack_with("p", vec![question("q1", 3, 0)])]);
        let err = catalog.validate().unwrap_err();
        assert!(err.to_string().contains("3 options"));
    }

    #[test]
    fn test_validate_rejects_out_of_range_answer() {
        let catalog = Catalog::new(vec![pack_with("p", vec![question("q1", 4, 4)])]);
        assert!(catalog.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_duplicates_and_empty_packs() {
        let dup_packs = Catalog::new(vec![
            pack_with("p", vec![question("q1", 4, 0)]),
            pack_with("p", vec![question("q2", 4, 0)]),
        ]);
        assert!(dup_packs.validate().is_err());

        let dup_questions = Catalog::new(vec![pack_with("p", vec![question("q1", 4, 0), question("q1", 4, 1)])]);
        assert!(dup_questions.validate().is_err());

        let empty = Catalog::new(vec![pack_with("p", Vec::new())]);
        assert!(empty.validate().is_err());
    }

    #[test]
    fn test_question_ids_may_repeat_across_packs() {
        let catalog = Catalog::new(vec![
            pack_with("a", vec![question("q1", 4, 0)]),
            pack_with("b", vec![question("q1", 4, 3)]),
        ]);
        assert!(catalog.validate().is_ok());
    }
}
