//! Result presentation: score tiers, meme card text, share text.

mod score_tier;

use chrono::{DateTime, Local};

use crate::catalog::QuizPack;
use crate::quiz::QuizResult;
pub use score_tier::{ScoreTier, Theme};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemeText {
    pub title: String,
    pub subtitle: String,
}

/// Rounded percentage; an empty pack scores zero.
pub fn score_percentage(correct: u32, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((correct as f64 / total as f64) * 100.0).round() as u32
}

/// `32400` -> `"32.4 seconds"`.
pub fn format_duration_secs(ms: u64) -> String {
    format!("{:.1} seconds", ms as f64 / 1000.0)
}

pub fn meme_text(result: Option<&QuizResult>, pack: &QuizPack) -> MemeText {
    let Some(result) = result else {
        return MemeText {
            title: "Quiz not completed".to_string(),
            subtitle: "Try again!".to_string(),
        };
    };

    let total = pack.question_count();
    let tier = ScoreTier::from_percentage(score_percentage(result.total_correct, total));

    MemeText {
        title: tier.title().to_string(),
        subtitle: format!("You got {}/{} correct. {}", result.total_correct, total, tier.quip()),
    }
}

/// Plain-text card that can be pasted anywhere.
pub fn share_text(result: &QuizResult, pack: &QuizPack, taken_on: DateTime<Local>) -> String {
    let text = meme_text(Some(result), pack);
    let percentage = score_percentage(result.total_correct, pack.question_count());
    let marks: String = result
        .answers
        .iter()
        .map(|a| if a.is_correct { '🟩' } else if a.is_timeout() { '⬛' } else { '🟥' })
        .collect();

    format!(
        "{} {}\n{}\n{}% on {} {}\n{}\n{}\nDaily Quiz & Meme Generator",
        pack.emoji,
        text.title,
        text.subtitle,
        percentage,
        pack.title,
        pack.emoji,
        marks,
        taken_on.format("%A, %B %-d, %Y"),
    )
}
