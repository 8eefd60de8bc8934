use ratatui::style::Color;

/// Score buckets shared by the meme text and the card theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreTier {
    Champion, // >= 90%
    Wizard,   // >= 70%
    NotBad,   // >= 50%
    NiceTry,  // >= 30%
    Oops,
}

/// Card theme: an id plus the two ends of the gradient.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub id: &'static str,
    pub from: Color,
    pub to: Color,
}

impl ScoreTier {
    pub fn from_percentage(percentage: u32) -> Self {
        match percentage {
            p if p >= 90 => ScoreTier::Champion,
            p if p >= 70 => ScoreTier::Wizard,
            p if p >= 50 => ScoreTier::NotBad,
            p if p >= 30 => ScoreTier::NiceTry,
            _ => ScoreTier::Oops,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ScoreTier::Champion => "Quiz Champion!",
            ScoreTier::Wizard => "Quiz Wizard!",
            ScoreTier::NotBad => "Not bad!",
            ScoreTier::NiceTry => "Nice try!",
            ScoreTier::Oops => "Oops!",
        }
    }

    pub fn quip(&self) -> &'static str {
        match self {
            ScoreTier::Champion => "Are you secretly Google?",
            ScoreTier::Wizard => "Pretty impressive!",
            ScoreTier::NotBad => "Room for improvement!",
            ScoreTier::NiceTry => "Maybe read more Wikipedia?",
            ScoreTier::Oops => "At least you're honest!",
        }
    }

    pub fn theme(&self) -> Theme {
        match self {
            ScoreTier::Champion => Theme { id: "gold", from: Color::Yellow, to: Color::Rgb(202, 138, 4) },
            ScoreTier::Wizard => Theme { id: "green-blue", from: Color::Green, to: Color::Blue },
            ScoreTier::NotBad => Theme { id: "blue-indigo", from: Color::LightBlue, to: Color::Rgb(99, 102, 241) },
            ScoreTier::NiceTry => Theme { id: "purple-pink", from: Color::Magenta, to: Color::LightMagenta },
            ScoreTier::Oops => Theme { id: "red-pink", from: Color::LightRed, to: Color::LightMagenta },
        }
    }
}
