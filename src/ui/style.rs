use ratatui::style::{Color, Style, Stylize};

pub const ACCENT: Color = Color::Cyan;
pub const MUTED: Color = Color::DarkGray;

pub fn highlight_if_selected(is_selected: bool, style: Style) -> Style {
    if is_selected { style.bold().reversed() } else { style }
}

/// Countdown color: green with plenty of time, then yellow, then red.
pub fn timer_color(percent_left: u16) -> Color {
    match percent_left {
        p if p > 50 => Color::Green,
        p if p > 25 => Color::Yellow,
        _ => Color::Red,
    }
}

pub fn answer_color(is_correct: bool) -> Color {
    if is_correct { Color::Green } else { Color::Red }
}
