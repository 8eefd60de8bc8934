pub mod screens;
pub mod style;

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    widgets::Widget,
};
use crate::app::{App, AppMode};
use crate::ui::screens::{home::render_home, question::render_question, result::render_result};

impl Widget for &mut App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        match &self.mode {
            AppMode::Home => render_home(self, area, buf),
            AppMode::Playing => render_question(self, area, buf),
            AppMode::Result => render_result(self, area, buf),
        }
    }
}

pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::clock::ManualClock;
    use crate::event::{AppEvent, EventHandler};
    use crate::quiz::SessionSettings;
    use crate::store::QuizStore;
    use chrono::NaiveDate;
    use std::sync::Arc;

    fn app() -> App {
        let anchor = NaiveDate::from_ymd_opt(2023, 4, 18).unwrap();
        let clock = ManualClock::at_date(anchor);
        clock.advance_days(1);
        App::with_parts(
            Catalog::builtin(anchor),
            QuizStore::in_memory(),
            Arc::new(clock),
            SessionSettings::default(),
            EventHandler::detached(),
        )
    }

    fn render_to_string(app: &mut App) -> String {
        let area = Rect::new(0, 0, 100, 40);
        let mut buf = Buffer::empty(area);
        Widget::render(&mut *app, area, &mut buf);

        (0..area.height)
            .map(|y| (0..area.width).map(|x| buf[(x, y)].symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_home_screen_lists_packs() {
        let mut app = app();
        let screen = render_to_string(&mut app);

        assert!(screen.contains("Today's quiz"));
        assert!(screen.contains("Pop Culture Mania"));
        assert!(screen.contains("Previous quizzes"));
        assert!(screen.contains("Tech Trivia"));
        assert!(!screen.contains("Science Wonders"));
    }

    #[test]
    fn test_question_screen_shows_options() {
        let mut app = app();
        app.dispatch(AppEvent::Select);
        let screen = render_to_string(&mut app);

        assert!(screen.contains("Question 1 of 5"));
        assert!(screen.contains("12s"));
        assert!(screen.contains(" A "));
        assert!(screen.contains(" A   "));
        assert!(screen.contains(" D "));
    }

    #[test]
    fn test_result_screen_shows_score_and_share() {
        let mut app = app();
        app.dispatch(AppEvent::Select);
        for _ in 0..5 {
            app.dispatch(AppEvent::Answer(3));
        }
        assert_eq!(app.mode, AppMode::Result);

        let screen = render_to_string(&mut app);
        assert!(screen.contains("Score:"));
        assert!(screen.contains("Review"));

        app.dispatch(AppEvent::ToggleShare);
        let screen = render_to_string(&mut app);
        assert!(screen.contains("Daily Quiz & Meme Generator"));
    }

    #[test]
    fn test_centered_rect_is_inside() {
        let outer = Rect::new(0, 0, 100, 50);
        let inner = centered_rect(60, 50, outer);
        assert_eq!(inner.width, 60);
        assert_eq!(inner.height, 25);
        assert_eq!(inner.x, 20);
    }
}
