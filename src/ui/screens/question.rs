use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Gauge, Paragraph, Widget, Wrap},
};

use crate::app::App;
use crate::quiz::QuizSession;
use crate::ui::style::{ACCENT, MUTED, timer_color};

const OPTION_LABELS: [char; 4] = ['A', 'B', 'C', 'D'];

pub fn render_question(app: &App, area: Rect, buf: &mut Buffer) {
    let Some(session) = app.session.as_ref() else {
        return;
    };

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(6),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(area);

    render_progress(session, main_layout[0], buf);
    render_timer(session, main_layout[1], buf);
    render_body(session, main_layout[2], buf);
    render_feedback(app, main_layout[3], buf);

    Paragraph::new("1-4 or a-d answer • Esc leave (progress is lost)")
        .block(Block::bordered().border_type(BorderType::Rounded))
        .fg(MUTED)
        .alignment(Alignment::Center)
        .render(main_layout[4], buf);
}

fn render_progress(session: &QuizSession, area: Rect, buf: &mut Buffer) {
    let pack = session.pack();
    let total = pack.question_count();
    let number = session.current_question_index().map_or(total, |i| i + 1);

    Gauge::default()
        .block(
            Block::bordered()
                .title(format!("{} {}", pack.emoji, pack.title))
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(ACCENT))
        .percent(session.progress_percentage().min(100))
        .label(format!("Question {} of {}", number, total))
        .render(area, buf);
}

fn render_timer(session: &QuizSession, area: Rect, buf: &mut Buffer) {
    let percent = session.timer_percentage();
    let seconds_left = session.time_left_ms().div_ceil(1000);

    Gauge::default()
        .block(Block::bordered().title("Time").border_type(BorderType::Rounded))
        .gauge_style(Style::default().fg(timer_color(percent)))
        .percent(percent)
        .label(format!("{}s", seconds_left))
        .render(area, buf);
}

fn render_body(session: &QuizSession, area: Rect, buf: &mut Buffer) {
    let Some(question) = session.current_question() else {
        return;
    };

    let mut lines = vec![
        Line::from(Span::styled(question.text.clone(), Style::default().fg(Color::White).bold())),
        Line::from(""),
    ];
    for (label, option) in OPTION_LABELS.iter().zip(&question.options) {
        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", label), Style::default().fg(Color::Black).bg(ACCENT).bold()),
            Span::raw(format!("  {}", option)),
        ]));
        lines.push(Line::from(""));
    }

    Paragraph::new(lines)
        .block(Block::bordered().border_type(BorderType::Rounded))
        .wrap(Wrap { trim: false })
        .render(area, buf);
}

fn render_feedback(app: &App, area: Rect, buf: &mut Buffer) {
    let (text, color) = match app.last_feedback.as_deref() {
        Some(text @ "Correct!") => (text, Color::Green),
        Some(text) => (text, Color::Red),
        None => ("", MUTED),
    };

    Paragraph::new(text)
        .block(Block::bordered().border_type(BorderType::Rounded))
        .fg(color)
        .bold()
        .alignment(Alignment::Center)
        .render(area, buf);
}
