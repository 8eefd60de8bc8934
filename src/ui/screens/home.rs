use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph, Widget, Wrap},
};

use crate::app::App;
use crate::meme::score_percentage;
use crate::ui::style::{ACCENT, MUTED, highlight_if_selected};

pub fn render_home(app: &App, area: Rect, buf: &mut Buffer) {
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Min(1),
            Constraint::Length(3),
        ])
        .split(area);

    render_streak_header(app, main_layout[0], buf);
    render_pack_list(app, main_layout[1], buf);
    render_footer(app, main_layout[2], buf);
}

fn render_streak_header(app: &App, area: Rect, buf: &mut Buffer) {
    let streak = app.user_streak();
    let badge_color = streak.badge().color();

    let lines = vec![
        Line::from(vec![
            Span::raw("🔥 Current streak: "),
            Span::styled(format!("{} days", streak.current_streak), Style::default().fg(badge_color).bold()),
        ]),
        Line::from(vec![
            Span::raw("🏆 Longest streak: "),
            Span::raw(format!("{} days", streak.longest_streak)),
            Span::styled(format!("   {}", app.clock.today().format("%A, %B %-d")), Style::default().fg(MUTED)),
        ]),
    ];

    Paragraph::new(lines)
        .block(
            Block::bordered()
                .title("Daily Quiz & Meme")
                .title_alignment(Alignment::Center)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(badge_color)),
        )
        .alignment(Alignment::Center)
        .render(area, buf);
}

fn render_pack_list(app: &App, area: Rect, buf: &mut Buffer) {
    let entries = app.home_entries();
    let todays_id = app.catalog.todays_pack(app.clock.today()).map(|p| p.id.clone());

    let container = Block::bordered()
        .title(format!("Quizzes ({})", entries.len()))
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(ACCENT));

    if entries.is_empty() {
        Paragraph::new("No quizzes released yet.\n\nCome back on the first release day!")
            .block(container)
            .fg(Color::Red)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(area, buf);
        return;
    }

    let inner_area = container.inner(area);
    container.render(area, buf);

    let mut lines: Vec<Line> = Vec::new();
    for (idx, pack) in entries.iter().enumerate() {
        let is_selected = idx == app.selected_index;
        let is_today = todays_id.as_deref() == Some(pack.id.as_str());

        if idx == 0 && is_today {
            lines.push(Line::from(Span::styled("Today's quiz", Style::default().fg(Color::Yellow).bold())));
        } else if idx == 0 || (idx == 1 && todays_id.is_some()) {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled("Previous quizzes", Style::default().fg(MUTED).bold())));
        }

        let marker = if is_selected { "▶ " } else { "  " };
        let mut spans = vec![
            Span::raw(marker),
            Span::raw(format!("{} {}", pack.emoji, pack.title)),
            Span::styled(format!("  {} questions", pack.question_count()), Style::default().fg(MUTED)),
        ];

        if let Some(result) = app.store.completed_result(&pack.id) {
            spans.push(Span::styled(
                format!("  ✓ Completed {}%", score_percentage(result.total_correct, pack.question_count())),
                Style::default().fg(Color::Green),
            ));
        }

        lines.push(Line::from(spans).style(highlight_if_selected(is_selected, Style::default().fg(Color::White))));
        if is_selected {
            lines.push(Line::from(Span::styled(format!("    {}", pack.description), Style::default().fg(MUTED).italic())));
        }
    }

    Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .render(inner_area, buf);
}

fn render_footer(app: &App, area: Rect, buf: &mut Buffer) {
    let text = match &app.status_message {
        Some(message) => message.clone(),
        None => "↑/↓ select • Enter play • q quit".to_string(),
    };

    Paragraph::new(text)
        .block(Block::bordered().border_type(BorderType::Rounded))
        .fg(MUTED)
        .alignment(Alignment::Center)
        .render(area, buf);
}
