use chrono::Local;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Clear, Paragraph, Widget, Wrap},
};

use crate::app::App;
use crate::catalog::QuizPack;
use crate::meme::{self, ScoreTier};
use crate::quiz::QuizResult;
use crate::ui::centered_rect;
use crate::ui::style::{MUTED, answer_color};

pub fn render_result(app: &App, area: Rect, buf: &mut Buffer) {
    let Some(pack) = app.session.as_ref().map(|s| s.pack()) else {
        return;
    };
    let result = app.shown_result.as_ref();

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(9),
            Constraint::Min(4),
            Constraint::Length(3),
        ])
        .split(area);

    render_meme_card(result, pack, main_layout[0], buf);
    if let Some(result) = result {
        render_review(result, pack, main_layout[1], buf);
    }

    let footer = app.status_message.clone().unwrap_or_default();
    Paragraph::new(vec![
        Line::from(footer),
        Line::from(Span::styled("r retake • s share • Enter home • q quit", Style::default().fg(MUTED))),
    ])
    .alignment(Alignment::Center)
    .render(main_layout[2], buf);

    if app.show_share {
        if let Some(result) = result {
            render_share_popup(result, pack, area, buf);
        }
    }
}

fn render_meme_card(result: Option<&QuizResult>, pack: &QuizPack, area: Rect, buf: &mut Buffer) {
    let text = meme::meme_text(result, pack);
    let (theme_from, theme_to) = match result {
        Some(result) => {
            let percentage = meme::score_percentage(result.total_correct, pack.question_count());
            let theme = ScoreTier::from_percentage(percentage).theme();
            (theme.from, theme.to)
        }
        None => (MUTED, MUTED),
    };

    let mut lines = vec![
        Line::from(Span::styled(format!("{} {}", pack.emoji, text.title), Style::default().fg(theme_from).bold())),
        Line::from(Span::styled(text.subtitle, Style::default().fg(theme_to))),
        Line::from(""),
    ];
    if let Some(result) = result {
        let percentage = meme::score_percentage(result.total_correct, pack.question_count());
        lines.push(Line::from(vec![
            Span::raw("Score: "),
            Span::styled(
                format!("{}/{} ({}%)", result.total_correct, pack.question_count(), percentage),
                Style::default().fg(theme_from).bold(),
            ),
            Span::raw("   Time: "),
            Span::raw(meme::format_duration_secs(result.total_time_ms)),
        ]));
    }

    Paragraph::new(lines)
        .block(
            Block::bordered()
                .title(pack.title.clone())
                .title_alignment(Alignment::Center)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(theme_to)),
        )
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .render(area, buf);
}

fn render_review(result: &QuizResult, pack: &QuizPack, area: Rect, buf: &mut Buffer) {
    let mut lines: Vec<Line> = Vec::new();

    for (idx, answer) in result.answers.iter().enumerate() {
        let Some(question) = pack.questions.iter().find(|q| q.id == answer.question_id) else {
            continue;
        };

        let mark = if answer.is_correct { "✓" } else if answer.is_timeout() { "⏱" } else { "✗" };
        lines.push(Line::from(vec![
            Span::styled(format!("{} ", mark), Style::default().fg(answer_color(answer.is_correct)).bold()),
            Span::raw(format!("{}. {}", idx + 1, question.text)),
        ]));

        let chosen = usize::try_from(answer.selected_option_index)
            .ok()
            .and_then(|i| question.options.get(i))
            .map_or("(no answer)", |s| s.as_str());
        let correct = question
            .options
            .get(question.correct_option_index)
            .map_or("", |s| s.as_str());

        let mut detail = vec![Span::styled(format!("   You: {}", chosen), Style::default().fg(answer_color(answer.is_correct)))];
        if !answer.is_correct {
            detail.push(Span::styled(format!("   Answer: {}", correct), Style::default().fg(Color::Green)));
        }
        detail.push(Span::styled(
            format!("   {}", meme::format_duration_secs(answer.time_spent_ms)),
            Style::default().fg(MUTED),
        ));
        lines.push(Line::from(detail));
    }

    Paragraph::new(lines)
        .block(Block::bordered().title("Review").border_type(BorderType::Rounded))
        .wrap(Wrap { trim: false })
        .render(area, buf);
}

fn render_share_popup(result: &QuizResult, pack: &QuizPack, area: Rect, buf: &mut Buffer) {
    let popup_area = centered_rect(60, 50, area);
    let share = meme::share_text(result, pack, result.date.with_timezone(&Local));

    Clear.render(popup_area, buf);
    Paragraph::new(share)
        .block(
            Block::bordered()
                .title("Share (s to close)")
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::White)),
        )
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false })
        .render(popup_area, buf);
}
