use crate::catalog::{Catalog, QuizPack};
use crate::clock::Clock;
use crate::config::AppConfig;
use crate::event::{AppEvent, Event, EventHandler};
use crate::quiz::{QuizResult, QuizSession, SessionEvent, SessionSettings};
use crate::store::QuizStore;
use crate::streak::{StreakOutcome, UserStreak};
use crate::{log_error, log_info};
use ratatui::{
    DefaultTerminal,
    crossterm::event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
};
use color_eyre::Result;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Home,
    Playing,
    Result,
}

/// Application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    pub running: bool,
    /// Current app mode/screen
    pub mode: AppMode,

    pub catalog: Catalog,
    pub store: QuizStore,
    pub clock: Arc<dyn Clock>,
    pub settings: SessionSettings,

    /// Index into [`App::home_entries`].
    pub selected_index: usize,
    /// The pack being played or reviewed.
    pub session: Option<QuizSession>,
    /// Result shown on the result screen (fresh or loaded from the store).
    pub shown_result: Option<QuizResult>,
    pub show_share: bool,
    /// Feedback on the previous question, shown while playing.
    pub last_feedback: Option<String>,
    pub status_message: Option<String>,

    /// Event handler.
    pub events: EventHandler,
}

impl App {
    /// Builds the app from configuration: the catalog file when one is
    /// configured, the bundled packs anchored on today otherwise.
    pub fn new(config: &AppConfig, clock: Arc<dyn Clock>) -> Result<Self> {
        let catalog = match &config.catalog_path {
            Some(path) => Catalog::from_json_file(path)?,
            None => Catalog::builtin(clock.today()),
        };
        let store = QuizStore::file(config.state_path.clone());
        log_info!(
            "Starting with {} packs, state at {}",
            catalog.packs().len(),
            config.state_path.display()
        );

        Ok(Self::with_parts(
            catalog,
            store,
            clock,
            config.session_settings(),
            EventHandler::new(config.tick_ms),
        ))
    }

    pub fn with_parts(
        catalog: Catalog,
        store: QuizStore,
        clock: Arc<dyn Clock>,
        settings: SessionSettings,
        events: EventHandler,
    ) -> Self {
        Self {
            running: true,
            mode: AppMode::Home,
            catalog,
            store,
            clock,
            settings,
            selected_index: 0,
            session: None,
            shown_result: None,
            show_share: false,
            last_feedback: None,
            status_message: None,
            events,
        }
    }

    /// Run the application's main loop.
    pub async fn run(mut self, mut terminal: DefaultTerminal) -> Result<()> {
        let mut needs_redraw = true;

        while self.running {
            if needs_redraw {
                terminal.draw(|frame| frame.render_widget(&mut self, frame.area()))?;
                needs_redraw = false;
            }

            match self.events.next().await {
                Ok(Event::Tick) => needs_redraw = self.tick(),
                Ok(Event::Crossterm(CrosstermEvent::Key(key_event))) => {
                    self.handle_key_events(key_event);
                    needs_redraw = true;
                }
                Ok(Event::Crossterm(CrosstermEvent::Resize(_, _))) => needs_redraw = true,
                Ok(Event::Crossterm(_)) => {}
                Ok(Event::App(app_event)) => {
                    self.dispatch(app_event);
                    needs_redraw = true;
                }
                Err(e) => {
                    log_error!("Event error: {}", e);
                    self.quit();
                }
            }
        }
        Ok(())
    }

    /// Translates a key press into an [`AppEvent`] on the queue.
    pub fn handle_key_events(&mut self, key_event: KeyEvent) {
        if key_event.kind != KeyEventKind::Press {
            return;
        }

        if let KeyCode::Char('c' | 'C') = key_event.code {
            if key_event.modifiers == KeyModifiers::CONTROL {
                self.events.send(AppEvent::Quit);
                return;
            }
        }

        match self.mode {
            AppMode::Home => match key_event.code {
                KeyCode::Esc | KeyCode::Char('q') => self.events.send(AppEvent::Quit),
                KeyCode::Up | KeyCode::Char('k') => self.events.send(AppEvent::Decrement),
                KeyCode::Down | KeyCode::Char('j') => self.events.send(AppEvent::Increment),
                KeyCode::Enter | KeyCode::Char(' ') => self.events.send(AppEvent::Select),
                _ => {}
            },
            AppMode::Playing => match key_event.code {
                KeyCode::Esc => self.events.send(AppEvent::Back),
                KeyCode::Char(ch) => {
                    if let Some(index) = option_for_key(ch) {
                        self.events.send(AppEvent::Answer(index));
                    }
                }
                _ => {}
            },
            AppMode::Result => match key_event.code {
                KeyCode::Esc | KeyCode::Backspace | KeyCode::Enter => self.events.send(AppEvent::Back),
                KeyCode::Char('q') => self.events.send(AppEvent::Quit),
                KeyCode::Char('r') => self.events.send(AppEvent::Retake),
                KeyCode::Char('s') => self.events.send(AppEvent::ToggleShare),
                _ => {}
            },
        }
    }

    /// Applies one application event.
    pub fn dispatch(&mut self, app_event: AppEvent) {
        match app_event {
            AppEvent::Quit => self.quit(),
            AppEvent::Increment => self.next_pack(),
            AppEvent::Decrement => self.prev_pack(),
            AppEvent::Select => self.start_selected(),
            AppEvent::Back => self.back_to_home(),
            AppEvent::Answer(index) => self.answer(index),
            AppEvent::Retake => self.retake(),
            AppEvent::ToggleShare => self.show_share = !self.show_share,
        }
    }

    /// Forwards one countdown step to the running session. Returns whether
    /// the screen changed.
    pub fn tick(&mut self) -> bool {
        if self.mode != AppMode::Playing {
            return false;
        }
        let Some(session) = self.session.as_mut() else {
            return false;
        };

        if let Some(event) = session.tick() {
            self.on_session_event(event);
        }
        true
    }

    /// Set running to false to quit the application.
    pub fn quit(&mut self) {
        self.running = false;
    }

    /// Today's pack first, then earlier releases newest first.
    pub fn home_entries(&self) -> Vec<&QuizPack> {
        let today = self.clock.today();
        let todays = self.catalog.todays_pack(today);

        let mut entries: Vec<&QuizPack> = todays.into_iter().collect();
        entries.extend(
            self.catalog
                .available_packs(today)
                .into_iter()
                .rev()
                .filter(|pack| todays.map_or(true, |t| t.id != pack.id)),
        );
        entries
    }

    pub fn user_streak(&self) -> UserStreak {
        self.store.user_streak()
    }

    fn next_pack(&mut self) {
        let count = self.home_entries().len();
        if self.selected_index + 1 < count {
            self.selected_index += 1;
        }
    }

    fn prev_pack(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    fn start_selected(&mut self) {
        let Some(pack) = self.home_entries().get(self.selected_index).map(|p| (*p).clone()) else {
            return;
        };

        let mut session = QuizSession::with_settings(pack, self.store.clone(), self.clock.clone(), self.settings);
        session.start();

        self.session = Some(session);
        self.shown_result = None;
        self.show_share = false;
        self.last_feedback = None;
        self.status_message = None;
        self.mode = AppMode::Playing;
    }

    fn answer(&mut self, index: usize) {
        if self.mode != AppMode::Playing {
            return;
        }
        let Some(session) = self.session.as_mut() else {
            return;
        };

        if let Some(event) = session.answer(index) {
            self.on_session_event(event);
        }
    }

    fn on_session_event(&mut self, event: SessionEvent) {
        match event {
            SessionEvent::Advanced { was_correct, .. } => {
                self.last_feedback = Some(if was_correct { "Correct!" } else { "Wrong!" }.to_string());
            }
            SessionEvent::TimedOut { .. } => {
                self.last_feedback = Some("Time's up!".to_string());
            }
            SessionEvent::Completed(result) => {
                let outcome = self.session.as_ref().and_then(|s| s.streak_outcome());
                self.status_message = outcome.map(|o| streak_message(o, &self.store.user_streak()));
                self.shown_result = Some(result);
                self.last_feedback = None;
                self.mode = AppMode::Result;
            }
        }
    }

    fn retake(&mut self) {
        if self.mode != AppMode::Result {
            return;
        }
        let Some(session) = self.session.as_mut() else {
            return;
        };

        session.reset();
        session.start();
        self.shown_result = None;
        self.show_share = false;
        self.last_feedback = None;
        self.status_message = None;
        self.mode = AppMode::Playing;
    }

    /// Leaving mid-quiz abandons the session without recording anything.
    fn back_to_home(&mut self) {
        self.mode = AppMode::Home;
        self.session = None;
        self.shown_result = None;
        self.show_share = false;
        self.last_feedback = None;
    }
}

/// `1`-`4` and `a`-`d` pick an option.
fn option_for_key(ch: char) -> Option<usize> {
    match ch.to_ascii_lowercase() {
        '1' | 'a' => Some(0),
        '2' | 'b' => Some(1),
        '3' | 'c' => Some(2),
        '4' | 'd' => Some(3),
        _ => None,
    }
}

fn streak_message(outcome: StreakOutcome, streak: &UserStreak) -> String {
    match outcome {
        StreakOutcome::Started => "Streak started! Come back tomorrow to keep it going.".to_string(),
        StreakOutcome::SameDay => format!("Already played today. Streak: {} days", streak.current_streak),
        StreakOutcome::Extended => format!("🔥 Streak extended to {} days!", streak.current_streak),
        StreakOutcome::Reset { missed_days } => {
            format!("Missed {} day(s), streak restarted. Longest: {}", missed_days, streak.longest_streak)
        }
        StreakOutcome::Backdated => "Device date is behind your last quiz; streak unchanged.".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use chrono::NaiveDate;
    use ratatui::crossterm::event::KeyEventState;

    fn anchor() -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 4, 18).unwrap()
    }

    /// Two days into the bundled week: today's pack plus two earlier ones.
    fn app() -> (App, ManualClock) {
        let clock = ManualClock::at_date(anchor());
        clock.advance_days(2);
        let app = App::with_parts(
            Catalog::builtin(anchor()),
            QuizStore::in_memory(),
            Arc::new(clock.clone()),
            SessionSettings::default(),
            EventHandler::detached(),
        );
        (app, clock)
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn drain(app: &mut App) {
        while let Some(event) = app.events.try_next() {
            if let Event::App(app_event) = event {
                app.dispatch(app_event);
            }
        }
    }

    #[test]
    fn test_home_lists_today_first_then_newest() {
        let (app, _) = app();
        let ids: Vec<&str> = app.home_entries().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["science-1", "pop-culture-1", "tech-trivia-1"]);
    }

    #[test]
    fn test_navigation_is_clamped() {
        let (mut app, _) = app();
        app.dispatch(AppEvent::Decrement);
        assert_eq!(app.selected_index, 0);
        for _ in 0..10 {
            app.dispatch(AppEvent::Increment);
        }
        assert_eq!(app.selected_index, 2);
    }

    #[test]
    fn test_play_through_with_keys() {
        let (mut app, _) = app();

        app.handle_key_events(press(KeyCode::Enter));
        drain(&mut app);
        assert_eq!(app.mode, AppMode::Playing);
        assert_eq!(app.session.as_ref().unwrap().pack().id, "science-1");

        // science-1 answers: b, b, b, b, d
        for key in ['2', 'b', '1', 'B', '4'] {
            app.handle_key_events(press(KeyCode::Char(key)));
            drain(&mut app);
        }

        assert_eq!(app.mode, AppMode::Result);
        let result = app.shown_result.as_ref().unwrap();
        assert_eq!(result.total_correct, 4);
        assert_eq!(result.answers.len(), 5);
        assert!(app.store.has_completed("science-1"));
        assert_eq!(app.user_streak().current_streak, 1);
        assert!(app.status_message.as_deref().unwrap().starts_with("Streak started"));
    }

    #[test]
    fn test_ticks_time_out_questions() {
        let (mut app, _) = app();
        app.dispatch(AppEvent::Select);

        let ticks = app.settings.question_time_limit_ms / app.settings.tick_ms;
        for _ in 0..ticks {
            assert!(app.tick());
        }

        assert_eq!(app.last_feedback.as_deref(), Some("Time's up!"));
        let session = app.session.as_ref().unwrap();
        assert_eq!(session.answers().len(), 1);
        assert!(session.answers()[0].is_timeout());
    }

    #[test]
    fn test_escape_abandons_without_recording() {
        let (mut app, _) = app();
        app.dispatch(AppEvent::Select);
        app.dispatch(AppEvent::Answer(1));

        app.handle_key_events(press(KeyCode::Esc));
        drain(&mut app);

        assert_eq!(app.mode, AppMode::Home);
        assert!(app.session.is_none());
        assert!(!app.store.has_completed("science-1"));
        assert!(!app.tick());
    }

    #[test]
    fn test_retake_starts_a_fresh_session() {
        let (mut app, _) = app();
        app.dispatch(AppEvent::Select);
        for _ in 0..5 {
            app.dispatch(AppEvent::Answer(0));
        }
        assert_eq!(app.mode, AppMode::Result);

        app.dispatch(AppEvent::Retake);
        assert_eq!(app.mode, AppMode::Playing);
        let session = app.session.as_ref().unwrap();
        assert!(session.answers().is_empty());
        assert!(session.already_completed());
    }

    #[test]
    fn test_next_day_extends_streak() {
        let (mut app, clock) = app();
        app.dispatch(AppEvent::Select);
        for _ in 0..5 {
            app.dispatch(AppEvent::Answer(0));
        }
        app.dispatch(AppEvent::Back);

        clock.advance_days(1);
        app.selected_index = 0;
        app.dispatch(AppEvent::Select);
        assert_eq!(app.session.as_ref().unwrap().pack().id, "history-1");
        for _ in 0..5 {
            app.dispatch(AppEvent::Answer(0));
        }

        assert_eq!(app.user_streak().current_streak, 2);
        assert_eq!(app.status_message.as_deref(), Some("🔥 Streak extended to 2 days!"));
    }

    #[test]
    fn test_quit_key() {
        let (mut app, _) = app();
        app.handle_key_events(press(KeyCode::Char('q')));
        drain(&mut app);
        assert!(!app.running);
    }

    #[test]
    fn test_option_keys() {
        assert_eq!(option_for_key('1'), Some(0));
        assert_eq!(option_for_key('D'), Some(3));
        assert_eq!(option_for_key('5'), None);
        assert_eq!(option_for_key('x'), None);
    }
}
