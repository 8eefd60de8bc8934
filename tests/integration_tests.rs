use std::fs;
use std::sync::Arc;

use chrono::NaiveDate;
use tempfile::TempDir;

use quizmeme::catalog::Catalog;
use quizmeme::clock::{Clock, ManualClock};
use quizmeme::meme;
use quizmeme::quiz::{QuizSession, SessionEvent};
use quizmeme::store::{QuizStore, UserQuizState};
use quizmeme::streak::StreakOutcome;

fn anchor() -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 4, 18).unwrap()
}

/// Answers every question with the correct option, one second apart.
fn play_perfect(session: &mut QuizSession, clock: &ManualClock) -> SessionEvent {
    session.start();
    let mut last = None;
    while let Some(question) = session.current_question().cloned() {
        clock.advance_ms(1_000);
        last = session.answer(question.correct_option_index);
    }
    last.expect("session produced no events")
}

#[test]
fn test_full_session_writes_state_file() {
    let temp_dir = TempDir::new().unwrap();
    let state_path = temp_dir.path().join("nested").join("state.json");
    let store = QuizStore::file(&state_path);
    let clock = ManualClock::at_date(anchor());
    let catalog = Catalog::builtin(anchor());

    let pack = catalog.todays_pack(clock.today()).unwrap().clone();
    let mut session = QuizSession::new(pack, store.clone(), Arc::new(clock.clone()));
    let event = play_perfect(&mut session, &clock);

    let SessionEvent::Completed(result) = event else {
        panic!("expected the session to complete");
    };
    assert_eq!(result.total_correct, 5);
    assert_eq!(result.total_time_ms, 5_000);
    assert_eq!(session.streak_outcome(), Some(StreakOutcome::Started));

    // The file is the camelCase document, readable by a fresh store.
    let raw = fs::read_to_string(&state_path).unwrap();
    assert!(raw.contains("\"completedQuizzes\""));
    assert!(raw.contains("\"tech-trivia-1\""));
    assert!(raw.contains("\"lastQuizDate\":\"2023-04-18\""));
    assert!(!state_path.with_file_name("state.json.tmp").exists());

    let reopened = QuizStore::file(&state_path);
    assert!(reopened.has_completed("tech-trivia-1"));
    assert_eq!(reopened.user_streak().current_streak, 1);
    assert_eq!(reopened.completed_result("tech-trivia-1"), Some(result));
}

#[test]
fn test_corrupt_state_file_reads_as_empty() {
    let temp_dir = TempDir::new().unwrap();
    let state_path = temp_dir.path().join("state.json");
    fs::write(&state_path, "{ not json").unwrap();

    let store = QuizStore::file(&state_path);
    assert_eq!(store.load(), UserQuizState::default());
    assert!(!store.has_completed("tech-trivia-1"));

    // The next completion replaces the corrupt document.
    let clock = ManualClock::at_date(anchor());
    let pack = Catalog::builtin(anchor()).find("tech-trivia-1").unwrap().clone();
    let mut session = QuizSession::new(pack, store.clone(), Arc::new(clock.clone()));
    play_perfect(&mut session, &clock);

    let state: UserQuizState = serde_json::from_str(&fs::read_to_string(&state_path).unwrap()).unwrap();
    assert_eq!(state.completed_quizzes.len(), 1);
    assert_eq!(state.streak.current_streak, 1);
}

#[test]
fn test_streak_across_a_week_with_a_gap() {
    let temp_dir = TempDir::new().unwrap();
    let store = QuizStore::file(temp_dir.path().join("state.json"));
    let clock = ManualClock::at_date(anchor());
    let catalog = Catalog::builtin(anchor());

    let mut outcomes = Vec::new();
    for day in 0..7 {
        if day == 4 {
            // skipped day
            clock.advance_days(1);
            continue;
        }
        let pack = catalog.todays_pack(clock.today()).unwrap().clone();
        let mut session = QuizSession::new(pack, store.clone(), Arc::new(clock.clone()));
        play_perfect(&mut session, &clock);
        outcomes.push(session.streak_outcome().unwrap());
        clock.advance_days(1);
    }

    assert_eq!(
        outcomes,
        vec![
            StreakOutcome::Started,
            StreakOutcome::Extended,
            StreakOutcome::Extended,
            StreakOutcome::Extended,
            StreakOutcome::Reset { missed_days: 1 },
            StreakOutcome::Extended,
        ]
    );

    let streak = store.user_streak();
    assert_eq!(streak.current_streak, 2);
    assert_eq!(streak.longest_streak, 4);
    assert_eq!(streak.last_quiz_date, "2023-04-24");
    assert_eq!(store.load().completed_quizzes.len(), 6);
}

#[test]
fn test_retake_same_day_keeps_streak_and_overwrites_result() {
    let store = QuizStore::in_memory();
    let clock = ManualClock::at_date(anchor());
    let pack = Catalog::builtin(anchor()).find("tech-trivia-1").unwrap().clone();

    let mut session = QuizSession::new(pack.clone(), store.clone(), Arc::new(clock.clone()));
    play_perfect(&mut session, &clock);

    session.reset();
    assert!(session.already_completed());
    session.start();
    for _ in 0..pack.question_count() {
        session.answer(3);
    }

    assert_eq!(session.streak_outcome(), Some(StreakOutcome::SameDay));
    assert_eq!(store.user_streak().current_streak, 1);
    let stored = store.completed_result("tech-trivia-1").unwrap();
    assert_eq!(stored.total_correct, 0);
}

#[test]
fn test_custom_catalog_file_drives_a_session() {
    let temp_dir = TempDir::new().unwrap();
    let catalog_path = temp_dir.path().join("packs.json");
    fs::write(
        &catalog_path,
        r#"[{
            "id": "rust-1",
            "title": "Rustacean Basics",
            "description": "Ownership and friends",
            "emoji": "🦀",
            "releaseDate": "2023-04-18",
            "questions": [
                {"id": "r-1", "text": "Who owns a moved value?", "options": ["The old binding", "The new binding", "Nobody", "The heap"], "correctOptionIndex": 1},
                {"id": "r-2", "text": "Which trait enables {:?}?", "options": ["Display", "Debug", "Clone", "Copy"], "correctOptionIndex": 1}
            ]
        }]"#,
    )
    .unwrap();

    let catalog = Catalog::from_json_file(&catalog_path).unwrap();
    let clock = ManualClock::at_date(anchor());
    let pack = catalog.todays_pack(clock.today()).unwrap().clone();
    assert_eq!(pack.id, "rust-1");

    let mut session = QuizSession::new(pack.clone(), QuizStore::in_memory(), Arc::new(clock.clone()));
    session.start();
    session.answer(1);

    // Let the second question run out.
    let ticks = session.settings().question_time_limit_ms / session.settings().tick_ms;
    let mut last = None;
    for _ in 0..ticks {
        last = session.tick().or(last);
    }

    let Some(SessionEvent::Completed(result)) = last else {
        panic!("expected completion after the timeout");
    };
    assert_eq!(result.total_correct, 1);
    assert!(result.answers[1].is_timeout());

    let text = meme::meme_text(Some(&result), &pack);
    assert_eq!(text.title, "Not bad!");
    let share = meme::share_text(&result, &pack, clock.now());
    assert!(share.contains("🟩⬛"));
    assert!(share.contains("50% on Rustacean Basics"));
}

#[test]
fn test_invalid_catalog_file_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let catalog_path = temp_dir.path().join("packs.json");
    fs::write(
        &catalog_path,
        r#"[{
            "id": "broken",
            "title": "Broken",
            "description": "",
            "emoji": "💥",
            "releaseDate": "2023-04-18",
            "questions": [
                {"id": "b-1", "text": "Two options?", "options": ["yes", "no"], "correctOptionIndex": 0}
            ]
        }]"#,
    )
    .unwrap();

    assert!(Catalog::from_json_file(&catalog_path).is_err());
}
