//! App-level flows: navigation, answering, rewards, settings, reset.

use crate::helpers::{TestAppBuilder, show_value, stored_data, tap};
use candy_abacus::app::{App, ResetRequest, View};
use candy_abacus::audio::SoundKind;
use candy_abacus::progress::{GameData, today};
use candy_abacus::session::{AnswerState, Judgement};
use candy_abacus::settings::{Difficulty, SettingToggle};
use candy_abacus::storage::MemoryStore;
use candy_abacus::types::{BeadId, PointerEvent};
use std::time::{Duration, Instant};

fn answer_correctly(app: &mut App<MemoryStore>) {
    let session = app.session_mut().expect("running session");
    let answer = session.problem().answer;
    show_value(session.abacus_mut(), u64::from(answer));
    assert_eq!(app.submit_abacus_answer(), Some(Judgement::Correct));
}

#[test]
fn test_entering_game_starts_a_session() {
    let (mut app, _) = TestAppBuilder::new().build();
    assert_eq!(app.view(), View::Home);
    assert!(app.session().is_none());

    app.navigate(View::Game);
    let session = app.session().expect("session");
    assert_eq!(session.abacus().digit_count(), 3);
    assert_eq!(session.state(), AnswerState::Pending);
}

#[test]
fn test_correct_answer_pays_out_and_saves() {
    let (mut app, sounds) = TestAppBuilder::new().with_seed(9).build();
    app.navigate(View::Game);
    answer_correctly(&mut app);

    assert_eq!(app.data().candies, 1);
    assert_eq!(app.data().streak, 1);
    assert_eq!(app.data().today_count(), 1);
    assert_eq!(sounds.count(SoundKind::Success), 1);
    assert_eq!(stored_data(&app).map(|d| d.candies), Some(1));

    // A solved problem cannot be cashed in twice
    assert_eq!(app.submit_abacus_answer(), Some(Judgement::Ignored));
    assert_eq!(app.data().candies, 1);
}

#[test]
fn test_wrong_answer_resets_streak_and_persists() {
    let data = GameData {
        streak: 4,
        ..GameData::default()
    };
    let (mut app, sounds) = TestAppBuilder::new().with_data(data).build();
    app.navigate(View::Game);

    let session = app.session_mut().unwrap();
    let answer = session.problem().answer;
    show_value(session.abacus_mut(), u64::from(answer) + 1);
    assert_eq!(app.submit_abacus_answer(), Some(Judgement::Wrong));

    assert_eq!(app.data().streak, 0);
    assert_eq!(stored_data(&app).map(|d| d.streak), Some(0));
    assert_eq!(sounds.count(SoundKind::Wrong), 1);
}

#[test]
fn test_multiple_choice_locks_until_feedback_cleared() {
    let (mut app, _) = TestAppBuilder::new().with_seed(3).build();
    app.navigate(View::Game);
    let problem = app.session().unwrap().problem().clone();
    let wrong = problem.choices.into_iter().find(|&c| c != problem.answer).unwrap();

    assert_eq!(app.submit_choice(wrong), Some(Judgement::Wrong));
    assert_eq!(app.submit_choice(problem.answer), Some(Judgement::Ignored));
    app.clear_feedback();
    assert_eq!(app.submit_choice(problem.answer), Some(Judgement::Correct));
    assert_eq!(app.data().total_correct, 1);
}

#[test]
fn test_next_problem_resets_abacus() {
    let (mut app, _) = TestAppBuilder::new().with_seed(5).build();
    app.navigate(View::Game);
    answer_correctly(&mut app);
    let previous = app.session().unwrap().problem().id.clone();

    assert!(app.next_problem());
    let session = app.session().unwrap();
    assert_ne!(session.problem().id, previous);
    assert_eq!(session.abacus().total(), 0);
    assert_eq!(session.state(), AnswerState::Pending);
}

#[test]
fn test_daily_limit_stops_new_problems() {
    let mut data = GameData::default();
    data.settings.daily_limit = 5;
    for _ in 0..4 {
        data.record_correct_on(&today());
    }
    let (mut app, _) = TestAppBuilder::new().with_data(data).build();
    app.navigate(View::Game);
    assert!(app.session().is_some());

    answer_correctly(&mut app);
    assert!(app.is_daily_limit_reached());
    assert!(!app.next_problem());
    assert!(app.session().is_none());

    // Coming back later the same day still shows no problem
    app.go_home();
    app.navigate(View::Game);
    assert!(app.session().is_none());
    assert_eq!(app.submit_abacus_answer(), None);
}

#[test]
fn test_bead_moves_play_sounds() {
    let (mut app, sounds) = TestAppBuilder::new().build();
    app.navigate(View::FreeMode);
    let abacus = app.free_practice().unwrap();
    assert_eq!(abacus.digit_count(), 9);
    assert!(abacus.input_axis().is_horizontal());

    let at = abacus.layout().bead_center_on_screen(BeadId::heaven(8)).unwrap();
    assert!(!app.handle_pointer(&PointerEvent::down(1, at.x, at.y)));
    assert!(app.handle_pointer(&PointerEvent::up(1, at.x, at.y)));
    assert_eq!(app.free_practice().unwrap().total(), 5);
    assert_eq!(sounds.played(), vec![SoundKind::Bead]);

    app.toggle_setting(SettingToggle::SoundEnabled);
    assert!(!sounds.is_enabled());
    app.clear_abacus();
    assert_eq!(app.free_practice().unwrap().total(), 0);
    assert_eq!(sounds.played(), vec![SoundKind::Bead]);
}

#[test]
fn test_pointer_input_outside_play_views_is_ignored() {
    let (mut app, _) = TestAppBuilder::new().build();
    app.navigate(View::Settings);
    let event = PointerEvent::down(1, 20.0, 20.0);
    assert!(!app.handle_pointer(&event));
    assert!(app.active_abacus().is_none());
}

#[test]
fn test_leaving_free_mode_drops_its_abacus() {
    let (mut app, _) = TestAppBuilder::new().build();
    app.navigate(View::FreeMode);
    if let Some(abacus) = app.free_practice() {
        assert_eq!(abacus.total(), 0);
    }
    app.go_home();
    assert!(app.free_practice().is_none());
}

#[test]
fn test_select_difficulty_saves_and_starts_game() {
    let (mut app, _) = TestAppBuilder::new().build();
    app.navigate(View::LevelSelect);
    app.select_difficulty(Difficulty::Chain4);

    assert_eq!(app.view(), View::Game);
    assert_eq!(app.session().unwrap().difficulty(), Difficulty::Chain4);
    assert_eq!(
        stored_data(&app).map(|d| d.settings.difficulty),
        Some(Difficulty::Chain4)
    );
    let expression = &app.session().unwrap().problem().expression;
    assert_eq!(expression.split(' ').count(), 7);
}

#[test]
fn test_rewards_view_unlocks_and_reports_new_stickers() {
    let data = GameData {
        total_correct: 12,
        candies: 12,
        streak: 6,
        ..GameData::default()
    };
    let (mut app, _) = TestAppBuilder::new().with_data(data).build();
    app.navigate(View::Rewards);
    assert_eq!(app.new_stickers(), ["s1", "s3"]);
    assert_eq!(stored_data(&app).unwrap().stickers_unlocked, ["s1", "s3"]);

    app.go_home();
    app.navigate(View::Rewards);
    assert!(app.new_stickers().is_empty());
}

#[test]
fn test_challenge_sticker_after_playing_two_digit() {
    let (mut app, _) = TestAppBuilder::new().with_seed(21).build();
    app.select_difficulty(Difficulty::Digit2);
    answer_correctly(&mut app);
    app.navigate(View::Rewards);
    assert_eq!(app.new_stickers(), ["s6"]);
}

#[test]
fn test_settings_are_saved_immediately() {
    let (mut app, _) = TestAppBuilder::new().build();
    app.navigate(View::Settings);
    assert!(!app.toggle_setting(SettingToggle::UseAbacus));
    assert!(!app.toggle_setting(SettingToggle::ShowAbacusValue));
    assert_eq!(app.set_daily_limit(33), 35);

    let stored = stored_data(&app).unwrap();
    assert!(!stored.settings.use_abacus);
    assert!(!stored.settings.show_abacus_value);
    assert_eq!(stored.settings.daily_limit, 35);
}

#[test]
fn test_reset_needs_confirmation_within_window() {
    let data = GameData {
        candies: 30,
        ..GameData::default()
    };
    let (mut app, _) = TestAppBuilder::new().with_data(data).build();
    app.navigate(View::Settings);
    let start = Instant::now();

    assert_eq!(app.request_reset(start), ResetRequest::Armed);
    // Too late: re-arms instead of wiping
    let late = start + Duration::from_millis(3_500);
    assert_eq!(app.request_reset(late), ResetRequest::Armed);
    assert_eq!(app.data().candies, 30);

    let confirm = late + Duration::from_millis(1_000);
    assert_eq!(app.request_reset(confirm), ResetRequest::Done);
    assert_eq!(app.data(), &GameData::default());
    assert_eq!(stored_data(&app), Some(GameData::default()));
    assert_eq!(app.view(), View::Home);
}

#[test]
fn test_answering_by_tapping_beads() {
    let (mut app, _) = TestAppBuilder::new().with_seed(8).build();
    app.navigate(View::Game);
    let answer = app.session().unwrap().problem().answer;

    let session = app.session_mut().unwrap();
    let abacus = session.abacus_mut();
    let digits = [answer / 100 % 10, answer / 10 % 10, answer % 10];
    for (rod, digit) in digits.into_iter().enumerate() {
        let digit = digit as u8;
        if digit >= 5 {
            tap(abacus, 1, BeadId::heaven(rod));
        }
        if digit % 5 > 0 {
            tap(abacus, 1, BeadId::earth(rod, digit % 5 - 1));
        }
    }
    assert_eq!(abacus.total(), u64::from(answer));
    assert_eq!(app.submit_abacus_answer(), Some(Judgement::Correct));
}
