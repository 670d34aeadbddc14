//! Unit tests for progress bookkeeping and sticker unlocks.

use candy_abacus::progress::GameData;
use candy_abacus::rewards::{STICKERS, UnlockRule, unlock_new_stickers};
use candy_abacus::settings::Difficulty;

#[test]
fn test_catalog_matches_rules() {
    let ids: Vec<&str> = STICKERS.iter().map(|s| s.id).collect();
    assert_eq!(ids, ["s1", "s2", "s3", "s4", "s5", "s6"]);
    assert_eq!(STICKERS[3].rule, UnlockRule::CandiesAtLeast(100));
}

#[test]
fn test_stickers_unlock_as_progress_grows() {
    let mut data = GameData::default();
    for _ in 0..9 {
        data.record_correct_on("2024-06-01");
    }
    // Nine in a row: streak sticker only
    assert_eq!(unlock_new_stickers(&mut data), vec!["s3"]);

    data.record_correct_on("2024-06-01");
    assert_eq!(unlock_new_stickers(&mut data), vec!["s1"]);

    data.record_wrong();
    data.total_correct = 100;
    data.candies = 100;
    assert_eq!(unlock_new_stickers(&mut data), vec!["s2", "s4", "s5"]);
    assert_eq!(data.stickers_unlocked, ["s3", "s1", "s2", "s4", "s5"]);
}

#[test]
fn test_unlock_is_idempotent() {
    let mut data = GameData {
        total_correct: 200,
        candies: 200,
        streak: 10,
        ..GameData::default()
    };
    data.settings.difficulty = Difficulty::Digit2;
    let first = unlock_new_stickers(&mut data);
    assert_eq!(first.len(), STICKERS.len());
    assert!(unlock_new_stickers(&mut data).is_empty());
    assert_eq!(data.stickers_unlocked.len(), STICKERS.len());
}

#[test]
fn test_unknown_saved_stickers_are_kept() {
    let mut data = GameData {
        stickers_unlocked: vec!["legacy".to_string()],
        total_correct: 10,
        ..GameData::default()
    };
    assert_eq!(unlock_new_stickers(&mut data), vec!["s1"]);
    assert_eq!(data.stickers_unlocked, ["legacy", "s1"]);
}

#[test]
fn test_streak_survives_across_days() {
    let mut data = GameData::default();
    data.record_correct_on("2024-06-01");
    data.record_correct_on("2024-06-02");
    assert_eq!(data.streak, 2);
    assert_eq!(data.daily_records.len(), 2);
    assert_eq!(data.count_on("2024-06-02"), 1);
}
