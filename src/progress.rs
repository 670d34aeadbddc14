//! Persisted progress: candies, streak, daily practice counts, settings.

use crate::constants::MAX_DAILY_RECORDS;
use crate::settings::GameSettings;
use crate::stored::{take_field, take_list, take_object};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::warn;

/// Daily record key for an instant: its UTC date as `YYYY-MM-DD`.
pub fn date_key(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%d").to_string()
}

/// Today's daily record key.
pub fn today() -> String {
    date_key(Utc::now())
}

/// Correct answers on one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyRecord {
    pub date: String,
    pub count: u32,
}

/// The whole persisted blob.
///
/// Missing fields take their defaults, so blobs written by older builds load
/// cleanly. Stored blobs go through [`GameData::from_stored`], which also
/// survives fields it cannot read.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GameData {
    pub candies: u32,
    pub stickers_unlocked: Vec<String>,
    pub total_correct: u32,
    pub streak: u32,
    pub settings: GameSettings,
    pub daily_records: Vec<DailyRecord>,
    /// Keys this build does not know, written back unchanged
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl GameData {
    /// Overlay a stored value on the defaults one field at a time. A field
    /// that is missing, `null` or of the wrong shape keeps its default; the
    /// others load as stored.
    pub fn from_stored(value: Value) -> Self {
        let Value::Object(mut fields) = value else {
            warn!("Saved progress is not an object, using defaults");
            return Self::default();
        };
        let defaults = Self::default();
        let settings = GameSettings::from_stored(take_object(&mut fields, "settings"));
        Self {
            candies: take_field(&mut fields, "candies", defaults.candies),
            stickers_unlocked: take_list(&mut fields, "stickersUnlocked", defaults.stickers_unlocked),
            total_correct: take_field(&mut fields, "totalCorrect", defaults.total_correct),
            streak: take_field(&mut fields, "streak", defaults.streak),
            settings,
            daily_records: take_list(&mut fields, "dailyRecords", defaults.daily_records),
            extra: fields,
        }
        .normalized()
    }

    /// Correct answers recorded for `date`.
    pub fn count_on(&self, date: &str) -> u32 {
        self.daily_records
            .iter()
            .find(|record| record.date == date)
            .map_or(0, |record| record.count)
    }

    pub fn today_count(&self) -> u32 {
        self.count_on(&today())
    }

    /// Whether `date` already reached the daily limit.
    pub fn is_over_limit_on(&self, date: &str) -> bool {
        self.count_on(date) >= self.settings.daily_limit
    }

    pub fn is_over_limit(&self) -> bool {
        self.is_over_limit_on(&today())
    }

    /// Credit one correct answer on `date`.
    pub fn record_correct_on(&mut self, date: &str) {
        self.candies = self.candies.saturating_add(1);
        self.total_correct = self.total_correct.saturating_add(1);
        self.streak = self.streak.saturating_add(1);
        self.add_daily(date, 1);
    }

    pub fn record_correct(&mut self) {
        self.record_correct_on(&today());
    }

    pub fn record_wrong(&mut self) {
        self.streak = 0;
    }

    pub fn has_sticker(&self, id: &str) -> bool {
        self.stickers_unlocked.iter().any(|s| s == id)
    }

    fn add_daily(&mut self, date: &str, increment: u32) {
        match self.daily_records.iter_mut().find(|r| r.date == date) {
            Some(record) => record.count = record.count.saturating_add(increment),
            None => self.daily_records.push(DailyRecord {
                date: date.to_string(),
                count: increment,
            }),
        }
        if self.daily_records.len() > MAX_DAILY_RECORDS {
            let excess = self.daily_records.len() - MAX_DAILY_RECORDS;
            self.daily_records.drain(..excess);
        }
    }

    /// Clamp values a hand-edited or older blob may carry.
    pub fn normalized(mut self) -> Self {
        self.settings = self.settings.normalized();
        self
    }
}
