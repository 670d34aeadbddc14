//! User settings - persisted inside the game data blob.
//!
//! Every struct here deserializes with per-field defaults, so a blob written
//! by an older build (missing fields) loads with the missing values filled in.

use crate::constants::{
    DAILY_LIMIT_STEP, DEFAULT_DAILY_LIMIT, DEFAULT_DRAG_THRESHOLD, DEFAULT_TAP_THRESHOLD,
    MAX_DAILY_LIMIT, MAX_GESTURE_THRESHOLD, MIN_DAILY_LIMIT,
};
use crate::stored::{take_field, take_object};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Problem difficulty selected on the level screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Difficulty {
    /// One-digit add/sub, results up to 10
    #[default]
    #[serde(rename = "digit1_upto10")]
    Digit1UpTo10,
    /// One-digit operands, results up to 20 (carrying)
    #[serde(rename = "digit1_upto20")]
    Digit1UpTo20,
    /// Two-digit add/sub
    #[serde(rename = "digit2")]
    Digit2,
    /// Three one-digit operands chained with + and -
    #[serde(rename = "chain3")]
    Chain3,
    /// Four one-digit operands chained with + and -
    #[serde(rename = "chain4")]
    Chain4,
}

impl Difficulty {
    pub const ALL: [Difficulty; 5] = [
        Self::Digit1UpTo10,
        Self::Digit1UpTo20,
        Self::Digit2,
        Self::Chain3,
        Self::Chain4,
    ];

    /// Title shown on the level select screen
    pub fn label(self) -> &'static str {
        match self {
            Self::Digit1UpTo10 => "10以内加减",
            Self::Digit1UpTo20 => "20以内加减 (进位)",
            Self::Digit2 => "两位数加减",
            Self::Chain3 => "1位数3连加减",
            Self::Chain4 => "1位数4连加减",
        }
    }

    /// Modes that count toward the "challenge" sticker
    pub fn is_challenge(self) -> bool {
        matches!(self, Self::Digit2 | Self::Chain3)
    }
}

/// Drag/tap thresholds for the gesture interpreter, in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GestureConfig {
    pub drag_threshold: f32,
    pub tap_threshold: f32,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            drag_threshold: DEFAULT_DRAG_THRESHOLD,
            tap_threshold: DEFAULT_TAP_THRESHOLD,
        }
    }
}

impl GestureConfig {
    /// Read from a stored object, keeping the default for any unreadable field.
    pub fn from_stored(mut fields: Map<String, Value>) -> Self {
        let defaults = Self::default();
        Self {
            drag_threshold: take_field(&mut fields, "dragThreshold", defaults.drag_threshold),
            tap_threshold: take_field(&mut fields, "tapThreshold", defaults.tap_threshold),
        }
        .normalized()
    }

    pub fn new(drag_threshold: f32, tap_threshold: f32) -> Self {
        Self {
            drag_threshold,
            tap_threshold,
        }
        .normalized()
    }

    /// Replace unusable values with defaults and keep tap >= drag.
    pub fn normalized(self) -> Self {
        let clean = |value: f32, fallback: f32| {
            if value.is_finite() && value >= 0.0 {
                value.min(MAX_GESTURE_THRESHOLD)
            } else {
                fallback
            }
        };
        let drag_threshold = clean(self.drag_threshold, DEFAULT_DRAG_THRESHOLD);
        let tap_threshold = clean(self.tap_threshold, DEFAULT_TAP_THRESHOLD).max(drag_threshold);
        Self {
            drag_threshold,
            tap_threshold,
        }
    }
}

/// Settings the user can toggle on the settings screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingToggle {
    UseAbacus,
    ShowAbacusValue,
    SoundEnabled,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GameSettings {
    /// Answer with the abacus instead of multiple choice
    pub use_abacus: bool,
    /// Show the abacus total under the rods
    pub show_abacus_value: bool,
    /// Legacy flag superseded by `difficulty`; kept so old blobs round-trip
    pub allow_tens: bool,
    pub daily_limit: u32,
    pub sound_enabled: bool,
    pub difficulty: Difficulty,
    pub gesture: GestureConfig,
    /// Keys this build does not know, written back unchanged
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            use_abacus: true,
            show_abacus_value: true,
            allow_tens: false,
            daily_limit: DEFAULT_DAILY_LIMIT,
            sound_enabled: true,
            difficulty: Difficulty::default(),
            gesture: GestureConfig::default(),
            extra: Map::new(),
        }
    }
}

impl GameSettings {
    /// Read from a stored object field by field. An unknown difficulty or a
    /// value of the wrong type only resets that one setting.
    pub fn from_stored(mut fields: Map<String, Value>) -> Self {
        let defaults = Self::default();
        let gesture = GestureConfig::from_stored(take_object(&mut fields, "gesture"));
        Self {
            use_abacus: take_field(&mut fields, "useAbacus", defaults.use_abacus),
            show_abacus_value: take_field(&mut fields, "showAbacusValue", defaults.show_abacus_value),
            allow_tens: take_field(&mut fields, "allowTens", defaults.allow_tens),
            daily_limit: take_field(&mut fields, "dailyLimit", defaults.daily_limit),
            sound_enabled: take_field(&mut fields, "soundEnabled", defaults.sound_enabled),
            difficulty: take_field(&mut fields, "difficulty", defaults.difficulty),
            gesture,
            extra: fields,
        }
        .normalized()
    }

    /// Flip a boolean setting and return its new value.
    pub fn toggle(&mut self, toggle: SettingToggle) -> bool {
        let flag = match toggle {
            SettingToggle::UseAbacus => &mut self.use_abacus,
            SettingToggle::ShowAbacusValue => &mut self.show_abacus_value,
            SettingToggle::SoundEnabled => &mut self.sound_enabled,
        };
        *flag = !*flag;
        *flag
    }

    pub fn set_daily_limit(&mut self, limit: u32) -> u32 {
        self.daily_limit = normalize_daily_limit(limit);
        self.daily_limit
    }

    /// Clamp values a hand-edited or older blob may carry.
    pub fn normalized(mut self) -> Self {
        self.daily_limit = normalize_daily_limit(self.daily_limit);
        self.gesture = self.gesture.normalized();
        self
    }
}

/// Clamp to the slider range and snap to the nearest step.
pub fn normalize_daily_limit(limit: u32) -> u32 {
    let clamped = limit.clamp(MIN_DAILY_LIMIT, MAX_DAILY_LIMIT);
    let snapped = (clamped + DAILY_LIMIT_STEP / 2) / DAILY_LIMIT_STEP * DAILY_LIMIT_STEP;
    snapped.clamp(MIN_DAILY_LIMIT, MAX_DAILY_LIMIT)
}
