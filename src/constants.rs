//! Application-wide constants.
//!
//! Centralizes magic numbers and layout values to make the codebase
//! more maintainable and self-documenting.

// ============================================================================
// Rod Model
// ============================================================================

/// Value of the single heaven bead
pub const HEAVEN_VALUE: u8 = 5;

/// Number of earth beads on each rod
pub const EARTH_BEADS: u8 = 4;

/// Largest digit a rod can show
pub const MAX_DIGIT: u8 = 9;

/// Largest supported rod count (10^18 - 1 still fits in a u64)
pub const MAX_DIGITS: usize = 18;

/// Rod count used by the quiz game
pub const STANDARD_DIGITS: usize = 3;

/// Rod count used by free practice
pub const FREE_PRACTICE_DIGITS: usize = 9;

// ============================================================================
// Gesture Thresholds
// ============================================================================

/// Pixels a contact must travel along the decision axis before a drag commits
pub const DEFAULT_DRAG_THRESHOLD: f32 = 10.0;

/// Largest travel along the decision axis that still counts as a tap
pub const DEFAULT_TAP_THRESHOLD: f32 = 12.0;

/// Upper bound accepted for either threshold
pub const MAX_GESTURE_THRESHOLD: f32 = 200.0;

// ============================================================================
// Bead Layout (abacus-local pixels, unrotated)
// ============================================================================

/// Width of a rod column
pub const ROD_WIDTH: f32 = 56.0;

/// Horizontal gap between rod columns
pub const ROD_GAP: f32 = 8.0;

/// Width of a bead
pub const BEAD_WIDTH: f32 = 48.0;

/// Height of a bead
pub const BEAD_HEIGHT: f32 = 32.0;

/// Distance a bead travels between its resting and active positions
pub const BEAD_TRAVEL: f32 = 24.0;

/// Height of the heaven (upper) deck
pub const HEAVEN_DECK_HEIGHT: f32 = 64.0;

/// Thickness of the beam separating the decks
pub const BEAM_HEIGHT: f32 = 4.0;

/// Height of the earth (lower) deck
pub const EARTH_DECK_HEIGHT: f32 = 160.0;

/// Gap between stacked earth beads
pub const EARTH_BEAD_GAP: f32 = 4.0;

/// Padding below the lowest earth bead
pub const EARTH_DECK_PADDING: f32 = 4.0;

// ============================================================================
// Progress & Rewards
// ============================================================================

/// Storage key for the persisted game data blob
pub const STORAGE_KEY: &str = "candy_abacus_data_v1";

/// Directory name under the platform data dir
pub const APP_DIR_NAME: &str = "candy-abacus";

/// Default number of problems per day
pub const DEFAULT_DAILY_LIMIT: u32 = 20;

/// Smallest selectable daily limit
pub const MIN_DAILY_LIMIT: u32 = 5;

/// Largest selectable daily limit
pub const MAX_DAILY_LIMIT: u32 = 50;

/// Daily limit slider step
pub const DAILY_LIMIT_STEP: u32 = 5;

/// Daily records kept in storage
pub const MAX_DAILY_RECORDS: usize = 30;

/// Window in which a second "reset progress" request confirms the first
pub const RESET_CONFIRM_WINDOW_MS: u64 = 3_000;

/// Number of answer choices offered per problem
pub const CHOICE_COUNT: usize = 3;
