//! Application module - view routing and the glue between the abacus, the
//! quiz session, progress and sounds.
//!
//! This module is organized into several submodules:
//! - `state` - The App struct definition and sub-structs
//! - `lifecycle` - Construction and read accessors
//! - `navigation` - View changes and what entering each view does
//! - `settings_handlers` - Difficulty, toggles, daily limit, progress reset
//! - `game_handlers` - Answer submission, problem advance, pointer routing

mod state;
mod lifecycle;
mod navigation;
mod settings_handlers;
mod game_handlers;

pub use state::{App, NavigationState, PlayState, ProgressState, SystemState};
pub use settings_handlers::ResetRequest;

/// Top-level screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Home,
    LevelSelect,
    Game,
    FreeMode,
    Rewards,
    Settings,
}
