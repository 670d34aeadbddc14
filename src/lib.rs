//! Candy Abacus - the abacus input model and arithmetic trainer core.
//!
//! Pointer events drive per-bead gestures (`input`) that change rod digits
//! (`rod`); an `abacus::Abacus` folds its rods into one place-value total.
//! Around that sit problem generation, rewards, persistence and the view
//! routing of the trainer app.

pub mod abacus;
pub mod app;
pub mod audio;
pub mod constants;
pub mod error;
pub mod input;
pub mod layout;
pub mod logging;
pub mod perf;
pub mod problem;
pub mod progress;
pub mod rewards;
pub mod rod;
pub mod session;
pub mod settings;
pub mod spatial_index;
pub mod storage;
pub mod stored;
pub mod types;
