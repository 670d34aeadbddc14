//! Sound effects as an injected capability.
//!
//! The core never plays audio itself. It asks a [`SoundSink`] to play a
//! [`SoundKind`]; hosts decide what that means. [`SoundBoard`] is the stock
//! sink: it picks a clip from a per-kind pool and hands the clip path to an
//! output callback.

use parking_lot::Mutex;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundKind {
    /// Button press; accepted but currently silent
    Click,
    /// A rod changed digit
    Bead,
    Success,
    Wrong,
}

impl SoundKind {
    /// Clips the stock board chooses from.
    pub fn clips(self) -> &'static [&'static str] {
        match self {
            Self::Click => &[],
            Self::Bead => &["sounds/bead.mp3"],
            Self::Success => &["sounds/success-1.mp3", "sounds/success-2.mp3"],
            Self::Wrong => &["sounds/wrong.mp3"],
        }
    }
}

/// Something that can play sound effects.
pub trait SoundSink: Send + Sync {
    fn play(&self, kind: SoundKind);
    fn set_enabled(&self, enabled: bool);
}

/// A sink that drops everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct Muted;

impl SoundSink for Muted {
    fn play(&self, _kind: SoundKind) {}
    fn set_enabled(&self, _enabled: bool) {}
}

type Output = Box<dyn Fn(SoundKind, &'static str) + Send + Sync>;

/// Stock sink: global enable flag, random clip per kind, pluggable output.
pub struct SoundBoard {
    enabled: AtomicBool,
    rng: Mutex<StdRng>,
    output: Output,
}

impl SoundBoard {
    pub fn new(output: impl Fn(SoundKind, &'static str) + Send + Sync + 'static) -> Self {
        Self::with_rng(StdRng::from_entropy(), output)
    }

    pub fn with_rng(
        rng: StdRng,
        output: impl Fn(SoundKind, &'static str) + Send + Sync + 'static,
    ) -> Self {
        Self {
            enabled: AtomicBool::new(true),
            rng: Mutex::new(rng),
            output: Box::new(output),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Relaxed)
    }
}

impl std::fmt::Debug for SoundBoard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SoundBoard")
            .field("enabled", &self.is_enabled())
            .finish_non_exhaustive()
    }
}

impl SoundSink for SoundBoard {
    fn play(&self, kind: SoundKind) {
        if !self.is_enabled() {
            return;
        }
        let Some(clip) = kind.clips().choose(&mut *self.rng.lock()).copied() else {
            return;
        };
        trace!(?kind, clip, "Play sound");
        (self.output)(kind, clip);
    }

    fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::Relaxed);
    }
}
