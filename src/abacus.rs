//! Abacus aggregator - N rods composed into one place-value integer.
//!
//! Rod 0 is the most significant. The total is never stored; it is folded
//! from the rods on every read, so a reader can never observe a stale value.
//! Subscribers are notified synchronously, inside the call that mutated a rod.
//!
//! Pointer handling for the abacus lives in `crate::input`.

use crate::constants::{FREE_PRACTICE_DIGITS, MAX_DIGITS, STANDARD_DIGITS};
use crate::input::GestureTracker;
use crate::input::coords::{InputAxis, ScreenTransform};
use crate::layout::AbacusLayout;
use crate::problem::ProblemId;
use crate::rod::{Rod, RodChange, RodTransition};
use crate::settings::GestureConfig;
use tracing::{debug, trace};

/// Chinese place-value names, units first.
const PLACE_NAMES: [&str; 9] = ["个", "十", "百", "千", "万", "十万", "百万", "千万", "亿"];

/// Default labels for `digit_count` rods, most significant first.
pub fn place_labels(digit_count: usize) -> Vec<String> {
    (0..digit_count)
        .rev()
        .map(|power| match PLACE_NAMES.get(power) {
            Some(name) => (*name).to_string(),
            None => format!("10^{power}"),
        })
        .collect()
}

/// Clamp a requested rod count to what the model supports.
pub fn clamp_digit_count(digit_count: usize) -> usize {
    digit_count.clamp(1, MAX_DIGITS)
}

/// Construction parameters for an [`Abacus`].
#[derive(Debug, Clone, PartialEq)]
pub struct AbacusConfig {
    pub digit_count: usize,
    /// One label per rod; replaced by [`place_labels`] when missing or mismatched
    pub labels: Option<Vec<String>>,
    pub input_axis: InputAxis,
    pub gesture: GestureConfig,
}

impl Default for AbacusConfig {
    fn default() -> Self {
        Self::standard()
    }
}

impl AbacusConfig {
    /// The three-rod quiz abacus.
    pub fn standard() -> Self {
        Self {
            digit_count: STANDARD_DIGITS,
            labels: None,
            input_axis: InputAxis::Vertical,
            gesture: GestureConfig::default(),
        }
    }

    /// The nine-rod free practice abacus, drawn in forced landscape.
    pub fn free_practice() -> Self {
        Self {
            digit_count: FREE_PRACTICE_DIGITS,
            labels: None,
            input_axis: InputAxis::Horizontal,
            gesture: GestureConfig::default(),
        }
    }

    pub fn with_digit_count(mut self, digit_count: usize) -> Self {
        self.digit_count = digit_count;
        self
    }

    pub fn with_labels(mut self, labels: Vec<String>) -> Self {
        self.labels = Some(labels);
        self
    }

    pub fn with_input_axis(mut self, axis: InputAxis) -> Self {
        self.input_axis = axis;
        self
    }

    pub fn with_gesture(mut self, gesture: GestureConfig) -> Self {
        self.gesture = gesture;
        self
    }
}

/// Notifications emitted by an abacus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbacusEvent {
    /// A rod's digit changed; drives the bead sound
    BeadMoved { rod: usize, previous: u8, digit: u8 },
    /// The aggregate value after a change or reset
    ValueChanged { total: u64 },
    /// All rods were recreated at zero
    Reset { digit_count: usize },
}

/// Handle returned by [`Abacus::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&AbacusEvent)>;

/// A virtual abacus: rods, gesture state, hit-testing layout and listeners.
pub struct Abacus {
    pub(crate) rods: Vec<Rod>,
    pub(crate) labels: Vec<String>,
    pub(crate) input_axis: InputAxis,
    pub(crate) gesture_config: GestureConfig,
    pub(crate) gestures: GestureTracker,
    pub(crate) layout: AbacusLayout,
    problem: Option<ProblemId>,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl Abacus {
    pub fn new(config: AbacusConfig) -> Self {
        let digit_count = clamp_digit_count(config.digit_count);
        let rods = vec![Rod::new(); digit_count];
        let labels = resolve_labels(config.labels, digit_count);
        let mut layout = AbacusLayout::new(&rods, ScreenTransform::identity());
        layout.set_transform(layout.default_transform(config.input_axis));

        debug!(
            digit_count,
            horizontal = config.input_axis.is_horizontal(),
            "Abacus created"
        );

        Self {
            rods,
            labels,
            input_axis: config.input_axis,
            gesture_config: config.gesture.normalized(),
            gestures: GestureTracker::new(),
            layout,
            problem: None,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    // ------------------------------------------------------------------
    // Reads
    // ------------------------------------------------------------------

    pub fn digit_count(&self) -> usize {
        self.rods.len()
    }

    pub fn rods(&self) -> &[Rod] {
        &self.rods
    }

    pub fn rod(&self, index: usize) -> Option<&Rod> {
        self.rods.get(index)
    }

    pub fn digits(&self) -> Vec<u8> {
        self.rods.iter().map(Rod::digit).collect()
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn input_axis(&self) -> InputAxis {
        self.input_axis
    }

    pub fn gesture_config(&self) -> GestureConfig {
        self.gesture_config
    }

    pub fn layout(&self) -> &AbacusLayout {
        &self.layout
    }

    /// Number of gestures currently in flight.
    pub fn active_gestures(&self) -> usize {
        self.gestures.active_count()
    }

    /// Positional total: sum of rod[i] * 10^(N-1-i).
    pub fn total(&self) -> u64 {
        self.rods
            .iter()
            .fold(0u64, |acc, rod| acc * 10 + u64::from(rod.digit()))
    }

    /// Largest total this abacus can show.
    pub fn max_total(&self) -> u64 {
        10u64.pow(self.rods.len() as u32) - 1
    }

    // ------------------------------------------------------------------
    // Configuration
    // ------------------------------------------------------------------

    pub fn set_gesture_config(&mut self, config: GestureConfig) {
        self.gesture_config = config.normalized();
    }

    /// Place the abacus on screen for hit testing.
    pub fn set_screen_transform(&mut self, transform: ScreenTransform) {
        self.layout.set_transform(transform);
    }

    // ------------------------------------------------------------------
    // Mutations
    // ------------------------------------------------------------------

    /// Replace every rod with a zero rod. In-flight gestures are discarded.
    pub fn reset(&mut self, digit_count: usize) {
        let digit_count = clamp_digit_count(digit_count);
        self.rods = vec![Rod::new(); digit_count];
        if self.labels.len() != digit_count {
            self.labels = place_labels(digit_count);
        }
        self.gestures.clear();
        self.layout.rebuild(&self.rods);

        debug!(digit_count, "Abacus reset");
        self.emit(AbacusEvent::Reset { digit_count });
        self.emit(AbacusEvent::ValueChanged { total: 0 });
    }

    /// Reset with the current rod count (the "clear" button).
    pub fn clear(&mut self) {
        self.reset(self.rods.len());
    }

    /// Reset when the problem identity differs from the last one seen.
    /// Returns true if a reset happened.
    pub fn sync_problem(&mut self, problem: &ProblemId) -> bool {
        if self.problem.as_ref() == Some(problem) {
            return false;
        }
        self.problem = Some(problem.clone());
        self.clear();
        true
    }

    /// Set a rod's digit directly, clamped to 0..=9.
    /// Returns true if the digit changed.
    pub fn on_rod_changed(&mut self, index: usize, digit: u8) -> bool {
        let Some(rod) = self.rods.get_mut(index) else {
            trace!(index, "Rod index out of range");
            return false;
        };
        let previous = rod.digit();
        *rod = Rod::from_digit(digit);
        let digit = rod.digit();
        if digit == previous {
            return false;
        }
        self.rod_changed(index, RodChange { previous, digit });
        true
    }

    /// Apply a transition to one rod. Returns true if the digit changed.
    pub fn apply(&mut self, index: usize, transition: RodTransition) -> bool {
        let Some(rod) = self.rods.get_mut(index) else {
            trace!(index, "Rod index out of range");
            return false;
        };
        match rod.apply(transition) {
            Some(change) => {
                self.rod_changed(index, change);
                true
            }
            None => false,
        }
    }

    fn rod_changed(&mut self, index: usize, change: RodChange) {
        self.layout.update_rod(index, &self.rods[index]);
        let total = self.total();
        trace!(rod = index, from = change.previous, to = change.digit, total, "Rod changed");

        self.emit(AbacusEvent::BeadMoved {
            rod: index,
            previous: change.previous,
            digit: change.digit,
        });
        self.emit(AbacusEvent::ValueChanged { total });
    }

    // ------------------------------------------------------------------
    // Listeners
    // ------------------------------------------------------------------

    /// Register a listener called synchronously for every event.
    pub fn subscribe(&mut self, listener: impl FnMut(&AbacusEvent) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    fn emit(&mut self, event: AbacusEvent) {
        for (_, listener) in self.listeners.iter_mut() {
            listener(&event);
        }
    }
}

fn resolve_labels(labels: Option<Vec<String>>, digit_count: usize) -> Vec<String> {
    match labels {
        Some(labels) if labels.len() == digit_count => labels,
        Some(labels) => {
            debug!(
                given = labels.len(),
                digit_count, "Label count does not match rods, using place names"
            );
            place_labels(digit_count)
        }
        None => place_labels(digit_count),
    }
}
