//! Clamped counter arithmetic.
//!
//! Every number the tracker shows goes through one rule: add the delta,
//! then clamp into the counter's fixed bounds. Out-of-range input is
//! never rejected, it saturates at the boundary.

/// Health counter bounds.
pub const HEALTH_MIN: i32 = 0;
pub const HEALTH_MAX: i32 = 50;

/// Mastery counter bounds.
pub const MASTERY_MIN: i32 = 0;
pub const MASTERY_MAX: i32 = 30;

/// Fine adjustment (the plain +/- buttons).
pub const FINE_STEP: i32 = 1;

/// Coarse adjustment (the +5/-5 buttons, hidden in compact layouts).
pub const COARSE_STEP: i32 = 5;

/// Apply a delta and clamp the result into `[min, max]`.
///
/// The addition saturates, so extreme inputs land on a boundary instead
/// of wrapping. Requires `min <= max`.
pub fn clamped_add(value: i32, delta: i32, min: i32, max: i32) -> i32 {
    debug_assert!(min <= max);
    value.saturating_add(delta).clamp(min, max)
}

/// An inclusive value range for a counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterBounds {
    pub min: i32,
    pub max: i32,
}

impl CounterBounds {
    pub const fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    /// Clamp a value into these bounds.
    pub fn clamp(&self, value: i32) -> i32 {
        value.clamp(self.min, self.max)
    }

    /// Apply a delta to a value, clamped into these bounds.
    pub fn apply(&self, value: i32, delta: i32) -> i32 {
        clamped_add(value, delta, self.min, self.max)
    }

    /// Check whether a value lies within these bounds.
    pub fn contains(&self, value: i32) -> bool {
        self.min <= value && value <= self.max
    }
}

/// The two counters tracked per player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterKind {
    Health,
    Mastery,
}

impl CounterKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Health => "health",
            Self::Mastery => "mastery",
        }
    }

    /// Bounds for this counter.
    pub const fn bounds(&self) -> CounterBounds {
        match self {
            Self::Health => CounterBounds::new(HEALTH_MIN, HEALTH_MAX),
            Self::Mastery => CounterBounds::new(MASTERY_MIN, MASTERY_MAX),
        }
    }

    /// Starting value: full health, no mastery.
    pub const fn default_value(&self) -> i32 {
        match self {
            Self::Health => HEALTH_MAX,
            Self::Mastery => MASTERY_MIN,
        }
    }
}
