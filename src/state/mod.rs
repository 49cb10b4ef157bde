//! State management module for the Shards tracker.
//!
//! This module provides the core state types:
//!
//! - `counter` - Clamped counter arithmetic and per-counter bounds
//! - `player` - Player records (name, health, mastery)
//! - `session` - The session container and its event reducer
//! - `snapshot` - Saved-state tuples for configuration-change restore
//! - `layout` - Pure layout selection (wide/narrow, compact, step buttons)
//!
//! # Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────────┐
//! │                          AppState                             │
//! │                                                               │
//! │  ┌─────────────────────────────────────────────────────────┐  │
//! │  │                        Session                          │  │
//! │  │                                                         │  │
//! │  │  player_count ∈ {2,3,4}                                 │  │
//! │  │                                                         │  │
//! │  │  seat 0..4 → PlayerRecord { name, health, mastery }     │  │
//! │  │              0 ≤ health ≤ 50, 0 ≤ mastery ≤ 30          │  │
//! │  └─────────────────────────────────────────────────────────┘  │
//! │            │                                   │              │
//! │            ▼ to_saved / from_saved             ▼ plan         │
//! │  ┌───────────────────┐              ┌────────────────────┐    │
//! │  │   SavedSession    │              │     LayoutPlan     │    │
//! │  │ (ordered tuples)  │              │ (rows of Slots)    │    │
//! │  └───────────────────┘              └────────────────────┘    │
//! └───────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use shards_state::state::{Session, SessionEvent};
//!
//! let mut session = Session::new();
//! session.apply_mut(SessionEvent::AdjustHealth { seat: 0, delta: -5 });
//! session.apply_mut(SessionEvent::SetPlayerCount { count: 4 });
//! ```

pub mod counter;
pub mod layout;
pub mod player;
pub mod session;
pub mod snapshot;

// Re-export commonly used types
pub use counter::{
    clamped_add, CounterBounds, CounterKind, COARSE_STEP, FINE_STEP, HEALTH_MAX, HEALTH_MIN,
    MASTERY_MAX, MASTERY_MIN,
};
pub use layout::{is_wide, LayoutPlan, Slot, WIDE_WIDTH_THRESHOLD_DP};
pub use player::{NameField, PlayerRecord};
pub use session::{
    Session, SessionEvent, DEFAULT_PLAYER_COUNT, MAX_PLAYERS, MAX_PLAYER_COUNT, MIN_PLAYER_COUNT,
};
pub use snapshot::{restore, restore_str, SavedPlayer, SavedSession};

/// Combined application state.
///
/// This is an optional convenience struct tying the session to layout
/// derivation and snapshotting. You can also use `Session` directly.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub session: Session,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a session event in place.
    pub fn apply(&mut self, event: SessionEvent) {
        self.session.apply_mut(event);
    }

    /// Derive the layout plan for the current session at a screen width.
    pub fn layout_for_width(&self, width_dp: i32) -> LayoutPlan {
        LayoutPlan::for_session(&self.session, width_dp)
    }

    /// Snapshot the session for a configuration change.
    pub fn save(&self) -> SavedSession {
        self.session.to_saved()
    }

    /// Rebuild application state from a snapshot.
    pub fn restore(saved: SavedSession) -> Self {
        Self {
            session: Session::from_saved(saved),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_basic() {
        let mut state = AppState::new();
        assert_eq!(state.session.player_count(), 2);

        // Apply events
        state.apply(SessionEvent::AdjustHealth { seat: 0, delta: -5 });
        state.apply(SessionEvent::SetPlayerCount { count: 4 });
        assert_eq!(state.session.player(0).unwrap().health(), 45);

        // Save / restore across a configuration change
        let restored = AppState::restore(state.save());
        assert_eq!(restored.session.player_count(), 4);
        assert_eq!(restored.session.player(0).unwrap().health(), 45);
    }

    #[test]
    fn test_app_state_layout() {
        let mut state = AppState::new();
        state.apply(SessionEvent::SetPlayerCount { count: 4 });

        let plan = state.layout_for_width(800);
        assert_eq!(plan.rows.len(), 2);
        assert!(plan.slots().all(|s| s.compact));

        let plan = state.layout_for_width(320);
        assert_eq!(plan.rows.len(), 4);
    }
}
