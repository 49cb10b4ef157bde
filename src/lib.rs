//! Shards State Library
//!
//! This crate provides state management for the Shards score tracker.
//!
//! # Overview
//!
//! The state module provides:
//!
//! - **Player Records** - Name, health, and mastery per player, with the
//!   counters clamped into fixed bounds (health 0–50, mastery 0–30).
//!
//! - **Session Management** - Four always-present seats with a displayable
//!   player count of 2–4; hidden seats keep their values.
//!
//! - **Event Reducer** - Every mutation is expressible as a `SessionEvent`
//!   applied to the session, pure or in place.
//!
//! - **Snapshots** - Save/restore the session as an ordered tuple of
//!   primitives, for surviving configuration changes.
//!
//! - **Layout Selection** - Pure derivation of the wide/narrow arrangement,
//!   compact mode, and step-button visibility.
//!
//! # Design Principles
//!
//! 1. **Clamp, never reject** - Out-of-range counter values, player counts,
//!    and selection offsets saturate at their bounds. No exposed operation
//!    can fail.
//!
//! 2. **Invalid state is unrepresentable** - Counters are private behind
//!    clamping mutators; an out-of-range seat index is a no-op.
//!
//! 3. **No I/O** - This crate is pure state, no rendering or storage.
//!
//! 4. **Serialization-ready** - The session round-trips through a small
//!    JSON blob, with defaults on malformed input.
//!
//! # Example
//!
//! ```rust
//! use shards_state::state::{restore_str, Session, SessionEvent};
//!
//! let mut session = Session::new();
//!
//! // Score some damage and a mastery gain
//! session.apply_mut(SessionEvent::AdjustHealth { seat: 0, delta: -5 });
//! session.apply_mut(SessionEvent::AdjustMastery { seat: 1, delta: 1 });
//!
//! // Bring in two more players
//! session.apply_mut(SessionEvent::SetPlayerCount { count: 4 });
//! assert_eq!(session.visible_players().count(), 4);
//!
//! // Survive a rotation
//! let blob = serde_json::to_string(&session.to_saved()).unwrap();
//! let restored = restore_str(&blob);
//! assert_eq!(restored.player(0).unwrap().health(), 45);
//! ```

pub mod state;

// Re-export everything from state module at crate root
pub use state::*;
