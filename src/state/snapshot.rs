//! Saved-state snapshot for restoring a session across configuration changes.
//!
//! The snapshot is a small ordered tuple of primitives per player
//! (name, selection start, selection end, health, mastery) plus the player
//! count. Restoring clamps every numeric field back into bounds; a malformed
//! or absent blob falls back to the default session instead of erroring.

use serde::{Deserialize, Serialize};

use crate::state::player::{NameField, PlayerRecord};
use crate::state::session::{Session, MAX_PLAYERS};

/// One player's saved fields, serialized as a JSON array:
/// `[name, selection_start, selection_end, health, mastery]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedPlayer(pub String, pub usize, pub usize, pub i32, pub i32);

impl SavedPlayer {
    fn from_record(record: &PlayerRecord) -> Self {
        Self(
            record.name.text().to_string(),
            record.name.selection_start(),
            record.name.selection_end(),
            record.health(),
            record.mastery(),
        )
    }

    fn into_record(self) -> PlayerRecord {
        let SavedPlayer(text, start, end, health, mastery) = self;
        PlayerRecord::new(NameField::with_selection(text, start, end))
            .with_health(health)
            .with_mastery(mastery)
    }
}

/// A whole session's saved state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedSession {
    pub player_count: usize,
    pub players: Vec<SavedPlayer>,
}

impl Session {
    /// Capture the session as a snapshot.
    pub fn to_saved(&self) -> SavedSession {
        SavedSession {
            player_count: self.player_count(),
            players: self.players().iter().map(SavedPlayer::from_record).collect(),
        }
    }

    /// Rebuild a session from a snapshot.
    ///
    /// Counter values and the player count are clamped back into bounds.
    /// Missing seats get numbered defaults; extra seats are dropped.
    pub fn from_saved(saved: SavedSession) -> Self {
        let mut session = Session::new();
        session.set_player_count(saved.player_count);
        for (seat, player) in saved.players.into_iter().take(MAX_PLAYERS).enumerate() {
            session.set_player(seat, player.into_record());
        }
        session
    }
}

/// Restore a session from a JSON blob, defaulting on malformed input.
pub fn restore(value: &serde_json::Value) -> Session {
    match serde_json::from_value::<SavedSession>(value.clone()) {
        Ok(saved) => Session::from_saved(saved),
        Err(_) => Session::new(),
    }
}

/// Restore a session from a JSON string, defaulting on malformed input.
pub fn restore_str(blob: &str) -> Session {
    match serde_json::from_str::<SavedSession>(blob) {
        Ok(saved) => Session::from_saved(saved),
        Err(_) => Session::new(),
    }
}
