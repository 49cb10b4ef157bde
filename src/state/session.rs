//! Session state: the four player seats and the active player count.
//!
//! The session always holds [`MAX_PLAYERS`] records. Lowering the player
//! count only changes how many seats are displayed; hidden seats keep their
//! values, so switching back restores them untouched.
//!
//! Mutation comes in two equivalent forms, matching a reducer-driven UI:
//! direct methods (`set_player_count`, `set_player`, ...) and
//! [`SessionEvent`] applied via [`Session::apply`] / [`Session::apply_mut`].
//! No operation can fail: counts and counter values are clamped, and an
//! out-of-range seat index is a silent no-op.

use crate::state::player::{NameField, PlayerRecord};

/// Number of seats a session always carries.
pub const MAX_PLAYERS: usize = 4;

/// Smallest and largest displayable player counts.
pub const MIN_PLAYER_COUNT: usize = 2;
pub const MAX_PLAYER_COUNT: usize = MAX_PLAYERS;

/// Player count on a fresh session.
pub const DEFAULT_PLAYER_COUNT: usize = 2;

/// State transition events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    AdjustHealth { seat: usize, delta: i32 },
    AdjustMastery { seat: usize, delta: i32 },
    SetName { seat: usize, name: NameField },
    SetPlayer { seat: usize, record: PlayerRecord },
    SetPlayerCount { count: usize },
}

/// A scoring session.
#[derive(Debug, Clone)]
pub struct Session {
    /// How many of the seats are displayed (2..=4)
    player_count: usize,

    /// All seats, including hidden ones
    players: [PlayerRecord; MAX_PLAYERS],

    /// When the session was created
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl Session {
    /// Create a session with numbered default players and the default count.
    pub fn new() -> Self {
        Self {
            player_count: DEFAULT_PLAYER_COUNT,
            players: [
                PlayerRecord::numbered(1),
                PlayerRecord::numbered(2),
                PlayerRecord::numbered(3),
                PlayerRecord::numbered(4),
            ],
            created_at: chrono::Utc::now(),
        }
    }

    /// Active player count.
    pub fn player_count(&self) -> usize {
        self.player_count
    }

    /// Set the player count, clamped into 2..=4.
    ///
    /// Seats beyond the new count keep their values.
    pub fn set_player_count(&mut self, count: usize) {
        self.player_count = count.clamp(MIN_PLAYER_COUNT, MAX_PLAYER_COUNT);
    }

    /// Get a seat's record, hidden seats included.
    pub fn player(&self, seat: usize) -> Option<&PlayerRecord> {
        self.players.get(seat)
    }

    /// Get a seat's record mutably.
    pub fn player_mut(&mut self, seat: usize) -> Option<&mut PlayerRecord> {
        self.players.get_mut(seat)
    }

    /// Replace a seat's record wholesale. Out-of-range seats are ignored.
    pub fn set_player(&mut self, seat: usize, record: PlayerRecord) {
        if let Some(slot) = self.players.get_mut(seat) {
            *slot = record;
        }
    }

    /// All seats in order, hidden ones included.
    pub fn players(&self) -> &[PlayerRecord] {
        &self.players
    }

    /// The displayed seats, in order.
    pub fn visible_players(&self) -> impl Iterator<Item = &PlayerRecord> {
        self.players.iter().take(self.player_count)
    }

    /// Apply an event, returning the new session (copy-on-write).
    pub fn apply(&self, event: SessionEvent) -> Self {
        let mut next = self.clone();
        next.apply_mut(event);
        next
    }

    /// Apply an event in place.
    pub fn apply_mut(&mut self, event: SessionEvent) {
        match event {
            SessionEvent::AdjustHealth { seat, delta } => {
                if let Some(record) = self.players.get_mut(seat) {
                    record.adjust_health(delta);
                }
            }
            SessionEvent::AdjustMastery { seat, delta } => {
                if let Some(record) = self.players.get_mut(seat) {
                    record.adjust_mastery(delta);
                }
            }
            SessionEvent::SetName { seat, name } => {
                if let Some(record) = self.players.get_mut(seat) {
                    record.name = name;
                }
            }
            SessionEvent::SetPlayer { seat, record } => {
                self.set_player(seat, record);
            }
            SessionEvent::SetPlayerCount { count } => {
                self.set_player_count(count);
            }
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::counter::COARSE_STEP;

    #[test]
    fn test_new_session_defaults() {
        let session = Session::new();
        assert_eq!(session.player_count(), 2);
        assert_eq!(session.players().len(), MAX_PLAYERS);

        for (i, record) in session.players().iter().enumerate() {
            assert_eq!(record.name.text(), format!("Player {}", i + 1));
            assert_eq!(record.health(), 50);
            assert_eq!(record.mastery(), 0);
        }
    }

    #[test]
    fn test_player_count_clamped() {
        let mut session = Session::new();

        session.set_player_count(3);
        assert_eq!(session.player_count(), 3);

        session.set_player_count(0);
        assert_eq!(session.player_count(), 2);

        session.set_player_count(9);
        assert_eq!(session.player_count(), 4);
    }

    #[test]
    fn test_hidden_seats_keep_values() {
        let mut session = Session::new();
        session.set_player_count(4);

        session.apply_mut(SessionEvent::AdjustHealth {
            seat: 2,
            delta: -COARSE_STEP,
        });
        session.apply_mut(SessionEvent::SetName {
            seat: 3,
            name: NameField::new("Dana"),
        });

        // Drop down to 2 players and back up
        session.set_player_count(2);
        assert_eq!(session.visible_players().count(), 2);
        session.set_player_count(4);

        assert_eq!(session.player(2).unwrap().health(), 45);
        assert_eq!(session.player(3).unwrap().name.text(), "Dana");
    }

    #[test]
    fn test_set_player_wholesale() {
        let mut session = Session::new();
        let record = PlayerRecord::new(NameField::new("Alice")).with_health(33);

        session.set_player(1, record.clone());
        assert_eq!(session.player(1), Some(&record));

        // Out of range: ignored
        session.set_player(7, record);
        assert_eq!(session.players().len(), MAX_PLAYERS);
    }

    #[test]
    fn test_events_out_of_range_seat_ignored() {
        let mut session = Session::new();
        let before = session.players().to_vec();

        session.apply_mut(SessionEvent::AdjustHealth { seat: 9, delta: -5 });
        session.apply_mut(SessionEvent::AdjustMastery { seat: 4, delta: 5 });
        session.apply_mut(SessionEvent::SetName {
            seat: 100,
            name: NameField::new("nobody"),
        });

        assert_eq!(session.players(), &before[..]);
    }

    #[test]
    fn test_apply_is_copy_on_write() {
        let session = Session::new();
        let next = session.apply(SessionEvent::AdjustHealth { seat: 0, delta: -1 });

        assert_eq!(session.player(0).unwrap().health(), 50);
        assert_eq!(next.player(0).unwrap().health(), 49);
    }

    #[test]
    fn test_adjust_events_clamp() {
        let mut session = Session::new();

        session.apply_mut(SessionEvent::AdjustMastery { seat: 0, delta: 500 });
        assert_eq!(session.player(0).unwrap().mastery(), 30);

        session.apply_mut(SessionEvent::AdjustHealth { seat: 0, delta: -500 });
        assert_eq!(session.player(0).unwrap().health(), 0);
    }

    #[test]
    fn test_visible_players_follow_count() {
        let mut session = Session::new();
        session.set_player_count(3);

        let names: Vec<&str> = session.visible_players().map(|p| p.name.text()).collect();
        assert_eq!(names, vec!["Player 1", "Player 2", "Player 3"]);
    }
}
