//! Layout selection: how the displayed seats are arranged on screen.
//!
//! Pure derivation from (player count, available width) to a plan of rows,
//! compact flags, and step-button visibility. Nothing here touches the data
//! model; the plan only tells a renderer what to draw.
//!
//! The rules:
//!
//! - A screen is "wide" above a fixed dp threshold; wide screens arrange
//!   seats in rows, narrow screens stack them in a single column.
//! - With 3 players on a wide screen, the third seat sits alone on its own
//!   row in compact mode.
//! - With 4 players on a wide screen, everything is compact and the coarse
//!   +5/-5 step buttons are hidden.

use crate::state::session::Session;

/// Width above which the wide arrangement is used, in dp.
pub const WIDE_WIDTH_THRESHOLD_DP: i32 = 500;

/// Check whether a screen width selects the wide arrangement.
pub fn is_wide(width_dp: i32) -> bool {
    width_dp > WIDE_WIDTH_THRESHOLD_DP
}

/// How one seat is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    /// Seat index into the session's players
    pub seat: usize,

    /// Counters side by side instead of stacked
    pub compact: bool,

    /// Whether the coarse +5/-5 buttons are shown
    pub show_step_buttons: bool,
}

impl Slot {
    fn expanded(seat: usize) -> Self {
        Self {
            seat,
            compact: false,
            show_step_buttons: true,
        }
    }

    fn compact(seat: usize, show_step_buttons: bool) -> Self {
        Self {
            seat,
            compact: true,
            show_step_buttons,
        }
    }
}

/// A full arrangement: visual rows of slots, top to bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutPlan {
    pub rows: Vec<Vec<Slot>>,
}

impl LayoutPlan {
    /// Derive the plan for a player count (clamped to 2..=4) and width class.
    pub fn new(player_count: usize, wide: bool) -> Self {
        let count = player_count.clamp(2, 4);

        let rows = if !wide {
            // Narrow: a single column of expanded seats
            (0..count).map(|seat| vec![Slot::expanded(seat)]).collect()
        } else {
            match count {
                2 => vec![vec![Slot::expanded(0), Slot::expanded(1)]],
                3 => vec![
                    vec![Slot::expanded(0), Slot::expanded(1)],
                    vec![Slot::compact(2, true)],
                ],
                _ => vec![
                    vec![Slot::compact(0, false), Slot::compact(1, false)],
                    vec![Slot::compact(2, false), Slot::compact(3, false)],
                ],
            }
        };

        Self { rows }
    }

    /// Derive the plan for a session at a given screen width.
    pub fn for_session(session: &Session, width_dp: i32) -> Self {
        Self::new(session.player_count(), is_wide(width_dp))
    }

    /// All slots in display order.
    pub fn slots(&self) -> impl Iterator<Item = &Slot> {
        self.rows.iter().flatten()
    }
}
