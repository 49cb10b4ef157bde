//! Per-player record: name plus the two bounded counters.
//!
//! A record is mutated by replacing fields wholesale (copy-on-write via the
//! `with_*` builders) or through the clamping setters. Health and mastery are
//! private so a value outside their bounds is never representable.

use crate::state::counter::CounterKind;

/// A player's editable name, together with the text-selection offsets that
/// travel with it through the saved-state snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameField {
    text: String,
    selection_start: usize,
    selection_end: usize,
}

impl NameField {
    /// Create a name with the cursor at the start.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            selection_start: 0,
            selection_end: 0,
        }
    }

    /// Create a name with an explicit selection range.
    ///
    /// Offsets are clamped to the text length, and swapped if reversed.
    pub fn with_selection(text: impl Into<String>, start: usize, end: usize) -> Self {
        let text = text.into();
        let len = text.len();
        let (start, end) = if start <= end { (start, end) } else { (end, start) };
        Self {
            selection_start: start.min(len),
            selection_end: end.min(len),
            text,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn selection_start(&self) -> usize {
        self.selection_start
    }

    pub fn selection_end(&self) -> usize {
        self.selection_end
    }
}

impl Default for NameField {
    fn default() -> Self {
        Self::new("")
    }
}

/// One player's tracked state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerRecord {
    /// Display name, unrestricted free text
    pub name: NameField,

    health: i32,
    mastery: i32,
}

impl PlayerRecord {
    /// Create a record with full health and no mastery.
    pub fn new(name: NameField) -> Self {
        Self {
            name,
            health: CounterKind::Health.default_value(),
            mastery: CounterKind::Mastery.default_value(),
        }
    }

    /// The default record for seat `n` (1-indexed): "Player n".
    pub fn numbered(n: usize) -> Self {
        Self::new(NameField::new(format!("Player {}", n)))
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    pub fn mastery(&self) -> i32 {
        self.mastery
    }

    /// Set health, clamped into its bounds.
    pub fn set_health(&mut self, value: i32) {
        self.health = CounterKind::Health.bounds().clamp(value);
    }

    /// Set mastery, clamped into its bounds.
    pub fn set_mastery(&mut self, value: i32) {
        self.mastery = CounterKind::Mastery.bounds().clamp(value);
    }

    /// Apply a delta to health, clamped into its bounds.
    pub fn adjust_health(&mut self, delta: i32) {
        self.health = CounterKind::Health.bounds().apply(self.health, delta);
    }

    /// Apply a delta to mastery, clamped into its bounds.
    pub fn adjust_mastery(&mut self, delta: i32) {
        self.mastery = CounterKind::Mastery.bounds().apply(self.mastery, delta);
    }

    pub fn with_name(mut self, name: NameField) -> Self {
        self.name = name;
        self
    }

    pub fn with_health(mut self, value: i32) -> Self {
        self.set_health(value);
        self
    }

    pub fn with_mastery(mut self, value: i32) -> Self {
        self.set_mastery(value);
        self
    }
}

impl Default for PlayerRecord {
    fn default() -> Self {
        Self::new(NameField::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::counter::{COARSE_STEP, FINE_STEP};

    #[test]
    fn test_numbered_defaults() {
        let record = PlayerRecord::numbered(3);
        assert_eq!(record.name.text(), "Player 3");
        assert_eq!(record.health(), 50);
        assert_eq!(record.mastery(), 0);
    }

    #[test]
    fn test_adjust_clamps() {
        let mut record = PlayerRecord::numbered(1);

        record.adjust_health(COARSE_STEP);
        assert_eq!(record.health(), 50); // already at max

        record.adjust_health(-COARSE_STEP);
        assert_eq!(record.health(), 45);

        record.adjust_mastery(-FINE_STEP);
        assert_eq!(record.mastery(), 0);

        record.adjust_mastery(COARSE_STEP);
        assert_eq!(record.mastery(), 5);
    }

    #[test]
    fn test_set_clamps() {
        let mut record = PlayerRecord::numbered(1);
        record.set_health(999);
        assert_eq!(record.health(), 50);
        record.set_mastery(-7);
        assert_eq!(record.mastery(), 0);
    }

    #[test]
    fn test_builders_are_copy_on_write() {
        let record = PlayerRecord::numbered(1);
        let renamed = record.clone().with_name(NameField::new("Alice"));

        assert_eq!(record.name.text(), "Player 1");
        assert_eq!(renamed.name.text(), "Alice");
        assert_eq!(renamed.health(), record.health());

        let hurt = renamed.with_health(12).with_mastery(99);
        assert_eq!(hurt.health(), 12);
        assert_eq!(hurt.mastery(), 30);
    }

    #[test]
    fn test_selection_clamped_to_text() {
        let name = NameField::with_selection("Bob", 1, 10);
        assert_eq!(name.selection_start(), 1);
        assert_eq!(name.selection_end(), 3);

        // Reversed offsets are swapped
        let name = NameField::with_selection("Bob", 2, 1);
        assert_eq!(name.selection_start(), 1);
        assert_eq!(name.selection_end(), 2);
    }
}
