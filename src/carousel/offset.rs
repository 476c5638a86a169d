//! Committed page position.

/// Index of the committed card together with the number of cards.
///
/// Every transition saturates at the bounds of the sequence: stepping
/// past the last card or before the first one is a no-op, never a wrap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PageOffset {
    index: usize,
    count: usize,
}

impl PageOffset {
    pub fn new(count: usize) -> Self {
        Self { index: 0, count }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn last_index(&self) -> usize {
        self.count.saturating_sub(1)
    }

    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    pub fn is_last(&self) -> bool {
        self.index >= self.last_index()
    }

    /// Moves one card forward. Returns `false` when already on the last card.
    pub fn step_next(&mut self) -> bool {
        if self.index + 1 < self.count {
            self.index += 1;
            true
        } else {
            false
        }
    }

    /// Moves one card back. Returns `false` when already on the first card.
    pub fn step_previous(&mut self) -> bool {
        if self.index > 0 {
            self.index -= 1;
            true
        } else {
            false
        }
    }

    /// Adopts a value written by the owner of the selection binding.
    ///
    /// Out-of-range values clamp to the last card.
    pub fn sync_from_external(&mut self, value: usize) {
        self.index = value.min(self.last_index());
    }

    /// The item sequence changed length; keep the index inside it.
    pub fn set_count(&mut self, count: usize) {
        self.count = count;
        self.index = self.index.min(self.last_index());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_first_card() {
        let offset = PageOffset::new(4);
        assert_eq!(offset.index(), 0);
        assert!(offset.is_first());
        assert!(!offset.is_last());
    }

    #[test]
    fn step_next_saturates_at_last_card() {
        let mut offset = PageOffset::new(3);
        assert!(offset.step_next());
        assert!(offset.step_next());
        assert!(!offset.step_next());
        assert_eq!(offset.index(), 2);
    }

    #[test]
    fn step_previous_saturates_at_zero() {
        let mut offset = PageOffset::new(3);
        assert!(!offset.step_previous());
        assert_eq!(offset.index(), 0);
    }

    #[test]
    fn empty_sequence_never_moves() {
        let mut offset = PageOffset::new(0);
        assert!(!offset.step_next());
        assert!(!offset.step_previous());
        offset.sync_from_external(7);
        assert_eq!(offset.index(), 0);
    }

    #[test]
    fn sync_clamps_out_of_range_values() {
        let mut offset = PageOffset::new(5);
        offset.sync_from_external(2);
        assert_eq!(offset.index(), 2);
        offset.sync_from_external(99);
        assert_eq!(offset.index(), 4);
    }

    #[test]
    fn shrinking_count_pulls_index_back() {
        let mut offset = PageOffset::new(5);
        offset.sync_from_external(4);
        offset.set_count(2);
        assert_eq!(offset.index(), 1);
        assert!(offset.is_last());
    }
}
