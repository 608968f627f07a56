use serde::{Deserialize, Serialize};

/// One-way visibility bookkeeping for reveal targets.
///
/// Elements are registered once, in document order, and addressed by that
/// registration index. A transition to visible is permanent: later
/// intersections of the same element are no-ops for the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealSet {
    revealed: Vec<bool>,
}

impl RevealSet {
    pub fn new(count: usize) -> Self {
        Self {
            revealed: vec![false; count],
        }
    }

    /// Number of registered elements.
    pub fn len(&self) -> usize {
        self.revealed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.revealed.is_empty()
    }

    /// Mark the element at `index` visible.
    ///
    /// Returns true only on the first transition.
    pub fn mark_visible(&mut self, index: usize) -> bool {
        match self.revealed.get_mut(index) {
            Some(flag) if !*flag => {
                *flag = true;
                true
            }
            _ => false,
        }
    }

    pub fn is_visible(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    /// Number of elements revealed so far.
    pub fn revealed_count(&self) -> usize {
        self.revealed.iter().filter(|v| **v).count()
    }
}

/// Delay before the card at `index` resets to its rest state during a
/// staggered grid reveal. Card 0 resets immediately.
pub fn stagger_delay_ms(index: usize, step_ms: u32) -> u32 {
    index as u32 * step_ms
}
