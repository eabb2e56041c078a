//! Time-priority stamp allocation.

/// Issues strictly increasing time-priority stamps.
///
/// Owned by the book, one per instrument. Stamps start at zero.
#[derive(Debug, Default)]
pub struct SequenceAllocator {
    next: u64,
}

impl SequenceAllocator {
    /// Allocator whose first stamp is zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the next stamp
    pub fn next_sequence(&mut self) -> u64 {
        let sequence = self.next;
        self.next += 1;
        sequence
    }

    /// The most recently issued stamp, if any was issued
    pub fn last_issued(&self) -> Option<u64> {
        self.next.checked_sub(1)
    }

    /// Number of stamps issued so far
    pub fn issued(&self) -> u64 {
        self.next
    }
}
