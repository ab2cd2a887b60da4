/// Shared ceiling on concurrently live, budget-governed sound events.
///
/// Every governed unit takes one slot when it fires and gives it back when
/// its cleanup timer runs. Exempt units never touch the counter.
#[derive(Debug, Clone)]
pub struct UnitBudget {
    ceiling: usize,
    active: usize,
    dropped: u64,
}

impl UnitBudget {
    pub const DEFAULT_CEILING: usize = 150;

    pub fn new(ceiling: usize) -> Self {
        Self {
            ceiling,
            active: 0,
            dropped: 0,
        }
    }

    pub fn has_room(&self) -> bool {
        self.active < self.ceiling
    }

    /// Take a slot. Returns false (and counts a drop) when at the ceiling.
    pub fn acquire(&mut self) -> bool {
        if self.has_room() {
            self.active += 1;
            true
        } else {
            self.dropped += 1;
            false
        }
    }

    pub fn release(&mut self) {
        self.active = self.active.saturating_sub(1);
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn ceiling(&self) -> usize {
        self.ceiling
    }

    /// Units refused since construction.
    pub fn dropped(&self) -> u64 {
        self.dropped
    }
}

impl Default for UnitBudget {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CEILING)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn refuses_at_ceiling_and_recovers() {
        let mut b = UnitBudget::new(2);
        assert!(b.acquire());
        assert!(b.acquire());
        assert!(!b.acquire());
        assert_eq!(b.dropped(), 1);
        b.release();
        assert!(b.acquire());
        assert_eq!(b.active(), 2);
    }

    #[test]
    fn release_never_underflows() {
        let mut b = UnitBudget::default();
        b.release();
        assert_eq!(b.active(), 0);
        assert_eq!(b.ceiling(), 150);
    }
}
