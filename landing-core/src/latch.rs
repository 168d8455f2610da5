//! One-way reveal latch.

/// Phase of a reveal. `Revealed` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RevealPhase {
    #[default]
    Unrevealed,
    Revealed,
}

/// Two-state latch flipped by the first visible report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RevealLatch {
    phase: RevealPhase,
}

impl RevealLatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> RevealPhase {
        self.phase
    }

    pub fn is_revealed(&self) -> bool {
        self.phase == RevealPhase::Revealed
    }

    /// Feed one visibility report. Returns `true` only on the call that flips the latch.
    pub fn observe(&mut self, visible: bool) -> bool {
        if visible && self.phase == RevealPhase::Unrevealed {
            self.phase = RevealPhase::Revealed;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_unrevealed() {
        let latch = RevealLatch::new();
        assert_eq!(latch.phase(), RevealPhase::Unrevealed);
        assert!(!latch.is_revealed());
    }

    #[test]
    fn invisible_reports_do_nothing() {
        let mut latch = RevealLatch::new();
        for _ in 0..10 {
            assert!(!latch.observe(false));
        }
        assert!(!latch.is_revealed());
    }

    #[test]
    fn first_visible_report_flips_once() {
        let mut latch = RevealLatch::new();
        assert!(latch.observe(true));
        assert!(!latch.observe(true));
        assert!(!latch.observe(true));
        assert!(latch.is_revealed());
    }

    #[test]
    fn never_reverts_after_reveal() {
        let mut latch = RevealLatch::new();
        latch.observe(true);
        latch.observe(false);
        latch.observe(false);
        assert_eq!(latch.phase(), RevealPhase::Revealed);
    }
}
