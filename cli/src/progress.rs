//! Percentage-complete reporting

/// `floor(100 * index / total)`; a zero total counts as done
pub fn percentage(index: u64, total: u64) -> u32 {
    if total == 0 {
        return 100;
    }
    (u128::from(index) * 100 / u128::from(total)) as u32
}

/// Decides which loop iterations print a progress line.
///
/// A line is due when the percentage is an exact multiple of 5 and differs
/// from the last one printed. The tracker starts at 0, so `0%` is never
/// printed and small totals that skip every multiple print nothing.
#[derive(Debug, Default, Clone)]
pub struct ProgressTracker {
    last: u32,
}

impl ProgressTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Percentage to print for this iteration, if any
    pub fn advance(&mut self, index: u64, total: u64) -> Option<u32> {
        let pct = percentage(index, total);
        if pct % 5 == 0 && pct != self.last {
            self.last = pct;
            Some(pct)
        } else {
            None
        }
    }
}
