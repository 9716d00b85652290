use serde::{Deserialize, Serialize};
use std::fmt;

/// Burn-rate posture for the remaining schedule buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferRisk {
    Nominal,
    High,
}

impl fmt::Display for BufferRisk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BufferRisk::Nominal => f.write_str("Nominal"),
            BufferRisk::High => f.write_str("High risk"),
        }
    }
}

/// Tracks consumption of the schedule contingency buffer in whole months.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContingencyTracker {
    baseline_months: u32,
    remaining_months: u32,
    risk_threshold_months: u32,
}

impl ContingencyTracker {
    pub fn new(baseline_months: u32, risk_threshold_months: u32) -> Self {
        Self {
            baseline_months,
            remaining_months: baseline_months,
            risk_threshold_months,
        }
    }

    pub fn baseline_months(&self) -> u32 {
        self.baseline_months
    }

    pub fn remaining_months(&self) -> u32 {
        self.remaining_months
    }

    /// Consumes buffer for a logged delay, flooring at zero. Returns the
    /// months remaining afterwards.
    pub fn consume(&mut self, months: u32) -> u32 {
        self.remaining_months = self.remaining_months.saturating_sub(months);
        self.remaining_months
    }

    pub fn remaining_fraction(&self) -> f64 {
        if self.baseline_months == 0 {
            return 0.0;
        }
        self.remaining_months as f64 / self.baseline_months as f64
    }

    /// Risk once the buffer left after a pending delay drops under the
    /// threshold.
    pub fn risk_after_delay(&self, pending_delay_months: u32) -> BufferRisk {
        let left = self.remaining_months.saturating_sub(pending_delay_months);
        if left < self.risk_threshold_months {
            BufferRisk::High
        } else {
            BufferRisk::Nominal
        }
    }

    pub fn current_risk(&self) -> BufferRisk {
        self.risk_after_delay(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consume_saturates_at_zero() {
        let mut t = ContingencyTracker::new(9, 3);
        assert_eq!(t.consume(4), 5);
        assert_eq!(t.consume(10), 0);
        assert_eq!(t.remaining_months(), 0);
        assert_eq!(t.baseline_months(), 9);
    }

    #[test]
    fn remaining_fraction_tracks_the_baseline() {
        let mut t = ContingencyTracker::new(9, 3);
        assert_eq!(t.remaining_fraction(), 1.0);
        t.consume(3);
        assert!((t.remaining_fraction() - 6.0 / 9.0).abs() < 1e-12);
    }

    #[test]
    fn risk_trips_below_three_months() {
        let mut t = ContingencyTracker::new(9, 3);
        assert_eq!(t.risk_after_delay(6), BufferRisk::Nominal); // 3 left, not below
        assert_eq!(t.risk_after_delay(7), BufferRisk::High); // 2 left

        t.consume(7);
        assert_eq!(t.current_risk(), BufferRisk::High);
    }
}
