//! RosterScore - headcount shortage dominated by rest-day fairness

use std::cmp::Ordering;
use std::fmt;

/// Quality of a generated roster. Lower is better.
///
/// `total = shortage * weight + rest_variance`. The weight is large enough
/// that any headcount shortfall outweighs fairness differences.
///
/// # Examples
///
/// ```
/// use rosterforge_core::RosterScore;
///
/// let short = RosterScore::new(1, 0.0, 1000.0);
/// let unfair = RosterScore::new(0, 4.5, 1000.0);
///
/// // A fully staffed roster beats a short one, however unfair.
/// assert!(unfair < short);
/// assert!(unfair.is_fully_staffed());
/// ```
#[derive(Clone, Copy, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RosterScore {
    shortage: u32,
    rest_variance: f64,
    total: f64,
}

impl RosterScore {
    /// Default weight of one missing staff-day.
    pub const DEFAULT_SHORTAGE_WEIGHT: f64 = 1000.0;

    /// Creates a score from its components.
    pub fn new(shortage: u32, rest_variance: f64, shortage_weight: f64) -> Self {
        Self {
            shortage,
            rest_variance,
            total: shortage as f64 * shortage_weight + rest_variance,
        }
    }

    /// Missing staff-days summed over every (day, shift).
    #[inline]
    pub const fn shortage(&self) -> u32 {
        self.shortage
    }

    /// Population variance of per-staff rest counts.
    #[inline]
    pub const fn rest_variance(&self) -> f64 {
        self.rest_variance
    }

    /// Weighted scalar used for comparisons.
    #[inline]
    pub const fn total(&self) -> f64 {
        self.total
    }

    #[inline]
    pub const fn is_fully_staffed(&self) -> bool {
        self.shortage == 0
    }

    /// Strictly better (lower) than `other`.
    #[inline]
    pub fn is_better_than(&self, other: &RosterScore) -> bool {
        self < other
    }
}

impl Ord for RosterScore {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.total.total_cmp(&other.total) {
            Ordering::Equal => self.shortage.cmp(&other.shortage),
            other => other,
        }
    }
}

impl PartialOrd for RosterScore {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for RosterScore {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for RosterScore {}

impl fmt::Debug for RosterScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "RosterScore({}, {:.4}, {:.4})",
            self.shortage, self.rest_variance, self.total
        )
    }
}

impl fmt::Display for RosterScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}shortage/{:.3}variance",
            self.shortage, self.rest_variance
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total() {
        let score = RosterScore::new(3, 1.5, 1000.0);
        assert_eq!(score.total(), 3001.5);
        assert_eq!(score.shortage(), 3);
    }

    #[test]
    fn test_ordering_lower_is_better() {
        let a = RosterScore::new(0, 0.25, 1000.0);
        let b = RosterScore::new(0, 1.0, 1000.0);
        assert!(a < b);
        assert!(a.is_better_than(&b));
        assert!(!b.is_better_than(&a));
        assert!(!a.is_better_than(&a));
    }

    #[test]
    fn test_shortage_dominates() {
        let short = RosterScore::new(1, 0.0, 1000.0);
        let unfair = RosterScore::new(0, 99.0, 1000.0);
        assert!(unfair < short);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            RosterScore::new(2, 0.5, 1000.0).to_string(),
            "2shortage/0.500variance"
        );
    }
}
