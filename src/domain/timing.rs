//! The `Timing` value type.

use std::fmt;
use std::ops::Add;


/// A duration in minutes and seconds.
///
/// # Invariants
/// - `seconds < 60`
///
/// Every constructor folds excess seconds into the minutes, so the invariant
/// holds for every value of this type.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timing {
    minutes: u64,
    seconds: u64,
}

impl Timing {
    /// # Panics
    /// Panics if carrying the seconds overflows the minutes, see `checked_new`.
    pub fn new(minutes: u64, seconds: u64) -> Timing {
        Timing::checked_new(minutes, seconds).expect("overflow when creating timing")
    }

    /// Like `new`, but `None` when the carried minutes do not fit.
    pub fn checked_new(minutes: u64, seconds: u64) -> Option<Timing> {
        Some(Timing {
            minutes: minutes.checked_add(seconds / 60)?,
            seconds: seconds % 60,
        })
    }

    /// The identity element of the addition.
    pub fn zero() -> Timing {
        Timing::default()
    }

    pub fn minutes(&self) -> u64 {
        self.minutes
    }

    pub fn seconds(&self) -> u64 {
        self.seconds
    }

    pub fn total_seconds(&self) -> u128 {
        u128::from(self.minutes) * 60 + u128::from(self.seconds)
    }

    /// Sum of two timings, `None` when the minutes overflow.
    pub fn checked_add(self, other: Timing) -> Option<Timing> {
        // Both seconds are below 60, their sum cannot overflow
        Timing::checked_new(
            self.minutes.checked_add(other.minutes)?,
            self.seconds + other.seconds,
        )
    }
}

impl Add for Timing {
    type Output = Timing;

    /// # Panics
    /// Panics on overflow, see `checked_add`.
    fn add(self, other: Timing) -> Timing {
        self.checked_add(other).expect("overflow when adding timings")
    }
}

/// Renders as `M:SS`, seconds always on two digits.
impl fmt::Display for Timing {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(&format!("{}:{:02}", self.minutes, self.seconds))
    }
}
