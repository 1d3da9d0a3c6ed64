use log::debug;

use crate::domain::Timing;
use crate::error::TimingError;
use crate::parse::parse_timings;


/// Parsed timings, in input order, and their sum.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TimingsSummary {
    timings: Vec<Timing>,
    total: Timing,
}

impl TimingsSummary {
    /// Fails when the total does not fit in a `Timing`.
    pub fn from_timings(timings: Vec<Timing>) -> Result<TimingsSummary, TimingError> {
        let total = timings
            .iter()
            .try_fold(Timing::zero(), |sum, t| sum.checked_add(*t))
            .ok_or(TimingError::TotalOverflow)?;
        Ok(TimingsSummary { timings, total })
    }

    pub fn timings(&self) -> &[Timing] {
        &self.timings
    }

    pub fn total(&self) -> Timing {
        self.total
    }

    pub fn len(&self) -> usize {
        self.timings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timings.is_empty()
    }
}

/// Parse the whole timings string and add everything up.
///
/// Parsing is complete before any addition happens, so an invalid token
/// never yields a partial total.
pub fn add_timings(timings: &str) -> Result<TimingsSummary, TimingError> {
    let summary = TimingsSummary::from_timings(parse_timings(timings)?)?;
    debug!(
        "{} timings, total {} ({}s)",
        summary.len(),
        summary.total(),
        summary.total().total_seconds()
    );
    Ok(summary)
}
