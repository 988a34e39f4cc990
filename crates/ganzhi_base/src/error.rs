//! Error types for stem-branch calculations.

use thiserror::Error;

use crate::branch::Branch;
use crate::pillar::Pillar;
use crate::stem::Stem;

/// Errors from pillar construction, input validation and cycle navigation.
///
/// Missing table entries are not errors; they surface as
/// [`Lookup::Unknown`](crate::lookup::Lookup::Unknown) on the affected field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum GanzhiError {
    /// Stem and branch differ in polarity, so the pair is not one of the 60.
    #[error("invalid pillar {stem}{branch}: stem and branch polarity differ")]
    InvalidPillar { stem: Stem, branch: Branch },
    /// A numeric input fell outside its declared domain.
    #[error("{what} out of range: {value} not in {min}..={max}")]
    OutOfRange {
        what: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },
    /// A character is not a stem or branch symbol.
    #[error("unknown stem/branch symbol: {0:?}")]
    UnknownSymbol(String),
    /// Pillar text is not exactly one stem followed by one branch.
    #[error("malformed pillar text: {0:?}")]
    MalformedPillar(String),
    /// Hour rollover found no stem matching the new hour branch.
    #[error("no valid hour stem after rollover from {hour}")]
    RolloverUnresolved { hour: Pillar },
}

impl GanzhiError {
    pub(crate) fn out_of_range(what: &'static str, value: i64, min: i64, max: i64) -> Self {
        Self::OutOfRange {
            what,
            value,
            min,
            max,
        }
    }
}
