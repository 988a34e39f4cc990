//! Error type for the convenience layer.

use ganzhi_base::GanzhiError;
use thiserror::Error;

/// Errors surfaced by chart and timeline builders.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum EngineError {
    /// Invalid pillar, out-of-range input or unresolved rollover.
    #[error(transparent)]
    Ganzhi(#[from] GanzhiError),
    /// The lunar calendar collaborator could not produce pillars.
    #[error("calendar: {0}")]
    Calendar(String),
    /// Configuration failed to parse or validate.
    #[error("config: {0}")]
    Config(String),
}

pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_ganzhi_error() {
        let e: EngineError = GanzhiError::MalformedPillar("甲".into()).into();
        assert!(matches!(e, EngineError::Ganzhi(_)));
        assert_eq!(e.to_string(), "malformed pillar text: \"甲\"");
    }

    #[test]
    fn config_message() {
        let e = EngineError::Config("dayun_count must be in 1..=12, got 0".into());
        assert_eq!(e.to_string(), "config: dayun_count must be in 1..=12, got 0");
    }
}
