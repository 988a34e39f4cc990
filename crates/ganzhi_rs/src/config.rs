//! Engine configuration.

use std::path::Path;

use ganzhi_base::{BRANCH_SHENSHA, STEM_SHENSHA, ShenSha, ShenShaKey, UNKNOWN_LABEL};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{EngineError, EngineResult};

/// Largest number of decade blocks a timeline may hold.
pub const MAX_DAYUN_COUNT: u32 = 12;

/// Runtime options for charts, timelines and text output.
///
/// Missing JSON fields take their default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Decade blocks in a timeline. Default: 8.
    pub dayun_count: u32,

    /// Stem-keyed shensha to evaluate, in display order. Default: all seven.
    pub stem_shensha: Vec<ShenSha>,

    /// Branch-keyed shensha to evaluate, in display order. Default: all eleven.
    pub branch_shensha: Vec<ShenSha>,

    /// Text for table misses. Default: "未知".
    pub unknown_label: String,

    /// Text for a marker with no target. Default: "—".
    pub absent_label: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            dayun_count: 8,
            stem_shensha: STEM_SHENSHA.to_vec(),
            branch_shensha: BRANCH_SHENSHA.to_vec(),
            unknown_label: UNKNOWN_LABEL.to_string(),
            absent_label: "—".to_string(),
        }
    }
}

impl EngineConfig {
    /// Validate configuration parameters.
    pub fn validate(&self) -> EngineResult<()> {
        if !(1..=MAX_DAYUN_COUNT).contains(&self.dayun_count) {
            return Err(EngineError::Config(format!(
                "dayun_count must be in 1..={MAX_DAYUN_COUNT}, got {}",
                self.dayun_count
            )));
        }
        check_keys("stem_shensha", &self.stem_shensha, ShenShaKey::Stem)?;
        check_keys("branch_shensha", &self.branch_shensha, ShenShaKey::Branch)?;
        if self.unknown_label.is_empty() {
            return Err(EngineError::Config(
                "unknown_label must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Every enabled shensha kind, stem-keyed first.
    pub fn shensha_kinds(&self) -> Vec<ShenSha> {
        self.stem_shensha
            .iter()
            .chain(self.branch_shensha.iter())
            .copied()
            .collect()
    }

    /// Load and validate from a JSON string.
    pub fn from_json(json: &str) -> EngineResult<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| EngineError::Config(format!("JSON parse error: {e}")))?;
        config.validate()?;
        debug!(
            dayun_count = config.dayun_count,
            shensha = config.stem_shensha.len() + config.branch_shensha.len(),
            "config loaded"
        );
        Ok(config)
    }

    /// Load and validate from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> EngineResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| EngineError::Config(format!("{}: {e}", path.display())))?;
        Self::from_json(&json)
    }
}

fn check_keys(field: &str, kinds: &[ShenSha], key: ShenShaKey) -> EngineResult<()> {
    for (i, kind) in kinds.iter().enumerate() {
        if kind.keyed_by() != key {
            return Err(EngineError::Config(format!(
                "{field} contains {} which is not {key:?}-keyed",
                kind.name()
            )));
        }
        if kinds[..i].contains(kind) {
            return Err(EngineError::Config(format!(
                "{field} lists {} twice",
                kind.name()
            )));
        }
    }
    Ok(())
}
