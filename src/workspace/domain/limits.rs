//! Configurable input limits for workspace text fields.

use serde::{Deserialize, Serialize};

/// Character limits applied when validating names, titles and descriptions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkspaceLimits {
    /// Maximum project name length in characters.
    pub max_name_chars: usize,
    /// Maximum task title length in characters.
    pub max_title_chars: usize,
    /// Maximum description length in characters.
    pub max_description_chars: usize,
}

impl Default for WorkspaceLimits {
    fn default() -> Self {
        Self {
            max_name_chars: 255,
            max_title_chars: 255,
            max_description_chars: 2000,
        }
    }
}
