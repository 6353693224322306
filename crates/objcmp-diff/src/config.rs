use serde::{Deserialize, Serialize};

/// Configuration for the recursive differ.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiffConfig {
    /// Maximum nesting depth below the top-level objects.
    pub max_depth: usize,
    /// When `true`, absent or mismatched top-level inputs are an error
    /// instead of an empty change list.
    pub strict: bool,
    /// Stop descending into an object pair that is already being compared
    /// further up the current path.
    pub detect_cycles: bool,
}

impl Default for DiffConfig {
    fn default() -> Self {
        Self {
            max_depth: 64,
            strict: false,
            detect_cycles: true,
        }
    }
}

impl DiffConfig {
    /// Default limits, but reject invalid top-level inputs.
    pub fn strict() -> Self {
        Self {
            strict: true,
            ..Default::default()
        }
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_cycle_detection(mut self, detect_cycles: bool) -> Self {
        self.detect_cycles = detect_cycles;
        self
    }
}
