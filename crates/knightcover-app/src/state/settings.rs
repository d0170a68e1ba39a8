use std::time::Duration;

use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct Settings {
    pub(crate) demo: DemoSettings,
}

/// How many reduction passes the demonstration animates.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) enum DemoMode {
    /// One row-major pass.
    #[default]
    SinglePass,
    /// Passes repeat until one removes nothing, matching *Generate*.
    UntilStable,
}

impl DemoMode {
    pub(crate) const ALL: [Self; 2] = [Self::SinglePass, Self::UntilStable];

    #[must_use]
    pub(crate) fn label(self) -> &'static str {
        match self {
            Self::SinglePass => "Single pass",
            Self::UntilStable => "Until stable",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct DemoSettings {
    pub(crate) mode: DemoMode,
    pub(crate) clear_delay_ms: u64,
    pub(crate) fill_delay_ms: u64,
    pub(crate) probe_delay_ms: u64,
}

impl DemoSettings {
    pub(crate) const MAX_DELAY_MS: u64 = 1000;

    #[must_use]
    pub(crate) fn clear_delay(&self) -> Duration {
        Duration::from_millis(self.clear_delay_ms)
    }

    #[must_use]
    pub(crate) fn fill_delay(&self) -> Duration {
        Duration::from_millis(self.fill_delay_ms)
    }

    #[must_use]
    pub(crate) fn probe_delay(&self) -> Duration {
        Duration::from_millis(self.probe_delay_ms)
    }
}

impl Default for DemoSettings {
    fn default() -> Self {
        Self {
            mode: DemoMode::default(),
            clear_delay_ms: 300,
            fill_delay_ms: 100,
            probe_delay_ms: 150,
        }
    }
}
