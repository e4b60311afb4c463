//! Playback speed configuration.

use std::time::Duration;

/// Bounds and default for the auto-advance interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlaybackConfig {
    pub min_speed_ms: u64,
    pub max_speed_ms: u64,
    pub default_speed_ms: u64,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            min_speed_ms: 100,
            max_speed_ms: 2000,
            default_speed_ms: 250,
        }
    }
}

impl PlaybackConfig {
    /// Clamp `ms` into `[min_speed_ms, max_speed_ms]`. A reversed range is
    /// treated as if its bounds were swapped.
    pub fn clamp_speed(&self, ms: u64) -> u64 {
        let lo = self.min_speed_ms.min(self.max_speed_ms);
        let hi = self.min_speed_ms.max(self.max_speed_ms);
        ms.clamp(lo, hi)
    }

    /// The default interval, clamped.
    pub fn default_speed(&self) -> u64 {
        self.clamp_speed(self.default_speed_ms)
    }

    /// Convenience for converting an interval to a [`Duration`].
    pub fn interval(ms: u64) -> Duration {
        Duration::from_millis(ms)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn missing_fields_use_defaults() {
        let cfg: PlaybackConfig = serde_json::from_str(r#"{"max_speed_ms": 900}"#).unwrap();
        assert_eq!(cfg.min_speed_ms, 100);
        assert_eq!(cfg.max_speed_ms, 900);
        assert_eq!(cfg.default_speed_ms, 250);
    }
}
