use std::fmt;

/// Stacking priority of a bulletin.
///
/// A level is an open numeric rank: the three named presets are spaced
/// widely so callers can slot custom levels between them (e.g. `Level::new(1500)`
/// renders above status bar bulletins but below alerts). Ordering compares
/// ranks, so `a < b` means `a` renders beneath `b`.
///
/// Serializes as the bare rank so the literal preset values round-trip.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct Level(i32);

impl Level {
    /// Regular in-app bulletins.
    pub const DEFAULT: Level = Level(0);
    /// Bulletins drawn over the status bar.
    pub const STATUS_BAR: Level = Level(1000);
    /// Modal alerts, above everything else.
    pub const ALERT: Level = Level(2000);

    pub const fn new(rank: i32) -> Self {
        Self(rank)
    }

    pub const fn rank(self) -> i32 {
        self.0
    }

    /// Whether a bulletin at this level renders above one at `other`.
    pub const fn is_above(self, other: Level) -> bool {
        self.0 > other.0
    }

    /// Name of the preset this level matches exactly, if any.
    pub const fn preset_name(self) -> Option<&'static str> {
        match self.0 {
            0 => Some("default"),
            1000 => Some("status-bar"),
            2000 => Some("alert"),
            _ => None,
        }
    }
}

impl From<i32> for Level {
    fn from(rank: i32) -> Self {
        Self(rank)
    }
}

impl From<Level> for i32 {
    fn from(level: Level) -> Self {
        level.0
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.preset_name() {
            Some(name) => write!(f, "{name} ({})", self.0),
            None => write!(f, "{}", self.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_ranks() {
        assert_eq!(Level::DEFAULT.rank(), 0);
        assert_eq!(Level::STATUS_BAR.rank(), 1000);
        assert_eq!(Level::ALERT.rank(), 2000);
        assert_eq!(Level::default(), Level::DEFAULT);
    }

    #[test]
    fn test_rank_ordering_matches_stacking() {
        let levels = [
            Level::new(-10),
            Level::DEFAULT,
            Level::new(1),
            Level::STATUS_BAR,
            Level::new(1500),
            Level::ALERT,
            Level::new(i32::MAX),
        ];

        for a in levels {
            for b in levels {
                if a.rank() == b.rank() {
                    continue;
                }
                assert_eq!(a < b, a.rank() < b.rank(), "{a} vs {b}");
                assert_eq!(b.is_above(a), a.rank() < b.rank(), "{a} vs {b}");
            }
        }
    }

    #[test]
    fn test_alert_above_status_bar() {
        assert!(Level::ALERT.is_above(Level::STATUS_BAR));
        assert!(!Level::STATUS_BAR.is_above(Level::ALERT));
        assert!(!Level::ALERT.is_above(Level::ALERT));
    }

    #[test]
    fn test_custom_level_between_presets() {
        let custom = Level::from(1500);
        assert!(custom > Level::STATUS_BAR);
        assert!(custom < Level::ALERT);
        assert_eq!(custom.preset_name(), None);
        assert_eq!(i32::from(custom), 1500);
    }

    #[test]
    fn test_serde_uses_bare_rank() {
        assert_eq!(serde_json::to_string(&Level::DEFAULT).unwrap(), "0");
        assert_eq!(serde_json::to_string(&Level::STATUS_BAR).unwrap(), "1000");
        assert_eq!(serde_json::to_string(&Level::ALERT).unwrap(), "2000");

        let level: Level = serde_json::from_str("2000").unwrap();
        assert_eq!(level, Level::ALERT);
        let level: Level = serde_json::from_str("1250").unwrap();
        assert_eq!(level.rank(), 1250);
    }

    #[test]
    fn test_display() {
        assert_eq!(Level::STATUS_BAR.to_string(), "status-bar (1000)");
        assert_eq!(Level::new(42).to_string(), "42");
    }
}
