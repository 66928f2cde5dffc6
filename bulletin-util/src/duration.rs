use std::time::Duration;

/// Default on-screen time for a bulletin.
pub const DEFAULT_DISPLAY_TIME: Duration = Duration::from_secs(5);

/// How long a bulletin stays on screen before it is dismissed automatically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum DisplayDuration {
    /// Stays until dismissed explicitly.
    Forever,
    /// Dismissed automatically once the duration elapses.
    Limit(Duration),
}

impl Default for DisplayDuration {
    fn default() -> Self {
        Self::Limit(DEFAULT_DISPLAY_TIME)
    }
}

impl DisplayDuration {
    /// Zero, negative, non-finite or unrepresentably large seconds yield
    /// [`DisplayDuration::Forever`].
    pub fn from_secs_f64(secs: f64) -> Self {
        if secs <= 0.0 {
            return Self::Forever;
        }
        Duration::try_from_secs_f64(secs).map_or(Self::Forever, Self::Limit)
    }

    /// `None` or `Some(0)` yields [`DisplayDuration::Forever`].
    pub fn from_millis(millis: Option<u32>) -> Self {
        match millis {
            Some(ms) if ms > 0 => Self::Limit(Duration::from_millis(u64::from(ms))),
            _ => Self::Forever,
        }
    }

    /// Time until automatic dismissal, if any.
    pub fn timeout(&self) -> Option<Duration> {
        match self {
            Self::Forever => None,
            Self::Limit(d) => Some(*d),
        }
    }

    pub fn is_forever(&self) -> bool {
        matches!(self, Self::Forever)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_five_seconds() {
        assert_eq!(DisplayDuration::default(), DisplayDuration::Limit(Duration::from_secs(5)));
        assert_eq!(DisplayDuration::default().timeout(), Some(DEFAULT_DISPLAY_TIME));
    }

    #[test]
    fn test_from_secs_non_positive_is_forever() {
        assert!(DisplayDuration::from_secs_f64(0.0).is_forever());
        assert!(DisplayDuration::from_secs_f64(-3.0).is_forever());
        assert!(DisplayDuration::from_secs_f64(f64::NAN).is_forever());
        assert!(DisplayDuration::from_secs_f64(f64::INFINITY).is_forever());
    }

    #[test]
    fn test_from_secs_too_large_is_forever() {
        assert!(DisplayDuration::from_secs_f64(1e20).is_forever());
        assert!(DisplayDuration::from_secs_f64(f64::MAX).is_forever());
    }

    #[test]
    fn test_from_secs_positive() {
        assert_eq!(
            DisplayDuration::from_secs_f64(2.5),
            DisplayDuration::Limit(Duration::from_millis(2500))
        );
    }

    #[test]
    fn test_from_millis() {
        assert!(DisplayDuration::from_millis(None).is_forever());
        assert!(DisplayDuration::from_millis(Some(0)).is_forever());
        assert_eq!(
            DisplayDuration::from_millis(Some(3000)).timeout(),
            Some(Duration::from_secs(3))
        );
    }

    #[test]
    fn test_forever_has_no_timeout() {
        assert_eq!(DisplayDuration::Forever.timeout(), None);
    }
}
