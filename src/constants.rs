// Constants module for bulletin
// Centralizes magic numbers for better maintainability

// ============================================================================
// Channel and Buffer Constants
// ============================================================================

/// Buffer size for the request and event channels
pub(crate) const CHANNEL_BUFFER_SIZE: usize = 100;

// ============================================================================
// Preset Geometry Constants
// ============================================================================

/// Screen width assumed by the `hud` preset when a command does not give one
pub(crate) const DEFAULT_SCREEN_WIDTH: f32 = 390.0;

/// Bottom display feature height assumed by the `sheet` preset when a command does not give one
pub(crate) const DEFAULT_BOTTOM_SAFE_AREA: f32 = 0.0;

// ============================================================================
// Logging Constants
// ============================================================================

/// Filter used when `RUST_LOG` is unset
pub(crate) const DEFAULT_LOG_FILTER: &str = "warn";
