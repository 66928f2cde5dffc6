use cosmic_config::{CosmicConfigEntry, cosmic_config_derive::CosmicConfigEntry};

mod level;

pub use level::Level;

pub const ID: &str = "io.github.Bulletin";

/// Vertical anchor of a bulletin within its container.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[repr(u8)]
pub enum Position {
    #[default]
    Top = 0,
    Center = 1,
    Bottom = 2,
}

impl Position {
    pub const ALL: [Position; 3] = [Position::Top, Position::Center, Position::Bottom];

    /// Raw integer code (`0 = top`, `1 = center`, `2 = bottom`).
    pub const fn code(self) -> u8 {
        self as u8
    }
}

impl From<i32> for Position {
    fn from(value: i32) -> Self {
        match value {
            1 => Self::Center,
            2 => Self::Bottom,
            _ => Self::Top,
        }
    }
}

/// Treatment applied to the content behind a presented bulletin.
///
/// This is only a hint; the renderer decides how each value is drawn.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[repr(u8)]
pub enum BackgroundEffect {
    #[default]
    None = 0,
    DarkenLight = 1,
    DarkenMedium = 2,
    DarkenHigh = 3,
    BlurLight = 4,
    BlurExtraLight = 5,
    BlurDark = 6,
}

impl BackgroundEffect {
    pub const ALL: [BackgroundEffect; 7] = [
        BackgroundEffect::None,
        BackgroundEffect::DarkenLight,
        BackgroundEffect::DarkenMedium,
        BackgroundEffect::DarkenHigh,
        BackgroundEffect::BlurLight,
        BackgroundEffect::BlurExtraLight,
        BackgroundEffect::BlurDark,
    ];

    /// Raw integer code, `0..=6` in declaration order.
    pub const fn code(self) -> u8 {
        self as u8
    }

    pub const fn is_none(self) -> bool {
        matches!(self, Self::None)
    }

    pub const fn is_darken(self) -> bool {
        matches!(self, Self::DarkenLight | Self::DarkenMedium | Self::DarkenHigh)
    }

    pub const fn is_blur(self) -> bool {
        matches!(self, Self::BlurLight | Self::BlurExtraLight | Self::BlurDark)
    }
}

impl From<i32> for BackgroundEffect {
    fn from(value: i32) -> Self {
        match value {
            1 => Self::DarkenLight,
            2 => Self::DarkenMedium,
            3 => Self::DarkenHigh,
            4 => Self::BlurLight,
            5 => Self::BlurExtraLight,
            6 => Self::BlurDark,
            _ => Self::None,
        }
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq, CosmicConfigEntry)]
#[version = 1]
pub struct BulletinConfig {
    /// Position used when a bulletin does not pick one.
    pub default_position: Position,
    /// Level used when a bulletin does not pick one.
    pub default_level: Level,
    /// Background effect used when a bulletin does not pick one.
    pub default_background_effect: BackgroundEffect,
    /// Time in milliseconds a bulletin stays visible. `None` keeps it until dismissed.
    pub default_timeout_ms: Option<u32>,
    /// The maximum number of bulletins that can be visible at once (default: 3)
    #[serde(default = "default_max_visible")]
    pub max_visible: u32,
    /// Whether tapping the background effect dismisses the bulletin (default: true)
    #[serde(default = "default_true")]
    pub background_dismiss: bool,
}

impl Default for BulletinConfig {
    fn default() -> Self {
        Self {
            default_position: Position::default(),
            default_level: Level::default(),
            default_background_effect: BackgroundEffect::default(),
            default_timeout_ms: Some(5000),
            max_visible: default_max_visible(),
            background_dismiss: default_true(),
        }
    }
}

// Default value helpers for serde
const fn default_true() -> bool {
    true
}

const fn default_max_visible() -> u32 {
    3
}
