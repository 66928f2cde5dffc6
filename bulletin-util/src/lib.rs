pub mod background;
pub mod duration;
pub mod presets;
pub mod stack;
pub mod style;

pub use background::{BackgroundTreatment, BlurStyle, dim_alpha, treatment_from_code};
pub use bulletin_config::{BackgroundEffect, BulletinConfig, Level, Position};
pub use duration::{DEFAULT_DISPLAY_TIME, DisplayDuration};
pub use stack::BulletinStack;
pub use style::{AnimationSettings, Color, EdgeInsets, StyleSettings};

use serde::{Deserialize, Serialize};
use std::{collections::HashMap, fmt, num::NonZeroU64};

/// Identifier the presenter assigns to every bulletin it accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BulletinId(NonZeroU64);

impl BulletinId {
    pub const fn new(id: u64) -> Option<Self> {
        match NonZeroU64::new(id) {
            Some(id) => Some(Self(id)),
            None => None,
        }
    }

    pub const fn get(self) -> u64 {
        self.0.get()
    }
}

impl From<NonZeroU64> for BulletinId {
    fn from(id: NonZeroU64) -> Self {
        Self(id)
    }
}

impl fmt::Display for BulletinId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Everything a presenter and a renderer need to know to show one bulletin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bulletin {
    /// Caller supplied label, not interpreted.
    pub identifier: Option<String>,
    pub position: Position,
    pub level: Level,
    pub duration: DisplayDuration,
    pub style: StyleSettings,
    pub presentation_animation: AnimationSettings,
    /// Free-form data carried along to event consumers.
    #[serde(default)]
    pub info: HashMap<String, String>,
}

impl Default for Bulletin {
    fn default() -> Self {
        Self {
            identifier: None,
            position: Position::default(),
            level: Level::default(),
            duration: DisplayDuration::default(),
            style: StyleSettings::default(),
            presentation_animation: AnimationSettings::default(),
            info: HashMap::new(),
        }
    }
}

impl Bulletin {
    pub fn new() -> Self {
        Self::default()
    }

    /// A default bulletin with position, level, background and duration taken from `config`.
    pub fn from_config(config: &BulletinConfig) -> Self {
        let mut bulletin = Self {
            position: config.default_position,
            level: config.default_level,
            duration: DisplayDuration::from_millis(config.default_timeout_ms),
            ..Self::default()
        };
        bulletin.style.background_effect = config.default_background_effect;
        bulletin.style.background_dismiss_enabled = config.background_dismiss;
        bulletin
    }

    pub fn with_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = Some(identifier.into());
        self
    }

    pub fn with_position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    pub fn with_duration(mut self, duration: DisplayDuration) -> Self {
        self.duration = duration;
        self
    }

    pub fn with_background_effect(mut self, effect: BackgroundEffect) -> Self {
        self.style.background_effect = effect;
        self
    }

    pub fn with_info(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.info.insert(key.into(), value.into());
        self
    }

    pub fn background_treatment(&self) -> BackgroundTreatment {
        self.style.background_effect.into()
    }

    /// Short human readable label for logs
    pub fn label(&self) -> String {
        match &self.identifier {
            Some(identifier) => format!("{identifier} [{:?}, level {}]", self.position, self.level),
            None => format!("[{:?}, level {}]", self.position, self.level),
        }
    }
}
