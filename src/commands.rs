//! JSON-lines commands accepted on stdin
//!
//! ```text
//! {"present": {"preset": "alert", "identifier": "sync", "timeout_ms": 3000}}
//! {"dismiss": 3}
//! "dismiss_all"
//! ```

use crate::{
    constants::{DEFAULT_BOTTOM_SAFE_AREA, DEFAULT_SCREEN_WIDTH},
    service::Request,
};
use bulletin_util::{
    BackgroundEffect, Bulletin, BulletinConfig, BulletinId, DisplayDuration, Level, Position, presets,
};
use serde::Deserialize;
use std::{collections::HashMap, fmt, time::Duration};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Preset {
    Notification,
    Banner,
    StickyBanner,
    StatusBar,
    Alert,
    Hud,
    Sheet,
}

#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PresentCommand {
    pub preset: Option<Preset>,
    pub identifier: Option<String>,
    pub position: Option<Position>,
    pub level: Option<Level>,
    pub background_effect: Option<BackgroundEffect>,
    /// `0` keeps the bulletin until dismissed.
    pub timeout_ms: Option<u32>,
    pub delay_ms: Option<u64>,
    /// Used by the `hud` preset.
    pub screen_width: Option<f32>,
    /// Used by the `sheet` preset.
    pub bottom_safe_area: Option<f32>,
    #[serde(default)]
    pub info: HashMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Command {
    Present(PresentCommand),
    Dismiss(u64),
    DismissAll,
}

#[derive(Debug)]
pub enum CommandError {
    Malformed(serde_json::Error),
    InvalidId(u64),
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::Malformed(err) => write!(f, "malformed command: {err}"),
            CommandError::InvalidId(id) => write!(f, "invalid bulletin id: {id}"),
        }
    }
}

impl std::error::Error for CommandError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CommandError::Malformed(err) => Some(err),
            CommandError::InvalidId(_) => None,
        }
    }
}

/// Parse one input line. Blank lines yield `Ok(None)`.
pub fn parse_line(line: &str) -> Result<Option<Command>, CommandError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    serde_json::from_str(line).map(Some).map_err(CommandError::Malformed)
}

impl Command {
    pub fn into_request(self, config: &BulletinConfig) -> Result<Request, CommandError> {
        match self {
            Command::Present(present) => {
                let delay = Duration::from_millis(present.delay_ms.unwrap_or(0));
                Ok(Request::Present {
                    bulletin: Box::new(present.into_bulletin(config)),
                    delay,
                })
            }
            Command::Dismiss(id) => BulletinId::new(id)
                .map(Request::Dismiss)
                .ok_or(CommandError::InvalidId(id)),
            Command::DismissAll => Ok(Request::DismissAll),
        }
    }
}

impl PresentCommand {
    /// Start from the preset, or from `config` when there is none, then apply overrides.
    pub fn into_bulletin(self, config: &BulletinConfig) -> Bulletin {
        let mut bulletin = match self.preset {
            None => Bulletin::from_config(config),
            Some(Preset::Notification) => presets::notification(),
            Some(Preset::Banner) => presets::banner(false),
            Some(Preset::StickyBanner) => presets::banner(true),
            Some(Preset::StatusBar) => presets::status_bar(),
            Some(Preset::Alert) => presets::alert(),
            Some(Preset::Hud) => presets::hud(self.screen_width.unwrap_or(DEFAULT_SCREEN_WIDTH)),
            Some(Preset::Sheet) => {
                presets::sheet(self.bottom_safe_area.unwrap_or(DEFAULT_BOTTOM_SAFE_AREA))
            }
        };

        bulletin.identifier = self.identifier;
        if let Some(position) = self.position {
            bulletin.position = position;
        }
        if let Some(level) = self.level {
            bulletin.level = level;
        }
        if let Some(effect) = self.background_effect {
            bulletin.style.background_effect = effect;
        }
        if let Some(timeout) = self.timeout_ms {
            bulletin.duration = DisplayDuration::from_millis(Some(timeout));
        }
        bulletin.info.extend(self.info);
        bulletin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn present(line: &str) -> PresentCommand {
        match parse_line(line).unwrap() {
            Some(Command::Present(present)) => present,
            other => panic!("expected present command, got {other:?}"),
        }
    }

    #[test]
    fn test_blank_line_is_skipped() {
        assert!(parse_line("").unwrap().is_none());
        assert!(parse_line("   \t").unwrap().is_none());
    }

    #[test]
    fn test_parse_dismiss_commands() {
        assert_eq!(parse_line(r#"{"dismiss": 4}"#).unwrap(), Some(Command::Dismiss(4)));
        assert_eq!(parse_line(r#""dismiss_all""#).unwrap(), Some(Command::DismissAll));
    }

    #[test]
    fn test_malformed_lines() {
        assert!(matches!(parse_line("{"), Err(CommandError::Malformed(_))));
        assert!(matches!(parse_line(r#"{"explode": 1}"#), Err(CommandError::Malformed(_))));
        assert!(matches!(
            parse_line(r#"{"present": {"position": "Middle"}}"#),
            Err(CommandError::Malformed(_))
        ));
        assert!(matches!(
            parse_line(r#"{"present": {"colour": "red"}}"#),
            Err(CommandError::Malformed(_))
        ));
    }

    #[test]
    fn test_dismiss_zero_is_invalid() {
        let err = Command::Dismiss(0)
            .into_request(&BulletinConfig::default())
            .unwrap_err();
        assert!(matches!(err, CommandError::InvalidId(0)));
        assert_eq!(err.to_string(), "invalid bulletin id: 0");
    }

    #[test]
    fn test_present_without_preset_uses_config() {
        let config = BulletinConfig {
            default_position: Position::Bottom,
            default_level: Level::STATUS_BAR,
            default_background_effect: BackgroundEffect::BlurLight,
            default_timeout_ms: Some(2000),
            ..Default::default()
        };
        let bulletin = present(r#"{"present": {}}"#).into_bulletin(&config);

        assert_eq!(bulletin.position, Position::Bottom);
        assert_eq!(bulletin.level, Level::STATUS_BAR);
        assert_eq!(bulletin.style.background_effect, BackgroundEffect::BlurLight);
        assert_eq!(bulletin.duration.timeout(), Some(Duration::from_secs(2)));
    }

    #[test]
    fn test_present_overrides_preset() {
        let line = r#"{"present": {
            "preset": "alert",
            "identifier": "sync",
            "position": "Bottom",
            "level": 1500,
            "background_effect": "BlurDark",
            "timeout_ms": 3000,
            "info": {"source": "test"}
        }}"#;
        let bulletin = present(line).into_bulletin(&BulletinConfig::default());

        assert_eq!(bulletin.identifier.as_deref(), Some("sync"));
        assert_eq!(bulletin.position, Position::Bottom);
        assert_eq!(bulletin.level, Level::new(1500));
        assert_eq!(bulletin.style.background_effect, BackgroundEffect::BlurDark);
        assert_eq!(bulletin.duration.timeout(), Some(Duration::from_secs(3)));
        assert_eq!(bulletin.style.corner_radius, 14.0);
        assert_eq!(bulletin.info.get("source").map(String::as_str), Some("test"));
    }

    #[test]
    fn test_zero_timeout_is_forever() {
        let bulletin = present(r#"{"present": {"preset": "banner", "timeout_ms": 0}}"#)
            .into_bulletin(&BulletinConfig::default());
        assert!(bulletin.duration.is_forever());
    }

    #[test]
    fn test_hud_and_sheet_geometry() {
        let config = BulletinConfig::default();

        let hud = present(r#"{"present": {"preset": "hud", "screen_width": 600}}"#).into_bulletin(&config);
        assert_eq!(hud.style.edge_insets.left, 200.0);

        let sheet = present(r#"{"present": {"preset": "sheet"}}"#).into_bulletin(&config);
        assert_eq!(sheet.style.edge_insets.bottom, DEFAULT_BOTTOM_SAFE_AREA + 8.0);
    }

    #[test]
    fn test_present_request_delay() {
        let request = parse_line(r#"{"present": {"delay_ms": 250}}"#)
            .unwrap()
            .unwrap()
            .into_request(&BulletinConfig::default())
            .unwrap();

        match request {
            Request::Present { delay, .. } => assert_eq!(delay, Duration::from_millis(250)),
            other => panic!("unexpected request {other:?}"),
        }
    }
}
