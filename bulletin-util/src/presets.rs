//! Ready-made bulletin styles
//!
//! Each preset returns a plain [`Bulletin`] that callers can tweak further.

use crate::{AnimationSettings, BackgroundEffect, Bulletin, DisplayDuration, EdgeInsets, Level, Position};
use std::time::Duration;

const FAST_ANIMATION: Duration = Duration::from_millis(200);

/// A notification styled bulletin, drawn over the status bar.
pub fn notification() -> Bulletin {
    Bulletin {
        level: Level::STATUS_BAR,
        ..Bulletin::default()
    }
}

/// An edge-to-edge banner at the top of the screen.
///
/// Sticky banners stay until dismissed.
pub fn banner(sticky: bool) -> Bulletin {
    let mut bulletin = flat_top_bar();
    bulletin.duration = if sticky {
        DisplayDuration::Forever
    } else {
        DisplayDuration::default()
    };
    bulletin.style.shadow_alpha = 0.08;
    bulletin
}

/// A "toast" over the status bar.
pub fn status_bar() -> Bulletin {
    let mut bulletin = flat_top_bar();
    bulletin.level = Level::STATUS_BAR;
    bulletin.style.shadow_alpha = 0.0;
    bulletin
}

/// A centered modal alert over a darkened background.
pub fn alert() -> Bulletin {
    let mut bulletin = centered_modal();
    bulletin.style.edge_insets = EdgeInsets::symmetric(50.0, 0.0);
    bulletin
}

/// A centered HUD one third of the screen wide, which the background cannot dismiss.
pub fn hud(screen_width: f32) -> Bulletin {
    let mut bulletin = centered_modal();
    bulletin.style.edge_insets = EdgeInsets::symmetric(screen_width.max(0.0) / 3.0, 0.0);
    bulletin.style.background_dismiss_enabled = false;
    bulletin
}

/// A sheet anchored to the bottom edge.
///
/// `bottom_safe_area` is the height of any display feature (home indicator,
/// rounded corners) the sheet has to clear.
pub fn sheet(bottom_safe_area: f32) -> Bulletin {
    let mut bulletin = Bulletin {
        position: Position::Bottom,
        duration: DisplayDuration::Forever,
        ..Bulletin::default()
    };
    let spacing = if bottom_safe_area > 0.0 { 4.0 } else { 8.0 };
    bulletin.style.background_effect = BackgroundEffect::DarkenMedium;
    bulletin.style.stretching_enabled = false;
    bulletin.style.animated_touch_enabled = false;
    bulletin.style.edge_insets = EdgeInsets::symmetric(8.0, bottom_safe_area + spacing);
    bulletin
}

fn flat_top_bar() -> Bulletin {
    let mut bulletin = Bulletin {
        position: Position::Top,
        presentation_animation: AnimationSettings::linear(FAST_ANIMATION),
        ..Bulletin::default()
    };
    bulletin.style.edge_insets = EdgeInsets::zero();
    bulletin.style.square_corners();
    bulletin.style.stretching_enabled = false;
    bulletin.style.animated_touch_enabled = false;
    bulletin
}

fn centered_modal() -> Bulletin {
    let mut bulletin = Bulletin {
        position: Position::Center,
        level: Level::ALERT,
        duration: DisplayDuration::Forever,
        ..Bulletin::default()
    };
    bulletin.style.background_effect = BackgroundEffect::DarkenMedium;
    bulletin.style.corner_radius = 14.0;
    bulletin
}
