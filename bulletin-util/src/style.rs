use bulletin_config::BackgroundEffect;
use std::time::Duration;

/// RGBA color (values 0.0-1.0)
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }
}

/// Distance between a bulletin and the edges of its container.
#[derive(Debug, Default, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct EdgeInsets {
    pub top: f32,
    pub left: f32,
    pub bottom: f32,
    pub right: f32,
}

impl EdgeInsets {
    pub const fn zero() -> Self {
        Self::symmetric(0.0, 0.0)
    }

    pub const fn symmetric(horizontal: f32, vertical: f32) -> Self {
        Self {
            top: vertical,
            left: horizontal,
            bottom: vertical,
            right: horizontal,
        }
    }
}

/// Presentation animation parameters, handed to the renderer as-is.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AnimationSettings {
    pub duration: Duration,
    pub spring_damping: f32,
    pub spring_velocity: f32,
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(400),
            spring_damping: 0.7,
            spring_velocity: 0.4,
        }
    }
}

impl AnimationSettings {
    /// Linear animation with the given duration.
    pub const fn linear(duration: Duration) -> Self {
        Self {
            duration,
            spring_damping: 0.0,
            spring_velocity: 0.0,
        }
    }

    pub fn is_spring(&self) -> bool {
        self.spring_damping > 0.0 && self.spring_velocity > 0.0
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StyleSettings {
    pub background_effect: BackgroundEffect,
    pub edge_insets: EdgeInsets,

    /// Whether corners are rounded with `corner_radius`.
    pub rounded_corners: bool,
    pub corner_radius: f32,

    /// Dragging away from the anchor edge stretches the bulletin with resistance.
    pub stretching_enabled: bool,
    /// Bulletin shrinks slightly while pressed.
    pub animated_touch_enabled: bool,
    /// Tapping the background effect dismisses the bulletin.
    pub background_dismiss_enabled: bool,

    pub shadow_color: Color,
    /// Shadow offset as `(x, y)`.
    pub shadow_offset: (f32, f32),
    pub shadow_radius: f32,
    pub shadow_alpha: f32,
}

impl Default for StyleSettings {
    fn default() -> Self {
        Self {
            background_effect: BackgroundEffect::None,
            edge_insets: EdgeInsets::symmetric(8.0, 24.0),
            rounded_corners: true,
            corner_radius: 4.0,
            stretching_enabled: true,
            animated_touch_enabled: true,
            background_dismiss_enabled: true,
            shadow_color: Color::BLACK,
            shadow_offset: (0.0, 2.0),
            shadow_radius: 3.0,
            shadow_alpha: 0.15,
        }
    }
}

impl StyleSettings {
    /// Square corners with no radius.
    pub fn square_corners(&mut self) {
        self.rounded_corners = false;
        self.corner_radius = 0.0;
    }

    /// Effective corner radius, zero when corners are not rounded.
    pub fn effective_corner_radius(&self) -> f32 {
        if self.rounded_corners { self.corner_radius } else { 0.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_defaults() {
        let style = StyleSettings::default();

        assert_eq!(style.background_effect, BackgroundEffect::None);
        assert_eq!(style.edge_insets, EdgeInsets::symmetric(8.0, 24.0));
        assert_eq!(style.effective_corner_radius(), 4.0);
        assert!(style.stretching_enabled);
        assert!(style.animated_touch_enabled);
        assert!(style.background_dismiss_enabled);
        assert_eq!(style.shadow_alpha, 0.15);
        assert_eq!(style.shadow_offset, (0.0, 2.0));
    }

    #[test]
    fn test_square_corners() {
        let mut style = StyleSettings::default();
        style.square_corners();
        assert!(!style.rounded_corners);
        assert_eq!(style.effective_corner_radius(), 0.0);
    }

    #[test]
    fn test_unrounded_ignores_radius() {
        let style = StyleSettings {
            rounded_corners: false,
            corner_radius: 12.0,
            ..Default::default()
        };
        assert_eq!(style.effective_corner_radius(), 0.0);
    }

    #[test]
    fn test_edge_insets() {
        let insets = EdgeInsets::symmetric(50.0, 0.0);
        assert_eq!(insets.left, 50.0);
        assert_eq!(insets.right, 50.0);
        assert_eq!(insets.top, 0.0);
        assert_eq!(insets.bottom, 0.0);
        assert_eq!(EdgeInsets::zero(), EdgeInsets::default());
    }

    #[test]
    fn test_animation_spring() {
        assert!(AnimationSettings::default().is_spring());
        assert!(!AnimationSettings::linear(Duration::from_millis(200)).is_spring());

        let half = AnimationSettings {
            spring_velocity: 0.0,
            ..Default::default()
        };
        assert!(!half.is_spring());
    }

    #[test]
    fn test_color_constructors() {
        let rgba = Color::new(1.0, 0.5, 0.0, 0.8);
        assert_eq!(rgba.a, 0.8);

        let dim = Color::BLACK.with_alpha(0.25);
        assert_eq!(dim, Color::new(0.0, 0.0, 0.0, 0.25));
    }
}
