use crate::Color;
use bulletin_config::BackgroundEffect;

/// Overlay alpha for each darkening strength
pub mod dim_alpha {
    pub const LIGHT: f32 = 0.25;
    pub const MEDIUM: f32 = 0.5;
    pub const HIGH: f32 = 0.75;
}

/// Blur material, mapped by the renderer onto whatever blur it supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum BlurStyle {
    Light,
    ExtraLight,
    Dark,
}

/// What the renderer draws behind a presented bulletin.
#[derive(Debug, Default, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum BackgroundTreatment {
    /// Content behind the bulletin is left untouched.
    #[default]
    None,
    /// A flat overlay of `color` over the content.
    Dim { color: Color },
    Blur(BlurStyle),
}

impl BackgroundTreatment {
    /// Alpha of the dimming overlay; zero unless this is a dim.
    pub fn dim_alpha(&self) -> f32 {
        match self {
            Self::Dim { color } => color.a,
            _ => 0.0,
        }
    }

    pub fn blur_style(&self) -> Option<BlurStyle> {
        match self {
            Self::Blur(style) => Some(*style),
            _ => None,
        }
    }

    /// Whether anything is drawn behind the bulletin at all.
    ///
    /// Only a non-`None` treatment intercepts taps on the background.
    pub fn covers_background(&self) -> bool {
        !matches!(self, Self::None)
    }
}

impl From<BackgroundEffect> for BackgroundTreatment {
    fn from(effect: BackgroundEffect) -> Self {
        match effect {
            BackgroundEffect::None => Self::None,
            BackgroundEffect::DarkenLight => Self::Dim {
                color: Color::BLACK.with_alpha(dim_alpha::LIGHT),
            },
            BackgroundEffect::DarkenMedium => Self::Dim {
                color: Color::BLACK.with_alpha(dim_alpha::MEDIUM),
            },
            BackgroundEffect::DarkenHigh => Self::Dim {
                color: Color::BLACK.with_alpha(dim_alpha::HIGH),
            },
            BackgroundEffect::BlurLight => Self::Blur(BlurStyle::Light),
            BackgroundEffect::BlurExtraLight => Self::Blur(BlurStyle::ExtraLight),
            BackgroundEffect::BlurDark => Self::Blur(BlurStyle::Dark),
        }
    }
}

/// Treatment for a raw background effect code (0-6)
pub fn treatment_from_code(code: i32) -> BackgroundTreatment {
    BackgroundEffect::from(code).into()
}
