use crate::canvas::{Canvas, Color};
use crate::draw;
use std::str::FromStr;

/// Solid colour used for keys that name no style.
pub const FALLBACK_COLOR: Color = Color::hex(0x2d1f4e);

/// Every procedural artwork style, addressed by its texture key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TextureStyle {
    AbstractPurple,
    AbstractBlue,
    AbstractIndigo,
    BrutalistBlue,
    GeometricDark,
    MythologyRed,
    MythologyDark,
    AiPortrait,
    GlitchArt,
    DataViz,
    TextileGreen,
    NightCity,
    GoldenLight,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("no texture style named {0:?}")]
pub struct ParseStyleError(pub String);

impl TextureStyle {
    pub const ALL: [TextureStyle; 13] = [
        TextureStyle::AbstractPurple,
        TextureStyle::AbstractBlue,
        TextureStyle::AbstractIndigo,
        TextureStyle::BrutalistBlue,
        TextureStyle::GeometricDark,
        TextureStyle::MythologyRed,
        TextureStyle::MythologyDark,
        TextureStyle::AiPortrait,
        TextureStyle::GlitchArt,
        TextureStyle::DataViz,
        TextureStyle::TextileGreen,
        TextureStyle::NightCity,
        TextureStyle::GoldenLight,
    ];

    pub fn key(self) -> &'static str {
        match self {
            TextureStyle::AbstractPurple => "abstract-purple",
            TextureStyle::AbstractBlue => "abstract-blue",
            TextureStyle::AbstractIndigo => "abstract-indigo",
            TextureStyle::BrutalistBlue => "brutalist-blue",
            TextureStyle::GeometricDark => "geometric-dark",
            TextureStyle::MythologyRed => "mythology-red",
            TextureStyle::MythologyDark => "mythology-dark",
            TextureStyle::AiPortrait => "ai-portrait",
            TextureStyle::GlitchArt => "glitch-art",
            TextureStyle::DataViz => "data-viz",
            TextureStyle::TextileGreen => "textile-green",
            TextureStyle::NightCity => "night-city",
            TextureStyle::GoldenLight => "golden-light",
        }
    }

    /// Dominant hue, used to tint the artwork detail card.
    pub fn accent(self) -> Color {
        match self {
            TextureStyle::AbstractPurple => Color::hex(0x6b21a8),
            TextureStyle::AbstractBlue | TextureStyle::BrutalistBlue => Color::hex(0x2563eb),
            TextureStyle::AbstractIndigo => Color::hex(0x4338ca),
            TextureStyle::MythologyRed => Color::hex(0xdc2626),
            TextureStyle::MythologyDark => Color::hex(0x92400e),
            TextureStyle::AiPortrait => Color::hex(0x7c3aed),
            TextureStyle::TextileGreen => Color::hex(0x16a34a),
            TextureStyle::GeometricDark
            | TextureStyle::GlitchArt
            | TextureStyle::DataViz
            | TextureStyle::NightCity
            | TextureStyle::GoldenLight => FALLBACK_COLOR,
        }
    }

    /// Draw this style onto `canvas`. Uses only the canvas size.
    pub fn paint(self, canvas: &mut Canvas) {
        match self {
            TextureStyle::AbstractPurple => draw::abstract_purple(canvas),
            TextureStyle::AbstractBlue => draw::abstract_blue(canvas),
            TextureStyle::AbstractIndigo => draw::abstract_indigo(canvas),
            TextureStyle::BrutalistBlue => draw::brutalist_blue(canvas),
            TextureStyle::GeometricDark => draw::geometric_dark(canvas),
            TextureStyle::MythologyRed => draw::mythology_red(canvas),
            TextureStyle::MythologyDark => draw::mythology_dark(canvas),
            TextureStyle::AiPortrait => draw::ai_portrait(canvas),
            TextureStyle::GlitchArt => draw::glitch_art(canvas),
            TextureStyle::DataViz => draw::data_viz(canvas),
            TextureStyle::TextileGreen => draw::textile_green(canvas),
            TextureStyle::NightCity => draw::night_city(canvas),
            TextureStyle::GoldenLight => draw::golden_light(canvas),
        }
    }
}

impl std::fmt::Display for TextureStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for TextureStyle {
    type Err = ParseStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TextureStyle::ALL
            .into_iter()
            .find(|style| style.key() == s)
            .ok_or_else(|| ParseStyleError(s.to_string()))
    }
}
