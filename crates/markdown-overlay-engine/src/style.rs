//! # Overlay Styles
//!
//! Presentational descriptors for segment kinds. The tokenizer never
//! touches these; the composer looks each segment's kind up in a
//! [`StyleTable`], which holds exactly one [`Style`] per [`SegmentKind`].
//!
//! [`StyleTable::default`] is the stock dark theme: white Roboto text,
//! monospace code on a dark chip, grey spoilers, blue underlined links.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::tokenize::SegmentKind;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    #[error("invalid hex color: {0}")]
    InvalidHex(String),
    #[error("unknown color name: {0}")]
    UnknownName(String),
}

/// An sRGB color with alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);
    pub const GREY: Color = Color::rgb(0x80, 0x80, 0x80);
    pub const LIGHT_GRAY: Color = Color::rgb(0xd3, 0xd3, 0xd3);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xff }
    }

    /// Parses `#rgb`, `#rrggbb` or `#rrggbbaa`.
    pub fn from_hex(s: &str) -> Result<Self, ColorError> {
        let invalid = || ColorError::InvalidHex(s.to_string());
        let hex = s.strip_prefix('#').ok_or_else(invalid)?;
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
        match hex.len() {
            3 => {
                let nibble = |i: usize| {
                    u8::from_str_radix(&hex[i..i + 1], 16)
                        .map(|v| v * 17)
                        .map_err(|_| invalid())
                };
                Ok(Color::rgb(nibble(0)?, nibble(1)?, nibble(2)?))
            }
            6 => Ok(Color::rgb(channel(0)?, channel(2)?, channel(4)?)),
            8 => Ok(Color {
                r: channel(0)?,
                g: channel(2)?,
                b: channel(4)?,
                a: channel(6)?,
            }),
            _ => Err(invalid()),
        }
    }

    /// `#rrggbb`, or `#rrggbbaa` when not fully opaque.
    pub fn to_hex(self) -> String {
        if self.a == 0xff {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!(
                "#{:02x}{:02x}{:02x}{:02x}",
                self.r, self.g, self.b, self.a
            )
        }
    }
}

impl FromStr for Color {
    type Err = ColorError;

    /// Accepts hex notation or one of the few CSS names the themes use.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.starts_with('#') {
            return Color::from_hex(s);
        }
        match s.to_ascii_lowercase().as_str() {
            "white" => Ok(Color::WHITE),
            "black" => Ok(Color::rgb(0, 0, 0)),
            "grey" | "gray" => Ok(Color::GREY),
            "lightgray" | "lightgrey" => Ok(Color::LIGHT_GRAY),
            "transparent" => Ok(Color {
                r: 0,
                g: 0,
                b: 0,
                a: 0,
            }),
            _ => Err(ColorError::UnknownName(s.to_string())),
        }
    }
}

impl TryFrom<String> for Color {
    type Error = ColorError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Color> for String {
    fn from(c: Color) -> Self {
        c.to_hex()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontWeight {
    #[default]
    Regular,
    Bold,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontSlant {
    #[default]
    Normal,
    Italic,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextDecoration {
    #[default]
    None,
    Underline,
    LineThrough,
}

/// How one segment kind is drawn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Style {
    pub color: Color,
    pub background: Option<Color>,
    pub weight: FontWeight,
    pub slant: FontSlant,
    pub decoration: TextDecoration,
    pub font_family: String,
}

impl Style {
    pub const REGULAR_FAMILY: &'static str = "Roboto_400Regular";
    pub const MONOSPACE_FAMILY: &'static str = "monospace";

    /// White regular text in `family`.
    pub fn plain(family: &str) -> Self {
        Self {
            color: Color::WHITE,
            background: None,
            weight: FontWeight::Regular,
            slant: FontSlant::Normal,
            decoration: TextDecoration::None,
            font_family: family.to_string(),
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_background(mut self, background: Color) -> Self {
        self.background = Some(background);
        self
    }

    pub fn with_weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }

    pub fn with_slant(mut self, slant: FontSlant) -> Self {
        self.slant = slant;
        self
    }

    pub fn with_decoration(mut self, decoration: TextDecoration) -> Self {
        self.decoration = decoration;
        self
    }

    /// Overwrites every field the override sets.
    pub fn apply(&mut self, o: &StyleOverride) {
        if let Some(color) = o.color {
            self.color = color;
        }
        if let Some(background) = o.background {
            self.background = Some(background);
        }
        if let Some(weight) = o.weight {
            self.weight = weight;
        }
        if let Some(slant) = o.slant {
            self.slant = slant;
        }
        if let Some(decoration) = o.decoration {
            self.decoration = decoration;
        }
        if let Some(family) = &o.font_family {
            self.font_family.clone_from(family);
        }
    }
}

/// A partial [`Style`], e.g. from a theme file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleOverride {
    pub color: Option<Color>,
    pub background: Option<Color>,
    pub weight: Option<FontWeight>,
    pub slant: Option<FontSlant>,
    pub decoration: Option<TextDecoration>,
    pub font_family: Option<String>,
}

/// Exactly one [`Style`] per [`SegmentKind`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleTable {
    styles: [Style; SegmentKind::COUNT],
}

impl StyleTable {
    pub fn get(&self, kind: SegmentKind) -> &Style {
        &self.styles[kind.index()]
    }

    pub fn set(&mut self, kind: SegmentKind, style: Style) {
        self.styles[kind.index()] = style;
    }

    /// Applies a partial override to the style of `kind`.
    pub fn apply(&mut self, kind: SegmentKind, o: &StyleOverride) {
        self.styles[kind.index()].apply(o);
    }

    pub fn iter(&self) -> impl Iterator<Item = (SegmentKind, &Style)> {
        SegmentKind::ALL.into_iter().zip(self.styles.iter())
    }
}

impl Default for StyleTable {
    fn default() -> Self {
        Self {
            styles: std::array::from_fn(|i| stock_style(SegmentKind::ALL[i])),
        }
    }
}

fn stock_style(kind: SegmentKind) -> Style {
    let code_bg = Color::rgb(0x2f, 0x31, 0x36);
    let code_fg = Color::rgb(0xc7, 0xc7, 0xc7);
    let link = Color::rgb(0x4e, 0xa1, 0xf3);
    let image = Color::rgb(0xf3, 0xa1, 0x4e);

    let regular = Style::plain(Style::REGULAR_FAMILY);
    match kind {
        SegmentKind::PlainText | SegmentKind::ListLine => regular,
        SegmentKind::Bold => Style::plain("Roboto_700Bold").with_weight(FontWeight::Bold),
        SegmentKind::Italic => {
            Style::plain("Roboto_400Regular_Italic").with_slant(FontSlant::Italic)
        }
        SegmentKind::BoldItalic => Style::plain("Roboto_700Bold_Italic")
            .with_weight(FontWeight::Bold)
            .with_slant(FontSlant::Italic),
        SegmentKind::Underline => regular.with_decoration(TextDecoration::Underline),
        SegmentKind::Strikethrough => regular.with_decoration(TextDecoration::LineThrough),
        SegmentKind::InlineCode | SegmentKind::FencedCode => Style::plain(Style::MONOSPACE_FAMILY)
            .with_color(code_fg)
            .with_background(code_bg),
        SegmentKind::Spoiler => regular.with_background(Color::GREY),
        SegmentKind::LinkText | SegmentKind::LinkUrl | SegmentKind::AutoLinkUrl => regular
            .with_color(link)
            .with_decoration(TextDecoration::Underline),
        SegmentKind::ImageAlt => regular.with_color(image),
        SegmentKind::BlockquoteLine => regular
            .with_color(Color::LIGHT_GRAY)
            .with_slant(FontSlant::Italic),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("#fff", Color::WHITE)]
    #[case("#FFFFFF", Color::WHITE)]
    #[case("#2f3136", Color::rgb(0x2f, 0x31, 0x36))]
    #[case("#11223380", Color { r: 0x11, g: 0x22, b: 0x33, a: 0x80 })]
    fn parses_hex(#[case] input: &str, #[case] expected: Color) {
        assert_eq!(Color::from_hex(input), Ok(expected));
    }

    #[rstest]
    #[case("fff")]
    #[case("#ff")]
    #[case("#ggg")]
    #[case("#12345")]
    #[case("#+1234")]
    #[case("#é12")]
    fn rejects_bad_hex(#[case] input: &str) {
        assert_eq!(
            Color::from_hex(input),
            Err(ColorError::InvalidHex(input.to_string()))
        );
    }

    #[test]
    fn named_colors() {
        assert_eq!("white".parse::<Color>(), Ok(Color::WHITE));
        assert_eq!("Grey".parse::<Color>(), Ok(Color::GREY));
        assert_eq!("lightgray".parse::<Color>(), Ok(Color::LIGHT_GRAY));
        assert_eq!(
            "chartreuse".parse::<Color>(),
            Err(ColorError::UnknownName("chartreuse".into()))
        );
    }

    #[test]
    fn hex_output() {
        assert_eq!(Color::rgb(0x4e, 0xa1, 0xf3).to_hex(), "#4ea1f3");
        assert_eq!(
            Color {
                r: 0,
                g: 0,
                b: 0,
                a: 0
            }
            .to_hex(),
            "#00000000"
        );
    }

    #[test]
    fn every_kind_has_exactly_one_style() {
        let table = StyleTable::default();
        let kinds: Vec<_> = table.iter().map(|(k, _)| k).collect();
        assert_eq!(kinds, SegmentKind::ALL.to_vec());
    }

    #[test]
    fn stock_theme_highlights() {
        let table = StyleTable::default();
        assert_eq!(table.get(SegmentKind::Bold).weight, FontWeight::Bold);
        assert_eq!(table.get(SegmentKind::Italic).slant, FontSlant::Italic);
        assert_eq!(
            table.get(SegmentKind::Strikethrough).decoration,
            TextDecoration::LineThrough
        );
        assert_eq!(table.get(SegmentKind::InlineCode).font_family, "monospace");
        assert_eq!(table.get(SegmentKind::Spoiler).background, Some(Color::GREY));
        assert_eq!(
            table.get(SegmentKind::AutoLinkUrl),
            table.get(SegmentKind::LinkText)
        );
        assert_eq!(table.get(SegmentKind::PlainText).background, None);
    }

    #[test]
    fn override_touches_only_set_fields() {
        let mut table = StyleTable::default();
        let before = table.get(SegmentKind::Bold).clone();
        table.apply(
            SegmentKind::Bold,
            &StyleOverride {
                color: Some(Color::rgb(0xff, 0, 0)),
                ..StyleOverride::default()
            },
        );
        let after = table.get(SegmentKind::Bold);
        assert_eq!(after.color, Color::rgb(0xff, 0, 0));
        assert_eq!(after.weight, before.weight);
        assert_eq!(after.font_family, before.font_family);
    }

    #[test]
    fn set_replaces_one_kind() {
        let mut table = StyleTable::default();
        table.set(SegmentKind::ListLine, Style::plain("Serif"));
        assert_eq!(table.get(SegmentKind::ListLine).font_family, "Serif");
        assert_eq!(
            table.get(SegmentKind::PlainText).font_family,
            Style::REGULAR_FAMILY
        );
    }
}
