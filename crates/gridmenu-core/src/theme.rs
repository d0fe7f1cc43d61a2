//! Region themes.
//!
//! Background and icon assets for each theme are resolved by the
//! [`AssetProvider`](crate::host::AssetProvider); the menu only tracks which
//! theme is active and the colors it draws with.

use crate::render::Color;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Theme {
    #[default]
    NtscU,
    NtscJ,
    Pal,
}

/// Icon set tint used by a theme.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum IconTone {
    White,
    Black,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ThemeStyle {
    pub text_color: Color,
    pub highlight_color: Color,
    pub icon_tone: IconTone,
}

impl Theme {
    pub const fn next(self) -> Self {
        match self {
            Self::NtscU => Self::NtscJ,
            Self::NtscJ => Self::Pal,
            Self::Pal => Self::NtscU,
        }
    }

    pub const fn style(self) -> ThemeStyle {
        match self {
            Self::NtscU => ThemeStyle {
                text_color: Color::WHITE,
                highlight_color: Color::ORANGE_U,
                icon_tone: IconTone::White,
            },
            Self::NtscJ => ThemeStyle {
                text_color: Color::BLACK,
                highlight_color: Color::ORANGE_J,
                icon_tone: IconTone::Black,
            },
            Self::Pal => ThemeStyle {
                text_color: Color::BLACK,
                highlight_color: Color::BLUE,
                icon_tone: IconTone::Black,
            },
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::NtscU => "NTSC-U",
            Self::NtscJ => "NTSC-J",
            Self::Pal => "PAL",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn themes_cycle_through_all_regions() {
        assert_eq!(Theme::NtscU.next(), Theme::NtscJ);
        assert_eq!(Theme::NtscJ.next(), Theme::Pal);
        assert_eq!(Theme::Pal.next(), Theme::NtscU);
    }

    #[test]
    fn us_theme_uses_light_text() {
        let style = Theme::NtscU.style();
        assert_eq!(style.text_color, Color::WHITE);
        assert_eq!(style.icon_tone, IconTone::White);
        assert_eq!(Theme::Pal.style().highlight_color, Color::BLUE);
    }
}
