// SPDX-License-Identifier: MPL-2.0
//! Light/Dark/System theme handling and the book's color scheme.

use crate::ui::design_tokens::palette;
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

/// Color palette for a theme.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorScheme {
    // Surfaces
    pub background: Color,
    pub card: Color,
    pub footer: Color,
    pub divider: Color,

    // Text
    pub title: Color,
    pub body: Color,
    pub muted: Color,
    pub counter_background: Color,

    // Accent
    pub accent: Color,
    pub accent_strong: Color,
    pub accent_hover: Color,
    pub disabled: Color,

    // Progress strip and dots
    pub progress_track: Color,
    pub dot_inactive: Color,

    // Illustration placeholder
    pub placeholder_background: Color,
    pub placeholder_border: Color,
    pub placeholder_caption: Color,
    pub placeholder_text: Color,

    pub warning: Color,
}

impl ColorScheme {
    /// Light theme (Light mode).
    #[must_use]
    pub fn light() -> Self {
        Self {
            background: palette::SLATE_50,
            card: palette::WHITE,
            footer: palette::SLATE_50,
            divider: palette::SLATE_100,

            title: palette::SLATE_800,
            body: palette::SLATE_700,
            muted: palette::SLATE_400,
            counter_background: palette::SLATE_100,

            accent: palette::BLUE_400,
            accent_strong: palette::BLUE_600,
            accent_hover: palette::BLUE_100,
            disabled: palette::SLATE_300,

            progress_track: palette::GRAY_100,
            dot_inactive: palette::SLATE_300,

            placeholder_background: palette::GRAY_200,
            placeholder_border: palette::GRAY_400,
            placeholder_caption: palette::GRAY_500,
            placeholder_text: palette::GRAY_400,

            warning: palette::WARNING_500,
        }
    }

    /// Dark theme (Dark mode).
    #[must_use]
    pub fn dark() -> Self {
        Self {
            background: palette::SLATE_900,
            card: palette::SLATE_800,
            footer: Color::from_rgb(0.09, 0.13, 0.2),
            divider: palette::SLATE_700,

            title: palette::SLATE_100,
            body: palette::SLATE_300,
            muted: palette::SLATE_400,
            counter_background: palette::SLATE_700,

            accent: palette::BLUE_400,
            accent_strong: palette::BLUE_200,
            accent_hover: palette::SLATE_700,
            disabled: palette::SLATE_700,

            progress_track: palette::SLATE_700,
            dot_inactive: palette::SLATE_400,

            placeholder_background: palette::GRAY_700,
            placeholder_border: palette::GRAY_500,
            placeholder_caption: palette::GRAY_200,
            placeholder_text: palette::GRAY_400,

            warning: palette::WARNING_500,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            // The book is designed on a light page; only an explicit dark
            // system preference switches it.
            ThemeMode::System => matches!(dark_light::detect(), Ok(dark_light::Mode::Dark)),
        }
    }
}

/// Resolved theme: the colors selected by the configured mode.
#[derive(Debug, Clone)]
pub struct AppTheme {
    pub colors: ColorScheme,
    dark: bool,
}

impl AppTheme {
    #[must_use]
    pub fn new(mode: ThemeMode) -> Self {
        let dark = mode.is_dark();
        let colors = if dark {
            ColorScheme::dark()
        } else {
            ColorScheme::light()
        };

        Self { colors, dark }
    }

    #[must_use]
    pub fn is_dark(&self) -> bool {
        self.dark
    }

    /// Iced base theme matching the resolved mode.
    #[must_use]
    pub fn iced_theme(&self) -> Theme {
        if self.dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}
