// SPDX-License-Identifier: MPL-2.0
//! Button styles for the footer controls.

use crate::ui::design_tokens::{radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Previous/next page buttons: text-only pills that tint on hover and fade
/// out when the book boundary disables them.
pub fn page_turn(colors: &ColorScheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    let accent = colors.accent_strong;
    let hover = colors.accent_hover;
    let disabled = colors.disabled;

    move |_theme: &Theme, status: button::Status| {
        let (background, text_color) = match status {
            button::Status::Hovered | button::Status::Pressed => (Some(hover), accent),
            button::Status::Disabled => (None, disabled),
            button::Status::Active => (None, accent),
        };

        button::Style {
            background: background.map(Background::Color),
            text_color,
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Page dot; the dot of the visible page uses the accent color.
pub fn dot(
    colors: &ColorScheme,
    is_current: bool,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    let fill = if is_current {
        colors.accent
    } else {
        colors.dot_inactive
    };
    let hover = colors.accent_strong;

    move |_theme: &Theme, status: button::Status| {
        let color = match status {
            button::Status::Hovered if !is_current => Color { a: 0.7, ..hover },
            _ => fill,
        };

        button::Style {
            background: Some(Background::Color(color)),
            text_color: color,
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_page_turn_button_uses_disabled_color() {
        let colors = ColorScheme::light();
        let style = page_turn(&colors)(&Theme::Light, button::Status::Disabled);
        assert_eq!(style.text_color, colors.disabled);
        assert!(style.background.is_none());
    }

    #[test]
    fn hovered_page_turn_button_is_tinted() {
        let colors = ColorScheme::light();
        let style = page_turn(&colors)(&Theme::Light, button::Status::Hovered);
        assert_eq!(style.background, Some(Background::Color(colors.accent_hover)));
    }

    #[test]
    fn current_dot_is_accented() {
        let colors = ColorScheme::light();
        let current = dot(&colors, true)(&Theme::Light, button::Status::Active);
        let other = dot(&colors, false)(&Theme::Light, button::Status::Active);

        assert_eq!(current.background, Some(Background::Color(colors.accent)));
        assert_eq!(other.background, Some(Background::Color(colors.dot_inactive)));
    }
}
