// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::border::Radius;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

fn filled(color: Color) -> container::Style {
    container::Style {
        background: Some(Background::Color(color)),
        ..Default::default()
    }
}

/// Window background behind the card.
pub fn page(colors: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let background = colors.background;
    move |_theme: &Theme| filled(background)
}

/// The book card itself.
pub fn card(colors: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let background = colors.card;
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(background)),
        border: Border {
            radius: radius::XL.into(),
            ..Default::default()
        },
        shadow: shadow::XL,
        ..Default::default()
    }
}

/// Footer strip holding the page controls; only its bottom corners follow
/// the card's rounding.
pub fn footer(colors: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let background = colors.footer;
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(background)),
        border: Border {
            radius: Radius {
                top_left: radius::NONE,
                top_right: radius::NONE,
                bottom_right: radius::XL,
                bottom_left: radius::XL,
            },
            ..Default::default()
        },
        ..Default::default()
    }
}

/// One-pixel rule between the story and the footer.
pub fn divider(colors: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let color = colors.divider;
    move |_theme: &Theme| filled(color)
}

/// One segment of the progress strip.
pub fn progress_segment(
    colors: &ColorScheme,
    filled_in: bool,
) -> impl Fn(&Theme) -> container::Style {
    let color = if filled_in {
        colors.accent
    } else {
        colors.progress_track
    };
    move |_theme: &Theme| filled(color)
}

/// Vertical accent bar to the left of the title.
pub fn title_accent(colors: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let color = colors.accent;
    move |_theme: &Theme| filled(color)
}

/// Pill behind the "3 / 6" counter.
pub fn counter_badge(colors: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let background = colors.counter_background;
    let text = colors.muted;
    move |_theme: &Theme| container::Style {
        text_color: Some(text),
        background: Some(Background::Color(background)),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Illustration placeholder frame.
pub fn placeholder(colors: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let background = colors.placeholder_background;
    let outline = colors.placeholder_border;
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(background)),
        border: Border {
            color: outline,
            width: border::WIDTH_MD,
            radius: radius::LG.into(),
        },
        ..Default::default()
    }
}

/// Banner shown when the settings file could not be used.
pub fn warning_banner(colors: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let color = colors.warning;
    move |_theme: &Theme| container::Style {
        text_color: Some(color),
        border: Border {
            color,
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        ..Default::default()
    }
}
