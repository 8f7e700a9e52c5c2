// SPDX-License-Identifier: MPL-2.0
//! Illustration placeholder drawn where a page's picture will go.
//!
//! Shows a picture icon, a caption and the page's image description in a
//! dashed-looking frame. Nothing in here reacts to input.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::font::{Font, Style};
use iced::widget::{Column, Container, Text};
use iced::{alignment, Element, Length};

fn italic() -> Font {
    Font {
        style: Style::Italic,
        ..Font::default()
    }
}

/// Renders the placeholder for a page whose illustration reads
/// `description`.
pub fn view<'a, M: 'a>(
    i18n: &I18n,
    colors: &ColorScheme,
    description: &'a str,
) -> Element<'a, M> {
    let icon = icons::tinted(
        icons::sized(icons::image(), sizing::ICON_XL),
        colors.placeholder_text,
    );

    let caption = Text::new(i18n.tr("placeholder-caption"))
        .size(typography::CAPTION)
        .color(colors.placeholder_caption);

    let description = Text::new(description)
        .size(typography::CAPTION)
        .font(italic())
        .color(colors.placeholder_text)
        .align_x(alignment::Horizontal::Center);

    let content = Column::new()
        .spacing(spacing::XS)
        .padding(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(icon)
        .push(caption)
        .push(description);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::PLACEHOLDER_HEIGHT))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::container::placeholder(colors))
        .into()
}
