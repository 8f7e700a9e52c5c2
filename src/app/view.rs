// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Lays the book card out on the page background, with the swipe hint
//! under it and, when the settings file could not be used, a warning banner
//! above it.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::story::StoryPage;
use crate::ui::book;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::AppTheme;
use iced::widget::{Column, Container, Text};
use iced::{alignment, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub theme: &'a AppTheme,
    pub pages: &'a [StoryPage],
    pub current_page: usize,
    /// Translation key of the config warning to show, if any.
    pub config_warning: Option<&'static str>,
}

/// Renders the whole window.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let colors = &ctx.theme.colors;

    let card = book::view(book::ViewContext {
        i18n: ctx.i18n,
        colors,
        pages: ctx.pages,
        current_page: ctx.current_page,
    })
    .map(Message::Navigation);

    let mut column = Column::new()
        .spacing(spacing::LG)
        .width(Length::Fill)
        .max_width(sizing::CARD_MAX_WIDTH)
        .align_x(alignment::Horizontal::Center);

    if let Some(key) = ctx.config_warning {
        let banner = Container::new(Text::new(ctx.i18n.tr(key)).size(typography::CAPTION))
            .width(Length::Fill)
            .padding([spacing::XS, spacing::MD])
            .style(styles::container::warning_banner(colors));
        column = column.push(banner);
    }

    column = column
        .push(card)
        .push(book::swipe_hint(ctx.i18n, colors).map(Message::Navigation));

    Container::new(column)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::XL)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::container::page(colors))
        .into()
}
