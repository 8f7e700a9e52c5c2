// SPDX-License-Identifier: MPL-2.0
//! The book card: progress strip, page header, illustration, story text and
//! the footer with page controls.
//!
//! [`BookView`] derives everything the widgets need from the page slice and
//! the current index, so the layout code below only has to read it.

use crate::i18n::fluent::I18n;
use crate::navigation::{Message, NavigationIntent};
use crate::story::{page_at, StoryPage};
use crate::ui::design_tokens::{border, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::placeholder;
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::font::{Font, Weight};
use iced::widget::{button, Column, Container, Row, Space, Text};
use iced::{alignment, Element, Length, Padding};

/// Derived state for one render of the book.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookView<'a> {
    page: Option<&'a StoryPage>,
    current_page: usize,
    total_pages: usize,
}

impl<'a> BookView<'a> {
    #[must_use]
    pub fn new(pages: &'a [StoryPage], current_page: usize) -> Self {
        Self {
            page: page_at(pages, current_page),
            current_page,
            total_pages: pages.len(),
        }
    }

    /// The visible page, or `None` for an empty book.
    #[must_use]
    pub fn page(&self) -> Option<&'a StoryPage> {
        self.page
    }

    /// One flag per page: `true` for the current page and every page before it.
    #[must_use]
    pub fn progress(&self) -> Vec<bool> {
        (0..self.total_pages)
            .map(|index| index <= self.current_page)
            .collect()
    }

    /// `(index, is_current)` for every dot in the footer.
    #[must_use]
    pub fn dots(&self) -> Vec<(usize, bool)> {
        (0..self.total_pages)
            .map(|index| (index, index == self.current_page))
            .collect()
    }

    #[must_use]
    pub fn can_go_prev(&self) -> bool {
        self.page.is_some() && self.current_page > 0
    }

    #[must_use]
    pub fn can_go_next(&self) -> bool {
        self.current_page + 1 < self.total_pages
    }

    /// Translation key for the "next" control; the last page shows the
    /// closing label instead.
    #[must_use]
    pub fn next_label_key(&self) -> &'static str {
        if self.can_go_next() {
            "nav-next"
        } else {
            "nav-end"
        }
    }

    /// 1-indexed "current / total" counter.
    #[must_use]
    pub fn counter(&self) -> String {
        format!("{} / {}", self.current_page + 1, self.total_pages)
    }
}

/// Everything the book card needs to render.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub colors: &'a ColorScheme,
    pub pages: &'a [StoryPage],
    pub current_page: usize,
}

fn bold() -> Font {
    Font {
        weight: Weight::Bold,
        ..Font::default()
    }
}

/// Renders the book card.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let book = BookView::new(ctx.pages, ctx.current_page);

    let Some(page) = book.page() else {
        return empty_book(ctx.i18n, ctx.colors);
    };

    let story = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::XXL)
        .push(header(&book, page, ctx.colors))
        .push(placeholder::view(ctx.i18n, ctx.colors, page.image_description))
        .push(
            Text::new(page.content)
                .size(typography::BODY_LG)
                .line_height(1.8)
                .color(ctx.colors.body),
        );

    let divider = Container::new(Space::new())
        .width(Length::Fill)
        .height(Length::Fixed(border::WIDTH_SM))
        .style(styles::container::divider(ctx.colors));

    let content = Column::new()
        .push(progress_strip(&book, ctx.colors))
        .push(story)
        .push(divider)
        .push(footer(&book, ctx.i18n, ctx.colors));

    Container::new(content)
        .width(Length::Fill)
        .max_width(sizing::CARD_MAX_WIDTH)
        .style(styles::container::card(ctx.colors))
        .into()
}

/// Hint shown under the card telling readers they can swipe.
pub fn swipe_hint<'a>(i18n: &I18n, colors: &ColorScheme) -> Element<'a, Message> {
    Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(icons::tinted(
            icons::sized(icons::hand_pointer(), typography::BODY),
            colors.muted,
        ))
        .push(
            Text::new(i18n.tr("swipe-hint"))
                .size(typography::CAPTION)
                .color(colors.muted),
        )
        .into()
}

/// Segments run edge to edge along the top of the card.
fn progress_strip<'a>(book: &BookView<'_>, colors: &ColorScheme) -> Element<'a, Message> {
    book.progress()
        .into_iter()
        .fold(Row::new().width(Length::Fill), |row, filled_in| {
            row.push(
                Container::new(Space::new())
                    .width(Length::Fill)
                    .height(Length::Fixed(sizing::PROGRESS_HEIGHT))
                    .style(styles::container::progress_segment(colors, filled_in)),
            )
        })
        .into()
}

fn header<'a>(
    book: &BookView<'_>,
    page: &'a StoryPage,
    colors: &ColorScheme,
) -> Element<'a, Message> {
    let accent = Container::new(Space::new())
        .width(Length::Fixed(sizing::TITLE_ACCENT_WIDTH))
        .height(Length::Fixed(typography::TITLE_LG * 1.25))
        .style(styles::container::title_accent(colors));

    let title = Text::new(page.title)
        .size(typography::TITLE_LG)
        .font(bold())
        .color(colors.title);

    let counter = Container::new(Text::new(book.counter()).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::SM])
        .style(styles::container::counter_badge(colors));

    Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(accent)
        .push(title)
        .push(Space::new().width(Length::Fill))
        .push(counter)
        .into()
}

fn footer<'a>(book: &BookView<'_>, i18n: &I18n, colors: &ColorScheme) -> Element<'a, Message> {
    let tint = |enabled: bool| {
        if enabled {
            colors.accent_strong
        } else {
            colors.disabled
        }
    };

    let prev_content = Row::new()
        .spacing(spacing::XXS)
        .align_y(alignment::Vertical::Center)
        .push(icons::tinted(
            icons::sized(icons::chevron_left(), typography::TITLE_SM),
            tint(book.can_go_prev()),
        ))
        .push(Text::new(i18n.tr("nav-prev")).size(typography::BODY).font(bold()));

    let prev = button(prev_content)
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::page_turn(colors))
        .on_press_maybe(
            book.can_go_prev()
                .then_some(Message::Intent(NavigationIntent::Previous)),
        );

    let next_content = Row::new()
        .spacing(spacing::XXS)
        .align_y(alignment::Vertical::Center)
        .push(
            Text::new(i18n.tr(book.next_label_key()))
                .size(typography::BODY)
                .font(bold()),
        )
        .push(icons::tinted(
            icons::sized(icons::chevron_right(), typography::TITLE_SM),
            tint(book.can_go_next()),
        ));

    let next = button(next_content)
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::page_turn(colors))
        .on_press_maybe(
            book.can_go_next()
                .then_some(Message::Intent(NavigationIntent::Next)),
        );

    let dots = book.dots().into_iter().fold(
        Row::new()
            .spacing(spacing::XS)
            .align_y(alignment::Vertical::Center),
        |row, (index, is_current)| {
            let size = if is_current {
                sizing::DOT_ACTIVE
            } else {
                sizing::DOT
            };
            row.push(
                button(Space::new())
                    .width(Length::Fixed(size))
                    .height(Length::Fixed(size))
                    .padding(Padding::ZERO)
                    .style(styles::button::dot(colors, is_current))
                    .on_press(Message::Intent(NavigationIntent::Jump(index))),
            )
        },
    );

    let controls = Row::new()
        .align_y(alignment::Vertical::Center)
        .push(prev)
        .push(Space::new().width(Length::Fill))
        .push(dots)
        .push(Space::new().width(Length::Fill))
        .push(next);

    Container::new(controls)
        .width(Length::Fill)
        .padding([spacing::MD, spacing::LG])
        .style(styles::container::footer(colors))
        .into()
}

fn empty_book<'a>(i18n: &I18n, colors: &ColorScheme) -> Element<'a, Message> {
    Container::new(
        Text::new(i18n.tr("empty-book"))
            .size(typography::BODY_LG)
            .color(colors.muted),
    )
    .width(Length::Fill)
    .max_width(sizing::CARD_MAX_WIDTH)
    .padding(spacing::XXL)
    .align_x(alignment::Horizontal::Center)
    .style(styles::container::card(colors))
    .into()
}
