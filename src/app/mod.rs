// SPDX-License-Identifier: MPL-2.0
//! Application root state and the Iced wiring around it.
//!
//! The `App` struct owns the navigation controller, the localization bundle
//! and the resolved theme. Every input ends up as a navigation message;
//! `update` never schedules follow-up work.

mod message;
pub mod paths;
mod subscription;
mod view;

pub use message::{Flags, Message};
pub use subscription::route_event;

use crate::config::{self, Config};
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::navigation::Controller;
use crate::story::{page_at, StoryPage, STORY_PAGES};
use crate::ui::theming::AppTheme;
use iced::{window, Element, Subscription, Task, Theme};

/// Root Iced application state.
#[derive(Debug)]
pub struct App {
    i18n: I18n,
    theme: AppTheme,
    navigation: Controller,
    pages: &'static [StoryPage],
    /// Translation key of the warning produced while loading the config.
    config_warning: Option<&'static str>,
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 900;
pub const WINDOW_DEFAULT_WIDTH: u32 = 800;
pub const MIN_WINDOW_HEIGHT: u32 = 640;
pub const MIN_WINDOW_WIDTH: u32 = 420;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads the user config and builds the initial state from `flags`.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, warning) = config::load();
        (Self::with_config(flags, &config, warning.as_ref()), Task::none())
    }

    /// Builds the state from an already loaded config, starting on the
    /// first page of the bundled book.
    pub fn with_config(flags: Flags, config: &Config, warning: Option<&Error>) -> Self {
        if let Some(err) = warning {
            tracing::warn!(error = %err, "settings file ignored, using defaults");
        }

        let pages = STORY_PAGES;
        let threshold = config.navigation.swipe_threshold();
        tracing::info!(
            pages = pages.len(),
            swipe_threshold = threshold,
            "opening book"
        );

        Self {
            i18n: I18n::new(flags.lang, config),
            theme: AppTheme::new(config.general.theme_mode),
            navigation: Controller::new(pages.len(), threshold),
            pages,
            config_warning: warning.map(Error::i18n_key),
        }
    }

    #[must_use]
    pub fn current_page(&self) -> usize {
        self.navigation.current_page()
    }

    #[must_use]
    pub fn i18n(&self) -> &I18n {
        &self.i18n
    }

    #[must_use]
    pub fn config_warning(&self) -> Option<&'static str> {
        self.config_warning
    }

    /// `"<page title> - <app name>"`, or just the app name for an empty book.
    pub fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match page_at(self.pages, self.current_page()) {
            Some(page) => format!("{} - {app_name}", page.title),
            None => app_name,
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme.iced_theme()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription()
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Navigation(message) => {
                self.navigation.handle(message);
            }
        }
        Task::none()
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            theme: &self.theme,
            pages: self.pages,
            current_page: self.current_page(),
            config_warning: self.config_warning,
        })
    }
}
