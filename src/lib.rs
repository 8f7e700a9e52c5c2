// SPDX-License-Identifier: MPL-2.0
//! `ehon` is a small picture-book viewer built with the Iced GUI framework.
//!
//! A fixed story is shown one page at a time. Pages turn with the footer
//! buttons, the dot indicators, the arrow keys and space bar, touch swipes,
//! or a mouse drag across the window.

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod navigation;
pub mod story;
pub mod ui;
