// SPDX-License-Identifier: MPL-2.0
//! User interface components and styling.
//!
//! Views are plain functions from state to widgets; they emit
//! [`crate::navigation::Message`]s and keep no state of their own.
//!
//! - [`book`] - The book card: progress, header, story text and page controls
//! - [`placeholder`] - Stand-in for a page's illustration
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`icons`] - Embedded SVG icons

pub mod book;
pub mod design_tokens;
pub mod icons;
pub mod placeholder;
pub mod styles;
pub mod theming;
