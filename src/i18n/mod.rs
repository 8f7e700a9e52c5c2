// SPDX-License-Identifier: MPL-2.0
//! Localization of the viewer chrome (buttons, captions, hints).
//!
//! This module provides localization capabilities using the Fluent localization system.
//! Story content itself is not translated; only the labels around it are.
//!
//! # Features
//!
//! - Locale selection from CLI, config, or system settings
//! - `.ftl` translation files embedded at compile time
//! - Fallback to the default locale when a key is missing

pub mod fluent;
