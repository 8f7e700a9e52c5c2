// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Swipe**: Gesture threshold and its bounds
//! - **Locale**: Fallback UI language

// ==========================================================================
// Swipe Defaults
// ==========================================================================

/// Minimum horizontal travel (logical pixels) before a drag turns the page.
pub const DEFAULT_SWIPE_THRESHOLD: f32 = 50.0;

/// Smallest accepted swipe threshold.
pub const MIN_SWIPE_THRESHOLD: f32 = 10.0;

/// Largest accepted swipe threshold.
pub const MAX_SWIPE_THRESHOLD: f32 = 400.0;

// ==========================================================================
// Locale Defaults
// ==========================================================================

/// Locale used when neither CLI, config, nor OS select an available one.
pub const DEFAULT_LOCALE: &str = "ja";

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_SWIPE_THRESHOLD > 0.0);
    assert!(MAX_SWIPE_THRESHOLD > MIN_SWIPE_THRESHOLD);
    assert!(DEFAULT_SWIPE_THRESHOLD >= MIN_SWIPE_THRESHOLD);
    assert!(DEFAULT_SWIPE_THRESHOLD <= MAX_SWIPE_THRESHOLD);
};
