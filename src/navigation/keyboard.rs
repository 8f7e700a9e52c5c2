// SPDX-License-Identifier: MPL-2.0
//! Key bindings for page turns.
//!
//! | Key          | Intent     |
//! |--------------|------------|
//! | `ArrowRight` | `Next`     |
//! | `Space`      | `Next`     |
//! | `ArrowLeft`  | `Previous` |

use super::NavigationIntent;
use iced::keyboard::{key::Named, Key};

/// Maps a pressed key to a page turn; unbound keys map to `None`.
#[must_use]
pub fn intent_for_key(key: &Key) -> Option<NavigationIntent> {
    match key {
        Key::Named(Named::ArrowRight | Named::Space) => Some(NavigationIntent::Next),
        Key::Character(c) if c.as_str() == " " => Some(NavigationIntent::Next),
        Key::Named(Named::ArrowLeft) => Some(NavigationIntent::Previous),
        _ => None,
    }
}
