// SPDX-License-Identifier: MPL-2.0
//! Page navigation: the single source of truth for which page is visible.
//!
//! Input channels (keyboard, touch/pointer drag, clicks) are translated into
//! [`NavigationIntent`]s, which the [`Pager`] applies to a bounded page index.
//!
//! - [`pager`] - Bounded page index and the three navigation operations
//! - [`gesture`] - Horizontal swipe detection for touch and pointer drags
//! - [`keyboard`] - Key bindings
//! - [`controller`] - Composes the above behind one message entrypoint

pub mod controller;
pub mod gesture;
pub mod keyboard;
pub mod pager;

pub use controller::{Controller, Message};
pub use gesture::{GestureState, PointerInput, SwipeTracker};
pub use pager::{PageChange, Pager};

/// A request to move through the book, independent of the input that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationIntent {
    /// Turn to the following page.
    Next,
    /// Turn back to the preceding page.
    Previous,
    /// Jump straight to a page (dot indicators).
    Jump(usize),
}
