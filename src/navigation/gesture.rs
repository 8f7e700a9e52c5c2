// SPDX-License-Identifier: MPL-2.0
//! Horizontal swipe detection.
//!
//! A gesture is a start sample, any number of move samples, and an end. Only
//! the start and the *last* move sample matter: the distance between them
//! decides the page turn once the gesture ends. A gesture that never moved
//! turns nothing.
//!
//! Touch and mouse drags feed the same [`SwipeTracker`] through
//! [`GestureState`], which also decides which pointer owns the gesture.

use super::NavigationIntent;
use crate::config::DEFAULT_SWIPE_THRESHOLD;

/// Start/end samples of one horizontal gesture.
#[derive(Debug, Clone, PartialEq)]
pub struct SwipeTracker {
    threshold: f32,
    start_x: Option<f32>,
    end_x: Option<f32>,
}

impl Default for SwipeTracker {
    fn default() -> Self {
        Self::new(DEFAULT_SWIPE_THRESHOLD)
    }
}

impl SwipeTracker {
    #[must_use]
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            start_x: None,
            end_x: None,
        }
    }

    #[must_use]
    pub fn start_x(&self) -> Option<f32> {
        self.start_x
    }

    #[must_use]
    pub fn end_x(&self) -> Option<f32> {
        self.end_x
    }

    /// Begins a gesture at `x`, discarding the end sample of any previous one.
    pub fn start(&mut self, x: f32) {
        self.start_x = Some(x);
        self.end_x = None;
    }

    /// Records the latest position; each sample replaces the previous one.
    pub fn track(&mut self, x: f32) {
        self.end_x = Some(x);
    }

    /// Ends the gesture and clears both samples.
    ///
    /// Returns `Next` for a right-to-left travel beyond the threshold,
    /// `Previous` for left-to-right, and `None` when the travel is within the
    /// threshold or either sample is missing.
    pub fn finish(&mut self) -> Option<NavigationIntent> {
        let start = self.start_x.take();
        let end = self.end_x.take();
        let (Some(start), Some(end)) = (start, end) else {
            return None;
        };
        self.classify(start - end)
    }

    /// Drops the gesture without evaluating it.
    pub fn cancel(&mut self) {
        self.start_x = None;
        self.end_x = None;
    }

    fn classify(&self, distance: f32) -> Option<NavigationIntent> {
        if distance > self.threshold {
            Some(NavigationIntent::Next)
        } else if distance < -self.threshold {
            Some(NavigationIntent::Previous)
        } else {
            None
        }
    }
}

/// Pointer events relevant to swiping, already reduced to horizontal coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerInput {
    TouchStarted { finger: u64, x: f32 },
    TouchMoved { finger: u64, x: f32 },
    TouchEnded { finger: u64 },
    /// The platform lost track of the finger (e.g. the window lost focus).
    TouchLost { finger: u64 },
    CursorMoved { x: f32 },
    /// Left mouse button pressed somewhere no widget claimed the press.
    ButtonPressed,
    ButtonReleased,
    /// The cursor left the window or the window lost focus; a release may
    /// never arrive.
    CursorLost,
}

/// Which pointer owns the gesture in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Owner {
    Finger(u64),
    Mouse,
}

/// Routes touch and mouse input into a [`SwipeTracker`].
///
/// The first pointer to go down owns the gesture; other fingers and mouse
/// buttons are ignored until it ends.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GestureState {
    swipe: SwipeTracker,
    owner: Option<Owner>,
    cursor_x: Option<f32>,
}

impl GestureState {
    #[must_use]
    pub fn new(threshold: f32) -> Self {
        Self {
            swipe: SwipeTracker::new(threshold),
            owner: None,
            cursor_x: None,
        }
    }

    #[must_use]
    pub fn swipe(&self) -> &SwipeTracker {
        &self.swipe
    }

    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.owner.is_some()
    }

    /// Feeds one pointer event; returns the page turn it completes, if any.
    pub fn handle(&mut self, input: PointerInput) -> Option<NavigationIntent> {
        match input {
            PointerInput::TouchStarted { finger, x } => {
                if self.owner.is_none() {
                    self.owner = Some(Owner::Finger(finger));
                    self.swipe.start(x);
                }
                None
            }
            PointerInput::TouchMoved { finger, x } => {
                if self.owner == Some(Owner::Finger(finger)) {
                    self.swipe.track(x);
                }
                None
            }
            PointerInput::TouchEnded { finger } => {
                if self.owner == Some(Owner::Finger(finger)) {
                    self.owner = None;
                    return self.swipe.finish();
                }
                None
            }
            PointerInput::TouchLost { finger } => {
                if self.owner == Some(Owner::Finger(finger)) {
                    self.owner = None;
                    self.swipe.cancel();
                }
                None
            }
            PointerInput::CursorMoved { x } => {
                self.cursor_x = Some(x);
                if self.owner == Some(Owner::Mouse) {
                    self.swipe.track(x);
                }
                None
            }
            PointerInput::ButtonPressed => {
                if self.owner.is_none() {
                    if let Some(x) = self.cursor_x {
                        self.owner = Some(Owner::Mouse);
                        self.swipe.start(x);
                    }
                }
                None
            }
            PointerInput::ButtonReleased => {
                if self.owner == Some(Owner::Mouse) {
                    self.owner = None;
                    return self.swipe.finish();
                }
                None
            }
            PointerInput::CursorLost => {
                self.cursor_x = None;
                if self.owner == Some(Owner::Mouse) {
                    self.owner = None;
                    self.swipe.cancel();
                }
                None
            }
        }
    }
}
