// SPDX-License-Identifier: MPL-2.0
//! Navigation controller: one entrypoint for every input channel.

use super::gesture::{GestureState, PointerInput};
use super::keyboard::intent_for_key;
use super::pager::{PageChange, Pager};
use super::NavigationIntent;
use iced::keyboard::Key;

/// Inputs the controller understands.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// An intent produced directly by a widget (prev/next buttons, dots).
    Intent(NavigationIntent),
    /// A key press nothing else claimed.
    KeyPressed(Key),
    /// Touch or mouse input used for swipe detection.
    Pointer(PointerInput),
}

/// Navigation state: the bounded page index plus in-flight gesture samples.
#[derive(Debug, Clone, PartialEq)]
pub struct Controller {
    pager: Pager,
    gesture: GestureState,
}

impl Controller {
    #[must_use]
    pub fn new(total_pages: usize, swipe_threshold: f32) -> Self {
        Self {
            pager: Pager::new(total_pages),
            gesture: GestureState::new(swipe_threshold),
        }
    }

    #[must_use]
    pub fn gesture(&self) -> &GestureState {
        &self.gesture
    }

    #[must_use]
    pub fn current_page(&self) -> usize {
        self.pager.current_page()
    }

    pub fn go_next(&mut self) -> Option<PageChange> {
        self.apply(NavigationIntent::Next)
    }

    pub fn go_prev(&mut self) -> Option<PageChange> {
        self.apply(NavigationIntent::Previous)
    }

    pub fn go_to(&mut self, index: usize) -> Option<PageChange> {
        self.apply(NavigationIntent::Jump(index))
    }

    /// Handles one input; returns the page turn it caused, if any.
    pub fn handle(&mut self, message: Message) -> Option<PageChange> {
        let intent = match message {
            Message::Intent(intent) => Some(intent),
            Message::KeyPressed(key) => intent_for_key(&key),
            Message::Pointer(input) => self.gesture.handle(input),
        }?;
        self.apply(intent)
    }

    fn apply(&mut self, intent: NavigationIntent) -> Option<PageChange> {
        let change = self.pager.apply(intent);
        match change {
            Some(PageChange { from, to }) => {
                tracing::debug!(?intent, from, to, "page turned");
            }
            None => {
                tracing::trace!(
                    ?intent,
                    page = self.pager.current_page(),
                    "navigation request left page unchanged"
                );
            }
        }
        change
    }
}
