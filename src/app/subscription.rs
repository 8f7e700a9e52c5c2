// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Native keyboard, touch and mouse events are reduced to navigation
//! messages here. Presses a widget already captured (the footer buttons and
//! dots) never reach the keyboard bindings or start a swipe; moves and
//! releases are always forwarded so a gesture can finish over a widget.

use super::Message;
use crate::navigation::{self, PointerInput};
use iced::{event, keyboard, mouse, touch, window, Event, Subscription};

/// Creates the event subscription that feeds page navigation.
///
/// Iced keeps the underlying listener alive exactly as long as the app
/// returns this subscription, so it is released with the window.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| route_event(event, status))
}

/// Maps one native event to a navigation message, if it is relevant.
pub fn route_event(event: Event, status: event::Status) -> Option<Message> {
    let ignored = status == event::Status::Ignored;

    let message = match event {
        Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) if ignored => {
            navigation::Message::KeyPressed(key)
        }
        Event::Touch(touch_event) => {
            navigation::Message::Pointer(touch_input(touch_event, ignored)?)
        }
        Event::Mouse(mouse_event) => {
            navigation::Message::Pointer(mouse_input(mouse_event, ignored)?)
        }
        // The release of a drag in progress will not reach us.
        Event::Window(window::Event::Unfocused) => {
            navigation::Message::Pointer(PointerInput::CursorLost)
        }
        _ => return None,
    };

    Some(Message::Navigation(message))
}

fn touch_input(event: touch::Event, ignored: bool) -> Option<PointerInput> {
    match event {
        touch::Event::FingerPressed { id, position } if ignored => {
            Some(PointerInput::TouchStarted {
                finger: id.0,
                x: position.x,
            })
        }
        touch::Event::FingerPressed { .. } => None,
        touch::Event::FingerMoved { id, position } => Some(PointerInput::TouchMoved {
            finger: id.0,
            x: position.x,
        }),
        touch::Event::FingerLifted { id, .. } => Some(PointerInput::TouchEnded { finger: id.0 }),
        touch::Event::FingerLost { id, .. } => Some(PointerInput::TouchLost { finger: id.0 }),
    }
}

fn mouse_input(event: mouse::Event, ignored: bool) -> Option<PointerInput> {
    match event {
        mouse::Event::CursorMoved { position } => {
            Some(PointerInput::CursorMoved { x: position.x })
        }
        mouse::Event::CursorLeft => Some(PointerInput::CursorLost),
        mouse::Event::ButtonPressed(mouse::Button::Left) if ignored => {
            Some(PointerInput::ButtonPressed)
        }
        mouse::Event::ButtonReleased(mouse::Button::Left) => Some(PointerInput::ButtonReleased),
        _ => None,
    }
}
