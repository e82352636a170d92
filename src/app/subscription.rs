// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Routes native window and keyboard events to top-level messages. Mouse
//! wheel zoom is handled by the viewer pane itself. The clipboard has no
//! change notification, so it is polled.

use super::Message;
use crate::ui::toolbar;
use iced::time::{self, Instant};
use iced::{event, keyboard, window, Event, Subscription};
use std::time::Duration;

/// How often the clipboard is checked for an image.
pub const CLIPBOARD_POLL_INTERVAL: Duration = Duration::from_secs(1);

pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| match event {
        Event::Window(window::Event::Opened { size, .. } | window::Event::Resized(size)) => {
            Some(Message::WindowResized(size))
        }
        Event::Window(window::Event::FileDropped(path)) => Some(Message::FileDropped(path)),
        Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => match status {
            event::Status::Ignored => shortcut(&key, modifiers).map(Message::Toolbar),
            event::Status::Captured => None,
        },
        _ => None,
    })
}

/// Creates the periodic clipboard check.
pub fn create_clipboard_subscription() -> Subscription<Message> {
    time::every(CLIPBOARD_POLL_INTERVAL).map(clipboard_poll)
}

fn clipboard_poll(_at: Instant) -> Message {
    Message::ClipboardPoll
}

/// Maps a key press to the toolbar action it triggers.
#[must_use]
pub fn shortcut(key: &keyboard::Key, modifiers: keyboard::Modifiers) -> Option<toolbar::Message> {
    if !modifiers.command() {
        return None;
    }
    let keyboard::Key::Character(c) = key else {
        return None;
    };
    let action = match c.to_lowercase().as_str() {
        "o" => toolbar::Message::Open,
        "s" => toolbar::Message::SaveAs,
        "p" => toolbar::Message::Print,
        "q" => toolbar::Message::Exit,
        "c" => toolbar::Message::Copy,
        "v" => toolbar::Message::Paste,
        "=" | "+" => toolbar::Message::ZoomIn,
        "-" => toolbar::Message::ZoomOut,
        "0" => toolbar::Message::NormalSize,
        "f" => toolbar::Message::ToggleFitToWindow,
        _ => return None,
    };
    Some(action)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(c: &str) -> keyboard::Key {
        keyboard::Key::Character(c.into())
    }

    #[test]
    fn command_letters_map_to_actions() {
        let ctrl = keyboard::Modifiers::COMMAND;
        assert_eq!(shortcut(&key("o"), ctrl), Some(toolbar::Message::Open));
        assert_eq!(shortcut(&key("V"), ctrl), Some(toolbar::Message::Paste));
        assert_eq!(shortcut(&key("+"), ctrl), Some(toolbar::Message::ZoomIn));
        assert_eq!(shortcut(&key("="), ctrl), Some(toolbar::Message::ZoomIn));
        assert_eq!(shortcut(&key("-"), ctrl), Some(toolbar::Message::ZoomOut));
        assert_eq!(shortcut(&key("0"), ctrl), Some(toolbar::Message::NormalSize));
        assert_eq!(
            shortcut(&key("f"), ctrl),
            Some(toolbar::Message::ToggleFitToWindow)
        );
    }

    #[test]
    fn clipboard_ticks_become_polls() {
        assert!(matches!(clipboard_poll(Instant::now()), Message::ClipboardPoll));
        assert!(CLIPBOARD_POLL_INTERVAL >= Duration::from_millis(500));
    }

    #[test]
    fn plain_letters_are_ignored() {
        assert_eq!(shortcut(&key("o"), keyboard::Modifiers::empty()), None);
    }

    #[test]
    fn unmapped_keys_are_ignored() {
        assert_eq!(shortcut(&key("x"), keyboard::Modifiers::COMMAND), None);
        assert_eq!(
            shortcut(
                &keyboard::Key::Named(keyboard::key::Named::Enter),
                keyboard::Modifiers::COMMAND
            ),
            None
        );
    }
}
