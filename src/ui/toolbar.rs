// SPDX-License-Identifier: MPL-2.0
//! Toolbar with the file, edit and view actions.
//!
//! Actions that need an image are disabled (no `on_press`) until one is
//! shown; zoom buttons are also disabled at the zoom bounds, and Paste until
//! the clipboard holds an image. Keyboard shortcuts map onto the same
//! messages and obey the same enablement.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::styles;
use iced::widget::{button, rule, Button, Container, Row, Text};
use iced::{alignment::Vertical, Element, Length};

/// Contextual data needed to render the toolbar.
#[derive(Debug, Clone, Copy)]
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub has_image: bool,
    pub can_zoom_in: bool,
    pub can_zoom_out: bool,
    /// The clipboard held an image when last polled.
    pub can_paste: bool,
    pub fit_to_window: bool,
}

/// Messages emitted by the toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Open,
    SaveAs,
    Print,
    Exit,
    Copy,
    Paste,
    ZoomIn,
    ZoomOut,
    NormalSize,
    ToggleFitToWindow,
}

/// Which toolbar actions accept input in the given context.
#[must_use]
pub fn is_enabled(message: Message, ctx: &ViewContext<'_>) -> bool {
    match message {
        Message::Open | Message::Exit => true,
        Message::Paste => ctx.can_paste,
        Message::SaveAs
        | Message::Print
        | Message::Copy
        | Message::NormalSize
        | Message::ToggleFitToWindow => ctx.has_image,
        Message::ZoomIn => ctx.can_zoom_in,
        Message::ZoomOut => ctx.can_zoom_out,
    }
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let action = |key: &str, message: Message| -> Button<'_, Message> {
        let label = button(Text::new(ctx.i18n.tr(key)))
            .padding([spacing::XXS, spacing::XS])
            .height(Length::Fixed(sizing::BUTTON_HEIGHT))
            .style(styles::button::toolbar);
        if is_enabled(message, &ctx) {
            label.on_press(message)
        } else {
            label
        }
    };

    let fit_toggle = {
        let toggle = action("action-fit-window", Message::ToggleFitToWindow);
        if ctx.fit_to_window {
            toggle.style(styles::button::selected)
        } else {
            toggle
        }
    };

    let separator = || rule::vertical(1);

    let row = Row::new()
        .spacing(spacing::XXS)
        .align_y(Vertical::Center)
        .push(action("action-open", Message::Open))
        .push(action("action-save", Message::SaveAs))
        .push(action("action-print", Message::Print))
        .push(separator())
        .push(action("action-copy", Message::Copy))
        .push(action("action-paste", Message::Paste))
        .push(separator())
        .push(action("action-zoom-in", Message::ZoomIn))
        .push(action("action-zoom-out", Message::ZoomOut))
        .push(action("action-normal-size", Message::NormalSize))
        .push(fit_toggle)
        .push(separator())
        .push(action("action-exit", Message::Exit));

    Container::new(row)
        .padding([0.0, spacing::XS])
        .width(Length::Fill)
        .height(Length::Fixed(sizing::TOOLBAR_HEIGHT))
        .align_y(Vertical::Center)
        .style(styles::container::chrome)
        .into()
}
