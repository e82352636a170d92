// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The window is a fixed stack: toolbar, viewer pane, status bar.

use super::Message;
use crate::config::BackgroundTheme;
use crate::i18n::fluent::I18n;
use crate::ui::viewer::{self, IcedSurface};
use crate::ui::{status_bar, toolbar};
use crate::viewport::ScaleFactor;
use iced::{
    widget::{Column, Container},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub toolbar: toolbar::ViewContext<'a>,
    pub surface: &'a IcedSurface,
    pub background_theme: BackgroundTheme,
    pub status: Option<&'a str>,
    pub scale: Option<ScaleFactor>,
}

/// Renders the main window.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let toolbar = toolbar::view(ctx.toolbar).map(Message::Toolbar);

    let pane = viewer::pane::view(viewer::pane::ViewContext {
        i18n: ctx.i18n,
        surface: ctx.surface,
        background_theme: ctx.background_theme,
    })
    .map(Message::Viewer);

    let status = status_bar::view(status_bar::ViewContext {
        i18n: ctx.i18n,
        message: ctx.status,
        scale: ctx.scale,
    });

    let column = Column::new()
        .push(toolbar)
        .push(
            Container::new(pane)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .push(status);

    Container::new(column.width(Length::Fill).height(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
