// SPDX-License-Identifier: MPL-2.0
//! Status bar: last status message on the left, zoom level on the right.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::viewport::ScaleFactor;
use iced::widget::{Container, Row, Space, Text};
use iced::{alignment::Vertical, Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub message: Option<&'a str>,
    /// `None` when no image is shown.
    pub scale: Option<ScaleFactor>,
}

pub fn view<'a, Message: 'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut row = Row::new()
        .align_y(Vertical::Center)
        .push(Text::new(ctx.message.unwrap_or_default().to_string()).size(typography::CAPTION))
        .push(Space::new().width(Length::Fill));

    if let Some(scale) = ctx.scale {
        row = row.push(Text::new(zoom_label(ctx.i18n, scale)).size(typography::CAPTION));
    }

    Container::new(row)
        .padding([0.0, spacing::XS])
        .width(Length::Fill)
        .height(Length::Fixed(sizing::STATUS_BAR_HEIGHT))
        .align_y(Vertical::Center)
        .style(styles::container::chrome)
        .into()
}

/// Zoom indicator text, e.g. `125%`.
#[must_use]
pub fn zoom_label(i18n: &I18n, scale: ScaleFactor) -> String {
    i18n.tr_with_args(
        "zoom-indicator",
        &[("percent", scale.as_percent().to_string())],
    )
}
