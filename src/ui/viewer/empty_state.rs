// SPDX-License-Identifier: MPL-2.0
//! Empty state view displayed when no image is loaded.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use iced::widget::{button, Column, Container, Text};
use iced::{alignment, Element, Length};

pub fn view(i18n: &I18n) -> Element<'_, Message> {
    let hint = Text::new(i18n.tr("empty-state-hint"))
        .size(typography::BODY)
        .color(palette::GRAY_400);

    let open_button = button(Text::new(i18n.tr("action-open")))
        .padding([spacing::XS, spacing::MD])
        .on_press(Message::OpenFileRequested);

    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(hint)
        .push(open_button);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}
