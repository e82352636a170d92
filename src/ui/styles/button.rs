// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    palette::{self, WHITE},
    radius,
};
use iced::widget::button;
use iced::{Background, Border, Theme};

/// Toolbar action: flat until hovered, greyed when disabled.
pub fn toolbar(theme: &Theme, status: button::Status) -> button::Style {
    let text_color = theme.palette().text;
    match status {
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette::GRAY_700)),
            text_color: WHITE,
            border: Border {
                radius: radius::SM.into(),
                ..Border::default()
            },
            ..button::Style::default()
        },
        button::Status::Disabled => button::Style {
            text_color: palette::GRAY_400,
            ..button::Style::default()
        },
        button::Status::Active => button::Style {
            text_color,
            ..button::Style::default()
        },
    }
}

/// Style for a checked toggle in the toolbar.
pub fn selected(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => palette::PRIMARY_400,
        _ => palette::PRIMARY_500,
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            color: palette::PRIMARY_600,
            width: 1.0,
            radius: radius::SM.into(),
        },
        ..button::Style::default()
    }
}
