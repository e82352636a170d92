// SPDX-License-Identifier: MPL-2.0
//! Centralized container styles.

use crate::config::BackgroundTheme;
use crate::ui::design_tokens::palette;
use iced::widget::container;
use iced::{Background, Theme};

/// Surface behind the image.
pub fn viewer(background: BackgroundTheme) -> impl Fn(&Theme) -> container::Style {
    let color = match background {
        BackgroundTheme::Light => palette::VIEWER_LIGHT,
        BackgroundTheme::Dark => palette::VIEWER_DARK,
    };
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(color)),
        ..container::Style::default()
    }
}

/// Toolbar and status bar strip.
pub fn chrome(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        text_color: Some(palette.background.weak.text),
        ..container::Style::default()
    }
}
