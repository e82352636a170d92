// SPDX-License-Identifier: MPL-2.0
//! Viewer pane that renders the image inside the scrollable area with the
//! configured background.

use super::{empty_state, IcedSurface, Message, SCROLLABLE_ID};
use crate::config::BackgroundTheme;
use crate::i18n::fluent::I18n;
use crate::ui::styles;
use crate::ui::widgets::zoom_wheel;
use iced::widget::image::{FilterMethod, Image};
use iced::widget::scrollable::{Direction, Scrollbar, Viewport};
use iced::widget::{responsive, Container, Id, Scrollable};
use iced::{Element, Length, Padding, Size};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub surface: &'a IcedSurface,
    pub background_theme: BackgroundTheme,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let background = ctx.background_theme;
    let surface = ctx.surface;
    let content: Element<'_, Message> = match surface.handle() {
        Some(_) => responsive(move |available| image_view(surface, available)).into(),
        None => empty_state::view(ctx.i18n),
    };

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::viewer(background))
        .into()
}

/// Padding that centres content smaller than the available space.
fn calculate_centering_padding(content: Size, available: Size) -> Padding {
    let horizontal = ((available.width - content.width) / 2.0).max(0.0);
    let vertical = ((available.height - content.height) / 2.0).max(0.0);

    Padding {
        top: vertical,
        right: horizontal,
        bottom: vertical,
        left: horizontal,
    }
}

fn image_view(surface: &IcedSurface, available: Size) -> Element<'_, Message> {
    let Some(handle) = surface.handle() else {
        return Container::new(iced::widget::Space::new()).into();
    };
    let size = surface.bitmap_size();
    #[allow(clippy::cast_precision_loss)]
    let bitmap = Size::new(size.width as f32, size.height as f32);

    // The bitmap is already resampled; draw it 1:1.
    let image = Image::new(handle.clone())
        .width(Length::Fixed(bitmap.width))
        .height(Length::Fixed(bitmap.height))
        .filter_method(FilterMethod::Nearest);

    let centred = Container::new(image).padding(calculate_centering_padding(bitmap, available));

    let scrollable = Scrollable::new(centred)
        .id(Id::new(SCROLLABLE_ID))
        .width(Length::Fill)
        .height(Length::Fill)
        .direction(Direction::Both {
            vertical: Scrollbar::default(),
            horizontal: Scrollbar::default(),
        })
        .on_scroll(|viewport: Viewport| Message::ViewportChanged {
            bounds: viewport.bounds(),
            offset: viewport.absolute_offset(),
        });

    zoom_wheel(scrollable, Message::WheelZoom).into()
}
