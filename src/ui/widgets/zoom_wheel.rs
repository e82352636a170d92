// SPDX-License-Identifier: MPL-2.0
//! A wrapper that turns Ctrl+wheel over its content into zoom steps.
//!
//! Plain wheel events pass through so the wrapped scrollable keeps scrolling.

use crate::viewport::ZoomDirection;
use iced::advanced::layout::{self, Layout};
use iced::advanced::mouse;
use iced::advanced::overlay;
use iced::advanced::renderer;
use iced::advanced::widget::{self, tree, Tree, Widget};
use iced::advanced::{Clipboard, Shell};
use iced::keyboard;
use iced::{Element, Event, Length, Rectangle, Size};

pub struct ZoomWheel<'a, Message, Theme, Renderer> {
    content: Element<'a, Message, Theme, Renderer>,
    on_zoom: Box<dyn Fn(ZoomDirection) -> Message + 'a>,
}

impl<'a, Message, Theme, Renderer> ZoomWheel<'a, Message, Theme, Renderer> {
    pub fn new(
        content: impl Into<Element<'a, Message, Theme, Renderer>>,
        on_zoom: impl Fn(ZoomDirection) -> Message + 'a,
    ) -> Self {
        Self {
            content: content.into(),
            on_zoom: Box::new(on_zoom),
        }
    }
}

#[derive(Debug, Default)]
struct State {
    modifiers: keyboard::Modifiers,
}

impl<Message, Theme, Renderer> Widget<Message, Theme, Renderer>
    for ZoomWheel<'_, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    fn tag(&self) -> tree::Tag {
        tree::Tag::of::<State>()
    }

    fn state(&self) -> tree::State {
        tree::State::new(State::default())
    }

    fn size(&self) -> Size<Length> {
        self.content.as_widget().size()
    }

    fn layout(
        &mut self,
        tree: &mut Tree,
        renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        self.content
            .as_widget_mut()
            .layout(&mut tree.children[0], renderer, limits)
    }

    fn children(&self) -> Vec<Tree> {
        vec![Tree::new(&self.content)]
    }

    fn diff(&self, tree: &mut Tree) {
        tree.diff_children(&[&self.content]);
    }

    fn draw(
        &self,
        tree: &Tree,
        renderer: &mut Renderer,
        theme: &Theme,
        style: &renderer::Style,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
    ) {
        self.content.as_widget().draw(
            &tree.children[0],
            renderer,
            theme,
            style,
            layout,
            cursor,
            viewport,
        );
    }

    fn update(
        &mut self,
        tree: &mut Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        renderer: &Renderer,
        clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        viewport: &Rectangle,
    ) {
        match event {
            Event::Keyboard(keyboard::Event::ModifiersChanged(modifiers)) => {
                tree.state.downcast_mut::<State>().modifiers = *modifiers;
            }
            Event::Mouse(mouse::Event::WheelScrolled { delta }) => {
                let zooming = tree.state.downcast_ref::<State>().modifiers.command();
                if zooming && cursor.is_over(layout.bounds()) {
                    if let Some(direction) = wheel_direction(delta) {
                        shell.publish((self.on_zoom)(direction));
                    }
                    shell.capture_event();
                    return;
                }
            }
            _ => {}
        }

        self.content.as_widget_mut().update(
            &mut tree.children[0],
            event,
            layout,
            cursor,
            renderer,
            clipboard,
            shell,
            viewport,
        );
    }

    fn mouse_interaction(
        &self,
        tree: &Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
        renderer: &Renderer,
    ) -> mouse::Interaction {
        self.content.as_widget().mouse_interaction(
            &tree.children[0],
            layout,
            cursor,
            viewport,
            renderer,
        )
    }

    fn operate(
        &mut self,
        tree: &mut Tree,
        layout: Layout<'_>,
        renderer: &Renderer,
        operation: &mut dyn widget::Operation,
    ) {
        self.content
            .as_widget_mut()
            .operate(&mut tree.children[0], layout, renderer, operation);
    }

    fn overlay<'b>(
        &'b mut self,
        tree: &'b mut Tree,
        layout: Layout<'b>,
        renderer: &Renderer,
        viewport: &Rectangle,
        translation: iced::Vector,
    ) -> Option<overlay::Element<'b, Message, Theme, Renderer>> {
        self.content.as_widget_mut().overlay(
            &mut tree.children[0],
            layout,
            renderer,
            viewport,
            translation,
        )
    }
}

impl<'a, Message, Theme, Renderer> From<ZoomWheel<'a, Message, Theme, Renderer>>
    for Element<'a, Message, Theme, Renderer>
where
    Message: 'a,
    Theme: 'a,
    Renderer: renderer::Renderer + 'a,
{
    fn from(wrapper: ZoomWheel<'a, Message, Theme, Renderer>) -> Self {
        Self::new(wrapper)
    }
}

/// Wraps `content` so Ctrl+wheel over it emits `on_zoom`.
pub fn zoom_wheel<'a, Message, Theme, Renderer>(
    content: impl Into<Element<'a, Message, Theme, Renderer>>,
    on_zoom: impl Fn(ZoomDirection) -> Message + 'a,
) -> ZoomWheel<'a, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    ZoomWheel::new(content, on_zoom)
}

/// Wheel up zooms in, wheel down zooms out.
fn wheel_direction(delta: &mouse::ScrollDelta) -> Option<ZoomDirection> {
    let y = match delta {
        mouse::ScrollDelta::Lines { y, .. } | mouse::ScrollDelta::Pixels { y, .. } => *y,
    };
    if y > 0.0 {
        Some(ZoomDirection::In)
    } else if y < 0.0 {
        Some(ZoomDirection::Out)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wheel_up_zooms_in() {
        let delta = mouse::ScrollDelta::Lines { x: 0.0, y: 1.0 };
        assert_eq!(wheel_direction(&delta), Some(ZoomDirection::In));
    }

    #[test]
    fn wheel_down_zooms_out() {
        let delta = mouse::ScrollDelta::Pixels { x: 0.0, y: -12.0 };
        assert_eq!(wheel_direction(&delta), Some(ZoomDirection::Out));
    }

    #[test]
    fn horizontal_scroll_does_not_zoom() {
        let delta = mouse::ScrollDelta::Lines { x: 3.0, y: 0.0 };
        assert_eq!(wheel_direction(&delta), None);
    }
}
