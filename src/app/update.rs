// SPDX-License-Identifier: MPL-2.0
//! Message handling for the application.
//!
//! Viewer operations are forwarded to the controller as [`ViewerEvent`]s;
//! everything that needs user interaction (dialogs, notices) is returned as a
//! `Task`.

use super::dialogs::{self, DialogText};
use super::message::{Message, Retry};
use super::persistence;
use super::{viewport_for_window, App};
use crate::application::port::{ImageCodec, ScrollOffsets, ViewportSize};
use crate::error::{Error, Result};
use crate::print::PageLayout;
use crate::ui::toolbar;
use crate::ui::viewer::{self, SCROLLABLE_ID};
use crate::viewport::{Collaborators, DisplayMode, ViewerEvent, ZoomDirection};
use iced::widget::{operation, Id};
use iced::Task;
use std::path::Path;

pub(super) fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::Toolbar(action) => handle_action(app, action),
        Message::Viewer(viewer::Message::ViewportChanged { bounds, offset }) => {
            app.surface.track_scroll(ScrollOffsets::new(offset.x, offset.y));
            resize_viewport(app, ViewportSize::new(bounds.width, bounds.height))
        }
        Message::Viewer(viewer::Message::WheelZoom(direction)) => {
            let action = match direction {
                ZoomDirection::In => toolbar::Message::ZoomIn,
                ZoomDirection::Out => toolbar::Message::ZoomOut,
            };
            handle_action(app, action)
        }
        Message::Viewer(viewer::Message::OpenFileRequested) => {
            handle_action(app, toolbar::Message::Open)
        }
        Message::WindowResized(size) => resize_viewport(app, viewport_for_window(size)),
        Message::ClipboardPoll => {
            if let Err(err) = dispatch(app, ViewerEvent::ClipboardChanged) {
                tracing::debug!("clipboard check failed: {err}");
            }
            Task::none()
        }
        Message::FileDropped(path) => open_path(app, &path, None),
        Message::OpenDialogResult(Some(path)) => {
            remember_dialog_directory(app, &path);
            open_path(app, &path, Some(Retry::Open))
        }
        Message::SaveDialogResult(Some(path)) => {
            remember_dialog_directory(app, &path);
            save_to(app, &path)
        }
        Message::OpenDialogResult(None) | Message::SaveDialogResult(None) => Task::none(),
        Message::NoticeClosed(Some(Retry::Open)) => open_dialog(app),
        Message::NoticeClosed(Some(Retry::Save)) => save_dialog(app),
        Message::NoticeClosed(None) => Task::none(),
    }
}

/// Runs a toolbar action (button, shortcut or wheel) if it is enabled.
fn handle_action(app: &mut App, action: toolbar::Message) -> Task<Message> {
    if !toolbar::is_enabled(action, &app.toolbar_context()) {
        return Task::none();
    }

    match action {
        toolbar::Message::Open => open_dialog(app),
        toolbar::Message::SaveAs => save_dialog(app),
        toolbar::Message::Print => print(app),
        toolbar::Message::Exit => iced::exit(),
        toolbar::Message::Copy => copy(app),
        toolbar::Message::Paste => paste(app),
        toolbar::Message::ZoomIn => {
            apply_view_event(app, ViewerEvent::ZoomRequested(ZoomDirection::In))
        }
        toolbar::Message::ZoomOut => {
            apply_view_event(app, ViewerEvent::ZoomRequested(ZoomDirection::Out))
        }
        toolbar::Message::NormalSize => apply_view_event(app, ViewerEvent::LiteralSizeRequested),
        toolbar::Message::ToggleFitToWindow => {
            let event = if app.controller.mode() == DisplayMode::Fit {
                ViewerEvent::LiteralSizeRequested
            } else {
                ViewerEvent::FitRequested
            };
            apply_view_event(app, event)
        }
    }
}

fn dispatch(app: &mut App, event: ViewerEvent) -> Result<()> {
    app.controller.dispatch(
        event,
        Collaborators {
            codec: &app.codec,
            clipboard: &mut app.clipboard,
            surface: &mut app.surface,
        },
    )
}

/// Zoom, literal size and fit: none of these can fail.
fn apply_view_event(app: &mut App, event: ViewerEvent) -> Task<Message> {
    if let Err(err) = dispatch(app, event) {
        return notice(app, &err, None);
    }
    let fit = app.controller.mode() == DisplayMode::Fit;
    if persistence::remember_fit_to_window(&mut app.config, fit) {
        persistence::persist_preferences(&app.config, app.config_dir.clone());
    }
    scroll_task(app)
}

fn resize_viewport(app: &mut App, size: ViewportSize) -> Task<Message> {
    if !app.surface.set_viewport(size) {
        return Task::none();
    }
    if let Err(err) = dispatch(app, ViewerEvent::Resized(size)) {
        tracing::warn!("resize failed: {err}");
    }
    scroll_task(app)
}

fn open_path(app: &mut App, path: &Path, retry: Option<Retry>) -> Task<Message> {
    match dispatch(app, ViewerEvent::FileOpened(path.to_path_buf())) {
        Ok(()) => {
            app.current_file = Some(path.to_path_buf());
            app.status = app.image_status();
            remember_dialog_directory(app, path);
            if persistence::remember_directory(&mut app.config, path) {
                persistence::persist_preferences(&app.config, app.config_dir.clone());
            }
            scroll_task(app)
        }
        Err(err) => {
            tracing::warn!(path = %path.display(), "open failed: {err}");
            notice(app, &err, retry)
        }
    }
}

fn save_to(app: &mut App, path: &Path) -> Task<Message> {
    let result = app
        .controller
        .save_image(path, &app.codec, app.config.save_extension());
    match result {
        Ok(written) => {
            app.status = Some(app.i18n.tr_with_args(
                "status-saved",
                &[("path", written.display().to_string())],
            ));
            if persistence::remember_directory(&mut app.config, &written) {
                persistence::persist_preferences(&app.config, app.config_dir.clone());
            }
            Task::none()
        }
        Err(err) => {
            tracing::warn!(path = %path.display(), "save failed: {err}");
            notice(app, &err, Some(Retry::Save))
        }
    }
}

fn copy(app: &mut App) -> Task<Message> {
    match app.controller.copy_to_clipboard(&mut app.clipboard) {
        Ok(()) => {
            app.controller.on_clipboard_changed(&mut app.clipboard);
            app.status = Some(app.i18n.tr("status-copied"));
            Task::none()
        }
        Err(err) => notice(app, &err, None),
    }
}

fn paste(app: &mut App) -> Task<Message> {
    match dispatch(app, ViewerEvent::PasteRequested) {
        Ok(()) => {
            app.current_file = None;
            app.status = app.image_status();
            scroll_task(app)
        }
        Err(Error::NoImageAvailable) => {
            app.status = Some(app.i18n.tr(Error::NoImageAvailable.i18n_key()));
            Task::none()
        }
        Err(err) => notice(app, &err, None),
    }
}

fn print(app: &mut App) -> Task<Message> {
    let layout = PageLayout::from_config(&app.config.print);
    let title = app.title();
    match app.controller.print(&app.spooler, &layout, &title) {
        Ok(()) => {
            app.status = Some(app.i18n.tr("status-printed"));
            Task::none()
        }
        Err(err) => {
            tracing::warn!("print failed: {err}");
            notice(app, &err, None)
        }
    }
}

fn open_dialog(app: &App) -> Task<Message> {
    dialogs::pick_image(
        DialogText {
            title: app.i18n.tr("dialog-open-title"),
            filter_name: app.i18n.tr("dialog-filter-images"),
        },
        app.codec.readable_extensions(),
        app.dialog_directory.clone(),
    )
}

fn save_dialog(app: &App) -> Task<Message> {
    let file_name = app
        .current_file
        .as_ref()
        .and_then(|path| path.file_name())
        .map(|name| name.to_string_lossy().into_owned());
    dialogs::save_image(
        DialogText {
            title: app.i18n.tr("dialog-save-title"),
            filter_name: app.i18n.tr("dialog-filter-images"),
        },
        app.codec.writable_extensions(),
        app.dialog_directory.clone(),
        file_name,
    )
}

fn remember_dialog_directory(app: &mut App, path: &Path) {
    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        app.dialog_directory = Some(dir.to_path_buf());
    }
}

fn notice(app: &App, err: &Error, retry: Option<Retry>) -> Task<Message> {
    dialogs::notice(
        app.i18n.tr("window-title"),
        app.i18n.tr_with_args(err.i18n_key(), &err.i18n_args()),
        retry,
    )
}

/// Moves the scrollable to the position the controller asked for.
fn scroll_task(app: &mut App) -> Task<Message> {
    match app.surface.take_pending_scroll() {
        Some(offset) => operation::snap_to(Id::new(SCROLLABLE_ID), offset),
        None => Task::none(),
    }
}
