// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the toolbar, the viewer
//! pane and the viewport controller.
//!
//! The `App` struct owns the controller together with its collaborators
//! (codec, clipboard, print spooler and the iced display surface) and
//! translates messages into controller events and side effects like dialogs
//! or config persistence.

mod dialogs;
mod message;
pub mod paths;
mod persistence;
pub mod startup;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message, Retry};
pub use startup::{parse_args, startup_image, Command};

use crate::config::{self, BackgroundTheme, Config};
use crate::i18n::fluent::I18n;
use crate::infrastructure::{ArboardClipboard, ImageRsCodec, LpSpooler};
use crate::ui::design_tokens::sizing;
use crate::ui::toolbar;
use crate::ui::viewer::IcedSurface;
use crate::viewport::{DisplayMode, ViewportController};
use crate::application::port::ViewportSize;
use iced::{window, Element, Size, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    config: Config,
    config_dir: Option<PathBuf>,
    controller: ViewportController,
    surface: IcedSurface,
    codec: ImageRsCodec,
    clipboard: ArboardClipboard,
    spooler: LpSpooler,
    /// File shown in the title; `None` for pasted images.
    current_file: Option<PathBuf>,
    /// Last status bar message.
    status: Option<String>,
    /// Directory the next file dialog opens in.
    dialog_directory: Option<PathBuf>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("current_file", &self.current_file)
            .field("has_image", &self.controller.has_image())
            .field("mode", &self.controller.mode())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: f32 = 650.0;
pub const WINDOW_DEFAULT_WIDTH: f32 = 900.0;
pub const MIN_WINDOW_HEIGHT: f32 = 300.0;
pub const MIN_WINDOW_WIDTH: f32 = 640.0;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Viewer pane size for a window of `size`.
#[must_use]
pub fn viewport_for_window(size: Size) -> ViewportSize {
    ViewportSize::new(
        size.width.max(0.0),
        (size.height - sizing::TOOLBAR_HEIGHT - sizing::STATUS_BAR_HEIGHT).max(0.0),
    )
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires an Fn boot closure; the flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || App::new(boot_state.borrow_mut().take().unwrap_or_default());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state from the CLI flags and `settings.toml`.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let i18n = I18n::default();
        let (config, warning) = config::load_with_override(flags.config_dir.clone());
        let mode = if config.display.fit_to_window == Some(true) {
            DisplayMode::Fit
        } else {
            DisplayMode::Literal
        };
        let dialog_directory = paths::initial_dialog_directory(config.files.last_directory.clone());

        let mut app = Self {
            status: warning.map(|key| i18n.tr(&key)),
            i18n,
            config,
            config_dir: flags.config_dir,
            controller: ViewportController::new(mode),
            surface: IcedSurface::new(),
            codec: ImageRsCodec::new(),
            clipboard: ArboardClipboard::new(),
            spooler: LpSpooler::default(),
            current_file: None,
            dialog_directory,
        };

        app.controller.on_clipboard_changed(&mut app.clipboard);

        if let Some(image) = flags.image {
            app.controller.show_image(image, &mut app.surface);
            app.current_file = flags.file_path;
            app.status = app.image_status();
        }

        (app, Task::none())
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match self.current_file.as_ref().and_then(|path| path.file_name()) {
            Some(name) => format!("{} - {app_name}", name.to_string_lossy()),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        match self.config.display.background.unwrap_or_default() {
            BackgroundTheme::Light => Theme::Light,
            BackgroundTheme::Dark => Theme::Dark,
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_clipboard_subscription(),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            toolbar: self.toolbar_context(),
            surface: &self.surface,
            background_theme: self.config.display.background.unwrap_or_default(),
            status: self.status.as_deref(),
            scale: self
                .controller
                .has_image()
                .then(|| self.controller.scale_factor()),
        })
    }

    fn toolbar_context(&self) -> toolbar::ViewContext<'_> {
        toolbar::ViewContext {
            i18n: &self.i18n,
            has_image: self.controller.has_image(),
            can_zoom_in: self.controller.can_zoom_in(),
            can_zoom_out: self.controller.can_zoom_out(),
            can_paste: self.controller.can_paste(),
            fit_to_window: self.controller.mode() == DisplayMode::Fit,
        }
    }

    /// Status line describing the displayed image.
    fn image_status(&self) -> Option<String> {
        let summary = self.controller.image_summary()?;
        let mut args = vec![
            ("width", summary.size.width.to_string()),
            ("height", summary.size.height.to_string()),
            ("depth", summary.bit_depth.to_string()),
        ];
        let text = match &self.current_file {
            Some(path) => {
                args.push(("path", path.display().to_string()));
                self.i18n.tr_with_args("status-image-info", &args)
            }
            None => self.i18n.tr_with_args("status-clipboard-image-info", &args),
        };
        Some(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::image::{BitmapSize, ColorModel, SourceImage};
    use crate::test_utils::assert_abs_diff_eq;
    use crate::ui::viewer;
    use crate::viewport::ScaleFactor;
    use std::fs;
    use tempfile::{tempdir, TempDir};

    fn image(width: u32, height: u32) -> SourceImage {
        SourceImage::from_rgba(
            BitmapSize::new(width, height),
            vec![90; (width * height * 4) as usize],
            24,
            ColorModel::Rgb,
        )
        .expect("valid buffer")
    }

    /// Boots the app against an isolated config directory.
    fn boot(settings: &str, flags: Flags) -> (App, TempDir) {
        let dir = tempdir().expect("failed to create temp dir");
        fs::write(dir.path().join("settings.toml"), settings).expect("write settings");
        let (app, _task) = App::new(Flags {
            config_dir: Some(dir.path().to_path_buf()),
            ..flags
        });
        (app, dir)
    }

    fn with_image(settings: &str) -> (App, TempDir) {
        boot(
            settings,
            Flags {
                file_path: Some(PathBuf::from("/photos/cat.png")),
                image: Some(image(200, 100)),
                ..Flags::default()
            },
        )
    }

    fn window(width: f32, viewer_height: f32) -> Message {
        Message::WindowResized(Size::new(
            width,
            viewer_height + sizing::TOOLBAR_HEIGHT + sizing::STATUS_BAR_HEIGHT,
        ))
    }

    #[test]
    fn new_starts_without_image() {
        let (app, _dir) = boot("", Flags::default());
        assert!(!app.controller.has_image());
        assert_eq!(app.title(), "Image Viewer");
        assert!(app.status.is_none());
    }

    #[test]
    fn title_shows_filename_when_image_loaded() {
        let (app, _dir) = with_image("");
        assert_eq!(app.title(), "cat.png - Image Viewer");
    }

    #[test]
    fn startup_image_reports_summary() {
        let (app, _dir) = with_image("");
        assert_eq!(
            app.status.as_deref(),
            Some("Image \"/photos/cat.png\", Size: 200x100, Depth: 24 bit")
        );
    }

    #[test]
    fn broken_settings_fall_back_with_status_warning() {
        let (app, _dir) = boot("[display\n", Flags::default());
        assert_eq!(app.config, Config::default());
        assert!(app.status.is_some());
    }

    #[test]
    fn fit_preference_applies_on_first_resize() {
        let (mut app, _dir) = with_image("[display]\nfit_to_window = true\n");
        assert_eq!(app.controller.mode(), DisplayMode::Fit);

        let _ = app.update(window(400.0, 400.0));

        assert_abs_diff_eq!(app.controller.scale_factor().value(), 2.0);
        assert_eq!(app.surface.bitmap_size(), BitmapSize::new(400, 200));
    }

    #[test]
    fn zoom_actions_are_ignored_without_image() {
        let (mut app, _dir) = boot("", Flags::default());

        let _ = app.update(Message::Toolbar(toolbar::Message::ZoomIn));

        assert_eq!(app.controller.scale_factor(), ScaleFactor::LITERAL);
        assert_eq!(app.controller.mode(), DisplayMode::Literal);
    }

    #[test]
    fn wheel_zoom_steps_scale() {
        let (mut app, _dir) = with_image("");
        let _ = app.update(window(300.0, 300.0));

        let _ = app.update(Message::Viewer(viewer::Message::WheelZoom(
            crate::viewport::ZoomDirection::In,
        )));

        assert_abs_diff_eq!(app.controller.scale_factor().value(), 1.25);
        assert_eq!(app.controller.mode(), DisplayMode::Custom);
    }

    #[test]
    fn toggling_fit_updates_mode_and_preference() {
        let (mut app, _dir) = with_image("");
        let _ = app.update(window(100.0, 100.0));

        let _ = app.update(Message::Toolbar(toolbar::Message::ToggleFitToWindow));
        assert_eq!(app.controller.mode(), DisplayMode::Fit);
        assert_abs_diff_eq!(app.controller.scale_factor().value(), 0.5);
        assert_eq!(app.config.display.fit_to_window, Some(true));

        let _ = app.update(Message::Toolbar(toolbar::Message::ToggleFitToWindow));
        assert_eq!(app.controller.mode(), DisplayMode::Literal);
        assert_eq!(app.controller.scale_factor(), ScaleFactor::LITERAL);
        assert_eq!(app.config.display.fit_to_window, Some(false));
    }

    #[test]
    fn normal_size_leaves_fit_mode() {
        let (mut app, _dir) = with_image("[display]\nfit_to_window = true\n");
        let _ = app.update(window(400.0, 400.0));

        let _ = app.update(Message::Toolbar(toolbar::Message::NormalSize));

        assert_eq!(app.controller.mode(), DisplayMode::Literal);
        assert_eq!(app.config.display.fit_to_window, Some(false));
    }

    #[test]
    fn failed_drop_keeps_current_image() {
        let (mut app, dir) = with_image("");
        let broken = dir.path().join("broken.png");
        fs::write(&broken, b"not an image").expect("write");

        let _ = app.update(Message::FileDropped(broken));

        assert_eq!(app.current_file, Some(PathBuf::from("/photos/cat.png")));
        assert_eq!(app.controller.image_summary().map(|s| s.size), Some(BitmapSize::new(200, 100)));
    }

    #[test]
    fn dropped_file_is_opened_and_directory_remembered() {
        let (mut app, dir) = boot("", Flags::default());
        let path = dir.path().join("dot.png");
        image_rs::RgbaImage::from_pixel(3, 2, image_rs::Rgba([1, 2, 3, 255]))
            .save(&path)
            .expect("write png");

        let _ = app.update(Message::FileDropped(path.clone()));

        assert_eq!(app.current_file, Some(path));
        assert_eq!(app.title(), "dot.png - Image Viewer");
        assert_eq!(app.config.files.last_directory.as_deref(), Some(dir.path()));
        assert_eq!(app.dialog_directory.as_deref(), Some(dir.path()));
    }

    #[test]
    fn save_appends_default_extension_and_reports() {
        let (mut app, dir) = with_image("");
        let target = dir.path().join("copy");

        let _ = app.update(Message::SaveDialogResult(Some(target.clone())));

        let written = target.with_extension("jpg");
        assert!(written.exists());
        assert_eq!(
            app.status,
            Some(format!("Saved \"{}\"", written.display()))
        );
    }

    #[test]
    fn cancelled_dialogs_change_nothing() {
        let (mut app, _dir) = with_image("");
        let before = app.status.clone();

        let _ = app.update(Message::OpenDialogResult(None));
        let _ = app.update(Message::SaveDialogResult(None));

        assert_eq!(app.status, before);
        assert!(app.controller.has_image());
    }

    #[test]
    fn viewport_for_window_subtracts_chrome() {
        let viewport = viewport_for_window(Size::new(800.0, 600.0));
        assert_eq!(viewport.width, 800.0);
        assert_eq!(
            viewport.height,
            600.0 - sizing::TOOLBAR_HEIGHT - sizing::STATUS_BAR_HEIGHT
        );
        assert!(viewport_for_window(Size::new(10.0, 10.0)).height >= 0.0);
    }
}
