// SPDX-License-Identifier: MPL-2.0
//! The viewport controller: owns the displayed image, its scale factor and
//! display mode, and turns user events into a rescaled bitmap for a
//! [`DisplaySurface`].

use super::render;
use super::scale::{DisplayMode, ScaleFactor, ZoomDirection};
use crate::application::port::{
    DisplaySurface, ImageClipboard, ImageCodec, PrintJob, PrintSpooler, ScrollOffsets,
    ViewportSize,
};
use crate::config::MAX_RENDER_PIXELS;
use crate::domain::image::{BitmapSize, SourceImage};
use crate::error::{Error, Result};
use crate::print::PageLayout;
use std::path::{Path, PathBuf};

/// What is on screen and how it is scaled.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DisplayState {
    pub source: Option<SourceImage>,
    pub scale_factor: ScaleFactor,
    pub mode: DisplayMode,
}

/// Status-bar facts about the current image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageSummary {
    pub size: BitmapSize,
    pub bit_depth: u16,
}

/// Discrete events the host UI forwards to the controller.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewerEvent {
    FileOpened(PathBuf),
    /// The clipboard contents may have changed; re-check for an image.
    ClipboardChanged,
    PasteRequested,
    Resized(ViewportSize),
    ZoomRequested(ZoomDirection),
    LiteralSizeRequested,
    FitRequested,
}

/// Collaborators needed by [`ViewportController::dispatch`].
pub struct Collaborators<'a> {
    pub codec: &'a dyn ImageCodec,
    pub clipboard: &'a mut dyn ImageClipboard,
    pub surface: &'a mut dyn DisplaySurface,
}

#[derive(Debug)]
pub struct ViewportController {
    state: DisplayState,
    /// Logical size of the displayed bitmap before rounding to pixels.
    extent: (f64, f64),
    /// Size of the bitmap last handed to the surface.
    rendered: Option<BitmapSize>,
    /// Largest bitmap, in pixels, the controller will render.
    render_budget: u64,
    /// Whether the clipboard held an image when last checked.
    clipboard_has_image: bool,
}

impl Default for ViewportController {
    fn default() -> Self {
        Self {
            state: DisplayState::default(),
            extent: (0.0, 0.0),
            rendered: None,
            render_budget: MAX_RENDER_PIXELS,
            clipboard_has_image: false,
        }
    }
}

impl ViewportController {
    /// Creates an empty controller. `mode` is kept for the first image.
    #[must_use]
    pub fn new(mode: DisplayMode) -> Self {
        Self {
            state: DisplayState {
                mode,
                ..DisplayState::default()
            },
            ..Self::default()
        }
    }

    /// Replaces the render budget of [`MAX_RENDER_PIXELS`].
    #[must_use]
    pub fn with_render_budget(mut self, max_pixels: u64) -> Self {
        self.render_budget = max_pixels;
        self
    }

    #[must_use]
    pub fn state(&self) -> &DisplayState {
        &self.state
    }

    #[must_use]
    pub fn has_image(&self) -> bool {
        self.state.source.is_some()
    }

    #[must_use]
    pub fn scale_factor(&self) -> ScaleFactor {
        self.state.scale_factor
    }

    #[must_use]
    pub fn mode(&self) -> DisplayMode {
        self.state.mode
    }

    /// Size of the bitmap currently on the surface.
    #[must_use]
    pub fn rendered_size(&self) -> Option<BitmapSize> {
        self.rendered
    }

    /// False at the maximum scale, and when one more step would exceed the
    /// render budget.
    #[must_use]
    pub fn can_zoom_in(&self) -> bool {
        self.has_image()
            && !self.state.scale_factor.is_max()
            && self.within_render_budget(self.zoomed_extent(ZoomDirection::In).0)
    }

    #[must_use]
    pub fn can_zoom_out(&self) -> bool {
        self.has_image() && !self.state.scale_factor.is_min()
    }

    /// Paste is offered only while the clipboard holds an image.
    #[must_use]
    pub fn can_paste(&self) -> bool {
        self.clipboard_has_image
    }

    #[must_use]
    pub fn image_summary(&self) -> Option<ImageSummary> {
        self.state.source.as_ref().map(|source| ImageSummary {
            size: source.size(),
            bit_depth: source.bit_depth(),
        })
    }

    /// Routes a UI event to the matching operation.
    ///
    /// # Errors
    ///
    /// Propagates the error of the operation; the display state is unchanged
    /// in that case.
    pub fn dispatch(&mut self, event: ViewerEvent, ctx: Collaborators<'_>) -> Result<()> {
        match event {
            ViewerEvent::FileOpened(path) => {
                self.load_image(&path, ctx.codec, ctx.surface)?;
            }
            ViewerEvent::ClipboardChanged => {
                self.on_clipboard_changed(ctx.clipboard);
            }
            ViewerEvent::PasteRequested => {
                self.paste_from_clipboard(ctx.clipboard, ctx.surface)?;
            }
            ViewerEvent::Resized(size) => self.on_container_resized(size, ctx.surface),
            ViewerEvent::ZoomRequested(direction) => self.zoom(direction, ctx.surface),
            ViewerEvent::LiteralSizeRequested => self.reset_to_literal_size(ctx.surface),
            ViewerEvent::FitRequested => {
                let size = ctx.surface.viewport_size();
                self.fit_to_container(size, ctx.surface);
            }
        }
        Ok(())
    }

    /// Decodes `path` and displays it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Decode`] naming `path`; the previous image stays.
    pub fn load_image(
        &mut self,
        path: &Path,
        codec: &dyn ImageCodec,
        surface: &mut dyn DisplaySurface,
    ) -> Result<&DisplayState> {
        let image = codec.decode(path).map_err(|err| match err {
            Error::Decode { .. } => err,
            other => Error::decode(path, other),
        })?;
        tracing::info!(
            path = %path.display(),
            width = image.width(),
            height = image.height(),
            "image loaded"
        );
        self.show_image(image, surface);
        Ok(&self.state)
    }

    /// Displays the clipboard image.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoImageAvailable`]; the previous image stays.
    pub fn paste_from_clipboard(
        &mut self,
        clipboard: &mut dyn ImageClipboard,
        surface: &mut dyn DisplaySurface,
    ) -> Result<&DisplayState> {
        let image = clipboard.read_image().map_err(|err| {
            tracing::debug!("clipboard read failed: {err}");
            self.clipboard_has_image = false;
            Error::NoImageAvailable
        })?;
        self.clipboard_has_image = true;
        tracing::info!(
            width = image.width(),
            height = image.height(),
            "image pasted"
        );
        self.show_image(image, surface);
        Ok(&self.state)
    }

    /// Re-checks the clipboard for an image. Returns `true` when paste
    /// availability changed.
    pub fn on_clipboard_changed(&mut self, clipboard: &mut dyn ImageClipboard) -> bool {
        let has_image = clipboard.has_image();
        if has_image == self.clipboard_has_image {
            return false;
        }
        tracing::debug!(has_image, "clipboard image availability changed");
        self.clipboard_has_image = has_image;
        true
    }

    /// Steps the scale factor and keeps the visual centre in place.
    ///
    /// A step whose bitmap would exceed the render budget is ignored.
    pub fn zoom(&mut self, direction: ZoomDirection, surface: &mut dyn DisplaySurface) {
        if !self.has_image() {
            return;
        }
        let (extent, new) = self.zoomed_extent(direction);
        if !self.within_render_budget(extent) {
            tracing::debug!(scale = new.value(), "zoom step exceeds render budget");
            return;
        }
        let factor = new.value() / self.state.scale_factor.value();

        self.state.scale_factor = new;
        self.state.mode = DisplayMode::Custom;
        self.extent = extent;
        self.render(surface);

        let viewport = surface.viewport_size();
        let old_offsets = surface.scroll_offsets();
        let content = self.rendered.unwrap_or_default();
        let offsets = ScrollOffsets::new(
            adjusted_offset(old_offsets.x, factor, viewport.width, content.width),
            adjusted_offset(old_offsets.y, factor, viewport.height, content.height),
        );
        surface.set_scroll_offsets(offsets);
    }

    /// Shows the image at one image pixel per device pixel.
    pub fn reset_to_literal_size(&mut self, surface: &mut dyn DisplaySurface) {
        self.state.scale_factor = ScaleFactor::LITERAL;
        self.state.mode = DisplayMode::Literal;
        if let Some(source) = &self.state.source {
            self.extent = (f64::from(source.width()), f64::from(source.height()));
            self.render(surface);
        }
    }

    /// Scales the image to fit `container`, preserving aspect ratio.
    ///
    /// The scale factor is the width ratio `container.width / image.width`
    /// and is not clamped to the zoom range.
    pub fn fit_to_container(&mut self, container: ViewportSize, surface: &mut dyn DisplaySurface) {
        self.state.mode = DisplayMode::Fit;
        let Some(source) = &self.state.source else {
            return;
        };
        if container.is_empty() {
            return;
        }
        self.state.scale_factor =
            ScaleFactor::unclamped(f64::from(container.width) / f64::from(source.width()));
        self.extent = source
            .size()
            .fit_within(f64::from(container.width), f64::from(container.height));
        self.render(surface);
        surface.set_scroll_offsets(ScrollOffsets::ORIGIN);
    }

    /// Refits when in fit mode; otherwise nothing changes.
    pub fn on_container_resized(&mut self, size: ViewportSize, surface: &mut dyn DisplaySurface) {
        if self.state.mode == DisplayMode::Fit {
            self.fit_to_container(size, surface);
        }
    }

    /// Places the full-resolution image on the clipboard.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Clipboard`] when the clipboard rejects it.
    pub fn copy_to_clipboard(&self, clipboard: &mut dyn ImageClipboard) -> Result<()> {
        let Some(source) = &self.state.source else {
            tracing::debug!("copy requested without an image");
            return Ok(());
        };
        clipboard.write_image(source)?;
        tracing::info!("image copied to clipboard");
        Ok(())
    }

    /// Writes the full-resolution image to `path`.
    ///
    /// A path without extension gets `default_extension`. Returns the path
    /// actually written.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Encode`] naming the final path.
    pub fn save_image(
        &self,
        path: &Path,
        codec: &dyn ImageCodec,
        default_extension: &str,
    ) -> Result<PathBuf> {
        let target = with_default_extension(path, default_extension);
        let Some(source) = &self.state.source else {
            return Err(Error::encode(&target, "no image to save"));
        };
        codec.encode(source, &target)?;
        tracing::info!(path = %target.display(), "image saved");
        Ok(target)
    }

    /// Prints the displayed bitmap scaled to the printable area of `layout`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Print`] when nothing is rendered or spooling fails.
    pub fn print(&self, spooler: &dyn PrintSpooler, layout: &PageLayout, title: &str) -> Result<()> {
        let (Some(source), Some(size)) = (&self.state.source, self.rendered) else {
            return Err(Error::Print("no image to print".to_string()));
        };
        let bitmap = render::rescale(source, size)
            .ok_or_else(|| Error::Print("no image to print".to_string()))?;
        let page = layout
            .compose(&bitmap)
            .ok_or_else(|| Error::Print("page layout has no printable area".to_string()))?;
        spooler.submit(&PrintJob {
            title: title.to_string(),
            page,
            dpi: layout.dpi(),
        })?;
        tracing::info!(title, "print job submitted");
        Ok(())
    }

    /// Displays an already decoded image.
    ///
    /// The scale resets to 1.0 and the scroll position to the origin. Fit
    /// mode is kept; any other mode becomes literal.
    pub fn show_image(&mut self, image: SourceImage, surface: &mut dyn DisplaySurface) {
        self.extent = (f64::from(image.width()), f64::from(image.height()));
        self.state.source = Some(image);
        self.state.scale_factor = ScaleFactor::LITERAL;
        self.rendered = None;

        if self.state.mode == DisplayMode::Fit {
            let container = surface.viewport_size();
            self.fit_to_container(container, surface);
            if self.rendered.is_none() {
                // Container not laid out yet; show literal size until the first resize.
                self.render(surface);
            }
        } else {
            self.state.mode = DisplayMode::Literal;
            self.render(surface);
        }
        surface.set_scroll_offsets(ScrollOffsets::ORIGIN);
    }

    fn render(&mut self, surface: &mut dyn DisplaySurface) {
        let Some(source) = &self.state.source else {
            return;
        };
        let target = BitmapSize::from_extent(self.extent.0, self.extent.1);
        if self.rendered == Some(target) {
            return;
        }
        if !self.within_render_budget(self.extent) {
            tracing::warn!(?target, "bitmap exceeds render budget; not drawn");
            return;
        }
        match render::rescale(source, target) {
            Some(bitmap) => {
                surface.render(bitmap);
                self.rendered = Some(target);
            }
            None => tracing::warn!(?target, "rescale produced no bitmap"),
        }
    }

    /// Extent and scale after one zoom step.
    fn zoomed_extent(&self, direction: ZoomDirection) -> ((f64, f64), ScaleFactor) {
        let old = self.state.scale_factor;
        let new = old.step(direction);
        let factor = new.value() / old.value();
        ((self.extent.0 * factor, self.extent.1 * factor), new)
    }

    fn within_render_budget(&self, extent: (f64, f64)) -> bool {
        let size = BitmapSize::from_extent(extent.0, extent.1);
        u64::from(size.width) * u64::from(size.height) <= self.render_budget
    }
}

/// Scroll offset after scaling content by `factor`, keeping the point at the
/// centre of the viewport roughly where it was, clamped to the content.
#[must_use]
pub fn adjusted_offset(old: f32, factor: f64, viewport_extent: f32, content_extent: u32) -> f32 {
    let proposed = factor * f64::from(old) + (factor - 1.0) * f64::from(viewport_extent) / 2.0;
    let max = (f64::from(content_extent) - f64::from(viewport_extent)).max(0.0);
    #[allow(clippy::cast_possible_truncation)]
    let offset = proposed.clamp(0.0, max) as f32;
    offset
}

fn with_default_extension(path: &Path, default_extension: &str) -> PathBuf {
    if path.extension().is_some() {
        path.to_path_buf()
    } else {
        path.with_extension(default_extension)
    }
}
