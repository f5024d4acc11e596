// MIT/Apache2 License

//! An in-memory host that records drawing calls instead of rasterizing them.
//!
//! This is useful for tests, for headless use, and for replaying a frame onto another target later.

use crate::{ImageDraw, ImageSource, LineJoin, Loader, Surface, TextAlign};
use lyon_geom::{Angle, Point, Rect, Size};
use std::{cell::Cell, fmt, rc::Rc};

/// A single call made on a [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    SetFillStyle(String),
    SetStrokeStyle(String),
    SetLineWidth(f32),
    SetLineJoin(LineJoin),
    SetMiterLimit(f32),
    SetTextAlign(TextAlign),
    SetFont(String),
    ClearRect(Rect<f32>),
    FillRect(Rect<f32>),
    StrokeRect(Rect<f32>),
    BeginPath,
    Arc {
        center: Point<f32>,
        radius: f32,
        start: Angle<f32>,
        end: Angle<f32>,
    },
    MoveTo(Point<f32>),
    LineTo(Point<f32>),
    Stroke,
    Fill,
    FillText { text: String, at: Point<f32> },
    StrokeText { text: String, at: Point<f32> },
    /// An image was drawn; `image` is the [`MemoryImage::id`] of the handle.
    DrawImage { image: usize, draw: ImageDraw },
}

/// An image handle produced by a [`MemoryLoader`].
///
/// Clones of a `MemoryImage` share their decode state, so a test can hold on to a handle and finish
/// decoding it after it has been registered.
#[derive(Clone)]
pub struct MemoryImage {
    id: usize,
    locator: Rc<str>,
    size: Rc<Cell<Option<Size<u32>>>>,
}

impl MemoryImage {
    /// A unique identifier for this handle, shared by its clones.
    #[inline]
    pub fn id(&self) -> usize {
        self.id
    }

    /// The locator this image was loaded from.
    #[inline]
    pub fn locator(&self) -> &str {
        &self.locator
    }

    /// Complete decoding, making the natural size available.
    #[inline]
    pub fn finish_decode(&self, width: u32, height: u32) {
        self.size.set(Some(Size::new(width, height)));
    }
}

impl ImageSource for MemoryImage {
    #[inline]
    fn natural_size(&self) -> Option<Size<u32>> {
        self.size.get()
    }
}

impl PartialEq for MemoryImage {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl fmt::Debug for MemoryImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryImage")
            .field("id", &self.id)
            .field("locator", &&*self.locator)
            .field("size", &self.size.get())
            .finish()
    }
}

/// A [`Loader`] that hands out [`MemoryImage`]s.
///
/// Images start out undecoded unless their locator was registered with `preload()`, in which case they
/// are ready immediately. Locators registered with `reject()` fail to load.
#[derive(Debug, Default)]
pub struct MemoryLoader {
    next_id: usize,
    preloaded: Vec<(String, Size<u32>)>,
    rejected: Vec<String>,
}

impl MemoryLoader {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Images loaded from `locator` will be decoded immediately with the given size.
    #[inline]
    pub fn preload(&mut self, locator: impl Into<String>, width: u32, height: u32) -> &mut Self {
        self.preloaded.push((locator.into(), Size::new(width, height)));
        self
    }

    /// Loading an image from `locator` will fail.
    #[inline]
    pub fn reject(&mut self, locator: impl Into<String>) -> &mut Self {
        self.rejected.push(locator.into());
        self
    }
}

impl Loader for MemoryLoader {
    type Image = MemoryImage;

    fn load_image(&mut self, locator: &str) -> crate::Result<MemoryImage> {
        if self.rejected.iter().any(|l| l == locator) {
            return Err(crate::Error::Host(format!(
                "Unable to load image from \"{}\"",
                locator
            )));
        }

        let size = self
            .preloaded
            .iter()
            .rev()
            .find(|(l, _)| l == locator)
            .map(|(_, size)| *size);

        self.next_id += 1;
        Ok(MemoryImage {
            id: self.next_id,
            locator: locator.into(),
            size: Rc::new(Cell::new(size)),
        })
    }
}

/// A [`Surface`] that records every call made on it as a [`Command`].
#[derive(Debug)]
pub struct RecordingSurface {
    size: Size<f32>,
    loader: MemoryLoader,
    commands: Vec<Command>,
}

impl RecordingSurface {
    /// Create a new recording surface with the given dimensions.
    #[inline]
    pub fn new(width: f32, height: f32) -> Self {
        Self::with_loader(width, height, MemoryLoader::new())
    }

    /// Create a new recording surface that loads images using `loader`.
    #[inline]
    pub fn with_loader(width: f32, height: f32, loader: MemoryLoader) -> Self {
        Self {
            size: Size::new(width, height),
            loader,
            commands: Vec::new(),
        }
    }

    /// The commands recorded so far.
    #[inline]
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// Take the commands recorded so far, leaving the record empty.
    #[inline]
    pub fn take_commands(&mut self) -> Vec<Command> {
        std::mem::take(&mut self.commands)
    }

    #[inline]
    fn record(&mut self, command: Command) -> crate::Result {
        self.commands.push(command);
        Ok(())
    }
}

impl Surface for RecordingSurface {
    type Image = MemoryImage;

    #[inline]
    fn size(&self) -> Size<f32> {
        self.size
    }
    #[inline]
    fn loader(&mut self) -> &mut dyn Loader<Image = MemoryImage> {
        &mut self.loader
    }
    #[inline]
    fn set_fill_style(&mut self, style: &str) -> crate::Result {
        self.record(Command::SetFillStyle(style.to_string()))
    }
    #[inline]
    fn set_stroke_style(&mut self, style: &str) -> crate::Result {
        self.record(Command::SetStrokeStyle(style.to_string()))
    }
    #[inline]
    fn set_line_width(&mut self, width: f32) -> crate::Result {
        self.record(Command::SetLineWidth(width))
    }
    #[inline]
    fn set_line_join(&mut self, join: LineJoin) -> crate::Result {
        self.record(Command::SetLineJoin(join))
    }
    #[inline]
    fn set_miter_limit(&mut self, limit: f32) -> crate::Result {
        self.record(Command::SetMiterLimit(limit))
    }
    #[inline]
    fn set_text_align(&mut self, align: TextAlign) -> crate::Result {
        self.record(Command::SetTextAlign(align))
    }
    #[inline]
    fn set_font(&mut self, font: &str) -> crate::Result {
        self.record(Command::SetFont(font.to_string()))
    }
    #[inline]
    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32) -> crate::Result {
        self.record(Command::ClearRect(crate::draw::rect(x, y, width, height)))
    }
    #[inline]
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32) -> crate::Result {
        self.record(Command::FillRect(crate::draw::rect(x, y, width, height)))
    }
    #[inline]
    fn stroke_rect(&mut self, x: f32, y: f32, width: f32, height: f32) -> crate::Result {
        self.record(Command::StrokeRect(crate::draw::rect(x, y, width, height)))
    }
    #[inline]
    fn begin_path(&mut self) -> crate::Result {
        self.record(Command::BeginPath)
    }
    #[inline]
    fn arc(
        &mut self,
        xcenter: f32,
        ycenter: f32,
        radius: f32,
        start: Angle<f32>,
        end: Angle<f32>,
    ) -> crate::Result {
        self.record(Command::Arc {
            center: Point::new(xcenter, ycenter),
            radius,
            start,
            end,
        })
    }
    #[inline]
    fn move_to(&mut self, x: f32, y: f32) -> crate::Result {
        self.record(Command::MoveTo(Point::new(x, y)))
    }
    #[inline]
    fn line_to(&mut self, x: f32, y: f32) -> crate::Result {
        self.record(Command::LineTo(Point::new(x, y)))
    }
    #[inline]
    fn stroke(&mut self) -> crate::Result {
        self.record(Command::Stroke)
    }
    #[inline]
    fn fill(&mut self) -> crate::Result {
        self.record(Command::Fill)
    }
    #[inline]
    fn fill_text(&mut self, text: &str, x: f32, y: f32) -> crate::Result {
        self.record(Command::FillText {
            text: text.to_string(),
            at: Point::new(x, y),
        })
    }
    #[inline]
    fn stroke_text(&mut self, text: &str, x: f32, y: f32) -> crate::Result {
        self.record(Command::StrokeText {
            text: text.to_string(),
            at: Point::new(x, y),
        })
    }
    #[inline]
    fn draw_image(&mut self, image: &MemoryImage, draw: ImageDraw) -> crate::Result {
        self.record(Command::DrawImage {
            image: image.id(),
            draw,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_deferred_decode() {
        let mut loader = MemoryLoader::new();
        let image = loader.load_image("sprites.png").unwrap();
        assert!(!image.is_ready());

        let shared = image.clone();
        shared.finish_decode(32, 16);
        assert_eq!(image.natural_size(), Some(Size::new(32, 16)));
        assert_eq!(image.locator(), "sprites.png");
    }

    #[test]
    fn test_preload_and_reject() {
        let mut loader = MemoryLoader::new();
        loader.preload("tiles.png", 8, 8).reject("missing.png");

        let a = loader.load_image("tiles.png").unwrap();
        let b = loader.load_image("tiles.png").unwrap();
        assert_eq!(a.natural_size(), Some(Size::new(8, 8)));
        assert_ne!(a, b);

        assert!(matches!(
            loader.load_image("missing.png"),
            Err(Error::Host(_))
        ));
    }

    #[test]
    fn test_records_through_mut_ref() {
        fn stroke_from<S: Surface>(mut surface: S) -> crate::Result {
            surface.begin_path()?;
            surface.move_to(1.0, 2.0)?;
            surface.stroke()
        }

        let mut surface = RecordingSurface::new(10.0, 10.0);
        stroke_from(&mut surface).unwrap();

        assert_eq!(
            surface.take_commands(),
            vec![
                Command::BeginPath,
                Command::MoveTo(Point::new(1.0, 2.0)),
                Command::Stroke
            ]
        );
        assert!(surface.commands().is_empty());
    }
}
