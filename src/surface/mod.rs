// MIT/Apache2 License

use crate::{ImageDraw, ImageSource, LineJoin, Loader, TextAlign};
use lyon_geom::{Angle, Size};

/// Implements `Surface` on `&mut Surface`.
mod mut_impl;

/// An immediate-mode 2D drawing surface supplied by the host; usually a canvas.
///
/// The `Surface` trait mirrors the primitive operations of an HTML-style 2D context, and is what a
/// [`Painter`] forwards its helper operations to. A `Surface` holds mutable style state (colors, line
/// width, line join, miter limit, text alignment and font) that applies to every subsequent drawing
/// call until it is set again. There is no save/restore scoping.
///
/// Style parameters such as colors and fonts are opaque descriptor strings, passed through verbatim.
/// All geometry is in pixels, with the origin at the top left, x growing to the right and y growing
/// downwards.
///
/// Path operations follow the usual canvas semantics: `begin_path()` discards the current path,
/// `arc()`, `move_to()` and `line_to()` extend it, and `stroke()` and `fill()` paint it using the current
/// style without discarding it.
///
/// [`Painter`]: crate::Painter
pub trait Surface {
    /// The image handle type that this surface can draw.
    type Image: ImageSource;

    /* Setup */

    /// The pixel dimensions of this surface.
    fn size(&self) -> Size<f32>;

    /// Get the image loader backing this `Surface`.
    fn loader(&mut self) -> &mut dyn Loader<Image = Self::Image>;
    /// Begin loading an image that can later be drawn onto this surface.
    #[inline]
    fn load_image(&mut self, locator: &str) -> crate::Result<Self::Image> {
        self.loader().load_image(locator)
    }

    /// Flush all drawing operations to the target, if necessary.
    #[inline]
    fn flush(&mut self) -> crate::Result {
        Ok(())
    }

    /* Style State */

    /// Set the style used to fill shapes and text.
    fn set_fill_style(&mut self, style: &str) -> crate::Result;
    /// Set the style used to stroke outlines.
    fn set_stroke_style(&mut self, style: &str) -> crate::Result;
    /// Set the width that outlines are stroked with.
    fn set_line_width(&mut self, width: f32) -> crate::Result;
    /// Set the shape used where two stroked segments meet.
    fn set_line_join(&mut self, join: LineJoin) -> crate::Result;
    /// Set the ratio past which mitered joins are beveled instead.
    fn set_miter_limit(&mut self, limit: f32) -> crate::Result;
    /// Set the alignment of text relative to its anchor point.
    fn set_text_align(&mut self, align: TextAlign) -> crate::Result;
    /// Set the font descriptor that text is drawn with.
    fn set_font(&mut self, font: &str) -> crate::Result;

    /* Rectangles */

    /// Reset a rectangle to transparent.
    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32) -> crate::Result;
    /// Fill in a rectangle using the current fill style.
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32) -> crate::Result;
    /// Stroke the outline of a rectangle using the current stroke style and line width.
    fn stroke_rect(&mut self, x: f32, y: f32, width: f32, height: f32) -> crate::Result;

    /* Paths */

    /// Discard the current path and start a new one.
    fn begin_path(&mut self) -> crate::Result;
    /// Add a circular arc to the current path, running clockwise from `start` to `end`.
    fn arc(
        &mut self,
        xcenter: f32,
        ycenter: f32,
        radius: f32,
        start: Angle<f32>,
        end: Angle<f32>,
    ) -> crate::Result;
    /// Start a new subpath at (x, y).
    fn move_to(&mut self, x: f32, y: f32) -> crate::Result;
    /// Add a straight segment from the last point of the current path to (x, y).
    fn line_to(&mut self, x: f32, y: f32) -> crate::Result;
    /// Stroke the current path.
    fn stroke(&mut self) -> crate::Result;
    /// Fill the current path.
    fn fill(&mut self) -> crate::Result;

    /* Text */

    /// Fill a run of text anchored at (x, y).
    fn fill_text(&mut self, text: &str, x: f32, y: f32) -> crate::Result;
    /// Stroke the outline of a run of text anchored at (x, y).
    fn stroke_text(&mut self, text: &str, x: f32, y: f32) -> crate::Result;

    /* Images */

    /// Draw an image onto this surface.
    ///
    /// The geometry has already been resolved; see [`ImageDraw`].
    fn draw_image(&mut self, image: &Self::Image, draw: ImageDraw) -> crate::Result;
}
