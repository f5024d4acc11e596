// MIT/Apache2 License

use super::Surface;
use crate::{ImageDraw, LineJoin, Loader, TextAlign};
use lyon_geom::{Angle, Size};

impl<S: Surface + ?Sized> Surface for &mut S {
    type Image = S::Image;

    #[inline]
    fn size(&self) -> Size<f32> {
        (**self).size()
    }
    #[inline]
    fn loader(&mut self) -> &mut dyn Loader<Image = Self::Image> {
        (**self).loader()
    }
    #[inline]
    fn load_image(&mut self, locator: &str) -> crate::Result<Self::Image> {
        (**self).load_image(locator)
    }
    #[inline]
    fn flush(&mut self) -> crate::Result {
        (**self).flush()
    }
    #[inline]
    fn set_fill_style(&mut self, style: &str) -> crate::Result {
        (**self).set_fill_style(style)
    }
    #[inline]
    fn set_stroke_style(&mut self, style: &str) -> crate::Result {
        (**self).set_stroke_style(style)
    }
    #[inline]
    fn set_line_width(&mut self, width: f32) -> crate::Result {
        (**self).set_line_width(width)
    }
    #[inline]
    fn set_line_join(&mut self, join: LineJoin) -> crate::Result {
        (**self).set_line_join(join)
    }
    #[inline]
    fn set_miter_limit(&mut self, limit: f32) -> crate::Result {
        (**self).set_miter_limit(limit)
    }
    #[inline]
    fn set_text_align(&mut self, align: TextAlign) -> crate::Result {
        (**self).set_text_align(align)
    }
    #[inline]
    fn set_font(&mut self, font: &str) -> crate::Result {
        (**self).set_font(font)
    }
    #[inline]
    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32) -> crate::Result {
        (**self).clear_rect(x, y, width, height)
    }
    #[inline]
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32) -> crate::Result {
        (**self).fill_rect(x, y, width, height)
    }
    #[inline]
    fn stroke_rect(&mut self, x: f32, y: f32, width: f32, height: f32) -> crate::Result {
        (**self).stroke_rect(x, y, width, height)
    }
    #[inline]
    fn begin_path(&mut self) -> crate::Result {
        (**self).begin_path()
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
        (**self).arc(xcenter, ycenter, radius, start, end)
    }
    #[inline]
    fn move_to(&mut self, x: f32, y: f32) -> crate::Result {
        (**self).move_to(x, y)
    }
    #[inline]
    fn line_to(&mut self, x: f32, y: f32) -> crate::Result {
        (**self).line_to(x, y)
    }
    #[inline]
    fn stroke(&mut self) -> crate::Result {
        (**self).stroke()
    }
    #[inline]
    fn fill(&mut self) -> crate::Result {
        (**self).fill()
    }
    #[inline]
    fn fill_text(&mut self, text: &str, x: f32, y: f32) -> crate::Result {
        (**self).fill_text(text, x, y)
    }
    #[inline]
    fn stroke_text(&mut self, text: &str, x: f32, y: f32) -> crate::Result {
        (**self).stroke_text(text, x, y)
    }
    #[inline]
    fn draw_image(&mut self, image: &Self::Image, draw: ImageDraw) -> crate::Result {
        (**self).draw_image(image, draw)
    }
}
