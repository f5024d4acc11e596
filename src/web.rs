// MIT/Apache2 License

//! A [`Surface`] backed by an HTML canvas.

use crate::{ImageDraw, ImageSource, LineJoin, Loader, Surface, TextAlign};
use lyon_geom::{Angle, Size};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

impl ImageSource for HtmlImageElement {
    #[inline]
    fn natural_size(&self) -> Option<Size<u32>> {
        // broken images are "complete" but have no natural size
        if self.complete() && self.natural_width() > 0 {
            Some(Size::new(self.natural_width(), self.natural_height()))
        } else {
            None
        }
    }
}

/// Loads images through `HtmlImageElement`s.
#[derive(Debug, Default, Copy, Clone)]
pub struct WebLoader;

impl Loader for WebLoader {
    type Image = HtmlImageElement;

    #[inline]
    fn load_image(&mut self, locator: &str) -> crate::Result<HtmlImageElement> {
        let image = HtmlImageElement::new()?;
        image.set_src(locator);
        Ok(image)
    }
}

/// A canvas element and its 2D rendering context.
#[derive(Debug)]
pub struct WebSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    loader: WebLoader,
}

impl WebSurface {
    /// Get the 2D context of `canvas` and wrap it.
    pub fn new(canvas: HtmlCanvasElement) -> crate::Result<Self> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| crate::Error::Host("Canvas has no 2D context".into()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| crate::Error::Host("Canvas context is not a 2D context".into()))?;

        Ok(Self {
            canvas,
            ctx,
            loader: WebLoader,
        })
    }

    #[inline]
    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    #[inline]
    pub fn context(&self) -> &CanvasRenderingContext2d {
        &self.ctx
    }
}

impl Surface for WebSurface {
    type Image = HtmlImageElement;

    #[inline]
    fn size(&self) -> Size<f32> {
        Size::new(self.canvas.width() as f32, self.canvas.height() as f32)
    }
    #[inline]
    fn loader(&mut self) -> &mut dyn Loader<Image = HtmlImageElement> {
        &mut self.loader
    }
    #[inline]
    fn set_fill_style(&mut self, style: &str) -> crate::Result {
        self.ctx.set_fill_style_str(style);
        Ok(())
    }
    #[inline]
    fn set_stroke_style(&mut self, style: &str) -> crate::Result {
        self.ctx.set_stroke_style_str(style);
        Ok(())
    }
    #[inline]
    fn set_line_width(&mut self, width: f32) -> crate::Result {
        self.ctx.set_line_width(width as f64);
        Ok(())
    }
    #[inline]
    fn set_line_join(&mut self, join: LineJoin) -> crate::Result {
        self.ctx.set_line_join(join.as_str());
        Ok(())
    }
    #[inline]
    fn set_miter_limit(&mut self, limit: f32) -> crate::Result {
        self.ctx.set_miter_limit(limit as f64);
        Ok(())
    }
    #[inline]
    fn set_text_align(&mut self, align: TextAlign) -> crate::Result {
        self.ctx.set_text_align(align.as_str());
        Ok(())
    }
    #[inline]
    fn set_font(&mut self, font: &str) -> crate::Result {
        self.ctx.set_font(font);
        Ok(())
    }
    #[inline]
    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32) -> crate::Result {
        self.ctx
            .clear_rect(x as f64, y as f64, width as f64, height as f64);
        Ok(())
    }
    #[inline]
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32) -> crate::Result {
        self.ctx
            .fill_rect(x as f64, y as f64, width as f64, height as f64);
        Ok(())
    }
    #[inline]
    fn stroke_rect(&mut self, x: f32, y: f32, width: f32, height: f32) -> crate::Result {
        self.ctx
            .stroke_rect(x as f64, y as f64, width as f64, height as f64);
        Ok(())
    }
    #[inline]
    fn begin_path(&mut self) -> crate::Result {
        self.ctx.begin_path();
        Ok(())
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
        self.ctx.arc(
            xcenter as f64,
            ycenter as f64,
            radius as f64,
            start.radians as f64,
            end.radians as f64,
        )?;
        Ok(())
    }
    #[inline]
    fn move_to(&mut self, x: f32, y: f32) -> crate::Result {
        self.ctx.move_to(x as f64, y as f64);
        Ok(())
    }
    #[inline]
    fn line_to(&mut self, x: f32, y: f32) -> crate::Result {
        self.ctx.line_to(x as f64, y as f64);
        Ok(())
    }
    #[inline]
    fn stroke(&mut self) -> crate::Result {
        self.ctx.stroke();
        Ok(())
    }
    #[inline]
    fn fill(&mut self) -> crate::Result {
        self.ctx.fill();
        Ok(())
    }
    #[inline]
    fn fill_text(&mut self, text: &str, x: f32, y: f32) -> crate::Result {
        self.ctx.fill_text(text, x as f64, y as f64)?;
        Ok(())
    }
    #[inline]
    fn stroke_text(&mut self, text: &str, x: f32, y: f32) -> crate::Result {
        self.ctx.stroke_text(text, x as f64, y as f64)?;
        Ok(())
    }

    fn draw_image(&mut self, image: &HtmlImageElement, draw: ImageDraw) -> crate::Result {
        match draw {
            ImageDraw::Scaled { dst } => self
                .ctx
                .draw_image_with_html_image_element_and_dw_and_dh(
                    image,
                    dst.origin.x as f64,
                    dst.origin.y as f64,
                    dst.size.width as f64,
                    dst.size.height as f64,
                )?,
            ImageDraw::Clipped { src, dst } => self
                .ctx
                .draw_image_with_html_image_element_and_sw_and_sh_and_dx_and_dy_and_dw_and_dh(
                    image,
                    src.origin.x as f64,
                    src.origin.y as f64,
                    src.size.width as f64,
                    src.size.height as f64,
                    dst.origin.x as f64,
                    dst.origin.y as f64,
                    dst.size.width as f64,
                    dst.size.height as f64,
                )?,
        }

        Ok(())
    }
}
