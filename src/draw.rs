// MIT/Apache2 License

use lyon_geom::{Point, Rect, Size};

/// How a caller wants an image placed on the surface.
///
/// Any width or height left as `None` is filled in with the image's natural width or height.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum DrawSpec {
    /// Draw the whole image with its top-left corner at `(x, y)`, optionally scaled.
    Simple {
        x: f32,
        y: f32,
        width: Option<f32>,
        height: Option<f32>,
    },
    /// Clip the region `(sx, sy, sw, sh)` out of the image and draw it into `(dx, dy, dw, dh)`.
    Clipped {
        sx: f32,
        sy: f32,
        sw: Option<f32>,
        sh: Option<f32>,
        dx: f32,
        dy: f32,
        dw: Option<f32>,
        dh: Option<f32>,
    },
}

impl DrawSpec {
    /// Draw the whole image at its natural size.
    #[inline]
    pub fn at(x: f32, y: f32) -> Self {
        DrawSpec::Simple {
            x,
            y,
            width: None,
            height: None,
        }
    }

    /// Draw the whole image, scaled to `width` by `height`.
    #[inline]
    pub fn scaled(x: f32, y: f32, width: f32, height: f32) -> Self {
        DrawSpec::Simple {
            x,
            y,
            width: Some(width),
            height: Some(height),
        }
    }

    /// Copy the `src` region of the image into the `dst` region of the surface.
    #[inline]
    pub fn clipped(src: Rect<f32>, dst: Rect<f32>) -> Self {
        DrawSpec::Clipped {
            sx: src.origin.x,
            sy: src.origin.y,
            sw: Some(src.size.width),
            sh: Some(src.size.height),
            dx: dst.origin.x,
            dy: dst.origin.y,
            dw: Some(dst.size.width),
            dh: Some(dst.size.height),
        }
    }

    /// Fill in the missing dimensions from the natural size of the image.
    #[inline]
    pub fn resolve(self, natural: Size<u32>) -> ImageDraw {
        let nw = natural.width as f32;
        let nh = natural.height as f32;

        match self {
            DrawSpec::Simple {
                x,
                y,
                width,
                height,
            } => ImageDraw::Scaled {
                dst: rect(x, y, width.unwrap_or(nw), height.unwrap_or(nh)),
            },
            DrawSpec::Clipped {
                sx,
                sy,
                sw,
                sh,
                dx,
                dy,
                dw,
                dh,
            } => ImageDraw::Clipped {
                src: rect(sx, sy, sw.unwrap_or(nw), sh.unwrap_or(nh)),
                dst: rect(dx, dy, dw.unwrap_or(nw), dh.unwrap_or(nh)),
            },
        }
    }
}

/// Fully resolved image geometry, as handed to a [`Surface`].
///
/// [`Surface`]: crate::Surface
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ImageDraw {
    /// Draw the entire image into `dst`.
    Scaled { dst: Rect<f32> },
    /// Draw the `src` region of the image into `dst`.
    Clipped { src: Rect<f32>, dst: Rect<f32> },
}

impl ImageDraw {
    /// The region of the surface that is drawn to.
    #[inline]
    pub fn destination(&self) -> Rect<f32> {
        match self {
            ImageDraw::Scaled { dst } | ImageDraw::Clipped { dst, .. } => *dst,
        }
    }
}

#[inline]
pub(crate) fn rect(x: f32, y: f32, width: f32, height: f32) -> Rect<f32> {
    Rect::new(Point::new(x, y), Size::new(width, height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_natural_size() {
        let draw = DrawSpec::at(10.0, 20.0).resolve(Size::new(64, 32));
        assert_eq!(
            draw,
            ImageDraw::Scaled {
                dst: rect(10.0, 20.0, 64.0, 32.0)
            }
        );
    }

    #[test]
    fn test_simple_partial_override() {
        let spec = DrawSpec::Simple {
            x: 0.0,
            y: 0.0,
            width: Some(128.0),
            height: None,
        };
        assert_eq!(
            spec.resolve(Size::new(64, 32)).destination(),
            rect(0.0, 0.0, 128.0, 32.0)
        );

        // an explicit zero is not the same as an omitted dimension
        let spec = DrawSpec::scaled(0.0, 0.0, 0.0, 0.0);
        assert_eq!(
            spec.resolve(Size::new(64, 32)).destination(),
            rect(0.0, 0.0, 0.0, 0.0)
        );
    }

    #[test]
    fn test_clipped() {
        let spec = DrawSpec::Clipped {
            sx: 16.0,
            sy: 0.0,
            sw: Some(16.0),
            sh: None,
            dx: 100.0,
            dy: 50.0,
            dw: None,
            dh: Some(48.0),
        };
        assert_eq!(
            spec.resolve(Size::new(64, 16)),
            ImageDraw::Clipped {
                src: rect(16.0, 0.0, 16.0, 16.0),
                dst: rect(100.0, 50.0, 64.0, 48.0),
            }
        );

        let full = DrawSpec::clipped(rect(0.0, 0.0, 8.0, 8.0), rect(1.0, 2.0, 3.0, 4.0));
        assert_eq!(
            full.resolve(Size::new(64, 16)),
            ImageDraw::Clipped {
                src: rect(0.0, 0.0, 8.0, 8.0),
                dst: rect(1.0, 2.0, 3.0, 4.0),
            }
        );
    }
}
