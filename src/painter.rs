// MIT/Apache2 License

use crate::{
    font, DrawSpec, Error, ImageRegistry, ImageSource, LineJoin, LineWidth, StyleFields,
    StyleState, Surface, TextAlign,
};
use lyon_geom::{Angle, Size};

/// Defaults used by a [`Painter`] when optional parameters are left out.
#[derive(Debug, Clone, PartialEq)]
pub struct PainterConfig {
    /// The font set on the surface when the `Painter` is created.
    pub font: String,
    /// Alignment used by `text()` and `outline_text()` when none is given.
    pub text_align: TextAlign,
    /// Width used by stroking operations when none is given.
    pub line_width: LineWidth,
    /// Outline style used by `outline_text()` when none is given.
    pub outline_style: String,
    /// The font size is divided by this to get the outline width of `outline_text()`.
    pub outline_width_divisor: f32,
    /// Miter limit used by `outline_text()`.
    pub outline_miter_limit: f32,
}

impl Default for PainterConfig {
    #[inline]
    fn default() -> Self {
        Self {
            font: "12px Arial".into(),
            text_align: TextAlign::Left,
            line_width: LineWidth::ONE,
            outline_style: "black".into(),
            outline_width_divisor: 10.0,
            outline_miter_limit: 2.0,
        }
    }
}

/// The helper operations a [`Painter`] provides.
///
/// Each one declares the style fields it overwrites on the surface and the style fields its output
/// depends on. Style is never restored after an operation, so an operation that reads a field it does
/// not write inherits whatever the last operation left behind.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Operation {
    Clear,
    DrawImage,
    SetFont,
    Text,
    OutlineText,
    Dot,
    Line,
    Rect,
    FillRect,
    BorderRect,
    Circle,
    FillCircle,
    BorderCircle,
}

impl Operation {
    pub const ALL: [Operation; 13] = [
        Operation::Clear,
        Operation::DrawImage,
        Operation::SetFont,
        Operation::Text,
        Operation::OutlineText,
        Operation::Dot,
        Operation::Line,
        Operation::Rect,
        Operation::FillRect,
        Operation::BorderRect,
        Operation::Circle,
        Operation::FillCircle,
        Operation::BorderCircle,
    ];

    /// The style fields this operation may overwrite.
    #[inline]
    pub fn writes(self) -> StyleFields {
        let fill = StyleFields {
            fill_style: true,
            ..StyleFields::NONE
        };
        let stroke = StyleFields {
            stroke_style: true,
            line_width: true,
            ..StyleFields::NONE
        };

        match self {
            Operation::Clear | Operation::DrawImage => StyleFields::NONE,
            Operation::SetFont => StyleFields {
                font: true,
                ..StyleFields::NONE
            },
            Operation::Text => StyleFields {
                text_align: true,
                ..fill
            },
            Operation::OutlineText => StyleFields {
                fill_style: true,
                line_join: true,
                miter_limit: true,
                text_align: true,
                ..stroke
            },
            Operation::Dot | Operation::FillRect | Operation::FillCircle => fill,
            Operation::Line | Operation::Rect | Operation::Circle => stroke,
            Operation::BorderRect | Operation::BorderCircle => StyleFields {
                fill_style: true,
                ..stroke
            },
        }
    }

    /// The style fields the output of this operation depends on.
    #[inline]
    pub fn reads(self) -> StyleFields {
        let corners = StyleFields {
            line_join: true,
            miter_limit: true,
            ..StyleFields::NONE
        };

        match self {
            Operation::Text | Operation::OutlineText => StyleFields {
                font: true,
                ..self.writes()
            },
            Operation::Rect => StyleFields {
                stroke_style: true,
                line_width: true,
                ..corners
            },
            Operation::BorderRect => StyleFields {
                fill_style: true,
                stroke_style: true,
                line_width: true,
                ..corners
            },
            op => op.writes(),
        }
    }
}

/// A surface paired with a mirror of the style state written to it.
#[derive(Debug)]
struct StyledSurface<S> {
    surface: S,
    style: StyleState,
}

impl<S: Surface> StyledSurface<S> {
    #[inline]
    fn fill_style(&mut self, style: &str) -> crate::Result {
        self.surface.set_fill_style(style)?;
        self.style.fill_style.replace_range(.., style);
        Ok(())
    }

    #[inline]
    fn stroke_style(&mut self, style: &str) -> crate::Result {
        self.surface.set_stroke_style(style)?;
        self.style.stroke_style.replace_range(.., style);
        Ok(())
    }

    #[inline]
    fn line_width(&mut self, width: LineWidth) -> crate::Result {
        self.surface.set_line_width(width.into_inner())?;
        self.style.line_width = width;
        Ok(())
    }

    #[inline]
    fn line_join(&mut self, join: LineJoin) -> crate::Result {
        self.surface.set_line_join(join)?;
        self.style.line_join = join;
        Ok(())
    }

    #[inline]
    fn miter_limit(&mut self, limit: f32) -> crate::Result {
        self.surface.set_miter_limit(limit)?;
        self.style.miter_limit = limit;
        Ok(())
    }

    #[inline]
    fn text_align(&mut self, align: TextAlign) -> crate::Result {
        self.surface.set_text_align(align)?;
        self.style.text_align = align;
        Ok(())
    }

    #[inline]
    fn font(&mut self, font: &str) -> crate::Result {
        self.surface.set_font(font)?;
        self.style.font.replace_range(.., font);
        Ok(())
    }

    #[inline]
    fn full_circle(&mut self, x: f32, y: f32, radius: f32) -> crate::Result {
        self.surface.arc(
            x,
            y,
            radius,
            Angle { radians: 0.0 },
            Angle {
                radians: std::f32::consts::PI * 2.0,
            },
        )
    }
}

/// Named helper operations over a [`Surface`], plus a registry of named images.
///
/// Every helper is a short sequence of calls on the underlying surface. Helpers configure whatever style
/// they need before drawing and leave it that way afterwards; see [`Operation`] for which fields each one
/// touches. Optional parameters take their defaults from the [`PainterConfig`].
///
/// Colors are opaque style descriptors (e.g. `"red"`, `"#ff0000"`) and are handed to the surface as-is.
#[derive(Debug)]
pub struct Painter<S: Surface> {
    target: StyledSurface<S>,
    images: ImageRegistry<S::Image>,
    config: PainterConfig,
}

impl<S: Surface> Painter<S> {
    /// Wrap a surface using the default configuration.
    #[inline]
    pub fn new(surface: S) -> crate::Result<Self> {
        Self::with_config(surface, PainterConfig::default())
    }

    /// Wrap a surface. This sets the configured font on the surface.
    pub fn with_config(surface: S, config: PainterConfig) -> crate::Result<Self> {
        let mut target = StyledSurface {
            surface,
            style: StyleState::default(),
        };
        target.font(&config.font)?;

        let size = target.surface.size();
        log::debug!(
            "Created painter for {}x{} surface with font \"{}\"",
            size.width,
            size.height,
            config.font
        );

        Ok(Self {
            target,
            images: ImageRegistry::new(),
            config,
        })
    }

    /// Get a reference to the underlying surface.
    #[inline]
    pub fn surface(&self) -> &S {
        &self.target.surface
    }

    /// Get a mutable reference to the underlying surface.
    ///
    /// Style changes made directly on the surface are not reflected in [`style()`](Self::style).
    #[inline]
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.target.surface
    }

    /// Unwrap the underlying surface.
    #[inline]
    pub fn into_surface(self) -> S {
        self.target.surface
    }

    /// The style state this painter has written to the surface.
    #[inline]
    pub fn style(&self) -> &StyleState {
        &self.target.style
    }

    /// The current font descriptor.
    #[inline]
    pub fn font(&self) -> &str {
        &self.target.style.font
    }

    #[inline]
    pub fn config(&self) -> &PainterConfig {
        &self.config
    }

    /// The pixel dimensions of the surface.
    #[inline]
    pub fn size(&self) -> Size<f32> {
        self.target.surface.size()
    }

    /// The registered images.
    #[inline]
    pub fn images(&self) -> &ImageRegistry<S::Image> {
        &self.images
    }

    /* Images */

    /// Begin loading the image at `locator` and register it under `name`.
    ///
    /// Loading is not awaited. If `name` is already registered, the old handle is dropped from the
    /// registry; any load it has in flight is left alone.
    pub fn register_image(&mut self, name: impl Into<String>, locator: &str) -> crate::Result {
        let name = name.into();
        let image = self.target.surface.load_image(locator)?;

        if self.images.contains(&name) {
            log::warn!("Replacing image \"{}\" with \"{}\"", name, locator);
        } else {
            log::debug!("Registering image \"{}\" from \"{}\"", name, locator);
        }

        self.images.insert(name, image);
        Ok(())
    }

    /// Get the image registered under `name`.
    #[inline]
    pub fn image(&self, name: &str) -> crate::Result<&S::Image> {
        self.images.get(name)
    }

    /// Draw the image registered under `name`.
    ///
    /// Dimensions left out of `spec` are taken from the natural size of the image. Fails with
    /// [`Error::NotFound`] if nothing is registered under `name`, and with [`Error::NotReady`] if the
    /// image has not finished decoding; nothing is drawn in either case.
    pub fn draw_image(&mut self, name: &str, spec: DrawSpec) -> crate::Result {
        let image = self.images.get(name)?;
        let natural = image
            .natural_size()
            .ok_or_else(|| Error::NotReady(name.to_string()))?;
        let draw = spec.resolve(natural);

        log::trace!("Drawing image \"{}\": {:?}", name, draw);
        self.target.surface.draw_image(image, draw)
    }

    /* Surface */

    /// Clear the entire surface.
    #[inline]
    pub fn clear(&mut self) -> crate::Result {
        let Size { width, height, .. } = self.target.surface.size();
        self.target.surface.clear_rect(0.0, 0.0, width, height)
    }

    /// Set the font used by text operations. Does nothing if `font` is already the current font.
    #[inline]
    pub fn set_font(&mut self, font: &str) -> crate::Result {
        if font == self.target.style.font {
            return Ok(());
        }

        self.target.font(font)
    }

    /* Text */

    /// Fill a run of text at (x, y).
    pub fn text(
        &mut self,
        x: f32,
        y: f32,
        text: &str,
        color: &str,
        align: Option<TextAlign>,
    ) -> crate::Result {
        self.target.fill_style(color)?;
        self.target
            .text_align(align.unwrap_or(self.config.text_align))?;
        self.target.surface.fill_text(text, x, y)
    }

    /// Draw a run of text at (x, y) with an outline around each glyph.
    ///
    /// The outline width is a tenth of the current font size. Fails with
    /// [`Error::MalformedFontDescriptor`] before drawing anything if the current font has no size.
    pub fn outline_text(
        &mut self,
        x: f32,
        y: f32,
        text: &str,
        color: &str,
        outline: Option<&str>,
        align: Option<TextAlign>,
    ) -> crate::Result {
        let width = font::outline_width(&self.target.style.font, self.config.outline_width_divisor)?;
        let width = line_width(Some(width), &self.config)?;

        self.target.fill_style(color)?;
        self.target
            .stroke_style(outline.unwrap_or(self.config.outline_style.as_str()))?;
        self.target.line_width(width)?;
        self.target.line_join(LineJoin::Miter)?;
        self.target.miter_limit(self.config.outline_miter_limit)?;
        self.target
            .text_align(align.unwrap_or(self.config.text_align))?;

        self.target.surface.stroke_text(text, x, y)?;
        self.target.surface.fill_text(text, x, y)
    }

    /* Shapes */

    /// Fill a single pixel at (x, y).
    #[inline]
    pub fn dot(&mut self, x: f32, y: f32, color: &str) -> crate::Result {
        self.fill_rect(x, y, 1.0, 1.0, color)
    }

    /// Stroke a straight line from (x1, y1) to (x2, y2).
    pub fn line(
        &mut self,
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        color: &str,
        width: Option<f32>,
    ) -> crate::Result {
        let width = line_width(width, &self.config)?;

        self.target.surface.begin_path()?;
        self.target.line_width(width)?;
        self.target.stroke_style(color)?;
        self.target.surface.move_to(x1, y1)?;
        self.target.surface.line_to(x2, y2)?;
        self.target.surface.stroke()
    }

    /// Stroke the outline of a rectangle.
    pub fn rect(
        &mut self,
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        color: &str,
        width: Option<f32>,
    ) -> crate::Result {
        let width = line_width(width, &self.config)?;

        self.target.line_width(width)?;
        self.target.stroke_style(color)?;
        self.target.surface.stroke_rect(x, y, w, h)
    }

    /// Fill a rectangle.
    #[inline]
    pub fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: &str) -> crate::Result {
        self.target.fill_style(color)?;
        self.target.surface.fill_rect(x, y, w, h)
    }

    /// Fill a rectangle, then stroke its outline on top.
    #[allow(clippy::too_many_arguments)]
    pub fn border_rect(
        &mut self,
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        fill: &str,
        border: &str,
        width: Option<f32>,
    ) -> crate::Result {
        // reject a bad width before anything is drawn
        let width = line_width(width, &self.config)?;

        self.fill_rect(x, y, w, h, fill)?;
        self.rect(x, y, w, h, border, Some(width.into_inner()))
    }

    /// Stroke the outline of a circle.
    pub fn circle(
        &mut self,
        x: f32,
        y: f32,
        radius: f32,
        color: &str,
        width: Option<f32>,
    ) -> crate::Result {
        let width = line_width(width, &self.config)?;

        self.target.surface.begin_path()?;
        self.target.stroke_style(color)?;
        self.target.line_width(width)?;
        self.target.full_circle(x, y, radius)?;
        self.target.surface.stroke()
    }

    /// Fill a circle.
    pub fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: &str) -> crate::Result {
        self.target.surface.begin_path()?;
        self.target.fill_style(color)?;
        self.target.full_circle(x, y, radius)?;
        self.target.surface.fill()
    }

    /// Fill a circle, then stroke its outline on top.
    ///
    /// This looks the same as `fill_circle()` followed by `circle()`, but only builds the path once.
    #[allow(clippy::too_many_arguments)]
    pub fn border_circle(
        &mut self,
        x: f32,
        y: f32,
        radius: f32,
        fill: &str,
        border: &str,
        width: Option<f32>,
    ) -> crate::Result {
        let width = line_width(width, &self.config)?;

        self.target.surface.begin_path()?;
        self.target.full_circle(x, y, radius)?;
        self.target.fill_style(fill)?;
        self.target.surface.fill()?;
        self.target.line_width(width)?;
        self.target.stroke_style(border)?;
        self.target.surface.stroke()
    }
}

#[inline]
fn line_width(width: Option<f32>, config: &PainterConfig) -> crate::Result<LineWidth> {
    match width {
        None => Ok(config.line_width),
        Some(w) => LineWidth::new(w).ok_or(Error::InvalidLineWidth(w)),
    }
}
