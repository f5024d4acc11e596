// MIT/Apache2 License

use ordered_float::NotNan;
use std::fmt;

/// Horizontal alignment of text relative to its anchor point.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TextAlign {
    Left,
    Right,
    Center,
    Start,
    End,
}

impl TextAlign {
    /// The keyword a 2D canvas uses for this alignment.
    #[inline]
    pub fn as_str(self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Right => "right",
            TextAlign::Center => "center",
            TextAlign::Start => "start",
            TextAlign::End => "end",
        }
    }
}

impl fmt::Display for TextAlign {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The shape used to join two connected stroke segments.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LineJoin {
    Miter,
    Round,
    Bevel,
}

impl LineJoin {
    /// The keyword a 2D canvas uses for this join.
    #[inline]
    pub fn as_str(self) -> &'static str {
        match self {
            LineJoin::Miter => "miter",
            LineJoin::Round => "round",
            LineJoin::Bevel => "bevel",
        }
    }
}

/// The width that strokes are drawn with. This is a wrapper around an `f32` with two invariants:
///
/// * The inner value is finite and never `NaN`.
/// * The inner value is never negative.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct LineWidth {
    inner: NotNan<f32>,
}

impl LineWidth {
    pub const ONE: LineWidth = unsafe { LineWidth::new_unchecked(1.0) };

    /// Create a new `LineWidth`, without checking the inner value.
    ///
    /// # Safety
    ///
    /// Behavior is undefined if `inner` is not a number.
    #[inline]
    pub const unsafe fn new_unchecked(inner: f32) -> Self {
        Self {
            inner: unsafe { NotNan::unchecked_new(inner) },
        }
    }

    /// Create a new `LineWidth`. Returns `None` if the value is non-finite or negative.
    #[inline]
    pub fn new(inner: f32) -> Option<Self> {
        if !inner.is_finite() || inner < 0.0 {
            None
        } else {
            NotNan::new(inner).ok().map(|inner| Self { inner })
        }
    }

    /// Get the inner value of the `LineWidth`.
    #[inline]
    pub fn into_inner(self) -> f32 {
        self.inner.into_inner()
    }
}

impl Default for LineWidth {
    #[inline]
    fn default() -> Self {
        Self::ONE
    }
}

impl From<LineWidth> for f32 {
    #[inline]
    fn from(lw: LineWidth) -> f32 {
        lw.into_inner()
    }
}

/// A mirror of the mutable style state held by a drawing surface.
///
/// Every drawing operation on a [`Painter`] writes some of these fields as a side effect, and nothing
/// restores them afterwards. The fields an operation touches are listed by [`Operation::writes`].
///
/// [`Painter`]: crate::Painter
/// [`Operation::writes`]: crate::Operation::writes
#[derive(Debug, Clone, PartialEq)]
pub struct StyleState {
    pub fill_style: String,
    pub stroke_style: String,
    pub line_width: LineWidth,
    pub line_join: LineJoin,
    pub miter_limit: f32,
    pub text_align: TextAlign,
    pub font: String,
}

impl Default for StyleState {
    /// The state of a freshly created 2D canvas.
    #[inline]
    fn default() -> Self {
        Self {
            fill_style: "#000000".into(),
            stroke_style: "#000000".into(),
            line_width: LineWidth::ONE,
            line_join: LineJoin::Miter,
            miter_limit: 10.0,
            text_align: TextAlign::Start,
            font: "10px sans-serif".into(),
        }
    }
}

impl StyleState {
    /// The set of fields whose values differ between `self` and `other`.
    #[inline]
    pub fn changed_fields(&self, other: &StyleState) -> StyleFields {
        StyleFields {
            fill_style: self.fill_style != other.fill_style,
            stroke_style: self.stroke_style != other.stroke_style,
            line_width: self.line_width != other.line_width,
            line_join: self.line_join != other.line_join,
            miter_limit: self.miter_limit != other.miter_limit,
            text_align: self.text_align != other.text_align,
            font: self.font != other.font,
        }
    }
}

/// A selection of fields in a [`StyleState`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct StyleFields {
    pub fill_style: bool,
    pub stroke_style: bool,
    pub line_width: bool,
    pub line_join: bool,
    pub miter_limit: bool,
    pub text_align: bool,
    pub font: bool,
}

impl StyleFields {
    pub const NONE: StyleFields = StyleFields {
        fill_style: false,
        stroke_style: false,
        line_width: false,
        line_join: false,
        miter_limit: false,
        text_align: false,
        font: false,
    };

    /// Are no fields selected?
    #[inline]
    pub fn is_empty(self) -> bool {
        self == Self::NONE
    }

    /// Is every field selected in `self` also selected in `other`?
    #[inline]
    pub fn is_subset_of(self, other: StyleFields) -> bool {
        (!self.fill_style || other.fill_style)
            && (!self.stroke_style || other.stroke_style)
            && (!self.line_width || other.line_width)
            && (!self.line_join || other.line_join)
            && (!self.miter_limit || other.miter_limit)
            && (!self.text_align || other.text_align)
            && (!self.font || other.font)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_width_invariants() {
        assert_eq!(LineWidth::new(2.0).map(LineWidth::into_inner), Some(2.0));
        assert_eq!(LineWidth::new(0.0).map(LineWidth::into_inner), Some(0.0));
        assert!(LineWidth::new(-1.0).is_none());
        assert!(LineWidth::new(f32::NAN).is_none());
        assert!(LineWidth::new(f32::INFINITY).is_none());
        assert_eq!(LineWidth::default(), LineWidth::ONE);
    }

    #[test]
    fn test_changed_fields() {
        let before = StyleState::default();
        let mut after = before.clone();
        assert!(after.changed_fields(&before).is_empty());

        after.fill_style = "red".into();
        after.text_align = TextAlign::Center;
        let changed = after.changed_fields(&before);
        assert_eq!(
            changed,
            StyleFields {
                fill_style: true,
                text_align: true,
                ..StyleFields::NONE
            }
        );

        let wider = StyleFields {
            fill_style: true,
            text_align: true,
            font: true,
            ..StyleFields::NONE
        };
        assert!(changed.is_subset_of(wider));
        assert!(!wider.is_subset_of(changed));
    }

    #[test]
    fn test_keywords() {
        assert_eq!(TextAlign::Left.to_string(), "left");
        assert_eq!(TextAlign::Center.as_str(), "center");
        assert_eq!(LineJoin::Miter.as_str(), "miter");
    }
}
