// MIT/Apache2 License

//! Helpers for CSS-like font descriptors, such as `"bold 20px Arial"`.

/// Extract the font size from a font descriptor.
///
/// The size is the first run of ASCII digits in the descriptor, read as a whole number. Anything after
/// the run, including a fractional part or the unit, is ignored; `"12.5px serif"` has a size of `12`.
#[inline]
pub fn font_size(descriptor: &str) -> crate::Result<f32> {
    let start = descriptor
        .find(|c: char| c.is_ascii_digit())
        .ok_or_else(|| crate::Error::MalformedFontDescriptor(descriptor.to_string()))?;
    let digits = &descriptor[start..];
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());

    digits[..end]
        .parse::<f32>()
        .map_err(|_| crate::Error::MalformedFontDescriptor(descriptor.to_string()))
}

/// Derive the stroke width used to outline text drawn in the given font.
///
/// This is the font size divided by `divisor`.
#[inline]
pub fn outline_width(descriptor: &str, divisor: f32) -> crate::Result<f32> {
    Ok(font_size(descriptor)? / divisor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_font_size() {
        assert_abs_diff_eq!(font_size("20px Arial").unwrap(), 20.0);
        assert_abs_diff_eq!(font_size("bold 14px serif").unwrap(), 14.0);
        assert_abs_diff_eq!(font_size("12.5px serif").unwrap(), 12.0);
        assert_abs_diff_eq!(font_size("36").unwrap(), 36.0);
    }

    #[test]
    fn test_missing_size() {
        assert_eq!(
            font_size("Arial"),
            Err(Error::MalformedFontDescriptor("Arial".into()))
        );
        assert_eq!(
            font_size(""),
            Err(Error::MalformedFontDescriptor(String::new()))
        );
    }

    #[test]
    fn test_outline_width() {
        assert_abs_diff_eq!(outline_width("20px Arial", 10.0).unwrap(), 2.0);
        assert_abs_diff_eq!(outline_width("12px Arial", 10.0).unwrap(), 1.2);
        assert!(outline_width("sans-serif", 10.0).is_err());
    }
}
