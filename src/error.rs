// MIT/Apache2 License

use std::fmt;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
use wasm_bindgen::JsValue;

/// Sum error type for easel operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// No image was ever registered under this name.
    NotFound(String),
    /// The image registered under this name has not finished decoding, so its natural size is unknown.
    NotReady(String),
    /// The font descriptor has no numeric size token to derive an outline width from.
    MalformedFontDescriptor(String),
    /// A line width was NaN, infinite or negative.
    InvalidLineWidth(f32),
    /// The host drawing surface or image loader reported a failure.
    Host(String),
}

impl std::error::Error for Error {}

impl fmt::Display for Error {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(name) => write!(f, "No image is registered under the name \"{}\"", name),
            Self::NotReady(name) => write!(f, "Image \"{}\" has not finished decoding", name),
            Self::MalformedFontDescriptor(font) => {
                write!(f, "Font descriptor \"{}\" does not contain a size", font)
            }
            Self::InvalidLineWidth(w) => write!(f, "{} is not a valid line width", w),
            Self::Host(msg) => f.write_str(msg),
        }
    }
}

#[cfg(all(target_arch = "wasm32", feature = "web"))]
impl From<JsValue> for Error {
    #[inline]
    fn from(js: JsValue) -> Self {
        Self::Host(format!("{:?}", js))
    }
}

/// Convenience result type.
pub type Result<T = ()> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            Error::NotFound("hero".into()).to_string(),
            "No image is registered under the name \"hero\""
        );
        assert_eq!(
            Error::MalformedFontDescriptor("Arial".into()).to_string(),
            "Font descriptor \"Arial\" does not contain a size"
        );
        assert_eq!(Error::Host("lost context".into()).to_string(), "lost context");
    }
}
