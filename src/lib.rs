// MIT/Apache2 License

//! Named helper operations (rectangles, circles, lines, text and image blits) over an immediate-mode
//! 2D drawing surface, along with a registry of named images.
//!
//! The drawing itself is done by a host-supplied [`Surface`]. A [`Painter`] wraps one and turns each
//! helper into the handful of style and drawing calls it stands for.

mod error;

pub mod draw;
pub mod font;
pub mod image;
pub mod painter;
pub mod recording;
pub mod registry;
pub mod style;
pub mod surface;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub mod web;

pub use draw::*;
pub use error::*;
pub use image::*;
pub use painter::*;
pub use registry::*;
pub use style::*;
pub use surface::*;
