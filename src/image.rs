// MIT/Apache2 License

use lyon_geom::Size;

/// A host-side image resource that may still be decoding.
///
/// Hosts usually decode images asynchronously: a handle is returned immediately, and its pixel data and
/// dimensions are filled in at some later point. `easel` never waits for this to happen. Instead, the
/// natural size is queried at draw time, and drawing an image that is not ready yet is reported as
/// [`Error::NotReady`].
///
/// [`Error::NotReady`]: crate::Error::NotReady
pub trait ImageSource {
    /// The natural pixel dimensions of the image, or `None` if it has not finished decoding.
    ///
    /// An image whose decode failed or stalled keeps returning `None` indefinitely.
    fn natural_size(&self) -> Option<Size<u32>>;

    /// Has this image finished decoding?
    #[inline]
    fn is_ready(&self) -> bool {
        self.natural_size().is_some()
    }
}

impl<I: ImageSource + ?Sized> ImageSource for &I {
    #[inline]
    fn natural_size(&self) -> Option<Size<u32>> {
        (**self).natural_size()
    }
}

/// The image-loading facility behind a [`Surface`].
///
/// Given a locator, such as a path or a URI, a `Loader` starts decoding the resource and returns a
/// handle to it straight away. The locator is not validated here; a bad locator shows up later as an
/// image that never becomes ready.
///
/// [`Surface`]: crate::Surface
pub trait Loader {
    /// The handle type this loader produces.
    type Image: ImageSource;

    /// Begin loading the resource at `locator`.
    fn load_image(&mut self, locator: &str) -> crate::Result<Self::Image>;
}

impl<L: Loader + ?Sized> Loader for &mut L {
    type Image = L::Image;

    #[inline]
    fn load_image(&mut self, locator: &str) -> crate::Result<Self::Image> {
        (**self).load_image(locator)
    }
}
