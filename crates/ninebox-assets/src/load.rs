//! Decoding image files.

use std::path::{Path, PathBuf};

use image::ImageReader;
use log::debug;

use crate::{AssetLoadError, ImageSize, RgbaImage};

/// A decoded image together with the path it was read from.
///
/// Immutable after loading; scaling produces a new buffer.
#[derive(Debug, Clone)]
pub struct LoadedImage {
    path: PathBuf,
    pixels: RgbaImage,
}

impl LoadedImage {
    /// Wraps already-decoded pixels.
    ///
    /// # Errors
    ///
    /// Returns [`AssetLoadError::Degenerate`] if `pixels` has no area.
    pub fn from_pixels(path: impl Into<PathBuf>, pixels: RgbaImage) -> Result<Self, AssetLoadError> {
        let path = path.into();
        let size = ImageSize::new(pixels.width(), pixels.height());
        if size.is_empty() {
            return Err(AssetLoadError::Degenerate { path, size });
        }
        Ok(Self { path, pixels })
    }

    /// The file this image was read from.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Natural size in pixels.
    #[must_use]
    pub fn size(&self) -> ImageSize {
        ImageSize::new(self.pixels.width(), self.pixels.height())
    }

    /// The decoded pixels.
    #[must_use]
    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    /// Consumes the image and returns its pixels.
    #[must_use]
    pub fn into_pixels(self) -> RgbaImage {
        self.pixels
    }
}

/// Reads and decodes the image at `path`.
///
/// The format is guessed from the file contents rather than the extension.
///
/// # Errors
///
/// - [`AssetLoadError::Open`] if the file cannot be opened or read.
/// - [`AssetLoadError::Decode`] if the contents are not a supported image.
/// - [`AssetLoadError::Degenerate`] if the decoded image has no area.
pub fn load_image(path: impl AsRef<Path>) -> Result<LoadedImage, AssetLoadError> {
    let path = path.as_ref();
    let open_error = |source| AssetLoadError::Open {
        path: path.to_owned(),
        source,
    };

    let reader = ImageReader::open(path)
        .map_err(open_error)?
        .with_guessed_format()
        .map_err(open_error)?;
    let decoded = reader.decode().map_err(|source| AssetLoadError::Decode {
        path: path.to_owned(),
        source,
    })?;

    let image = LoadedImage::from_pixels(path, decoded.into_rgba8())?;
    debug!("Loaded image {} ({})", path.display(), image.size());
    Ok(image)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::load_image;
    use crate::{AssetLoadError, ImageSize, testing::TestImageDir};

    #[test]
    fn loads_png_with_natural_size() {
        let dir = TestImageDir::new();
        let path = dir.write_png("icon.png", 400, 100);

        let image = load_image(&path).unwrap();
        assert_eq!(image.size(), ImageSize::new(400, 100));
        assert_eq!(image.path(), path);
    }

    #[test]
    fn format_is_detected_from_contents() {
        let dir = TestImageDir::new();
        // PNG bytes behind a `.jpg` name, like a mislabelled background.
        let path = dir.write_png("background.jpg", 64, 48);

        let image = load_image(&path).unwrap();
        assert_eq!(image.size(), ImageSize::new(64, 48));
    }

    #[test]
    fn missing_file_is_an_open_error() {
        let dir = TestImageDir::new();
        let path = dir.path().join("missing.png");

        let err = load_image(&path).unwrap_err();
        assert!(matches!(err, AssetLoadError::Open { .. }));
        assert_eq!(err.path(), path);
    }

    #[test]
    fn garbage_file_is_a_decode_error() {
        let dir = TestImageDir::new();
        let path = dir.path().join("broken.png");
        fs::write(&path, b"definitely not an image").unwrap();

        let err = load_image(&path).unwrap_err();
        assert!(matches!(err, AssetLoadError::Decode { .. }));
    }

    #[test]
    fn directory_is_not_an_image() {
        let dir = TestImageDir::new();
        assert!(load_image(dir.path()).is_err());
    }
}
