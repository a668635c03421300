//! Fixture helpers for tests that need image files on disk.
//!
//! [`TestImageDir`] wraps a temporary directory and writes solid PNG files
//! into it. The directory is removed when the value is dropped. Available to
//! other crates through the `testing` feature.

use std::{
    fs,
    path::{Path, PathBuf},
};

use image::Rgba;
use tempfile::TempDir;

use crate::RgbaImage;

/// A scratch directory for image fixtures.
#[derive(Debug)]
pub struct TestImageDir {
    dir: TempDir,
}

impl Default for TestImageDir {
    fn default() -> Self {
        Self::new()
    }
}

impl TestImageDir {
    /// Creates a fresh, empty directory under the system temp dir.
    ///
    /// # Panics
    ///
    /// Panics if the directory cannot be created.
    #[must_use]
    pub fn new() -> Self {
        let dir = tempfile::Builder::new()
            .prefix("ninebox-test-")
            .tempdir()
            .expect("Failed to create fixture directory");
        Self { dir }
    }

    /// The directory path.
    #[must_use]
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Writes a `width`x`height` opaque PNG at `relative` and returns its path.
    ///
    /// Intermediate directories are created as needed, so
    /// `write_png("images/easy.png", ..)` works on a fresh directory.
    ///
    /// # Panics
    ///
    /// Panics if the file cannot be written.
    pub fn write_png(&self, relative: impl AsRef<Path>, width: u32, height: u32) -> PathBuf {
        let path = self.create_parent(relative);
        RgbaImage::from_pixel(width, height, Rgba([200, 120, 40, 255]))
            .save_with_format(&path, image::ImageFormat::Png)
            .expect("Failed to write PNG fixture");
        path
    }

    /// Writes bytes that no decoder accepts at `relative` and returns its path.
    ///
    /// # Panics
    ///
    /// Panics if the file cannot be written.
    pub fn write_garbage(&self, relative: impl AsRef<Path>) -> PathBuf {
        let path = self.create_parent(relative);
        fs::write(&path, b"not an image").expect("Failed to write fixture");
        path
    }

    fn create_parent(&self, relative: impl AsRef<Path>) -> PathBuf {
        let path = self.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create fixture subdirectory");
        }
        path
    }
}

#[cfg(test)]
mod tests {
    use super::TestImageDir;
    use crate::{ImageSize, load_image};

    #[test]
    fn fixtures_are_written_and_removed_with_the_dir() {
        let dir = TestImageDir::new();
        let path = dir.write_png("images/icon.png", 400, 100);
        assert_eq!(load_image(&path).unwrap().size(), ImageSize::new(400, 100));

        let root = dir.path().to_owned();
        drop(dir);
        assert!(!root.exists());
    }
}
