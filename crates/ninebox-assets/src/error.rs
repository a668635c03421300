//! Asset loading errors.

use std::{io, path::PathBuf};

use crate::ImageSize;

/// Why an image could not be turned into something displayable.
///
/// Every variant carries the offending path so that callers can log it
/// without keeping their own copy.
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum AssetLoadError {
    /// The file is missing or cannot be read.
    #[display("cannot open image {}: {source}", path.display())]
    Open {
        /// Requested file.
        #[error(not(source))]
        path: PathBuf,
        /// Underlying I/O failure.
        source: io::Error,
    },
    /// The file was read but is not a decodable image.
    #[display("cannot decode image {}: {source}", path.display())]
    Decode {
        /// Requested file.
        #[error(not(source))]
        path: PathBuf,
        /// Underlying decoder failure.
        source: image::ImageError,
    },
    /// The image, or its scaled form, has no pixels along one axis.
    #[display("image {} has degenerate size {size}", path.display())]
    Degenerate {
        /// Requested file.
        #[error(not(source))]
        path: PathBuf,
        /// The offending size.
        #[error(not(source))]
        size: ImageSize,
    },
}

impl AssetLoadError {
    /// Returns the path of the asset that failed to load.
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Open { path, .. } | Self::Decode { path, .. } | Self::Degenerate { path, .. } => {
                path
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{error::Error as _, io, path::PathBuf};

    use super::AssetLoadError;
    use crate::ImageSize;

    #[test]
    fn open_error_reports_path_and_source() {
        let err = AssetLoadError::Open {
            path: PathBuf::from("images/missing.png"),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };
        assert_eq!(err.path(), PathBuf::from("images/missing.png"));
        assert!(err.to_string().contains("images/missing.png"));
        assert!(err.source().is_some());
    }

    #[test]
    fn degenerate_error_has_no_source() {
        let err = AssetLoadError::Degenerate {
            path: PathBuf::from("images/line.png"),
            size: ImageSize::new(1000, 0),
        };
        assert!(err.source().is_none());
        assert_eq!(
            err.to_string(),
            "image images/line.png has degenerate size 1000x0"
        );
    }
}
