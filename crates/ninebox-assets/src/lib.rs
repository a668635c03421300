//! Image loading and icon scaling for the 9-Box Puzzle Game homepage.
//!
//! The homepage shows a full-window background and seven image buttons. This
//! crate turns the image files behind them into pixel buffers the UI can
//! upload:
//!
//! - [`load_image`] decodes a file into a [`LoadedImage`].
//! - [`scaled_size`] computes the aspect-ratio-preserving size for a fixed
//!   target width.
//! - [`scale_to_width`] and [`load_scaled_icon`] produce a [`ScaledIcon`]
//!   resampled with a bicubic filter.
//!
//! Every fallible operation returns [`AssetLoadError`]. Callers decide how to
//! degrade; the homepage logs the error and shows the element without an
//! image.
//!
//! # Examples
//!
//! ```
//! use ninebox_assets::{ImageSize, scaled_size};
//!
//! let natural = ImageSize::new(400, 100);
//! assert_eq!(scaled_size(natural, 200), Some(ImageSize::new(200, 50)));
//! ```

pub mod error;
pub mod load;
pub mod scale;
pub mod size;
#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use self::{
    error::AssetLoadError,
    load::{LoadedImage, load_image},
    scale::{BUTTON_TARGET_WIDTH, ScaledIcon, fit_to_max_side, load_scaled_icon, scale_to_width},
    size::{ImageSize, scaled_size},
};

/// RGBA8 pixel buffer type used for every decoded and scaled image.
pub type RgbaImage = image::RgbaImage;
