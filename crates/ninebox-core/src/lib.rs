//! Core vocabulary for the 9-Box Puzzle Game homepage.
//!
//! This crate holds the small, I/O-free types shared by the asset loader and
//! the desktop application:
//!
//! - [`difficulty`]: The three difficulty levels a game can be started with.
//! - [`destination`]: The secondary screens reachable from the homepage
//!   navigation row.
//! - [`catalog`]: The fixed relative paths of every image the homepage uses.
//!
//! # Examples
//!
//! ```
//! use std::path::Path;
//!
//! use ninebox_core::{AssetCatalog, Difficulty};
//!
//! let catalog = AssetCatalog::new("assets");
//! assert_eq!(
//!     catalog.difficulty_icon(Difficulty::Hard),
//!     Path::new("assets/images/hard.png")
//! );
//! assert_eq!(Difficulty::Hard.to_string(), "Hard");
//! ```

pub mod catalog;
pub mod destination;
pub mod difficulty;

pub use self::{catalog::AssetCatalog, destination::Destination, difficulty::Difficulty};
