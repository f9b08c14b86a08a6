//! # Veil Core API
//!
//! Hides text messages and whole images in the least significant bits of image pixels
//! and WAV audio samples, optionally encrypted with a password.
//!
//! Two layers are exposed:
//! - [`commands`] works on carrier file bytes in memory, e.g. [`commands::encode_text`]
//!   and [`commands::decode_text`]
//! - [`api`] offers file based builders, e.g. [`api::hide::prepare`]
//!
//! # Usage Examples
//!
//! ## Hide a message inside an image
//!
//! ```rust
//! use std::io::Cursor;
//! use image::{ImageFormat, RgbImage};
//! use veil_core::{commands, CodecOptions, Unveiled};
//!
//! let mut cover = Cursor::new(Vec::new());
//! RgbImage::new(64, 64)
//!     .write_to(&mut cover, ImageFormat::Png)
//!     .expect("Cannot write cover image");
//!
//! let opts = CodecOptions::default();
//! let secret = commands::encode_text(cover.get_ref(), b"Hello, World!", Some("SuperSecret42"), &opts)
//!     .expect("Failed to hide message in image");
//!
//! let unveiled = commands::decode_text(&secret, Some("SuperSecret42"))
//!     .expect("Failed to unveil message from image");
//! assert_eq!(unveiled, Unveiled::Message(b"Hello, World!".to_vec()));
//! ```
//!
//! ## Hide a message inside an image file
//!
//! ```rust,no_run
//! veil_core::api::hide::prepare()
//!     .with_message("Hello, World!")
//!     .with_password("SuperSecret42")
//!     .with_carrier("carrier-image.png")
//!     .with_output("image-with-secret.png")
//!     .execute()
//!     .expect("Failed to hide message in image");
//! ```

#![warn(clippy::redundant_else)]

pub mod bit_iterator;
pub use bit_iterator::BitIterator;

pub mod api;
pub mod commands;
pub mod error;
pub mod media;
pub mod result;
pub mod universal_decoder;
pub mod universal_encoder;
mod unveiled;

pub use crate::error::VeilError;
pub use crate::media::capacity::Capacity;
pub use crate::media::{CodecOptions, Media, MediaPrimitive, MediaPrimitiveMut, Persist};
pub use crate::result::Result;
pub use crate::unveiled::Unveiled;
