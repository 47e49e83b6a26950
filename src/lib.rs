//! A library for encoding/decoding 32-bit Windows ICO icon files.
//!
//! An ICO file holds a collection of independently encoded images, usually
//! the same picture at several resolutions.  This crate reads such a file
//! into an ordered [`Icon`] of RGBA [`IconImage`]s, and writes an [`Icon`]
//! back out as a valid ICO byte stream.  Embedded images are either
//! uncompressed 32-bit bitmaps with an alpha mask, or PNG streams.
//!
//! # Example
//!
//! ```no_run
//! let file = std::fs::File::open("app.ico").unwrap();
//! let icon = winicon::Icon::read(file).unwrap();
//! for image in icon.images() {
//!     println!("{}x{}", image.width(), image.height());
//! }
//! ```

#![warn(missing_docs)]

#[macro_use]
mod macros;

mod bmp;
mod error;
mod icon;
mod icondir;
mod image;
mod reader;
mod writer;

pub use crate::error::IcoError;
pub use crate::icon::Icon;
pub use crate::image::IconImage;
pub use crate::writer::WriteOptions;

//===========================================================================//
