use std::io;
use thiserror::Error;

//===========================================================================//

/// The error type for decoding and encoding ICO files.
#[derive(Debug, Error)]
pub enum IcoError {
    /// The file header, a directory entry, or an embedded bitmap header is
    /// structurally invalid.
    #[error("{0}")]
    Format(String),
    /// The input ended before a length implied by the data already read.
    #[error("{0}")]
    Truncated(String),
    /// An embedded bitmap uses a recognized but unsupported variant
    /// (anything other than 1 plane, 32 bits per pixel, uncompressed).
    #[error("{0}")]
    Unsupported(String),
    /// The input is larger than the decoder's safety cap.
    #[error("Input exceeds the size limit of {limit} bytes")]
    SizeLimit {
        /// The size cap, in bytes.
        limit: u64,
    },
    /// [`Icon::write`](crate::Icon::write) was called on an icon with no
    /// images.
    #[error("Icon contains no images")]
    Empty,
    /// An image's dimensions cannot be recorded in a directory entry.
    #[error("Image is too large (was {width}x{height}, but max is 256x256)")]
    ImageTooLarge {
        /// Width of the offending image, in pixels.
        width: u32,
        /// Height of the offending image, in pixels.
        height: u32,
    },
    /// The underlying reader or writer failed.
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl IcoError {
    /// Prefixes the error message with the index of the image it concerns.
    pub(crate) fn in_image(self, index: usize) -> IcoError {
        match self {
            IcoError::Format(msg) => {
                IcoError::Format(format!("image {}: {}", index, msg))
            }
            IcoError::Truncated(msg) => {
                IcoError::Truncated(format!("image {}: {}", index, msg))
            }
            IcoError::Unsupported(msg) => {
                IcoError::Unsupported(format!("image {}: {}", index, msg))
            }
            other => other,
        }
    }
}

//===========================================================================//
