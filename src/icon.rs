use crate::image::IconImage;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

//===========================================================================//

/// A collection of images; the contents of a single ICO file.
///
/// Images are kept in insertion order, which becomes directory order when
/// the icon is written; the order carries no other meaning, and duplicate
/// sizes are legal.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct Icon {
    images: Vec<IconImage>,
}

impl Icon {
    /// Creates a new, empty icon.
    pub fn new() -> Icon {
        Icon { images: Vec::new() }
    }

    /// Returns the number of images in the icon.
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Returns true if the icon contains no images.
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Adds an image to the icon.
    pub fn add(&mut self, image: IconImage) {
        self.images.push(image);
    }

    /// Returns the images in this icon, in insertion order.
    pub fn images(&self) -> &[IconImage] {
        &self.images
    }

    /// Consumes the icon and returns its images.
    pub fn into_images(self) -> Vec<IconImage> {
        self.images
    }

    /// Returns the image with the specified dimensions.
    ///
    /// If there is no exact match, the smallest image at least as large as
    /// the target in both dimensions is returned.  If there is no such
    /// image, the largest image is returned.  Ties are broken in favor of
    /// the first-added image.
    ///
    /// Returns `None` only if the icon is empty.
    pub fn find_size(&self, width: u32, height: u32) -> Option<&IconImage> {
        let mut largest: Option<&IconImage> = None;
        let mut best_match: Option<&IconImage> = None;
        for image in self.images.iter() {
            if image.width() == width && image.height() == height {
                return Some(image);
            }
            if image.width() >= width && image.height() >= height {
                if best_match.map_or(true, |best| area(best) > area(image)) {
                    best_match = Some(image);
                }
            }
            if largest.map_or(true, |cur| area(cur) < area(image)) {
                largest = Some(image);
            }
        }
        best_match.or(largest)
    }
}

impl Default for Icon {
    fn default() -> Icon {
        Icon::new()
    }
}

fn area(image: &IconImage) -> u64 {
    (image.width() as u64) * (image.height() as u64)
}

//===========================================================================//


//===========================================================================//
