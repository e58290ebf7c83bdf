//! ImageSet value object - the images in scope for one lifecycle command

use crate::domain::entities::{DeployableImage, ImageId, IMAGE_CATALOG};

/// Ordered, non-empty subset of the image catalog.
///
/// Constructed only through [`ImageSet::full`] or [`ImageSet::single`], so it
/// can never be empty or contain an image outside the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSet {
    images: Vec<ImageId>,
}

impl ImageSet {
    /// Every image in the catalog
    pub fn full() -> Self {
        Self {
            images: IMAGE_CATALOG.iter().map(|image| image.id).collect(),
        }
    }

    /// Exactly one image
    pub fn single(id: ImageId) -> Self {
        Self { images: vec![id] }
    }

    pub fn ids(&self) -> &[ImageId] {
        &self.images
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static DeployableImage> + '_ {
        self.images.iter().map(|id| id.image())
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Always false; kept for clippy's `len_without_is_empty`
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.images.iter().map(|id| id.name()).collect()
    }
}
