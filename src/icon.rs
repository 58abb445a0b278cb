//! Square icon frames resampled from a single source drawing.
//!
//! An icon container holds the same picture at several resolutions so the
//! operating system can pick one per display context (16x16 for list views,
//! 256x256 for large tiles, and so on).

use image::RgbaImage;
use image::imageops::{self, FilterType};
use tracing::debug;

/// Frame sizes embedded in the exported icon, smallest first.
pub const ICON_SIZES: [u32; 5] = [16, 32, 48, 64, 256];

/// A single square icon frame.
#[derive(Debug, Clone, PartialEq)]
pub struct IconImage {
    /// The image data in straight RGBA format.
    pub data: RgbaImage,
}

impl IconImage {
    /// Wraps an existing square image.
    pub fn new(data: RgbaImage) -> Self {
        Self { data }
    }

    /// Resamples `source` to `size × size`.
    ///
    /// A source that already has the requested size is copied unchanged.
    pub fn resampled(source: &RgbaImage, size: u32) -> Self {
        if source.dimensions() == (size, size) {
            return Self::new(source.clone());
        }
        debug!(from = source.width(), to = size, "resampling icon frame");
        Self::new(imageops::resize(source, size, size, FilterType::Lanczos3))
    }

    /// Edge length in pixels (frames are square).
    pub fn size(&self) -> u32 {
        self.data.width()
    }
}

/// The frames of one icon at various sizes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct IconSet {
    /// The frames, in export order.
    pub images: Vec<IconImage>,
}

impl IconSet {
    /// Creates a new empty icon set.
    pub fn new() -> Self {
        Self { images: Vec::new() }
    }

    /// Builds one frame per entry of `sizes`, each resampled from `source`.
    pub fn from_source(source: &RgbaImage, sizes: &[u32]) -> Self {
        let images = sizes
            .iter()
            .map(|&size| IconImage::resampled(source, size))
            .collect();
        Self { images }
    }

    /// Adds a frame to the end of the set.
    pub fn add_image(&mut self, image: IconImage) {
        self.images.push(image);
    }

    /// Returns the number of frames in the set.
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Returns true if the set contains no frames.
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Frame sizes in stored order.
    pub fn sizes(&self) -> Vec<u32> {
        self.images.iter().map(IconImage::size).collect()
    }

    /// Finds the frame with exactly the given edge length.
    pub fn find_by_size(&self, size: u32) -> Option<&IconImage> {
        self.images.iter().find(|img| img.size() == size)
    }

    /// Returns an iterator over the frames.
    pub fn iter(&self) -> impl Iterator<Item = &IconImage> {
        self.images.iter()
    }
}

impl IntoIterator for IconSet {
    type Item = IconImage;
    type IntoIter = std::vec::IntoIter<IconImage>;

    fn into_iter(self) -> Self::IntoIter {
        self.images.into_iter()
    }
}

impl<'a> IntoIterator for &'a IconSet {
    type Item = &'a IconImage;
    type IntoIter = std::slice::Iter<'a, IconImage>;

    fn into_iter(self) -> Self::IntoIter {
        self.images.iter()
    }
}
