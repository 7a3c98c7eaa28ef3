//! Original/processed image pairs and batch application.
//!
//! A batch run holds one pair per loaded file, in load order. The original
//! half of a pair never changes; every adjustment pass rebuilds the
//! processed half from the original, so repeated passes can never
//! accumulate error or drift.

use std::path::{Path, PathBuf};

use crate::adjustments::apply_adjustments;
use crate::decode::{load_image, DecodeError, RgbaData};
use crate::HsbAdjustments;

/// An original image alongside its most recently processed version.
#[derive(Debug, Clone)]
pub struct ImagePair {
    /// Path the original image was loaded from.
    pub source: PathBuf,
    /// The untouched source image.
    pub original: RgbaData,
    /// The current processed image (starts as a copy of the original).
    pub processed: RgbaData,
}

impl ImagePair {
    /// Create a pair from an already decoded image.
    pub fn new(source: PathBuf, original: RgbaData) -> Self {
        let processed = original.clone();
        Self {
            source,
            original,
            processed,
        }
    }

    /// Load a pair from disk.
    pub fn load(path: &Path) -> Result<Self, DecodeError> {
        let original = load_image(path)?;
        Ok(Self::new(path.to_path_buf(), original))
    }

    /// Recompute the processed image from the original.
    pub fn apply(&mut self, adjustments: &HsbAdjustments) {
        self.processed = apply_adjustments(&self.original, adjustments);
    }

    /// File name of the source path, if it has one.
    pub fn file_name(&self) -> Option<&str> {
        self.source.file_name().and_then(|n| n.to_str())
    }
}

/// Apply adjustments to every pair in the batch.
///
/// Each image is processed independently with no cross-image state; list
/// order is preserved and originals are never touched.
pub fn apply_to_all(pairs: &mut [ImagePair], adjustments: &HsbAdjustments) {
    for pair in pairs.iter_mut() {
        pair.apply(adjustments);
    }
}
