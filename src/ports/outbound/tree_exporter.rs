use crate::shared::Result;
use std::path::PathBuf;

/// TreeExporter port for drawing a rendered tree into an image file
pub trait TreeExporter {
    /// Draws `rendered_text` line by line and writes the image
    ///
    /// # Arguments
    /// * `rendered_text` - The text-tree rendering to draw
    ///
    /// # Returns
    /// Path of the written file. An existing file at that path is overwritten.
    ///
    /// # Errors
    /// Returns an error if the image cannot be produced or written
    fn export(&self, rendered_text: &str) -> Result<PathBuf>;
}
