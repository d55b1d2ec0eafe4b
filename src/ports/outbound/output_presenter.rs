use crate::shared::Result;

/// OutputPresenter port for presenting the rendered tree
///
/// This port abstracts the output destination (stdout, file, etc.)
/// where the rendered dependency tree is presented.
pub trait OutputPresenter {
    /// Presents the rendered content to the output destination
    ///
    /// # Arguments
    /// * `content` - The rendered tree to present
    ///
    /// # Errors
    /// Returns an error if writing to the output destination fails
    fn present(&self, content: &str) -> Result<()>;
}
