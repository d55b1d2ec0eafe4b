use crate::dependency_tree::domain::DisplayTree;
use crate::shared::Result;

/// TreeRenderer port for turning a DisplayTree into printable text
///
/// This port abstracts the output representation (box-drawing tree, JSON).
pub trait TreeRenderer {
    /// Renders the tree
    ///
    /// # Arguments
    /// * `tree` - The display tree to render
    ///
    /// # Returns
    /// The rendered text, ending with a newline unless the tree renders empty
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn render(&self, tree: &DisplayTree) -> Result<String>;
}
