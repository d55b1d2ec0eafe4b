use crate::adapters::outbound::renderers::{JsonTreeRenderer, TextTreeRenderer};
use crate::application::dto::OutputMode;
use crate::ports::outbound::TreeRenderer;

/// Factory for creating tree renderers
///
/// Selects the TreeRenderer adapter matching the requested output mode.
pub struct RendererFactory;

impl RendererFactory {
    /// Creates a renderer instance for the specified output mode
    ///
    /// # Examples
    /// ```
    /// use npm_dep_tree::application::dto::OutputMode;
    /// use npm_dep_tree::application::factories::RendererFactory;
    ///
    /// let renderer = RendererFactory::create(OutputMode::Tree);
    /// ```
    pub fn create(mode: OutputMode) -> Box<dyn TreeRenderer> {
        match mode {
            OutputMode::Tree => Box::new(TextTreeRenderer::new()),
            OutputMode::Json => Box::new(JsonTreeRenderer::new()),
        }
    }

    /// Returns the progress message for the specified output mode
    pub fn progress_message(mode: OutputMode) -> &'static str {
        match mode {
            OutputMode::Tree => "📝 Rendering dependency tree...",
            OutputMode::Json => "📝 Rendering dependency tree as JSON...",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dependency_tree::domain::DisplayTree;

    fn sample_tree() -> DisplayTree {
        let mut tree = DisplayTree::new();
        tree.insert("a@1.0.0", DisplayTree::new());
        tree
    }

    #[test]
    fn test_create_tree_renderer() {
        let output = RendererFactory::create(OutputMode::Tree)
            .render(&sample_tree())
            .unwrap();
        assert_eq!(output, "└─ a@1.0.0\n");
    }

    #[test]
    fn test_create_json_renderer() {
        let output = RendererFactory::create(OutputMode::Json)
            .render(&sample_tree())
            .unwrap();
        assert_eq!(output, "{\n  \"a@1.0.0\": {}\n}\n");
    }

    #[test]
    fn test_progress_messages() {
        assert_eq!(
            RendererFactory::progress_message(OutputMode::Tree),
            "📝 Rendering dependency tree..."
        );
        assert_eq!(
            RendererFactory::progress_message(OutputMode::Json),
            "📝 Rendering dependency tree as JSON..."
        );
    }
}
