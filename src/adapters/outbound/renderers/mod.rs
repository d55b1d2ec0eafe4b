/// Renderer adapters - TreeRenderer implementations
mod json_tree_renderer;
mod text_tree_renderer;

pub use json_tree_renderer::JsonTreeRenderer;
pub use text_tree_renderer::TextTreeRenderer;
