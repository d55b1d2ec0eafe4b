use crate::dependency_tree::domain::DisplayTree;
use crate::ports::outbound::TreeRenderer;
use crate::shared::Result;

/// JsonTreeRenderer adapter producing a pretty-printed nested JSON object
///
/// Keys appear in display order; leaves are empty objects.
pub struct JsonTreeRenderer;

impl JsonTreeRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonTreeRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeRenderer for JsonTreeRenderer {
    fn render(&self, tree: &DisplayTree) -> Result<String> {
        let mut output = serde_json::to_string_pretty(tree)
            .map_err(|e| anyhow::anyhow!("Failed to serialize dependency tree: {}", e))?;
        output.push('\n');
        Ok(output)
    }
}
