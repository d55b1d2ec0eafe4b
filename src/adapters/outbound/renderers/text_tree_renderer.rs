use crate::dependency_tree::domain::DisplayTree;
use crate::ports::outbound::TreeRenderer;
use crate::shared::Result;

const BRANCH: &str = "├─ ";
const LAST_BRANCH: &str = "└─ ";
const PIPE: &str = "│  ";
const SPACE: &str = "   ";

/// TextTreeRenderer adapter drawing the tree with box-drawing connectors
///
/// Every node, top level included, gets its own line:
///
/// ```text
/// ├─ express@4.18.2 (210.4 KB)
/// │  └─ accepts@1.3.8
/// └─ chalk@5.3.0 (41.2 KB)
/// ```
pub struct TextTreeRenderer;

impl TextTreeRenderer {
    pub fn new() -> Self {
        Self
    }

    fn render_level(tree: &DisplayTree, prefix: &str, output: &mut String) {
        let count = tree.len();
        for (index, (label, child)) in tree.iter().enumerate() {
            let is_last = index + 1 == count;

            output.push_str(prefix);
            output.push_str(if is_last { LAST_BRANCH } else { BRANCH });
            output.push_str(label);
            output.push('\n');

            let child_prefix = format!("{}{}", prefix, if is_last { SPACE } else { PIPE });
            Self::render_level(child, &child_prefix, output);
        }
    }
}

impl Default for TextTreeRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeRenderer for TextTreeRenderer {
    fn render(&self, tree: &DisplayTree) -> Result<String> {
        let mut output = String::new();
        Self::render_level(tree, "", &mut output);
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf() -> DisplayTree {
        DisplayTree::new()
    }

    #[test]
    fn test_render_empty_tree() {
        let output = TextTreeRenderer::new().render(&DisplayTree::new()).unwrap();
        assert_eq!(output, "");
    }

    #[test]
    fn test_render_single_node() {
        let mut tree = DisplayTree::new();
        tree.insert("a@1.0.0 (1.0 KB)", leaf());

        let output = TextTreeRenderer::new().render(&tree).unwrap();
        assert_eq!(output, "└─ a@1.0.0 (1.0 KB)\n");
    }

    #[test]
    fn test_render_nested_tree() {
        let mut deep = DisplayTree::new();
        deep.insert("d@4.0.0", leaf());
        let mut a_children = DisplayTree::new();
        a_children.insert("b@2.0.0", leaf());
        a_children.insert("c@3.0.0", deep);
        let mut e_children = DisplayTree::new();
        e_children.insert("f@6.0.0", leaf());

        let mut tree = DisplayTree::new();
        tree.insert("a@1.0.0", a_children);
        tree.insert("e@5.0.0", e_children);

        let output = TextTreeRenderer::new().render(&tree).unwrap();

        let expected = "\
├─ a@1.0.0
│  ├─ b@2.0.0
│  └─ c@3.0.0
│     └─ d@4.0.0
└─ e@5.0.0
   └─ f@6.0.0
";
        assert_eq!(output, expected);
    }

    #[test]
    fn test_render_follows_insertion_order() {
        let mut tree = DisplayTree::new();
        tree.insert("zod@3.0.0", leaf());
        tree.insert("axios@1.0.0", leaf());

        let output = TextTreeRenderer::new().render(&tree).unwrap();
        assert_eq!(output, "├─ zod@3.0.0\n└─ axios@1.0.0\n");
    }
}
