use crate::dependency_tree::domain::{DisplayTree, PackageFilter, RawManifestNode, SizeIndex};
use crate::dependency_tree::services::HumanSize;

/// TreeFormatter - Converts a raw manifest into a displayable tree
///
/// The filter is applied at every depth, not only to the root's direct
/// dependencies: a nested package whose name is not in the filter is pruned
/// along with its whole subtree, and so is everything under a pruned parent.
pub struct TreeFormatter;

impl TreeFormatter {
    /// Formats the dependencies of `node` into a DisplayTree
    ///
    /// # Arguments
    /// * `node` - Manifest node whose `dependencies` map is formatted
    /// * `filter` - Optional set of package names to keep
    /// * `sizes` - Installed sizes of the top-level packages
    ///
    /// # Returns
    /// A DisplayTree in manifest order; empty when `node` has no dependencies
    pub fn format(
        node: &RawManifestNode,
        filter: Option<&PackageFilter>,
        sizes: &SizeIndex,
    ) -> DisplayTree {
        let Some(dependencies) = node.dependencies() else {
            return DisplayTree::new();
        };

        dependencies
            .iter()
            .filter(|(name, _)| filter.map_or(true, |f| f.matches(name)))
            .map(|(name, child)| {
                (
                    Self::label(name, child, sizes),
                    Self::format(child, filter, sizes),
                )
            })
            .collect()
    }

    /// Builds `name@version (size)`, or `name@version` when the size of
    /// `name` is unknown.
    pub fn label(name: &str, node: &RawManifestNode, sizes: &SizeIndex) -> String {
        match sizes.get(name) {
            Some(bytes) => format!("{}@{} ({})", name, node.version_label(), HumanSize(bytes)),
            None => format!("{}@{}", name, node.version_label()),
        }
    }
}
