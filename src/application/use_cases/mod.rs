/// Use cases module containing application business logic orchestration
mod visualize_tree;

pub use visualize_tree::{VisualizeTreeUseCase, PROJECT_DESCRIPTOR};
