mod export_layout;
mod human_size;
mod tree_formatter;

pub use export_layout::{ExportLayout, FONT_FAMILY, FONT_SIZE};
pub use human_size::HumanSize;
pub use tree_formatter::TreeFormatter;
