/// Exporter adapters - TreeExporter implementations
mod png_exporter;
mod svg_exporter;

pub use png_exporter::PngExporter;
pub use svg_exporter::{svg_markup, SvgExporter};
