use crate::adapters::outbound::exporters::{PngExporter, SvgExporter};
use crate::application::dto::ExportFormat;
use crate::ports::outbound::TreeExporter;
use std::path::Path;

/// Factory for creating tree exporters
///
/// Returns `None` when exporting is disabled.
pub struct ExporterFactory;

impl ExporterFactory {
    /// Creates an exporter writing into `output_dir`
    ///
    /// # Examples
    /// ```
    /// use npm_dep_tree::application::dto::ExportFormat;
    /// use npm_dep_tree::application::factories::ExporterFactory;
    /// use std::path::Path;
    ///
    /// assert!(ExporterFactory::create(ExportFormat::No, Path::new(".")).is_none());
    /// assert!(ExporterFactory::create(ExportFormat::Svg, Path::new(".")).is_some());
    /// ```
    pub fn create(format: ExportFormat, output_dir: &Path) -> Option<Box<dyn TreeExporter>> {
        match format {
            ExportFormat::No => None,
            ExportFormat::Image => Some(Box::new(PngExporter::new(output_dir))),
            ExportFormat::Svg => Some(Box::new(SvgExporter::new(output_dir))),
        }
    }

    /// Returns the progress message for the specified export format
    pub fn progress_message(format: ExportFormat) -> Option<&'static str> {
        match format {
            ExportFormat::No => None,
            ExportFormat::Image => Some("🖼️  Exporting dependency tree as PNG image..."),
            ExportFormat::Svg => Some("🖼️  Exporting dependency tree as SVG..."),
        }
    }
}
