use crate::adapters::outbound::exporters::svg_markup;
use crate::adapters::outbound::filesystem::FileSystemWriter;
use crate::application::dto::ExportFormat;
use crate::dependency_tree::services::{ExportLayout, FONT_FAMILY};
use crate::ports::outbound::TreeExporter;
use crate::shared::Result;
use log::debug;
use std::path::{Path, PathBuf};
use tiny_skia::{Color, Pixmap, Transform};
use usvg::fontdb;

/// PngExporter adapter rasterizing the tree into `dependency-tree.image`
///
/// The tree is laid out exactly as for the SVG export, then drawn with
/// resvg onto a white canvas and PNG-encoded.
pub struct PngExporter {
    output_path: PathBuf,
}

impl PngExporter {
    /// Creates an exporter writing into `output_dir`
    pub fn new(output_dir: &Path) -> Self {
        let file_name = ExportFormat::Image.file_name().unwrap_or_default();
        Self {
            output_path: output_dir.join(file_name),
        }
    }

    /// SVG parsing options with system fonts loaded
    ///
    /// When the preferred font is not installed, `sans-serif` is pointed at
    /// the first available family so the text is still drawn.
    fn svg_options() -> usvg::Options<'static> {
        let mut options = usvg::Options::default();
        let database = options.fontdb_mut();
        database.load_system_fonts();

        let preferred = fontdb::Query {
            families: &[fontdb::Family::Name(FONT_FAMILY)],
            ..Default::default()
        };
        if database.query(&preferred).is_none() {
            let fallback = database
                .faces()
                .find_map(|face| face.families.first().map(|(name, _)| name.clone()));
            if let Some(family) = fallback {
                debug!("{} is not installed; drawing text with {}", FONT_FAMILY, family);
                database.set_sans_serif_family(family);
            }
        }

        options
    }

    fn rasterize(layout: &ExportLayout) -> Result<Vec<u8>> {
        let markup = svg_markup(layout);
        let tree = usvg::Tree::from_str(&markup, &Self::svg_options())
            .map_err(|e| anyhow::anyhow!("Failed to parse generated SVG: {}", e))?;

        let (width, height) = (layout.width(), layout.height());
        let mut pixmap = Pixmap::new(width, height)
            .ok_or_else(|| anyhow::anyhow!("Failed to create {}x{} canvas", width, height))?;
        pixmap.fill(Color::WHITE);

        resvg::render(&tree, Transform::identity(), &mut pixmap.as_mut());

        pixmap
            .encode_png()
            .map_err(|e| anyhow::anyhow!("Failed to encode PNG: {}", e))
    }
}

impl TreeExporter for PngExporter {
    fn export(&self, rendered_text: &str) -> Result<PathBuf> {
        let layout = ExportLayout::from_text(rendered_text);
        let png = Self::rasterize(&layout)?;

        FileSystemWriter::new(self.output_path.clone()).write(&png)?;
        Ok(self.output_path.clone())
    }
}
