use crate::adapters::outbound::filesystem::FileSystemWriter;
use crate::application::dto::ExportFormat;
use crate::dependency_tree::services::{ExportLayout, FONT_FAMILY, FONT_SIZE};
use crate::ports::outbound::TreeExporter;
use crate::shared::Result;
use std::path::{Path, PathBuf};

fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Builds the SVG document, one `<text>` element per line
pub fn svg_markup(layout: &ExportLayout) -> String {
    let mut svg = format!(
        "<svg width=\"{}\" height=\"{}\" xmlns=\"http://www.w3.org/2000/svg\">\n",
        layout.width(),
        layout.height()
    );
    svg.push_str(&format!(
        "  <style>\n    text {{\n      font-family: {}, sans-serif;\n      font-size: {}px;\n    }}\n  </style>\n",
        FONT_FAMILY, FONT_SIZE
    ));
    for (index, line) in layout.lines().iter().enumerate() {
        let (x, y) = ExportLayout::line_origin(index);
        svg.push_str(&format!(
            "  <text x=\"{}\" y=\"{}\" xml:space=\"preserve\">{}</text>\n",
            x,
            y,
            escape_xml(line)
        ));
    }
    svg.push_str("</svg>\n");
    svg
}

/// SvgExporter adapter writing `dependency-tree.svg`
pub struct SvgExporter {
    output_path: PathBuf,
}

impl SvgExporter {
    /// Creates an exporter writing into `output_dir`
    pub fn new(output_dir: &Path) -> Self {
        let file_name = ExportFormat::Svg.file_name().unwrap_or_default();
        Self {
            output_path: output_dir.join(file_name),
        }
    }
}

impl TreeExporter for SvgExporter {
    fn export(&self, rendered_text: &str) -> Result<PathBuf> {
        let layout = ExportLayout::from_text(rendered_text);
        let markup = svg_markup(&layout);

        FileSystemWriter::new(self.output_path.clone()).write(markup.as_bytes())?;
        Ok(self.output_path.clone())
    }
}
