/// Base name of every exported image; the extension is the format name
const EXPORT_FILE_STEM: &str = "dependency-tree";

/// Export format for writing the rendered tree to an image file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    /// Do not export (default)
    #[default]
    No,
    /// Rasterized PNG bitmap, written as `dependency-tree.image`
    Image,
    /// Vector SVG markup, written as `dependency-tree.svg`
    Svg,
}

impl ExportFormat {
    /// Fixed output file name for this format, `None` when not exporting
    pub fn file_name(&self) -> Option<String> {
        match self {
            ExportFormat::No => None,
            ExportFormat::Image | ExportFormat::Svg => {
                Some(format!("{}.{}", EXPORT_FILE_STEM, self))
            }
        }
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "no" => Ok(ExportFormat::No),
            "image" => Ok(ExportFormat::Image),
            "svg" => Ok(ExportFormat::Svg),
            _ => Err(format!(
                "Invalid export format: {}. Please specify 'no', 'image' or 'svg'",
                s
            )),
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::No => write!(f, "no"),
            ExportFormat::Image => write!(f, "image"),
            ExportFormat::Svg => write!(f, "svg"),
        }
    }
}
