/// Horizontal pixels reserved per character of the longest line
pub const CHAR_WIDTH: u32 = 10;
/// Vertical distance between baselines
pub const LINE_HEIGHT: u32 = 20;
/// X coordinate every line starts at
pub const LEFT_MARGIN: u32 = 10;
pub const FONT_SIZE: u32 = 14;
pub const FONT_FAMILY: &str = "Arial";

/// ExportLayout - canvas geometry for drawing a rendered tree as an image
///
/// The text is split on `\n` as-is, so the trailing newline of a rendered
/// tree contributes one empty line to the canvas height. The canvas is at
/// least one pixel wide, so an empty tree still yields a valid image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportLayout {
    lines: Vec<String>,
    width: u32,
    height: u32,
}

impl ExportLayout {
    pub fn from_text(text: &str) -> Self {
        let lines: Vec<String> = text.split('\n').map(String::from).collect();
        let longest = lines
            .iter()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0) as u32;

        Self {
            width: (longest * CHAR_WIDTH).max(1),
            height: lines.len() as u32 * LINE_HEIGHT,
            lines,
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Baseline origin `(x, y)` of the line at `index`
    pub fn line_origin(index: usize) -> (u32, u32) {
        (LEFT_MARGIN, (index as u32 + 1) * LINE_HEIGHT)
    }
}
