/// Spacing constants for the flow model, all in device pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConfig {
    pub left_margin: f32,
    pub top_margin: f32,
    /// Extra space between wrapped lines.
    pub line_gap: f32,
    /// Horizontal gap after every word.
    pub word_gap: f32,
    /// Space before and after block-level elements.
    pub block_gap: f32,
    /// Height of a line that holds nothing but a `br`.
    pub line_height: f32,
    pub heading_margin: f32,
    pub paragraph_margin: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            left_margin: 8.0,
            top_margin: 8.0,
            line_gap: 4.0,
            word_gap: 4.0,
            block_gap: 8.0,
            line_height: 20.0,
            heading_margin: 12.0,
            paragraph_margin: 6.0,
        }
    }
}

impl LayoutConfig {
    /// Extra top margin applied when a block element opens.
    pub fn margin_before(&self, tag: &str) -> f32 {
        match tag {
            "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => self.heading_margin,
            "p" => self.paragraph_margin,
            _ => 0.0,
        }
    }
}
