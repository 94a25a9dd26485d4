use serde::Deserialize;

/// Page geometry and text metrics used by the `Writer`.
/// All measurements are in PDF points.
#[derive(Debug,Clone,PartialEq,Deserialize)]
#[serde(default)]
pub struct PageSettings {
    pub width: f32,
    pub height: f32,
    pub margin: f32,
    pub font_size: f32,
    /// line height as a multiple of `font_size`
    pub leading: f32,
}

/// default settings:
/// - Page: US Letter, 612.0 x 792.0
/// - Margin: 36.0
/// - Font size: 12.0
/// - Leading: 1.2
impl Default for PageSettings {
    fn default() -> Self {
        PageSettings {
            width: 612.0,
            height: 792.0,
            margin: 36.0,
            font_size: 12.0,
            leading: 1.2,
        }
    }
}

impl PageSettings {
    pub fn new() -> Self {
        PageSettings::default()
    }

    /// builder function setting page size
    pub fn with_page_size(mut self, width: f32, height: f32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// builder function setting font size
    pub fn with_font_size(mut self, font_size: f32) -> Self {
        self.font_size = font_size;
        self
    }

    /// builder function setting the page margin
    pub fn and_margin(mut self, margin: f32) -> Self {
        self.margin = margin;
        self
    }

    /// builder function setting the leading multiplier
    pub fn and_leading(mut self, leading: f32) -> Self {
        self.leading = leading;
        self
    }

    /// vertical distance between two baselines
    pub fn line_height(&self) -> f32 {
        self.font_size * self.leading
    }

    /// baseline of the first line on a fresh page
    pub fn top(&self) -> f32 {
        self.height - self.margin - self.font_size
    }
}
