//! Default appearance for the slider.
//!
//! These values become inline styles on the rendered elements. Caller class
//! names from [`Styling`](crate::Styling) are applied on top of them.

use std::fmt;

/// An opaque RGB color, rendered as a CSS hex string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Format as `#rrggbb`.
    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Configuration for slider appearance.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleConfig {
    /// Height of the track in pixels
    pub track_height: f32,
    /// Width and height of each handle in pixels
    pub handle_size: f32,
    /// Gap between the track and labels placed above or below it
    pub label_gap_vertical: f32,
    /// Gap between the track and labels placed beside it
    pub label_gap_horizontal: f32,
    /// Track background color
    pub track_color: Color,
    /// Range fill color
    pub range_color: Color,
    /// Handle color
    pub handle_color: Color,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            track_height: 12.0,
            handle_size: 20.0,
            label_gap_vertical: 12.0,
            label_gap_horizontal: 24.0,
            track_color: Color::rgb(0xe6, 0xe6, 0xe6),
            range_color: Color::rgb(0x38, 0xa1, 0xfd),
            handle_color: Color::rgb(0x39, 0x39, 0x39),
        }
    }
}

impl StyleConfig {
    /// Create a new style configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the track height.
    pub fn track_height(mut self, height: f32) -> Self {
        self.track_height = height;
        self
    }

    /// Set the handle size.
    pub fn handle_size(mut self, size: f32) -> Self {
        self.handle_size = size;
        self
    }

    /// Set the vertical label gap.
    pub fn label_gap_vertical(mut self, gap: f32) -> Self {
        self.label_gap_vertical = gap;
        self
    }

    /// Set the horizontal label gap.
    pub fn label_gap_horizontal(mut self, gap: f32) -> Self {
        self.label_gap_horizontal = gap;
        self
    }

    /// Set the track color.
    pub fn track_color(mut self, color: Color) -> Self {
        self.track_color = color;
        self
    }

    /// Set the range fill color.
    pub fn range_color(mut self, color: Color) -> Self {
        self.range_color = color;
        self
    }

    /// Set the handle color.
    pub fn handle_color(mut self, color: Color) -> Self {
        self.handle_color = color;
        self
    }
}
