//! Text labels with read-back of their rendered extent.

use crate::color::Color;
use crate::font::{Font, TextLayout};
use crate::geometry::{Bounds, Size, Vec2};

/// Horizontal alignment of lines inside a label's box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// A block of text in a single font, size and color.
///
/// The label is re-measured whenever its text, size or text width changes,
/// so [`width`](Label::width) and [`height`](Label::height) always reflect
/// what will be painted.
///
/// ```
/// use parlor_scene::{FontLibrary, Label, BUILTIN_MONO};
///
/// let font = FontLibrary::terminal().resolve(BUILTIN_MONO).unwrap();
/// let label = Label::new(font, 1.0)
///     .with_text_width(5.0)
///     .with_text("one two three");
/// assert_eq!(label.height(), 3.0);
/// ```
#[derive(Debug, Clone)]
pub struct Label {
    font: Font,
    font_size: f32,
    text: String,
    color: Color,
    alignment: TextAlign,
    anchor: Vec2,
    text_width: Option<f32>,
    layout: TextLayout,
}

impl Label {
    pub fn new(font: Font, font_size: f32) -> Self {
        let layout = font.measure("", font_size, None);
        Self {
            font,
            font_size,
            text: String::new(),
            color: Color::WHITE,
            alignment: TextAlign::Left,
            anchor: Vec2::new(0.5, 0.5),
            text_width: None,
            layout,
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.set_text(text);
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_alignment(mut self, alignment: TextAlign) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn with_anchor(mut self, anchor: Vec2) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn with_text_width(mut self, width: f32) -> Self {
        self.set_text_width(Some(width));
        self
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.relayout();
    }

    /// Set the wrap width.  `None` lays every line out unwrapped.
    pub fn set_text_width(&mut self, width: Option<f32>) {
        self.text_width = width;
        self.relayout();
    }

    pub fn set_font_size(&mut self, size: f32) {
        self.font_size = size;
        self.relayout();
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn font(&self) -> &Font {
        &self.font
    }

    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn alignment(&self) -> TextAlign {
        self.alignment
    }

    pub fn anchor(&self) -> Vec2 {
        self.anchor
    }

    pub fn text_width(&self) -> Option<f32> {
        self.text_width
    }

    /// Wrapped lines as they will be painted.
    pub fn lines(&self) -> &[String] {
        &self.layout.lines
    }

    /// Measured width of the widest line.
    pub fn content_width(&self) -> f32 {
        self.layout.size.width
    }

    /// Box width: the text width when set, the measured width otherwise.
    pub fn width(&self) -> f32 {
        self.text_width.unwrap_or(self.layout.size.width)
    }

    /// Measured height of all lines.
    pub fn height(&self) -> f32 {
        self.layout.size.height
    }

    pub fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }

    /// The label's box relative to its node position, after applying the anchor.
    pub fn bounds(&self) -> Bounds {
        let size = self.size();
        Bounds {
            origin: Vec2::new(-self.anchor.x * size.width, -self.anchor.y * size.height),
            size,
        }
    }

    fn relayout(&mut self) {
        self.layout = self
            .font
            .measure(&self.text, self.font_size, self.text_width);
    }
}
