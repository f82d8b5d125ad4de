//! Packed ARGB colors.

use ratatui::style::Color as TermColor;

/// A color packed as `0xAARRGGBB`.
///
/// A zero alpha channel means fully transparent; transparent colors are never
/// painted.
///
/// ```
/// use parlor_scene::Color;
///
/// let teal = Color::from_argb(0xFF00_8080);
/// assert_eq!(teal.alpha(), 0xFF);
/// assert!(Color::TRANSPARENT.is_transparent());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color(u32);

impl Color {
    pub const WHITE: Color = Color(0xFFFF_FFFF);
    pub const BLACK: Color = Color(0xFF00_0000);
    pub const TRANSPARENT: Color = Color(0x0000_0000);

    pub const fn from_argb(argb: u32) -> Self {
        Self(argb)
    }

    pub const fn argb(self) -> u32 {
        self.0
    }

    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    pub const fn is_transparent(self) -> bool {
        self.alpha() == 0
    }

    /// The terminal color for this value, or `None` when transparent.
    ///
    /// Terminals have no alpha blending, so any non-zero alpha paints the
    /// opaque RGB value.
    pub fn to_terminal(self) -> Option<TermColor> {
        if self.is_transparent() {
            None
        } else {
            Some(TermColor::Rgb(self.red(), self.green(), self.blue()))
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::WHITE
    }
}

impl From<u32> for Color {
    fn from(argb: u32) -> Self {
        Color(argb)
    }
}
