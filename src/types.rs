//! Style payload types.
//!
//! The engine treats styles as opaque: any `Clone + Default` type can ride
//! along with a unit. [`Style`] is the ready-made payload produced by the ANSI
//! parser and used by the unstyled entry points.

// =============================================================================
// Color
// =============================================================================

/// RGBA color with 8-bit channels (0-255).
///
/// Special value: r=-1 means "terminal default" (let terminal pick).
/// Special value: r=-2 means ANSI palette color, index in `g`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgba {
    pub r: i16,
    pub g: i16,
    pub b: i16,
    pub a: i16,
}

impl Rgba {
    /// Create a new RGBA color.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as i16,
            g: g as i16,
            b: b as i16,
            a: a as i16,
        }
    }

    /// Create an opaque RGB color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Terminal default color (let terminal decide).
    pub const TERMINAL_DEFAULT: Self = Self {
        r: -1,
        g: -1,
        b: -1,
        a: -1,
    };

    /// Create an ANSI palette color (0-255).
    ///
    /// - 0-7: Standard colors
    /// - 8-15: Bright colors
    /// - 16-231: 6x6x6 RGB cube
    /// - 232-255: Grayscale
    pub const fn ansi(index: u8) -> Self {
        Self {
            r: -2,
            g: index as i16,
            b: 0,
            a: 255,
        }
    }

    #[inline]
    pub const fn is_terminal_default(&self) -> bool {
        self.r == -1
    }

    #[inline]
    pub const fn is_ansi(&self) -> bool {
        self.r == -2
    }

    /// Get ANSI palette index (only valid if is_ansi() returns true).
    #[inline]
    pub const fn ansi_index(&self) -> u8 {
        self.g as u8
    }
}

// =============================================================================
// Attributes (bitflags)
// =============================================================================

bitflags::bitflags! {
    /// Text attributes as a bitfield.
    ///
    /// Combine with bitwise OR: `Attr::BOLD | Attr::ITALIC`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Attr: u8 {
        const NONE = 0;
        const BOLD = 1 << 0;
        const DIM = 1 << 1;
        const ITALIC = 1 << 2;
        const UNDERLINE = 1 << 3;
        const BLINK = 1 << 4;
        const INVERSE = 1 << 5;
        const HIDDEN = 1 << 6;
        const STRIKETHROUGH = 1 << 7;
    }
}

// =============================================================================
// Style
// =============================================================================

/// Foreground, background and attributes for a run of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Style {
    pub fg: Rgba,
    pub bg: Rgba,
    pub attrs: Attr,
}

impl Style {
    /// Terminal default colors, no attributes.
    pub const fn new() -> Self {
        Self {
            fg: Rgba::TERMINAL_DEFAULT,
            bg: Rgba::TERMINAL_DEFAULT,
            attrs: Attr::NONE,
        }
    }

    #[must_use]
    pub const fn fg(mut self, fg: Rgba) -> Self {
        self.fg = fg;
        self
    }

    #[must_use]
    pub const fn bg(mut self, bg: Rgba) -> Self {
        self.bg = bg;
        self
    }

    #[must_use]
    pub fn attrs(mut self, attrs: Attr) -> Self {
        self.attrs |= attrs;
        self
    }

    /// True when nothing differs from the terminal's own defaults.
    #[inline]
    pub fn is_plain(&self) -> bool {
        *self == Self::new()
    }
}

impl Default for Style {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_style_is_plain() {
        let style = Style::default();
        assert!(style.is_plain());
        assert!(style.fg.is_terminal_default());
        assert!(style.bg.is_terminal_default());
        assert_eq!(style.attrs, Attr::NONE);
    }

    #[test]
    fn builders_accumulate_attrs() {
        let style = Style::new()
            .fg(Rgba::ansi(1))
            .attrs(Attr::BOLD)
            .attrs(Attr::UNDERLINE);
        assert!(!style.is_plain());
        assert!(style.fg.is_ansi());
        assert_eq!(style.fg.ansi_index(), 1);
        assert_eq!(style.attrs, Attr::BOLD | Attr::UNDERLINE);
    }

    #[test]
    fn rgb_is_opaque() {
        let c = Rgba::rgb(10, 20, 30);
        assert_eq!(c, Rgba::new(10, 20, 30, 255));
        assert!(!c.is_ansi());
        assert!(!c.is_terminal_default());
    }
}
