//! Colors for the panel and the edge indicators

/// RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Create a new color from RGB values (alpha defaults to 255)
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a new color from RGBA values
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Convert to ARGB u32 for softbuffer
    pub fn to_argb_u32(&self) -> u32 {
        ((self.a as u32) << 24) | ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }
}

/// Button colors
#[derive(Debug, Clone)]
pub struct ButtonTheme {
    pub background: Color,
    pub background_hover: Color,
    pub background_pressed: Color,
    pub border: Color,
    pub glyph: Color,
}

#[derive(Debug, Clone)]
pub struct Theme {
    /// Behind the rounded panel body (fully transparent where supported)
    pub clear: Color,
    pub panel_background: Color,
    pub panel_border: Color,
    pub indicator_background: Color,
    pub indicator_arrow: Color,
    pub button: ButtonTheme,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            clear: Color::rgba(0, 0, 0, 0),
            panel_background: Color::rgb(250, 250, 250),
            panel_border: Color::rgb(220, 220, 220),
            indicator_background: Color::rgba(100, 100, 100, 180),
            indicator_arrow: Color::rgb(255, 255, 255),
            button: ButtonTheme {
                background: Color::rgb(240, 240, 240),
                background_hover: Color::rgb(224, 224, 224),
                background_pressed: Color::rgb(208, 208, 208),
                border: Color::rgb(221, 221, 221),
                glyph: Color::rgb(102, 102, 102),
            },
        }
    }
}
