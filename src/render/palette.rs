use std::fmt;

use serde::{Serialize, Serializer};

/// An opaque RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Rgb {
    /// Create a color from its channels
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS `rgba(..)` form of this color with the given alpha
    pub fn with_alpha(&self, alpha: f64) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Series colors, assigned by position and repeating after the last entry
pub const PALETTE: [Rgb; 6] = [
    Rgb::new(75, 192, 192),  // turquoise
    Rgb::new(255, 99, 132),  // pink
    Rgb::new(54, 162, 235),  // blue
    Rgb::new(255, 206, 86),  // yellow
    Rgb::new(153, 102, 255), // purple
    Rgb::new(255, 159, 64),  // orange
];

/// Alpha of the fill drawn under each curve
pub const BACKGROUND_ALPHA: f64 = 0.2;

/// Color for the series at position `index`
pub fn color_for(index: usize) -> Rgb {
    PALETTE[index % PALETTE.len()]
}
