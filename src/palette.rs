//! Chart Palette
//!
//! Colors for series that arrive without one.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `hue` in degrees, `saturation` and `lightness` in 0..=1
    pub fn from_hsl(hue: f64, saturation: f64, lightness: f64) -> Self {
        let h = hue.rem_euclid(360.0);
        let s = saturation.clamp(0.0, 1.0);
        let l = lightness.clamp(0.0, 1.0);

        let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let x = chroma * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
        let m = l - chroma / 2.0;

        let (r, g, b) = match h {
            h if h < 60.0 => (chroma, x, 0.0),
            h if h < 120.0 => (x, chroma, 0.0),
            h if h < 180.0 => (0.0, chroma, x),
            h if h < 240.0 => (0.0, x, chroma),
            h if h < 300.0 => (x, 0.0, chroma),
            _ => (chroma, 0.0, x),
        };

        let channel = |v: f64| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
        Self::new(channel(r), channel(g), channel(b))
    }

    /// Parses `#rrggbb`; anything else is left to the palette
    pub fn from_hex(raw: &str) -> Option<Self> {
        let hex = raw.trim().strip_prefix('#')?;
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    pub fn css(&self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }

    pub fn css_alpha(&self, alpha: f64) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha.clamp(0.0, 1.0))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Pure strategy: series index to color
pub trait Palette {
    fn color(&self, index: usize) -> Rgb;
}

/// Golden-ratio hue stepping at fixed saturation/lightness
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HuePalette {
    /// Starting point on the hue wheel, 0..1
    pub seed: f64,
    pub saturation: f64,
    pub lightness: f64,
}

const GOLDEN_RATIO_CONJUGATE: f64 = 0.618_033_988_749_895;

impl HuePalette {
    pub fn new(seed: f64) -> Self {
        Self {
            seed: seed.rem_euclid(1.0),
            saturation: 0.65,
            lightness: 0.5,
        }
    }
}

impl Default for HuePalette {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl Palette for HuePalette {
    fn color(&self, index: usize) -> Rgb {
        let turn = (self.seed + index as f64 * GOLDEN_RATIO_CONJUGATE).rem_euclid(1.0);
        Rgb::from_hsl(turn * 360.0, self.saturation, self.lightness)
    }
}
