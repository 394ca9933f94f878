//! Text measurement port and static font-metric tables for the flyer font stacks.
//!
//! The layout engine never talks to a graphics backend directly. Hosts pass any
//! [`TextMeasure`] implementation: a canvas-backed measurer, a closure, or one of
//! the static measurers below. Widths are in pixels at the requested font size.
//!
//! The static tables are an approximation of real glyph advances. They are good
//! enough to pick font sizes and line breaks deterministically; the renderer may
//! still kern the final output differently by a pixel or two.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

// ────────────────────────────────────────────────────────────────────────────
// Measurement port
// ────────────────────────────────────────────────────────────────────────────

/// Measures the rendered width of a string at a given font size.
///
/// Implementations are bound to one font family, weight and style. They must be
/// deterministic: the same `(text, font_size)` always yields the same width.
pub trait TextMeasure {
    fn measure_width(&self, text: &str, font_size: f32) -> f32;
}

impl<F> TextMeasure for F
where
    F: Fn(&str, f32) -> f32,
{
    fn measure_width(&self, text: &str, font_size: f32) -> f32 {
        self(text, font_size)
    }
}

/// Monospace-style measurer: every character advances by `em_per_char × font_size`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FixedAdvance {
    pub em_per_char: f32,
}

impl FixedAdvance {
    pub fn new(em_per_char: f32) -> Self {
        Self { em_per_char }
    }
}

impl TextMeasure for FixedAdvance {
    fn measure_width(&self, text: &str, font_size: f32) -> f32 {
        text.chars().count() as f32 * self.em_per_char * font_size
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Font families
// ────────────────────────────────────────────────────────────────────────────

/// Font stacks used by the flyer title, caption and footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontFamily {
    /// Humanist sans-serif; the default title face.
    Inter,
    /// Old-style serif for formal events.
    EbGaramond,
    /// Condensed display sans for long event names.
    Oswald,
}

impl FromStr for FontFamily {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "inter" | "sans" => Ok(FontFamily::Inter),
            "eb_garamond" | "garamond" | "serif" => Ok(FontFamily::EbGaramond),
            "oswald" | "condensed" => Ok(FontFamily::Oswald),
            other => Err(format!("unknown font family '{other}'")),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Font metric table
// ────────────────────────────────────────────────────────────────────────────

/// Static character-width table for a font family.
///
/// Widths are stored once, in em units for the base sans face, and scaled per
/// family. `BASE_WIDTHS[i]` is the advance of ASCII character `(i + 32)`,
/// covering 0x20 (space) through 0x7E (~).
#[derive(Debug)]
pub struct FontMetricTable {
    pub family: FontFamily,
    /// Multiplier applied to the base advances.
    width_scale: f32,
    /// Fallback em width for characters outside printable ASCII.
    pub average_char_width: f32,
}

impl FontMetricTable {
    /// Width of `s` in em units.
    pub fn measure_em(&self, s: &str) -> f32 {
        s.chars()
            .map(|c| {
                let code = c as usize;
                if (32..=126).contains(&code) {
                    BASE_WIDTHS[code - 32] * self.width_scale
                } else {
                    self.average_char_width
                }
            })
            .sum()
    }
}

impl TextMeasure for FontMetricTable {
    fn measure_width(&self, text: &str, font_size: f32) -> f32 {
        self.measure_em(text) * font_size
    }
}

#[rustfmt::skip]
static BASE_WIDTHS: [f32; 95] = [
    // sp    !     "     #     $     %     &     '     (     )     *     +     ,     -     .     /
    0.25, 0.30, 0.38, 0.56, 0.56, 0.89, 0.67, 0.22, 0.33, 0.33, 0.39, 0.59, 0.28, 0.33, 0.28, 0.31,
    // 0-9
    0.56, 0.56, 0.56, 0.56, 0.56, 0.56, 0.56, 0.56, 0.56, 0.56,
    // :     ;     <     =     >     ?     @
    0.28, 0.28, 0.59, 0.59, 0.59, 0.50, 1.02,
    // A-M
    0.67, 0.61, 0.61, 0.67, 0.56, 0.50, 0.67, 0.67, 0.25, 0.39, 0.61, 0.53, 0.78,
    // N-Z
    0.67, 0.72, 0.56, 0.72, 0.61, 0.50, 0.56, 0.67, 0.67, 0.89, 0.61, 0.61, 0.56,
    // [     \     ]     ^     _     `
    0.28, 0.31, 0.28, 0.47, 0.56, 0.34,
    // a-m
    0.56, 0.56, 0.50, 0.56, 0.56, 0.31, 0.56, 0.56, 0.22, 0.22, 0.53, 0.22, 0.83,
    // n-z
    0.56, 0.56, 0.56, 0.56, 0.33, 0.44, 0.39, 0.56, 0.50, 0.72, 0.50, 0.50, 0.44,
    // {     |     }     ~
    0.33, 0.26, 0.33, 0.59,
];

static INTER_TABLE: FontMetricTable = FontMetricTable {
    family: FontFamily::Inter,
    width_scale: 1.0,
    average_char_width: 0.52,
};

static EB_GARAMOND_TABLE: FontMetricTable = FontMetricTable {
    family: FontFamily::EbGaramond,
    width_scale: 0.85,
    average_char_width: 0.44,
};

static OSWALD_TABLE: FontMetricTable = FontMetricTable {
    family: FontFamily::Oswald,
    width_scale: 0.68,
    average_char_width: 0.35,
};

/// Returns the static metric table for a font family.
pub fn get_metrics(family: FontFamily) -> &'static FontMetricTable {
    match family {
        FontFamily::Inter => &INTER_TABLE,
        FontFamily::EbGaramond => &EB_GARAMOND_TABLE,
        FontFamily::Oswald => &OSWALD_TABLE,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
