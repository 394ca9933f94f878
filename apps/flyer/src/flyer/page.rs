//! Physical page sizes and their pixel dimensions at a given DPI.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Resolution used for PDF export and print.
pub const PRINT_DPI: f32 = 300.0;
/// Resolution of the on-screen preview canvas.
pub const PREVIEW_DPI: f32 = 96.0;

const POINTS_PER_INCH: f32 = 72.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

impl FromStr for Orientation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "portrait" => Ok(Orientation::Portrait),
            "landscape" => Ok(Orientation::Landscape),
            other => Err(format!("unknown orientation '{other}'")),
        }
    }
}

/// Page size in inches, portrait axes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageSize {
    pub width_in: f32,
    pub height_in: f32,
}

impl PageSize {
    /// US letter, 8.5" × 11".
    pub const LETTER: PageSize = PageSize {
        width_in: 8.5,
        height_in: 11.0,
    };

    /// Whole-pixel `(width, height)` at `dpi`. Landscape swaps the axes.
    pub fn to_pixels(&self, dpi: f32, orientation: Orientation) -> (f32, f32) {
        let w = (self.width_in * dpi).round();
        let h = (self.height_in * dpi).round();
        match orientation {
            Orientation::Portrait => (w, h),
            Orientation::Landscape => (h, w),
        }
    }
}

/// Converts a typographic size in points to pixels at `dpi`.
pub fn pt_to_px(pt: f32, dpi: f32) -> f32 {
    pt * dpi / POINTS_PER_INCH
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_at_print_dpi() {
        assert_eq!(
            PageSize::LETTER.to_pixels(PRINT_DPI, Orientation::Portrait),
            (2550.0, 3300.0)
        );
    }

    #[test]
    fn test_landscape_swaps_axes() {
        assert_eq!(
            PageSize::LETTER.to_pixels(PRINT_DPI, Orientation::Landscape),
            (3300.0, 2550.0)
        );
    }

    #[test]
    fn test_preview_dpi_rounds_to_whole_pixels() {
        assert_eq!(
            PageSize::LETTER.to_pixels(PREVIEW_DPI, Orientation::Portrait),
            (816.0, 1056.0)
        );
    }

    #[test]
    fn test_pt_to_px() {
        assert_eq!(pt_to_px(72.0, 300.0), 300.0);
        assert_eq!(pt_to_px(12.0, 96.0), 16.0);
    }

    #[test]
    fn test_orientation_from_str() {
        assert_eq!("Landscape".parse::<Orientation>(), Ok(Orientation::Landscape));
        assert_eq!("portrait".parse::<Orientation>(), Ok(Orientation::Portrait));
        assert!("sideways".parse::<Orientation>().is_err());
    }
}
