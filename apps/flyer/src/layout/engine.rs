//! Layout entry point: one request in, one complete result out.
//!
//! A `LayoutRequest` is built fresh for every render (text edit, orientation
//! change, new background) and the `LayoutResult` is consumed by the renderer
//! straight away. Nothing is cached between calls.

use serde::{Deserialize, Serialize};

use crate::errors::{FlyerResult, LayoutError};
use crate::layout::auto_fit::{auto_fit, FontRange};
use crate::layout::font_metrics::TextMeasure;
use crate::layout::placement::place_group;

pub const DEFAULT_LINE_HEIGHT: f32 = 1.2;
pub const DEFAULT_TEXT_WIDTH_RATIO: f32 = 0.85;

/// Everything the engine needs to lay out one text block above a square graphic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutRequest {
    pub page_width: f32,
    pub page_height: f32,
    pub text: String,
    /// Side of the square companion graphic (the QR box), in pixels.
    pub graphic_size: f32,
    pub max_lines: usize,
    pub initial_font_size: f32,
    pub min_font_size: f32,
    pub font_size_step: f32,
    /// Space between the last text line and the graphic, in pixels.
    pub gap: f32,
    /// Line advance as a multiple of the font size.
    pub line_height: f32,
    /// Fraction of the page width available to each line.
    pub text_width_ratio: f32,
}

impl LayoutRequest {
    /// Request with the default line height and wrap-width ratio.
    pub fn new(
        page_width: f32,
        page_height: f32,
        text: impl Into<String>,
        graphic_size: f32,
        max_lines: usize,
        font_range: FontRange,
        gap: f32,
    ) -> Self {
        Self {
            page_width,
            page_height,
            text: text.into(),
            graphic_size,
            max_lines,
            initial_font_size: font_range.start,
            min_font_size: font_range.min,
            font_size_step: font_range.step,
            gap,
            line_height: DEFAULT_LINE_HEIGHT,
            text_width_ratio: DEFAULT_TEXT_WIDTH_RATIO,
        }
    }

    pub fn font_range(&self) -> FontRange {
        FontRange::new(
            self.initial_font_size,
            self.min_font_size,
            self.font_size_step,
        )
    }

    /// Wrap width in pixels.
    pub fn max_width(&self) -> f32 {
        self.page_width * self.text_width_ratio
    }

    pub fn validate(&self) -> FlyerResult<()> {
        if !is_positive(self.page_width) || !is_positive(self.page_height) {
            return Err(LayoutError::InvalidPage {
                width: self.page_width,
                height: self.page_height,
            });
        }
        if !is_positive(self.graphic_size) {
            return Err(LayoutError::InvalidGraphic(self.graphic_size));
        }
        if !self.gap.is_finite() || self.gap < 0.0 {
            return Err(LayoutError::invalid_ratio("gap", self.gap));
        }
        if !is_positive(self.line_height) {
            return Err(LayoutError::invalid_ratio("line_height", self.line_height));
        }
        if !is_positive(self.text_width_ratio) || self.text_width_ratio > 1.0 {
            return Err(LayoutError::invalid_ratio(
                "text_width_ratio",
                self.text_width_ratio,
            ));
        }
        self.font_range().validate()
    }
}

/// Font size, wrapped lines and vertical offset for one render pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutResult {
    pub font_size: f32,
    pub lines: Vec<String>,
    pub text_block_height: f32,
    /// Top edge of the first line.
    pub content_top_y: f32,
}

impl LayoutResult {
    /// Top edge of the graphic, `gap` below the text block.
    pub fn graphic_top_y(&self, gap: f32) -> f32 {
        self.content_top_y + self.text_block_height + gap
    }
}

/// Runs auto-fit and group placement for `request`.
pub fn compute_layout<M>(request: &LayoutRequest, measure: &M) -> FlyerResult<LayoutResult>
where
    M: TextMeasure + ?Sized,
{
    request.validate()?;

    let fit = auto_fit(
        &request.text,
        request.max_width(),
        request.max_lines,
        request.font_range(),
        measure,
    )?;

    let text_block_height = text_block_height(fit.lines.len(), fit.font_size, request.line_height);
    let content_top_y = place_group(
        request.page_height,
        text_block_height,
        request.graphic_size,
        request.gap,
    );

    Ok(LayoutResult {
        font_size: fit.font_size,
        lines: fit.lines,
        text_block_height,
        content_top_y,
    })
}

pub(crate) fn text_block_height(line_count: usize, font_size: f32, line_height: f32) -> f32 {
    line_count as f32 * font_size * line_height
}

pub(crate) fn is_positive(value: f32) -> bool {
    value.is_finite() && value > 0.0
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::font_metrics::FixedAdvance;

    fn make_request(text: &str) -> LayoutRequest {
        LayoutRequest::new(
            1000.0,
            1400.0,
            text,
            400.0,
            2,
            FontRange::new(40.0, 20.0, 2.0),
            50.0,
        )
    }

    #[test]
    fn test_short_title_keeps_start_size_and_centers_group() {
        let request = make_request("Bake Sale");
        let result = compute_layout(&request, &FixedAdvance::new(0.5)).unwrap();

        assert_eq!(result.font_size, 40.0);
        assert_eq!(result.lines, vec!["Bake Sale"]);
        assert!((result.text_block_height - 48.0).abs() < 1e-4);
        // (1400 - (48 + 50 + 400)) / 2 = 451
        assert!((result.content_top_y - 451.0).abs() < 1e-3);
        assert!((result.graphic_top_y(request.gap) - 549.0).abs() < 1e-3);
    }

    #[test]
    fn test_empty_text_centers_graphic_alone() {
        let result = compute_layout(&make_request(""), &FixedAdvance::new(0.5)).unwrap();
        assert_eq!(result.font_size, 40.0);
        assert!(result.lines.is_empty());
        assert_eq!(result.text_block_height, 0.0);
        assert!((result.content_top_y - 475.0).abs() < 1e-3);
    }

    #[test]
    fn test_long_title_shrinks_within_wrap_width() {
        let text = "Westside Community Center Annual Holiday Craft Fair and Cookie Exchange";
        let mut request = make_request(text);
        request.max_lines = 1;
        let measure = FixedAdvance::new(0.55);
        let result = compute_layout(&request, &measure).unwrap();

        // 71 chars * 0.55em: 859px at 22 overflows the 850px wrap width, 781px at 20 fits.
        assert_eq!(result.font_size, 20.0);
        assert_eq!(result.lines.len(), 1);
        let expected_height = result.lines.len() as f32 * result.font_size * 1.2;
        assert!((result.text_block_height - expected_height).abs() < 1e-3);
    }

    #[test]
    fn test_oversized_group_clamps_top_to_zero() {
        let mut request = make_request("Tiny Page");
        request.page_height = 300.0;
        let result = compute_layout(&request, &FixedAdvance::new(0.5)).unwrap();
        assert_eq!(result.content_top_y, 0.0);
    }

    #[test]
    fn test_invalid_requests_are_rejected() {
        let mut request = make_request("x");
        request.page_width = 0.0;
        assert!(matches!(
            compute_layout(&request, &FixedAdvance::new(0.5)),
            Err(LayoutError::InvalidPage { .. })
        ));

        let mut request = make_request("x");
        request.graphic_size = -5.0;
        assert_eq!(
            compute_layout(&request, &FixedAdvance::new(0.5)),
            Err(LayoutError::InvalidGraphic(-5.0))
        );

        let mut request = make_request("x");
        request.font_size_step = 0.0;
        assert_eq!(
            compute_layout(&request, &FixedAdvance::new(0.5)),
            Err(LayoutError::NonPositiveStep(0.0))
        );

        let mut request = make_request("x");
        request.text_width_ratio = 1.5;
        assert!(matches!(
            compute_layout(&request, &FixedAdvance::new(0.5)),
            Err(LayoutError::InvalidRatio {
                name: "text_width_ratio",
                ..
            })
        ));
    }
}
