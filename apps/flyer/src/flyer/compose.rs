//! Flyer composition: turns an event name, an optional caption and a
//! [`FlyerConfig`] into absolute positions for every element on the page.
//!
//! The result is a plain [`FlyerPlan`]. Drawing it (background image, QR
//! pixels, text fill, PDF export) belongs to the host renderer.
//!
//! Page structure, top to bottom:
//! ```text
//!   title lines (auto-fit, centered)
//!   group gap
//!   white box  [ padding | QR | padding ]
//!   caption gap + caption line (optional)
//!   ...
//!   disclaimer footer (optional, bottom-anchored)
//! ```
//! Title, box and caption form one group, vertically centered on the page.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::FlyerConfig;
use crate::errors::FlyerResult;
use crate::flyer::title_case::mla_title_case;
use crate::layout::auto_fit::{auto_fit, fit_line};
use crate::layout::engine::{compute_layout, text_block_height, LayoutRequest};
use crate::layout::font_metrics::TextMeasure;
use crate::layout::placement::center_x;

// ────────────────────────────────────────────────────────────────────────────
// Plan types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

/// One horizontally centered line of text. `x` is the left edge, never
/// negative; a line wider than the page starts at 0 and overflows right.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedLine {
    pub text: String,
    pub x: f32,
    pub top_y: f32,
    pub width: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextBlock {
    pub font_size: f32,
    /// Advance between consecutive line tops.
    pub line_height_px: f32,
    pub lines: Vec<PlacedLine>,
}

impl TextBlock {
    pub fn height(&self) -> f32 {
        self.lines.len() as f32 * self.line_height_px
    }

    pub fn top_y(&self) -> Option<f32> {
        self.lines.first().map(|l| l.top_y)
    }
}

/// Absolute layout of one flyer page, in pixels at the config's DPI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlyerPlan {
    pub page_width: f32,
    pub page_height: f32,
    pub title: TextBlock,
    pub white_box: Rect,
    pub qr: Rect,
    pub caption: Option<TextBlock>,
    pub footer: Option<TextBlock>,
}

impl FlyerPlan {
    /// Serializes the plan for a renderer living outside this process.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Composition
// ────────────────────────────────────────────────────────────────────────────

/// Lays out a flyer measured with the width table of `config.font`.
pub fn compose_in_config_font(
    event_name: &str,
    caption: Option<&str>,
    config: &FlyerConfig,
) -> FlyerResult<FlyerPlan> {
    let metrics = config.metrics();
    debug!(family = ?metrics.family, "Measuring with configured font");
    compose(event_name, caption, config, metrics)
}

/// Lays out a flyer for `event_name` with an optional `caption` under the QR box.
pub fn compose<M>(
    event_name: &str,
    caption: Option<&str>,
    config: &FlyerConfig,
    measure: &M,
) -> FlyerResult<FlyerPlan>
where
    M: TextMeasure + ?Sized,
{
    config.validate()?;

    let (page_width, page_height) = config.page_pixels();
    let box_side = config.box_px();
    let title = if config.mla_title_case {
        mla_title_case(event_name)
    } else {
        event_name.to_string()
    };

    let text_width = page_width * config.text_width_ratio;
    let caption_gap = config.px(config.caption_gap_pt);
    // The caption is never wrapped; it shrinks to the text width instead.
    let caption_fit = match caption.map(str::trim).filter(|c| !c.is_empty()) {
        Some(text) => {
            let size = fit_line(text, text_width, config.caption_range_px(), measure)?;
            Some((text, size))
        }
        None => None,
    };
    // The caption travels with the box, so it counts as part of the graphic.
    let caption_extent = caption_fit.map_or(0.0, |(_, size)| {
        caption_gap + text_block_height(1, size, config.line_height)
    });

    let title_range = config.title_range_px();
    let request = LayoutRequest {
        page_width,
        page_height,
        text: title,
        graphic_size: box_side + caption_extent,
        max_lines: config.title_max_lines,
        initial_font_size: title_range.start,
        min_font_size: title_range.min,
        font_size_step: title_range.step,
        gap: config.px(config.group_gap_pt),
        line_height: config.line_height,
        text_width_ratio: config.text_width_ratio,
    };
    let layout = compute_layout(&request, measure)?;

    let white_box = Rect {
        x: center_x(page_width, box_side),
        y: layout.graphic_top_y(request.gap),
        width: box_side,
        height: box_side,
    };

    let title_block = place_lines(
        layout.lines,
        layout.font_size,
        config.line_height,
        layout.content_top_y,
        page_width,
        measure,
    );

    let qr_side = box_side * config.qr_inner_ratio;
    let pad = (box_side - qr_side) / 2.0;
    let qr = Rect {
        x: white_box.x + pad,
        y: white_box.y + pad,
        width: qr_side,
        height: qr_side,
    };

    let caption_block = caption_fit.map(|(text, size)| {
        place_lines(
            vec![text.to_string()],
            size,
            config.line_height,
            white_box.bottom() + caption_gap,
            page_width,
            measure,
        )
    });

    let footer = match config.disclaimer.as_deref().map(str::trim) {
        Some(text) if !text.is_empty() => {
            Some(compose_footer(text, config, page_width, page_height, measure)?)
        }
        _ => None,
    };

    info!(
        font_size = title_block.font_size,
        title_lines = title_block.lines.len(),
        box_y = white_box.y,
        caption = caption_block.is_some(),
        footer = footer.is_some(),
        "Flyer composed"
    );

    Ok(FlyerPlan {
        page_width,
        page_height,
        title: title_block,
        white_box,
        qr,
        caption: caption_block,
        footer,
    })
}

/// Auto-fits the disclaimer into the band between the side margins and
/// anchors its last line on the bottom margin.
fn compose_footer<M>(
    text: &str,
    config: &FlyerConfig,
    page_width: f32,
    page_height: f32,
    measure: &M,
) -> FlyerResult<TextBlock>
where
    M: TextMeasure + ?Sized,
{
    let margin = config.footer_margin_in * config.dpi;
    let band_width = page_width - 2.0 * margin;
    let fit = auto_fit(
        text,
        band_width,
        config.footer_max_lines,
        config.footer_range_px(),
        measure,
    )?;

    let height = text_block_height(fit.lines.len(), fit.font_size, config.line_height);
    let top = (page_height - margin - height).max(0.0);
    Ok(place_lines(
        fit.lines,
        fit.font_size,
        config.line_height,
        top,
        page_width,
        measure,
    ))
}

fn place_lines<M>(
    lines: Vec<String>,
    font_size: f32,
    line_height: f32,
    top_y: f32,
    page_width: f32,
    measure: &M,
) -> TextBlock
where
    M: TextMeasure + ?Sized,
{
    let line_height_px = font_size * line_height;
    let lines = lines
        .into_iter()
        .enumerate()
        .map(|(i, text)| {
            let width = measure.measure_width(&text, font_size);
            PlacedLine {
                x: center_x(page_width, width).max(0.0),
                top_y: top_y + i as f32 * line_height_px,
                width,
                text,
            }
        })
        .collect();

    TextBlock {
        font_size,
        line_height_px,
        lines,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
