//! Auto-fit font size search.
//!
//! Walks font sizes down from `start_size` in fixed steps and keeps the first
//! size whose greedy wrap fits `max_lines`. If nothing fits before the floor,
//! the floor size wins with whatever wrap it produces.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::errors::{FlyerResult, LayoutError};
use crate::layout::font_metrics::TextMeasure;
use crate::layout::wrap::wrap;

/// Upper bound on font sizes tried in one search.
const MAX_TRIALS: u32 = 1024;

/// Chosen font size and the wrapping at that size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitResult {
    pub font_size: f32,
    pub lines: Vec<String>,
}

/// Bounds of the font size search.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FontRange {
    pub start: f32,
    pub min: f32,
    pub step: f32,
}

impl FontRange {
    pub fn new(start: f32, min: f32, step: f32) -> Self {
        Self { start, min, step }
    }

    pub fn validate(&self) -> FlyerResult<()> {
        if !self.step.is_finite() || self.step <= 0.0 {
            return Err(LayoutError::NonPositiveStep(self.step));
        }
        let finite = self.start.is_finite() && self.min.is_finite();
        if !finite || self.min <= 0.0 || self.start < self.min {
            return Err(LayoutError::InvalidFontRange {
                start: self.start,
                min: self.min,
            });
        }
        // A step lost to float precision would never leave `start`.
        if self.start > self.min && self.start - self.step == self.start {
            return Err(LayoutError::NonPositiveStep(self.step));
        }
        let steps = self.steps();
        if steps >= MAX_TRIALS as f32 {
            return Err(LayoutError::TooManyTrials {
                step: self.step,
                trials: steps,
                limit: MAX_TRIALS,
            });
        }
        Ok(())
    }

    fn steps(&self) -> f32 {
        ((self.start - self.min) / self.step).floor()
    }

    /// Candidate sizes from the top down, all `>= min`. Only valid ranges
    /// reach here, so the count is below `MAX_TRIALS`.
    ///
    /// Sizes are `start - i * step` rather than a running subtraction so long
    /// searches do not drift.
    fn candidates(self) -> impl Iterator<Item = f32> {
        let last = self.steps() as u32;
        (0..=last)
            .map(move |i| self.start - i as f32 * self.step)
            .filter(move |size| *size >= self.min)
    }
}

/// Finds the largest font size in `range` whose wrap of `text` at `max_width`
/// has at most `max_lines` lines.
///
/// Never loops forever: invalid ranges (`step <= 0`, steps too small to move
/// the size, more than `MAX_TRIALS` sizes) and negative widths are rejected
/// up front. Empty text fits trivially at `range.start`.
pub fn auto_fit<M>(
    text: &str,
    max_width: f32,
    max_lines: usize,
    range: FontRange,
    measure: &M,
) -> FlyerResult<FitResult>
where
    M: TextMeasure + ?Sized,
{
    range.validate()?;
    if !max_width.is_finite() || max_width < 0.0 {
        return Err(LayoutError::NegativeWidth(max_width));
    }

    let mut trials = 0u32;
    for size in range.candidates() {
        trials += 1;
        let lines = wrap(text, max_width, size, measure);
        if lines.len() <= max_lines {
            debug!(
                font_size = size,
                lines = lines.len(),
                trials,
                "auto-fit settled"
            );
            return Ok(FitResult {
                font_size: size,
                lines,
            });
        }
    }

    let lines = wrap(text, max_width, range.min, measure);
    warn!(
        font_size = range.min,
        lines = lines.len(),
        max_lines,
        trials,
        "auto-fit hit the minimum font size without fitting"
    );
    Ok(FitResult {
        font_size: range.min,
        lines,
    })
}

/// Largest size in `range` at which `text` measures at most `max_width` on a
/// single line, or `range.min` when even the floor overflows.
pub fn fit_line<M>(text: &str, max_width: f32, range: FontRange, measure: &M) -> FlyerResult<f32>
where
    M: TextMeasure + ?Sized,
{
    range.validate()?;
    if !max_width.is_finite() || max_width < 0.0 {
        return Err(LayoutError::NegativeWidth(max_width));
    }

    let fitted = range
        .candidates()
        .find(|size| measure.measure_width(text, *size) <= max_width);
    if fitted.is_none() {
        warn!(
            font_size = range.min,
            max_width, "line wider than its box at the minimum font size"
        );
    }
    Ok(fitted.unwrap_or(range.min))
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
