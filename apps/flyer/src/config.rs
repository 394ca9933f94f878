use std::fmt::Display;
use std::str::FromStr;

use anyhow::{anyhow, Context, Result};
use tracing::info;

use crate::errors::{FlyerResult, LayoutError};
use crate::flyer::page::{pt_to_px, Orientation, PageSize, PRINT_DPI};
use crate::layout::auto_fit::FontRange;
use crate::layout::engine::{is_positive, DEFAULT_LINE_HEIGHT, DEFAULT_TEXT_WIDTH_RATIO};
use crate::layout::engine::text_block_height;
use crate::layout::font_metrics::{get_metrics, FontFamily, FontMetricTable};

/// Per-flyer design constants. Everything that differs between flyer variants
/// (page, fonts, gaps, toggles) lives here instead of in forked layout code.
///
/// Typographic sizes and gaps are in points so the same config renders the
/// same composition at preview and print resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct FlyerConfig {
    pub page: PageSize,
    pub dpi: f32,
    pub orientation: Orientation,
    pub font: FontFamily,

    pub title_start_pt: f32,
    pub title_min_pt: f32,
    pub title_step_pt: f32,
    pub title_max_lines: usize,
    pub line_height: f32,
    pub text_width_ratio: f32,
    /// Space between the title block and the white box.
    pub group_gap_pt: f32,

    /// Side of the white QR box in inches.
    pub box_inches: f32,
    /// Share of the white box covered by the QR code; the rest is padding.
    pub qr_inner_ratio: f32,

    pub caption_pt: f32,
    /// Floor for captions too long to fit one line at `caption_pt`.
    pub caption_min_pt: f32,
    /// Space between the white box and the caption line.
    pub caption_gap_pt: f32,

    pub mla_title_case: bool,

    pub disclaimer: Option<String>,
    pub footer_start_pt: f32,
    pub footer_min_pt: f32,
    pub footer_max_lines: usize,
    pub footer_margin_in: f32,
}

impl Default for FlyerConfig {
    fn default() -> Self {
        FlyerConfig {
            page: PageSize::LETTER,
            dpi: PRINT_DPI,
            orientation: Orientation::Portrait,
            font: FontFamily::Inter,
            title_start_pt: 40.0,
            title_min_pt: 20.0,
            title_step_pt: 2.0,
            title_max_lines: 2,
            line_height: DEFAULT_LINE_HEIGHT,
            text_width_ratio: DEFAULT_TEXT_WIDTH_RATIO,
            group_gap_pt: 24.0,
            box_inches: 3.16,
            qr_inner_ratio: 0.90,
            caption_pt: 14.0,
            caption_min_pt: 8.0,
            caption_gap_pt: 10.0,
            mla_title_case: false,
            disclaimer: None,
            footer_start_pt: 10.0,
            footer_min_pt: 6.0,
            footer_max_lines: 3,
            footer_margin_in: 0.5,
        }
    }
}

impl FlyerConfig {
    /// Loads the config from `FLYER_*` environment variables (and `.env` if present).
    /// Unset variables keep their defaults; malformed ones are an error.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let config = Self::from_lookup(|key| std::env::var(key).ok())?;
        config.validate().context("Invalid flyer configuration")?;

        info!(
            dpi = config.dpi,
            orientation = ?config.orientation,
            font = ?config.font,
            "Flyer config loaded"
        );
        Ok(config)
    }

    /// Builds a config from an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let d = FlyerConfig::default();
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Ok(FlyerConfig {
            page: d.page,
            dpi: parse_or(&get, "FLYER_DPI", d.dpi)?,
            orientation: parse_or(&get, "FLYER_ORIENTATION", d.orientation)?,
            font: parse_or(&get, "FLYER_FONT", d.font)?,
            title_start_pt: parse_or(&get, "FLYER_TITLE_START_PT", d.title_start_pt)?,
            title_min_pt: parse_or(&get, "FLYER_TITLE_MIN_PT", d.title_min_pt)?,
            title_step_pt: parse_or(&get, "FLYER_TITLE_STEP_PT", d.title_step_pt)?,
            title_max_lines: parse_or(&get, "FLYER_TITLE_MAX_LINES", d.title_max_lines)?,
            line_height: parse_or(&get, "FLYER_LINE_HEIGHT", d.line_height)?,
            text_width_ratio: parse_or(&get, "FLYER_TEXT_WIDTH_RATIO", d.text_width_ratio)?,
            group_gap_pt: parse_or(&get, "FLYER_GROUP_GAP_PT", d.group_gap_pt)?,
            box_inches: parse_or(&get, "FLYER_BOX_INCHES", d.box_inches)?,
            qr_inner_ratio: parse_or(&get, "FLYER_QR_INNER_RATIO", d.qr_inner_ratio)?,
            caption_pt: parse_or(&get, "FLYER_CAPTION_PT", d.caption_pt)?,
            caption_min_pt: parse_or(&get, "FLYER_CAPTION_MIN_PT", d.caption_min_pt)?,
            caption_gap_pt: parse_or(&get, "FLYER_CAPTION_GAP_PT", d.caption_gap_pt)?,
            mla_title_case: match get("FLYER_MLA_TITLE_CASE") {
                Some(raw) => parse_flag(&raw)
                    .with_context(|| format!("FLYER_MLA_TITLE_CASE has invalid value '{raw}'"))?,
                None => d.mla_title_case,
            },
            disclaimer: get("FLYER_DISCLAIMER").map(|v| v.trim().to_string()),
            footer_start_pt: parse_or(&get, "FLYER_FOOTER_START_PT", d.footer_start_pt)?,
            footer_min_pt: parse_or(&get, "FLYER_FOOTER_MIN_PT", d.footer_min_pt)?,
            footer_max_lines: parse_or(&get, "FLYER_FOOTER_MAX_LINES", d.footer_max_lines)?,
            footer_margin_in: parse_or(&get, "FLYER_FOOTER_MARGIN_IN", d.footer_margin_in)?,
        })
    }

    /// Same config at another resolution (preview vs. print).
    pub fn with_dpi(&self, dpi: f32) -> Self {
        FlyerConfig {
            dpi,
            ..self.clone()
        }
    }

    /// Checks the values a layout pass cannot work with.
    pub fn validate(&self) -> FlyerResult<()> {
        for (name, value) in [
            ("dpi", self.dpi),
            ("box_inches", self.box_inches),
            ("line_height", self.line_height),
        ] {
            if !is_positive(value) {
                return Err(LayoutError::invalid_ratio(name, value));
            }
        }
        for (name, value) in [
            ("qr_inner_ratio", self.qr_inner_ratio),
            ("text_width_ratio", self.text_width_ratio),
        ] {
            if !is_positive(value) || value > 1.0 {
                return Err(LayoutError::invalid_ratio(name, value));
            }
        }
        for (name, value) in [
            ("group_gap_pt", self.group_gap_pt),
            ("caption_gap_pt", self.caption_gap_pt),
            ("footer_margin_in", self.footer_margin_in),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(LayoutError::invalid_ratio(name, value));
            }
        }
        if self.footer_margin_in * 2.0 >= self.page.width_in.min(self.page.height_in) {
            return Err(LayoutError::invalid_ratio(
                "footer_margin_in",
                self.footer_margin_in,
            ));
        }
        self.title_range_px().validate()?;
        self.caption_range_px().validate()?;
        self.footer_range_px().validate()?;
        if self.disclaimer.as_deref().is_some_and(|d| !d.trim().is_empty()) {
            self.check_footer_clearance()?;
        }
        Ok(())
    }

    /// Rejects configs whose centered group, at its largest, would run into
    /// the footer band at its largest.
    fn check_footer_clearance(&self) -> FlyerResult<()> {
        let (_, page_height) = self.page_pixels();
        let title = self.title_range_px();
        let caption = self.caption_range_px();
        let footer = self.footer_range_px();

        let group_height = text_block_height(self.title_max_lines, title.start, self.line_height)
            + self.px(self.group_gap_pt)
            + self.box_px()
            + self.px(self.caption_gap_pt)
            + text_block_height(1, caption.start, self.line_height);
        let group_bottom = (page_height - group_height).max(0.0) / 2.0 + group_height;

        let margin = self.footer_margin_in * self.dpi;
        let footer_top = page_height
            - margin
            - text_block_height(self.footer_max_lines, footer.start, self.line_height);

        if group_bottom > footer_top {
            return Err(LayoutError::GroupOverlapsFooter {
                group_bottom,
                footer_top,
            });
        }
        Ok(())
    }

    /// `(width, height)` of the page in pixels.
    pub fn page_pixels(&self) -> (f32, f32) {
        self.page.to_pixels(self.dpi, self.orientation)
    }

    pub fn px(&self, pt: f32) -> f32 {
        pt_to_px(pt, self.dpi)
    }

    /// Side of the white box in pixels.
    pub fn box_px(&self) -> f32 {
        self.box_inches * self.dpi
    }

    pub fn title_range_px(&self) -> FontRange {
        FontRange::new(
            self.px(self.title_start_pt),
            self.px(self.title_min_pt),
            self.px(self.title_step_pt),
        )
    }

    /// Width table for the configured font family.
    pub fn metrics(&self) -> &'static FontMetricTable {
        get_metrics(self.font)
    }

    pub fn caption_range_px(&self) -> FontRange {
        FontRange::new(
            self.px(self.caption_pt),
            self.px(self.caption_min_pt),
            self.px(1.0),
        )
    }

    pub fn footer_range_px(&self) -> FontRange {
        // The footer shrinks in whole points.
        FontRange::new(
            self.px(self.footer_start_pt),
            self.px(self.footer_min_pt),
            self.px(1.0),
        )
    }
}

fn parse_or<T, G>(get: &G, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
    G: Fn(&str) -> Option<String>,
{
    match get(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|e| anyhow!("{key} has invalid value '{raw}': {e}")),
        None => Ok(default),
    }
}

fn parse_flag(raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(anyhow!("expected a boolean, got '{other}'")),
    }
}
