// Auto-fitting text/graphic layout engine.
// Pure, synchronous functions: greedy wrap, font-size search, vertical centering.

pub mod auto_fit;
pub mod engine;
pub mod font_metrics;
pub mod placement;
pub mod wrap;

pub use auto_fit::{auto_fit, fit_line, FitResult, FontRange};
pub use engine::{compute_layout, LayoutRequest, LayoutResult};
pub use font_metrics::{get_metrics, FixedAdvance, FontFamily, FontMetricTable, TextMeasure};
pub use placement::place_group;
pub use wrap::wrap;
