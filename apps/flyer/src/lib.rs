//! Auto-fitting text/QR layout engine for printable event flyers.
//!
//! The `layout` module holds the pure engine: greedy wrapping, font-size
//! search and vertical centering against an injected [`TextMeasure`]. The
//! `flyer` module turns a [`FlyerConfig`] into absolute page geometry for a
//! renderer to draw.

pub mod config;
pub mod errors;
pub mod flyer;
pub mod layout;

pub use config::FlyerConfig;
pub use errors::{FlyerResult, LayoutError};
pub use flyer::{compose, compose_in_config_font, FlyerPlan};
pub use layout::{
    auto_fit, compute_layout, place_group, wrap, FitResult, FontRange, LayoutRequest,
    LayoutResult, TextMeasure,
};
