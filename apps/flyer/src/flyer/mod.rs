// Flyer page geometry built on top of the layout engine.

pub mod compose;
pub mod page;
pub mod title_case;

pub use compose::{compose, compose_in_config_font, FlyerPlan, PlacedLine, Rect, TextBlock};
pub use page::{pt_to_px, Orientation, PageSize, PREVIEW_DPI, PRINT_DPI};
pub use title_case::mla_title_case;
