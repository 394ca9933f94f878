use thiserror::Error;

/// Convenience result type for layout and composition calls.
pub type FlyerResult<T> = Result<T, LayoutError>;

/// Precondition violations raised before any layout work starts.
///
/// Degenerate-but-valid inputs (empty text, zero wrap width, `max_lines == 0`)
/// are never errors; they produce well-defined layouts instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    #[error("Font size step must be a positive finite number, got {0}")]
    NonPositiveStep(f32),

    #[error("Invalid font size range: start={start}, min={min} (need start >= min > 0)")]
    InvalidFontRange { start: f32, min: f32 },

    #[error("Font size step {step} needs {trials} trials, more than the limit of {limit}")]
    TooManyTrials { step: f32, trials: f32, limit: u32 },

    #[error("Title group bottom {group_bottom} overlaps footer top {footer_top}")]
    GroupOverlapsFooter { group_bottom: f32, footer_top: f32 },

    #[error("Wrap width must be a non-negative finite number, got {0}")]
    NegativeWidth(f32),

    #[error("Invalid page dimensions: {width}x{height}")]
    InvalidPage { width: f32, height: f32 },

    #[error("Graphic size must be a positive finite number, got {0}")]
    InvalidGraphic(f32),

    #[error("Invalid value for {name}: {value}")]
    InvalidRatio { name: &'static str, value: f32 },
}

impl LayoutError {
    pub fn invalid_ratio(name: &'static str, value: f32) -> Self {
        Self::InvalidRatio { name, value }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_offending_values() {
        let err = LayoutError::NonPositiveStep(0.0);
        assert!(err.to_string().contains("got 0"));

        let err = LayoutError::InvalidFontRange {
            start: 10.0,
            min: 20.0,
        };
        assert!(err.to_string().contains("start=10"));
        assert!(err.to_string().contains("min=20"));

        let err = LayoutError::invalid_ratio("line_height", -1.0);
        assert_eq!(err.to_string(), "Invalid value for line_height: -1");
    }
}
