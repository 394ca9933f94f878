//! Greedy line wrapper.
//!
//! Packs as many whitespace-separated words onto a line as fit `max_width`,
//! without lookahead. Words are never split: a word wider than `max_width`
//! sits alone on its own line and overflows.

use crate::layout::font_metrics::TextMeasure;

/// Wraps `text` at `max_width` pixels, measuring at `font_size`.
///
/// Each candidate line is measured as a whole string (word + single space +
/// word ...), so measurers with kerning or ligatures see the real line.
/// Empty or whitespace-only text yields no lines.
pub fn wrap<M>(text: &str, max_width: f32, font_size: f32, measure: &M) -> Vec<String>
where
    M: TextMeasure + ?Sized,
{
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{current} {word}")
        };

        if !current.is_empty() && measure.measure_width(&candidate, font_size) > max_width {
            lines.push(std::mem::replace(&mut current, word.to_string()));
        } else {
            current = candidate;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::font_metrics::FixedAdvance;

    fn one_px_per_char(s: &str, _font_size: f32) -> f32 {
        s.chars().count() as f32
    }

    #[test]
    fn test_wrap_empty_returns_no_lines() {
        assert!(wrap("", 100.0, 10.0, &one_px_per_char).is_empty());
        assert!(wrap("   \t\n ", 100.0, 10.0, &one_px_per_char).is_empty());
    }

    #[test]
    fn test_wrap_exact_fit_stays_on_line() {
        // "AAAA BBBB" is exactly 9px; adding " CCCC" makes 14px > 9.
        let lines = wrap("AAAA BBBB CCCC", 9.0, 1.0, &one_px_per_char);
        assert_eq!(lines, vec!["AAAA BBBB", "CCCC"]);
    }

    #[test]
    fn test_wrap_collapses_whitespace() {
        let lines = wrap("  Spring   Fair\t2025 ", 100.0, 1.0, &one_px_per_char);
        assert_eq!(lines, vec!["Spring Fair 2025"]);
    }

    #[test]
    fn test_wrap_overlong_word_sits_alone() {
        let lines = wrap("a Supercalifragilistic b", 5.0, 1.0, &one_px_per_char);
        assert_eq!(lines, vec!["a", "Supercalifragilistic", "b"]);
    }

    #[test]
    fn test_wrap_zero_width_puts_each_word_on_its_own_line() {
        let lines = wrap("one two three", 0.0, 1.0, &one_px_per_char);
        assert_eq!(lines, vec!["one", "two", "three"]);
    }

    #[test]
    fn test_wrap_line_count_non_increasing_as_width_grows() {
        let text = "Annual Neighborhood Block Party and Chili Cook Off at Riverside Park";
        let measure = FixedAdvance::new(0.6);
        let mut previous = usize::MAX;
        for width in (20..=600).step_by(10) {
            let count = wrap(text, width as f32, 20.0, &measure).len();
            assert!(count <= previous, "width {width}: {count} > {previous}");
            previous = count;
        }
    }

    #[test]
    fn test_wrapped_lines_fit_unless_single_word() {
        let text = "Free Admission for Students Seniors and Veterans";
        let measure = FixedAdvance::new(0.55);
        let lines = wrap(text, 200.0, 24.0, &measure);
        for line in &lines {
            if line.contains(' ') {
                assert!(measure.measure_width(line, 24.0) <= 200.0, "{line:?} overflows");
            }
        }
        assert_eq!(lines.join(" "), text);
    }
}
