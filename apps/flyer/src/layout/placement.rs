//! Vertical placement of the text block + graphic group.

/// Top edge of the first text line such that the group
/// `text block + gap + graphic` is vertically centered on the page.
///
/// A caption under the graphic is folded into `graphic_size` by the caller.
/// The result is clamped at 0 so a group taller than the page starts at the
/// top edge instead of above it.
pub fn place_group(page_height: f32, text_block_height: f32, graphic_size: f32, gap: f32) -> f32 {
    let group_height = text_block_height + graphic_size + gap;
    (page_height / 2.0 - group_height / 2.0).max(0.0)
}

/// Horizontal offset that centers an item of `item_width` on a page of `page_width`.
pub fn center_x(page_width: f32, item_width: f32) -> f32 {
    (page_width - item_width) / 2.0
}
