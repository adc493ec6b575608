//! Scroll reveal threshold

/// Distance in pixels an element must rise above the bottom of the viewport
/// before it is revealed
pub const REVEAL_OFFSET_PX: f64 = 200.0;

/// Whether an element whose top edge sits at `element_top` (viewport
/// coordinates) should be revealed in a viewport `viewport_height` tall
pub fn should_reveal(element_top: f64, viewport_height: f64) -> bool {
    element_top < viewport_height - REVEAL_OFFSET_PX
}
