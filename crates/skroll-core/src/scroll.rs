//! Scroll-to-frame mapping.

/// Normalized progress through the hero section's scrollable range.
///
/// The scrollable range is `section_height - viewport_height`. When the
/// section is not taller than the viewport there is nothing to scrub
/// through and the fraction is defined as 0.0, resting the sequence on its
/// first frame. The special case keeps every intermediate value finite.
pub fn scroll_fraction(scroll_top: f64, section_height: f64, viewport_height: f64) -> f64 {
    let range = section_height - viewport_height;
    if range <= 0.0 {
        return 0.0;
    }
    (scroll_top / range).clamp(0.0, 1.0)
}

/// Map a scroll fraction to a 0-based frame index.
///
/// The ceiling mapping means any progress at all moves past frame 0, and
/// the upper clamp keeps a fraction of 1.0 on the last frame.
pub fn frame_index(fraction: f64, frame_count: usize) -> usize {
    if frame_count == 0 {
        return 0;
    }
    let raw = (fraction.clamp(0.0, 1.0) * frame_count as f64).ceil() as usize;
    raw.min(frame_count - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAMES: usize = 33;

    #[test]
    fn test_fraction_clamps_to_unit_interval() {
        assert_eq!(scroll_fraction(-50.0, 3000.0, 900.0), 0.0);
        assert_eq!(scroll_fraction(0.0, 3000.0, 900.0), 0.0);
        assert_eq!(scroll_fraction(2100.0, 3000.0, 900.0), 1.0);
        assert_eq!(scroll_fraction(9999.0, 3000.0, 900.0), 1.0);
        let mid = scroll_fraction(1050.0, 3000.0, 900.0);
        assert!((mid - 0.5).abs() < 0.001);
    }

    #[test]
    fn test_fraction_degenerate_section_is_zero() {
        // section no taller than the viewport: empty scrollable range
        assert_eq!(scroll_fraction(400.0, 900.0, 900.0), 0.0);
        assert_eq!(scroll_fraction(400.0, 600.0, 900.0), 0.0);
        assert!(scroll_fraction(400.0, 600.0, 900.0).is_finite());
    }

    #[test]
    fn test_frame_index_endpoints() {
        assert_eq!(frame_index(0.0, FRAMES), 0);
        assert_eq!(frame_index(1.0, FRAMES), FRAMES - 1);
    }

    #[test]
    fn test_frame_index_any_progress_leaves_frame_zero() {
        assert_eq!(frame_index(0.001, FRAMES), 1);
    }

    #[test]
    fn test_frame_index_stays_in_bounds() {
        for step in 0..=1000 {
            let fraction = step as f64 / 1000.0;
            let index = frame_index(fraction, FRAMES);
            assert!(index < FRAMES);
        }
        assert_eq!(frame_index(2.5, FRAMES), FRAMES - 1);
        assert_eq!(frame_index(-1.0, FRAMES), 0);
    }

    #[test]
    fn test_frame_index_monotonic_in_scroll() {
        let section = 4200.0;
        let viewport = 800.0;
        let mut last = 0;
        for step in 0..=3400 {
            let top = step as f64;
            let index = frame_index(scroll_fraction(top, section, viewport), FRAMES);
            assert!(index >= last);
            last = index;
        }
        assert_eq!(last, FRAMES - 1);
    }

    #[test]
    fn test_frame_index_empty_sequence() {
        assert_eq!(frame_index(0.7, 0), 0);
    }
}
