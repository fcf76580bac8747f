// Window geometry - pure logic, no Tauri imports.
// All values are logical pixels; the glue converts with the window scale factor.

pub const TAB_STRIP_HEIGHT: f64 = 34.0;
pub const NAV_BAR_HEIGHT: f64 = 40.0;
pub const TOOLBAR_HEIGHT: f64 = TAB_STRIP_HEIGHT + NAV_BAR_HEIGHT;
pub const MIN_CONTENT_HEIGHT: f64 = 100.0;

/// Width reserved at the right of the tab strip for the "New Tab" button.
pub const NEW_TAB_BUTTON_WIDTH: f64 = 36.0;
pub const MIN_TAB_WIDTH: f64 = 80.0;
pub const MAX_TAB_WIDTH: f64 = 220.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

pub fn toolbar_bounds(window_width: f64) -> Rect {
    Rect {
        x: 0.0,
        y: 0.0,
        width: window_width,
        height: TOOLBAR_HEIGHT,
    }
}

pub fn content_bounds(window_width: f64, window_height: f64) -> Rect {
    Rect {
        x: 0.0,
        y: TOOLBAR_HEIGHT,
        width: window_width,
        height: (window_height - TOOLBAR_HEIGHT).max(MIN_CONTENT_HEIGHT),
    }
}

/// Visible width of the scrolling tab row; the New Tab button is pinned to its right.
pub fn tab_viewport_width(strip_width: f64) -> f64 {
    (strip_width - NEW_TAB_BUTTON_WIDTH).max(0.0)
}

/// Tabs share the viewport evenly, within [MIN_TAB_WIDTH, MAX_TAB_WIDTH].
/// At the minimum width the row overflows and scrolls.
pub fn tab_width(strip_width: f64, count: usize) -> f64 {
    if count == 0 {
        return MAX_TAB_WIDTH;
    }
    (tab_viewport_width(strip_width) / count as f64).clamp(MIN_TAB_WIDTH, MAX_TAB_WIDTH)
}

/// Maps a horizontal position in the tab strip to the tab under it.
///
/// `x` is relative to the left edge of the viewport and `scroll_left` is the
/// row's current horizontal scroll offset.
pub fn tab_at(x: f64, scroll_left: f64, strip_width: f64, count: usize) -> Option<usize> {
    if count == 0 || !x.is_finite() || !scroll_left.is_finite() {
        return None;
    }
    if x < 0.0 || x >= tab_viewport_width(strip_width) {
        return None;
    }
    let offset = x + scroll_left.max(0.0);
    let index = (offset / tab_width(strip_width, count)).floor() as usize;
    (index < count).then_some(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_content_sits_below_toolbar() {
        let content = content_bounds(800.0, 600.0);
        assert_eq!(content.y, TOOLBAR_HEIGHT);
        assert_eq!(content.height, 600.0 - TOOLBAR_HEIGHT);
        assert_eq!(toolbar_bounds(800.0).height, content.y);
    }

    #[test]
    fn test_content_height_is_clamped() {
        assert_eq!(content_bounds(800.0, 90.0).height, MIN_CONTENT_HEIGHT);
    }

    #[rstest]
    #[case(836.0, 1, MAX_TAB_WIDTH)]
    #[case(836.0, 4, 200.0)]
    #[case(836.0, 40, MIN_TAB_WIDTH)]
    #[case(10.0, 2, MIN_TAB_WIDTH)]
    fn test_tab_width(#[case] strip: f64, #[case] count: usize, #[case] expected: f64) {
        assert_eq!(tab_width(strip, count), expected);
    }

    #[rstest]
    // 4 tabs of 200px in an 836px strip
    #[case(0.0, Some(0))]
    #[case(199.9, Some(0))]
    #[case(200.0, Some(1))]
    #[case(799.0, Some(3))]
    // Past the last tab (New Tab button area)
    #[case(810.0, None)]
    #[case(-1.0, None)]
    #[case(f64::NAN, None)]
    fn test_tab_at(#[case] x: f64, #[case] expected: Option<usize>) {
        assert_eq!(tab_at(x, 0.0, 836.0, 4), expected);
    }

    #[test]
    fn test_tab_at_without_tabs() {
        assert_eq!(tab_at(10.0, 0.0, 800.0, 0), None);
    }

    #[test]
    fn test_tab_at_single_tab_leaves_gap() {
        // One 220px tab: clicks to its right hit empty strip
        assert_eq!(tab_at(100.0, 0.0, 836.0, 1), Some(0));
        assert_eq!(tab_at(300.0, 0.0, 836.0, 1), None);
    }

    #[test]
    fn test_overflowing_row_scrolls_behind_pinned_button() {
        // 12 tabs at the 80px minimum need 960px but only 764px are visible
        let width = tab_width(800.0, 12);
        assert_eq!(width, MIN_TAB_WIDTH);
        assert!(width * 12.0 > tab_viewport_width(800.0));

        // The pinned New Tab button never maps to a tab
        assert_eq!(tab_at(790.0, 0.0, 800.0, 12), None);
        assert_eq!(tab_at(790.0, 196.0, 800.0, 12), None);

        // Unscrolled, the visible edge is tab 9; scrolled to the end, tab 11
        assert_eq!(tab_at(763.0, 0.0, 800.0, 12), Some(9));
        assert_eq!(tab_at(763.0, 196.0, 800.0, 12), Some(11));
        assert_eq!(tab_at(10.0, 196.0, 800.0, 12), Some(2));
    }

    #[test]
    fn test_tab_at_ignores_bad_scroll_offset() {
        assert_eq!(tab_at(10.0, f64::NAN, 800.0, 3), None);
        assert_eq!(tab_at(10.0, -50.0, 800.0, 3), Some(0));
    }
}
