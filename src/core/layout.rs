//! # Result layout policy
//!
//! Pure function mapping (viewport width, selection present) to the results
//! screen layout. The constants are the web client's pixel breakpoints kept
//! as unit-agnostic "layout units"; the renderer decides how many units a
//! terminal cell is worth (see `tui::ui::UNITS_PER_CELL`) and feeds the
//! width in. Nothing here reads the terminal, so every render recomputes
//! from current inputs and the function is trivially testable.

/// Below this viewport width the list always gets the full width.
pub const TWO_PANE_BREAKPOINT: u16 = 992;

/// Cap on the list width when it is the only column on a wide viewport.
pub const LIST_MAX_WIDTH: u16 = 900;

/// List : preview width ratio in two-column mode.
pub const LIST_RATIO: u32 = 2;
pub const PREVIEW_RATIO: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Columns {
    One,
    /// List plus preview pane, split `LIST_RATIO : PREVIEW_RATIO`.
    Two,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultsLayout {
    pub columns: Columns,
    /// `Some(max)` when the list is width-capped, in layout units.
    pub list_max_width: Option<u16>,
    pub list_centered: bool,
}

pub fn results_layout(viewport_width: u16, has_selection: bool) -> ResultsLayout {
    if viewport_width < TWO_PANE_BREAKPOINT {
        ResultsLayout {
            columns: Columns::One,
            list_max_width: None,
            list_centered: false,
        }
    } else if has_selection {
        ResultsLayout {
            columns: Columns::Two,
            list_max_width: None,
            list_centered: false,
        }
    } else {
        ResultsLayout {
            columns: Columns::One,
            list_max_width: Some(LIST_MAX_WIDTH),
            list_centered: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_narrow_viewport_is_single_column_regardless_of_selection() {
        for width in [0, 80, 640, TWO_PANE_BREAKPOINT - 1] {
            for has_selection in [false, true] {
                let layout = results_layout(width, has_selection);
                assert_eq!(layout.columns, Columns::One, "width={width}");
                assert_eq!(layout.list_max_width, None);
                assert!(!layout.list_centered);
            }
        }
    }

    #[test]
    fn test_wide_viewport_with_selection_splits_two_to_one() {
        let layout = results_layout(TWO_PANE_BREAKPOINT, true);
        assert_eq!(layout.columns, Columns::Two);
        assert_eq!(layout.list_max_width, None);
        assert!(!layout.list_centered);
        assert_eq!((LIST_RATIO, PREVIEW_RATIO), (2, 1));
    }

    #[test]
    fn test_wide_viewport_without_selection_caps_and_centers() {
        let layout = results_layout(1400, false);
        assert_eq!(layout.columns, Columns::One);
        assert_eq!(layout.list_max_width, Some(LIST_MAX_WIDTH));
        assert!(layout.list_centered);
    }

    #[test]
    fn test_layout_is_pure() {
        for width in [100, 991, 992, 2000] {
            for has_selection in [false, true] {
                assert_eq!(
                    results_layout(width, has_selection),
                    results_layout(width, has_selection)
                );
            }
        }
    }
}
