//! List scrolling state
//!
//! Tracks the selected row and the visible window for every scrolling list
//! in the application (catalog, orders, cart). The window follows the
//! selection so the highlighted row is always on screen.

use serde::{Deserialize, Serialize};

/// Selection and visible-window state for a vertical list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrollState {
    /// Index of the highlighted row
    pub selected_index: usize,
    /// First visible row
    pub window_start: usize,
    /// Total number of rows in the list
    pub total_items: usize,
    /// Rows that fit in the viewport
    pub visible_items: usize,
}

impl ScrollState {
    /// Create scroll state for a list of `total_items` rows with
    /// `visible_items` rows visible at once
    pub fn new(total_items: usize, visible_items: usize) -> Self {
        Self {
            selected_index: 0,
            window_start: 0,
            total_items,
            visible_items: visible_items.max(1),
        }
    }

    /// Move selection up one row
    pub fn move_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
        self.follow_selection();
    }

    /// Move selection down one row
    pub fn move_down(&mut self) {
        if self.total_items > 0 && self.selected_index < self.total_items - 1 {
            self.selected_index += 1;
        }
        self.follow_selection();
    }

    /// Move selection up a full page
    pub fn page_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(self.visible_items);
        self.follow_selection();
    }

    /// Move selection down a full page
    pub fn page_down(&mut self) {
        if self.total_items > 0 {
            self.selected_index =
                (self.selected_index + self.visible_items).min(self.total_items - 1);
        }
        self.follow_selection();
    }

    /// Jump to the first row
    pub fn move_to_first(&mut self) {
        self.selected_index = 0;
        self.follow_selection();
    }

    /// Jump to the last row
    pub fn move_to_last(&mut self) {
        self.selected_index = self.total_items.saturating_sub(1);
        self.follow_selection();
    }

    /// Update the number of rows that fit in the viewport (on resize)
    pub fn update_visible_items(&mut self, visible_items: usize) {
        self.visible_items = visible_items.max(1);
        self.follow_selection();
    }

    /// Update the total row count, clamping the selection if the list shrank
    pub fn set_total_items(&mut self, total_items: usize) {
        self.total_items = total_items;
        if self.selected_index >= total_items {
            self.selected_index = total_items.saturating_sub(1);
        }
        self.follow_selection();
    }

    /// Range of rows currently visible
    pub fn visible_range(&self) -> std::ops::Range<usize> {
        let end = (self.window_start + self.visible_items).min(self.total_items);
        self.window_start..end
    }

    /// Keep the selected row inside the visible window
    fn follow_selection(&mut self) {
        if self.selected_index < self.window_start {
            self.window_start = self.selected_index;
        } else if self.selected_index >= self.window_start + self.visible_items {
            self.window_start = self.selected_index + 1 - self.visible_items;
        }
        // Window must not hang past the end of a shrunken list
        let max_start = self.total_items.saturating_sub(self.visible_items);
        if self.window_start > max_start {
            self.window_start = max_start;
        }
    }
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::new(0, 10)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_stays_in_bounds() {
        let mut s = ScrollState::new(3, 10);
        s.move_up();
        assert_eq!(s.selected_index, 0);
        s.move_down();
        s.move_down();
        s.move_down();
        s.move_down();
        assert_eq!(s.selected_index, 2);
    }

    #[test]
    fn test_window_follows_selection() {
        let mut s = ScrollState::new(20, 5);
        for _ in 0..7 {
            s.move_down();
        }
        assert_eq!(s.selected_index, 7);
        assert!(s.visible_range().contains(&7));

        s.move_to_first();
        assert_eq!(s.window_start, 0);
    }

    #[test]
    fn test_page_navigation() {
        let mut s = ScrollState::new(30, 10);
        s.page_down();
        assert_eq!(s.selected_index, 10);
        s.page_down();
        s.page_down();
        assert_eq!(s.selected_index, 29);
        s.page_up();
        assert_eq!(s.selected_index, 19);
    }

    #[test]
    fn test_shrinking_list_clamps_selection() {
        let mut s = ScrollState::new(10, 5);
        s.move_to_last();
        assert_eq!(s.selected_index, 9);
        s.set_total_items(4);
        assert_eq!(s.selected_index, 3);
        assert!(s.visible_range().contains(&3));
    }

    #[test]
    fn test_empty_list() {
        let mut s = ScrollState::new(0, 5);
        s.move_down();
        s.move_to_last();
        assert_eq!(s.selected_index, 0);
        assert!(s.visible_range().is_empty());
    }
}
