// List cursor
//
// The navigator owns the cursor for one list. Widgets read `index()` when
// drawing and never keep a cursor of their own.

use crate::error::{ExplorerError, ExplorerResult};

pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Library-neutral list movement keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Up,
    Down,
    PageUp,
    PageDown,
    Home,
    End,
}

#[derive(Debug, Clone)]
pub struct ListNavigator {
    count: usize,
    index: usize,
    wrap: bool,
    page_size: usize,
}

impl Default for ListNavigator {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE, false)
    }
}

impl ListNavigator {
    pub fn new(page_size: usize, wrap: bool) -> Self {
        Self {
            count: 0,
            index: 0,
            wrap,
            page_size: page_size.max(1),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn wraps(&self) -> bool {
        self.wrap
    }

    pub fn set_wrap_navigation(&mut self, wrap: bool) {
        self.wrap = wrap;
    }

    /// Replace the item count, clamping the cursor into the new bounds
    pub fn set_count(&mut self, count: usize) {
        self.count = count;
        self.index = match count {
            0 => 0,
            n => self.index.min(n - 1),
        };
    }

    /// Move the cursor back to the first item
    pub fn reset(&mut self) {
        self.index = 0;
    }

    /// Point the cursor at `index`.
    ///
    /// An empty list always resets to 0 and succeeds.
    pub fn set_current_index(&mut self, index: usize) -> ExplorerResult<()> {
        if self.count == 0 {
            self.index = 0;
            return Ok(());
        }
        if index >= self.count {
            return Err(ExplorerError::IndexOutOfRange {
                index,
                count: self.count,
            });
        }
        self.index = index;
        Ok(())
    }

    /// Apply a movement key. Returns false when nothing could handle it.
    pub fn handle_key(&mut self, key: NavKey) -> bool {
        if self.count == 0 {
            return false;
        }
        let last = self.count - 1;

        self.index = match key {
            NavKey::Down if self.index == last => {
                if self.wrap {
                    0
                } else {
                    last
                }
            }
            NavKey::Down => self.index + 1,
            NavKey::Up if self.index == 0 => {
                if self.wrap {
                    last
                } else {
                    0
                }
            }
            NavKey::Up => self.index - 1,
            // Paging always clamps, whatever the wrap setting
            NavKey::PageDown => (self.index + self.page_size).min(last),
            NavKey::PageUp => self.index.saturating_sub(self.page_size),
            NavKey::Home => 0,
            NavKey::End => last,
        };
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nav(count: usize, wrap: bool) -> ListNavigator {
        let mut nav = ListNavigator::new(DEFAULT_PAGE_SIZE, wrap);
        nav.set_count(count);
        nav
    }

    #[test]
    fn wrapping_down_cycles_back_to_start() {
        for n in 1..8 {
            let mut nav = nav(n, true);
            for _ in 0..n {
                assert!(nav.handle_key(NavKey::Down));
            }
            assert_eq!(nav.index(), 0, "list of {n}");
        }
    }

    #[test]
    fn three_items_wrap_from_last_to_first() {
        let mut nav = nav(3, true);
        nav.set_current_index(2).unwrap();
        nav.handle_key(NavKey::Down);
        assert_eq!(nav.index(), 0);
    }

    #[test]
    fn clamps_at_both_ends_without_wrap() {
        let mut nav = nav(4, false);
        nav.handle_key(NavKey::Up);
        assert_eq!(nav.index(), 0);

        nav.set_current_index(3).unwrap();
        nav.handle_key(NavKey::Down);
        assert_eq!(nav.index(), 3);
    }

    #[test]
    fn wrapping_up_lands_on_last() {
        let mut nav = nav(4, true);
        nav.handle_key(NavKey::Up);
        assert_eq!(nav.index(), 3);
    }

    #[test]
    fn paging_clamps_even_with_wrap() {
        let mut nav = nav(7, true);
        nav.handle_key(NavKey::PageDown);
        assert_eq!(nav.index(), 5);
        nav.handle_key(NavKey::PageDown);
        assert_eq!(nav.index(), 6);
        nav.handle_key(NavKey::PageUp);
        assert_eq!(nav.index(), 1);
        nav.handle_key(NavKey::PageUp);
        assert_eq!(nav.index(), 0);
    }

    #[test]
    fn home_and_end_jump() {
        let mut nav = nav(10, false);
        nav.handle_key(NavKey::End);
        assert_eq!(nav.index(), 9);
        nav.handle_key(NavKey::Home);
        assert_eq!(nav.index(), 0);
    }

    #[test]
    fn empty_list_handles_nothing() {
        let mut nav = nav(0, true);
        assert!(!nav.handle_key(NavKey::Down));
        assert_eq!(nav.index(), 0);
    }

    #[test]
    fn set_current_index_validates_bounds() {
        let mut nav = nav(3, false);
        assert!(matches!(
            nav.set_current_index(3),
            Err(ExplorerError::IndexOutOfRange { index: 3, count: 3 })
        ));

        let mut empty = ListNavigator::default();
        assert!(empty.set_current_index(42).is_ok());
        assert_eq!(empty.index(), 0);
    }

    #[test]
    fn shrinking_count_clamps_cursor() {
        let mut nav = nav(10, false);
        nav.set_current_index(8).unwrap();
        nav.set_count(4);
        assert_eq!(nav.index(), 3);
        nav.set_count(0);
        assert_eq!(nav.index(), 0);
    }

    #[test]
    fn reset_returns_to_first_item() {
        let mut nav = nav(6, false);
        nav.handle_key(NavKey::End);
        nav.reset();
        assert_eq!(nav.index(), 0);
        assert_eq!(nav.count(), 6);
    }
}
