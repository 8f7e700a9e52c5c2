// SPDX-License-Identifier: MPL-2.0
//! Bounded page index.
//!
//! The index always stays in `[0, total_pages - 1]`. Moving past either end is
//! a defined no-op, not an error, and so is jumping to an index the book does
//! not have. An empty book pins the index at `0` and ignores every request.

use super::NavigationIntent;

/// A page turn that actually happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageChange {
    pub from: usize,
    pub to: usize,
}

/// Current page of a book with a fixed number of pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pager {
    current_page: usize,
    total_pages: usize,
}

impl Pager {
    /// Creates a pager positioned on the first page.
    #[must_use]
    pub fn new(total_pages: usize) -> Self {
        Self {
            current_page: 0,
            total_pages,
        }
    }

    #[must_use]
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    #[must_use]
    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    #[must_use]
    pub fn is_first(&self) -> bool {
        self.current_page == 0
    }

    #[must_use]
    pub fn is_last(&self) -> bool {
        self.current_page + 1 >= self.total_pages
    }

    #[must_use]
    pub fn can_go_next(&self) -> bool {
        !self.is_last()
    }

    #[must_use]
    pub fn can_go_prev(&self) -> bool {
        !self.is_first()
    }

    /// Moves one page forward unless already on the last page.
    pub fn go_next(&mut self) -> Option<PageChange> {
        if !self.can_go_next() {
            return None;
        }
        self.move_to(self.current_page + 1)
    }

    /// Moves one page back unless already on the first page.
    pub fn go_prev(&mut self) -> Option<PageChange> {
        if !self.can_go_prev() {
            return None;
        }
        self.move_to(self.current_page - 1)
    }

    /// Jumps to `index`. Out-of-range indices are rejected and leave the
    /// current page untouched.
    pub fn go_to(&mut self, index: usize) -> Option<PageChange> {
        if index >= self.total_pages {
            tracing::warn!(
                index,
                total_pages = self.total_pages,
                "rejected jump to page outside the book"
            );
            return None;
        }
        self.move_to(index)
    }

    pub fn apply(&mut self, intent: NavigationIntent) -> Option<PageChange> {
        match intent {
            NavigationIntent::Next => self.go_next(),
            NavigationIntent::Previous => self.go_prev(),
            NavigationIntent::Jump(index) => self.go_to(index),
        }
    }

    fn move_to(&mut self, index: usize) -> Option<PageChange> {
        let from = self.current_page;
        self.current_page = index;
        (from != index).then_some(PageChange { from, to: index })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_pager_starts_on_first_page() {
        let pager = Pager::new(5);
        assert_eq!(pager.current_page(), 0);
        assert_eq!(pager.total_pages(), 5);
        assert!(pager.is_first());
        assert!(!pager.is_last());
    }

    #[test]
    fn go_next_increments_until_last_page() {
        let mut pager = Pager::new(3);
        assert_eq!(pager.go_next(), Some(PageChange { from: 0, to: 1 }));
        assert_eq!(pager.go_next(), Some(PageChange { from: 1, to: 2 }));
        assert!(pager.is_last());

        assert_eq!(pager.go_next(), None);
        assert_eq!(pager.current_page(), 2);
    }

    #[test]
    fn go_prev_on_first_page_is_noop() {
        let mut pager = Pager::new(3);
        assert_eq!(pager.go_prev(), None);
        assert_eq!(pager.current_page(), 0);
    }

    #[test]
    fn go_prev_decrements() {
        let mut pager = Pager::new(3);
        pager.go_to(2);
        assert_eq!(pager.go_prev(), Some(PageChange { from: 2, to: 1 }));
        assert_eq!(pager.current_page(), 1);
    }

    #[test]
    fn go_to_sets_exact_index_regardless_of_prior_value() {
        let mut pager = Pager::new(6);
        for target in [4, 0, 5, 2, 2] {
            pager.go_to(target);
            assert_eq!(pager.current_page(), target);
        }
    }

    #[test]
    fn go_to_same_page_reports_no_change() {
        let mut pager = Pager::new(3);
        assert_eq!(pager.go_to(0), None);
        assert_eq!(pager.current_page(), 0);
    }

    #[test]
    fn go_to_out_of_range_is_rejected() {
        let mut pager = Pager::new(3);
        pager.go_to(1);
        assert_eq!(pager.go_to(3), None);
        assert_eq!(pager.go_to(usize::MAX), None);
        assert_eq!(pager.current_page(), 1);
    }

    #[test]
    fn empty_book_ignores_every_request() {
        let mut pager = Pager::new(0);
        assert_eq!(pager.go_next(), None);
        assert_eq!(pager.go_prev(), None);
        assert_eq!(pager.go_to(0), None);
        assert_eq!(pager.current_page(), 0);
        assert!(pager.is_first());
        assert!(pager.is_last());
    }

    #[test]
    fn single_page_book_has_both_controls_disabled() {
        let pager = Pager::new(1);
        assert!(!pager.can_go_next());
        assert!(!pager.can_go_prev());
    }

    #[test]
    fn apply_dispatches_intents() {
        let mut pager = Pager::new(4);
        pager.apply(NavigationIntent::Jump(3));
        assert_eq!(pager.current_page(), 3);
        pager.apply(NavigationIntent::Previous);
        assert_eq!(pager.current_page(), 2);
        pager.apply(NavigationIntent::Next);
        assert_eq!(pager.current_page(), 3);
    }

    #[test]
    fn arbitrary_sequences_stay_in_bounds() {
        // Deterministic pseudo-random walk over both directions.
        let total = 5;
        let mut pager = Pager::new(total);
        let mut seed: u32 = 0x2545_f491;
        for _ in 0..1_000 {
            seed ^= seed << 13;
            seed ^= seed >> 17;
            seed ^= seed << 5;
            if seed % 2 == 0 {
                pager.go_next();
            } else {
                pager.go_prev();
            }
            assert!(pager.current_page() < total);
        }
    }
}
