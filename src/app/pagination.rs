/// Pages shown around the current one.
pub const PAGE_RANGE: usize = 5;
/// Pages always shown at each end.
pub const MARGIN_PAGES: usize = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    /// Zero-based page index.
    Page(usize),
    Break,
}

/// What the page strip renders: the page count and a zero-based cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page_count: usize,
    pub current_index: usize,
}

impl Pagination {
    pub fn has_previous(&self) -> bool {
        self.current_index > 0
    }

    pub fn has_next(&self) -> bool {
        self.current_index + 1 < self.page_count
    }

    pub fn previous(&self) -> Option<usize> {
        self.has_previous().then(|| self.current_index - 1)
    }

    pub fn next(&self) -> Option<usize> {
        self.has_next().then(|| self.current_index + 1)
    }

    pub fn items(&self) -> Vec<PageItem> {
        page_items(self.page_count, self.current_index)
    }
}

/// Lays out the numbered part of the strip, e.g. `1 … 4 5 6 7 8 … 20`.
pub fn page_items(page_count: usize, current: usize) -> Vec<PageItem> {
    if page_count <= PAGE_RANGE + 2 * MARGIN_PAGES {
        return (0..page_count).map(PageItem::Page).collect();
    }

    let current = current.min(page_count - 1);
    let mut left = current.saturating_sub(PAGE_RANGE / 2);
    let mut right = left + PAGE_RANGE - 1;
    if right >= page_count {
        right = page_count - 1;
        left = right + 1 - PAGE_RANGE;
    }

    let shown = |index: usize| {
        index < MARGIN_PAGES || index >= page_count - MARGIN_PAGES || (left..=right).contains(&index)
    };

    let mut items = Vec::new();
    let mut previous: Option<usize> = None;
    for index in (0..page_count).filter(|i| shown(*i)) {
        if let Some(prev) = previous {
            match index - prev {
                1 => {}
                // A gap of one page is cheaper to show than to elide
                2 => items.push(PageItem::Page(prev + 1)),
                _ => items.push(PageItem::Break),
            }
        }
        items.push(PageItem::Page(index));
        previous = Some(index);
    }
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageItem::{Break, Page};

    #[test]
    fn small_counts_show_every_page() {
        assert_eq!(page_items(5, 0), vec![Page(0), Page(1), Page(2), Page(3), Page(4)]);
        assert_eq!(page_items(0, 0), vec![]);
    }

    #[test]
    fn breaks_on_both_sides_in_the_middle() {
        assert_eq!(
            page_items(20, 9),
            vec![Page(0), Break, Page(7), Page(8), Page(9), Page(10), Page(11), Break, Page(19)]
        );
    }

    #[test]
    fn window_is_clamped_at_the_ends() {
        assert_eq!(
            page_items(20, 0),
            vec![Page(0), Page(1), Page(2), Page(3), Page(4), Break, Page(19)]
        );
        assert_eq!(
            page_items(20, 19),
            vec![Page(0), Break, Page(15), Page(16), Page(17), Page(18), Page(19)]
        );
    }

    #[test]
    fn single_page_gap_is_filled_in() {
        assert_eq!(page_items(9, 4), (0..9).map(Page).collect::<Vec<_>>());
        assert_eq!(
            page_items(9, 3),
            vec![Page(0), Page(1), Page(2), Page(3), Page(4), Page(5), Break, Page(8)]
        );
    }

    #[test]
    fn previous_and_next_respect_bounds() {
        let first = Pagination { page_count: 5, current_index: 0 };
        assert_eq!(first.previous(), None);
        assert_eq!(first.next(), Some(1));

        let last = Pagination { page_count: 5, current_index: 4 };
        assert_eq!(last.previous(), Some(3));
        assert_eq!(last.next(), None);
    }
}
