//! Page-window selection: which numeric page links to show and which
//! arrow/ellipsis slots to reserve around them.

use serde::Serialize;

/// Contiguous inclusive range of page numbers rendered as clickable links.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PageWindow {
    pub start: usize,
    pub end: usize,
}

impl PageWindow {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Page numbers in the window, ascending.
    pub fn pages(&self) -> std::ops::RangeInclusive<usize> {
        self.start..=self.end
    }

    pub fn len(&self) -> usize {
        (self.end + 1).saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.end < self.start
    }
}

/// Which decoration slots were reserved; each set flag means the matching
/// window boundary was shortened by one page to make room.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct LinkDecorations {
    pub prev_arrow: bool,
    pub next_arrow: bool,
    pub prev_ellipsis: bool,
    pub next_ellipsis: bool,
}

impl LinkDecorations {
    pub fn count(&self) -> usize {
        [
            self.prev_arrow,
            self.next_arrow,
            self.prev_ellipsis,
            self.next_ellipsis,
        ]
        .iter()
        .filter(|flag| **flag)
        .count()
    }
}

/// Selects the window of numeric page links and the arrow/ellipsis slots.
///
/// `current_page` must already be clamped into `[1, total_pages]`. The window
/// is centered on the current page and holds `max_visible_links` slots before
/// any are consumed by decorations; when the budget is odd the extra slot goes
/// to the next side.
pub fn select_window(
    total_pages: usize,
    current_page: usize,
    max_visible_links: usize,
    show_arrows: bool,
    show_ellipsis: bool,
) -> (PageWindow, LinkDecorations) {
    let decorations = LinkDecorations::default();

    if total_pages == 0 || max_visible_links < 3 {
        return (PageWindow::new(1, 0), decorations);
    }

    if total_pages <= max_visible_links {
        return (PageWindow::new(1, total_pages), decorations);
    }

    if max_visible_links == 3 {
        let window = if current_page == 1 {
            PageWindow::new(1, 3)
        } else if current_page == total_pages {
            PageWindow::new(total_pages - 2, total_pages)
        } else {
            PageWindow::new(current_page - 1, current_page + 1)
        };
        return (window, decorations);
    }

    // Signed arithmetic: the centered window may start below 1 or end past
    // the last page before rebalancing.
    let total = total_pages as i64;
    let current = current_page as i64;
    let budget = (max_visible_links - 1) as i64;

    let mut start = current - budget / 2;
    let mut end = current + (budget + 1) / 2;

    // Shift the exact overflow to the other side so the window keeps its
    // full width; only one boundary can overshoot here.
    if start <= 0 {
        end += 1 - start;
        start = 1;
    } else if end > total {
        start -= end - total;
        end = total;
    }

    let mut arrows = show_arrows;
    let mut ellipsis = show_ellipsis;
    if max_visible_links <= 4 {
        arrows = false;
        ellipsis = false;
    } else if max_visible_links <= 6 {
        ellipsis = false;
    }

    let mut decorations = LinkDecorations::default();

    if arrows {
        if end != total {
            end -= 1;
            decorations.next_arrow = true;
        }
        if start > 1 {
            start += 1;
            decorations.prev_arrow = true;
        }
    }

    if ellipsis {
        if end != total - 1 && decorations.next_arrow {
            end -= 1;
            decorations.next_ellipsis = true;
        }
        if start > 2 && decorations.prev_arrow {
            start += 1;
            decorations.prev_ellipsis = true;
        }
    }

    (PageWindow::new(start as usize, end as usize), decorations)
}
