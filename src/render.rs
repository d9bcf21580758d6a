//! Turns a selected page window into an ordered sequence of link fragments.

use serde::Serialize;

use crate::window::{LinkDecorations, PageWindow};

pub const PREV_ARROW_LABEL: &str = "&laquo";
pub const NEXT_ARROW_LABEL: &str = "&raquo";
pub const ELLIPSIS_LABEL: &str = "...";

/// Style role carried by every rendered link.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum LinkRole {
    Active,
    PrevAdjacent,
    NextAdjacent,
    Default,
    Arrow,
    Dummy,
}

/// Role for a numeric page link, first match wins.
pub fn role_for_page(page: usize, current_page: usize) -> LinkRole {
    if page == current_page {
        LinkRole::Active
    } else if page + 1 == current_page {
        LinkRole::PrevAdjacent
    } else if page == current_page + 1 {
        LinkRole::NextAdjacent
    } else {
        LinkRole::Default
    }
}

/// Caller-supplied markup assembly seam.
///
/// `link` receives the display label, the style role, and the target page
/// number; dummy links carry no target. `container` wraps the joined link
/// sequence into the outer structure.
pub trait LinkBuilder {
    fn link(&self, label: &str, role: LinkRole, target: Option<usize>) -> String;
    fn container(&self, items: &str) -> String;
}

/// Renders the window and its decorations in display order: previous arrow,
/// previous ellipsis, numeric pages ascending, next ellipsis, next arrow.
///
/// Arrow links target the pages adjacent to the window boundaries.
pub fn render<B>(
    window: &PageWindow,
    decorations: &LinkDecorations,
    current_page: usize,
    builder: &B,
) -> String
where
    B: LinkBuilder + ?Sized,
{
    let mut items = String::new();

    if decorations.prev_arrow {
        items.push_str(&builder.link(PREV_ARROW_LABEL, LinkRole::Arrow, Some(window.start - 1)));
    }
    if decorations.prev_ellipsis {
        items.push_str(&builder.link(ELLIPSIS_LABEL, LinkRole::Dummy, None));
    }

    for page in window.pages() {
        let role = role_for_page(page, current_page);
        items.push_str(&builder.link(&page.to_string(), role, Some(page)));
    }

    if decorations.next_ellipsis {
        items.push_str(&builder.link(ELLIPSIS_LABEL, LinkRole::Dummy, None));
    }
    if decorations.next_arrow {
        items.push_str(&builder.link(NEXT_ARROW_LABEL, LinkRole::Arrow, Some(window.end + 1)));
    }

    builder.container(&items)
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    /// Records every link call instead of producing markup.
    struct RecordingBuilder {
        calls: RefCell<Vec<(String, LinkRole, Option<usize>)>>,
    }

    impl RecordingBuilder {
        fn new() -> Self {
            Self {
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl LinkBuilder for RecordingBuilder {
        fn link(&self, label: &str, role: LinkRole, target: Option<usize>) -> String {
            self.calls
                .borrow_mut()
                .push((label.to_string(), role, target));
            format!("[{label}]")
        }

        fn container(&self, items: &str) -> String {
            format!("({items})")
        }
    }

    #[test]
    fn role_assignment_first_match_wins() {
        assert_eq!(role_for_page(5, 5), LinkRole::Active);
        assert_eq!(role_for_page(4, 5), LinkRole::PrevAdjacent);
        assert_eq!(role_for_page(6, 5), LinkRole::NextAdjacent);
        assert_eq!(role_for_page(2, 5), LinkRole::Default);
        assert_eq!(role_for_page(9, 5), LinkRole::Default);
    }

    #[test]
    fn emits_decorations_and_pages_in_display_order() {
        let builder = RecordingBuilder::new();
        let window = PageWindow::new(9, 11);
        let decorations = LinkDecorations {
            prev_arrow: true,
            next_arrow: true,
            prev_ellipsis: true,
            next_ellipsis: true,
        };

        let output = render(&window, &decorations, 10, &builder);
        assert_eq!(output, "([&laquo][...][9][10][11][...][&raquo])");

        let calls = builder.calls.borrow();
        assert_eq!(calls.len(), 7);
        assert_eq!(calls[0], ("&laquo".to_string(), LinkRole::Arrow, Some(8)));
        assert_eq!(calls[1], ("...".to_string(), LinkRole::Dummy, None));
        assert_eq!(calls[2], ("9".to_string(), LinkRole::PrevAdjacent, Some(9)));
        assert_eq!(calls[3], ("10".to_string(), LinkRole::Active, Some(10)));
        assert_eq!(calls[4], ("11".to_string(), LinkRole::NextAdjacent, Some(11)));
        assert_eq!(calls[5], ("...".to_string(), LinkRole::Dummy, None));
        assert_eq!(calls[6], ("&raquo".to_string(), LinkRole::Arrow, Some(12)));
    }

    #[test]
    fn bare_window_renders_only_numeric_links() {
        let builder = RecordingBuilder::new();
        let window = PageWindow::new(1, 4);

        let output = render(&window, &LinkDecorations::default(), 1, &builder);
        assert_eq!(output, "([1][2][3][4])");

        let calls = builder.calls.borrow();
        assert_eq!(calls[0].1, LinkRole::Active);
        assert_eq!(calls[1].1, LinkRole::NextAdjacent);
        assert_eq!(calls[2].1, LinkRole::Default);
        assert_eq!(calls[3].1, LinkRole::Default);
    }
}
