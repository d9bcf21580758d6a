//! Top-level assembly: request normalization, window selection, and the
//! default HTML link builder.

use serde::Serialize;

use crate::errors::{PaginationError, PaginationResult};
use crate::models::config::PaginationConfig;
use crate::render::{LinkBuilder, LinkRole, render};
use crate::url::page_url;
use crate::window::select_window;

/// Immutable numeric parameters of one render call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PaginationRequest {
    pub total_items: usize,
    pub items_per_page: usize,
    pub current_page: i64,
    pub max_visible_links: usize,
    pub show_arrows: bool,
    pub show_ellipsis: bool,
}

impl PaginationRequest {
    /// Ellipsis placeholders only make sense next to arrow links, so the
    /// ellipsis toggle is forced off when arrows are off.
    pub fn new(
        total_items: usize,
        items_per_page: usize,
        current_page: i64,
        max_visible_links: usize,
        show_arrows: bool,
        show_ellipsis: bool,
    ) -> Self {
        Self {
            total_items,
            items_per_page,
            current_page,
            max_visible_links,
            show_arrows,
            show_ellipsis: show_arrows && show_ellipsis,
        }
    }

    /// Total page count. Callers must have validated `items_per_page > 0`.
    pub fn page_count(&self) -> usize {
        self.total_items.div_ceil(self.items_per_page)
    }

    /// Current page clamped into `[1, page_count]`.
    pub fn clamped_current_page(&self) -> usize {
        let page_count = self.page_count();
        if self.current_page <= 0 {
            1
        } else if self.current_page as usize > page_count {
            page_count
        } else {
            self.current_page as usize
        }
    }
}

impl From<&PaginationConfig> for PaginationRequest {
    fn from(config: &PaginationConfig) -> Self {
        Self::new(
            config.total_items,
            config.items_per_page,
            config.current_page,
            config.max_visible_links,
            config.show_arrow_links,
            config.show_dummy_links,
        )
    }
}

/// Default builder emitting `<li><a>` items inside a `<nav><ul>` container,
/// styled and addressed per the configuration.
pub struct HtmlLinkBuilder<'a> {
    config: &'a PaginationConfig,
}

impl<'a> HtmlLinkBuilder<'a> {
    pub fn new(config: &'a PaginationConfig) -> Self {
        Self { config }
    }

    fn class_for(&self, role: LinkRole) -> &str {
        match role {
            LinkRole::Active => &self.config.active_class,
            LinkRole::PrevAdjacent => &self.config.prev_class,
            LinkRole::NextAdjacent => &self.config.next_class,
            LinkRole::Default => &self.config.link_class,
            LinkRole::Arrow => &self.config.arrow_link_class,
            LinkRole::Dummy => &self.config.dummy_link_class,
        }
    }
}

impl LinkBuilder for HtmlLinkBuilder<'_> {
    fn link(&self, label: &str, role: LinkRole, target: Option<usize>) -> String {
        let href = target
            .map(|page| {
                page_url(
                    &self.config.url,
                    &self.config.uri,
                    self.config.addressing(),
                    page,
                )
            })
            .unwrap_or_default();
        let li_class = &self.config.li_class;
        let link_class = self.class_for(role);

        format!("<li class='{li_class}'><a href='{href}' class='{link_class}'>{label}</a></li>")
    }

    fn container(&self, items: &str) -> String {
        let nav_class = &self.config.nav_class;
        let ul_class = &self.config.ul_class;
        let id = &self.config.id;

        format!("<nav class='{nav_class}' id='{id}'><ul class='{ul_class}'>{items}</ul></nav>")
    }
}

/// Renders the full pagination control for the given configuration.
///
/// Returns the empty string when no control is warranted: a single page (or
/// none) to show, or a link budget below three. A zero `items_per_page` is a
/// configuration error since no page count can be derived from it.
pub fn render_pagination(config: &PaginationConfig) -> PaginationResult<String> {
    if config.items_per_page == 0 {
        return Err(PaginationError::InvalidItemsPerPage(config.items_per_page));
    }

    let request = PaginationRequest::from(config);
    let page_count = request.page_count();

    if page_count <= 1 || request.max_visible_links < 3 {
        return Ok(String::new());
    }

    let current_page = request.clamped_current_page();
    let (window, decorations) = select_window(
        page_count,
        current_page,
        request.max_visible_links,
        request.show_arrows,
        request.show_ellipsis,
    );
    log::debug!(
        "selected window {}..={} of {page_count} pages for page {current_page}",
        window.start,
        window.end
    );

    let builder = HtmlLinkBuilder::new(config);

    Ok(render(&window, &decorations, current_page, &builder))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_items_per_page_is_a_configuration_error() {
        let config = PaginationConfig {
            items_per_page: 0,
            ..PaginationConfig::default()
        };
        assert_eq!(
            render_pagination(&config),
            Err(PaginationError::InvalidItemsPerPage(0))
        );
    }

    #[test]
    fn single_page_renders_nothing() {
        let config = PaginationConfig {
            total_items: 10,
            items_per_page: 15,
            ..PaginationConfig::default()
        };
        assert_eq!(render_pagination(&config).unwrap(), "");
    }

    #[test]
    fn no_items_render_nothing() {
        let config = PaginationConfig {
            total_items: 0,
            ..PaginationConfig::default()
        };
        assert_eq!(render_pagination(&config).unwrap(), "");
    }

    #[test]
    fn narrow_link_budget_renders_nothing() {
        let config = PaginationConfig {
            max_visible_links: 2,
            ..PaginationConfig::default()
        };
        assert_eq!(render_pagination(&config).unwrap(), "");
    }

    #[test]
    fn ellipsis_toggle_requires_arrows() {
        let request = PaginationRequest::new(300, 15, 1, 7, false, true);
        assert!(!request.show_ellipsis);
    }

    #[test]
    fn current_page_is_clamped_into_range() {
        let request = PaginationRequest::new(65, 15, 0, 7, true, true);
        assert_eq!(request.page_count(), 5);
        assert_eq!(request.clamped_current_page(), 1);

        let request = PaginationRequest::new(65, 15, -3, 7, true, true);
        assert_eq!(request.clamped_current_page(), 1);

        let request = PaginationRequest::new(65, 15, 99, 7, true, true);
        assert_eq!(request.clamped_current_page(), 5);
    }

    #[test]
    fn page_count_rounds_up() {
        assert_eq!(PaginationRequest::new(300, 15, 1, 7, true, true).page_count(), 20);
        assert_eq!(PaginationRequest::new(301, 15, 1, 7, true, true).page_count(), 21);
        assert_eq!(PaginationRequest::new(1, 15, 1, 7, true, true).page_count(), 1);
    }
}
