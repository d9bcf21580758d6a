//! Configuration model for the pagination control.

use serde::Deserialize;

use crate::url::PageAddressing;

/// Full input contract of the control: link targets, style classes, toggles,
/// and the numeric pagination parameters. Every field has a default, so a
/// caller only sets what differs.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct PaginationConfig {
    /// Path part the page number is substituted into.
    pub uri: String,
    /// Prefix prepended to the substituted uri, e.g. a scheme and host.
    pub url: String,

    pub nav_class: String,
    pub ul_class: String,
    pub li_class: String,
    /// Default numeric link class.
    pub link_class: String,
    pub active_class: String,
    /// Class for the link one page before the current one.
    pub prev_class: String,
    /// Class for the link one page after the current one.
    pub next_class: String,
    pub arrow_link_class: String,
    pub dummy_link_class: String,
    /// Container element identifier.
    pub id: String,

    pub show_arrow_links: bool,
    /// Ignored when arrow links are off; ellipsis never renders alone.
    pub show_dummy_links: bool,
    /// Query-style (`?page=N`) instead of path-style (`/page/N`) addressing.
    pub query_pagination: bool,

    /// May be out of range or non-positive; it is clamped, never rejected.
    pub current_page: i64,
    pub items_per_page: usize,
    /// Upper bound on rendered link slots, numeric and decorations combined.
    pub max_visible_links: usize,
    pub total_items: usize,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            uri: "/".to_string(),
            url: String::new(),
            nav_class: "pagination".to_string(),
            ul_class: "pagination__ul".to_string(),
            li_class: "pagination__item".to_string(),
            link_class: "pagination__link".to_string(),
            active_class: "pagination__link active".to_string(),
            prev_class: "pagination__link previous".to_string(),
            next_class: "pagination__link next".to_string(),
            arrow_link_class: "pagination__link arrow".to_string(),
            dummy_link_class: "pagination__link dummy".to_string(),
            id: "pagination".to_string(),
            show_arrow_links: true,
            show_dummy_links: true,
            query_pagination: false,
            current_page: 1,
            items_per_page: 15,
            max_visible_links: 7,
            total_items: 65,
        }
    }
}

impl PaginationConfig {
    pub fn addressing(&self) -> PageAddressing {
        if self.query_pagination {
            PageAddressing::Query
        } else {
            PageAddressing::Path
        }
    }
}
