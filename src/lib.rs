//! Bounded, ellipsis-aware pagination control rendering.
//!
//! Given a total item count, an items-per-page size, the current page, and a
//! budget of visible link slots, the crate selects which page numbers to show
//! (keeping the current page centered as boundaries allow), decides where
//! previous/next arrow links and ellipsis placeholders go, and renders the
//! result as markup.
//!
//! The computation is a pure function of its inputs: nothing is cached or
//! shared between calls, and [`render_pagination`] may be invoked
//! concurrently without coordination.
//!
//! ```
//! use pagination_nav::{PaginationConfig, render_pagination};
//!
//! let config = PaginationConfig {
//!     uri: "/items/page/1".to_string(),
//!     total_items: 300,
//!     current_page: 10,
//!     ..PaginationConfig::default()
//! };
//! let html = render_pagination(&config).unwrap();
//! assert!(html.contains("pagination__link active'>10<"));
//! ```

pub mod errors;
pub mod models;
pub mod pagination;
pub mod render;
pub mod url;
pub mod window;

pub use crate::errors::{PaginationError, PaginationResult};
pub use crate::models::config::PaginationConfig;
pub use crate::pagination::{HtmlLinkBuilder, PaginationRequest, render_pagination};
pub use crate::render::{LinkBuilder, LinkRole};
pub use crate::url::PageAddressing;
pub use crate::window::{LinkDecorations, PageWindow, select_window};
