//! Server-side helpers for Ajax autocomplete dropdowns.
//!
//! Generates the markup and script snippets that wire a text input to a
//! server-driven autocomplete dropdown: a binder script instantiating the
//! client-side `Ajax.Autocompleter` widget, a renderer turning query matches
//! into the `<ul>` fragment the widget inserts, and a composite helper
//! emitting input, results container, and binder together.
//!
//! # Example
//!
//! ```
//! use auto_complete_markup::{
//!     auto_complete_result, text_field_with_auto_complete, CompletionOptions, PageContext,
//!     StaticRoutes, TagOptions,
//! };
//!
//! // View side: one wired-up input per call, stylesheet collected once.
//! let mut page = PageContext::new();
//! let routes = StaticRoutes::with_base("/complete");
//! let html = text_field_with_auto_complete(
//!     "item",
//!     "title",
//!     &TagOptions::default(),
//!     &CompletionOptions::default(),
//!     &mut page,
//!     &routes,
//! )?;
//! assert!(html.contains("item_title_auto_complete"));
//!
//! // Endpoint side: answer queries with the rendered fragment, or nothing.
//! struct Item { title: String }
//! let matches = vec![Item { title: "Apple".into() }];
//! let body = auto_complete_result(&matches, |i| &i.title, Some("pp"), "");
//! assert!(body.is_some());
//! # anyhow::Ok(())
//! ```
//!
//! The crate only shapes HTML/JS text; querying, matching, and transport
//! belong to the host application and the client-side widget.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod field;
pub mod html;
pub mod options;
pub mod page;
pub mod result;
pub mod script;
pub mod url;

pub use field::text_field_with_auto_complete;
pub use options::{CompletionOptions, TagOptions, Tokens};
pub use page::PageContext;
pub use result::{auto_complete_result, VALUES_CLASS};
pub use script::auto_complete_field;
pub use url::{Route, RouteError, StaticRoutes, UrlResolver};

use html::content_tag;

/// Key under which the shared widget stylesheet is contributed to a
/// [`PageContext`].
pub const STYLE_KEY: &str = "auto_complete";

/// The fixed widget stylesheet. The selector set is what the client widget
/// styles against, so it must stay stable.
pub fn stylesheet_css() -> &'static str {
    include_str!("../static/auto_complete.css")
}

/// The stylesheet wrapped in a `<style>` tag, ready for the page head.
pub fn stylesheet_tag() -> String {
    content_tag("style", stylesheet_css(), &[("type", "text/css")])
}
