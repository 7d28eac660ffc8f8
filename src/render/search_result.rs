//! Inline search result view.

use crate::models::TimelineEntry;
use crate::services::interpolate;
use crate::view::Element;

/// Render a matched timeline entry for the search overlay.
pub fn render_search_result(entry: &TimelineEntry) -> Element {
    let description = interpolate(Some(&entry.description), entry.links.as_ref());
    Element::new("div")
        .class("search-result-view")
        .child(Element::new("h1").text(entry.heading()))
        .child(Element::new("p").markup(description))
}
