//! Timeline page renderer.

use crate::models::TimelineEntry;
use crate::services::interpolate;
use crate::view::{Element, ViewNode};

/// Render one entry as a `timeline-item` placed left or right.
pub fn render_timeline_item(entry: &TimelineEntry) -> Element {
    let description = interpolate(Some(&entry.description), entry.links.as_ref());
    Element::new("div")
        .class("timeline-item")
        .class(entry.position.as_str())
        .attr("data-year", entry.year.to_string())
        .child(Element::new("h2").text(entry.heading()))
        .child(Element::new("p").markup(description))
}

/// Render all entries, in dataset order, as the container's children.
pub fn render_timeline(entries: &[TimelineEntry]) -> Vec<ViewNode> {
    entries
        .iter()
        .map(|entry| render_timeline_item(entry).into())
        .collect()
}
