//! Maneuver detail renderer.

use crate::models::Maneuver;
use crate::routes::INDEX_PAGE;
use crate::services::embed_url;
use crate::view::{Element, ViewNode};

use super::messages;

const PLAYER_ALLOW: &str =
    "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture; web-share";

fn back_link(label: &str) -> Element {
    Element::new("a")
        .class("back-link")
        .attr("href", INDEX_PAGE)
        .text(label)
}

fn fallback(heading: &str) -> Vec<ViewNode> {
    vec![
        Element::new("h1").text(heading).into(),
        back_link(messages::BACK_TO_TIMELINE).into(),
    ]
}

/// Content for a missing or unknown maneuver.
pub fn render_maneuver_not_found() -> Vec<ViewNode> {
    fallback(messages::MANEUVER_NOT_FOUND)
}

/// Content when the maneuver dataset failed to load.
pub fn render_maneuver_load_error() -> Vec<ViewNode> {
    fallback(messages::MANEUVER_LOAD_ERROR)
}

/// Detail content for a maneuver. The player is omitted when the video URL
/// has no embeddable form.
pub fn render_maneuver(maneuver: &Maneuver) -> Vec<ViewNode> {
    let mut nodes: Vec<ViewNode> = vec![Element::new("h1").text(&maneuver.name).into()];

    if let Some(creator) = maneuver.creator.as_deref().filter(|c| !c.is_empty()) {
        nodes.push(
            Element::new("p")
                .child(Element::new("strong").text(messages::CREATOR_LABEL))
                .text(format!(" {}", creator))
                .into(),
        );
    }

    nodes.push(Element::new("p").markup(&maneuver.description).into());

    if let Some(src) = maneuver.video_url.as_deref().and_then(embed_url) {
        nodes.push(
            Element::new("div")
                .class("video-container")
                .child(
                    Element::new("iframe")
                        .attr("src", src)
                        .attr("title", format!("Demonstração da manobra {}", maneuver.name))
                        .attr("frameborder", "0")
                        .attr("allow", PLAYER_ALLOW)
                        .attr("allowfullscreen", ""),
                )
                .into(),
        );
    }

    nodes.push(back_link(messages::BACK_TO_TIMELINE_ARROW).into());
    nodes
}
