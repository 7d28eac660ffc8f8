//! Skate terapia article renderer.

use crate::models::ArticleBlock;
use crate::services::interpolate;
use crate::view::{Element, ViewNode};

/// Render one block as a `skate-therapy-section`.
pub fn render_article_block(block: &ArticleBlock) -> Element {
    let title = block
        .title
        .as_deref()
        .filter(|t| !t.is_empty())
        .map(|t| Element::new("h2").text(t));

    let paragraph = block
        .paragraph
        .as_deref()
        .filter(|p| !p.is_empty())
        .map(|p| Element::new("p").markup(interpolate(Some(p), block.links.as_ref())));

    let figure = block.image.as_ref().and_then(|image| {
        let src = block.image_src()?;
        let img = Element::new("img")
            .class("skate-therapy-img")
            .attr("src", src)
            .attr("alt", image.alt.as_deref().unwrap_or(""));
        let caption = image
            .caption
            .as_deref()
            .filter(|c| !c.is_empty())
            .map(|c| Element::new("figcaption").markup(c));
        Some(
            Element::new("figure")
                .class("skate-therapy-figure")
                .child(img)
                .child_opt(caption),
        )
    });

    Element::new("section")
        .class("skate-therapy-section")
        .child_opt(title)
        .child_opt(paragraph)
        .child_opt(figure)
}

/// Render all blocks in document order.
pub fn render_article(blocks: &[ArticleBlock]) -> Vec<ViewNode> {
    blocks
        .iter()
        .map(|block| render_article_block(block).into())
        .collect()
}
