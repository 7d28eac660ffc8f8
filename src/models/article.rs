//! Skate terapia article blocks.

use serde::{Deserialize, Serialize};

use super::Links;

/// An image inside an article block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleImage {
    #[serde(default)]
    pub src: Option<String>,
    #[serde(default)]
    pub alt: Option<String>,
    /// Caption markup.
    #[serde(rename = "legenda", default)]
    pub caption: Option<String>,
}

/// One block of the article. Any combination of parts may be present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArticleBlock {
    #[serde(rename = "titulo", default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "paragrafo", default, skip_serializing_if = "Option::is_none")]
    pub paragraph: Option<String>,
    #[serde(rename = "imagem", default, skip_serializing_if = "Option::is_none")]
    pub image: Option<ArticleImage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Links>,
}

impl ArticleBlock {
    /// Image source, if the block carries a usable image.
    pub fn image_src(&self) -> Option<&str> {
        self.image
            .as_ref()
            .and_then(|img| img.src.as_deref())
            .filter(|src| !src.is_empty())
    }

    /// True when the block would render nothing.
    pub fn is_empty(&self) -> bool {
        self.title.as_deref().map_or(true, str::is_empty)
            && self.paragraph.as_deref().map_or(true, str::is_empty)
            && self.image_src().is_none()
    }
}
