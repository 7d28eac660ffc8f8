//! Maneuver (trick) model.

use serde::{Deserialize, Serialize};

/// A skateboarding trick with its own detail page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Maneuver {
    /// Unique key, also used in `manobra.html?id=...`.
    pub id: String,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "criador", default, skip_serializing_if = "Option::is_none")]
    pub creator: Option<String>,
    #[serde(rename = "descricao")]
    pub description: String,
    #[serde(rename = "videoUrl", default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full() {
        let json = r#"{
            "id": "kickflip",
            "nome": "Kickflip",
            "criador": "Rodney Mullen",
            "descricao": "Giro lateral do shape.",
            "videoUrl": "https://www.youtube.com/watch?v=abc123"
        }"#;
        let m: Maneuver = serde_json::from_str(json).unwrap();
        assert_eq!(m.id, "kickflip");
        assert_eq!(m.creator.as_deref(), Some("Rodney Mullen"));
        assert!(m.video_url.is_some());
    }

    #[test]
    fn test_deserialize_minimal() {
        let json = r#"{"id": "ollie", "nome": "Ollie", "descricao": "Salto."}"#;
        let m: Maneuver = serde_json::from_str(json).unwrap();
        assert!(m.creator.is_none());
        assert!(m.video_url.is_none());
    }
}
