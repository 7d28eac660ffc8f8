//! Placeholder substitution for inline links.

use crate::models::Links;

/// Replace every `{key}` in `text` with its mapped value.
///
/// Absent text yields an empty string and absent links return the text as-is.
/// Placeholders without a mapping are left untouched.
pub fn interpolate(text: Option<&str>, links: Option<&Links>) -> String {
    let Some(text) = text else {
        return String::new();
    };
    let Some(links) = links else {
        return text.to_string();
    };

    links.iter().fold(text.to_string(), |acc, (key, value)| {
        acc.replace(&format!("{{{}}}", key), value)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn links(pairs: &[(&str, &str)]) -> Links {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_absent_text() {
        assert_eq!(interpolate(None, None), "");
        assert_eq!(interpolate(None, Some(&links(&[("a", "b")]))), "");
    }

    #[test]
    fn test_absent_links() {
        assert_eq!(interpolate(Some("veja {site}"), None), "veja {site}");
    }

    #[test]
    fn test_replaces_every_occurrence() {
        let map = links(&[("site", "<a href=\"/\">site</a>")]);
        assert_eq!(
            interpolate(Some("{site} e {site}"), Some(&map)),
            "<a href=\"/\">site</a> e <a href=\"/\">site</a>"
        );
    }

    #[test]
    fn test_unmapped_placeholder_left_literal() {
        let map = links(&[("a", "A")]);
        assert_eq!(interpolate(Some("{a} {b}"), Some(&map)), "A {b}");
    }

    #[test]
    fn test_all_mapped_keys_consumed() {
        let map = links(&[
            ("zephyr", "<a href=\"z\">Z</a>"),
            ("dogtown", "<a href=\"d\">D</a>"),
            ("vans", "<a href=\"v\">V</a>"),
        ]);
        let text = "Os {dogtown} com {vans} na {zephyr}, sem {ausente}.";
        let out = interpolate(Some(text), Some(&map));
        for key in map.keys() {
            assert!(!out.contains(&format!("{{{}}}", key)));
        }
        assert!(out.contains("{ausente}"));
    }

    #[test]
    fn test_plain_braces_untouched() {
        let map = links(&[("a", "A")]);
        assert_eq!(interpolate(Some("{ a } {}"), Some(&map)), "{ a } {}");
    }
}
