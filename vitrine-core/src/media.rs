use serde::{Deserialize, Serialize};

/// One gallery slide as described by the embedded media payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Media {
    pub id: u64,
    pub src: String,
    #[serde(default)]
    pub alt: String,
    /// Thumbnail source; falls back to `src` when absent.
    #[serde(default)]
    pub preview: Option<String>,
}

impl Media {
    #[must_use]
    pub fn thumb_src(&self) -> &str {
        self.preview.as_deref().unwrap_or(&self.src)
    }
}

/// Slide position of a media id, for featured-media jumps.
#[must_use]
pub fn media_position(media: &[Media], id: u64) -> Option<usize> {
    media.iter().position(|m| m.id == id)
}

/// Parse the embedded media payload, an array of media records.
///
/// # Errors
///
/// Returns an error if the JSON cannot be parsed into media records.
pub fn media_from_json(json: &str) -> Result<Vec<Media>, serde_json::Error> {
    serde_json::from_str(json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_positions_media() {
        let media = media_from_json(
            r#"[
                { "id": 10, "src": "a.jpg", "alt": "front" },
                { "id": 20, "src": "b.jpg", "preview": "b-small.jpg" }
            ]"#,
        )
        .unwrap();
        assert_eq!(media.len(), 2);
        assert_eq!(media[0].thumb_src(), "a.jpg");
        assert_eq!(media[1].thumb_src(), "b-small.jpg");
        assert_eq!(media_position(&media, 20), Some(1));
        assert_eq!(media_position(&media, 30), None);
    }
}
