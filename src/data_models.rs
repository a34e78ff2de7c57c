use serde::{Deserialize, Serialize};

/// A video record exactly as the search api returned it. Nothing about its
/// shape is guaranteed.
pub type RawVideoRecord = serde_json::Value;

pub const DEFAULT_TITLE: &str = "Untitled Video";
pub const DEFAULT_CHANNEL: &str = "Unknown Channel";
pub const NOT_AVAILABLE: &str = "N/A";

/// Fixed-shape video result. Every field is always present.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct VideoResult {
    pub title: String,
    pub link: String,
    pub channel: String,
    pub channel_link: String,
    pub thumbnail: String,
    pub views: String,
    pub published_date: String,
    pub length: String,
}

impl Default for VideoResult {
    fn default() -> Self {
        VideoResult {
            title: DEFAULT_TITLE.to_string(),
            link: String::new(),
            channel: DEFAULT_CHANNEL.to_string(),
            channel_link: String::new(),
            thumbnail: String::new(),
            views: NOT_AVAILABLE.to_string(),
            published_date: NOT_AVAILABLE.to_string(),
            length: NOT_AVAILABLE.to_string(),
        }
    }
}
