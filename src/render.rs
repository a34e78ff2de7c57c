use colored::Colorize;

use crate::data_models::VideoResult;

pub const NO_RESULTS_NOTICE: &str = "No YouTube videos found for this topic.";

pub fn render_topic(topic: &str) -> String {
    format!("{} {}", "Extracted Search Topic:".bold(), topic.cyan())
}

pub fn render_error(message: &str) -> String {
    format!("{} {}", "error:".red().bold(), message)
}

/// One result card: thumbnail, linked title, linked channel, then stats.
pub fn render_card(position: usize, video: &VideoResult) -> String {
    let mut card = format!("{}. {}\n", position, video.title.bold());
    if !video.link.is_empty() {
        card.push_str(&format!("   {}\n", video.link.blue().underline()));
    }
    if video.channel_link.is_empty() {
        card.push_str(&format!("   Channel: {}\n", video.channel));
    } else {
        card.push_str(&format!(
            "   Channel: {} ({})\n",
            video.channel,
            video.channel_link.blue()
        ));
    }
    card.push_str(&format!(
        "   Views: {} | Published: {} | Length: {}\n",
        video.views, video.published_date, video.length
    ));
    if !video.thumbnail.is_empty() {
        card.push_str(&format!("   Thumbnail: {}\n", video.thumbnail.dimmed()));
    }
    card
}

pub fn render_results(results: &[VideoResult]) -> String {
    if results.is_empty() {
        return format!("{}\n", NO_RESULTS_NOTICE.yellow());
    }
    let mut out = format!("{}\n\n", "Search Results".green().bold());
    for (idx, video) in results.iter().enumerate() {
        out.push_str(&render_card(idx + 1, video));
        out.push_str("---\n");
    }
    out
}
