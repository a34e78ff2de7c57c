use anyhow::Result;
use serde_json::json;

use vidseek::interactive::InteractiveSession;
use vidseek::render::NO_RESULTS_NOTICE;

mod common;
use common::*;

async fn run_session(
    extractor: FakeExtractor,
    search: std::sync::Arc<FakeSearch>,
    input: &str,
) -> Result<String> {
    colored::control::set_override(false);
    let mut session =
        InteractiveSession::new(pipeline_with(extractor, search), Vec::new()).without_progress();
    session.run(input.as_bytes()).await?;
    Ok(String::from_utf8(session.into_inner())?)
}

#[tokio::test]
async fn test_shows_topic_and_at_most_five_cards() -> Result<()> {
    let search = FakeSearch::returning(video_records(8));
    let out = run_session(
        FakeExtractor::Topic("sourdough baking".to_string()),
        search.clone(),
        "teach me to bake bread\n",
    )
    .await?;

    assert!(out.contains("Extracted Search Topic: sourdough baking"));
    assert!(out.contains("Search Results"));
    assert!(out.contains("1. video 0\n"));
    assert!(out.contains("5. video 4\n"));
    assert!(!out.contains("video 5"));
    assert!(out.contains("Channel: Channel (https://www.youtube.com/@channel)"));
    assert!(out.contains("Views: 1000 | Published: 1 month ago | Length: 10:00"));
    assert_eq!(search.seen_queries(), vec!["sourdough baking"]);
    Ok(())
}

#[tokio::test]
async fn test_topic_failure_falls_back_to_prompt() -> Result<()> {
    let search = FakeSearch::returning(vec![json!({"title": "Cats 101"})]);
    let out = run_session(
        FakeExtractor::QuotaExceeded,
        search.clone(),
        "funny cat compilations\n",
    )
    .await?;

    assert!(out.contains("error: Error extracting topic:"));
    assert!(out.contains("Extracted Search Topic: funny cat compilations"));
    assert!(out.contains("1. Cats 101"));
    assert_eq!(search.seen_queries(), vec!["funny cat compilations"]);
    Ok(())
}

#[tokio::test]
async fn test_search_failure_shows_no_results() -> Result<()> {
    let out = run_session(
        FakeExtractor::Topic("cats".to_string()),
        FakeSearch::failing(),
        "cats\n",
    )
    .await?;

    assert!(out.contains("error: Error searching YouTube:"));
    assert!(out.contains(NO_RESULTS_NOTICE));
    assert!(!out.contains("Search Results"));
    Ok(())
}

#[tokio::test]
async fn test_empty_results_notice() -> Result<()> {
    let out = run_session(
        FakeExtractor::Topic("cats".to_string()),
        FakeSearch::returning(vec![json!("garbage"), json!({"channel": 3})]),
        "cats\n",
    )
    .await?;

    assert!(out.contains(NO_RESULTS_NOTICE));
    assert!(!out.contains("error:"));
    Ok(())
}

#[tokio::test]
async fn test_only_submitted_lines_trigger_searches() -> Result<()> {
    let search = FakeSearch::returning(video_records(1));
    run_session(
        FakeExtractor::Topic("cats".to_string()),
        search.clone(),
        "\n   \nfirst prompt\nsecond prompt\nexit\nnever searched\n",
    )
    .await?;

    // Blank lines are ignored and nothing after `exit` runs.
    assert_eq!(search.seen_queries(), vec!["cats", "cats"]);
    Ok(())
}

#[tokio::test]
async fn test_end_of_input_ends_session() -> Result<()> {
    let search = FakeSearch::returning(video_records(1));
    let out = run_session(FakeExtractor::Topic("cats".to_string()), search.clone(), "").await?;
    assert!(out.starts_with("YouTube Search Assistant\n"));
    assert!(search.seen_queries().is_empty());
    Ok(())
}
