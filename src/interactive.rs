use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::Write;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::warn;

use crate::data_models::VideoResult;
use crate::pipeline::VideoSearchPipeline;
use crate::render::{render_error, render_results, render_topic};

const EXIT_COMMANDS: [&str; 2] = ["exit", "quit"];

/// Terminal front-end. Each submitted line is one search; nothing runs
/// until Enter is pressed.
pub struct InteractiveSession<W: Write> {
    pipeline: Arc<VideoSearchPipeline>,
    out: W,
    show_progress: bool,
}

impl<W: Write> InteractiveSession<W> {
    pub fn new(pipeline: Arc<VideoSearchPipeline>, out: W) -> Self {
        Self {
            pipeline,
            out,
            show_progress: true,
        }
    }

    /// Disable the spinner, e.g. when output isn't a terminal.
    pub fn without_progress(mut self) -> Self {
        self.show_progress = false;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub async fn run<R>(&mut self, input: R) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
    {
        writeln!(self.out, "YouTube Search Assistant")?;
        writeln!(
            self.out,
            "Describe the videos you want to see and press Enter (`exit` to quit)."
        )?;

        let mut lines = input.lines();
        loop {
            write!(self.out, "> ")?;
            self.out.flush()?;

            let Some(line) = lines.next_line().await? else {
                break;
            };
            let prompt = line.trim();
            if prompt.is_empty() {
                continue;
            }
            if EXIT_COMMANDS.contains(&prompt) {
                break;
            }
            self.submit(prompt).await?;
        }
        Ok(())
    }

    /// Run one search. A failed topic extraction falls back to the prompt
    /// itself; a failed search shows as no results.
    pub async fn submit(&mut self, prompt: &str) -> Result<Vec<VideoResult>> {
        if prompt.trim().is_empty() {
            return Ok(Vec::new());
        }
        let progress = self.progress("Analyzing your request...");
        let topic = self.pipeline.extract_topic(prompt).await;
        progress.finish_and_clear();

        let topic = match topic {
            Ok(topic) => topic,
            Err(e) => {
                warn!("falling back to raw prompt as search query");
                writeln!(self.out, "{}", render_error(&e.to_string()))?;
                prompt.to_string()
            }
        };
        writeln!(self.out, "{}", render_topic(&topic))?;

        let progress = self.progress("Searching YouTube...");
        let results = self.pipeline.search_videos(&topic).await;
        progress.finish_and_clear();

        let results = match results {
            Ok(results) => results,
            Err(e) => {
                writeln!(self.out, "{}", render_error(&e.to_string()))?;
                Vec::new()
            }
        };
        write!(self.out, "{}", render_results(&results))?;
        self.out.flush()?;
        Ok(results)
    }

    fn progress(&self, message: &'static str) -> ProgressBar {
        if !self.show_progress {
            return ProgressBar::hidden();
        }
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        spinner.set_message(message);
        spinner.enable_steady_tick(Duration::from_millis(100));
        spinner
    }
}
