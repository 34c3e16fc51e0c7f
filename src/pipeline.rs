//! Request pipeline: validate the URL, extract the video ID, fetch the
//! transcript, then summarize it.
//!
//! Stages run strictly in order. Validation, ID extraction and transcript
//! retrieval can end the request in [`Stage::Failed`]; summary generation
//! always reaches [`Stage::Done`], carrying its outcome in [`Report::summary`].

use log::info;
use serde::Serialize;

use crate::error::{Failure, PipelineError, SummaryError};
use crate::output::render_text;
use crate::summarize::{TextGenerator, summarize};
use crate::youtube::{TranscriptApi, fetch_transcript};
use crate::{extract_video_id, validate_youtube_url};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Stage {
    Idle,
    Validating,
    ExtractingId,
    FetchingTranscript,
    GeneratingSummary,
    Done,
    Failed,
}

impl Stage {
    /// Progress message shown while the stage runs
    pub fn status(&self) -> Option<&'static str> {
        match self {
            Stage::FetchingTranscript => Some("Extracting transcript..."),
            Stage::GeneratingSummary => Some("Generating AI summary..."),
            Stage::Done => Some("Complete!"),
            _ => None,
        }
    }

    /// Completion percentage reached when the stage starts
    pub fn progress(&self) -> u8 {
        match self {
            Stage::Idle | Stage::Validating | Stage::ExtractingId | Stage::Failed => 0,
            Stage::FetchingTranscript => 33,
            Stage::GeneratingSummary => 66,
            Stage::Done => 100,
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stage::Idle => write!(f, "idle"),
            Stage::Validating => write!(f, "validating"),
            Stage::ExtractingId => write!(f, "extracting-id"),
            Stage::FetchingTranscript => write!(f, "fetching-transcript"),
            Stage::GeneratingSummary => write!(f, "generating-summary"),
            Stage::Done => write!(f, "done"),
            Stage::Failed => write!(f, "failed"),
        }
    }
}

/// Result of a request that reached [`Stage::Done`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub video_id: String,
    pub label: String,
    pub transcript_text: String,
    pub summary: Result<String, SummaryError>,
}

impl Report {
    /// Summary text, or the user-facing message when generation failed
    pub fn summary_text(&self) -> String {
        match &self.summary {
            Ok(text) => text.clone(),
            Err(e) => e.to_string(),
        }
    }
}

pub struct Pipeline<A, G> {
    transcripts: A,
    generator: G,
    languages: Vec<String>,
}

impl<A, G> Pipeline<A, G>
where
    A: TranscriptApi,
    G: TextGenerator,
{
    pub fn new(transcripts: A, generator: G, languages: Vec<String>) -> Self {
        Self {
            transcripts,
            generator,
            languages,
        }
    }

    /// Run one request, reporting each stage transition to `on_stage`
    pub async fn run<F>(&self, input: &str, mut on_stage: F) -> Result<Report, Failure>
    where
        F: FnMut(Stage),
    {
        let result = self.execute(input, &mut on_stage).await;
        match &result {
            Ok(report) => {
                info!("Request for {} done", report.video_id);
                on_stage(Stage::Done);
            }
            Err(failure) => {
                info!("Request failed at {}: {}", failure.stage, failure.error);
                on_stage(Stage::Failed);
            }
        }
        result
    }

    async fn execute<F>(&self, input: &str, on_stage: &mut F) -> Result<Report, Failure>
    where
        F: FnMut(Stage),
    {
        on_stage(Stage::Validating);
        let input = input.trim();
        if input.is_empty() {
            return Err(Failure::new(Stage::Validating, PipelineError::EmptyUrl));
        }
        if !validate_youtube_url(input) {
            return Err(Failure::new(Stage::Validating, PipelineError::InvalidUrl));
        }

        on_stage(Stage::ExtractingId);
        let video_id = extract_video_id(input)
            .ok_or_else(|| Failure::new(Stage::ExtractingId, PipelineError::MissingIdentifier))?;
        info!("Extracted video ID {video_id}");

        on_stage(Stage::FetchingTranscript);
        let transcript = fetch_transcript(&self.transcripts, &video_id, &self.languages)
            .await
            .map_err(|e| Failure::new(Stage::FetchingTranscript, e))?;

        let transcript_text = render_text(&transcript.segments);
        if transcript_text.trim().is_empty() {
            return Err(Failure::new(Stage::FetchingTranscript, PipelineError::EmptyTranscript));
        }
        info!(
            "Fetched {} segments ({} language) for {video_id}",
            transcript.segments.len(),
            transcript.language
        );

        on_stage(Stage::GeneratingSummary);
        let summary = summarize(&self.generator, &transcript_text).await;

        Ok(Report {
            label: transcript.label(),
            video_id,
            transcript_text,
            summary,
        })
    }
}
