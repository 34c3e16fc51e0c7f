use thiserror::Error;

use crate::pipeline::Stage;

/// Classified transcript service failure
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TranscriptError {
    #[error("No transcript available for this video. The video may not have captions enabled.")]
    NoTranscriptAvailable,

    #[error("Video is unavailable or private.")]
    VideoUnavailable,

    #[error("Error retrieving transcript: {0}")]
    RetrievalFailed(String),
}

/// Summary generation failure. The display text is what gets shown in place of a summary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SummaryError {
    #[error("Failed to generate summary.")]
    Empty,

    #[error("Error generating summary: {0}")]
    Request(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PipelineError {
    #[error("Please enter a YouTube URL.")]
    EmptyUrl,

    #[error("Please enter a valid YouTube URL.")]
    InvalidUrl,

    #[error("Could not extract video ID from the URL. Please check the URL format.")]
    MissingIdentifier,

    #[error(transparent)]
    Transcript(#[from] TranscriptError),

    #[error("No transcript found for this video.")]
    EmptyTranscript,
}

/// Terminal failure of a request, with the stage it stopped at
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{error}")]
pub struct Failure {
    pub stage: Stage,
    pub error: PipelineError,
}

impl Failure {
    pub fn new(stage: Stage, error: impl Into<PipelineError>) -> Self {
        Self {
            stage,
            error: error.into(),
        }
    }
}
