use std::path::{Path, PathBuf};

use eyre::Result;
use log::debug;

use crate::Segment;
use crate::pipeline::Report;

pub const TEXT_MIME: &str = "text/plain";

/// Render segments as plain text (one segment per line, no timestamps)
pub fn render_text(segments: &[Segment]) -> String {
    segments.iter().map(|s| s.text.as_str()).collect::<Vec<_>>().join("\n")
}

/// A downloadable result file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub file_name: String,
    pub mime: &'static str,
    pub contents: String,
}

pub fn summary_file_name(video_id: &str) -> String {
    format!("youtube_summary_{video_id}.txt")
}

pub fn transcript_file_name(video_id: &str) -> String {
    format!("youtube_transcript_{video_id}.txt")
}

/// The summary and transcript files for a completed request
pub fn artifacts(report: &Report) -> [Artifact; 2] {
    [
        Artifact {
            file_name: summary_file_name(&report.video_id),
            mime: TEXT_MIME,
            contents: report.summary_text(),
        },
        Artifact {
            file_name: transcript_file_name(&report.video_id),
            mime: TEXT_MIME,
            contents: report.transcript_text.clone(),
        },
    ]
}

/// Write both artifacts into `dir`, creating it if needed
pub fn write_artifacts(dir: &Path, report: &Report) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir)?;
    let mut written = Vec::new();
    for artifact in artifacts(report) {
        let path = dir.join(&artifact.file_name);
        std::fs::write(&path, &artifact.contents)?;
        debug!("Wrote {} ({})", path.display(), artifact.mime);
        written.push(path);
    }
    Ok(written)
}
