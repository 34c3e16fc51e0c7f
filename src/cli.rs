use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "ytsum",
    about = "Summarize YouTube videos from their caption transcripts",
    version = env!("GIT_DESCRIBE"),
)]
pub struct Cli {
    /// YouTube video URL (reads one line from stdin if omitted)
    pub url: Option<String>,

    /// Preferred caption language; repeat or comma-separate for fallbacks [default: en]
    #[arg(short, long, value_delimiter = ',')]
    pub lang: Vec<String>,

    /// Gemini model for summarization [default: gemini-2.5-flash]
    #[arg(long)]
    pub model: Option<String>,

    /// Write the summary and transcript files to this directory
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Also print the full transcript
    #[arg(short = 't', long)]
    pub show_transcript: bool,

    /// Only check whether the URL is a YouTube URL
    #[arg(long)]
    pub check: bool,

    /// Show video information and progress
    #[arg(short, long)]
    pub verbose: bool,
}
