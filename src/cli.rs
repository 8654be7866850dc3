use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "templater", version)]
#[command(
    about = "Insert a content file into template.html at <!-- REPLACEME --> and write presentation.html",
    long_about = None
)]
pub struct Cli {
    /// File whose text replaces the marker
    pub content_file: PathBuf,
}
