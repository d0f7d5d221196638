use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use float_text::app::run_ui;

#[derive(Parser)]
#[command(name = "float-text")]
#[command(about = "Floating always-on-top text viewer for txt, PDF, and Word documents")]
struct Cli {
    /// Document to load at startup (.txt, .pdf, .docx, .doc)
    file: Option<PathBuf>,

    /// Start with the semi-opaque text background
    #[arg(long)]
    opaque: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    run_ui(cli.file, cli.opaque)?;

    Ok(())
}
