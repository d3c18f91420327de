use clap::{Parser, ValueEnum};

/// Immediate-mode geometry batching demo.
#[derive(Parser, Debug)]
#[command(name = "quadbatch", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Log level override (debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Graphics backend to drive.
    #[arg(long, value_enum, default_value_t = BackendKind::Recording)]
    pub backend: BackendKind,

    /// Number of demo frames to render.
    #[arg(short = 'n', long, default_value_t = 3)]
    pub frames: u32,

    /// Render every flush once per eye.
    #[arg(long)]
    pub stereo: bool,

    /// Print the effective configuration as JSON and exit.
    #[arg(long)]
    pub print_config: bool,

    /// Write the effective configuration to this path and exit.
    #[arg(long)]
    pub save_config: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BackendKind {
    /// In-memory command recorder, no GPU needed.
    Recording,
    /// Headless wgpu renderer.
    Wgpu,
}

pub fn parse() -> Args {
    Args::parse()
}
