mod cli;
mod scene;

use std::path::Path;

use quadbatch_common::{BackendError, Color, QuadbatchError};
use quadbatch_config::QuadbatchConfig;
use quadbatch_core::{BatchContext, BatchSettings, GraphicsBackend, RecordingBackend};
use quadbatch_renderer::WgpuBackend;
use tracing_subscriber::EnvFilter;

use cli::{Args, BackendKind};

fn main() {
    let args = cli::parse();

    // Config is loaded before logging so its level can seed the filter;
    // a load failure is reported once the subscriber is up.
    let (config, config_error) = match load_config(&args) {
        Ok(config) => (config, None),
        Err(e) => (QuadbatchConfig::default(), Some(e)),
    };

    let log_directive = args
        .log_level
        .clone()
        .unwrap_or_else(|| config.logging.level.directive().to_string());
    let mut filter = EnvFilter::from_default_env();
    if let Ok(directive) = log_directive
        .parse()
        .or_else(|_| config.logging.level.directive().parse())
    {
        filter = filter.add_directive(directive);
    }
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!("quadbatch v{} starting...", env!("CARGO_PKG_VERSION"));
    if let Some(e) = config_error {
        tracing::warn!("Config load failed, using defaults: {e}");
    }

    if let Err(e) = run(&args, config) {
        tracing::error!("{e}");
        std::process::exit(1);
    }
    tracing::info!("Shutdown complete");
}

fn load_config(args: &Args) -> Result<QuadbatchConfig, quadbatch_common::ConfigError> {
    match args.config {
        Some(ref path) => quadbatch_config::load_config_from(Path::new(path)),
        None => quadbatch_config::load_config(),
    }
}

fn run(args: &Args, config: QuadbatchConfig) -> Result<(), QuadbatchError> {
    if args.print_config {
        println!("{}", quadbatch_config::config_to_json(&config));
        return Ok(());
    }
    if let Some(ref path) = args.save_config {
        quadbatch_config::save_config_to_path(&config, Path::new(path))?;
        tracing::info!("Config written to {path}");
        return Ok(());
    }

    let mut settings = BatchSettings::from(&config);
    settings.stereo_enabled |= args.stereo;
    tracing::info!(
        buffer_elements = settings.buffer_elements,
        buffer_count = settings.buffer_count,
        draw_calls = settings.draw_calls,
        stereo = settings.stereo_enabled,
        "batch settings resolved"
    );

    match args.backend {
        BackendKind::Recording => {
            let backend = render(RecordingBackend::new(), settings, args.frames);
            tracing::info!(
                commands = backend.commands().len(),
                draws = backend.draws().len(),
                "recording backend finished"
            );
        }
        BackendKind::Wgpu => {
            let (width, height) = (settings.framebuffer_width, settings.framebuffer_height);
            let mut wgpu = WgpuBackend::headless(width, height).map_err(BackendError::from)?;
            let background = Color::from_rgba(18, 18, 24, 255);
            wgpu.clear(background);

            let backend = render(wgpu, settings, args.frames);
            let pixels = backend.read_pixels().map_err(BackendError::from)?;
            let covered = pixels
                .chunks_exact(4)
                .filter(|px| *px != background.to_array().as_slice())
                .count();
            tracing::info!(width, height, covered, "offscreen target read back");
        }
    }
    Ok(())
}

fn render<B: GraphicsBackend>(backend: B, settings: BatchSettings, frames: u32) -> B {
    let mut ctx = BatchContext::new(backend, settings);
    let checker = scene::load_checker(&mut ctx);

    for frame in 0..frames {
        scene::draw_frame(&mut ctx, checker, frame);
        tracing::debug!(frame, "frame submitted");
    }

    let stats = ctx.stats();
    tracing::info!(
        frames,
        flushes = stats.flushes,
        draw_calls = stats.draw_calls_issued,
        vertices = stats.vertices_uploaded,
        dropped = stats.dropped_vertices,
        rejected = stats.rejected_calls,
        "render finished"
    );

    ctx.unload_texture(checker);
    ctx.close()
}
