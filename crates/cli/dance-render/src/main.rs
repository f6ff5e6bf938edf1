//! dance-render: command-line host for the dance animation core.
//!
//! ```bash
//! dance-render render --style "Hip Hop"                # ./videos/dance_gif_hip-hop_<stamp>.gif
//! dance-render render --style tap -m moves.json -f png -o frames/
//! dance-render preview --pose heels_click -o heels.png
//! dance-render styles
//! ```

mod commands;

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use dance_animation_core::{
    builtin_sequence, parse_movements_json, Animator, Config, DanceStyle, Movement, POSE_IDS,
};
use dance_export_core::{output_file_name, VideoBackend};
use tracing_subscriber::EnvFilter;

use crate::commands::{Canvas, Cli, Commands, PlanArgs, PreviewArgs, RenderArgs};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e:#}");
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let cfg = load_config(cli.config.as_deref())?;
    match cli.command {
        Commands::Render(args) => run_render(cfg, &args),
        Commands::Preview(args) => run_preview(cfg, &args),
        Commands::Styles => {
            print_styles();
            Ok(())
        }
        Commands::Poses => {
            for id in POSE_IDS {
                println!("{id}");
            }
            Ok(())
        }
        Commands::Plan(args) => run_plan(cfg, &args),
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    let Some(path) = path else {
        return Ok(Config::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("failed to parse config {}", path.display()))
}

fn apply_canvas(mut cfg: Config, canvas: &Canvas) -> Config {
    if let Some(w) = canvas.width {
        cfg.width = w;
    }
    if let Some(h) = canvas.height {
        cfg.height = h;
    }
    cfg
}

fn load_movements(path: Option<&Path>, style: DanceStyle) -> Result<Vec<Movement>> {
    match path {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read movements {}", path.display()))?;
            parse_movements_json(&text)
                .with_context(|| format!("invalid movements in {}", path.display()))
        }
        None => Ok(builtin_sequence(style).movements.clone()),
    }
}

/// Local wall-clock stamp for generated file names, `YYYYmmdd_HHMMSS`.
fn stamp() -> String {
    chrono::Local::now().format("%Y%m%d_%H%M%S").to_string()
}

fn run_render(cfg: Config, args: &RenderArgs) -> Result<()> {
    let style = DanceStyle::from_name(&args.style)?;
    let mut cfg = apply_canvas(cfg, &args.canvas);
    if let Some(fps) = args.fps {
        cfg = cfg.with_fps(fps);
    }
    let movements = load_movements(args.movements.as_deref(), style)?;
    let anim = Animator::new(cfg);

    let frames = anim.create_animation(&movements, style)?;
    tracing::info!(
        style = %style,
        frames = frames.len(),
        seconds = anim.duration_secs(frames.len()),
        "animation built"
    );

    let backend = VideoBackend::from_name(&args.format)?.with_fps(anim.config().fps);
    let out = match &args.out {
        Some(out) => out.clone(),
        None => {
            let dir = PathBuf::from("videos");
            fs::create_dir_all(&dir).context("failed to create videos directory")?;
            dir.join(output_file_name(&backend, style, &stamp()))
        }
    };
    let written = backend.encode(&frames, &out)?;
    println!("{}", written.display());
    Ok(())
}

fn run_preview(cfg: Config, args: &PreviewArgs) -> Result<()> {
    let anim = Animator::new(apply_canvas(cfg, &args.canvas));
    let frame = anim.preview(&args.pose)?;
    frame
        .image()
        .save(&args.out)
        .with_context(|| format!("failed to write {}", args.out.display()))?;
    println!("{}", args.out.display());
    Ok(())
}

fn run_plan(cfg: Config, args: &PlanArgs) -> Result<()> {
    let style = DanceStyle::from_name(&args.style)?;
    let movements = load_movements(args.movements.as_deref(), style)?;
    let plan = Animator::new(cfg).plan(&movements, style)?;
    println!("{}", serde_json::to_string_pretty(&plan)?);
    Ok(())
}

fn print_styles() {
    println!(
        "{:<14} {:>10} {:>6} {:>6}  easing",
        "style", "frames/beat", "hold", "speed"
    );
    for style in DanceStyle::ALL {
        let t = style.timing();
        println!(
            "{:<14} {:>10} {:>6} {:>6.1}  {}",
            style.display_name(),
            t.frames_per_unit,
            t.hold_frames,
            t.speed_multiplier,
            t.easing
        );
    }
}
