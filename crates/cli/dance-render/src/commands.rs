use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "dance-render")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity (-v debug, -vv trace). `RUST_LOG` overrides.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Session config JSON (canvas, center, proportions, stroke, fps)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a dance and encode it
    Render(RenderArgs),
    /// Render a single catalog pose to PNG
    Preview(PreviewArgs),
    /// Print the style timing table
    Styles,
    /// List pose ids
    Poses,
    /// Print per-movement frame accounting as JSON
    Plan(PlanArgs),
}

#[derive(Args, Debug, Clone)]
pub struct Canvas {
    #[arg(long)]
    pub width: Option<u32>,

    #[arg(long)]
    pub height: Option<u32>,
}

#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Dance style: "Tap Dance", "Broadway", "Hip Hop", "Contemporary"
    #[arg(short, long)]
    pub style: String,

    /// Movement list JSON; defaults to the style's built-in sequence
    #[arg(short, long)]
    pub movements: Option<PathBuf>,

    #[command(flatten)]
    pub canvas: Canvas,

    #[arg(long)]
    pub fps: Option<u32>,

    /// Export backend: gif or png
    #[arg(short, long, default_value = "gif")]
    pub format: String,

    /// Output file (gif) or directory (png); defaults to a stamped name in ./videos
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct PreviewArgs {
    #[arg(short, long)]
    pub pose: String,

    #[command(flatten)]
    pub canvas: Canvas,

    #[arg(short, long)]
    pub out: PathBuf,
}

#[derive(Args, Debug)]
pub struct PlanArgs {
    #[arg(short, long)]
    pub style: String,

    #[arg(short, long)]
    pub movements: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_render_flags() {
        let cli = Cli::try_parse_from([
            "dance-render",
            "-v",
            "render",
            "--style",
            "Hip Hop",
            "--width",
            "320",
            "--format",
            "png",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 1);
        match cli.command {
            Commands::Render(args) => {
                assert_eq!(args.style, "Hip Hop");
                assert_eq!(args.canvas.width, Some(320));
                assert_eq!(args.canvas.height, None);
                assert_eq!(args.format, "png");
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
