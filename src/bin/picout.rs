use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "picout", version)]
struct Cli {
    /// Log debug diagnostics to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the review composite of a session as a PNG.
    Render(RenderArgs),
    /// Load and validate a session without rendering.
    Check(CheckArgs),
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Input session XML.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output PNG path. Defaults to `<base name>.png` next to the input.
    #[arg(long)]
    out: Option<PathBuf>,

    /// PNG used as the left-click marker instead of the built-in one.
    #[arg(long)]
    left_icon: Option<PathBuf>,

    /// PNG used as the right-click marker instead of the built-in one.
    #[arg(long)]
    right_icon: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct CheckArgs {
    /// Input session XML.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Print the session summary as JSON.
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Check(args) => cmd_check(args),
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let input = picout::load_session(&args.in_path)
        .with_context(|| format!("load session '{}'", args.in_path.display()))?;

    let icons = picout::IconSet::from_files(
        args.left_icon.as_deref(),
        args.right_icon.as_deref(),
        &picout::FsImageLoader,
    )?;
    let image = picout::composite_with(&input, &icons)?;

    let out = args
        .out
        .unwrap_or_else(|| picout::default_output_path(&args.in_path));
    picout::save_png(&image, &out)?;

    eprintln!("wrote {}", out.display());
    Ok(())
}

fn cmd_check(args: CheckArgs) -> anyhow::Result<()> {
    let input = picout::Input::from_path(&args.in_path, &picout::FsImageLoader)
        .with_context(|| format!("load session '{}'", args.in_path.display()))?;

    print_summary(&picout::SessionSummary::new(&args.in_path, &input), args.json)?;

    if let Some(err) = picout::validate(&input) {
        anyhow::bail!("invalid session '{}': {err}", args.in_path.display());
    }
    Ok(())
}

fn print_summary(summary: &picout::SessionSummary, json: bool) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(summary).context("serialize session summary")?
        );
        return Ok(());
    }

    println!("document:   {}", summary.document.display());
    let r = summary.frame_rect;
    println!("frame rect: {},{} {}x{}", r.x, r.y, r.width, r.height);
    for (i, s) in summary.sources.iter().enumerate() {
        println!(
            "  [{i}] {}x{} click {:?} at ({}, {})",
            s.size.width, s.size.height, s.click_type, s.click_point.x, s.click_point.y
        );
    }
    if let Some(layout) = &summary.layout {
        println!(
            "canvas:     {}x{} (reference at x={})",
            layout.canvas_size.width, layout.canvas_size.height, layout.full_image_x
        );
    }
    Ok(())
}
