use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "coverwall", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a collage at full resolution.
    Render(RenderArgs),
    /// Render a scaled-down preview.
    Preview(PreviewArgs),
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Input job JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output image path (.png or .jpg/.jpeg).
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct PreviewArgs {
    /// Input job JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output image path (.png or .jpg/.jpeg).
    #[arg(long)]
    out: PathBuf,

    /// Downscale factor applied to the composed canvas.
    #[arg(long, default_value_t = 0.4)]
    scale: f64,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Preview(args) => cmd_preview(args),
    }
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let composed = compose(&args.in_path)?;
    coverwall::save_canvas(&composed.canvas, &args.out)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_preview(args: PreviewArgs) -> anyhow::Result<()> {
    let composed = compose(&args.in_path)?;
    let preview = coverwall::scale_canvas(&composed.canvas, args.scale)?;
    coverwall::save_canvas(&preview, &args.out)?;
    eprintln!(
        "wrote {} ({}x{} preview of {}x{})",
        args.out.display(),
        preview.width,
        preview.height,
        composed.canvas.width,
        composed.canvas.height
    );
    Ok(())
}

fn read_job(path: &Path) -> anyhow::Result<coverwall::CollageJob> {
    let f = File::open(path).with_context(|| format!("open job '{}'", path.display()))?;
    let r = BufReader::new(f);
    let job: coverwall::CollageJob =
        serde_json::from_reader(r).with_context(|| "parse job JSON")?;
    Ok(job)
}

fn compose(in_path: &Path) -> anyhow::Result<coverwall::ComposedCollage> {
    let job = read_job(in_path)?;
    job.validate()?;

    let root = in_path.parent().unwrap_or_else(|| Path::new("."));

    let font_path = match &job.font_source {
        Some(p) => root.join(p),
        None => coverwall::locate_system_font()
            .context("job has no font_source and no system font was found")?,
    };
    let font_bytes = coverwall::load_font_bytes(&font_path)?;
    let mut shaper = coverwall::TextShaper::from_font_bytes(&font_bytes)?;

    let pairs = coverwall::parse_entries(&job.entries);
    let images = match &job.covers_dir {
        Some(dir) => {
            let provider = coverwall::DirectoryCovers::new(root.join(dir), &job.style);
            coverwall::resolve_covers(&provider, &pairs)
        }
        None => {
            let provider = coverwall::PlaceholderCovers::new(&job.style);
            coverwall::resolve_covers(&provider, &pairs)
        }
    };

    Ok(coverwall::build_collage(
        &pairs,
        &images,
        &mut shaper,
        &job.config,
        &job.style,
    )?)
}
