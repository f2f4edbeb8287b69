use std::{path::PathBuf, process::ExitCode};

use anyhow::Context as _;
use clap::Parser;

/// Render the built-in scene with the software rasterizer and save it as a
/// PNG. Prints nothing on success.
#[derive(Parser, Debug)]
#[command(name = "softframe", version)]
struct Cli {
    /// Output PNG path (truncated if it already exists).
    out: PathBuf,

    /// Image width in pixels (above zero).
    width: u32,

    /// Image height in pixels (above zero).
    height: u32,
}

fn main() -> ExitCode {
    if let Err(err) = run(Cli::parse()) {
        // One diagnostic line per failure; `:#` folds the cause chain in.
        eprintln!("error: {err:#}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn run(cli: Cli) -> anyhow::Result<()> {
    if cli.width == 0 || cli.height == 0 {
        anyhow::bail!("<width> and <height> must be above-zero integers");
    }

    let frame = softframe::render_scene(cli.width, cli.height)?;
    softframe::save_png(&cli.out, &frame)
        .with_context(|| format!("write png '{}'", cli.out.display()))?;

    Ok(())
}
