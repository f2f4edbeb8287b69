use std::process::ExitCode;

use anyhow::Context as _;
use clap::Parser;
use nanorand::WyRand;

/// Damage a byte stream to test error correction: copy stdin to stdout,
/// corrupting each byte with the given independent probability.
#[derive(Parser, Debug)]
#[command(name = "pipenoise", version)]
struct Cli {
    /// Per-byte corruption probability; values outside [0, 1] saturate.
    #[arg(default_value_t = softframe::DEFAULT_PROBABILITY, allow_negative_numbers = true)]
    probability: f32,
}

fn main() -> ExitCode {
    if let Err(err) = run(Cli::parse()) {
        eprintln!("error: {err:#}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let cfg = softframe::NoiseConfig::new(cli.probability);
    let mut rng = WyRand::new();

    let stdin = std::io::stdin().lock();
    let stdout = std::io::stdout().lock();
    softframe::run_filter(stdin, stdout, cfg, &mut rng).context("pump stdin to stdout")?;

    Ok(())
}
