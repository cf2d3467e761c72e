use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use lunette::{ICON_SIZES, IconRenderer, write_icon};

/// Generates the crescent-moon extension icon set as PNG files.
#[derive(Debug, Parser)]
#[command(name = "lunette", version)]
struct Args {
    /// Directory the PNG files are written to (created if absent).
    #[arg(long, default_value = "icons")]
    out_dir: PathBuf,
}

fn run(args: &Args) -> anyhow::Result<()> {
    std::fs::create_dir_all(&args.out_dir).with_context(|| {
        format!(
            "failed to create output directory {}",
            args.out_dir.display()
        )
    })?;

    let renderer = IconRenderer::new();
    let mut failures = 0usize;
    for size in ICON_SIZES {
        // Sizes are independent: keep going so one bad write doesn't cost
        // the rest of the set.
        match write_icon(&renderer, size, &args.out_dir) {
            Ok(path) => println!("wrote {size}x{size} icon to {}", path.display()),
            Err(err) => {
                eprintln!("error: {:#}", anyhow::Error::new(err));
                failures += 1;
            }
        }
    }

    if failures > 0 {
        anyhow::bail!("{failures} of {} icons could not be written", ICON_SIZES.len());
    }
    println!("icon set complete in {}", args.out_dir.display());
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    if let Err(err) = run(&args) {
        eprintln!("error: {err:#}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
