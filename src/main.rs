use std::{env, path::PathBuf};

use anyhow::Context;
use bitmapconvert::ConvertConfig;
use clap::Parser;
use log::info;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Directory holding font.bmp and gfx.bmp.
    /// Defaults to libs/ccleste/data under the project root.
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Path of the generated header. Defaults to bitmap_data.h under the project root.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Turns on debug mode, which writes a preview bitmap and a palette
    /// swatch for each sheet into the current directory
    #[arg(long, default_value_t = false)]
    debug: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let data_dir = args.data_dir.unwrap_or_else(ConvertConfig::default_data_dir);
    let output = args.output.unwrap_or_else(ConvertConfig::default_output_path);
    let mut config = ConvertConfig::from_data_dir(&data_dir, output);
    if args.debug {
        let dir = env::current_dir().context("could not resolve the current directory")?;
        info!("Preview Directory: {}", dir.display());
        config.preview_dir = Some(dir);
    }

    let summary = bitmapconvert::run(&config)?;
    info!(
        "Font {}x{}, gfx {}x{}",
        summary.font.width(),
        summary.font.height(),
        summary.gfx.width(),
        summary.gfx.height()
    );
    for path in &summary.preview_paths {
        info!("Wrote preview {}", path.display());
    }
    info!("Done!");
    Ok(())
}
