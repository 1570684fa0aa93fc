mod config;
mod extract;
mod io;
mod logging;
mod models;

use clap::Parser;
use std::path::Path;

use crate::config::Args;
use crate::extract::extract_to_file;
use crate::models::UrlPatterns;

#[tokio::main]
async fn main() {
    let args = Args::parse();
    logging::init_logging(args.verbose);

    if let Err(err) = run(&args).await {
        eprintln!("linksift error: {:#}", err);
        std::process::exit(1);
    }
}

async fn run(args: &Args) -> anyhow::Result<()> {
    let patterns = UrlPatterns::new();
    tracing::debug!("scanning {}", args.input);

    let count = extract_to_file(
        Path::new(&args.input),
        Path::new(&args.output),
        &patterns,
    )
    .await?;

    println!("Extracted {} URLs", count);
    println!("Saved to: {}", args.output);

    Ok(())
}
