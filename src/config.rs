use clap::Parser;

// Default paths, matching the no-argument invocation.
pub const DEFAULT_INPUT: &str = "tmp.txt";
pub const DEFAULT_OUTPUT: &str = "urls.txt";

#[derive(Debug, Parser)]
#[command(name = "linksift")]
#[command(about = "Extract http(s) URLs from a text file, one per line")]
pub struct Args {
    /// Input text file to scan
    #[arg(default_value = DEFAULT_INPUT)]
    pub input: String,

    /// Output file for the extracted URLs
    #[arg(short = 'o', long, default_value = DEFAULT_OUTPUT)]
    pub output: String,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
