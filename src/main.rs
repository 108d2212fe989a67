use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use stencil::commands::{check, generate};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "stencil")]
#[command(about = "Markdown fixture corpus generator CLI", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate randomized fixture posts
    Generate {
        /// Number of posts to generate (default: 15)
        #[arg(short, long)]
        count: Option<u32>,

        /// Day of January 2019 the first post is dated with (default: 30)
        #[arg(long)]
        start_day: Option<u32>,

        /// Seed for the random source; the same seed reproduces the same corpus
        #[arg(short, long)]
        seed: Option<u64>,

        /// Output directory (default: current directory)
        #[arg(short, long)]
        out_dir: Option<PathBuf>,

        /// Sentence the title words are drawn from
        #[arg(long)]
        sentence: Option<String>,
    },

    /// Validate fixture posts by parsing their front matter
    Check {
        /// Directory containing the fixture posts (default: current directory)
        #[arg(short, long)]
        dir: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            count,
            start_day,
            seed,
            out_dir,
            sentence,
        } => generate::execute(count, start_day, seed, out_dir, sentence),
        Commands::Check { dir } => check::execute(dir),
    }
}
