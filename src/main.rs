use anyhow::Result;
use clap::Parser;

use boldtext::cli::{self, Cli};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Cli::parse();
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout().lock();
    cli::run(args, stdin.lock(), &mut stdout)?;
    Ok(())
}
