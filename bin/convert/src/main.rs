use std::io;

use anyhow::Result;
use clap::Parser;
use log::LevelFilter;

mod shell;

use shell::Shell;

#[derive(Parser, Debug)]
#[clap(
    name = "mcform-convert",
    version = "0.1.0",
    about = "Convert colors between 8-bit RGB and Bedrock server form values"
)]
struct Cli {
    #[clap(long, help = "Perform a single conversion and exit instead of looping")]
    once: bool,

    #[clap(long, short, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level_filter = cli.log_level.parse().unwrap_or(LevelFilter::Warn);
    env_logger::Builder::new()
        .filter_level(log_level_filter)
        .init();

    let mut shell = Shell::new(io::stdin().lock(), io::stdout());
    if cli.once {
        shell.run_once()
    } else {
        shell.run()
    }
}
