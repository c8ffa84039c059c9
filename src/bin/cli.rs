// src/bin/cli.rs
use icon_seed::cli;

fn main() -> color_eyre::Result<()> {
    cli::run()
}
